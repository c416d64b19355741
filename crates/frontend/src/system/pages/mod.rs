pub mod role_select;
