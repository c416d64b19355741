pub mod aggregate;

pub use aggregate::{SalesManager, SalesManagerId};
