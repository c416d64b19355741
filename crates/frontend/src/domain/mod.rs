pub mod a001_brand;
pub mod a002_buyer;
pub mod a003_sales_manager;
pub mod a004_product;
pub mod a005_resource;
pub mod a006_order;
pub mod a007_event;
pub mod a008_story;
