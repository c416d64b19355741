pub mod aggregate;

pub use aggregate::{Buyer, BuyerId};
