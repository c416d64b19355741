pub mod aggregate;

pub use aggregate::{Resource, ResourceId};
