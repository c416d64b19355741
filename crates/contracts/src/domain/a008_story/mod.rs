pub mod aggregate;

pub use aggregate::{Story, StoryId, StoryStatus};
