pub mod aggregate;

pub use aggregate::{EventStatus, ShowroomEvent, ShowroomEventId};
