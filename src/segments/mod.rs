//! Segment geometry: polar-line projection onto the frame rectangle,
//! length ranking, and aggregation into a single line-center estimate.

pub mod projector;
pub mod segment;
pub mod selector;

pub use projector::project;
pub use segment::Segment;
pub use selector::{select_center, steering_error};
