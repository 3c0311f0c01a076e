pub mod path;
pub mod segment;

pub use path::{Path, SnapResult};
pub use segment::Segment;
