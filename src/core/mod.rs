pub mod contact;
pub mod segment;
pub mod tag;

pub use contact::ContactService;
pub use segment::SegmentService;
pub use tag::TagService;

pub use crate::domain::ports::{ContactRepository, SegmentRepository, TagRepository};
pub use crate::utils::error::Result;
