use crate::domain::model::{Segment, SegmentList};
use crate::domain::ports::SegmentRepository;
use crate::utils::error::Result;

/// Verbs for the segments resource, forwarded to a [`SegmentRepository`].
#[derive(Debug)]
pub struct SegmentService<R: SegmentRepository> {
    repository: R,
}

impl<R: SegmentRepository> SegmentService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<SegmentList> {
        self.repository.list().await
    }

    pub async fn find(&self, id: &str) -> Result<Segment> {
        self.repository.find(id).await
    }
}
