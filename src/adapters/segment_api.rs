use async_trait::async_trait;

use crate::adapters::client::ApiClient;
use crate::domain::model::{Segment, SegmentList};
use crate::domain::ports::SegmentRepository;
use crate::utils::error::Result;

/// [`SegmentRepository`] bound to the live REST endpoints.
#[derive(Debug)]
pub struct SegmentApi {
    client: ApiClient,
}

impl SegmentApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SegmentRepository for SegmentApi {
    async fn list(&self) -> Result<SegmentList> {
        self.client.get("/segments").await
    }

    async fn find(&self, id: &str) -> Result<Segment> {
        self.client.get(&format!("/segments/{}", id)).await
    }
}
