use async_trait::async_trait;

use crate::adapters::client::ApiClient;
use crate::domain::model::{Tag, TagList, TaggingList};
use crate::domain::ports::TagRepository;
use crate::utils::error::Result;

/// [`TagRepository`] bound to the live REST endpoints.
#[derive(Debug)]
pub struct TagApi {
    client: ApiClient,
}

impl TagApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TagRepository for TagApi {
    async fn list(&self) -> Result<TagList> {
        self.client.get("/tags").await
    }

    async fn save(&self, tag: &Tag) -> Result<Tag> {
        self.client.post("/tags", tag).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete_discard(&format!("/tags/{}", id)).await
    }

    // Batch tagging shares the tags route; the body distinguishes it.
    async fn tag(&self, tagging_list: &TaggingList) -> Result<Tag> {
        self.client.post("/tags", tagging_list).await
    }
}
