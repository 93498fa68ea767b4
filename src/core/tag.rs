use crate::domain::model::{Tag, TagList, TaggingList};
use crate::domain::ports::TagRepository;
use crate::utils::error::Result;

/// Verbs for the tags resource, forwarded to a [`TagRepository`].
#[derive(Debug)]
pub struct TagService<R: TagRepository> {
    repository: R,
}

impl<R: TagRepository> TagService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<TagList> {
        self.repository.list().await
    }

    /// Create a tag, or rename it when `id` is set.
    pub async fn save(&self, tag: &Tag) -> Result<Tag> {
        self.repository.save(tag).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.repository.delete(id).await
    }

    /// Apply (or remove) a named tag across the users and companies in the
    /// tagging list; returns the canonical tag.
    pub async fn tag(&self, tagging_list: &TaggingList) -> Result<Tag> {
        self.repository.tag(tagging_list).await
    }
}
