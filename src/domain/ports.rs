use async_trait::async_trait;

use crate::domain::model::{
    Contact, ContactIdentifier, ContactList, ContactListParams, Segment, SegmentList, Tag, TagList,
    TaggingList, User,
};
use crate::utils::error::Result;

/// Transport seam for the contacts resource. Implementations perform the
/// actual HTTP request/response marshaling; callers go through
/// [`ContactService`](crate::core::ContactService).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn find(&self, identifier: ContactIdentifier) -> Result<Contact>;
    async fn list(&self, params: ContactListParams) -> Result<ContactList>;
    /// Export-style traversal; an empty cursor starts from the beginning.
    async fn scroll(&self, scroll_param: &str) -> Result<ContactList>;
    async fn create(&self, contact: &Contact) -> Result<Contact>;
    async fn update(&self, contact: &Contact) -> Result<Contact>;
    async fn convert(&self, contact: &Contact, user: &User) -> Result<User>;
    /// The API echoes the last-known state of the deleted contact.
    async fn delete(&self, id: &str) -> Result<Contact>;
}

/// Transport seam for the segments resource.
#[async_trait]
pub trait SegmentRepository: Send + Sync {
    async fn list(&self) -> Result<SegmentList>;
    async fn find(&self, id: &str) -> Result<Segment>;
}

/// Transport seam for the tags resource.
#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn list(&self) -> Result<TagList>;
    async fn save(&self, tag: &Tag) -> Result<Tag>;
    async fn delete(&self, id: &str) -> Result<()>;
    async fn tag(&self, tagging_list: &TaggingList) -> Result<Tag>;
}
