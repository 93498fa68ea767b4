use crate::domain::model::{
    Contact, ContactIdentifier, ContactList, ContactListParams, PageParams, User,
};
use crate::domain::ports::ContactRepository;
use crate::utils::error::Result;

/// Verbs for the contacts resource, forwarded to a [`ContactRepository`].
///
/// The service adds ergonomic parameter shapes (find-by-id vs
/// find-by-user-id, list filters) and nothing else: no retries, no error
/// interpretation.
#[derive(Debug)]
pub struct ContactService<R: ContactRepository> {
    repository: R,
}

impl<R: ContactRepository> ContactService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Look up a contact by the identifier the remote system assigned.
    pub async fn find_by_id(&self, id: &str) -> Result<Contact> {
        self.repository
            .find(ContactIdentifier::Id(id.to_string()))
            .await
    }

    /// Look up a contact by the caller-supplied external identifier.
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Contact> {
        self.repository
            .find(ContactIdentifier::UserId(user_id.to_string()))
            .await
    }

    pub async fn list(&self, params: PageParams) -> Result<ContactList> {
        self.repository.list(ContactListParams::from(params)).await
    }

    pub async fn list_by_email(&self, email: &str, params: PageParams) -> Result<ContactList> {
        self.repository
            .list(ContactListParams {
                email: Some(email.to_string()),
                ..ContactListParams::from(params)
            })
            .await
    }

    pub async fn list_by_segment(&self, segment_id: &str, params: PageParams) -> Result<ContactList> {
        self.repository
            .list(ContactListParams {
                segment_id: Some(segment_id.to_string()),
                ..ContactListParams::from(params)
            })
            .await
    }

    pub async fn list_by_tag(&self, tag_id: &str, params: PageParams) -> Result<ContactList> {
        self.repository
            .list(ContactListParams {
                tag_id: Some(tag_id.to_string()),
                ..ContactListParams::from(params)
            })
            .await
    }

    /// Export-style traversal of all contacts. Pass an empty string to start
    /// and feed each returned cursor back in until the page comes back empty.
    pub async fn scroll(&self, scroll_param: &str) -> Result<ContactList> {
        self.repository.scroll(scroll_param).await
    }

    pub async fn create(&self, contact: &Contact) -> Result<Contact> {
        self.repository.create(contact).await
    }

    pub async fn update(&self, contact: &Contact) -> Result<Contact> {
        self.repository.update(contact).await
    }

    /// Promote a contact into a full user identity.
    pub async fn convert(&self, contact: &Contact, user: &User) -> Result<User> {
        self.repository.convert(contact, user).await
    }

    /// Delete a contact; the result is the last-known state echoed by the
    /// API, not an empty acknowledgment.
    pub async fn delete(&self, contact: &Contact) -> Result<Contact> {
        self.repository
            .delete(contact.id.as_deref().unwrap_or_default())
            .await
    }
}
