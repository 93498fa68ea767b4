use async_trait::async_trait;
use serde::Serialize;

use crate::adapters::client::ApiClient;
use crate::domain::model::{Contact, ContactIdentifier, ContactList, ContactListParams, User};
use crate::domain::ports::ContactRepository;
use crate::utils::error::Result;

/// [`ContactRepository`] bound to the live REST endpoints.
#[derive(Debug)]
pub struct ContactApi {
    client: ApiClient,
}

impl ContactApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

/// Body of the convert call, pairing the lead with the identity it becomes.
#[derive(Serialize)]
struct ConvertRequest<'a> {
    contact: &'a Contact,
    user: &'a User,
}

#[async_trait]
impl ContactRepository for ContactApi {
    async fn find(&self, identifier: ContactIdentifier) -> Result<Contact> {
        match identifier {
            ContactIdentifier::Id(id) => self.client.get(&format!("/contacts/{}", id)).await,
            // External-id lookups go through the query string, never the path.
            ContactIdentifier::UserId(user_id) => {
                self.client
                    .get_query("/contacts", &[("external_id", user_id.as_str())])
                    .await
            }
        }
    }

    async fn list(&self, params: ContactListParams) -> Result<ContactList> {
        self.client.get_query("/contacts", &params).await
    }

    async fn scroll(&self, scroll_param: &str) -> Result<ContactList> {
        if scroll_param.is_empty() {
            self.client.get("/contacts/scroll").await
        } else {
            self.client
                .get_query("/contacts/scroll", &[("scroll_param", scroll_param)])
                .await
        }
    }

    async fn create(&self, contact: &Contact) -> Result<Contact> {
        self.client.post("/contacts", contact).await
    }

    // The API upserts on identifiers, so update posts to the same route as
    // create.
    async fn update(&self, contact: &Contact) -> Result<Contact> {
        self.client.post("/contacts", contact).await
    }

    async fn convert(&self, contact: &Contact, user: &User) -> Result<User> {
        self.client
            .post("/contacts/convert", &ConvertRequest { contact, user })
            .await
    }

    async fn delete(&self, id: &str) -> Result<Contact> {
        self.client.delete(&format!("/contacts/{}", id)).await
    }
}
