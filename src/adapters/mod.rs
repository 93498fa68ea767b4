// Adapters layer: the reqwest-backed transport and one repository
// implementation per resource.

pub mod client;
pub mod contact_api;
pub mod segment_api;
pub mod tag_api;

pub use client::ApiClient;
pub use contact_api::ContactApi;
pub use segment_api::SegmentApi;
pub use tag_api::TagApi;

use crate::config::ClientConfig;
use crate::core::{ContactService, SegmentService, TagService};
use crate::utils::error::Result;

/// Entry point bundling one service per resource, all sharing a transport.
#[derive(Debug)]
pub struct Intercom {
    pub contacts: ContactService<ContactApi>,
    pub segments: SegmentService<SegmentApi>,
    pub tags: TagService<TagApi>,
}

impl Intercom {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = ApiClient::new(config)?;
        Ok(Self {
            contacts: ContactService::new(ContactApi::new(client.clone())),
            segments: SegmentService::new(SegmentApi::new(client.clone())),
            tags: TagService::new(TagApi::new(client)),
        })
    }

    /// Build from `INTERCOM_ACCESS_TOKEN` / `INTERCOM_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }
}
