//! Typed async client for the Intercom REST API.
//!
//! Resource models (contacts, tags, segments) are plain serde structs
//! matching the wire contract; each resource gets a Service exposing the
//! API's verbs and a Repository trait the transport plugs into. The bundled
//! reqwest transport is the only I/O in the crate — swap in any
//! `ContactRepository`/`TagRepository`/`SegmentRepository` implementation
//! to test or to route calls differently.
//!
//! ```no_run
//! use intercom::{ClientConfig, Intercom, PageParams};
//!
//! #[tokio::main]
//! async fn main() -> intercom::Result<()> {
//!     let client = Intercom::new(ClientConfig::new("my-access-token"))?;
//!
//!     let contact = client.contacts.find_by_id("5ba682d23d7cf92bef87bfd4").await?;
//!     println!("{}", contact);
//!
//!     let page = client.contacts.list(PageParams::page(1, 50)).await?;
//!     println!("{} of {} contacts", page.contacts.len(), page.total_count);
//!
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{ApiClient, ContactApi, Intercom, SegmentApi, TagApi};
pub use config::ClientConfig;
pub use core::{ContactService, SegmentService, TagService};
pub use domain::model::{
    Addressable, AddressableList, Contact, ContactIdentifier, ContactList, ContactListParams,
    CustomAttribute, Location, MessageAddress, PageCursor, PageParams, Segment, SegmentList,
    SocialProfile, SocialProfileList, Tag, TagList, Tagging, TaggingList, User,
    ADDRESSABLE_LIST_MAX,
};
pub use domain::ports::{ContactRepository, SegmentRepository, TagRepository};
pub use utils::error::{IntercomError, Result};
pub use utils::logger::init_logger;
