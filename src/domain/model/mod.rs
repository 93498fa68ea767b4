pub mod addressable;
pub mod contact;
pub mod location;
pub mod page;
pub mod segment;
pub mod tag;
pub mod user;

pub use addressable::{Addressable, AddressableList, ADDRESSABLE_LIST_MAX};
pub use contact::{
    Contact, ContactIdentifier, ContactList, ContactListParams, CustomAttribute, MessageAddress,
};
pub use location::{Location, SocialProfile, SocialProfileList};
pub use page::{PageCursor, PageParams};
pub use segment::{Segment, SegmentList};
pub use tag::{Tag, TagList, Tagging, TaggingList};
pub use user::User;
