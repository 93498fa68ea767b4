use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::model::addressable::AddressableList;
use crate::domain::model::location::{Location, SocialProfileList};
use crate::domain::model::page::PageParams;

/// A contact (user or lead) within the workspace.
///
/// Not every field is writeable; the API ignores server-assigned fields on
/// create/update. Fields absent from a response stay `None`, and `None`
/// fields are stripped from outgoing payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// The type of object - contact.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Unique identifier assigned by the remote system; immutable once set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    /// The identifier supplied by the caller's own system; `external_id` on
    /// the wire.
    #[serde(rename = "external_id", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// The role of the contact - user or lead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Admin assigned account ownership of the contact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_profiles: Option<SocialProfileList>,
    // The three mail flags are always present on the wire.
    #[serde(default)]
    pub has_hard_bounced: bool,
    #[serde(default)]
    pub marked_email_as_spam: bool,
    #[serde(default)]
    pub unsubscribed_from_emails: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_up_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_replied_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contacted_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_email_opened_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_email_clicked_at: Option<i64>,
    /// Preferred language for the Messenger, overriding browser settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_override: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_app_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_app_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_device: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_os_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_sdk_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_last_seen_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_app_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_app_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_device: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_os_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_sdk_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_last_seen_at: Option<i64>,
    /// Free-form attributes set by the caller; arbitrary JSON scalars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_attributes: Option<HashMap<String, CustomAttribute>>,
    /// Tags on the contact, as a paginated reference list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<AddressableList>,
    /// Notes on the contact, as a paginated reference list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<AddressableList>,
    /// Companies the contact belongs to, as a paginated reference list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companies: Option<AddressableList>,
}

/// A single JSON-scalar custom attribute value.
///
/// Keeps the distinction between "zero" and "absent" at the map level; the
/// value itself may still be an explicit null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomAttribute {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl From<&str> for CustomAttribute {
    fn from(value: &str) -> Self {
        CustomAttribute::String(value.to_string())
    }
}

impl From<f64> for CustomAttribute {
    fn from(value: f64) -> Self {
        CustomAttribute::Number(value)
    }
}

impl From<bool> for CustomAttribute {
    fn from(value: bool) -> Self {
        CustomAttribute::Bool(value)
    }
}

/// A page of contacts plus paging metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactList {
    #[serde(rename = "data", default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub pages: PageParams,
    #[serde(default)]
    pub total_count: i64,
}

/// Disjoint lookup key for a contact: the remote system's own identifier or
/// the caller-supplied external one. The two resolve through different
/// lookups even when the raw strings are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactIdentifier {
    Id(String),
    UserId(String),
}

/// Query parameters for the contacts index endpoint: paging fields plus
/// optional filters. `None` fields are left out of the query string, so a
/// filtered and an unfiltered list differ only in the filter parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<PageParams> for ContactListParams {
    fn from(params: PageParams) -> Self {
        Self {
            page: params.page,
            per_page: params.per_page,
            starting_after: params.starting_after,
            ..Self::default()
        }
    }
}

/// The address used to direct a message at this contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageAddress {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Contact {
    /// The address to use when messaging this contact.
    pub fn message_address(&self) -> MessageAddress {
        MessageAddress {
            kind: Some("contact".to_string()),
            id: self.id.clone(),
            email: self.email.clone(),
            user_id: self.user_id.clone(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[intercom] contact {{ id: {} name: {}, user_id: {}, email: {} }}",
            self.id.as_deref().unwrap_or(""),
            self.name.as_deref().unwrap_or(""),
            self.user_id.as_deref().unwrap_or(""),
            self.email.as_deref().unwrap_or("")
        )
    }
}
