use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::model::addressable::{Addressable, AddressableList};

/// A tag within the workspace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A list of tags, as returned by the tags index endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// Batch tagging request: apply (or remove) a named tag across users and
/// companies in one call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaggingList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<Tagging>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub companies: Vec<Tagging>,
}

/// One target of a [`TaggingList`], identified by any one identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tagging {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Set to true to remove the tag instead of applying it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub untag: Option<bool>,
}

impl Tag {
    /// Project into the reference form used when a tag is embedded in a
    /// contact payload. Detail fields are dropped.
    pub fn addressable(&self) -> Addressable {
        let id = self.id.clone().unwrap_or_default();
        Addressable {
            kind: "tag".to_string(),
            url: format!("tags/{}", id),
            id,
        }
    }
}

impl TagList {
    /// Reference list scoped to a parent contact. The whole list is already
    /// in memory, so `has_more` is always false.
    pub fn addressable_list(&self, contact_id: &str) -> AddressableList {
        let data: Vec<Addressable> = self.tags.iter().map(Tag::addressable).collect();
        AddressableList {
            kind: "list".to_string(),
            url: format!("/contacts/{}/tags", contact_id),
            total_count: data.len() as i64,
            has_more: false,
            data,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[intercom] tag {{ id: {} name: {} }}",
            self.id.as_deref().unwrap_or(""),
            self.name.as_deref().unwrap_or("")
        )
    }
}
