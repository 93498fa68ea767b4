use serde::{Deserialize, Serialize};

/// The API never embeds more than this many references in an
/// `AddressableList`; `has_more` signals the rest must be fetched via `url`.
pub const ADDRESSABLE_LIST_MAX: usize = 10;

/// A lightweight reference linking a company, note, tag or segment to a
/// contact without embedding the full object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Addressable {
    /// The type of object - company, note, tag.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub id: String,
    /// Where the full object can be fetched (ie. /companies/45678).
    #[serde(default)]
    pub url: String,
}

/// A capped list of [`Addressable`] references plus the URL of the full list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressableList {
    /// The type of object - list.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// At most [`ADDRESSABLE_LIST_MAX`] entries.
    #[serde(default)]
    pub data: Vec<Addressable>,
    /// Where the full list can be fetched (ie. /contacts/1234/companies).
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub total_count: i64,
    /// True when `total_count` exceeds the embedded entries; use `url` to
    /// fetch the remainder.
    #[serde(default)]
    pub has_more: bool,
}
