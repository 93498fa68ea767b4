use serde::{Deserialize, Serialize};

/// Location details the API resolved for a contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// The type of object - location.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub country: String,
    /// A subdivision of the country (state, province, county, territory).
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub city: String,
}

/// A social profile associated to a contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialProfile {
    /// The type of object - social_profile.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// The list wrapper the API nests social profiles inside.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialProfileList {
    /// The type of object - list.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub data: Vec<SocialProfile>,
}
