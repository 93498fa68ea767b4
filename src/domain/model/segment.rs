use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::model::addressable::{Addressable, AddressableList};

/// A segment: a named group of contacts matching saved filter criteria.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    /// Whether the segment applies to users or leads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_type: Option<String>,
}

/// A list of segments, as returned by the segments index endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<Segment>,
}

impl Segment {
    pub fn addressable(&self) -> Addressable {
        let id = self.id.clone().unwrap_or_default();
        Addressable {
            kind: "segment".to_string(),
            url: format!("segments/{}", id),
            id,
        }
    }
}

impl SegmentList {
    /// Reference list scoped to a parent contact; `has_more` is always false
    /// because the source list is fully materialized.
    pub fn addressable_list(&self, contact_id: &str) -> AddressableList {
        let data: Vec<Addressable> = self.segments.iter().map(Segment::addressable).collect();
        AddressableList {
            kind: "list".to_string(),
            url: format!("/contacts/{}/segments", contact_id),
            total_count: data.len() as i64,
            has_more: false,
            data,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[intercom] segment {{ id: {}, type: {} }}",
            self.id.as_deref().unwrap_or(""),
            self.person_type.as_deref().unwrap_or("")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addressable_conversion() {
        let segment = Segment {
            id: Some("56".to_string()),
            name: Some("Active".to_string()),
            ..Segment::default()
        };
        let a = segment.addressable();
        assert_eq!(a.kind, "segment");
        assert_eq!(a.url, "segments/56");
    }

    #[test]
    fn test_addressable_list_covers_whole_source() {
        let list = SegmentList {
            segments: vec![
                Segment {
                    id: Some("1".to_string()),
                    ..Segment::default()
                },
                Segment {
                    id: Some("2".to_string()),
                    ..Segment::default()
                },
            ],
        };
        let addressable = list.addressable_list("c9");
        assert_eq!(addressable.data.len(), 2);
        assert_eq!(addressable.url, "/contacts/c9/segments");
        assert!(!addressable.has_more);
    }

    #[test]
    fn test_decode_preserves_timestamps() {
        let segment: Segment = serde_json::from_str(
            r#"{"id":"56","name":"Active","created_at":1389913941,"updated_at":1399913941,"person_type":"user"}"#,
        )
        .unwrap();
        assert_eq!(segment.created_at, Some(1389913941));
        assert_eq!(segment.person_type.as_deref(), Some("user"));
    }
}
