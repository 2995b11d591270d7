//! Research item record shape.

use serde::{Deserialize, Serialize};

use crate::types::{RecordId, Resource};

/// A catalogued research source.
///
/// The classification (`kind`, serialized as `type`) and `reliability`
/// are free-text values owned by the backend; the client does not
/// constrain them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub source: String,
    pub date: String,
    pub verified: bool,
    pub reliability: String,
    pub notes: String,
    pub citations: String,
    pub tags: String,
}

impl Resource for ResearchItem {
    const COLLECTION: &'static str = "ResearchItems";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_uses_type_field() {
        let item = ResearchItem {
            id: Some(3),
            title: "County archive clipping, 1974".to_string(),
            kind: "newspaper".to_string(),
            source: "Hollowbrook Gazette".to_string(),
            date: "1974-06-12".to_string(),
            verified: true,
            reliability: "high".to_string(),
            notes: "Microfilm scan, page 4.".to_string(),
            citations: "Gazette archive roll 112".to_string(),
            tags: "archive,1974".to_string(),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "newspaper");
        assert_eq!(json["id"], 3);
        assert!(json.get("kind").is_none());

        let parsed: ResearchItem = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, item);
    }
}
