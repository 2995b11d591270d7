//! Gallery item record shape.

use serde::{Deserialize, Serialize};

use crate::types::{RecordId, Resource};

/// Media kind of a gallery item.
///
/// Serialized as the lowercase `type` field on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A single entry in the sightings gallery.
///
/// `id` is backend-assigned: absent until the record has been created,
/// authoritative afterwards. `duration` is only meaningful for video
/// entries and is omitted from the wire format when unset. `date` and
/// `duration` are opaque strings whose format the backend owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    pub thumbnail: String,
    pub date: String,
    pub location: String,
    pub views: i64,
    pub likes: i64,
    pub tags: String,
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl Resource for GalleryItem {
    const COLLECTION: &'static str = "GalleryItems";
}
