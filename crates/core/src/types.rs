use serde::de::DeserializeOwned;
use serde::Serialize;

/// All backend record identifiers are numeric and backend-assigned.
pub type RecordId = i64;

/// A record shape served by one backend collection endpoint.
///
/// Implementors bind a wire-format record type to the path segment of
/// the collection that serves it (e.g. `GalleryItems` for
/// `/api/GalleryItems`).
pub trait Resource: Serialize + DeserializeOwned {
    /// Path segment of the backend collection serving this record type.
    const COLLECTION: &'static str;
}
