//! Shared record types for the Chronicle archive backend.
//!
//! Defines the wire-format record shapes for the three backend
//! collections (gallery, research, timeline) and the
//! [`Resource`](types::Resource) trait binding each shape to its
//! collection path.

pub mod gallery;
pub mod research;
pub mod timeline;
pub mod types;
