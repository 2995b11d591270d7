//! Content-addressed storage for encrypted archive payloads.
//!
//! [`store::ContentStore`] abstracts a decentralized storage network
//! behind two operations: submit named files, and retrieve them by
//! content identifier.  [`vault`] builds the secret upload/fetch flow
//! on top of any conforming store.  Payload encryption happens before
//! this layer; everything here treats content as opaque text.

pub mod http;
pub mod memory;
pub mod store;
pub mod vault;
