//! Secret payload upload/fetch over any [`ContentStore`].
//!
//! Payloads arrive here already encrypted; this layer only wraps them
//! as a single named file and moves them to and from the network.

use crate::store::{Cid, ContentStore, StorageError, StoredFile};

/// File name used when the caller does not supply one.
pub const DEFAULT_SECRET_FILENAME: &str = "secret.txt";

/// Submit `payload` as a single named file.
///
/// Returns the identifier the network assigned, unmodified.
pub async fn upload<S>(
    store: &S,
    payload: &str,
    filename: Option<&str>,
) -> Result<Cid, StorageError>
where
    S: ContentStore + ?Sized,
{
    let name = filename.unwrap_or(DEFAULT_SECRET_FILENAME);
    tracing::debug!(name, "Uploading secret payload");

    store.put(vec![StoredFile::new(name, payload)]).await
}

/// Retrieve the file stored under `cid` whose name matches `filename`.
///
/// Fails with [`StorageError::NoResponse`] when the network has
/// nothing for the identifier, and with [`StorageError::FileNotFound`]
/// when the result set lacks the requested name.
pub async fn fetch<S>(
    store: &S,
    cid: &Cid,
    filename: Option<&str>,
) -> Result<String, StorageError>
where
    S: ContentStore + ?Sized,
{
    let name = filename.unwrap_or(DEFAULT_SECRET_FILENAME);

    let files = store
        .get(cid)
        .await?
        .ok_or_else(|| StorageError::NoResponse { cid: cid.clone() })?;

    files
        .into_iter()
        .find(|file| file.name == name)
        .map(|file| file.content)
        .ok_or_else(|| StorageError::FileNotFound {
            name: name.to_string(),
        })
}
