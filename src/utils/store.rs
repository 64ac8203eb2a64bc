use std::path::Path;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::core::library::{LibraryError, LibraryResult};

// creates the store file holding an empty collection when it does not exist yet
pub(crate) async fn create_store(path: &Path) -> LibraryResult<()> {
    if tokio::fs::try_exists(path).await? {
        return Ok(());
    }
    tracing::info!(path = %path.display(), "creating empty store");
    tokio::fs::write(path, "[]").await?;
    Ok(())
}

// loads the whole collection, creating the store first when needed
pub(crate) async fn read_records<T: DeserializeOwned>(path: &Path) -> LibraryResult<Vec<T>> {
    create_store(path).await?;
    let contents = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(contents.as_str()).map_err(|err| {
        LibraryError::database(format!("failed to parse store {} due to {}",
                                       path.display(), err).as_str(), Some("CorruptStore".to_string()))
    })
}

// rewrites the whole collection, pretty printed with two space indentation
pub(crate) async fn write_records<T: Serialize>(path: &Path, records: &[T]) -> LibraryResult<()> {
    let contents = serde_json::to_string_pretty(records)?;
    tokio::fs::write(path, contents).await?;
    Ok(())
}
