use crate::file_upload::interface::{UploadError, UploadedFile};
use std::path::Path;
use std::sync::Arc;

/// Sniffs the content type and admits the file only if it is one of `accepted`.
pub fn accept_file(
    name: &str,
    bytes: Arc<[u8]>,
    accepted: &[String],
) -> Result<UploadedFile, UploadError> {
    let mime = tree_magic_mini::from_u8(&bytes);

    if !accepted.iter().any(|a| a == mime) {
        return Err(UploadError::InvalidType {
            name: name.to_string(),
            mime: mime.to_string(),
        });
    }

    Ok(UploadedFile {
        name: name.to_string(),
        mime: mime.to_string(),
        bytes,
    })
}

pub fn read_file(path: &Path, accepted: &[String]) -> Result<UploadedFile, UploadError> {
    let bytes = std::fs::read(path).map_err(|source| UploadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    accept_file(&name, Arc::from(bytes), accepted)
}
