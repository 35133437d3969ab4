use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

#[derive(Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    FilesChanged(Vec<UploadedFile>),
    FileRemoved,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("File is of invalid type: {name} ({mime})")]
    InvalidType { name: String, mime: String },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dropped file {0} has no readable contents")]
    Unreadable(String),
}
