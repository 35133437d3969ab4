use std::fmt;
use std::sync::Arc;

/// A process-local reference to in-memory bytes, addressable until revoked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectUrl(pub String);

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone)]
pub struct Blob {
    pub bytes: Arc<[u8]>,
    pub mime: String,
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blob")
            .field("len", &self.bytes.len())
            .field("mime", &self.mime)
            .finish()
    }
}

pub trait ObjectUrlStore: Send + Sync {
    fn create(&self, blob: Blob) -> ObjectUrl;
    fn resolve(&self, url: &ObjectUrl) -> Option<Blob>;
    /// Returns false when the url was never created or is already revoked.
    fn revoke(&self, url: &ObjectUrl) -> bool;
    fn live_count(&self) -> usize;
}
