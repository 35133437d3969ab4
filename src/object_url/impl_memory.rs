use crate::library::logger::interface::Logger;
use crate::object_url::interface::{Blob, ObjectUrl, ObjectUrlStore};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

pub struct ObjectUrlStoreMemory {
    blobs: Mutex<HashMap<ObjectUrl, Blob>>,
    next_id: AtomicU64,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ObjectUrlStoreMemory {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            blobs: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            logger: logger.with_namespace("object_url"),
        }
    }
}

impl ObjectUrlStore for ObjectUrlStoreMemory {
    fn create(&self, blob: Blob) -> ObjectUrl {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let url = ObjectUrl(format!("blob:image-identifier/{}", id));

        self.logger.debug(&format!("Created {} ({:?})", url, blob));

        self.blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url.clone(), blob);

        url
    }

    fn resolve(&self, url: &ObjectUrl) -> Option<Blob> {
        self.blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(url)
            .cloned()
    }

    fn revoke(&self, url: &ObjectUrl) -> bool {
        let removed = self
            .blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(url)
            .is_some();

        if removed {
            self.logger.debug(&format!("Revoked {}", url));
        } else {
            self.logger.warn(&format!("Revoke of unknown {}", url));
        }

        removed
    }

    fn live_count(&self) -> usize {
        self.blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
