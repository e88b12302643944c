//! Scroll listener registration with guaranteed release.
//!
//! A listener is live exactly as long as its `ListenerGuard` is. Dropping the
//! guard (explicitly on unmount, or implicitly when its owner goes away)
//! removes the registration, so remounting never accumulates stale handlers.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::debug;

/// Identifier handed out for each registration.
pub type ListenerId = u64;

#[derive(Debug, Default)]
struct RegistryInner {
    next_id: AtomicU64,
    live: Mutex<BTreeSet<ListenerId>>,
}

/// Set of live scroll listeners.
#[derive(Debug, Clone, Default)]
pub struct ScrollListenerRegistry {
    inner: Arc<RegistryInner>,
}

impl ScrollListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new listener. The registration lasts until the guard drops.
    pub fn subscribe(&self) -> ListenerGuard {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut live) = self.inner.live.lock() {
            live.insert(id);
        }
        debug!(listener = id, "scroll listener registered");
        ListenerGuard {
            id,
            registry: Arc::clone(&self.inner),
        }
    }

    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.inner
            .live
            .lock()
            .map(|live| live.contains(&id))
            .unwrap_or(false)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.live.lock().map(|live| live.len()).unwrap_or(0)
    }
}

/// Keeps a scroll listener registered; deregisters it on drop.
#[derive(Debug)]
pub struct ListenerGuard {
    id: ListenerId,
    registry: Arc<RegistryInner>,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Ok(mut live) = self.registry.live.lock() {
            live.remove(&self.id);
        }
        debug!(listener = self.id, "scroll listener released");
    }
}
