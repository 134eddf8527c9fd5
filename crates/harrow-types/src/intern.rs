//! Deduplication cache for canonical string payloads.
//!
//! The engine owns one interner per runtime and passes it into value
//! construction. Keeping the cache an explicit instance (rather than a
//! process-wide static) lets every test start from an empty cache and lets
//! the host control the cache's lifecycle.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

/// Default per-entry size cap, in bytes. Strings longer than this are never
/// cached.
pub const DEFAULT_MAX_ENTRY_LEN: usize = 4096;

/// Shared cache of canonical strings, keyed by content.
///
/// Entries at or below the per-entry cap are deduplicated to a single shared
/// `Arc<str>`; longer strings are always freshly allocated and never
/// inserted. Interning affects only storage sharing, never equality: two
/// values with the same canonical string compare equal whether or not either
/// was cached.
///
/// The map only grows; eviction policy is the host's concern. [`clear`] and
/// [`len`] are provided so the host can implement its own.
///
/// [`clear`]: ValueInterner::clear
/// [`len`]: ValueInterner::len
#[derive(Debug)]
pub struct ValueInterner {
    entries: Mutex<HashSet<Arc<str>>>,
    max_entry_len: usize,
}

impl Default for ValueInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueInterner {
    /// Create an empty interner with the default per-entry cap.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_entry_len(DEFAULT_MAX_ENTRY_LEN)
    }

    /// Create an empty interner with a custom per-entry cap.
    #[must_use]
    pub fn with_max_entry_len(max_entry_len: usize) -> Self {
        Self {
            entries: Mutex::new(HashSet::new()),
            max_entry_len,
        }
    }

    /// Resolve a canonical string to a (possibly shared) `Arc<str>`.
    ///
    /// Below-cap strings hit or populate the cache; above-cap strings are
    /// returned as fresh allocations without touching it.
    pub fn resolve(&self, canonical: String) -> Arc<str> {
        if canonical.len() > self.max_entry_len {
            debug!(
                len = canonical.len(),
                cap = self.max_entry_len,
                "intern skip: entry over cap"
            );
            return Arc::from(canonical);
        }
        let mut entries = self.entries.lock();
        if let Some(existing) = entries.get(canonical.as_str()) {
            debug!(key = %canonical, "intern hit");
            return Arc::clone(existing);
        }
        let shared: Arc<str> = Arc::from(canonical);
        entries.insert(Arc::clone(&shared));
        debug!(key = %shared, "intern miss: inserted");
        shared
    }

    /// The per-entry size cap, in bytes.
    pub const fn max_entry_len(&self) -> usize {
        self.max_entry_len
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drop all cached entries. Outstanding `Arc`s stay valid; subsequent
    /// resolves repopulate the cache.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}
