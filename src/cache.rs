//! # cache
//!
//! Directory listing cache

use std::collections::HashMap;

/// Process-local memo of previously fetched directory listings, keyed by
/// canonical url string. Cleared whenever an operation that could mutate
/// share contents begins; no per-entry expiry, no cross-instance sharing.
///
/// An absent entry is distinguishable from a cached empty listing.
#[derive(Debug, Default)]
pub struct DirCache {
    entries: HashMap<String, Vec<String>>,
}

impl DirCache {
    pub fn lookup(&self, path: &str) -> Option<&[String]> {
        self.entries.get(path).map(Vec::as_slice)
    }

    /// Overwrites any existing entry for `path`
    pub fn store(&mut self, path: impl Into<String>, names: Vec<String>) {
        self.entries.insert(path.into(), names);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
