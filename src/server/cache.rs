//! The response cache.

/// A cached response: the exact raw URL that produced it and the text body.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The raw URL acting as the cache key. The query string is part of the
    /// key, so `/x?a=1` and `/x?a=2` are distinct entries.
    pub url: String,
    /// The text body produced by the handler.
    pub response: String,
}

/// A cache of handler responses keyed by raw URL.
///
/// Entries live for the remainder of the server process and are never
/// updated or evicted; serving stale data after the underlying handler state
/// changes is an accepted property. Lookup scans in insertion order and the
/// first match wins; storing a URL that is already present is ignored, so
/// the first stored body stays observable forever.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: Vec<CacheEntry>,
}

impl ResponseCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the cached body for an exact raw URL.
    pub fn lookup(&self, raw_url: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.url == raw_url)
            .map(|entry| entry.response.as_str())
    }

    /// Store a response body under a raw URL. First write wins: a URL that
    /// already has an entry is left untouched.
    pub fn store(&mut self, raw_url: impl Into<String>, response: impl Into<String>) {
        let url = raw_url.into();
        if self.lookup(&url).is_some() {
            return;
        }
        self.entries.push(CacheEntry {
            url,
            response: response.into(),
        });
    }

    /// The number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discard every cached entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
