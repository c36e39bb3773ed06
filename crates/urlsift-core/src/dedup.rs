//! Intra-run duplicate suppression.
//!
//! Keys accumulate for the whole run and are never evicted, so memory grows
//! with the number of distinct endpoints seen.

use std::collections::HashSet;

/// Dedup key for clean mode: rendered target, then a NUL, then the sorted,
/// `&`-joined query parameter names. Parameter values do not matter;
/// parameter sets do.
/// Without parameters the key is the target itself.
pub fn dedup_key(rendered: &str, query_keys: &[String]) -> String {
    if query_keys.is_empty() {
        return rendered.to_string();
    }
    let mut key = String::with_capacity(rendered.len() + 1 + query_keys.len() * 8);
    key.push_str(rendered);
    key.push('\0');
    key.push_str(&query_keys.join("&"));
    key
}

/// Set of keys already processed in this run.
#[derive(Debug, Default)]
pub struct DedupGate {
    seen: HashSet<String>,
}

impl DedupGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// False if `unique` is on and `key` was already recorded. Never mutates.
    pub fn should_process(&self, key: &str, unique: bool) -> bool {
        !(unique && self.seen.contains(key))
    }

    /// Records `key` as processed.
    pub fn record(&mut self, key: impl Into<String>) {
        self.seen.insert(key.into());
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
