//! Endpoint classification: decides whether a rendered path is noise.
//!
//! Checks run per `/` segment on the value with its extension removed:
//! UUIDs, content hashes, then blacklisted path fragments, then the
//! blacklisted extension list. The first match wins the reported reason.

mod clean;
mod content;

pub use clean::clean_output;
pub use content::{is_content_hash, is_uuid, SHA256_HEX_LEN};

use std::fmt;

use crate::config::ClassifyConfig;
use crate::url_model::split_extension;

/// Why a value was suppressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    Uuid,
    ContentHash,
    /// Blacklisted path fragment that matched.
    BlacklistedSubstring(String),
    /// Blacklisted extension entry that matched.
    BlacklistedExtension(String),
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Uuid => write!(f, "is-uuid"),
            Reason::ContentHash => write!(f, "is-content-hash"),
            Reason::BlacklistedSubstring(s) => write!(f, "matches-blacklisted-substring {:?}", s),
            Reason::BlacklistedExtension(e) => write!(f, "matches-blacklisted-extension {:?}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    Suppress(Reason),
}

impl Verdict {
    pub fn is_keep(&self) -> bool {
        matches!(self, Verdict::Keep)
    }
}

/// Suppression rules built from [`ClassifyConfig`].
#[derive(Debug, Clone)]
pub struct Classifier {
    path_fragments: Vec<String>,
    extensions: Vec<String>,
    hash_min_len: usize,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&ClassifyConfig::default())
    }
}

impl Classifier {
    /// Empty list entries are dropped (they would match everything).
    pub fn new(cfg: &ClassifyConfig) -> Self {
        Self {
            path_fragments: non_empty(&cfg.path_fragments),
            extensions: non_empty(&cfg.extensions),
            hash_min_len: cfg.hash_min_len.clamp(1, SHA256_HEX_LEN),
        }
    }

    /// Classifies a rendered path-like value.
    pub fn classify(&self, rendered: &str) -> Verdict {
        let (stem, extension) = split_extension(rendered);
        self.classify_parts(stem, extension)
    }

    /// Classifies a value already split into stem and extension (with dot).
    pub fn classify_parts(&self, stem: &str, extension: &str) -> Verdict {
        if stem.split('/').any(is_uuid) {
            return Verdict::Suppress(Reason::Uuid);
        }
        if stem
            .split('/')
            .any(|segment| is_content_hash(segment, self.hash_min_len))
        {
            return Verdict::Suppress(Reason::ContentHash);
        }
        if let Some(fragment) = self
            .path_fragments
            .iter()
            .find(|f| stem.contains(f.as_str()))
        {
            return Verdict::Suppress(Reason::BlacklistedSubstring(fragment.clone()));
        }
        if let Some(entry) = self
            .extensions
            .iter()
            .find(|e| extension.contains(e.as_str()))
        {
            return Verdict::Suppress(Reason::BlacklistedExtension(entry.clone()));
        }
        Verdict::Keep
    }
}

fn non_empty(list: &[String]) -> Vec<String> {
    list.iter().filter(|s| !s.is_empty()).cloned().collect()
}
