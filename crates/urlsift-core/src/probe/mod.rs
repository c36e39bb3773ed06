//! Liveness probing of surviving endpoints.
//!
//! The probe is a trait so tests (and alternative transports) can swap in
//! their own; [`CurlProbe`] is the libcurl implementation. Endpoints not
//! confirmed alive are reported as archive links.

mod curl_probe;
mod outcome;
mod runner;

pub use curl_probe::CurlProbe;
pub use outcome::{
    classify_curl_error, outcome_for_status, FailureKind, ProbeFailure, ProbeOutcome,
};
pub use runner::{ProbeResult, ProbeRunner};

/// Reachability check for a single URL. Implementations block.
pub trait LivenessProbe: Send + Sync {
    fn check(&self, url: &str) -> ProbeOutcome;
}

/// Archive snapshot link: `prefix` followed by the URL verbatim.
pub fn archive_url(prefix: &str, url: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + url.len());
    out.push_str(prefix);
    out.push_str(url);
    out
}
