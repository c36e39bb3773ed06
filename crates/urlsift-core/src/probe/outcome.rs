//! Classify HTTP status and curl errors into probe outcomes.

use std::fmt;

/// Why a probe could not confirm a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connect or whole-request timeout.
    Timeout,
    /// DNS, refused connection, reset, empty reply.
    Connection,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Result of one liveness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Final status was 2xx.
    Alive(u32),
    /// Final status was anything else, redirects included.
    Dead(u32),
    /// No status: transport error or timeout.
    Error(ProbeFailure),
}

impl ProbeOutcome {
    pub fn is_alive(&self) -> bool {
        matches!(self, ProbeOutcome::Alive(_))
    }

    /// Dead endpoints and unconfirmed ones both get an archive link.
    pub fn needs_archive(&self) -> bool {
        !self.is_alive()
    }
}

/// Classify a final HTTP status code.
pub fn outcome_for_status(code: u32) -> ProbeOutcome {
    if (200..300).contains(&code) {
        ProbeOutcome::Alive(code)
    } else {
        ProbeOutcome::Dead(code)
    }
}

/// Classify a curl error.
pub fn classify_curl_error(e: &curl::Error) -> FailureKind {
    if e.is_operation_timedout() {
        return FailureKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return FailureKind::Connection;
    }
    FailureKind::Other
}

impl From<&curl::Error> for ProbeFailure {
    fn from(e: &curl::Error) -> Self {
        Self {
            kind: classify_curl_error(e),
            message: e.to_string(),
        }
    }
}
