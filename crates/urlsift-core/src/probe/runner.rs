//! Bounded in-flight probe runner.
//!
//! Keeps up to `max_in_flight` probes running on the blocking pool; results
//! come back in completion order, not submission order.

use std::sync::Arc;
use tokio::task::JoinSet;

use super::outcome::ProbeOutcome;
use super::LivenessProbe;

/// A finished probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub url: String,
    pub outcome: ProbeOutcome,
}

pub struct ProbeRunner {
    probe: Arc<dyn LivenessProbe>,
    max_in_flight: usize,
    join_set: JoinSet<ProbeResult>,
}

impl ProbeRunner {
    pub fn new(probe: Arc<dyn LivenessProbe>, max_in_flight: usize) -> Self {
        Self {
            probe,
            max_in_flight: max_in_flight.max(1),
            join_set: JoinSet::new(),
        }
    }

    pub fn in_flight(&self) -> usize {
        self.join_set.len()
    }

    /// True while another probe may start without exceeding the bound.
    pub fn has_room(&self) -> bool {
        self.join_set.len() < self.max_in_flight
    }

    /// Starts a probe for `url` on the blocking pool. Callers check
    /// [`has_room`](Self::has_room) first; the runner does not queue.
    pub fn start(&mut self, url: String) {
        debug_assert!(self.has_room());
        let probe = Arc::clone(&self.probe);
        self.join_set.spawn_blocking(move || {
            let outcome = probe.check(&url);
            ProbeResult { url, outcome }
        });
    }

    /// Waits for the next probe to finish. `None` once nothing is in flight.
    /// Probes whose task panicked are logged and skipped.
    pub async fn next_finished(&mut self) -> Option<ProbeResult> {
        while let Some(res) = self.join_set.join_next().await {
            match res {
                Ok(result) => return Some(result),
                Err(e) => tracing::warn!("probe task join: {}", e),
            }
        }
        None
    }
}
