//! libcurl-backed liveness probe.

use std::time::Duration;

use super::outcome::{outcome_for_status, ProbeFailure, ProbeOutcome};
use super::LivenessProbe;
use crate::config::{ProbeConfig, ProbeMethod};

const USER_AGENT: &str = concat!("urlsift/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: u32 = 10;

/// Issues a HEAD (or body-discarding GET) per URL. Runs in the calling
/// thread; the probe runner moves calls onto the blocking pool.
#[derive(Debug, Clone)]
pub struct CurlProbe {
    method: ProbeMethod,
    follow_redirects: bool,
    connect_timeout: Duration,
    timeout: Duration,
}

impl CurlProbe {
    pub fn new(cfg: &ProbeConfig) -> Self {
        Self {
            method: cfg.method,
            follow_redirects: cfg.follow_redirects,
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs.max(1)),
            timeout: Duration::from_secs(cfg.timeout_secs.max(1)),
        }
    }

    fn fetch_status(&self, url: &str) -> Result<u32, curl::Error> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        match self.method {
            ProbeMethod::Head => easy.nobody(true)?,
            ProbeMethod::Get => easy.get(true)?,
        }
        easy.follow_location(self.follow_redirects)?;
        easy.max_redirections(MAX_REDIRECTS)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        easy.useragent(USER_AGENT)?;

        {
            let mut transfer = easy.transfer();
            // Bodies are irrelevant; only the status matters.
            transfer.write_function(|data| Ok(data.len()))?;
            transfer.perform()?;
        }

        easy.response_code()
    }
}

impl LivenessProbe for CurlProbe {
    fn check(&self, url: &str) -> ProbeOutcome {
        match self.fetch_status(url) {
            Ok(code) => outcome_for_status(code),
            Err(e) => {
                tracing::debug!(url, error = %e, "probe transport failure");
                ProbeOutcome::Error(ProbeFailure::from(&e))
            }
        }
    }
}
