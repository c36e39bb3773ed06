//! `urlsift --probe`: print archive links for endpoints that are not alive.

use anyhow::Result;
use std::io::{self, BufReader};
use std::sync::Arc;
use urlsift_core::config::SiftConfig;
use urlsift_core::pipeline::{run_probe, RunOptions, Sifter};
use urlsift_core::probe::{CurlProbe, ProbeRunner};

use super::{ignore_broken_pipe, warn_if_no_piped_input};

pub async fn run_probe_mode(cfg: &SiftConfig, options: RunOptions) -> Result<()> {
    warn_if_no_piped_input();
    let mut sifter = Sifter::new(cfg, options);
    let probe = Arc::new(CurlProbe::new(&cfg.probe));
    let mut runner = ProbeRunner::new(probe, cfg.probe.max_in_flight);
    tracing::debug!(
        max_in_flight = cfg.probe.max_in_flight,
        method = ?cfg.probe.method,
        "probe mode"
    );

    // Read on a separate thread by `run_probe`; `StdinLock` cannot move there.
    let stdin = BufReader::new(io::stdin());
    // Unbuffered: archive links should appear as probes finish.
    let mut stdout = io::stdout().lock();
    ignore_broken_pipe(
        run_probe(
            &mut sifter,
            stdin,
            &mut stdout,
            &mut runner,
            &cfg.probe.archive_prefix,
        )
        .await,
    )?;
    Ok(())
}
