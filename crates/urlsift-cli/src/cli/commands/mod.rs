//! Mode handlers. Each mode is in its own file.

mod clean;
mod probe;

pub use clean::run_clean_mode;
pub use probe::run_probe_mode;

use std::io::{self, IsTerminal};
use urlsift_core::SiftError;

/// Warn when stdin is an interactive terminal; reading continues regardless.
fn warn_if_no_piped_input() {
    if io::stdin().is_terminal() {
        tracing::warn!("no input detected; reading URLs from the terminal");
    }
}

/// A closed stdout (e.g. `| head`) ends the run normally.
fn ignore_broken_pipe<T: Default>(res: Result<T, SiftError>) -> anyhow::Result<T> {
    match res {
        Err(SiftError::Output(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed; stopping");
            Ok(T::default())
        }
        other => Ok(other?),
    }
}
