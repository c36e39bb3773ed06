//! CLI for urlsift.

mod commands;

use anyhow::{Context, Result};
use clap::{ArgAction, ArgGroup, Parser};
use std::path::PathBuf;
use urlsift_core::config::{self, SiftConfig};
use urlsift_core::logging;
use urlsift_core::pipeline::{Mode, RunOptions};

use commands::{run_clean_mode, run_probe_mode};

/// Reads URLs from stdin and keeps only the interesting endpoints.
#[derive(Debug, Parser)]
#[command(name = "urlsift")]
#[command(about = "urlsift: filter noisy endpoints out of URL lists", long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["clean", "probe"])))]
pub struct Cli {
    /// Print cleaned URLs of endpoints that are not static assets or content-addressed files.
    #[arg(long)]
    pub clean: bool,

    /// Probe endpoints and print an archive link for each one that is not alive.
    #[arg(long, visible_alias = "wbfetcher")]
    pub probe: bool,

    /// Skip endpoints already processed in this run.
    #[arg(long, default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    pub unique: bool,

    /// Report parse failures and a run summary on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Format string rendered for dedup and classification (default "%p").
    #[arg(short, long, value_name = "FORMAT")]
    pub target: Option<String>,

    /// Probes in flight at once (probe mode).
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Per-request probe timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// TOML file overriding built-in lists and probe settings.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append diagnostics to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.init_logging();

        let cfg = cli.resolve_config()?;
        tracing::debug!("resolved config: {:?}", cfg);

        let options = RunOptions {
            unique: cli.unique,
            verbose: cli.verbose,
        };

        match cli.mode() {
            Mode::Clean => run_clean_mode(&cfg, options)?,
            Mode::Probe => run_probe_mode(&cfg, options).await?,
        }

        Ok(())
    }

    pub fn mode(&self) -> Mode {
        if self.probe {
            Mode::Probe
        } else {
            Mode::Clean
        }
    }

    fn init_logging(&self) {
        match &self.log_file {
            Some(path) => {
                if let Err(e) = logging::init_logging_file(path, self.verbose) {
                    eprintln!(
                        "urlsift: could not log to {} ({e:#}); using stderr",
                        path.display()
                    );
                    logging::init_logging(self.verbose);
                }
            }
            None => logging::init_logging(self.verbose),
        }
    }

    /// Built-in defaults, then the optional config file, then flags.
    pub fn resolve_config(&self) -> Result<SiftConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from(path).context("load config")?,
            None => SiftConfig::default(),
        };
        if let Some(target) = &self.target {
            cfg.target_format = target.clone();
        }
        if let Some(jobs) = self.jobs {
            cfg.probe.max_in_flight = jobs.max(1);
        }
        if let Some(timeout) = self.timeout {
            cfg.probe.timeout_secs = timeout;
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests;
