//! `urlsift --clean`: print cleaned URLs of interesting endpoints.

use anyhow::Result;
use std::io::{self, BufWriter};
use urlsift_core::config::SiftConfig;
use urlsift_core::pipeline::{run_clean, RunOptions, Sifter};

use super::{ignore_broken_pipe, warn_if_no_piped_input};

pub fn run_clean_mode(cfg: &SiftConfig, options: RunOptions) -> Result<()> {
    warn_if_no_piped_input();
    let mut sifter = Sifter::new(cfg, options);
    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());
    ignore_broken_pipe(run_clean(&mut sifter, stdin, &mut stdout))?;
    Ok(())
}
