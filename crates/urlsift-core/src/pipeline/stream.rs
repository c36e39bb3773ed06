//! Stream drivers: read lines until EOF or a read error, write results.

use std::io::{self, BufRead, Write};
use std::thread;

use tokio::sync::mpsc;

use super::{RunStats, Sifter};
use crate::error::{Result, SiftError};
use crate::probe::{archive_url, ProbeOutcome, ProbeResult, ProbeRunner};
use crate::url_model::DomainResolver;

/// Reads one line without its `\n` or `\r\n`. Invalid UTF-8 is replaced
/// rather than failing the whole stream.
fn next_line<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Clean mode over a whole stream. A read error ends the run (reported, not
/// returned); only output failures are errors.
pub fn run_clean<D, R, W>(sifter: &mut Sifter<D>, mut input: R, out: &mut W) -> Result<RunStats>
where
    D: DomainResolver,
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    loop {
        let line = match next_line(&mut input, &mut buf) {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("{}", SiftError::Input(e));
                break;
            }
        };
        sifter.count_line();
        if let Some(cleaned) = sifter.clean_line(&line) {
            writeln!(out, "{}", cleaned).map_err(SiftError::Output)?;
        }
    }
    out.flush().map_err(SiftError::Output)?;

    log_summary(&sifter.stats(), sifter.seen());
    Ok(sifter.stats())
}

/// Lines buffered between the reader thread and the probe loop.
const LINE_QUEUE: usize = 64;

/// Reads lines on a dedicated thread so finished probes can be reported
/// while the producer is idle. The thread stops after EOF, the first read
/// error, or when the receiver is dropped.
fn spawn_line_reader<R>(mut input: R) -> Result<mpsc::Receiver<io::Result<String>>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_QUEUE);
    thread::Builder::new()
        .name("urlsift-input".into())
        .spawn(move || {
            let mut buf = Vec::new();
            loop {
                let next = match next_line(&mut input, &mut buf) {
                    Ok(Some(line)) => Ok(line),
                    Ok(None) => break,
                    Err(e) => Err(e),
                };
                let failed = next.is_err();
                if tx.blocking_send(next).is_err() || failed {
                    break;
                }
            }
        })
        .map_err(SiftError::Input)?;
    Ok(rx)
}

/// Probe mode over a whole stream. Archive links are written as each probe
/// finishes, independent of input arrival; in-flight probes are drained
/// after EOF before returning.
pub async fn run_probe<D, R, W>(
    sifter: &mut Sifter<D>,
    input: R,
    out: &mut W,
    runner: &mut ProbeRunner,
    archive_prefix: &str,
) -> Result<RunStats>
where
    D: DomainResolver,
    R: BufRead + Send + 'static,
    W: Write,
{
    let mut lines = spawn_line_reader(input)?;
    let mut input_open = true;

    while input_open || runner.in_flight() > 0 {
        tokio::select! {
            next = lines.recv(), if input_open && runner.has_room() => match next {
                Some(Ok(line)) => {
                    sifter.count_line();
                    if let Some(url) = sifter.probe_line(&line) {
                        runner.start(url);
                    }
                }
                Some(Err(e)) => {
                    tracing::error!("{}", SiftError::Input(e));
                    input_open = false;
                }
                None => input_open = false,
            },
            finished = runner.next_finished(), if runner.in_flight() > 0 => {
                if let Some(result) = finished {
                    report(sifter, out, archive_prefix, &result)?;
                }
            }
        }
    }

    log_summary(&sifter.stats(), sifter.seen());
    Ok(sifter.stats())
}

fn report<D, W>(
    sifter: &mut Sifter<D>,
    out: &mut W,
    archive_prefix: &str,
    result: &ProbeResult,
) -> Result<()>
where
    D: DomainResolver,
    W: Write,
{
    match &result.outcome {
        ProbeOutcome::Alive(code) => {
            tracing::debug!(url = %result.url, code, "alive");
        }
        ProbeOutcome::Dead(code) => {
            tracing::debug!(url = %result.url, code, "not alive");
        }
        ProbeOutcome::Error(failure) => {
            tracing::debug!(url = %result.url, %failure, "not confirmed alive");
        }
    }
    if !result.outcome.needs_archive() {
        return Ok(());
    }
    sifter.count_not_alive();
    writeln!(out, "{}", archive_url(archive_prefix, &result.url)).map_err(SiftError::Output)?;
    out.flush().map_err(SiftError::Output)
}

fn log_summary(stats: &RunStats, seen: usize) {
    tracing::debug!(
        lines = stats.lines,
        parse_failures = stats.parse_failures,
        empty_targets = stats.empty_targets,
        duplicates = stats.duplicates,
        suppressed = stats.suppressed,
        emitted = stats.emitted,
        probed = stats.probed,
        not_http = stats.not_http,
        not_alive = stats.not_alive,
        distinct_keys = seen,
        "run finished"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn next_line_strips_crlf_and_handles_missing_newline() {
        let mut input = Cursor::new(b"a\r\nb\nc".to_vec());
        let mut buf = Vec::new();
        assert_eq!(next_line(&mut input, &mut buf).unwrap().as_deref(), Some("a"));
        assert_eq!(next_line(&mut input, &mut buf).unwrap().as_deref(), Some("b"));
        assert_eq!(next_line(&mut input, &mut buf).unwrap().as_deref(), Some("c"));
        assert_eq!(next_line(&mut input, &mut buf).unwrap(), None);
    }

    #[test]
    fn next_line_replaces_invalid_utf8() {
        let mut input = Cursor::new(b"/a\xff\n".to_vec());
        let mut buf = Vec::new();
        assert_eq!(
            next_line(&mut input, &mut buf).unwrap().as_deref(),
            Some("/a\u{fffd}")
        );
    }
}
