//! Per-line processing: parse → render target → dedup → classify.
//!
//! [`Sifter`] owns the run's dedup gate and counters. The stream drivers in
//! [`stream`] feed it lines and write whatever it lets through.

mod stream;

pub use stream::{run_clean, run_probe};

use url::Url;

use crate::classify::{clean_output, Classifier, Verdict};
use crate::config::SiftConfig;
use crate::dedup::{dedup_key, DedupGate};
use crate::format::render;
use crate::url_model::{parse_line, query_keys, DomainResolver, ParsedLine, PslResolver, UrlView};

/// Operating mode; exactly one per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Emit cleaned URLs of interesting endpoints.
    Clean,
    /// Probe interesting endpoints and emit archive links for dead ones.
    Probe,
}

/// Per-run switches coming from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Skip endpoints already processed in this run.
    pub unique: bool,
    /// Report parse failures on the diagnostic stream.
    pub verbose: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            unique: true,
            verbose: false,
        }
    }
}

/// Counters for the end-of-run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub lines: u64,
    pub parse_failures: u64,
    pub empty_targets: u64,
    pub duplicates: u64,
    pub suppressed: u64,
    pub emitted: u64,
    pub probed: u64,
    /// Probe mode: lines whose scheme is not `http` or `https`.
    pub not_http: u64,
    pub not_alive: u64,
}

/// Line processor for one run.
pub struct Sifter<D: DomainResolver = PslResolver> {
    resolver: D,
    classifier: Classifier,
    gate: DedupGate,
    target: String,
    default_scheme: String,
    options: RunOptions,
    stats: RunStats,
}

impl Sifter<PslResolver> {
    pub fn new(cfg: &SiftConfig, options: RunOptions) -> Self {
        Self::with_resolver(cfg, options, PslResolver)
    }
}

impl<D: DomainResolver> Sifter<D> {
    pub fn with_resolver(cfg: &SiftConfig, options: RunOptions, resolver: D) -> Self {
        Self {
            resolver,
            classifier: Classifier::new(&cfg.classify),
            gate: DedupGate::new(),
            target: cfg.target_format.clone(),
            default_scheme: cfg.default_scheme.clone(),
            options,
            stats: RunStats::default(),
        }
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    pub fn seen(&self) -> usize {
        self.gate.len()
    }

    /// Clean mode: returns the cleaned URL to emit, or `None` if the line is
    /// unparseable, empty, a duplicate, or noise.
    pub fn clean_line(&mut self, line: &str) -> Option<String> {
        let url = self.parse(line)?.url;
        let target = self.render_target(&url);

        if target.is_empty() {
            self.stats.empty_targets += 1;
            return None;
        }

        let key = dedup_key(&target, &query_keys(&url));
        if !self.admit(&key, &target) {
            return None;
        }

        let out = clean_output(url.as_str());
        if self.options.unique {
            self.gate.record(key);
        }
        self.stats.emitted += 1;
        Some(out)
    }

    /// Probe mode: returns the URL to probe, or `None` if the line is
    /// unparseable, not HTTP(S), a duplicate, or noise. Keyed on the rendered
    /// target alone. The returned URL is the line as given (default scheme
    /// added if missing), not the parser's normalized form.
    pub fn probe_line(&mut self, line: &str) -> Option<String> {
        let ParsedLine { url, text } = self.parse(line)?;
        if !matches!(url.scheme(), "http" | "https") {
            tracing::debug!(url = %text, "not an http(s) URL, skipped");
            self.stats.not_http += 1;
            return None;
        }
        let target = self.render_target(&url);

        if !self.admit(&target, &target) {
            return None;
        }

        if self.options.unique {
            self.gate.record(target);
        }
        self.stats.probed += 1;
        Some(text.into_owned())
    }

    pub(crate) fn count_line(&mut self) {
        self.stats.lines += 1;
    }

    pub(crate) fn count_not_alive(&mut self) {
        self.stats.not_alive += 1;
    }

    fn parse<'l>(&mut self, line: &'l str) -> Option<ParsedLine<'l>> {
        match parse_line(line, &self.default_scheme) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                self.stats.parse_failures += 1;
                if self.options.verbose {
                    tracing::warn!("{}", err);
                }
                None
            }
        }
    }

    fn render_target(&self, url: &Url) -> String {
        let view = UrlView::new(url, &self.resolver);
        render(&view, &self.target)
    }

    /// Dedup check then classification; counts whichever rejects.
    fn admit(&mut self, key: &str, target: &str) -> bool {
        if !self.gate.should_process(key, self.options.unique) {
            self.stats.duplicates += 1;
            return false;
        }
        match self.classifier.classify(target) {
            Verdict::Keep => true,
            Verdict::Suppress(reason) => {
                tracing::debug!(value = target, %reason, "suppressed");
                self.stats.suppressed += 1;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    fn sifter(unique: bool) -> Sifter {
        Sifter::new(
            &SiftConfig::default(),
            RunOptions {
                unique,
                verbose: false,
            },
        )
    }

    #[test]
    fn keeps_api_endpoint() {
        let mut s = sifter(true);
        assert_eq!(
            s.clean_line("https://example.com/api/v1/users?id=1").as_deref(),
            Some("https://example.com/api/v1/users?id=1")
        );
        assert_eq!(s.stats().emitted, 1);
    }

    #[test]
    fn suppresses_noise() {
        let mut s = sifter(true);
        assert_eq!(s.clean_line("https://example.com/assets/frontend/app.css"), None);
        assert_eq!(
            s.clean_line("https://example.com/files/550e8400-e29b-41d4-a716-446655440000.png"),
            None
        );
        assert_eq!(s.stats().suppressed, 2);
        // Suppressed values are not recorded.
        assert_eq!(s.seen(), 0);
    }

    #[test]
    fn unique_collapses_same_path_and_param_names() {
        let mut s = sifter(true);
        assert!(s.clean_line("https://example.com/search?q=a&page=1").is_some());
        assert!(s.clean_line("https://example.com/search?page=9&q=b").is_none());
        assert!(s.clean_line("https://example.com/search?q=a&sort=asc").is_some());
        assert!(s.clean_line("https://example.com/search").is_some());
        assert_eq!(s.stats().duplicates, 1);
    }

    #[test]
    fn non_unique_emits_repeats_identically() {
        let mut s = sifter(false);
        let a = s.clean_line("https://example.com/api/users");
        let b = s.clean_line("https://example.com/api/users");
        assert!(a.is_some());
        assert_eq!(a, b);
        assert_eq!(s.seen(), 0);
    }

    #[test]
    fn output_cleaned_but_classification_sees_path() {
        let mut s = sifter(true);
        assert_eq!(
            s.clean_line("https://example.com/app/main?v=3.1.4").as_deref(),
            Some("https://example.com/app/main")
        );
        assert_eq!(
            s.clean_line("https://example.com/docs/intro#section-2").as_deref(),
            Some("https://example.com/docs/intro")
        );
    }

    #[test]
    fn schemeless_input_gets_default_scheme() {
        let mut s = sifter(true);
        assert_eq!(
            s.clean_line("example.com/api/users").as_deref(),
            Some("http://example.com/api/users")
        );
    }

    #[test]
    fn parse_failures_are_counted_and_dropped() {
        let mut s = sifter(true);
        assert_eq!(s.clean_line("http://exa mple.com/"), None);
        assert_eq!(s.clean_line(""), None);
        assert_eq!(s.stats().parse_failures, 2);
    }

    #[test]
    fn empty_target_dropped() {
        let cfg = SiftConfig {
            target_format: "%q".into(),
            ..SiftConfig::default()
        };
        let mut s = Sifter::new(&cfg, RunOptions::default());
        assert_eq!(s.clean_line("https://example.com/a"), None);
        assert_eq!(s.stats().empty_targets, 1);
        assert!(s.clean_line("https://example.com/a?x=1").is_some());
    }

    #[test]
    fn custom_target_changes_dedup_scope() {
        let cfg = SiftConfig {
            target_format: "%d%p".into(),
            ..SiftConfig::default()
        };
        let mut s = Sifter::new(&cfg, RunOptions::default());
        assert!(s.clean_line("https://a.example.com/api").is_some());
        assert!(s.clean_line("https://b.example.com/api").is_some());
        assert!(s.clean_line("http://a.example.com/api").is_none());
    }

    #[test]
    fn probe_line_keys_on_target_only() {
        let mut s = sifter(true);
        assert_eq!(
            s.probe_line("https://example.com/old?id=1").as_deref(),
            Some("https://example.com/old?id=1")
        );
        assert_eq!(s.probe_line("https://example.com/old?other=2"), None);
        assert_eq!(s.probe_line("https://example.com/img/x.png"), None);
        assert_eq!(s.stats().probed, 1);
    }

    #[test]
    fn param_names_do_not_merge_into_path() {
        let mut s = sifter(true);
        assert!(s.clean_line("https://example.com/apib").is_some());
        assert_eq!(
            s.clean_line("https://example.com/api?b=1").as_deref(),
            Some("https://example.com/api?b=1")
        );
        assert_eq!(s.stats().duplicates, 0);
    }

    #[test]
    fn probe_line_returns_input_not_normalized_url() {
        let mut s = sifter(true);
        assert_eq!(
            s.probe_line("https://example.com").as_deref(),
            Some("https://example.com")
        );
        assert_eq!(
            s.probe_line("example.org/api/old").as_deref(),
            Some("http://example.org/api/old")
        );
    }

    #[test]
    fn probe_line_skips_non_http_schemes() {
        let mut s = sifter(true);
        assert_eq!(s.probe_line("mailto:someone@example.com"), None);
        assert_eq!(s.probe_line("javascript:void(0)"), None);
        assert_eq!(s.probe_line("file:///etc/hosts"), None);
        assert_eq!(s.probe_line("ftp://example.com/pub/file"), None);
        assert!(s.probe_line("HTTPS://example.com/api/old").is_some());
        assert_eq!(s.stats().not_http, 4);
        assert_eq!(s.stats().probed, 1);
    }

    /// Log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logs_while(verbose: bool, lines: &[&str]) -> String {
        let sink = Captured::default();
        let writer = sink.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let mut s = Sifter::new(
                &SiftConfig::default(),
                RunOptions {
                    unique: true,
                    verbose,
                },
            );
            for line in lines {
                s.clean_line(line);
            }
            assert_eq!(s.stats().parse_failures, 1);
        });
        let bytes = sink.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn parse_failures_logged_only_when_verbose() {
        let lines = ["https://example.com/api/users", "http://exa mple.com/"];

        let quiet = logs_while(false, &lines);
        assert_eq!(quiet, "");

        let loud = logs_while(true, &lines);
        assert!(loud.contains("WARN"), "{loud}");
        assert!(loud.contains("parse failure"), "{loud}");
        assert!(loud.contains("exa mple.com"), "{loud}");
        assert_eq!(loud.lines().count(), 1, "{loud}");
    }
}
