//! URL parsing and the read-only field view used by the format interpreter.
//!
//! Inputs without a scheme get the configured default scheme prepended and
//! are re-parsed as a whole. Domain parts are resolved lazily, once per view.

mod domain;
mod path;

pub use domain::{DomainParts, DomainResolver, PslResolver};
pub use path::{extension_token, split_extension};

use std::borrow::Cow;
use std::cell::OnceCell;
use std::collections::BTreeSet;
use url::{Host, Url};

use crate::error::{Result, SiftError};

/// A parsed input line and the URL text it was parsed from.
#[derive(Debug, Clone)]
pub struct ParsedLine<'a> {
    pub url: Url,
    /// The line without surrounding whitespace, with the default scheme
    /// prepended when it had none. Unlike `url`, not normalized.
    pub text: Cow<'a, str>,
}

/// Parses `raw` as a URL, assuming `default_scheme` when it has none.
///
/// # Examples
///
/// - `parse_url("https://example.com/a", "http")` keeps `https`
/// - `parse_url("example.com/a", "http")` parses `http://example.com/a`
pub fn parse_url(raw: &str, default_scheme: &str) -> Result<Url> {
    parse_line(raw, default_scheme).map(|parsed| parsed.url)
}

/// Like [`parse_url`], but also keeps the text that was parsed.
pub fn parse_line<'a>(raw: &'a str, default_scheme: &str) -> Result<ParsedLine<'a>> {
    let trimmed = raw.trim_matches(|c: char| c <= ' ');
    let parse_error = |source| SiftError::Parse {
        input: raw.to_string(),
        source,
    };
    match Url::parse(trimmed) {
        Ok(url) => Ok(ParsedLine {
            url,
            text: Cow::Borrowed(trimmed),
        }),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let with_scheme = format!("{default_scheme}://{trimmed}");
            let url = Url::parse(&with_scheme).map_err(parse_error)?;
            Ok(ParsedLine {
                url,
                text: Cow::Owned(with_scheme),
            })
        }
        Err(source) => Err(parse_error(source)),
    }
}

/// Sorted, de-duplicated query parameter names; empty names are skipped.
pub fn query_keys(url: &Url) -> Vec<String> {
    let keys: BTreeSet<String> = url
        .query_pairs()
        .map(|(k, _)| k.into_owned())
        .filter(|k| !k.is_empty())
        .collect();
    keys.into_iter().collect()
}

/// Named fields of a parsed URL.
pub struct UrlView<'a> {
    url: &'a Url,
    resolver: &'a dyn DomainResolver,
    domain: OnceCell<DomainParts>,
}

impl<'a> UrlView<'a> {
    pub fn new(url: &'a Url, resolver: &'a dyn DomainResolver) -> Self {
        Self {
            url,
            resolver,
            domain: OnceCell::new(),
        }
    }

    pub fn url(&self) -> &'a Url {
        self.url
    }

    pub fn scheme(&self) -> &'a str {
        self.url.scheme()
    }

    /// `user` or `user:pass`, still percent-encoded; `None` when absent.
    pub fn userinfo(&self) -> Option<String> {
        let user = self.url.username();
        match self.url.password() {
            Some(pass) => Some(format!("{user}:{pass}")),
            None if !user.is_empty() => Some(user.to_string()),
            None => None,
        }
    }

    /// Hostname without port; IPv6 literals without brackets.
    pub fn hostname(&self) -> Cow<'a, str> {
        match self.url.host() {
            Some(Host::Domain(d)) => Cow::Borrowed(d),
            Some(Host::Ipv4(addr)) => Cow::Owned(addr.to_string()),
            Some(Host::Ipv6(addr)) => Cow::Owned(addr.to_string()),
            None => Cow::Borrowed(""),
        }
    }

    /// Explicit, non-default port.
    pub fn port(&self) -> Option<u16> {
        self.url.port()
    }

    pub fn path(&self) -> &'a str {
        self.url.path()
    }

    pub fn extension(&self) -> &'a str {
        extension_token(self.url.path())
    }

    pub fn query(&self) -> &'a str {
        self.url.query().unwrap_or_default()
    }

    pub fn fragment(&self) -> &'a str {
        self.url.fragment().unwrap_or_default()
    }

    pub fn domain_parts(&self) -> &DomainParts {
        self.domain
            .get_or_init(|| self.resolver.resolve(&self.hostname()))
    }
}
