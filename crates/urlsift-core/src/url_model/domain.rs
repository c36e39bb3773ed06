//! Public-suffix aware host splitting.

use std::net::IpAddr;

/// Host split around the public suffix, e.g. `sub` / `example` / `co.uk`
/// for `sub.example.co.uk`. All parts are empty for IP literals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainParts {
    pub subdomain: String,
    pub root: String,
    pub tld: String,
}

/// Splits a bare hostname (no port) into [`DomainParts`].
pub trait DomainResolver {
    fn resolve(&self, host: &str) -> DomainParts;
}

/// Resolver backed by the compiled-in Public Suffix List. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct PslResolver;

impl DomainResolver for PslResolver {
    fn resolve(&self, host: &str) -> DomainParts {
        let host = host.trim_end_matches('.');
        if host.is_empty() || host.parse::<IpAddr>().is_ok() {
            return DomainParts::default();
        }

        let Some(suffix) = psl::suffix_str(host) else {
            return DomainParts::default();
        };

        // Host is itself a public suffix: nothing registrable below it.
        let Some(registrable) = psl::domain_str(host) else {
            return DomainParts {
                tld: suffix.to_string(),
                ..DomainParts::default()
            };
        };

        let root = registrable
            .strip_suffix(suffix)
            .and_then(|r| r.strip_suffix('.'))
            .unwrap_or_default();
        let subdomain = host
            .strip_suffix(registrable)
            .and_then(|s| s.strip_suffix('.'))
            .unwrap_or_default();

        DomainParts {
            subdomain: subdomain.to_string(),
            root: root.to_string(),
            tld: suffix.to_string(),
        }
    }
}
