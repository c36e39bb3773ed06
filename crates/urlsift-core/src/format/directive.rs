//! The closed directive alphabet.

/// A single-character format directive (the character after `%`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `%%`: literal percent.
    Percent,
    /// `%s`: scheme, e.g. `http`.
    Scheme,
    /// `%u`: userinfo, e.g. `user:pass`.
    UserInfo,
    /// `%d`: hostname, e.g. `sub.example.com`.
    Domain,
    /// `%P`: port, e.g. `8080`.
    Port,
    /// `%S`: subdomain, e.g. `www`.
    Subdomain,
    /// `%r`: registrable root, e.g. `example`.
    Root,
    /// `%t`: public suffix, e.g. `com`.
    Tld,
    /// `%p`: escaped path.
    Path,
    /// `%e`: extension of the last path segment.
    Extension,
    /// `%q`: raw query string.
    Query,
    /// `%f`: fragment.
    Fragment,
    /// `%@`: `@` if userinfo is present.
    At,
    /// `%:`: `:` if a port is present.
    Colon,
    /// `%?`: `?` if the query is non-empty.
    Question,
    /// `%#`: `#` if the fragment is non-empty.
    Hash,
    /// `%a`: authority, `%u%@%d%:%P`.
    Authority,
}

impl Directive {
    pub fn from_char(c: char) -> Option<Self> {
        let d = match c {
            '%' => Self::Percent,
            's' => Self::Scheme,
            'u' => Self::UserInfo,
            'd' => Self::Domain,
            'P' => Self::Port,
            'S' => Self::Subdomain,
            'r' => Self::Root,
            't' => Self::Tld,
            'p' => Self::Path,
            'e' => Self::Extension,
            'q' => Self::Query,
            'f' => Self::Fragment,
            '@' => Self::At,
            ':' => Self::Colon,
            '?' => Self::Question,
            '#' => Self::Hash,
            'a' => Self::Authority,
            _ => return None,
        };
        Some(d)
    }

    #[cfg(test)]
    fn as_char(self) -> char {
        match self {
            Self::Percent => '%',
            Self::Scheme => 's',
            Self::UserInfo => 'u',
            Self::Domain => 'd',
            Self::Port => 'P',
            Self::Subdomain => 'S',
            Self::Root => 'r',
            Self::Tld => 't',
            Self::Path => 'p',
            Self::Extension => 'e',
            Self::Query => 'q',
            Self::Fragment => 'f',
            Self::At => '@',
            Self::Colon => ':',
            Self::Question => '?',
            Self::Hash => '#',
            Self::Authority => 'a',
        }
    }
}
