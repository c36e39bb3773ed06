//! Format mini-language: projects a URL into a string, a bit like `sprintf`
//! for URL fields. `%d%p` on `http://example.com/path` renders
//! `example.com/path`.
//!
//! `%` switches to directive mode for exactly one character. Unknown
//! directives are echoed as written, so rendering never fails.

mod directive;

pub use directive::Directive;

use crate::url_model::UrlView;

/// Authority composite used by `%a`.
const AUTHORITY_FORMAT: &str = "%u%@%d%:%P";

/// Renders `directives` against `view`.
pub fn render(view: &UrlView<'_>, directives: &str) -> String {
    let mut out = String::with_capacity(directives.len() + view.url().as_str().len());
    let mut in_directive = false;

    for c in directives.chars() {
        if !in_directive {
            if c == '%' {
                in_directive = true;
            } else {
                out.push(c);
            }
            continue;
        }
        in_directive = false;

        match Directive::from_char(c) {
            Some(d) => write_directive(view, d, &mut out),
            None => {
                out.push('%');
                out.push(c);
            }
        }
    }

    // Lone trailing `%`.
    if in_directive {
        out.push('%');
    }

    out
}

fn write_directive(view: &UrlView<'_>, directive: Directive, out: &mut String) {
    match directive {
        Directive::Percent => out.push('%'),
        Directive::Scheme => out.push_str(view.scheme()),
        Directive::UserInfo => {
            if let Some(info) = view.userinfo() {
                out.push_str(&info);
            }
        }
        Directive::Domain => out.push_str(&view.hostname()),
        Directive::Port => {
            if let Some(port) = view.port() {
                out.push_str(&port.to_string());
            }
        }
        Directive::Subdomain => out.push_str(&view.domain_parts().subdomain),
        Directive::Root => out.push_str(&view.domain_parts().root),
        Directive::Tld => out.push_str(&view.domain_parts().tld),
        Directive::Path => out.push_str(view.path()),
        Directive::Extension => out.push_str(view.extension()),
        Directive::Query => out.push_str(view.query()),
        Directive::Fragment => out.push_str(view.fragment()),
        Directive::At => {
            if view.userinfo().is_some() {
                out.push('@');
            }
        }
        Directive::Colon => {
            if view.port().is_some() {
                out.push(':');
            }
        }
        Directive::Question => {
            if !view.query().is_empty() {
                out.push('?');
            }
        }
        Directive::Hash => {
            if !view.fragment().is_empty() {
                out.push('#');
            }
        }
        Directive::Authority => out.push_str(&render(view, AUTHORITY_FORMAT)),
    }
}
