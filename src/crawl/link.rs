// src/crawl/link.rs
// =============================================================================
// Turns one raw href into a decision for the crawler.
//
// For every href on a page, in document order:
// 1. Empty hrefs, mailto:, javascript: and in-page #fragments are ignored
// 2. Everything else is resolved against the page URL
// 3. If resolution fails the href is malformed and skipped
// 4. A resolved URL whose host is the base domain (or a subdomain of it) is
//    internal and gets crawled; anything else is external and only recorded
// =============================================================================

use url::Url;

// What the crawler should do with one href
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    /// Same site: crawl it
    Internal(String),
    /// Other site: record it on the current node
    External(String),
    /// Not a navigable link at all
    Ignored,
    /// Could not be turned into an absolute URL
    Malformed,
}

// Classifies `href` found on `page`
//
// Example (base_domain = "example.com"):
//   "https://docs.example.com/x" -> Internal
//   "https://other.com/x"        -> External
//   "mailto:a@b.com"             -> Ignored
//   "http://["                   -> Malformed
pub fn classify(href: &str, page: &Url, base_domain: &str) -> LinkKind {
    let href = href.trim();

    if is_ignored(href) {
        return LinkKind::Ignored;
    }

    let resolved = match page.join(href) {
        Ok(url) => url,
        Err(_) => return LinkKind::Malformed,
    };

    if is_internal(&resolved, base_domain) {
        LinkKind::Internal(resolved.to_string())
    } else {
        LinkKind::External(resolved.to_string())
    }
}

fn is_ignored(href: &str) -> bool {
    href.is_empty()
        || href.starts_with('#')
        || has_scheme(href, "mailto:")
        || has_scheme(href, "javascript:")
}

// Scheme names are case-insensitive ("MAILTO:" is still mail)
fn has_scheme(href: &str, scheme: &str) -> bool {
    href.get(..scheme.len())
        .map(|prefix| prefix.eq_ignore_ascii_case(scheme))
        .unwrap_or(false)
}

// True when the URL's host equals `base_domain` or ends with ".{base_domain}"
//
// The dot boundary keeps "notexample.com" out of "example.com".
// URLs without a host (tel:, data:, ...) are never internal.
pub fn is_internal(url: &Url, base_domain: &str) -> bool {
    match url.host_str() {
        Some(host) => {
            host == base_domain
                || (host.len() > base_domain.len()
                    && host.ends_with(base_domain)
                    && host.as_bytes()[host.len() - base_domain.len() - 1] == b'.')
        }
        None => false,
    }
}

// Canonical form of a configured base domain: lower case, no leading or
// trailing dot
pub fn normalize_domain(domain: &str) -> String {
    domain.trim().trim_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Url {
        Url::parse("https://docs.example.com/guide/index.html").unwrap()
    }

    #[test]
    fn test_subdomain_is_internal() {
        assert_eq!(
            classify("https://docs.example.com/x", &page(), "example.com"),
            LinkKind::Internal("https://docs.example.com/x".to_string())
        );
    }

    #[test]
    fn test_other_host_is_external() {
        assert_eq!(
            classify("https://other.com/x", &page(), "example.com"),
            LinkKind::External("https://other.com/x".to_string())
        );
    }

    #[test]
    fn test_mailto_is_ignored() {
        assert_eq!(classify("mailto:a@b.com", &page(), "example.com"), LinkKind::Ignored);
        assert_eq!(classify("MAILTO:a@b.com", &page(), "example.com"), LinkKind::Ignored);
    }

    #[test]
    fn test_javascript_fragment_and_empty_are_ignored() {
        assert_eq!(classify("javascript:void(0)", &page(), "example.com"), LinkKind::Ignored);
        assert_eq!(classify("#section", &page(), "example.com"), LinkKind::Ignored);
        assert_eq!(classify("", &page(), "example.com"), LinkKind::Ignored);
        assert_eq!(classify("   ", &page(), "example.com"), LinkKind::Ignored);
    }

    #[test]
    fn test_malformed_href() {
        assert_eq!(classify("http://[", &page(), "example.com"), LinkKind::Malformed);
    }

    #[test]
    fn test_relative_href_resolves_against_page() {
        assert_eq!(
            classify("../api/core.html", &page(), "docs.example.com"),
            LinkKind::Internal("https://docs.example.com/api/core.html".to_string())
        );
    }

    #[test]
    fn test_suffix_without_dot_is_external() {
        let url = Url::parse("https://notexample.com/").unwrap();
        assert!(!is_internal(&url, "example.com"));

        let url = Url::parse("https://example.com/").unwrap();
        assert!(is_internal(&url, "example.com"));
    }

    #[test]
    fn test_hostless_url_is_external() {
        assert_eq!(
            classify("tel:+15551234", &page(), "example.com"),
            LinkKind::External("tel:+15551234".to_string())
        );
    }

    #[test]
    fn test_normalize_domain() {
        assert_eq!(normalize_domain(" .Docs.Example.COM "), "docs.example.com");
    }
}
