//! Origin-scoped cookie jar handed to callers.
//!
//! The jar is the structured form of the flat cookie text the OS returns.
//! It is built fresh on each retrieval and ownership transfers to the
//! caller; the bridge keeps no copy.

use cookie::Cookie;
use std::collections::HashMap;
use url::{Origin, Url};

/// An unordered collection of named cookies scoped to one origin.
///
/// The scope is scheme+host+port only: path, query, and fragment of the URL
/// the cookies were fetched for are dropped. Cookies are keyed by name; a
/// later duplicate name replaces an earlier one.
#[derive(Debug)]
pub struct CookieJar {
    origin: Origin,
    cookies: HashMap<String, Cookie<'static>>,
}

impl CookieJar {
    /// Parse a comma-delimited cookie string into a jar scoped to `scope`'s
    /// origin.
    ///
    /// Expects the post-translation form (`name=value, name2=value2`), not
    /// the semicolon form the OS produces. Segments that are empty or fail
    /// to parse are skipped.
    pub fn parse(scope: &Url, cookie_text: &str) -> CookieJar {
        let mut cookies = HashMap::new();
        for segment in cookie_text.split(',') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            match Cookie::parse(segment.to_owned()) {
                Ok(c) => {
                    cookies.insert(c.name().to_owned(), c);
                }
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unparsable cookie segment");
                }
            }
        }
        CookieJar {
            origin: scope.origin(),
            cookies,
        }
    }

    /// The origin this jar is scoped to.
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn get(&self, name: &str) -> Option<&Cookie<'static>> {
        self.cookies.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cookie<'static>> {
        self.cookies.values()
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Serialize the jar back to a `Cookie` request-header value
    /// (`name=value; name2=value2`). Order is unspecified.
    pub fn to_cookie_header(&self) -> String {
        self.cookies
            .values()
            .map(|c| format!("{}={}", c.name(), c.value()))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> Url {
        Url::parse("https://example.com/some/path?q=1#frag").unwrap()
    }

    #[test]
    fn test_parse_comma_delimited() {
        let jar = CookieJar::parse(&scope(), "a=1, b=2, c=3");
        assert_eq!(jar.len(), 3);
        assert_eq!(jar.get("b").unwrap().value(), "2");
    }

    #[test]
    fn test_origin_drops_path_query_fragment() {
        let jar = CookieJar::parse(&scope(), "a=1");
        let other = Url::parse("https://example.com/other").unwrap();
        assert_eq!(*jar.origin(), other.origin());
    }

    #[test]
    fn test_skips_unparsable_segments() {
        let jar = CookieJar::parse(&scope(), "a=1, , not-a-cookie, b=2");
        assert_eq!(jar.len(), 2);
        assert!(jar.get("a").is_some());
        assert!(jar.get("b").is_some());
    }

    #[test]
    fn test_duplicate_name_replaces_earlier() {
        let jar = CookieJar::parse(&scope(), "a=old, a=new");
        assert_eq!(jar.len(), 1);
        assert_eq!(jar.get("a").unwrap().value(), "new");
    }

    #[test]
    fn test_to_cookie_header() {
        let jar = CookieJar::parse(&scope(), "sid=abc123");
        assert_eq!(jar.to_cookie_header(), "sid=abc123");
    }

    #[test]
    fn test_empty_text_gives_empty_jar() {
        // The bridge never constructs a jar from empty text; the parser
        // itself just yields an empty jar.
        let jar = CookieJar::parse(&scope(), "");
        assert!(jar.is_empty());
    }
}
