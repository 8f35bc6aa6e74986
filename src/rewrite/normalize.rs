//! Scheme normalization for protocol-relative URLs.

use std::borrow::Cow;

/// Forces an explicit `https:` scheme onto protocol-relative URLs.
///
/// `//host/path` becomes `https://host/path`; a string already carrying a
/// scheme token (`http://`, `ftp://`, ...) is returned unchanged. Callers
/// apply this only to strings already classified as absolute.
pub fn force_https(src: &str) -> Cow<'_, str> {
    if src.starts_with("//") {
        Cow::Owned(format!("https:{}", src))
    } else {
        Cow::Borrowed(src)
    }
}
