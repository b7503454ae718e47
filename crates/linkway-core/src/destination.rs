//! Destination URL normalization.
//!
//! Stored destinations may be scheme-less (`example.com/page`). They are
//! only coerced to an absolute URL when used for navigation.

use std::borrow::Cow;

const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Returns the scheme of `url` if it has the form `scheme://...`.
///
/// A scheme starts with an ASCII letter followed by letters, digits,
/// `+`, `-` or `.`.
pub fn scheme(url: &str) -> Option<&str> {
    let (scheme, _) = url.split_once("://")?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(scheme)
    } else {
        None
    }
}

/// Normalizes a destination so that it can be navigated to.
///
/// URLs that already carry a scheme are returned untouched (`http://` is
/// not upgraded). Scheme-less URLs get `https://` prepended; a
/// protocol-relative `//host` keeps its host. Normalizing twice yields the
/// same result as normalizing once.
pub fn normalize_destination(url: &str) -> Cow<'_, str> {
    let url = url.trim();
    if scheme(url).is_some() {
        return Cow::Borrowed(url);
    }
    let rest = url.strip_prefix("//").unwrap_or(url);
    Cow::Owned(format!("{DEFAULT_SCHEME_PREFIX}{rest}"))
}
