//! Link classification
//!
//! Pure predicates that decide whether a link points at an installable
//! distribution file and whether the link carries a checksum that lets an
//! installer verify what it downloaded.

use crate::{UrlError, UrlResult};
use regex::Regex;
use std::sync::OnceLock;

/// Suffixes that mark a path as an installable distribution file.
///
/// `tar.bz2` deliberately lacks its leading dot: index tooling historically
/// matched it that way, so `foo_tar.bz2` counts as installable too.
pub const INSTALLABLE_EXTENSIONS: [&str; 7] =
    [".tar", ".tar.gz", "tar.bz2", ".zip", ".tgz", ".egg", ".whl"];

const CHECKSUM_PATTERN: &str = r"(sha1|sha224|sha384|sha256|sha512|md5)=([a-f0-9]+)";

fn checksum_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(CHECKSUM_PATTERN).expect("checksum pattern is a valid regex")
    })
}

/// Returns the path component of a link, exactly as written
///
/// The link is taken apart textually: scheme and authority are dropped, then
/// everything from the first `?` or `#` on. Nothing is decoded or
/// normalized, and relative references are accepted as they are. The only
/// failure is an authority with an unbalanced IPv6 bracket.
///
/// # Examples
///
/// ```
/// use index_hosting_survey::classify::link_path;
///
/// assert_eq!(link_path("https://host/a/b.zip?x=1#y").unwrap(), "/a/b.zip");
/// assert_eq!(link_path("../pkg.whl#md5=0f").unwrap(), "../pkg.whl");
/// assert!(link_path("http://[::1/pkg.zip").is_err());
/// ```
pub fn link_path(url: &str) -> UrlResult<&str> {
    let mut rest = strip_scheme(url);

    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(['/', '?', '#']).unwrap_or(after.len());
        let authority = &after[..end];
        if authority.contains('[') != authority.contains(']') {
            return Err(UrlError::Malformed(url.to_string()));
        }
        rest = &after[end..];
    }

    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    Ok(&rest[..end])
}

fn strip_scheme(url: &str) -> &str {
    let Some((scheme, rest)) = url.split_once(':') else {
        return url;
    };

    let valid = scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    if valid {
        rest
    } else {
        url
    }
}

/// Returns true if the URL's path ends with an installable extension
///
/// Only the path takes part in the test; query string and fragment are
/// ignored. A link whose path cannot be extracted is not installable.
///
/// # Examples
///
/// ```
/// use index_hosting_survey::classify::is_installable;
///
/// assert!(is_installable("https://files.example.org/pkg-1.0.whl?x=1"));
/// assert!(!is_installable("https://files.example.org/README.txt"));
/// ```
pub fn is_installable(url: &str) -> bool {
    link_path(url).map(path_is_installable).unwrap_or(false)
}

/// Plain suffix test of a path against [`INSTALLABLE_EXTENSIONS`]
pub fn path_is_installable(path: &str) -> bool {
    INSTALLABLE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Returns true if the URL carries a recognizable checksum parameter
///
/// The checksum may appear anywhere in the string (query or fragment), and
/// the digest must be lowercase hex.
///
/// # Examples
///
/// ```
/// use index_hosting_survey::classify::is_safe;
///
/// assert!(is_safe("https://example.org/pkg.tar.gz#sha256=abcdef0123456789"));
/// assert!(!is_safe("https://example.org/pkg.tar.gz#md5=ABCDEF"));
/// ```
pub fn is_safe(url: &str) -> bool {
    checksum_regex().is_match(url)
}

/// Basename of a link's path; empty when the path ends in `/`
pub fn filename_of(url: &str) -> UrlResult<&str> {
    Ok(link_path(url)?.rsplit('/').next().unwrap_or(""))
}
