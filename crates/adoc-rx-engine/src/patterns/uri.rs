use super::PatternKind;

/// A leading scheme token followed by `:` and up to two slashes.
///
/// Any scheme of two or more characters qualifies, so new schemes need no
/// change here.
pub const SOURCE: &str = r"^(\p{Alphabetic}[\p{Alphabetic}\p{Nd}.+-]+):/{0,2}";

/// Group holding the scheme name without the colon.
pub const SCHEME: usize = 1;

/// Returns the scheme of a string that looks like a URI.
pub fn uri_scheme(text: &str) -> Option<&str> {
    let caps = PatternKind::UriSniff.pattern().regex().captures(text)?;
    caps.get(SCHEME).map(|m| m.as_str())
}
