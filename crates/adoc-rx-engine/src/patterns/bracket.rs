/// A closing bracket preceded by one or more backslashes.
pub const SOURCE: &str = r"(\\+)\]";

/// Group holding the run of backslashes before the bracket.
pub const BACKSLASHES: usize = 1;

/// Decides whether a backslash run escapes the bracket that follows it.
///
/// Backslashes pair off as escaped backslashes, so only an odd run leaves one
/// over to escape the bracket.
pub fn is_escaped_bracket(backslashes: &str) -> bool {
    backslashes.chars().filter(|&c| c == '\\').count() % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::PatternKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn matches_escaped_brackets() {
        let p = PatternKind::EscapedBracket.pattern();
        assert!(p.is_match(r"\]"));
        assert!(p.is_match(r"a\\]a"));
        assert!(!p.is_match("a]a"));
        assert!(!p.is_match(r"\["));
    }

    #[test]
    fn captures_whole_backslash_run() {
        let mut cur = PatternKind::EscapedBracket.pattern().cursor(r"x\\\]y");
        assert_eq!(cur.full_match().unwrap(), r"\\\]");
        assert_eq!(cur.group(BACKSLASHES).unwrap(), r"\\\");
        cur.next();
        assert!(!cur.has_next());
    }

    #[test]
    fn odd_runs_escape() {
        assert!(is_escaped_bracket(r"\"));
        assert!(!is_escaped_bracket(r"\\"));
        assert!(is_escaped_bracket(r"\\\"));
        assert!(!is_escaped_bracket(""));
    }
}
