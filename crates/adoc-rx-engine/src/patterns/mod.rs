//! # Pattern Library
//!
//! The fixed set of recognizers for markup constructs. Each kind module owns its
//! pattern source and the helpers that decode its capture groups; nothing else in
//! the crate spells out a pattern.
//!
//! Library patterns are compiled on first use and shared read-only for the rest
//! of the process.

pub mod admonition;
pub mod bracket;
pub mod pass;
pub mod pattern;
pub mod uri;

use std::{fmt, str::FromStr, sync::OnceLock};

use crate::error::PatternError;

pub use admonition::{AdmonitionKind, admonition_kind};
pub use bracket::is_escaped_bracket;
pub use pattern::Pattern;
pub use uri::uri_scheme;

/// The closed set of library patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// Admonition label at the start of a line, e.g. `NOTE: `.
    Admonition,
    /// `+++text+++`, `$$text$$` or `pass:subs[text]`.
    PassInlineMacro,
    /// A leading URI scheme such as `https:` or `data:`.
    UriSniff,
    /// A `]` preceded by a run of backslashes.
    EscapedBracket,
}

impl PatternKind {
    pub const ALL: [PatternKind; 4] = [
        PatternKind::Admonition,
        PatternKind::PassInlineMacro,
        PatternKind::UriSniff,
        PatternKind::EscapedBracket,
    ];

    /// Stable short name, accepted back by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Admonition => "admonition",
            PatternKind::PassInlineMacro => "pass",
            PatternKind::UriSniff => "uri",
            PatternKind::EscapedBracket => "escaped-bracket",
        }
    }

    fn source(self) -> &'static str {
        match self {
            PatternKind::Admonition => admonition::SOURCE,
            PatternKind::PassInlineMacro => pass::SOURCE,
            PatternKind::UriSniff => uri::SOURCE,
            PatternKind::EscapedBracket => bracket::SOURCE,
        }
    }

    /// The process-wide compiled pattern for this kind.
    pub fn pattern(self) -> &'static Pattern {
        static ADMONITION: OnceLock<Pattern> = OnceLock::new();
        static PASS_INLINE_MACRO: OnceLock<Pattern> = OnceLock::new();
        static URI_SNIFF: OnceLock<Pattern> = OnceLock::new();
        static ESCAPED_BRACKET: OnceLock<Pattern> = OnceLock::new();

        let cell = match self {
            PatternKind::Admonition => &ADMONITION,
            PatternKind::PassInlineMacro => &PASS_INLINE_MACRO,
            PatternKind::UriSniff => &URI_SNIFF,
            PatternKind::EscapedBracket => &ESCAPED_BRACKET,
        };
        cell.get_or_init(|| Pattern::builtin(self.name(), self.source()))
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatternKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| PatternError::UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn every_library_pattern_compiles() {
        for kind in PatternKind::ALL {
            let p = kind.pattern();
            assert_eq!(p.name(), kind.name());
            assert_eq!(p.as_str(), kind.source());
        }
    }

    #[test]
    fn library_patterns_are_memoized() {
        let a = PatternKind::UriSniff.pattern();
        let b = PatternKind::UriSniff.pattern();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn library_patterns_are_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let source = format!("line {i} \\] and +++x{i}+++ then \\]");
                    let mut brackets = PatternKind::EscapedBracket.pattern().cursor(&source);
                    let mut seen = 0;
                    while brackets.has_next() {
                        seen += 1;
                        brackets.next();
                    }
                    let pass = PatternKind::PassInlineMacro.pattern().cursor(&source);
                    let content = pass.group(pass::PLUS_TEXT).unwrap().to_string();
                    (
                        seen,
                        content,
                        PatternKind::PassInlineMacro.pattern() as *const Pattern as usize,
                    )
                })
            })
            .collect();

        let library = PatternKind::PassInlineMacro.pattern() as *const Pattern as usize;
        for (i, handle) in handles.into_iter().enumerate() {
            let (seen, content, address) = handle.join().unwrap();
            assert_eq!(seen, 2);
            assert_eq!(content, format!("x{i}"));
            assert_eq!(address, library);
        }
    }

    #[rstest]
    #[case("admonition", PatternKind::Admonition)]
    #[case("pass", PatternKind::PassInlineMacro)]
    #[case("uri", PatternKind::UriSniff)]
    #[case("escaped-bracket", PatternKind::EscapedBracket)]
    fn names_round_trip(#[case] name: &str, #[case] kind: PatternKind) {
        assert_eq!(name.parse::<PatternKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), name);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "latex".parse::<PatternKind>().unwrap_err();
        assert!(matches!(err, PatternError::UnknownKind(ref s) if s == "latex"));
    }

    #[test]
    fn group_counts_match_the_decoders() {
        assert_eq!(PatternKind::Admonition.pattern().group_count(), 2);
        assert_eq!(PatternKind::PassInlineMacro.pattern().group_count(), 7);
        assert_eq!(PatternKind::UriSniff.pattern().group_count(), 2);
        assert_eq!(PatternKind::EscapedBracket.pattern().group_count(), 2);
    }
}
