use regex::Regex;

use crate::{cursor::MatchCursor, error::PatternError};

/// A compiled, immutable text-matching rule with numbered capture groups.
///
/// Library patterns live for the whole process (see [`PatternKind`]); callers may
/// also compile their own with [`Pattern::new`]. A `Pattern` holds no match state,
/// so one value can back any number of cursors at once.
///
/// [`PatternKind`]: super::PatternKind
#[derive(Debug, Clone)]
pub struct Pattern {
    name: &'static str,
    regex: Regex,
}

impl Pattern {
    /// Compiles a caller-supplied pattern.
    pub fn new(source: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(source).map_err(|source_err| PatternError::Compile {
            source_pattern: source.to_string(),
            source: source_err,
        })?;
        Ok(Self {
            name: "custom",
            regex,
        })
    }

    /// Compiles a library pattern. Library sources are fixed, so a failure here
    /// is a programmer error and aborts.
    pub(super) fn builtin(name: &'static str, source: &str) -> Self {
        let regex = Regex::new(source)
            .unwrap_or_else(|e| panic!("Invalid built-in pattern {name}: {e}"));
        log::debug!("compiled built-in pattern {name}");
        Self { name, regex }
    }

    /// Short name: the library kind name, or `custom`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The pattern source text.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Number of capture groups, counting group 0 (the whole match).
    pub fn group_count(&self) -> usize {
        self.regex.captures_len()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Scans `source` and returns a cursor over the matches.
    pub fn cursor<'s>(&self, source: &'s str) -> MatchCursor<'s> {
        MatchCursor::new(self, source)
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}
