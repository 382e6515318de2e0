//! Match cursor: an index into the precomputed matches of one pattern over one
//! source text.

use crate::{error::CursorError, patterns::Pattern, span::Span};

/// One located occurrence, with the span of every capture group.
///
/// `groups[0]` is the whole match. A group that did not participate is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MatchRecord {
    span: Span,
    groups: Vec<Option<Span>>,
}

impl MatchRecord {
    /// Group span, or `None` if the group is unknown, did not participate, or
    /// captured nothing.
    fn present_group(&self, n: usize) -> Option<Span> {
        self.groups
            .get(n)
            .copied()
            .flatten()
            .filter(|sp| !sp.is_empty())
    }
}

/// A piece of the source as seen by a full cursor walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'s> {
    /// Unmatched text between matches.
    Text(&'s str),
    /// The text of one match.
    Match(&'s str),
}

impl<'s> Segment<'s> {
    pub fn text(&self) -> &'s str {
        match self {
            Segment::Text(s) | Segment::Match(s) => *s,
        }
    }
}

/// Walks the matches of a pattern over a source text, one at a time.
///
/// All matches are found by a single leftmost, non-overlapping scan when the
/// cursor is built; moving the cursor never rescans. Matches are ordered by
/// strictly increasing start and never empty.
///
/// Accessors that need a current match return [`CursorError::OutOfRange`] once
/// the cursor is exhausted. [`suffix`](Self::suffix) is always available.
#[derive(Debug, Clone)]
pub struct MatchCursor<'s> {
    source: &'s str,
    matches: Vec<MatchRecord>,
    /// Current index into `matches`; equal to `matches.len()` when exhausted.
    i: usize,
}

impl<'s> MatchCursor<'s> {
    /// Scans `source` with `pattern` and positions the cursor on the first match.
    pub fn new(pattern: &Pattern, source: &'s str) -> Self {
        let matches: Vec<MatchRecord> = pattern
            .regex()
            .captures_iter(source)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                // zero-width hits carry no text to walk over
                if whole.is_empty() {
                    return None;
                }
                Some(MatchRecord {
                    span: whole.into(),
                    groups: caps.iter().map(|g| g.map(Span::from)).collect(),
                })
            })
            .collect();

        log::trace!(
            "pattern {} found {} matches in {} bytes",
            pattern.name(),
            matches.len(),
            source.len()
        );

        Self {
            source,
            matches,
            i: 0,
        }
    }

    /// The text this cursor walks over.
    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Number of matches found.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Current index; equals [`match_count`](Self::match_count) when exhausted.
    pub fn position(&self) -> usize {
        self.i
    }

    pub fn has_any_match(&self) -> bool {
        !self.matches.is_empty()
    }

    /// True while the cursor sits on a match.
    pub fn has_next(&self) -> bool {
        self.i < self.matches.len()
    }

    /// Moves to the following match. Stays exhausted once past the last one.
    pub fn next(&mut self) {
        if self.i < self.matches.len() {
            self.i += 1;
        }
    }

    /// Rewinds to the first match.
    pub fn reset_next(&mut self) {
        self.i = 0;
    }

    fn current(&self) -> Result<&MatchRecord, CursorError> {
        self.matches.get(self.i).ok_or(CursorError::OutOfRange {
            index: self.i,
            len: self.matches.len(),
        })
    }

    /// End of the previous match, or 0 on the first.
    fn previous_boundary(&self) -> usize {
        match self.i {
            0 => 0,
            i => self.matches[i - 1].span.end,
        }
    }

    /// Span of the current match.
    pub fn span(&self) -> Result<Span, CursorError> {
        Ok(self.current()?.span)
    }

    /// Unmatched text between the previous match (or the source start) and the
    /// current match.
    pub fn prefix(&self) -> Result<&'s str, CursorError> {
        let start = self.current()?.span.start;
        Ok(&self.source[self.previous_boundary()..start])
    }

    /// Everything from the end of the previous match to the end of the source,
    /// including the current match. After the last match this is the trailing
    /// unmatched text.
    pub fn suffix(&self) -> &'s str {
        &self.source[self.previous_boundary()..]
    }

    pub fn full_match(&self) -> Result<&'s str, CursorError> {
        Ok(self.current()?.span.slice(self.source))
    }

    pub fn first_char(&self) -> Result<char, CursorError> {
        let full = self.full_match()?;
        // records are never empty, so this only fails on a bug
        full.chars().next().ok_or(CursorError::OutOfRange {
            index: self.i,
            len: self.matches.len(),
        })
    }

    /// True if the current match starts with a backslash.
    pub fn is_escaped(&self) -> Result<bool, CursorError> {
        Ok(self.full_match()?.starts_with('\\'))
    }

    /// True if group `n` exists and captured non-empty text in the current match.
    ///
    /// An empty capture counts as absent.
    pub fn has_group(&self, n: usize) -> Result<bool, CursorError> {
        Ok(self.current()?.present_group(n).is_some())
    }

    /// Text of group `n` in the current match; empty when the group is unknown,
    /// did not participate, or captured nothing.
    pub fn group(&self, n: usize) -> Result<&'s str, CursorError> {
        Ok(self
            .current()?
            .present_group(n)
            .map_or("", |sp| sp.slice(self.source)))
    }

    /// Splits the whole source into unmatched text and matches, in order.
    ///
    /// Empty text between adjacent matches is skipped. Joining the segments
    /// reproduces the source. The cursor position is not touched.
    pub fn segments(&self) -> Vec<Segment<'s>> {
        let mut out = Vec::with_capacity(self.matches.len() * 2 + 1);
        let mut text_start = 0;

        for m in &self.matches {
            if m.span.start > text_start {
                out.push(Segment::Text(&self.source[text_start..m.span.start]));
            }
            out.push(Segment::Match(m.span.slice(self.source)));
            text_start = m.span.end;
        }
        if text_start < self.source.len() {
            out.push(Segment::Text(&self.source[text_start..]));
        }
        out
    }
}
