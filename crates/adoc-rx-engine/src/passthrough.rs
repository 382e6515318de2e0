//! Inline macro projector: decodes which passthrough syntax the current match
//! of a [`MatchCursor`] used and exposes its fields.

use crate::{
    cursor::MatchCursor,
    patterns::{
        PatternKind,
        pass::{DOLLAR_MARKER, DOLLAR_TEXT, PASS_SUBS, PASS_TEXT, PLUS_MARKER, PLUS_TEXT},
    },
};

/// One decoded passthrough occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Passthrough<'s> {
    /// `+++content+++`
    DelimitedPlus { content: &'s str },
    /// `$$content$$`
    DelimitedDollar { content: &'s str },
    /// `pass:substitutions[content]`
    PassMacro {
        substitutions: &'s str,
        content: &'s str,
    },
}

impl<'s> Passthrough<'s> {
    pub const PLUS: &'static str = "+++";
    pub const DOLLAR: &'static str = "$$";

    /// Decodes the current match of a cursor over the passthrough pattern.
    ///
    /// Exactly one group family is present per match; `None` when the cursor is
    /// exhausted or when it was built over another pattern.
    fn decode(cur: &MatchCursor<'s>) -> Option<Self> {
        if !cur.has_next() {
            return None;
        }
        let has = |n| cur.has_group(n).unwrap_or(false);
        let text = |n| cur.group(n).unwrap_or_default();

        if has(PLUS_MARKER) {
            Some(Self::DelimitedPlus {
                content: text(PLUS_TEXT),
            })
        } else if has(DOLLAR_MARKER) {
            Some(Self::DelimitedDollar {
                content: text(DOLLAR_TEXT),
            })
        } else if has(PASS_SUBS) || has(PASS_TEXT) {
            Some(Self::PassMacro {
                substitutions: text(PASS_SUBS),
                content: text(PASS_TEXT),
            })
        } else {
            None
        }
    }

    pub fn content(&self) -> &'s str {
        match self {
            Self::DelimitedPlus { content }
            | Self::DelimitedDollar { content }
            | Self::PassMacro { content, .. } => *content,
        }
    }

    /// The delimiter of the delimited forms; `None` for the `pass:` macro.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            Self::DelimitedPlus { .. } => Some(Self::PLUS),
            Self::DelimitedDollar { .. } => Some(Self::DOLLAR),
            Self::PassMacro { .. } => None,
        }
    }

    /// Individual substitution names of a `pass:` macro, e.g. `quotes`.
    pub fn substitution_names(&self) -> impl Iterator<Item = &'s str> + use<'s> {
        let subs = match self {
            Self::PassMacro { substitutions, .. } => *substitutions,
            _ => "",
        };
        subs.split(',').filter(|s| !s.is_empty())
    }
}

/// A [`MatchCursor`] fixed to the passthrough pattern, with the current match
/// decoded into a [`Passthrough`].
///
/// Every field accessor is total: a field that does not apply to the current
/// syntax, or an exhausted cursor, yields `""` or `false`.
#[derive(Debug, Clone)]
pub struct PassthroughCursor<'s> {
    inner: MatchCursor<'s>,
    current: Option<Passthrough<'s>>,
}

impl<'s> PassthroughCursor<'s> {
    pub fn new(source: &'s str) -> Self {
        let inner = PatternKind::PassInlineMacro.pattern().cursor(source);
        let current = Passthrough::decode(&inner);
        Self { inner, current }
    }

    /// The underlying cursor, for prefix/suffix and raw group access.
    pub fn cursor(&self) -> &MatchCursor<'s> {
        &self.inner
    }

    pub fn current(&self) -> Option<Passthrough<'s>> {
        self.current
    }

    pub fn has_any_match(&self) -> bool {
        self.inner.has_any_match()
    }

    pub fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    pub fn next(&mut self) {
        self.inner.next();
        self.current = Passthrough::decode(&self.inner);
    }

    pub fn reset_next(&mut self) {
        self.inner.reset_next();
        self.current = Passthrough::decode(&self.inner);
    }

    /// True if the current occurrence is preceded by a backslash escape.
    pub fn is_escaped(&self) -> bool {
        self.inner.is_escaped().unwrap_or(false)
    }

    /// Content of a `+++` or `$$` occurrence.
    pub fn inline_text(&self) -> &'s str {
        match self.current {
            Some(Passthrough::DelimitedPlus { content })
            | Some(Passthrough::DelimitedDollar { content }) => content,
            _ => "",
        }
    }

    /// The delimiter used by a `+++` or `$$` occurrence.
    pub fn inline_sub(&self) -> &'static str {
        self.current.and_then(|p| p.marker()).unwrap_or("")
    }

    pub fn has_pass_text(&self) -> bool {
        !self.pass_text().is_empty()
    }

    /// Bracketed content of a `pass:` occurrence.
    pub fn pass_text(&self) -> &'s str {
        match self.current {
            Some(Passthrough::PassMacro { content, .. }) => content,
            _ => "",
        }
    }

    pub fn has_pass_sub(&self) -> bool {
        !self.pass_sub().is_empty()
    }

    /// Substitution list of a `pass:` occurrence, as written.
    pub fn pass_sub(&self) -> &'s str {
        match self.current {
            Some(Passthrough::PassMacro { substitutions, .. }) => substitutions,
            _ => "",
        }
    }
}
