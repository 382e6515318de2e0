//! # adoc-rx-engine
//!
//! The lexical matching layer under an AsciiDoc-style converter. It locates
//! markup constructs in a text and lets a caller walk them one at a time,
//! recovering the unmatched text around each one and the pieces inside it.
//!
//! ## Modules
//!
//! - **`patterns`**: the fixed pattern library (admonition labels, passthrough
//!   inline macros, URI sniffing, escaped brackets) plus caller-built patterns
//! - **`cursor`**: `MatchCursor`, an index over the eagerly computed matches of
//!   one pattern in one text
//! - **`passthrough`**: `PassthroughCursor`, which decodes each passthrough match
//!   into one of its three syntaxes
//! - **`span`**: byte ranges into the source text
//!
//! ## Usage
//!
//! ```text
//! let mut cur = PatternKind::EscapedBracket.pattern().cursor(text);
//! while cur.has_next() {
//!     emit_literal(cur.prefix()?);
//!     transform(cur.full_match()?);
//!     cur.next();
//! }
//! emit_literal(cur.suffix());
//! ```
//!
//! Nothing here performs I/O or keeps global mutable state.

pub mod cursor;
pub mod error;
pub mod passthrough;
pub mod patterns;
pub mod span;

pub use cursor::{MatchCursor, Segment};
pub use error::{CursorError, PatternError};
pub use passthrough::{Passthrough, PassthroughCursor};
pub use patterns::{
    AdmonitionKind, Pattern, PatternKind, admonition_kind, is_escaped_bracket, uri_scheme,
};
pub use span::Span;
