/// The three passthrough syntaxes, each allowed to span lines:
/// `+++text+++`, `$$text$$` and `pass:subs[text]`. An optional leading
/// backslash belongs to the match so the cursor can report it as escaped.
pub const SOURCE: &str =
    r"(?s)\\?(?:(\+{3})(.*?)\+{3}|(\$\$)(.*?)\$\$|pass:([a-z,]*)\[(.*?[^\\])\])";

/// `+++` marker of the triple-plus form.
pub const PLUS_MARKER: usize = 1;
/// Content of the triple-plus form.
pub const PLUS_TEXT: usize = 2;
/// `$$` marker of the double-dollar form.
pub const DOLLAR_MARKER: usize = 3;
/// Content of the double-dollar form.
pub const DOLLAR_TEXT: usize = 4;
/// Comma-separated substitutions of the `pass:` macro.
pub const PASS_SUBS: usize = 5;
/// Bracketed content of the `pass:` macro.
pub const PASS_TEXT: usize = 6;
