use super::PatternKind;

/// Admonition label at the start of a line, followed by a colon and a blank.
pub const SOURCE: &str = r"(?m)^(NOTE|TIP|IMPORTANT|WARNING|CAUTION):[ \t]";

/// Group holding the bare label, e.g. `NOTE`.
pub const LABEL: usize = 1;

/// The admonition labels the library recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdmonitionKind {
    Note,
    Tip,
    Important,
    Warning,
    Caution,
}

impl AdmonitionKind {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "NOTE" => Some(Self::Note),
            "TIP" => Some(Self::Tip),
            "IMPORTANT" => Some(Self::Important),
            "WARNING" => Some(Self::Warning),
            "CAUTION" => Some(Self::Caution),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Note => "NOTE",
            Self::Tip => "TIP",
            Self::Important => "IMPORTANT",
            Self::Warning => "WARNING",
            Self::Caution => "CAUTION",
        }
    }
}

/// Returns the admonition that opens `text`, if its first line carries a label.
pub fn admonition_kind(text: &str) -> Option<AdmonitionKind> {
    let caps = PatternKind::Admonition.pattern().regex().captures(text)?;
    if caps.get(0)?.start() != 0 {
        return None;
    }
    AdmonitionKind::from_label(caps.get(LABEL)?.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("NOTE: Just a little note.", AdmonitionKind::Note)]
    #[case("TIP: Don't forget!", AdmonitionKind::Tip)]
    #[case("IMPORTANT: Read this.", AdmonitionKind::Important)]
    #[case("WARNING: Hot surface.", AdmonitionKind::Warning)]
    #[case("CAUTION:\tSlippery.", AdmonitionKind::Caution)]
    fn recognizes_labels(#[case] text: &str, #[case] kind: AdmonitionKind) {
        assert!(PatternKind::Admonition.pattern().is_match(text));
        assert_eq!(admonition_kind(text), Some(kind));
        assert_eq!(AdmonitionKind::from_label(kind.label()), Some(kind));
    }

    #[rstest]
    #[case("Just a NOTE: in the middle.")]
    #[case("NOTE:no space")]
    #[case("note: lowercase")]
    #[case("HINT: not a keyword")]
    #[case("")]
    fn rejects_non_labels(#[case] text: &str) {
        assert!(!PatternKind::Admonition.pattern().is_match(text));
        assert_eq!(admonition_kind(text), None);
    }

    #[test]
    fn label_on_a_later_line_matches_but_does_not_open_the_text() {
        let text = "Some intro\nWARNING: careful";
        assert!(PatternKind::Admonition.pattern().is_match(text));
        assert_eq!(admonition_kind(text), None);
    }
}
