use serde::{Deserialize, Serialize};

/// Default keyword that opens a company block ("Company").
pub const DEFAULT_HEADER_MARKER: &str = "Компания";
/// Default section label that is skipped instead of becoming an insight ("insights").
pub const DEFAULT_SECTION_LABEL: &str = "инсайты";
/// Default characters that start a bullet line.
pub const DEFAULT_BULLETS: [char; 4] = ['-', '•', '●', '*'];

/// Locale-specific marker words the line classifier matches against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    /// Keyword a header line starts with, followed by `:` or a space.
    pub header: String,
    /// Word whose presence (case-insensitive) marks a label line to skip.
    pub section_label: String,
    /// Characters that start a bullet line.
    pub bullets: Vec<char>,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER_MARKER.into(),
            section_label: DEFAULT_SECTION_LABEL.into(),
            bullets: DEFAULT_BULLETS.to_vec(),
        }
    }
}

impl Markers {
    #[must_use]
    pub fn new(header: impl Into<String>, section_label: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            section_label: section_label.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_bullets(mut self, bullets: impl IntoIterator<Item = char>) -> Self {
        self.bullets = bullets.into_iter().collect();
        self
    }

    /// Strip the header keyword and its separator, returning the rest.
    ///
    /// Returns `None` unless the line starts with `<header>:` or `<header> `.
    /// An empty header keyword never matches.
    #[must_use]
    pub fn strip_header<'a>(&self, line: &'a str) -> Option<&'a str> {
        if self.header.is_empty() {
            return None;
        }
        let rest = line.strip_prefix(self.header.as_str())?;
        if let Some(name) = rest.strip_prefix(':') {
            Some(name)
        } else if rest.starts_with(' ') {
            Some(rest)
        } else {
            None
        }
    }

    /// Strip one leading bullet character, returning the rest.
    #[must_use]
    pub fn strip_bullet<'a>(&self, line: &'a str) -> Option<&'a str> {
        let first = line.chars().next()?;
        if self.bullets.contains(&first) {
            Some(&line[first.len_utf8()..])
        } else {
            None
        }
    }

    /// True when the line mentions the section label (case-insensitive).
    #[must_use]
    pub fn is_section_label(&self, line: &str) -> bool {
        if self.section_label.is_empty() {
            return false;
        }
        line.to_lowercase()
            .contains(&self.section_label.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_requires_separator() {
        let m = Markers::default();
        assert_eq!(m.strip_header("Компания: Acme"), Some(" Acme"));
        assert_eq!(m.strip_header("Компания Acme"), Some(" Acme"));
        assert_eq!(m.strip_header("КомпанияAcme"), None);
        assert_eq!(m.strip_header("Компания"), None);
        assert_eq!(m.strip_header("компания: acme"), None);
    }

    #[test]
    fn empty_header_never_matches() {
        let m = Markers::new("", "insights");
        assert_eq!(m.strip_header(": Acme"), None);
    }

    #[test]
    fn bullet_strips_a_single_marker() {
        let m = Markers::default();
        assert_eq!(m.strip_bullet("- one"), Some(" one"));
        assert_eq!(m.strip_bullet("•two"), Some("two"));
        assert_eq!(m.strip_bullet("● three"), Some(" three"));
        assert_eq!(m.strip_bullet("** four"), Some("* four"));
        assert_eq!(m.strip_bullet("plain"), None);
        assert_eq!(m.strip_bullet(""), None);
    }

    #[test]
    fn section_label_is_case_insensitive() {
        let m = Markers::default();
        assert!(m.is_section_label("Инсайты:"));
        assert!(m.is_section_label("КЛЮЧЕВЫЕ ИНСАЙТЫ"));
        assert!(!m.is_section_label("Выручка выросла"));
    }

    #[test]
    fn custom_bullets_replace_defaults() {
        let m = Markers::default().with_bullets(['+']);
        assert_eq!(m.strip_bullet("+ x"), Some(" x"));
        assert_eq!(m.strip_bullet("- x"), None);
    }
}
