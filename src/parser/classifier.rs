use crate::parser::markers::Markers;

/// Classification of a single trimmed, non-empty input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Opens a new company; carries the trimmed (possibly empty) name.
    Header(&'a str),
    /// Bullet item; carries the trimmed text after the marker (possibly empty).
    Bullet(&'a str),
    /// Label line such as "Insights:" that never becomes an insight.
    SectionLabel,
    /// Any other line; carries the whole trimmed line.
    Continuation(&'a str),
}

/// Classify a trimmed line. Precedence: header, bullet, section label, continuation.
#[must_use]
pub fn classify_line<'a>(line: &'a str, markers: &Markers) -> LineKind<'a> {
    if let Some(name) = markers.strip_header(line) {
        return LineKind::Header(name.trim());
    }
    if let Some(text) = markers.strip_bullet(line) {
        return LineKind::Bullet(text.trim());
    }
    if markers.is_section_label(line) {
        return LineKind::SectionLabel;
    }
    LineKind::Continuation(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> LineKind<'_> {
        classify_line(line, &Markers::default())
    }

    #[test]
    fn header_with_colon() {
        assert_eq!(classify("Компания: Acme"), LineKind::Header("Acme"));
    }

    #[test]
    fn header_with_space() {
        assert_eq!(classify("Компания   Beta Ltd"), LineKind::Header("Beta Ltd"));
    }

    #[test]
    fn header_with_empty_name() {
        assert_eq!(classify("Компания:"), LineKind::Header(""));
    }

    #[test]
    fn bare_keyword_is_continuation() {
        assert_eq!(classify("Компания"), LineKind::Continuation("Компания"));
    }

    #[test]
    fn bullet_variants() {
        assert_eq!(classify("- first"), LineKind::Bullet("first"));
        assert_eq!(classify("•second"), LineKind::Bullet("second"));
        assert_eq!(classify("* third"), LineKind::Bullet("third"));
        assert_eq!(classify("● fourth"), LineKind::Bullet("fourth"));
        assert_eq!(classify("-"), LineKind::Bullet(""));
    }

    #[test]
    fn bullet_wins_over_section_label() {
        assert_eq!(
            classify("- инсайты по рынку"),
            LineKind::Bullet("инсайты по рынку")
        );
    }

    #[test]
    fn header_wins_over_section_label() {
        assert_eq!(
            classify("Компания: Инсайты Групп"),
            LineKind::Header("Инсайты Групп")
        );
    }

    #[test]
    fn section_label_lines() {
        assert_eq!(classify("Инсайты:"), LineKind::SectionLabel);
        assert_eq!(classify("Основные инсайты"), LineKind::SectionLabel);
    }

    #[test]
    fn plain_text_is_continuation() {
        assert_eq!(
            classify("Revenue doubled in 2023"),
            LineKind::Continuation("Revenue doubled in 2023")
        );
    }

    #[test]
    fn custom_markers() {
        let markers = Markers::new("Company", "insights");
        assert_eq!(
            classify_line("Company: Acme", &markers),
            LineKind::Header("Acme")
        );
        assert_eq!(
            classify_line("Key Insights", &markers),
            LineKind::SectionLabel
        );
        assert_eq!(
            classify_line("Компания: Acme", &markers),
            LineKind::Continuation("Компания: Acme")
        );
    }
}
