use crate::models::company::CompanyRecord;
use crate::parser::classifier::{classify_line, LineKind};
use crate::parser::markers::Markers;
use crate::parser::trim_blank;

/// Line-oriented parser turning pasted notes into company records.
///
/// Never fails: malformed input only yields fewer records.
#[derive(Debug, Clone, Default)]
pub struct CompanyParser {
    markers: Markers,
}

/// Fold accumulator: finished records plus the record under construction.
#[derive(Default)]
struct ParseState {
    done: Vec<CompanyRecord>,
    current: Option<CompanyRecord>,
}

impl ParseState {
    fn flush(&mut self) {
        if let Some(rec) = self.current.take() {
            if rec.is_valid() {
                self.done.push(rec);
            }
        }
    }

    fn step(mut self, kind: LineKind<'_>) -> Self {
        match kind {
            LineKind::Header(name) => {
                self.flush();
                self.current = Some(CompanyRecord::new(name));
            }
            LineKind::Bullet(text) | LineKind::Continuation(text) => {
                if let Some(rec) = self.current.as_mut() {
                    if !text.is_empty() {
                        rec.insights.push(text.to_string());
                    }
                }
            }
            LineKind::SectionLabel => {}
        }
        self
    }

    fn finish(mut self) -> Vec<CompanyRecord> {
        self.flush();
        self.done
    }
}

impl CompanyParser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_markers(markers: Markers) -> Self {
        Self { markers }
    }

    /// Parse `text` into records, one per header block with at least one insight.
    #[must_use]
    pub fn parse(&self, text: &str) -> Vec<CompanyRecord> {
        text.split('\n')
            .map(trim_blank)
            .filter(|line| !line.is_empty())
            .map(|line| classify_line(line, &self.markers))
            .fold(ParseState::default(), ParseState::step)
            .finish()
    }
}

/// Parse with the default markers.
#[must_use]
pub fn parse_companies(text: &str) -> Vec<CompanyRecord> {
    CompanyParser::new().parse(text)
}
