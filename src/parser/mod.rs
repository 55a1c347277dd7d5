//! Free-text parsing: pasted company notes into structured records.
//!
//! The parser is pure. It holds no state beyond its [`Markers`], does no I/O and
//! never fails; storage and reporting are left to the caller.

pub mod classifier;
pub mod companies;
pub mod insights;
pub mod markers;

pub use classifier::{classify_line, LineKind};
pub use companies::{parse_companies, CompanyParser};
pub use insights::split_insights;
pub use markers::Markers;

/// Whitespace plus the byte-order mark that editors prepend to pasted text.
pub(crate) fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Trim blanks (see [`is_blank`]) from both ends of a line.
pub(crate) fn trim_blank(s: &str) -> &str {
    s.trim_matches(is_blank)
}
