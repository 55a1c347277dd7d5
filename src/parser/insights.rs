use crate::parser::{is_blank, trim_blank};

/// Characters stripped from the start of each insight piece, besides whitespace.
const LEADING_MARKS: [char; 4] = ['•', '-', '–', '●'];

/// Split a free-form insight blob into clean lines.
///
/// Inline `•` separators start a new line; leading whitespace, bullets and dashes are
/// stripped from every piece and empty pieces are dropped.
#[must_use]
pub fn split_insights(s: &str) -> Vec<String> {
    trim_blank(s)
        .replace("\r\n", "\n")
        .replace('\u{2022}', "\n")
        .split('\n')
        .map(|piece| {
            piece
                .trim_start_matches(|c: char| is_blank(c) || LEADING_MARKS.contains(&c))
                .trim_end_matches(is_blank)
        })
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}
