// Pedantic lint configuration for the crate.
// - cast_possible_truncation / cast_sign_loss / cast_precision_loss: progress percentages
//   are computed over a handful of companies
// - missing_errors_doc: Error handling is self-evident from Result types
// - must_use_candidate: Operations return values callers print, not assert on
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod operations;
pub mod parser;
