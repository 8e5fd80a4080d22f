//! Lexical analysis for the scanner.
//!
//! This module converts source text into a stream of classified tokens. It
//! handles:
//!
//! - The priority-ordered pattern table of lexical categories
//! - Longest-match disambiguation with priority tie-breaking
//! - Skipping of whitespace and comments
//! - Line/column tracking across multi-line constructs
//! - Recovery from unrecognized characters
//! - Scan statistics

pub mod lexer;
pub mod patterns;
pub mod stats;
pub mod tokens;
