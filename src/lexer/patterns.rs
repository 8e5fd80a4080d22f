//! The priority-ordered pattern table.
//!
//! Every entry is tried at every scan step. Order only matters when two
//! entries match the same number of bytes: the earlier entry wins.

use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::{TokenKind, BOOLEANS, KEYWORDS};
use crate::MK_PATTERN;

pub struct PatternEntry {
    pub kind: TokenKind,
    pub regex: Regex,
}

impl PatternEntry {
    /// Length in bytes of the longest prefix of `input` this entry accepts.
    ///
    /// Empty matches are reported as no match so every accepted entry
    /// consumes input.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        self.regex
            .find(input)
            .map(|m| m.end())
            .filter(|len| *len > 0)
    }
}

lazy_static! {
    pub static ref PATTERN_TABLE: Vec<PatternEntry> = vec![
        // `#* ... *#`; interior `*` and `#` do not close it.
        MK_PATTERN!(TokenKind::Comment, r"#\*([^*]|\*+[^#*])*\*+#"),
        MK_PATTERN!(TokenKind::Comment, r"##[^\n\r]*"),
        MK_PATTERN!(TokenKind::Operator, r"\*\*|==|!=|<=|>=|&&|\|\||\+\+|--|\+=|-=|\*=|/="),
        MK_PATTERN!(TokenKind::Keyword, KEYWORDS.join("|")),
        MK_PATTERN!(TokenKind::BooleanLiteral, BOOLEANS.join("|")),
        MK_PATTERN!(TokenKind::Identifier, r"[A-Z][a-z0-9 ]{0,30}"),
        MK_PATTERN!(TokenKind::FloatLiteral, r"[+-]?[0-9]+\.[0-9]{1,6}([eE][+-]?[0-9]+)?"),
        MK_PATTERN!(TokenKind::IntegerLiteral, r"[+-]?[0-9]+"),
        MK_PATTERN!(TokenKind::StringLiteral, r#""([^"\\\n]|\\["\\ntr])*""#),
        MK_PATTERN!(TokenKind::CharLiteral, r"'([^'\\\n]|\\[\\'ntr])'"),
        MK_PATTERN!(TokenKind::Operator, r"[+\-*/%=<>!]"),
        MK_PATTERN!(TokenKind::Punctuator, r"[(){}\[\],;:]"),
        MK_PATTERN!(TokenKind::Whitespace, r"[ \t\r\n]+"),
    ];
}

/// Picks the entry with the longest match at the start of `input`.
///
/// Returns the winning kind and the match length in bytes. On equal
/// lengths the entry declared first wins, so only a strictly longer match
/// replaces the current best.
pub fn longest_match(table: &[PatternEntry], input: &str) -> Option<(TokenKind, usize)> {
    let mut best: Option<(TokenKind, usize)> = None;

    for entry in table {
        if let Some(len) = entry.match_len(input) {
            match best {
                Some((_, best_len)) if len <= best_len => {}
                _ => best = Some((entry.kind, len)),
            }
        }
    }

    best
}
