use std::{collections::BTreeMap, fmt::Display};

use super::tokens::TokenKind;

/// Observational counters for one scan.
///
/// Only emitted tokens and skipped comments are counted; whitespace is not.
/// Unknown characters are tracked separately and do not contribute to
/// `total_tokens` or `counts_by_kind`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total_tokens: usize,
    pub comments_removed: usize,
    pub unknown_characters: usize,
    pub lines_processed: usize,
    pub counts_by_kind: BTreeMap<TokenKind, usize>,
}

impl Statistics {
    pub fn new(source: &str) -> Self {
        Statistics {
            lines_processed: source.matches('\n').count() + 1,
            ..Default::default()
        }
    }

    pub fn count_of(&self, kind: TokenKind) -> usize {
        self.counts_by_kind.get(&kind).copied().unwrap_or(0)
    }

    pub(crate) fn record_token(&mut self, kind: TokenKind) {
        self.total_tokens += 1;
        *self.counts_by_kind.entry(kind).or_insert(0) += 1;
    }

    pub(crate) fn record_comment(&mut self) {
        self.comments_removed += 1;
    }

    pub(crate) fn record_unknown(&mut self) {
        self.unknown_characters += 1;
    }
}

impl Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Scanner Statistics:")?;
        writeln!(f, "Total Tokens: {}", self.total_tokens)?;
        writeln!(f, "Lines Processed: {}", self.lines_processed)?;
        writeln!(f, "Comments Removed: {}", self.comments_removed)?;
        writeln!(f, "Unknown Characters: {}", self.unknown_characters)?;

        for (kind, count) in &self.counts_by_kind {
            writeln!(f, "{}: {}", kind, count)?;
        }

        Ok(())
    }
}
