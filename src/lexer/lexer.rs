use tracing::{debug, trace};

use crate::{
    errors::errors::{DiagnosticSink, Error, ErrorImpl, LogDiagnostics},
    symbols::symbol_table::SymbolSink,
    Position, MK_TOKEN,
};

use super::{
    patterns::{longest_match, PatternEntry, PATTERN_TABLE},
    stats::Statistics,
    tokens::{Token, TokenKind},
};

/// A cursor over one in-memory source buffer.
///
/// Call [`Scanner::next_token`] until it returns `EndOfInput`; further calls
/// keep returning `EndOfInput` at the final position.
pub struct Scanner<'src, S: SymbolSink, D: DiagnosticSink = LogDiagnostics> {
    patterns: &'static [PatternEntry],
    source: &'src str,
    pos: Position,
    stats: Statistics,
    symbols: S,
    diagnostics: D,
}

impl<'src, S: SymbolSink> Scanner<'src, S, LogDiagnostics> {
    pub fn new(source: &'src str, symbols: S) -> Self {
        Scanner::with_diagnostics(source, symbols, LogDiagnostics)
    }
}

impl<'src, S: SymbolSink, D: DiagnosticSink> Scanner<'src, S, D> {
    pub fn with_diagnostics(source: &'src str, symbols: S, diagnostics: D) -> Self {
        Scanner {
            patterns: PATTERN_TABLE.as_slice(),
            source,
            pos: Position::start(),
            stats: Statistics::new(source),
            symbols,
            diagnostics,
        }
    }

    pub fn remainder(&self) -> &'src str {
        &self.source[self.pos.offset..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos.offset >= self.source.len()
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// Snapshot of the counters as of the most recent call to `next_token`.
    pub fn stats(&self) -> Statistics {
        self.stats.clone()
    }

    pub fn symbols(&self) -> &S {
        &self.symbols
    }

    pub fn into_parts(self) -> (S, D, Statistics) {
        (self.symbols, self.diagnostics, self.stats)
    }

    fn advance(&mut self, text: &str) {
        self.pos.advance(text);
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return MK_TOKEN!(TokenKind::EndOfInput, String::new(), self.pos);
            }

            let remaining = self.remainder();

            let Some((kind, len)) = longest_match(self.patterns, remaining) else {
                return self.unmatched_character(remaining);
            };

            let lexeme = &remaining[..len];

            match kind {
                TokenKind::Whitespace => {
                    self.advance(lexeme);
                }
                TokenKind::Comment => {
                    debug!(line = self.pos.line, column = self.pos.column, len, "skipped comment");
                    self.stats.record_comment();
                    self.advance(lexeme);
                }
                _ => {
                    let token = MK_TOKEN!(kind, lexeme.to_string(), self.pos);

                    if kind == TokenKind::Identifier {
                        self.symbols.record_identifier(lexeme, token.line);
                    }

                    self.advance(lexeme);
                    self.stats.record_token(kind);

                    trace!(
                        kind = %token.kind,
                        lexeme = %token.lexeme,
                        line = token.line,
                        column = token.column,
                        "token"
                    );

                    return token;
                }
            }
        }
    }

    /// Consumes exactly one character as `Unknown` and reports it.
    fn unmatched_character(&mut self, remaining: &'src str) -> Token {
        // Only called when the remainder is non-empty.
        let character = remaining.chars().next().unwrap_or('\0');
        let lexeme = &remaining[..character.len_utf8()];

        let token = MK_TOKEN!(TokenKind::Unknown, lexeme.to_string(), self.pos);

        self.diagnostics.report(Error::new(
            ErrorImpl::UnmatchedCharacter { character },
            self.pos,
        ));
        self.stats.record_unknown();
        self.advance(lexeme);

        token
    }
}

impl<'src, S: SymbolSink, D: DiagnosticSink> Iterator for Scanner<'src, S, D> {
    type Item = Token;

    /// Yields every token up to, but not including, `EndOfInput`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_end()).then_some(token)
    }
}

/// Scans `source` to the end.
///
/// The returned tokens end with the `EndOfInput` token. Unknown characters are
/// included as `Unknown` tokens and logged through [`LogDiagnostics`].
pub fn tokenize<S: SymbolSink>(source: &str, symbols: S) -> (Vec<Token>, Statistics) {
    let mut lex = Scanner::new(source, symbols);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is_end();
        tokens.push(token);

        if done {
            break;
        }
    }

    (tokens, lex.stats())
}
