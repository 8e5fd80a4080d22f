//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates an anchored entry for the pattern table

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The matched source text
/// * `$position` - The position of the first character of the lexeme
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntegerLiteral, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $position:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            line: $position.line,
            column: $position.column,
        }
    };
}

/// Creates a pattern table entry whose regex is anchored at the start of the
/// remaining input.
///
/// The pattern is wrapped as `^(?:...)` so alternations stay anchored as a
/// whole. The regexes are constant, so failing to compile one is a bug.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(TokenKind::Punctuator, r"[(){}\[\],;:]")
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($kind:expr, $regex:expr) => {
        PatternEntry {
            kind: $kind,
            regex: Regex::new(&format!("^(?:{})", $regex)).unwrap(),
        }
    };
}
