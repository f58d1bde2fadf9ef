//! Utility macros for the tokenizer.
//!
//! This module defines helper macros used throughout the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate in the scanner implementation and tests.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$text` - The exact substring the token was scanned from
/// * `$kind` - The TokenKind
/// * `$row` - The row the token was closed on
/// * `$col` - The column the token was closed on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!("42".to_string(), TokenKind::IntegerLiteral, 0, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($text:expr, $kind:expr, $row:expr, $col:expr) => {
        Token {
            text: $text,
            kind: $kind,
            row: $row,
            col: $col,
        }
    };
}
