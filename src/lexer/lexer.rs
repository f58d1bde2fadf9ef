use log::{debug, trace};

use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind, CLASSIFICATION};

/// Per-call scan state: the token buffer being assembled, the row/column
/// cursor, and the kind of the most recently emitted token (the one-token
/// lookback the classifier depends on). Created at the start of a
/// `tokenize` call and discarded at its end.
pub struct Scanner {
    tokens: Vec<Token>,
    buffer: String,
    row: usize,
    col: usize,
    last_kind: Option<TokenKind>,
}

impl Scanner {
    pub fn new() -> Scanner {
        Scanner {
            tokens: vec![],
            buffer: String::new(),
            row: 0,
            col: 0,
            last_kind: None,
        }
    }

    /// Advances the cursor over one input character. Runs before the
    /// boundary checks, so a token closed by a newline carries the
    /// incremented row and column 0.
    fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.row += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
    }

    /// Classifies a closed buffer (or a hard-separator character).
    ///
    /// Lookback first: the token directly after a quote marker becomes a
    /// string literal, the token directly after a type name becomes an
    /// identifier. A leading digit overrides the lookback result, and an
    /// exact match in the classification table overrides everything.
    fn classify(&self, text: &str) -> TokenKind {
        let mut kind = TokenKind::Unknown;

        if let Some(last) = self.last_kind {
            if last.is_quote_marker() {
                kind = TokenKind::StringLiteral;
            } else if last.is_type_name() {
                kind = TokenKind::Identifier;
            }
        }

        if text.chars().next().is_some_and(|ch| ch.is_numeric()) {
            kind = TokenKind::IntegerLiteral;
        }

        match CLASSIFICATION.get(text) {
            Some(table_kind) => *table_kind,
            None => kind,
        }
    }

    fn emit(&mut self, text: String) {
        let kind = self.classify(&text);
        trace!("emit {:?} as {} at {}:{}", text, kind, self.row, self.col);
        self.last_kind = Some(kind);
        self.tokens
            .push(MK_TOKEN!(text, kind, self.row, self.col));
    }

    /// Closes the in-progress buffer as a token. Empty buffers are dropped,
    /// never emitted.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let text = std::mem::take(&mut self.buffer);
        self.emit(text);
    }

    /// One left-to-right pass over the input.
    ///
    /// Per character: whitespace closes the buffer and is discarded; the
    /// four hard separators (`'`, `"`, `=`, `;`) close the buffer and are
    /// emitted as one-character tokens; every other non-alphanumeric
    /// character closes the buffer and is discarded, even though the
    /// classification table maps it. Only alphanumeric characters are
    /// appended. The non-alphanumeric flush runs unconditionally after the
    /// separator branches, matching the observed scan order.
    pub fn scan(mut self, input: &str) -> Vec<Token> {
        for ch in input.chars() {
            self.advance(ch);

            if ch.is_whitespace() {
                self.flush();
            } else if matches!(ch, '\'' | '=' | '"' | ';') {
                self.flush();
                self.emit(ch.to_string());
            }

            if !ch.is_alphanumeric() {
                self.flush();
            } else {
                self.buffer.push(ch);
            }
        }

        self.flush();

        debug!(
            "scanned {} bytes into {} tokens",
            input.len(),
            self.tokens.len()
        );
        self.tokens
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Scanner::new()
    }
}

/// Tokenizes the full input text into an ordered token sequence.
///
/// Total over all inputs: unrecognised spellings classify as `Unknown`
/// and the result may be empty, but the call never fails.
pub fn tokenize(input: &str) -> Vec<Token> {
    Scanner::new().scan(input)
}

/// Debug helper: one token per line with its closing position.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| format!("{} @ {}:{}", token, token.row, token.col))
        .collect::<Vec<_>>()
        .join("\n")
}
