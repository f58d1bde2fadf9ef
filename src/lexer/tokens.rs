use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    /// Classification table mapping exact spellings to token kinds.
    ///
    /// Built once at startup and shared read-only by every scan. Note that
    /// `=` and `==` both map to `Equals`: the table keeps the observed
    /// collision rather than introducing a separate assignment kind.
    pub static ref CLASSIFICATION: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();

        // Keywords
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("function", TokenKind::Function);
        map.insert("return", TokenKind::Return);

        // Type names
        map.insert("int", TokenKind::Int);
        map.insert("float", TokenKind::Float);
        map.insert("string", TokenKind::String);
        map.insert("boolean", TokenKind::Boolean);

        // Operators
        map.insert("+", TokenKind::Plus);
        map.insert("-", TokenKind::Dash);
        map.insert("*", TokenKind::Star);
        map.insert("/", TokenKind::Slash);
        map.insert("%", TokenKind::Percent);
        map.insert("==", TokenKind::Equals);
        map.insert("!=", TokenKind::NotEquals);
        map.insert("<", TokenKind::Less);
        map.insert("<=", TokenKind::LessEquals);
        map.insert(">", TokenKind::Greater);
        map.insert(">=", TokenKind::GreaterEquals);
        map.insert("&&", TokenKind::And);
        map.insert("||", TokenKind::Or);
        map.insert("!", TokenKind::Not);

        // Punctuation
        map.insert(";", TokenKind::Semicolon);
        map.insert(",", TokenKind::Comma);
        map.insert(":", TokenKind::Colon);
        map.insert(".", TokenKind::Dot);

        // Quotes
        map.insert("'", TokenKind::SingleQuote);
        map.insert("\"", TokenKind::DoubleQuote);

        // Parentheses and brackets
        map.insert("(", TokenKind::OpenParen);
        map.insert(")", TokenKind::CloseParen);
        map.insert("{", TokenKind::OpenCurly);
        map.insert("}", TokenKind::CloseCurly);
        map.insert("[", TokenKind::OpenBracket);
        map.insert("]", TokenKind::CloseBracket);

        // Assignment shares the equality kind
        map.insert("=", TokenKind::Equals);

        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Keywords
    If,
    Else,
    While,
    For,
    Function,
    Return,

    // Type names
    Int,
    Float,
    String,
    Boolean,

    // Operators
    Plus,
    Dash,
    Star,
    Slash,
    Percent,
    Equals, // both = and ==
    NotEquals,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    And,
    Or,
    Not,

    // Punctuation
    Semicolon,
    Comma,
    Colon,
    Dot,

    // Parentheses and brackets
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,

    // Quotes
    SingleQuote,
    DoubleQuote,

    // Identifiers and literals. FloatLiteral and BooleanLiteral are part
    // of the token shape for downstream consumers but the scanner never
    // produces them.
    Identifier,
    IntegerLiteral,
    FloatLiteral,
    StringLiteral,
    BooleanLiteral,

    Unknown,
}

impl TokenKind {
    /// Opening/closing quote markers, the lookback trigger for string
    /// literal classification.
    pub fn is_quote_marker(&self) -> bool {
        matches!(self, TokenKind::SingleQuote | TokenKind::DoubleQuote)
    }

    /// Type-name keywords, the lookback trigger for identifier
    /// classification.
    pub fn is_type_name(&self) -> bool {
        matches!(
            self,
            TokenKind::Int | TokenKind::Float | TokenKind::String | TokenKind::Boolean
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified, positioned unit of text. `row` and `col` are the cursor
/// position at the moment the token was closed, not the position of its
/// first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub row: usize,
    pub col: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:?})", self.kind, self.text)
    }
}

impl Token {
    pub fn is_one_of(&self, kinds: &[TokenKind]) -> bool {
        for kind in kinds {
            if *kind == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of(&[
            TokenKind::Identifier,
            TokenKind::IntegerLiteral,
            TokenKind::StringLiteral,
            TokenKind::Unknown,
        ]) {
            println!("{} ({}) @ {}:{}", self.kind, self.text, self.row, self.col);
        } else {
            println!("{} @ {}:{}", self.kind, self.row, self.col);
        }
    }
}
