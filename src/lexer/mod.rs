//! Lexical analysis module.
//!
//! This module contains the scanner that converts raw source text into
//! a sequence of classified, position-tagged tokens. It handles:
//!
//! - Character-class-driven scanning with row/column tracking
//! - A static classification table for keywords, operators and punctuation
//! - Lookback classification for string literals and identifiers
//! - Unrecognised spellings, which degrade to `Unknown` instead of failing

pub mod lexer;
pub mod tokens;
