use super::ExprError;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::iter::Peekable;
use core::str::CharIndices;
use regex::Regex;
use std::sync::LazyLock;

/// Shape of a symbolic metric reference: uppercase letters (and underscores), optionally followed by digits.
pub const REFERENCE_PATTERN: &str = r"^[A-Z][A-Z_]*[0-9]*$";

static REFERENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(REFERENCE_PATTERN).expect("invalid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Number(&'a str),
    Reference(&'a str),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Number(text) | Self::Reference(text) => f.write_str(text),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
        }
    }
}

/// A token and the byte offset where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned<'a> {
    pub token: Token<'a>,
    pub offset: usize,
}

/// Whether `name` has the shape of a symbolic metric reference.
#[must_use]
pub fn is_reference(name: &str) -> bool {
    REFERENCE_REGEX.is_match(name)
}

pub fn tokenize(source: &str) -> Result<Vec<Spanned<'_>>, ExprError> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        let token = match ch {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_whitespace() => continue,
            c if c.is_ascii_digit() || c == '.' => {
                let end = scan_while(&mut chars, offset + 1, |c| c.is_ascii_digit() || c == '.');
                Token::Number(source.get(offset..end).unwrap_or_default())
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let end = scan_while(&mut chars, offset + 1, |c| c.is_ascii_alphanumeric() || c == '_');
                let name = source.get(offset..end).unwrap_or_default();
                if !is_reference(name) {
                    return Err(ExprError::InvalidReference { name: name.to_string() });
                }
                Token::Reference(name)
            }
            other => return Err(ExprError::UnexpectedChar { ch: other, offset }),
        };

        tokens.push(Spanned { token, offset });
    }

    Ok(tokens)
}

/// Consumes ASCII characters matching `accept`, returning the byte offset just past the last one.
fn scan_while(chars: &mut Peekable<CharIndices<'_>>, mut end: usize, accept: impl Fn(char) -> bool) -> usize {
    while let Some(&(offset, c)) = chars.peek() {
        if !accept(c) {
            break;
        }
        end = offset + c.len_utf8();
        let _ = chars.next();
    }
    end
}
