//! # MiniJava Tokens
//!
//! [`MiniToken`] pairs a [`TokenID`] from the generated tables with its
//! payload and source span, and implements [`jparse::Token`] so the engine
//! can index its action table with it.

use crate::TokenID;
use jparse::{Span, SymbolID, Token};
use smartstring::alias::String;
use std::fmt;

/// The payload carried by a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    /// No associated data (keywords, punctuation, end of input).
    None,

    /// Identifier text.
    Ident(String),

    /// Integer literal.
    Number(i32),
}

/// A MiniJava token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiniToken {
    pub token_id: TokenID,
    pub value: TokenValue,
    pub span: Option<Span>,
}

impl MiniToken {
    pub fn new(token_id: TokenID, value: TokenValue, span: Option<Span>) -> Self {
        Self {
            token_id,
            value,
            span,
        }
    }

    /// Identifier text, if this is an identifier.
    pub fn ident(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// Value of an integer literal.
    pub fn number(&self) -> Option<i32> {
        match self.value {
            TokenValue::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl Token for MiniToken {
    fn symbol(&self) -> SymbolID {
        SymbolID(self.token_id.into())
    }

    fn span(&self) -> Option<Span> {
        self.span
    }
}

impl TokenID {
    /// Source text of a keyword or punctuation token.
    pub fn fixed_text(self) -> Option<&'static str> {
        let text = match self {
            TokenID::Class => "class",
            TokenID::Public => "public",
            TokenID::Static => "static",
            TokenID::Void => "void",
            TokenID::Int => "int",
            TokenID::Boolean => "boolean",
            TokenID::Return => "return",
            TokenID::If => "if",
            TokenID::While => "while",
            TokenID::LBrace => "{",
            TokenID::RBrace => "}",
            TokenID::LParen => "(",
            TokenID::RParen => ")",
            TokenID::Semicolon => ";",
            TokenID::Assign => "=",
            TokenID::Plus => "+",
            TokenID::Identifier | TokenID::IntegerLiteral | TokenID::Eof | TokenID::Error => {
                return None;
            }
        };
        Some(text)
    }
}

impl fmt::Display for MiniToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.value, self.token_id.fixed_text()) {
            (TokenValue::Ident(name), _) => f.write_str(name),
            (TokenValue::Number(n), _) => write!(f, "{}", n),
            (TokenValue::None, Some(text)) => f.write_str(text),
            (TokenValue::None, None) => write!(f, "<{:?}>", self.token_id),
        }
    }
}
