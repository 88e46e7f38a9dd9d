//! # MiniJava Scanner
//!
//! Tokenization is done by a [`logos`] lexer over a `&str`; whitespace and
//! `//` and `/* */` comments are skipped there. [`Scanner`] wraps it with
//! 0-based line/column tracking and ends every stream with exactly one
//! [`TokenID::Eof`] token.

use crate::{MiniToken, ScanError, TokenID, TokenValue};
use jparse::{Position, Span};
use logos::Logos;
use smartstring::alias::String;
use try_next::TryNext;

/// Raw lexemes recognized by the logos lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*([^*]|\*+[^*/])*\*+/")]
enum Lexeme {
    #[token("class")]
    Class,
    #[token("public")]
    Public,
    #[token("static")]
    Static,
    #[token("void")]
    Void,
    #[token("int")]
    Int,
    #[token("boolean")]
    Boolean,
    #[token("return")]
    Return,
    #[token("if")]
    If,
    #[token("while")]
    While,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,

    #[regex(r"[\p{Alphabetic}_$][\p{Alphabetic}\p{Nd}_$]*")]
    Identifier,
    #[regex(r"[0-9]+")]
    IntegerLiteral,

    // a `/*` that runs to the end of the input
    #[regex(r"/\*([^*]|\*+[^*/])*\**")]
    OpenComment,
}

impl Lexeme {
    fn token_id(self) -> TokenID {
        match self {
            Lexeme::Class => TokenID::Class,
            Lexeme::Public => TokenID::Public,
            Lexeme::Static => TokenID::Static,
            Lexeme::Void => TokenID::Void,
            Lexeme::Int => TokenID::Int,
            Lexeme::Boolean => TokenID::Boolean,
            Lexeme::Return => TokenID::Return,
            Lexeme::If => TokenID::If,
            Lexeme::While => TokenID::While,
            Lexeme::LBrace => TokenID::LBrace,
            Lexeme::RBrace => TokenID::RBrace,
            Lexeme::LParen => TokenID::LParen,
            Lexeme::RParen => TokenID::RParen,
            Lexeme::Semicolon => TokenID::Semicolon,
            Lexeme::Assign => TokenID::Assign,
            Lexeme::Plus => TokenID::Plus,
            Lexeme::Identifier => TokenID::Identifier,
            Lexeme::IntegerLiteral => TokenID::IntegerLiteral,
            Lexeme::OpenComment => TokenID::Error,
        }
    }
}

pub struct Scanner<'a> {
    lexer: logos::Lexer<'a, Lexeme>,
    /// Byte offset of `pos`.
    offset: usize,
    pos: Position,
    done: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            lexer: Lexeme::lexer(src),
            offset: 0,
            pos: Position::default(),
            done: false,
        }
    }

    /// Position just past the last scanned token.
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Moves the line/column cursor forward to byte `offset`.
    fn locate(&mut self, offset: usize) -> Position {
        let src = self.lexer.source();
        for ch in src[self.offset..offset].chars() {
            if ch == '\n' {
                self.pos.line += 1;
                self.pos.column = 0;
            } else {
                self.pos.column += 1;
            }
        }
        self.offset = offset;
        self.pos
    }

    /// Scans the next token. Past the end, keeps returning end-of-input.
    pub fn next_token(&mut self) -> Result<MiniToken, ScanError> {
        let Some(lexeme) = self.lexer.next() else {
            let len = self.lexer.source().len();
            let end = self.locate(len);
            return Ok(MiniToken::new(TokenID::Eof, TokenValue::None, Some(Span::new(end, end))));
        };
        let range = self.lexer.span();
        let text = self.lexer.slice();
        let start = self.locate(range.start);

        let lexeme = match lexeme {
            Ok(Lexeme::OpenComment) => {
                return Err(ScanError::UnterminatedComment { position: start });
            }
            Ok(lexeme) => lexeme,
            Err(()) => {
                let ch = text.chars().next().unwrap_or_default();
                return Err(ScanError::UnexpectedChar { ch, position: start });
            }
        };
        let value = match lexeme {
            Lexeme::Identifier => TokenValue::Ident(String::from(text)),
            Lexeme::IntegerLiteral => {
                let n = text.parse::<i32>().map_err(|_| ScanError::IntegerOverflow {
                    text: String::from(text),
                    position: start,
                })?;
                TokenValue::Number(n)
            }
            _ => TokenValue::None,
        };
        let token_id = lexeme.token_id();
        let end = self.locate(range.end);
        Ok(MiniToken::new(token_id, value, Some(Span::new(start, end))))
    }
}

impl TryNext for Scanner<'_> {
    type Item = MiniToken;
    type Error = ScanError;

    fn try_next(&mut self) -> Result<Option<MiniToken>, ScanError> {
        if self.done {
            return Ok(None);
        }
        let token = self.next_token()?;
        if token.token_id == TokenID::Eof {
            self.done = true;
        }
        Ok(Some(token))
    }
}

/// Scans all of `src`, including the final end-of-input token.
pub fn tokenize(src: &str) -> Result<Vec<MiniToken>, ScanError> {
    Scanner::new(src).try_collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jparse::span;

    fn ids(src: &str) -> Vec<TokenID> {
        tokenize(src).unwrap().into_iter().map(|t| t.token_id).collect()
    }

    #[test]
    fn scans_keywords_identifiers_and_punctuation() {
        assert_eq!(
            ids("public class Main { int x = 1 + y; }"),
            vec![
                TokenID::Public,
                TokenID::Class,
                TokenID::Identifier,
                TokenID::LBrace,
                TokenID::Int,
                TokenID::Identifier,
                TokenID::Assign,
                TokenID::IntegerLiteral,
                TokenID::Plus,
                TokenID::Identifier,
                TokenID::Semicolon,
                TokenID::RBrace,
                TokenID::Eof,
            ]
        );
    }

    #[test]
    fn keeps_identifier_text_and_literal_values() {
        let tokens = tokenize("classy $x_1 007").unwrap();
        assert_eq!(tokens[0].ident(), Some("classy"));
        assert_eq!(tokens[1].ident(), Some("$x_1"));
        assert_eq!(tokens[2].number(), Some(7));
    }

    #[test]
    fn keyword_spellings_match_fixed_text() {
        for word in ["class", "public", "static", "void", "int", "boolean", "return", "if", "while"] {
            let tokens = tokenize(word).unwrap();
            assert_eq!(tokens[0].token_id.fixed_text(), Some(word));
        }
        assert_eq!(ids("Class"), vec![TokenID::Identifier, TokenID::Eof]);
    }

    #[test]
    fn tracks_positions_across_lines() {
        let tokens = tokenize("class A\n  {\n}").unwrap();
        assert_eq!(tokens[0].span, span!(0, 0, 0, 5));
        assert_eq!(tokens[1].span, span!(0, 6, 0, 7));
        assert_eq!(tokens[2].span, span!(1, 2, 1, 3));
        assert_eq!(tokens[3].span, span!(2, 0, 2, 1));
        assert_eq!(tokens[4].span, span!(2, 1, 2, 1));
    }

    #[test]
    fn counts_columns_in_characters() {
        let tokens = tokenize("/* é */ ä = 1").unwrap();
        assert_eq!(tokens[0].ident(), Some("ä"));
        assert_eq!(tokens[0].span, span!(0, 8, 0, 9));
        assert_eq!(tokens[1].span, span!(0, 10, 0, 11));
    }

    #[test]
    fn skips_comments() {
        let src = "// leading\nclass /* inline\n comment **/ A { } // trailing";
        assert_eq!(
            ids(src),
            vec![TokenID::Class, TokenID::Identifier, TokenID::LBrace, TokenID::RBrace, TokenID::Eof]
        );
    }

    #[test]
    fn reports_unexpected_characters() {
        let err = tokenize("class A {\n  # }").unwrap_err();
        assert_eq!(
            err,
            ScanError::UnexpectedChar {
                ch: '#',
                position: Position::new(1, 2)
            }
        );
    }

    #[test]
    fn reports_unterminated_comments() {
        let err = tokenize("class /* never closed").unwrap_err();
        assert_eq!(err.position(), Position::new(0, 6));
        assert!(matches!(err, ScanError::UnterminatedComment { .. }));
        let err = tokenize("x /* ends in stars **").unwrap_err();
        assert!(matches!(err, ScanError::UnterminatedComment { .. }));
    }

    #[test]
    fn rejects_out_of_range_literals() {
        assert_eq!(tokenize("2147483647").unwrap()[0].number(), Some(i32::MAX));
        assert!(matches!(
            tokenize("2147483648"),
            Err(ScanError::IntegerOverflow { .. })
        ));
    }

    #[test]
    fn stream_ends_after_eof() {
        let mut scanner = Scanner::new("x");
        assert_eq!(scanner.try_next().unwrap().unwrap().token_id, TokenID::Identifier);
        assert_eq!(scanner.try_next().unwrap().unwrap().token_id, TokenID::Eof);
        assert!(scanner.try_next().unwrap().is_none());
        assert_eq!(scanner.position(), Position::new(0, 1));
    }
}
