//! # MiniJava Error Types
//!
//! [`ScanError`] reports malformed source text, and [`MiniError`] is the
//! single error surface of [`parse_source`](crate::parse_source): scanner
//! failures, table load failures and engine invariant violations. Syntax
//! errors are not errors here; they come back as diagnostics.

use jparse::{ParseError, Position, TableError};
use smartstring::alias::String;
use thiserror::Error;

/// Malformed source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("unexpected character {ch:?} at {position}")]
    UnexpectedChar { ch: char, position: Position },

    #[error("unterminated comment starting at {position}")]
    UnterminatedComment { position: Position },

    #[error("integer literal {text} at {position} is out of range")]
    IntegerOverflow { text: String, position: Position },
}

impl ScanError {
    pub fn position(&self) -> Position {
        match self {
            ScanError::UnexpectedChar { position, .. }
            | ScanError::UnterminatedComment { position }
            | ScanError::IntegerOverflow { position, .. } => *position,
        }
    }
}

/// Everything that can stop [`parse_source`](crate::parse_source) short of
/// producing a parse result.
#[derive(Debug, Error)]
pub enum MiniError {
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("table error: {0}")]
    Table(#[from] TableError),

    #[error("parse error: {0}")]
    Parse(ParseError),

    /// The driver built something other than a compilation unit.
    #[error("unexpected parse result: {0}")]
    Malformed(String),
}

/// Unwraps scanner failures that travelled through the engine as
/// [`ParseError::Scanner`].
impl From<ParseError> for MiniError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Scanner(inner) => match inner.downcast::<ScanError>() {
                Ok(scan) => MiniError::Scan(scan),
                Err(inner) => MiniError::Parse(ParseError::Scanner(inner)),
            },
            ParseError::Table(table) => MiniError::Table(table),
            other => MiniError::Parse(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scanner_errors_are_unwrapped() {
        let scan = ScanError::UnexpectedChar {
            ch: '#',
            position: Position::new(0, 3),
        };
        let err: MiniError = ParseError::Scanner(anyhow::Error::new(scan.clone())).into();
        assert!(matches!(&err, MiniError::Scan(inner) if *inner == scan));
        assert_eq!(err.to_string(), "scan error: unexpected character '#' at 1:4");
    }

    #[test]
    fn other_scanner_failures_stay_parse_errors() {
        let err: MiniError = ParseError::Scanner(anyhow::anyhow!("disk on fire")).into();
        assert!(matches!(err, MiniError::Parse(ParseError::Scanner(_))));
    }

    #[test]
    fn table_errors_are_unwrapped() {
        let table = TableError::InvalidInfo("broken".into());
        let err: MiniError = ParseError::Table(table.clone()).into();
        assert!(matches!(err, MiniError::Table(inner) if inner == table));
    }

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}
    #[test]
    fn mini_error_is_send_sync_static() {
        _assert_send_sync_static::<MiniError>();
        _assert_send_sync_static::<ScanError>();
    }
}
