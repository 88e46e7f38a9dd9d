//! Source locations and error types shared by the table set and the engine.
//!
//! [`Position`] and [`Span`] are attached to tokens by the scanner and carried
//! into diagnostics. [`TableError`] reports an inconsistent or corrupt table
//! artifact, and [`ParseError`] covers every condition that stops the engine
//! other than a syntax error: broken token streams, failing semantic actions
//! and table corruption discovered during a lookup.
//!
//! Syntax errors are *not* errors in this sense. They are reported as
//! [`Diagnostic`](crate::Diagnostic)s inside an [`Outcome`](crate::Outcome).

use crate::{ProdID, StateID, SymbolID};
use smartstring::alias::String;
use std::fmt;
use thiserror::Error;

/// A 0-based line/column position in source text.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// 0-based line number.
    pub line: usize,
    /// 0-based column number (character position in the line).
    pub column: usize,
}

impl Position {
    /// Creates a new `Position`.
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Renders as a 1-based `line:column` pair.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// A half-open source range: `[start, end)`.
///
/// Invariants are not enforced here, but it is conventional for `start <= end`
/// in lexicographic `(line, column)` ordering.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Creates a new `Span`.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// Build an `Option<Span>` inline from 0-based line/column coordinates.
///
/// ```text
/// let s = span!(0, 0, 0, 5);
/// assert!(s.is_some());
/// ```
#[macro_export]
macro_rules! span {
    ($line_start:expr, $col_start:expr, $line_end:expr, $col_end:expr) => {
        Some($crate::Span {
            start: $crate::Position {
                line: $line_start,
                column: $col_start,
            },
            end: $crate::Position {
                line: $line_end,
                column: $col_end,
            },
        })
    };
}

/// An inconsistency between a table artifact and its basic information, or a
/// lookup that left the documented bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("invalid parser basic information: {0}")]
    InvalidInfo(String),

    #[error("{table} table has {actual} entries, expected {expected}")]
    LengthMismatch {
        table: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("state {0} is outside 1..={1}")]
    StateOutOfRange(StateID, u16),

    #[error("symbol {0} is not a terminal (1..={1})")]
    TerminalOutOfRange(SymbolID, u16),

    #[error("symbol {symbol} is not a non-terminal ({first}..={last})")]
    NonTerminalOutOfRange {
        symbol: SymbolID,
        first: u16,
        last: u16,
    },

    #[error("rule {0} is outside 1..={1}")]
    ProdOutOfRange(ProdID, u16),

    #[error("corrupt action {raw} in state {state} on terminal {symbol}")]
    CorruptAction {
        state: StateID,
        symbol: SymbolID,
        raw: u16,
    },

    #[error("corrupt goto target {raw} in state {state} on non-terminal {symbol}")]
    CorruptGoto {
        state: StateID,
        symbol: SymbolID,
        raw: u16,
    },

    #[error("no goto from state {state} on non-terminal {symbol}")]
    MissingGoto { state: StateID, symbol: SymbolID },
}

/// A condition that stops the engine without producing an [`Outcome`](crate::Outcome).
///
/// Everything here is a broken contract between the engine and one of its
/// collaborators (scanner, table artifact, semantic driver). Syntax errors in
/// the input are never reported through this type.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The token stream produced a terminal id outside `[1, NUM_TERMINALS]`.
    #[error("token {index} has symbol {symbol}, which is not a terminal (1..={max})")]
    InvalidTerminal {
        index: usize,
        symbol: SymbolID,
        max: u16,
    },

    /// The token stream ended without yielding the end-of-input symbol.
    #[error("token stream ended after {tokens} tokens without an end-of-input symbol")]
    UnterminatedStream { tokens: usize },

    /// A reduction asked for more frames than the stack holds.
    #[error("stack underflow: rule {prod} pops {arity} values, stack holds {depth}")]
    StackUnderflow {
        prod: ProdID,
        arity: usize,
        depth: usize,
    },

    /// The automaton accepted with other than exactly one value on the stack.
    #[error("accept with {values} values on the stack, expected 1")]
    AcceptDepth { values: usize },

    /// [`Parser::step`](crate::Parser::step) was called after the parse ended.
    #[error("parser has already finished")]
    Finished,

    /// A table lookup failed its bounds or encoding checks.
    #[error(transparent)]
    Table(#[from] TableError),

    /// The token stream failed to produce the next token.
    #[error("scanner error: {0:#}")]
    Scanner(anyhow::Error),

    /// A semantic action supplied by the driver failed.
    #[error("semantic action failed: {0:#}")]
    Action(anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_display_one_based() {
        assert_eq!(Position::new(0, 0).to_string(), "1:1");
        assert_eq!(Position::new(4, 11).to_string(), "5:12");
    }

    #[test]
    fn table_error_is_wrapped_transparently() {
        let err: ParseError = TableError::StateOutOfRange(StateID(9), 4).into();
        assert!(matches!(err, ParseError::Table(_)));
        assert_eq!(err.to_string(), "state 9 is outside 1..=4");
    }

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}
    #[test]
    fn errors_are_send_sync_static() {
        _assert_send_sync_static::<TableError>();
        _assert_send_sync_static::<ParseError>();
    }
}
