//! # jparse
//!
//! A table-driven LALR(1) parsing engine with scope-based error recovery,
//! sized for the full Java grammar but independent of any one grammar.
//!
//! The engine is split into three parts:
//!
//! - [`TableSet`]: validated action, goto and rule tables together with
//!   their [`ParserBasicInfo`]. Built once from a generated [`TableData`]
//!   artifact and shared read-only by every parse.
//! - [`Parser`]: the shift/reduce loop over a [`TokenStream`], that is any
//!   [`TryNext`] source of tokens such as [`IterInput`]. Semantic
//!   values are produced by a [`ParserDriver`], so the engine never looks
//!   inside them.
//! - Error recovery: on a syntax error the parser unwinds to the innermost
//!   scope checkpoint that can continue, optionally through the grammar's
//!   `error` terminal, and records a [`Diagnostic`]. A parse ends with an
//!   [`Outcome`]: accepted with its value, or failed at an unrecoverable
//!   error.
//!
//! Conditions that are not syntax errors (corrupt tables, out-of-range token
//! ids, failing scanners or drivers) are reported as [`ParseError`].
//!
//! Tracing goes through the `log` facade: `trace` shows the stack before each
//! action, `debug` shows recovery decisions.

mod error;
mod info;
mod parser;
mod recovery;
mod stack;
mod tables;
mod token;

#[cfg(test)]
mod test_parser_data;

pub use crate::error::{ParseError, Position, Span, TableError};
pub use crate::info::ParserBasicInfo;
pub use crate::parser::{Outcome, Parser, ParserDriver, ParserStats, Step};
pub use crate::recovery::{Diagnostic, DiagnosticKind};
pub use crate::stack::{ParserStack, ScopeCheckpoint, ScopeStack};
pub use crate::tables::{ParserAction, ProdID, ProdInfo, StateID, SymbolID, TableData, TableSet};
pub use crate::token::{Token, TokenStream};
pub use try_next::{IterInput, TryNext};
