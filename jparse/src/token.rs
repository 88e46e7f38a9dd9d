//! The engine's view of the scanner: tokens carrying a terminal id and a
//! span, pulled one at a time from a [`TokenStream`].

use crate::{Span, SymbolID};
use std::fmt::Debug;
use try_next::TryNext;

/// A terminal symbol with an opaque payload.
///
/// The engine only looks at [`symbol`](Token::symbol) (to index the action
/// table) and [`span`](Token::span) (for diagnostics). Everything else is
/// handed untouched to the [`ParserDriver`](crate::ParserDriver).
pub trait Token: Clone + Debug {
    fn symbol(&self) -> SymbolID;
    fn span(&self) -> Option<Span>;
}

/// A [`TryNext`] source of [`Token`]s, terminated by a token whose symbol is
/// the grammar's end-of-input terminal.
///
/// Returning `Ok(None)` before the end-of-input token has been produced is a
/// broken contract and aborts the parse. Stream errors reach the caller as
/// [`ParseError::Scanner`](crate::ParseError::Scanner).
///
/// Implemented for every matching source, including
/// [`IterInput`](try_next::IterInput) over a token iterator.
pub trait TokenStream:
    TryNext<Item: Token, Error: std::error::Error + Send + Sync + 'static>
{
}

impl<S> TokenStream for S
where
    S: TryNext,
    S::Item: Token,
    S::Error: std::error::Error + Send + Sync + 'static,
{
}
