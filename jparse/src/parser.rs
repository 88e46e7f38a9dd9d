//! The table-driven LALR(1) engine.
//!
//! A [`Parser`] pulls terminals from a [`TokenStream`], consults a shared
//! [`TableSet`] and hands every shift and reduction to a [`ParserDriver`],
//! which owns the semantic values. Syntax errors are handed to the recovery
//! manager (see [`Diagnostic`]); everything else that goes wrong is a
//! [`ParseError`].

use crate::stack::{ParserStack, ScopeCheckpoint, ScopeStack};
use crate::{
    Diagnostic, ParseError, ParserAction, ProdID, ProdInfo, StateID, SymbolID, TableSet, Token,
    TokenStream,
};
use anyhow::Result;
use smartstring::alias::String;
use try_next::TryNext;

/// Semantic actions invoked by the engine.
///
/// The engine never inspects a `Value`; it only moves values between the
/// stack and the driver.
pub trait ParserDriver {
    type Token: Token;
    type Value;

    /// Produces the value of a shifted terminal.
    fn shift(&mut self, token: Self::Token) -> Result<Self::Value>;

    /// Combines the popped right-hand-side values of `prod`, leftmost first.
    fn reduce(&mut self, prod: ProdID, values: Vec<Self::Value>) -> Result<Self::Value>;

    /// Produces the value of a synthetic `error` terminal inserted during
    /// recovery. `token` is the lookahead the parser resumes on.
    fn recover(&mut self, token: &Self::Token) -> Result<Self::Value>;
}

/// Counters collected over one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserStats {
    /// Tokens pulled from the stream.
    pub tokens: usize,
    /// Terminals shifted, not counting the synthetic `error` terminal.
    pub shifts: usize,
    pub reductions: usize,
    pub recoveries: usize,
    /// Scope checkpoints dropped because the scope stack was full.
    pub evictions: usize,
    /// Largest number of states on the stack.
    pub max_depth: usize,
}

/// How a parse ended.
#[derive(Debug)]
pub enum Outcome<V> {
    /// The input was accepted, possibly after recovering from syntax errors.
    Accepted {
        value: V,
        diagnostics: Vec<Diagnostic>,
    },
    /// The parse stopped at a syntax error it could not recover from. The
    /// last diagnostic describes that error.
    Failed { diagnostics: Vec<Diagnostic> },
}

impl<V> Outcome<V> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted { .. })
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Outcome::Accepted { diagnostics, .. } | Outcome::Failed { diagnostics } => diagnostics,
        }
    }

    pub fn value(&self) -> Option<&V> {
        match self {
            Outcome::Accepted { value, .. } => Some(value),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn into_value(self) -> Option<V> {
        match self {
            Outcome::Accepted { value, .. } => Some(value),
            Outcome::Failed { .. } => None,
        }
    }
}

/// Result of a single [`Parser::step`].
#[derive(Debug)]
pub enum Step<V> {
    Continue,
    Done(Outcome<V>),
}

/// One parse over one token stream.
///
/// The stacks are owned by the parser and dropped with it. The table set is
/// borrowed, so any number of parsers can share it.
pub struct Parser<'t, S, D>
where
    S: TokenStream,
    D: ParserDriver<Token = S::Item>,
{
    pub(crate) tables: &'t TableSet,
    stream: S,
    pub(crate) driver: D,
    pub(crate) stack: ParserStack<D::Value>,
    pub(crate) scopes: ScopeStack,
    /// Current lookahead, pulled on demand.
    pub(crate) lookahead: Option<S::Item>,
    /// Index of the lookahead in the token stream.
    pub(crate) la_index: usize,
    /// Look up the synthetic `error` terminal instead of the lookahead.
    pub(crate) inject_error: bool,
    /// `(token index, depth)` of the most recent recovery.
    pub(crate) last_recovery: Option<(usize, usize)>,
    pub(crate) diagnostics: Vec<Diagnostic>,
    pub(crate) stats: ParserStats,
    finished: bool,
}

impl<'t, S, D> Parser<'t, S, D>
where
    S: TokenStream,
    D: ParserDriver<Token = S::Item>,
{
    pub fn new(tables: &'t TableSet, stream: S, driver: D) -> Self {
        let start = tables.start_state();
        let mut scopes = ScopeStack::new(tables.info().scope_capacity());
        if tables.is_recovery_point(start) {
            scopes.push(ScopeCheckpoint {
                depth: 1,
                state: start,
                token_index: 0,
                span: None,
            });
        }
        Self {
            tables,
            stream,
            driver,
            stack: ParserStack::new(start),
            scopes,
            lookahead: None,
            la_index: 0,
            inject_error: false,
            last_recovery: None,
            diagnostics: Vec::new(),
            stats: ParserStats {
                max_depth: 1,
                ..ParserStats::default()
            },
            finished: false,
        }
    }

    pub fn stats(&self) -> ParserStats {
        self.stats.clone()
    }

    /// Diagnostics recorded so far; moved into the [`Outcome`] when the
    /// parse ends.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of states on the stack.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Number of live scope checkpoints.
    pub fn scope_depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Runs the parse to completion.
    pub fn parse(&mut self) -> Result<Outcome<D::Value>, ParseError> {
        loop {
            if let Step::Done(outcome) = self.step()? {
                return Ok(outcome);
            }
        }
    }

    /// Executes one action: a shift, a reduction, the accept, or one whole
    /// error recovery episode.
    ///
    /// Once a step returns [`Step::Done`] or an error, further calls fail with
    /// [`ParseError::Finished`].
    pub fn step(&mut self) -> Result<Step<D::Value>, ParseError> {
        if self.finished {
            return Err(ParseError::Finished);
        }
        let result = self.step_inner();
        if !matches!(result, Ok(Step::Continue)) {
            self.finished = true;
        }
        result
    }

    fn step_inner(&mut self) -> Result<Step<D::Value>, ParseError> {
        let symbol = if self.inject_error {
            self.tables.error_symbol()
        } else {
            self.lookahead()?.symbol()
        };
        let state = self.stack.top_state();
        if log::log_enabled!(log::Level::Trace) {
            self.dump_state(symbol);
        }

        match self.tables.action(state, symbol)? {
            ParserAction::Shift(next) => {
                log::trace!("Shift {}", next);
                if self.inject_error {
                    let (driver, token) = self.driver_and_lookahead()?;
                    let value = driver.recover(token).map_err(ParseError::Action)?;
                    self.inject_error = false;
                    self.push_frame(next, value);
                } else {
                    let token = self.advance()?;
                    let value = self.driver.shift(token).map_err(ParseError::Action)?;
                    self.push_frame(next, value);
                    self.stats.shifts += 1;
                }
                Ok(Step::Continue)
            }

            ParserAction::Reduce(prod) => {
                let ProdInfo { lhs, arity } = self.tables.prod(prod)?;
                log::trace!("Reduce {}({})", self.tables.prod_name(prod), prod);
                let values = self
                    .stack
                    .pop_values(arity)
                    .ok_or(ParseError::StackUnderflow {
                        prod,
                        arity,
                        depth: self.stack.values().len(),
                    })?;
                self.scopes.prune_above(self.stack.depth());
                let value = self
                    .driver
                    .reduce(prod, values)
                    .map_err(ParseError::Action)?;
                let next = self.tables.goto(self.stack.top_state(), lhs)?;
                self.push_frame(next, value);
                self.stats.reductions += 1;
                Ok(Step::Continue)
            }

            ParserAction::Accept => {
                log::trace!("Accept");
                let values = self.stack.values().len();
                let value = self
                    .stack
                    .take_accepted()
                    .ok_or(ParseError::AcceptDepth { values })?;
                self.scopes.clear();
                log::debug!(
                    "accepted: {} tokens, {} shifts, {} reductions, {} recoveries",
                    self.stats.tokens,
                    self.stats.shifts,
                    self.stats.reductions,
                    self.stats.recoveries,
                );
                Ok(Step::Done(Outcome::Accepted {
                    value,
                    diagnostics: std::mem::take(&mut self.diagnostics),
                }))
            }

            ParserAction::Error => Ok(match self.recover(state)? {
                Some(diagnostics) => Step::Done(Outcome::Failed { diagnostics }),
                None => Step::Continue,
            }),
        }
    }

    /// Pushes a frame and, if `state` opens a recoverable construct, a scope
    /// checkpoint at the new depth.
    pub(crate) fn push_frame(&mut self, state: StateID, value: D::Value) {
        self.stack.push(state, value);
        let depth = self.stack.depth();
        self.stats.max_depth = self.stats.max_depth.max(depth);
        if self.tables.is_recovery_point(state) {
            let checkpoint = ScopeCheckpoint {
                depth,
                state,
                token_index: self.la_index,
                span: self.lookahead.as_ref().and_then(Token::span),
            };
            if let Some(evicted) = self.scopes.push(checkpoint) {
                log::trace!(
                    "evicted checkpoint at depth {} (state {})",
                    evicted.depth,
                    evicted.state
                );
                self.stats.evictions += 1;
            }
        }
    }

    /// The current lookahead, pulling the first token on demand.
    pub(crate) fn lookahead(&mut self) -> Result<&S::Item, ParseError> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.pull()?,
        };
        Ok(self.lookahead.insert(token))
    }

    fn driver_and_lookahead(&mut self) -> Result<(&mut D, &S::Item), ParseError> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.pull()?,
        };
        Ok((&mut self.driver, self.lookahead.insert(token)))
    }

    /// Takes the lookahead and replaces it with the next token. The
    /// end-of-input token is never consumed: shifting it leaves a copy behind.
    pub(crate) fn advance(&mut self) -> Result<S::Item, ParseError> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.pull()?,
        };
        let next = if token.symbol() == self.tables.eof_symbol() {
            token.clone()
        } else {
            let next = self.pull()?;
            self.la_index += 1;
            next
        };
        self.lookahead = Some(next);
        Ok(token)
    }

    fn pull(&mut self) -> Result<S::Item, ParseError> {
        let index = self.stats.tokens;
        let token = self
            .stream
            .try_next()
            .map_err(|err| ParseError::Scanner(anyhow::Error::new(err)))?
            .ok_or(ParseError::UnterminatedStream { tokens: index })?;
        let symbol = token.symbol();
        if !self.tables.is_terminal(symbol) {
            return Err(ParseError::InvalidTerminal {
                index,
                symbol,
                max: self.tables.info().num_terminals,
            });
        }
        self.stats.tokens += 1;
        Ok(token)
    }

    fn dump_state(&self, symbol: SymbolID) {
        let mut output = String::new();
        for state in self.stack.states() {
            output.push_str(&format!("<{}>  ", state));
        }
        output.push_str(&format!(
            "<-  {}{}",
            self.tables.symbol_name(symbol),
            if self.inject_error { " (injected)" } else { "" },
        ));
        log::trace!("{}", output);
    }
}
