//! Scope-based error recovery.
//!
//! When the action table reports an error, the parser unwinds to the most
//! recent scope checkpoint from which the offending lookahead can be parsed,
//! either directly or after a synthetic `error` terminal. A trial parse over
//! a virtual copy of the state stack decides whether a checkpoint fits; no
//! semantic action runs during the search. If no checkpoint fits, the error
//! is unrecoverable and the parse stops on the offending token.

use crate::stack::ScopeCheckpoint;
use crate::{
    ParseError, Parser, ParserAction, ParserDriver, ProdInfo, Span, StateID, SymbolID,
    TableError, Token, TokenStream,
};
use smartstring::alias::String;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// The parser resynchronized and went on.
    Recovered,
    /// The parse stopped here.
    Unrecoverable,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Recovered => f.write_str("recovered"),
            DiagnosticKind::Unrecoverable => f.write_str("unrecoverable"),
        }
    }
}

/// A syntax error, reported once per error episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// The offending terminal.
    pub symbol: SymbolID,
    /// Its name, truncated to the grammar's longest symbol name.
    pub symbol_name: String,
    pub span: Option<Span>,
    /// State on top of the stack when the error was detected.
    pub state: StateID,
    /// Index of the offending token in the token stream.
    pub token_index: usize,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} syntax error ", self.kind)?;
        match self.span {
            Some(span) => write!(f, "at {}", span.start)?,
            None => write!(f, "at token {}", self.token_index)?,
        }
        write!(f, ": unexpected `{}` in state {}", self.symbol_name, self.state)
    }
}

/// Where and how parsing resumes after an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ResumePoint {
    depth: usize,
    inject_error: bool,
}

impl<'t, S, D> Parser<'t, S, D>
where
    S: TokenStream,
    D: ParserDriver<Token = S::Item>,
{
    /// Runs one error episode for the lookahead that failed in `state`.
    ///
    /// Returns `None` once the parser is ready to resume, or the final
    /// diagnostics if the error is unrecoverable.
    pub(crate) fn recover(
        &mut self,
        state: StateID,
    ) -> Result<Option<Vec<Diagnostic>>, ParseError> {
        self.inject_error = false;
        let token = self.lookahead()?;
        let symbol = token.symbol();
        let span = token.span();
        let mut diagnostic = Diagnostic {
            kind: DiagnosticKind::Recovered,
            symbol,
            symbol_name: String::from(self.tables.symbol_name(symbol)),
            span,
            state,
            token_index: self.la_index,
        };
        log::debug!(
            "syntax error at token {} (`{}`) in state {}, {} checkpoints live",
            diagnostic.token_index,
            diagnostic.symbol_name,
            state,
            self.scopes.len(),
        );

        if self.scopes.is_empty() {
            diagnostic.kind = DiagnosticKind::Unrecoverable;
            return Ok(Some(self.fail(diagnostic)));
        }

        let floor = match self.last_recovery {
            Some((index, depth)) if index == self.la_index => Some(depth),
            _ => None,
        };
        let Some(resume) = self.find_resume_point(symbol, floor)? else {
            diagnostic.kind = DiagnosticKind::Unrecoverable;
            return Ok(Some(self.fail(diagnostic)));
        };
        self.stack.truncate(resume.depth);
        self.scopes.prune_above(resume.depth);
        self.inject_error = resume.inject_error;
        self.last_recovery = Some((self.la_index, resume.depth));
        self.stats.recoveries += 1;
        log::debug!(
            "resuming at depth {} on token {}{}",
            resume.depth,
            self.la_index,
            if resume.inject_error { " after `error`" } else { "" },
        );
        self.diagnostics.push(diagnostic);
        Ok(None)
    }

    fn fail(&mut self, diagnostic: Diagnostic) -> Vec<Diagnostic> {
        log::debug!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
        std::mem::take(&mut self.diagnostics)
    }

    /// Searches the scope checkpoints, innermost first, for one from which
    /// `la` can be parsed.
    ///
    /// Checkpoints at or above `floor` are skipped.
    fn find_resume_point(
        &self,
        la: SymbolID,
        floor: Option<usize>,
    ) -> Result<Option<ResumePoint>, TableError> {
        let depth = self.stack.depth();
        let error = self.tables.error_symbol();
        let candidates = self
            .scopes
            .iter_recent()
            .filter(|cp| cp.depth <= depth && floor.is_none_or(|floor| cp.depth < floor));
        for &ScopeCheckpoint { depth, state, .. } in candidates {
            if self.trial(depth, &[la])? {
                log::trace!("checkpoint at depth {} (state {}) admits the lookahead", depth, state);
                return Ok(Some(ResumePoint {
                    depth,
                    inject_error: false,
                }));
            }
            if self.trial(depth, &[error, la])? {
                log::trace!("checkpoint at depth {} (state {}) admits `error`", depth, state);
                return Ok(Some(ResumePoint {
                    depth,
                    inject_error: true,
                }));
            }
        }
        Ok(None)
    }

    /// Does the stack truncated to `depth` shift every symbol of `symbols` in
    /// turn (or accept on one of them)?
    ///
    /// Reductions pop a virtual overlay, never the real stack.
    fn trial(&self, depth: usize, symbols: &[SymbolID]) -> Result<bool, TableError> {
        let states = self.stack.states();
        let mut base = depth.min(states.len());
        let mut overlay: Vec<StateID> = Vec::new();
        let budget = usize::from(self.tables.info().num_states) + depth;

        for &symbol in symbols {
            let mut reductions = 0;
            loop {
                if base == 0 {
                    return Ok(false);
                }
                let top = overlay.last().copied().unwrap_or(states[base - 1]);
                match self.tables.action(top, symbol)? {
                    ParserAction::Shift(next) => {
                        overlay.push(next);
                        break;
                    }
                    ParserAction::Accept => return Ok(true),
                    ParserAction::Error => return Ok(false),
                    ParserAction::Reduce(prod) => {
                        reductions += 1;
                        if reductions > budget {
                            log::debug!("trial parse on `{}` did not settle", self.tables.symbol_name(symbol));
                            return Ok(false);
                        }
                        let ProdInfo { lhs, arity } = self.tables.prod(prod)?;
                        let from_overlay = arity.min(overlay.len());
                        overlay.truncate(overlay.len() - from_overlay);
                        let from_stack = arity - from_overlay;
                        if from_stack >= base {
                            return Ok(false);
                        }
                        base -= from_stack;
                        let exposed = overlay.last().copied().unwrap_or(states[base - 1]);
                        overlay.push(self.tables.goto(exposed, lhs)?);
                    }
                }
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tests::{ListBuilder, init_logger, input, run, tables};
    use crate::{Outcome, span};

    #[test]
    fn missing_element_is_replaced_by_error() {
        let (outcome, stats, reductions) = run("( x , , x )");
        let Outcome::Accepted { value, diagnostics } = outcome else {
            panic!("expected acceptance");
        };
        assert_eq!(value, "(Group ( (ListMore (ListError error) , (Atom x)) ))");
        assert_eq!(reductions, vec![2, 3, 5, 2, 4, 1]);
        assert_eq!(diagnostics.len(), 1);
        let diag = &diagnostics[0];
        assert_eq!(diag.kind, DiagnosticKind::Recovered);
        assert_eq!((diag.token_index, diag.symbol.0, diag.state.0), (3, 3, 9));
        assert_eq!(diag.symbol_name.as_str(), ",");
        assert_eq!(stats.shifts, 6);
        assert_eq!(stats.recoveries, 1);
        assert_eq!(stats.tokens, 7);
    }

    #[test]
    fn empty_group_recovers_with_error_token() {
        let (outcome, stats, reductions) = run("( )");
        assert_eq!(outcome.value().map(|v| v.as_str()), Some("(Group ( (ListError error) ))"));
        let diag = &outcome.diagnostics()[0];
        assert_eq!((diag.token_index, diag.symbol.0, diag.state.0), (1, 2, 2));
        assert_eq!(reductions, vec![5, 1]);
        assert_eq!(stats.shifts, 2);
    }

    #[test]
    fn innermost_checkpoint_survives_eviction() {
        let (outcome, stats, reductions) = run("( ( ( ( ( ( x , ) ) ) ) ) )");
        assert!(outcome.is_accepted());
        let diag = &outcome.diagnostics()[0];
        assert_eq!((diag.token_index, diag.symbol.0, diag.state.0), (8, 2, 9));
        assert_eq!(stats.evictions, 2);
        assert_eq!(stats.shifts, 14);
        assert_eq!(reductions, vec![2, 3, 5, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1]);
    }

    #[test]
    fn unwinds_past_a_finished_element() {
        // the second `x` cannot follow the first, but it can start the list
        // again from the checkpoint after `(`
        let (outcome, stats, reductions) = run("( x x )");
        assert_eq!(outcome.value().map(|v| v.as_str()), Some("(Group ( (ListOne (Atom x)) ))"));
        let diag = &outcome.diagnostics()[0];
        assert_eq!((diag.token_index, diag.symbol.0, diag.state.0), (2, 4, 3));
        assert_eq!(stats.shifts, 4);
        assert_eq!(stats.tokens, 5);
        assert_eq!(reductions, vec![2, 3, 1]);
    }

    #[test]
    fn reports_every_episode_before_failing() {
        let (outcome, stats, reductions) = run("( ( x ) x )");
        let Outcome::Failed { diagnostics } = outcome else {
            panic!("expected failure");
        };
        let summary: Vec<_> = diagnostics
            .iter()
            .map(|d| (d.kind, d.token_index, d.symbol.0, d.state.0))
            .collect();
        assert_eq!(
            summary,
            vec![
                (DiagnosticKind::Recovered, 4, 4, 8),
                (DiagnosticKind::Unrecoverable, 6, 5, 6),
            ]
        );
        assert_eq!(reductions, vec![2, 3, 2, 3, 1]);
        assert_eq!(stats.shifts, 6);
        assert_eq!(stats.tokens, 7);
    }

    #[test]
    fn error_terminal_from_the_stream_is_parsed() {
        let (outcome, _, reductions) = run("( error , x )");
        assert!(outcome.is_accepted());
        assert!(outcome.diagnostics().is_empty());
        assert_eq!(reductions, vec![5, 2, 4, 1]);
    }

    #[test]
    fn diagnostic_renders_position() {
        let diag = Diagnostic {
            kind: DiagnosticKind::Recovered,
            symbol: SymbolID(3),
            symbol_name: ",".into(),
            span: span!(2, 4, 2, 5),
            state: StateID(9),
            token_index: 3,
        };
        assert_eq!(
            diag.to_string(),
            "recovered syntax error at 3:5: unexpected `,` in state 9"
        );
        let diag = Diagnostic { span: None, kind: DiagnosticKind::Unrecoverable, ..diag };
        assert_eq!(
            diag.to_string(),
            "unrecoverable syntax error at token 3: unexpected `,` in state 9"
        );
    }

    #[test]
    fn trial_leaves_the_stack_alone() {
        init_logger();
        let tables = tables();
        let mut parser = Parser::new(&tables, input("( x , x )"), ListBuilder::default());
        // `(`, `x`, reduce Atom, reduce ListOne
        for _ in 0..4 {
            parser.step().unwrap();
        }
        let before = parser.stack.states().to_vec();
        assert!(!parser.trial(2, &[SymbolID(2)]).unwrap());
        assert!(parser.trial(2, &[SymbolID(6), SymbolID(2)]).unwrap());
        assert!(parser.trial(before.len(), &[SymbolID(3), SymbolID(4)]).unwrap());
        assert_eq!(parser.stack.states(), before.as_slice());
    }
}
