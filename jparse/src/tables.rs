//! The grammar table set: action, goto and rule tables plus their basic
//! information, validated once and then shared read-only by every parse.

use crate::{ParserBasicInfo, TableError};
use std::fmt;

/// A parser automaton state, `1..=num_states`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateID(pub u16);

/// A grammar symbol: a terminal in `1..=num_terminals` or a non-terminal in
/// `nt_offset + 1..=num_symbols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolID(pub u16);

/// A grammar rule (production), `1..=num_rules`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProdID(pub u16);

macro_rules! id_impls {
    ($($ty:ident),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$ty> for usize {
            fn from(id: $ty) -> Self {
                id.0 as usize
            }
        }
    )*};
}

id_impls!(StateID, SymbolID, ProdID);

/// A decoded action table cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParserAction {
    Error,
    Accept,
    Shift(StateID),
    Reduce(ProdID),
}

impl ParserAction {
    /// Decodes a raw action cell.
    ///
    /// Returns `None` for values that fall in none of the encoded ranges.
    pub fn decode(raw: u16, info: &ParserBasicInfo) -> Option<Self> {
        if raw >= 1 && raw <= info.num_states {
            Some(Self::Shift(StateID(raw)))
        } else if raw == info.accept_action {
            Some(Self::Accept)
        } else if raw == info.error_action {
            Some(Self::Error)
        } else if raw > info.error_action && raw - info.error_action <= info.num_rules {
            Some(Self::Reduce(ProdID(raw - info.error_action)))
        } else {
            None
        }
    }
}

/// Left-hand side and right-hand-side length of a rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProdInfo {
    pub lhs: SymbolID,
    pub arity: usize,
}

/// A table artifact as produced by the offline generator.
///
/// All tables are flat and row-major by state. See [`ParserBasicInfo`] for the
/// action cell encoding; a `0` goto cell means "no transition".
#[derive(Clone, Copy, Debug)]
pub struct TableData<'a> {
    pub info: ParserBasicInfo,
    /// `num_states * num_terminals` raw action cells.
    pub action: &'a [u16],
    /// `num_states * num_non_terminals` goto targets.
    pub goto: &'a [u16],
    /// Left-hand-side symbol of each rule.
    pub rule_lhs: &'a [u16],
    /// Right-hand-side length of each rule.
    pub rule_arity: &'a [u8],
    /// States that open a recoverable construct.
    pub recovery_states: &'a [u16],
    pub terminal_names: &'a [&'a str],
    pub non_terminal_names: &'a [&'a str],
    pub rule_names: &'a [&'a str],
}

/// Validated, immutable grammar tables.
///
/// A `TableSet` owns copies of its tables, so it can be built once (for
/// example inside a `OnceCell`) and shared by reference across threads.
/// Every lookup re-checks its indices and returns [`TableError`] instead of
/// panicking.
#[derive(Debug, Clone)]
pub struct TableSet {
    info: ParserBasicInfo,
    action: Box<[u16]>,
    goto: Box<[u16]>,
    rule_lhs: Box<[u16]>,
    rule_arity: Box<[u8]>,
    recovery: Box<[bool]>,
    terminal_names: Box<[Box<str>]>,
    non_terminal_names: Box<[Box<str>]>,
    rule_names: Box<[Box<str>]>,
}

impl TableSet {
    /// Validates `data` and copies it into a new table set.
    pub fn new(data: &TableData<'_>) -> Result<Self, TableError> {
        let info = data.info;
        info.validate()?;
        if info.start_state > info.num_states {
            return Err(TableError::StateOutOfRange(
                StateID(info.start_state),
                info.num_states,
            ));
        }

        let n_states = usize::from(info.num_states);
        let n_terms = usize::from(info.num_terminals);
        let n_nonterms = usize::from(info.num_non_terminals);
        let n_rules = usize::from(info.num_rules);
        check_len("action", n_states * n_terms, data.action.len())?;
        check_len("goto", n_states * n_nonterms, data.goto.len())?;
        check_len("rule_lhs", n_rules, data.rule_lhs.len())?;
        check_len("rule_arity", n_rules, data.rule_arity.len())?;
        check_len("terminal_names", n_terms, data.terminal_names.len())?;
        check_len("non_terminal_names", n_nonterms, data.non_terminal_names.len())?;
        check_len("rule_names", n_rules, data.rule_names.len())?;

        for (i, &raw) in data.action.iter().enumerate() {
            if ParserAction::decode(raw, &info).is_none() {
                return Err(TableError::CorruptAction {
                    state: StateID((i / n_terms + 1) as u16),
                    symbol: SymbolID((i % n_terms + 1) as u16),
                    raw,
                });
            }
        }
        for (i, &raw) in data.goto.iter().enumerate() {
            if raw > info.num_states {
                return Err(TableError::CorruptGoto {
                    state: StateID((i / n_nonterms + 1) as u16),
                    symbol: SymbolID((i % n_nonterms) as u16 + info.first_non_terminal()),
                    raw,
                });
            }
        }
        for &lhs in data.rule_lhs {
            check_non_terminal(&info, SymbolID(lhs))?;
        }

        let mut recovery = vec![false; n_states].into_boxed_slice();
        for &state in data.recovery_states {
            check_state(&info, StateID(state))?;
            recovery[usize::from(state) - 1] = true;
        }

        let names = |names: &[&str]| -> Box<[Box<str>]> {
            names.iter().map(|&name| Box::from(name)).collect()
        };

        log::debug!(
            "loaded tables: {} states, {} rules, {} terminals, {} non-terminals, {} recovery states",
            info.num_states,
            info.num_rules,
            info.num_terminals,
            info.num_non_terminals,
            data.recovery_states.len(),
        );

        Ok(Self {
            info,
            action: data.action.into(),
            goto: data.goto.into(),
            rule_lhs: data.rule_lhs.into(),
            rule_arity: data.rule_arity.into(),
            recovery,
            terminal_names: names(data.terminal_names),
            non_terminal_names: names(data.non_terminal_names),
            rule_names: names(data.rule_names),
        })
    }

    #[inline]
    pub fn info(&self) -> &ParserBasicInfo {
        &self.info
    }

    #[inline]
    pub fn start_state(&self) -> StateID {
        StateID(self.info.start_state)
    }

    #[inline]
    pub fn eof_symbol(&self) -> SymbolID {
        SymbolID(self.info.eoft_symbol)
    }

    #[inline]
    pub fn error_symbol(&self) -> SymbolID {
        SymbolID(self.info.error_symbol)
    }

    #[inline]
    pub fn is_terminal(&self, symbol: SymbolID) -> bool {
        symbol.0 >= 1 && symbol.0 <= self.info.num_terminals
    }

    /// Action for `state` on the terminal `symbol`.
    pub fn action(&self, state: StateID, symbol: SymbolID) -> Result<ParserAction, TableError> {
        check_state(&self.info, state)?;
        if !self.is_terminal(symbol) {
            return Err(TableError::TerminalOutOfRange(symbol, self.info.num_terminals));
        }
        let index = (usize::from(state) - 1) * usize::from(self.info.num_terminals)
            + usize::from(symbol)
            - 1;
        let raw = self.action[index];
        ParserAction::decode(raw, &self.info).ok_or(TableError::CorruptAction {
            state,
            symbol,
            raw,
        })
    }

    /// Goto target for `state` on the non-terminal `symbol`.
    pub fn goto(&self, state: StateID, symbol: SymbolID) -> Result<StateID, TableError> {
        check_state(&self.info, state)?;
        check_non_terminal(&self.info, symbol)?;
        let index = (usize::from(state) - 1) * usize::from(self.info.num_non_terminals)
            + usize::from(symbol.0 - self.info.first_non_terminal());
        match self.goto[index] {
            0 => Err(TableError::MissingGoto { state, symbol }),
            raw if raw > self.info.num_states => Err(TableError::CorruptGoto { state, symbol, raw }),
            raw => Ok(StateID(raw)),
        }
    }

    /// Left-hand side and arity of `prod`.
    pub fn prod(&self, prod: ProdID) -> Result<ProdInfo, TableError> {
        let index = self.prod_index(prod)?;
        Ok(ProdInfo {
            lhs: SymbolID(self.rule_lhs[index]),
            arity: usize::from(self.rule_arity[index]),
        })
    }

    /// Does `state` open a construct the recovery manager can resynchronize on?
    pub fn is_recovery_point(&self, state: StateID) -> bool {
        check_state(&self.info, state).is_ok() && self.recovery[usize::from(state) - 1]
    }

    /// Name of a terminal or non-terminal, truncated to `max_name_length`.
    ///
    /// Ids outside the symbol range render as `#<id>`.
    pub fn symbol_name(&self, symbol: SymbolID) -> &str {
        let name = if self.is_terminal(symbol) {
            &self.terminal_names[usize::from(symbol) - 1]
        } else if symbol.0 > self.info.nt_offset && symbol.0 <= self.info.num_symbols {
            &self.non_terminal_names[usize::from(symbol.0 - self.info.first_non_terminal())]
        } else {
            return "#?";
        };
        truncate(name, usize::from(self.info.max_name_length))
    }

    pub fn prod_name(&self, prod: ProdID) -> &str {
        match self.prod_index(prod) {
            Ok(index) => &self.rule_names[index],
            Err(_) => "#?",
        }
    }

    fn prod_index(&self, prod: ProdID) -> Result<usize, TableError> {
        if prod.0 == 0 || prod.0 > self.info.num_rules {
            return Err(TableError::ProdOutOfRange(prod, self.info.num_rules));
        }
        Ok(usize::from(prod) - 1)
    }
}

fn check_len(table: &'static str, expected: usize, actual: usize) -> Result<(), TableError> {
    if expected == actual {
        Ok(())
    } else {
        Err(TableError::LengthMismatch {
            table,
            expected,
            actual,
        })
    }
}

fn check_state(info: &ParserBasicInfo, state: StateID) -> Result<(), TableError> {
    if state.0 == 0 || state.0 > info.num_states {
        Err(TableError::StateOutOfRange(state, info.num_states))
    } else {
        Ok(())
    }
}

fn check_non_terminal(info: &ParserBasicInfo, symbol: SymbolID) -> Result<(), TableError> {
    if symbol.0 <= info.nt_offset || symbol.0 > info.num_symbols {
        Err(TableError::NonTerminalOutOfRange {
            symbol,
            first: info.first_non_terminal(),
            last: info.num_symbols,
        })
    } else {
        Ok(())
    }
}

fn truncate(name: &str, max: usize) -> &str {
    match name.char_indices().nth(max) {
        Some((end, _)) => &name[..end],
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_parser_data as list;

    fn tables() -> TableSet {
        TableSet::new(&list::DATA).unwrap()
    }

    #[test]
    fn decodes_every_action_kind() {
        let info = list::INFO;
        assert_eq!(ParserAction::decode(3, &info), Some(ParserAction::Shift(StateID(3))));
        assert_eq!(ParserAction::decode(11, &info), Some(ParserAction::Accept));
        assert_eq!(ParserAction::decode(12, &info), Some(ParserAction::Error));
        assert_eq!(ParserAction::decode(14, &info), Some(ParserAction::Reduce(ProdID(2))));
        assert_eq!(ParserAction::decode(0, &info), None);
        assert_eq!(ParserAction::decode(18, &info), None);
        assert_eq!(ParserAction::decode(17, &info), Some(ParserAction::Reduce(ProdID(5))));
    }

    #[test]
    fn looks_up_actions_and_gotos() {
        let t = tables();
        // state 1 on `(` shifts to state 2, which opens a group
        assert_eq!(
            t.action(StateID(1), SymbolID(1)).unwrap(),
            ParserAction::Shift(StateID(2))
        );
        assert!(t.is_recovery_point(StateID(2)));
        assert!(!t.is_recovery_point(StateID(1)));
        assert_eq!(t.action(StateID(4), t.eof_symbol()).unwrap(), ParserAction::Accept);
        assert_eq!(t.goto(StateID(2), SymbolID(8)).unwrap(), StateID(7));
        assert_eq!(
            t.prod(ProdID(4)).unwrap(),
            ProdInfo {
                lhs: SymbolID(8),
                arity: 3
            }
        );
    }

    #[test]
    fn lookups_guard_their_bounds() {
        let t = tables();
        assert!(matches!(
            t.action(StateID(0), SymbolID(1)),
            Err(TableError::StateOutOfRange(..))
        ));
        assert!(matches!(
            t.action(StateID(11), SymbolID(1)),
            Err(TableError::StateOutOfRange(..))
        ));
        assert!(matches!(
            t.action(StateID(1), SymbolID(7)),
            Err(TableError::TerminalOutOfRange(..))
        ));
        assert!(matches!(
            t.goto(StateID(1), SymbolID(6)),
            Err(TableError::NonTerminalOutOfRange { .. })
        ));
        assert!(matches!(
            t.goto(StateID(3), SymbolID(7)),
            Err(TableError::MissingGoto { .. })
        ));
        assert!(matches!(t.prod(ProdID(0)), Err(TableError::ProdOutOfRange(..))));
        assert!(matches!(t.prod(ProdID(6)), Err(TableError::ProdOutOfRange(..))));
    }

    #[test]
    fn names_symbols_and_rules() {
        let t = tables();
        assert_eq!(t.symbol_name(SymbolID(1)), "(");
        assert_eq!(t.symbol_name(t.eof_symbol()), "EOF");
        assert_eq!(t.symbol_name(SymbolID(8)), "L");
        assert_eq!(t.symbol_name(SymbolID(42)), "#?");
        assert_eq!(t.prod_name(ProdID(5)), "ListError");
    }

    #[test]
    fn truncates_long_names() {
        assert_eq!(truncate("ClassBodyDeclarations", 5), "Class");
        assert_eq!(truncate("EOF", 5), "EOF");
    }

    #[test]
    fn rejects_corrupt_action_cell() {
        let mut action = list::ACTION.to_vec();
        action[7] = 99;
        let data = TableData {
            action: &action,
            ..list::DATA
        };
        let err = TableSet::new(&data).unwrap_err();
        assert_eq!(
            err,
            TableError::CorruptAction {
                state: StateID(2),
                symbol: SymbolID(2),
                raw: 99
            }
        );
    }

    #[test]
    fn rejects_truncated_tables() {
        let data = TableData {
            goto: &list::GOTO[..4],
            ..list::DATA
        };
        assert!(matches!(
            TableSet::new(&data),
            Err(TableError::LengthMismatch { table: "goto", .. })
        ));
    }

    #[test]
    fn rejects_goto_past_state_range() {
        let mut goto = list::GOTO.to_vec();
        goto[0] = 11;
        let data = TableData {
            goto: &goto,
            ..list::DATA
        };
        assert!(matches!(TableSet::new(&data), Err(TableError::CorruptGoto { raw: 11, .. })));
    }

    #[test]
    fn rejects_terminal_as_rule_lhs() {
        let data = TableData {
            rule_lhs: &[7, 7, 8, 8, 3],
            ..list::DATA
        };
        assert!(matches!(
            TableSet::new(&data),
            Err(TableError::NonTerminalOutOfRange { .. })
        ));
    }

    #[test]
    fn tables_are_shareable_across_threads() {
        fn _assert_send_sync<T: Send + Sync>() {}
        _assert_send_sync::<TableSet>();
    }
}
