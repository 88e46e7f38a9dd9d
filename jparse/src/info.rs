//! Basic information about a generated grammar: table dimensions and the
//! sentinel values the engine uses to decode actions and bounds-check ids.
//!
//! A [`ParserBasicInfo`] travels with its table artifact and is handed to
//! [`TableSet::new`](crate::TableSet::new); nothing in the engine refers to a
//! global constant. [`ParserBasicInfo::JAVA`] carries the dimensions of the
//! full Java grammar the engine was sized for.

use crate::TableError;
use smartstring::alias::String;

/// Dimensions and sentinel values of one grammar's tables.
///
/// Symbol ids are 1-based: terminals occupy `1..=num_terminals`, non-terminals
/// occupy `nt_offset + 1..=num_symbols`. States are `1..=num_states`. Action
/// cells encode shifts as the target state, `accept_action` and
/// `error_action` as themselves, and a reduction by rule `r` as
/// `error_action + r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParserBasicInfo {
    /// Terminal id of the synthetic `error` token used for resynchronization.
    pub error_symbol: u16,
    /// Longest symbol name; diagnostics truncate names to this length.
    pub max_name_length: u16,
    pub num_states: u16,
    /// Id of the last terminal; non-terminal ids start right after it.
    pub nt_offset: u16,
    /// Highest index into the scope checkpoint stack.
    pub scope_ubound: u16,
    /// Capacity of the scope checkpoint stack.
    pub scope_size: u16,
    /// First value past the state range; equal to `error_action`.
    pub la_state_offset: u16,
    /// Lookahead depth the tables were generated for. Only 1 is supported.
    pub max_la: u16,
    pub num_rules: u16,
    pub num_terminals: u16,
    pub num_non_terminals: u16,
    pub num_symbols: u16,
    pub start_state: u16,
    /// End-of-file terminal.
    pub eoft_symbol: u16,
    /// End-of-line terminal; equal to `eoft_symbol` for whole-file parses.
    pub eolt_symbol: u16,
    pub accept_action: u16,
    pub error_action: u16,
}

impl ParserBasicInfo {
    /// Dimensions of the full Java grammar.
    pub const JAVA: ParserBasicInfo = ParserBasicInfo {
        error_symbol: 130,
        max_name_length: 41,
        num_states: 1168,
        nt_offset: 130,
        scope_ubound: 298,
        scope_size: 299,
        la_state_offset: 16754,
        max_la: 1,
        num_rules: 869,
        num_terminals: 130,
        num_non_terminals: 398,
        num_symbols: 528,
        start_state: 1347,
        eoft_symbol: 61,
        eolt_symbol: 61,
        accept_action: 16753,
        error_action: 16754,
    };

    /// Checks that the constants agree with one another.
    ///
    /// This does not look at any table; [`TableSet::new`](crate::TableSet::new)
    /// additionally checks the constants against the table slices it is given.
    pub fn validate(&self) -> Result<(), TableError> {
        let fail = |msg: std::string::String| Err(TableError::InvalidInfo(String::from(msg)));

        if self.num_states == 0 || self.num_rules == 0 || self.num_terminals == 0 {
            return fail(format!(
                "empty grammar: {} states, {} rules, {} terminals",
                self.num_states, self.num_rules, self.num_terminals
            ));
        }
        if u32::from(self.num_terminals) + u32::from(self.num_non_terminals)
            != u32::from(self.num_symbols)
        {
            return fail(format!(
                "num_symbols {} != num_terminals {} + num_non_terminals {}",
                self.num_symbols, self.num_terminals, self.num_non_terminals
            ));
        }
        if self.nt_offset != self.num_terminals {
            return fail(format!(
                "nt_offset {} != num_terminals {}",
                self.nt_offset, self.num_terminals
            ));
        }
        if self.max_la != 1 {
            return fail(format!("max_la {} is not supported, expected 1", self.max_la));
        }
        if u32::from(self.scope_size) != u32::from(self.scope_ubound) + 1 {
            return fail(format!(
                "scope_size {} != scope_ubound {} + 1",
                self.scope_size, self.scope_ubound
            ));
        }
        for (name, symbol) in [
            ("eoft_symbol", self.eoft_symbol),
            ("eolt_symbol", self.eolt_symbol),
            ("error_symbol", self.error_symbol),
        ] {
            if symbol == 0 || symbol > self.num_terminals {
                return fail(format!(
                    "{name} {symbol} is not a terminal (1..={})",
                    self.num_terminals
                ));
            }
        }
        if self.start_state == 0 || self.start_state >= self.la_state_offset {
            return fail(format!(
                "start_state {} is outside 1..{}",
                self.start_state, self.la_state_offset
            ));
        }
        if self.la_state_offset <= self.num_states {
            return fail(format!(
                "la_state_offset {} must lie beyond num_states {}",
                self.la_state_offset, self.num_states
            ));
        }
        if self.error_action != self.la_state_offset {
            return fail(format!(
                "error_action {} != la_state_offset {}",
                self.error_action, self.la_state_offset
            ));
        }
        if self.accept_action != self.error_action - 1 {
            return fail(format!(
                "accept_action {} != error_action {} - 1",
                self.accept_action, self.error_action
            ));
        }
        if u32::from(self.error_action) + u32::from(self.num_rules) > u32::from(u16::MAX) {
            return fail(format!(
                "reduce actions for {} rules overflow past error_action {}",
                self.num_rules, self.error_action
            ));
        }
        Ok(())
    }

    /// Id of the first non-terminal.
    #[inline]
    pub fn first_non_terminal(&self) -> u16 {
        self.nt_offset + 1
    }

    /// Capacity of the scope checkpoint stack.
    #[inline]
    pub fn scope_capacity(&self) -> usize {
        usize::from(self.scope_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn java_constants_are_consistent() {
        let info = ParserBasicInfo::JAVA;
        info.validate().unwrap();
        assert_eq!(info.first_non_terminal(), 131);
        assert_eq!(info.scope_capacity(), 299);
        assert!(info.la_state_offset > info.num_states);
    }

    #[test]
    fn rejects_symbol_count_mismatch() {
        let info = ParserBasicInfo {
            num_symbols: 527,
            ..ParserBasicInfo::JAVA
        };
        let err = info.validate().unwrap_err();
        assert!(err.to_string().contains("num_symbols 527"));
    }

    #[test]
    fn rejects_multi_token_lookahead() {
        let info = ParserBasicInfo {
            max_la: 2,
            ..ParserBasicInfo::JAVA
        };
        assert!(matches!(info.validate(), Err(TableError::InvalidInfo(_))));
    }

    #[test]
    fn rejects_scope_size_off_by_one() {
        let info = ParserBasicInfo {
            scope_size: 298,
            ..ParserBasicInfo::JAVA
        };
        assert!(info.validate().is_err());
    }

    #[test]
    fn rejects_sentinels_inside_state_range() {
        let info = ParserBasicInfo {
            la_state_offset: 1000,
            error_action: 1000,
            accept_action: 999,
            ..ParserBasicInfo::JAVA
        };
        assert!(info.validate().is_err());

        let info = ParserBasicInfo {
            accept_action: 16752,
            ..ParserBasicInfo::JAVA
        };
        assert!(info.validate().is_err());
    }

    #[test]
    fn rejects_eof_outside_terminals() {
        let info = ParserBasicInfo {
            eoft_symbol: 131,
            ..ParserBasicInfo::JAVA
        };
        assert!(info.validate().unwrap_err().to_string().contains("eoft_symbol"));
    }
}
