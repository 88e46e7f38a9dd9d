//! Tables for a small list grammar used by the engine's own tests.
//!
//! ```text
//! S -> ( L )        // 1 Group
//! S -> x            // 2 Atom
//! L -> S            // 3 ListOne
//! L -> L , S        // 4 ListMore
//! L -> error        // 5 ListError
//! ```
//!
//! State 2 (`S -> ( . L )`) is the only recovery point. The start symbol does
//! not derive the empty string.

use crate::{ParserBasicInfo, TableData};

pub const INFO: ParserBasicInfo = ParserBasicInfo {
    error_symbol: 6,
    max_name_length: 5,
    num_states: 10,
    nt_offset: 6,
    scope_ubound: 3,
    scope_size: 4,
    la_state_offset: 12,
    max_la: 1,
    num_rules: 5,
    num_terminals: 6,
    num_non_terminals: 2,
    num_symbols: 8,
    start_state: 1,
    eoft_symbol: 5,
    eolt_symbol: 5,
    accept_action: 11,
    error_action: 12,
};

pub const TERMINAL_NAMES: &[&str] = &[
    "(", // 1
    ")", // 2
    ",", // 3
    "x", // 4
    "EOF", // 5
    "error", // 6
];

pub const NON_TERMINAL_NAMES: &[&str] = &[
    "S", // 7
    "L", // 8
];

pub const RULE_NAMES: &[&str] = &[
    "Group", // 1
    "Atom", // 2
    "ListOne", // 3
    "ListMore", // 4
    "ListError", // 5
];

pub const RULE_LHS: &[u16] = &[
    7, // 1: S -> ( L )
    7, // 2: S -> x
    8, // 3: L -> S
    8, // 4: L -> L , S
    8, // 5: L -> error
];

pub const RULE_ARITY: &[u8] = &[
    3, 1, 1, 3, 1,
];

pub const ACTION: &[u16] = &[
    /* STATE 1 */ 2, 12, 12, 3, 12, 12,
    /* STATE 2 */ 2, 12, 12, 3, 12, 5,
    /* STATE 3 */ 12, 14, 14, 12, 14, 12,
    /* STATE 4 */ 12, 12, 12, 12, 11, 12,
    /* STATE 5 */ 12, 17, 17, 12, 12, 12,
    /* STATE 6 */ 12, 15, 15, 12, 12, 12,
    /* STATE 7 */ 12, 8, 9, 12, 12, 12,
    /* STATE 8 */ 12, 13, 13, 12, 13, 12,
    /* STATE 9 */ 2, 12, 12, 3, 12, 12,
    /* STATE 10 */ 12, 16, 16, 12, 12, 12,
];

pub const GOTO: &[u16] = &[
    /* STATE 1 */ 4, 0,
    /* STATE 2 */ 6, 7,
    /* STATE 3 */ 0, 0,
    /* STATE 4 */ 0, 0,
    /* STATE 5 */ 0, 0,
    /* STATE 6 */ 0, 0,
    /* STATE 7 */ 0, 0,
    /* STATE 8 */ 0, 0,
    /* STATE 9 */ 10, 0,
    /* STATE 10 */ 0, 0,
];

pub const RECOVERY_STATES: &[u16] = &[2];

pub const DATA: TableData<'static> = TableData {
    info: INFO,
    action: ACTION,
    goto: GOTO,
    rule_lhs: RULE_LHS,
    rule_arity: RULE_ARITY,
    recovery_states: RECOVERY_STATES,
    terminal_names: TERMINAL_NAMES,
    non_terminal_names: NON_TERMINAL_NAMES,
    rule_names: RULE_NAMES,
};
