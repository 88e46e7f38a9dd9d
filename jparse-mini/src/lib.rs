//! # jparse-mini
//!
//! A MiniJava front end built on **jparse**: a class/field/method/statement
//! subset of Java, small enough to read its tables by hand, large enough to
//! exercise nested recovery scopes.
//!
//! ## Overview
//!
//! - [`scanner`]: turns source text into [`MiniToken`]s with spans.
//! - [`parser`]: the [`MiniDriver`] semantic actions and the shared
//!   [`tables`], plus [`parse_source`] which runs the whole pipeline.
//! - [`ast`]: the syntax tree, printable back to source.
//! - [`parser_data`]: generated tables, see `minijava.g`.
//!
//! ## Example
//!
//! ```rust
//! use jparse_mini::{Member, parse_source};
//!
//! let result = parse_source("class A { ; int x; }").unwrap();
//! assert_eq!(result.diagnostics.len(), 1);
//!
//! let unit = result.unit.unwrap();
//! assert_eq!(unit.classes[0].members.len(), 2);
//! assert_eq!(unit.classes[0].members[0], Member::Error);
//! ```
pub mod ast;
pub mod error;
pub mod parser;
pub mod parser_data;
pub mod scanner;
pub mod token;

pub use ast::{
    Block, ClassDecl, CompilationUnit, Expr, FieldDecl, Member, MethodDecl, Modifier, Stmt,
    TypeRef,
};
pub use error::{MiniError, ScanError};
pub use parser::{MiniDriver, MiniParse, MiniParser, Node, mini_parser, parse_source, tables};
pub use parser_data::{NonTermID, Production, TokenID};
pub use scanner::{Scanner, tokenize};
pub use token::{MiniToken, TokenValue};
