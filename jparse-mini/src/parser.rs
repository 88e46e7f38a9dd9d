//! # MiniJava Parser
//!
//! This module couples the generated tables in [`parser_data`] with
//! MiniJava-specific semantic actions. It exposes:
//!
//! - [`tables`]: the process-wide [`TableSet`], validated on first use,
//! - [`MiniDriver`]: the [`ParserDriver`] that builds the syntax tree,
//! - [`parse_source`]: scan, parse and collect diagnostics in one call.
//!
//! Declarations and statements the engine skips during error recovery are
//! reduced through the grammar's `error` rules and show up in the tree as
//! [`Member::Error`] and [`Stmt::Error`].

use crate::ast::{
    Block, ClassDecl, CompilationUnit, Expr, FieldDecl, Member, MethodDecl, Modifier, Stmt,
    TypeRef,
};
use crate::parser_data::{self, Production};
use crate::{MiniError, MiniToken, Scanner, TokenID};
use anyhow::{Result, anyhow, bail};
use jparse::{
    Diagnostic, Outcome, Parser, ParserDriver, ParserStats, ProdID, TableError, TableSet,
};
use once_cell::sync::OnceCell;
use smartstring::alias::String;

static TABLES: OnceCell<TableSet> = OnceCell::new();

/// The MiniJava table set. The first call validates the generated tables;
/// later calls share the result.
pub fn tables() -> Result<&'static TableSet, TableError> {
    TABLES.get_or_try_init(|| TableSet::new(&parser_data::DATA))
}

/// A semantic value on the parser stack.
#[derive(Debug, Clone)]
pub enum Node {
    Token(MiniToken),
    /// Value of a synthetic `error` terminal.
    Error,
    Unit(CompilationUnit),
    Classes(Vec<ClassDecl>),
    Class(ClassDecl),
    Modifiers(Vec<Modifier>),
    Modifier(Modifier),
    Members(Vec<Member>),
    Member(Member),
    Type(TypeRef),
    Block(Block),
    Stmts(Vec<Stmt>),
    Stmt(Stmt),
    Expr(Expr),
}

/// Popped right-hand-side values of one reduction, consumed left to right.
struct Rhs(std::vec::IntoIter<Node>);

impl Rhs {
    fn next(&mut self) -> Result<Node> {
        self.0.next().ok_or_else(|| anyhow!("reduction ran out of values"))
    }

    /// Skips a keyword, punctuation or `error` value.
    fn skip(&mut self) -> Result<()> {
        self.next().map(drop)
    }

    fn ident(&mut self) -> Result<String> {
        match self.next()? {
            Node::Token(token) => match token.ident() {
                Some(name) => Ok(String::from(name)),
                None => bail!("expected identifier, found {:?}", token.token_id),
            },
            other => bail!("expected identifier, found {:?}", other),
        }
    }

    fn number(&mut self) -> Result<i32> {
        match self.next()? {
            Node::Token(token) => token
                .number()
                .ok_or_else(|| anyhow!("expected integer literal, found {:?}", token.token_id)),
            other => bail!("expected integer literal, found {:?}", other),
        }
    }
}

macro_rules! rhs_accessor {
    ($($name:ident -> $ty:ty = $variant:ident),* $(,)?) => {
        impl Rhs {$(
            fn $name(&mut self) -> Result<$ty> {
                match self.next()? {
                    Node::$variant(value) => Ok(value),
                    other => bail!(concat!("expected ", stringify!($variant), ", found {:?}"), other),
                }
            }
        )*}
    };
}

rhs_accessor! {
    classes -> Vec<ClassDecl> = Classes,
    class -> ClassDecl = Class,
    modifiers -> Vec<Modifier> = Modifiers,
    modifier -> Modifier = Modifier,
    members -> Vec<Member> = Members,
    member -> Member = Member,
    ty -> TypeRef = Type,
    block -> Block = Block,
    stmts -> Vec<Stmt> = Stmts,
    stmt -> Stmt = Stmt,
    expr -> Expr = Expr,
}

/// Builds the MiniJava syntax tree.
#[derive(Debug, Default)]
pub struct MiniDriver {
    /// Rules reduced so far, in order.
    pub reductions: Vec<Production>,
}

impl ParserDriver for MiniDriver {
    type Token = MiniToken;
    type Value = Node;

    fn shift(&mut self, token: MiniToken) -> Result<Node> {
        Ok(Node::Token(token))
    }

    fn recover(&mut self, token: &MiniToken) -> Result<Node> {
        log::debug!("inserting `error` before {}", token);
        Ok(Node::Error)
    }

    fn reduce(&mut self, prod: ProdID, values: Vec<Node>) -> Result<Node> {
        let rule = Production::try_from(prod.0)?;
        self.reductions.push(rule);
        let mut rhs = Rhs(values.into_iter());
        let node = match rule {
            Production::CompilationUnit => Node::Unit(CompilationUnit {
                classes: rhs.classes()?,
            }),
            Production::TypeDeclarationsEmpty => Node::Classes(Vec::new()),
            Production::TypeDeclarationsAppend => {
                let mut classes = rhs.classes()?;
                classes.push(rhs.class()?);
                Node::Classes(classes)
            }
            Production::ClassDeclaration => {
                let modifiers = rhs.modifiers()?;
                rhs.skip()?;
                let name = rhs.ident()?;
                let members = rhs.members()?;
                Node::Class(ClassDecl {
                    modifiers,
                    name,
                    members,
                })
            }
            Production::ModifiersEmpty => Node::Modifiers(Vec::new()),
            Production::ModifiersAppend => {
                let mut modifiers = rhs.modifiers()?;
                modifiers.push(rhs.modifier()?);
                Node::Modifiers(modifiers)
            }
            Production::ModifierPublic => Node::Modifier(Modifier::Public),
            Production::ModifierStatic => Node::Modifier(Modifier::Static),
            Production::ClassBody => {
                rhs.skip()?;
                Node::Members(rhs.members()?)
            }
            Production::ClassBodyDeclarationsEmpty => Node::Members(Vec::new()),
            Production::ClassBodyDeclarationsAppend => {
                let mut members = rhs.members()?;
                members.push(rhs.member()?);
                Node::Members(members)
            }
            Production::MemberField | Production::MemberMethod => Node::Member(rhs.member()?),
            Production::MemberClass => Node::Member(Member::Class(rhs.class()?)),
            Production::MemberError => Node::Member(Member::Error),
            Production::FieldDeclaration => {
                let modifiers = rhs.modifiers()?;
                let ty = rhs.ty()?;
                let name = rhs.ident()?;
                Node::Member(Member::Field(FieldDecl {
                    modifiers,
                    ty,
                    name,
                }))
            }
            Production::MethodDeclaration | Production::MethodDeclarationVoid => {
                let modifiers = rhs.modifiers()?;
                let ret = match rule {
                    Production::MethodDeclaration => Some(rhs.ty()?),
                    _ => {
                        rhs.skip()?;
                        None
                    }
                };
                let name = rhs.ident()?;
                rhs.skip()?;
                rhs.skip()?;
                let body = rhs.block()?;
                Node::Member(Member::Method(MethodDecl {
                    modifiers,
                    ret,
                    name,
                    body,
                }))
            }
            Production::TypeInt => Node::Type(TypeRef::Int),
            Production::TypeBoolean => Node::Type(TypeRef::Boolean),
            Production::TypeName => Node::Type(TypeRef::Named(rhs.ident()?)),
            Production::Block => {
                rhs.skip()?;
                Node::Block(Block {
                    stmts: rhs.stmts()?,
                })
            }
            Production::BlockStatementsEmpty => Node::Stmts(Vec::new()),
            Production::BlockStatementsAppend => {
                let mut stmts = rhs.stmts()?;
                stmts.push(rhs.stmt()?);
                Node::Stmts(stmts)
            }
            Production::BlockStatementLocal | Production::BlockStatementStatement => {
                Node::Stmt(rhs.stmt()?)
            }
            Production::LocalVariable | Production::LocalVariableInit => {
                let ty = rhs.ty()?;
                let name = rhs.ident()?;
                let init = match rule {
                    Production::LocalVariableInit => {
                        rhs.skip()?;
                        Some(rhs.expr()?)
                    }
                    _ => None,
                };
                Node::Stmt(Stmt::Local { ty, name, init })
            }
            Production::StatementBlock => Node::Stmt(Stmt::Block(rhs.block()?)),
            Production::StatementAssign => {
                let name = rhs.ident()?;
                rhs.skip()?;
                Node::Stmt(Stmt::Assign {
                    name,
                    value: rhs.expr()?,
                })
            }
            Production::StatementReturn => {
                rhs.skip()?;
                Node::Stmt(Stmt::Return(rhs.expr()?))
            }
            Production::StatementIf | Production::StatementWhile => {
                rhs.skip()?;
                rhs.skip()?;
                let cond = rhs.expr()?;
                rhs.skip()?;
                let inner = Box::new(rhs.stmt()?);
                Node::Stmt(match rule {
                    Production::StatementIf => Stmt::If { cond, then: inner },
                    _ => Stmt::While { cond, body: inner },
                })
            }
            Production::StatementError => Node::Stmt(Stmt::Error),
            Production::ExpressionAdd => {
                let lhs = rhs.expr()?;
                rhs.skip()?;
                let r = rhs.expr()?;
                Node::Expr(Expr::Add(Box::new(lhs), Box::new(r)))
            }
            Production::ExpressionPrimary => Node::Expr(rhs.expr()?),
            Production::PrimaryName => Node::Expr(Expr::Name(rhs.ident()?)),
            Production::PrimaryLiteral => Node::Expr(Expr::Literal(rhs.number()?)),
            Production::PrimaryParen => {
                rhs.skip()?;
                Node::Expr(Expr::Paren(Box::new(rhs.expr()?)))
            }
        };
        Ok(node)
    }
}

/// A parser over MiniJava source text.
pub type MiniParser<'a> = Parser<'static, Scanner<'a>, MiniDriver>;

/// Creates a parser over `src` sharing the process-wide tables.
pub fn mini_parser(src: &str) -> Result<MiniParser<'_>, MiniError> {
    Ok(Parser::new(tables()?, Scanner::new(src), MiniDriver::default()))
}

/// Result of [`parse_source`].
#[derive(Debug, Clone)]
pub struct MiniParse {
    /// The syntax tree, or `None` if the parse stopped at an unrecoverable
    /// syntax error.
    pub unit: Option<CompilationUnit>,
    pub diagnostics: Vec<Diagnostic>,
    pub stats: ParserStats,
    pub reductions: Vec<Production>,
}

impl MiniParse {
    pub fn is_accepted(&self) -> bool {
        self.unit.is_some()
    }
}

/// Scans and parses `src`.
///
/// Syntax errors are reported in [`MiniParse::diagnostics`]; only scanner
/// failures and engine invariant violations are errors.
pub fn parse_source(src: &str) -> Result<MiniParse, MiniError> {
    let mut parser = mini_parser(src)?;
    let outcome = parser.parse()?;
    let stats = parser.stats();
    let reductions = parser.into_driver().reductions;
    let (unit, diagnostics) = match outcome {
        Outcome::Accepted {
            value: Node::Unit(unit),
            diagnostics,
        } => (Some(unit), diagnostics),
        Outcome::Accepted { value, .. } => {
            return Err(MiniError::Malformed(String::from(format!("{:?}", value))));
        }
        Outcome::Failed { diagnostics } => (None, diagnostics),
    };
    log::info!(
        "parsed {} tokens: {} diagnostics, {} recoveries",
        stats.tokens,
        diagnostics.len(),
        stats.recoveries
    );
    Ok(MiniParse {
        unit,
        diagnostics,
        stats,
        reductions,
    })
}

/// Terminal id of a token, as the generated enum.
pub fn token_id(symbol: jparse::SymbolID) -> Option<TokenID> {
    TokenID::try_from(symbol.0).ok()
}
