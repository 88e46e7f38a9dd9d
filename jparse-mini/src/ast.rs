//! # MiniJava Syntax Tree
//!
//! The tree built by [`MiniDriver`](crate::MiniDriver). It carries no source
//! positions, so a tree printed with [`CompilationUnit::to_source`] and parsed
//! again compares equal to the original.
//!
//! Constructs the parser skipped during error recovery survive as
//! [`Member::Error`] and [`Stmt::Error`] placeholders.

use smartstring::alias::String;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilationUnit {
    pub classes: Vec<ClassDecl>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Public,
    Static,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Field(FieldDecl),
    Method(MethodDecl),
    Class(ClassDecl),
    /// A declaration skipped by error recovery.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub modifiers: Vec<Modifier>,
    pub ty: TypeRef,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub modifiers: Vec<Modifier>,
    /// `None` for `void`.
    pub ret: Option<TypeRef>,
    pub name: String,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Int,
    Boolean,
    Named(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Local {
        ty: TypeRef,
        name: String,
        init: Option<Expr>,
    },
    Block(Block),
    Assign {
        name: String,
        value: Expr,
    },
    Return(Expr),
    If {
        cond: Expr,
        then: Box<Stmt>,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
    },
    /// A statement skipped by error recovery.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Name(String),
    Literal(i32),
    /// Left-associative addition; the right operand is always a primary.
    Add(Box<Expr>, Box<Expr>),
    Paren(Box<Expr>),
}

impl CompilationUnit {
    /// Re-serializes the tree as MiniJava source.
    pub fn to_source(&self) -> std::string::String {
        self.to_string()
    }

    /// Number of error placeholders anywhere in the tree.
    pub fn error_count(&self) -> usize {
        self.classes.iter().map(ClassDecl::error_count).sum()
    }
}

impl ClassDecl {
    fn error_count(&self) -> usize {
        self.members
            .iter()
            .map(|member| match member {
                Member::Error => 1,
                Member::Class(class) => class.error_count(),
                Member::Method(method) => method.body.error_count(),
                Member::Field(_) => 0,
            })
            .sum()
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        indent(f, depth)?;
        write_modifiers(f, &self.modifiers)?;
        writeln!(f, "class {} {{", self.name)?;
        for member in &self.members {
            member.fmt_indented(f, depth + 1)?;
        }
        indent(f, depth)?;
        writeln!(f, "}}")
    }
}

impl Member {
    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        match self {
            Member::Field(field) => {
                indent(f, depth)?;
                write_modifiers(f, &field.modifiers)?;
                writeln!(f, "{} {};", field.ty, field.name)
            }
            Member::Method(method) => {
                indent(f, depth)?;
                write_modifiers(f, &method.modifiers)?;
                match &method.ret {
                    Some(ty) => write!(f, "{} ", ty)?,
                    None => f.write_str("void ")?,
                }
                write!(f, "{}() ", method.name)?;
                method.body.fmt_indented(f, depth)
            }
            Member::Class(class) => class.fmt_indented(f, depth),
            Member::Error => {
                indent(f, depth)?;
                writeln!(f, "/* syntax error */")
            }
        }
    }
}

impl Block {
    fn error_count(&self) -> usize {
        self.stmts.iter().map(Stmt::error_count).sum()
    }

    /// Writes `{`, the statements one level deeper, and `}` at `depth`. The
    /// caller has already written whatever precedes the opening brace.
    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{{")?;
        for stmt in &self.stmts {
            stmt.fmt_indented(f, depth + 1)?;
        }
        indent(f, depth)?;
        writeln!(f, "}}")
    }
}

impl Stmt {
    fn error_count(&self) -> usize {
        match self {
            Stmt::Error => 1,
            Stmt::Block(block) => block.error_count(),
            Stmt::If { then: inner, .. } | Stmt::While { body: inner, .. } => inner.error_count(),
            Stmt::Local { .. } | Stmt::Assign { .. } | Stmt::Return(_) => 0,
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        indent(f, depth)?;
        match self {
            Stmt::Local { ty, name, init } => match init {
                Some(init) => writeln!(f, "{} {} = {};", ty, name, init),
                None => writeln!(f, "{} {};", ty, name),
            },
            Stmt::Block(block) => block.fmt_indented(f, depth),
            Stmt::Assign { name, value } => writeln!(f, "{} = {};", name, value),
            Stmt::Return(value) => writeln!(f, "return {};", value),
            Stmt::If { cond, then } => {
                write!(f, "if ({})", cond)?;
                nested(f, then, depth)
            }
            Stmt::While { cond, body } => {
                write!(f, "while ({})", cond)?;
                nested(f, body, depth)
            }
            Stmt::Error => writeln!(f, "/* syntax error */"),
        }
    }
}

/// Writes the body of an `if` or `while`: a block stays on the header line,
/// anything else goes on its own line one level deeper.
fn nested(f: &mut fmt::Formatter<'_>, stmt: &Stmt, depth: usize) -> fmt::Result {
    match stmt {
        Stmt::Block(block) => {
            f.write_str(" ")?;
            block.fmt_indented(f, depth)
        }
        other => {
            writeln!(f)?;
            other.fmt_indented(f, depth + 1)
        }
    }
}

fn indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str("    ")?;
    }
    Ok(())
}

fn write_modifiers(f: &mut fmt::Formatter<'_>, modifiers: &[Modifier]) -> fmt::Result {
    for modifier in modifiers {
        write!(f, "{} ", modifier)?;
    }
    Ok(())
}

impl fmt::Display for CompilationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in &self.classes {
            class.fmt_indented(f, 0)?;
        }
        Ok(())
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Public => f.write_str("public"),
            Modifier::Static => f.write_str("static"),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Int => f.write_str("int"),
            TypeRef::Boolean => f.write_str("boolean"),
            TypeRef::Named(name) => f.write_str(name),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Name(name) => f.write_str(name),
            Expr::Literal(n) => write!(f, "{}", n),
            Expr::Add(lhs, rhs) => write!(f, "{} + {}", lhs, rhs),
            Expr::Paren(inner) => write!(f, "({})", inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Expr {
        Expr::Name(s.into())
    }

    #[test]
    fn prints_nested_declarations() {
        let unit = CompilationUnit {
            classes: vec![ClassDecl {
                modifiers: vec![Modifier::Public],
                name: "Main".into(),
                members: vec![
                    Member::Field(FieldDecl {
                        modifiers: vec![Modifier::Static],
                        ty: TypeRef::Int,
                        name: "count".into(),
                    }),
                    Member::Method(MethodDecl {
                        modifiers: vec![],
                        ret: None,
                        name: "run".into(),
                        body: Block {
                            stmts: vec![
                                Stmt::Local {
                                    ty: TypeRef::Named("Foo".into()),
                                    name: "f".into(),
                                    init: Some(Expr::Add(
                                        Box::new(name("count")),
                                        Box::new(Expr::Paren(Box::new(Expr::Literal(1)))),
                                    )),
                                },
                                Stmt::While {
                                    cond: name("f"),
                                    body: Box::new(Stmt::Block(Block {
                                        stmts: vec![Stmt::Assign {
                                            name: "f".into(),
                                            value: Expr::Literal(0),
                                        }],
                                    })),
                                },
                                Stmt::If {
                                    cond: name("f"),
                                    then: Box::new(Stmt::Return(name("f"))),
                                },
                                Stmt::Error,
                            ],
                        },
                    }),
                    Member::Class(ClassDecl {
                        modifiers: vec![],
                        name: "Inner".into(),
                        members: vec![Member::Error],
                    }),
                ],
            }],
        };
        let expected = "\
public class Main {
    static int count;
    void run() {
        Foo f = count + (1);
        while (f) {
            f = 0;
        }
        if (f)
            return f;
        /* syntax error */
    }
    class Inner {
        /* syntax error */
    }
}
";
        assert_eq!(unit.to_source(), expected);
        assert_eq!(unit.error_count(), 2);
    }

    #[test]
    fn empty_unit_prints_nothing() {
        assert_eq!(CompilationUnit::default().to_source(), "");
    }

    #[test]
    fn addition_prints_left_associative() {
        let expr = Expr::Add(
            Box::new(Expr::Add(Box::new(name("a")), Box::new(name("b")))),
            Box::new(Expr::Literal(3)),
        );
        assert_eq!(expr.to_string(), "a + b + 3");
    }
}
