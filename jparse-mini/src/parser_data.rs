//! LALR(1) tables for the MiniJava grammar in `minijava.g`.
//!
//! Generated offline from the grammar; do not edit by hand. Recovery points
//! are the states just inside the braces of a class body or a block and the
//! states after the declaration or statement list between those braces.

use jparse::{ParserBasicInfo, TableData};
use num_enum::{IntoPrimitive, TryFromPrimitive};

pub const INFO: ParserBasicInfo = ParserBasicInfo {
    error_symbol: 20,
    max_name_length: 24,
    num_states: 76,
    nt_offset: 20,
    scope_ubound: 63,
    scope_size: 64,
    la_state_offset: 78,
    max_la: 1,
    num_rules: 39,
    num_terminals: 20,
    num_non_terminals: 18,
    num_symbols: 38,
    start_state: 1,
    eoft_symbol: 19,
    eolt_symbol: 19,
    accept_action: 77,
    error_action: 78,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum TokenID {
    Class = 1,
    Public = 2,
    Static = 3,
    Void = 4,
    Int = 5,
    Boolean = 6,
    Return = 7,
    If = 8,
    While = 9,
    Identifier = 10,
    IntegerLiteral = 11,
    LBrace = 12,
    RBrace = 13,
    LParen = 14,
    RParen = 15,
    Semicolon = 16,
    Assign = 17,
    Plus = 18,
    Eof = 19,
    Error = 20,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum NonTermID {
    CompilationUnit = 21,
    TypeDeclarations = 22,
    ClassDeclaration = 23,
    Modifiers = 24,
    Modifier = 25,
    ClassBody = 26,
    ClassBodyDeclarations = 27,
    ClassBodyDeclaration = 28,
    FieldDeclaration = 29,
    MethodDeclaration = 30,
    Type = 31,
    Block = 32,
    BlockStatements = 33,
    BlockStatement = 34,
    LocalVariableDeclaration = 35,
    Statement = 36,
    Expression = 37,
    Primary = 38,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum Production {
    CompilationUnit = 1,
    TypeDeclarationsEmpty = 2,
    TypeDeclarationsAppend = 3,
    ClassDeclaration = 4,
    ModifiersEmpty = 5,
    ModifiersAppend = 6,
    ModifierPublic = 7,
    ModifierStatic = 8,
    ClassBody = 9,
    ClassBodyDeclarationsEmpty = 10,
    ClassBodyDeclarationsAppend = 11,
    MemberField = 12,
    MemberMethod = 13,
    MemberClass = 14,
    MemberError = 15,
    FieldDeclaration = 16,
    MethodDeclaration = 17,
    MethodDeclarationVoid = 18,
    TypeInt = 19,
    TypeBoolean = 20,
    TypeName = 21,
    Block = 22,
    BlockStatementsEmpty = 23,
    BlockStatementsAppend = 24,
    BlockStatementLocal = 25,
    BlockStatementStatement = 26,
    LocalVariable = 27,
    LocalVariableInit = 28,
    StatementBlock = 29,
    StatementAssign = 30,
    StatementReturn = 31,
    StatementIf = 32,
    StatementWhile = 33,
    StatementError = 34,
    ExpressionAdd = 35,
    ExpressionPrimary = 36,
    PrimaryName = 37,
    PrimaryLiteral = 38,
    PrimaryParen = 39,
}

pub const TERMINAL_NAMES: &[&str] = &[
    "class", // 1
    "public", // 2
    "static", // 3
    "void", // 4
    "int", // 5
    "boolean", // 6
    "return", // 7
    "if", // 8
    "while", // 9
    "Identifier", // 10
    "IntegerLiteral", // 11
    "{", // 12
    "}", // 13
    "(", // 14
    ")", // 15
    ";", // 16
    "=", // 17
    "+", // 18
    "EOF", // 19
    "error", // 20
];

pub const NON_TERMINAL_NAMES: &[&str] = &[
    "CompilationUnit", // 21
    "TypeDeclarations", // 22
    "ClassDeclaration", // 23
    "Modifiers", // 24
    "Modifier", // 25
    "ClassBody", // 26
    "ClassBodyDeclarations", // 27
    "ClassBodyDeclaration", // 28
    "FieldDeclaration", // 29
    "MethodDeclaration", // 30
    "Type", // 31
    "Block", // 32
    "BlockStatements", // 33
    "BlockStatement", // 34
    "LocalVariableDeclaration", // 35
    "Statement", // 36
    "Expression", // 37
    "Primary", // 38
];

pub const RULE_NAMES: &[&str] = &[
    "CompilationUnit", // 1
    "TypeDeclarationsEmpty", // 2
    "TypeDeclarationsAppend", // 3
    "ClassDeclaration", // 4
    "ModifiersEmpty", // 5
    "ModifiersAppend", // 6
    "ModifierPublic", // 7
    "ModifierStatic", // 8
    "ClassBody", // 9
    "ClassBodyDeclarationsEmpty", // 10
    "ClassBodyDeclarationsAppend", // 11
    "MemberField", // 12
    "MemberMethod", // 13
    "MemberClass", // 14
    "MemberError", // 15
    "FieldDeclaration", // 16
    "MethodDeclaration", // 17
    "MethodDeclarationVoid", // 18
    "TypeInt", // 19
    "TypeBoolean", // 20
    "TypeName", // 21
    "Block", // 22
    "BlockStatementsEmpty", // 23
    "BlockStatementsAppend", // 24
    "BlockStatementLocal", // 25
    "BlockStatementStatement", // 26
    "LocalVariable", // 27
    "LocalVariableInit", // 28
    "StatementBlock", // 29
    "StatementAssign", // 30
    "StatementReturn", // 31
    "StatementIf", // 32
    "StatementWhile", // 33
    "StatementError", // 34
    "ExpressionAdd", // 35
    "ExpressionPrimary", // 36
    "PrimaryName", // 37
    "PrimaryLiteral", // 38
    "PrimaryParen", // 39
];

pub const RULE_LHS: &[u16] = &[
    21, // 1: CompilationUnit -> TypeDeclarations
    22, // 2: TypeDeclarations -> %empty
    22, // 3: TypeDeclarations -> TypeDeclarations ClassDeclaration
    23, // 4: ClassDeclaration -> Modifiers class Identifier ClassBody
    24, // 5: Modifiers -> %empty
    24, // 6: Modifiers -> Modifiers Modifier
    25, // 7: Modifier -> public
    25, // 8: Modifier -> static
    26, // 9: ClassBody -> { ClassBodyDeclarations }
    27, // 10: ClassBodyDeclarations -> %empty
    27, // 11: ClassBodyDeclarations -> ClassBodyDeclarations ClassBodyDeclaration
    28, // 12: ClassBodyDeclaration -> FieldDeclaration
    28, // 13: ClassBodyDeclaration -> MethodDeclaration
    28, // 14: ClassBodyDeclaration -> ClassDeclaration
    28, // 15: ClassBodyDeclaration -> error ;
    29, // 16: FieldDeclaration -> Modifiers Type Identifier ;
    30, // 17: MethodDeclaration -> Modifiers Type Identifier ( ) Block
    30, // 18: MethodDeclaration -> Modifiers void Identifier ( ) Block
    31, // 19: Type -> int
    31, // 20: Type -> boolean
    31, // 21: Type -> Identifier
    32, // 22: Block -> { BlockStatements }
    33, // 23: BlockStatements -> %empty
    33, // 24: BlockStatements -> BlockStatements BlockStatement
    34, // 25: BlockStatement -> LocalVariableDeclaration
    34, // 26: BlockStatement -> Statement
    35, // 27: LocalVariableDeclaration -> Type Identifier ;
    35, // 28: LocalVariableDeclaration -> Type Identifier = Expression ;
    36, // 29: Statement -> Block
    36, // 30: Statement -> Identifier = Expression ;
    36, // 31: Statement -> return Expression ;
    36, // 32: Statement -> if ( Expression ) Statement
    36, // 33: Statement -> while ( Expression ) Statement
    36, // 34: Statement -> error ;
    37, // 35: Expression -> Expression + Primary
    37, // 36: Expression -> Primary
    38, // 37: Primary -> Identifier
    38, // 38: Primary -> IntegerLiteral
    38, // 39: Primary -> ( Expression )
];

pub const RULE_ARITY: &[u8] = &[
    1, 0, 2, 4, 0, 2, 1, 1, 3, 0, 2, 1, 1, 1, 2, 4, 6, 6, 1, 1, 1, 3, 0, 2, 1, 1, 3, 5, 1, 4, 3, 5, 5, 2, 3, 1, 1, 1, 3,
];

pub const ACTION: &[u16] = &[
    /* STATE 1 */ 80, 80, 80, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 80, 78,
    /* STATE 2 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 77, 78,
    /* STATE 3 */ 83, 83, 83, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 79, 78,
    /* STATE 4 */ 81, 81, 81, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 81, 78,
    /* STATE 5 */ 6, 7, 8, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78,
    /* STATE 6 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 10, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78,
    /* STATE 7 */ 85, 85, 85, 85, 85, 85, 78, 78, 78, 85, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78,
    /* STATE 8 */ 86, 86, 86, 86, 86, 86, 78, 78, 78, 86, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78,
    /* STATE 9 */ 84, 84, 84, 84, 84, 84, 78, 78, 78, 84, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78,
    /* STATE 10 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 11, 78, 78, 78, 78, 78, 78, 78, 78,
    /* STATE 11 */ 88, 88, 88, 88, 88, 88, 78, 78, 78, 88, 78, 78, 88, 78, 78, 78, 78, 78, 78, 88,
    /* STATE 12 */ 82, 82, 82, 82, 82, 82, 78, 78, 78, 82, 78, 78, 82, 78, 78, 78, 78, 78, 82, 82,
    /* STATE 13 */ 83, 83, 83, 83, 83, 83, 78, 78, 78, 83, 78, 78, 14, 78, 78, 78, 78, 78, 78, 15,
    /* STATE 14 */ 87, 87, 87, 87, 87, 87, 78, 78, 78, 87, 78, 78, 87, 78, 78, 78, 78, 78, 87, 87,
    /* STATE 15 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 21, 78, 78, 78, 78,
    /* STATE 16 */ 92, 92, 92, 92, 92, 92, 78, 78, 78, 92, 78, 78, 92, 78, 78, 78, 78, 78, 78, 92,
    /* STATE 17 */ 6, 7, 8, 22, 23, 24, 78, 78, 78, 25, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78,
    /* STATE 18 */ 89, 89, 89, 89, 89, 89, 78, 78, 78, 89, 78, 78, 89, 78, 78, 78, 78, 78, 78, 89,
    /* STATE 19 */ 90, 90, 90, 90, 90, 90, 78, 78, 78, 90, 78, 78, 90, 78, 78, 78, 78, 78, 78, 90,
    /* STATE 20 */ 91, 91, 91, 91, 91, 91, 78, 78, 78, 91, 78, 78, 91, 78, 78, 78, 78, 78, 78, 91,
    /* STATE 21 */ 93, 93, 93, 93, 93, 93, 78, 78, 78, 93, 78, 78, 93, 78, 78, 78, 78, 78, 78, 93,
    /* STATE 22 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 27, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78,
    /* STATE 23 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 97, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78,
    /* STATE 24 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 98, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78,
    /* STATE 25 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 99, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78,
    /* STATE 26 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 28, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78,
    /* STATE 27 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 29, 78, 78, 78, 78, 78, 78,
    /* STATE 28 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 30, 78, 31, 78, 78, 78, 78,
    /* STATE 29 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 32, 78, 78, 78, 78, 78,
    /* STATE 30 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 33, 78, 78, 78, 78, 78,
    /* STATE 31 */ 94, 94, 94, 94, 94, 94, 78, 78, 78, 94, 78, 78, 94, 78, 78, 78, 78, 78, 78, 94,
    /* STATE 32 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 34, 78, 78, 78, 78, 78, 78, 78, 78,
    /* STATE 33 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 34, 78, 78, 78, 78, 78, 78, 78, 78,
    /* STATE 34 */ 78, 78, 78, 78, 101, 101, 101, 101, 101, 101, 78, 101, 101, 78, 78, 78, 78, 78, 78, 101,
    /* STATE 35 */ 96, 96, 96, 96, 96, 96, 78, 78, 78, 96, 78, 78, 96, 78, 78, 78, 78, 78, 78, 96,
    /* STATE 36 */ 95, 95, 95, 95, 95, 95, 78, 78, 78, 95, 78, 78, 95, 78, 78, 78, 78, 78, 78, 95,
    /* STATE 37 */ 78, 78, 78, 78, 23, 24, 38, 39, 40, 41, 78, 34, 42, 78, 78, 78, 78, 78, 78, 43,
    /* STATE 38 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 49, 50, 78, 78, 51, 78, 78, 78, 78, 78, 78,
    /* STATE 39 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 54, 78, 78, 78, 78, 78, 78,
    /* STATE 40 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 55, 78, 78, 78, 78, 78, 78,
    /* STATE 41 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 99, 78, 78, 78, 78, 78, 78, 56, 78, 78, 78,
    /* STATE 42 */ 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 78, 100, 100, 78, 78, 78, 78, 78, 78, 100,
    /* STATE 43 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 57, 78, 78, 78, 78,
    /* STATE 44 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 58, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78,
    /* STATE 45 */ 78, 78, 78, 78, 107, 107, 107, 107, 107, 107, 78, 107, 107, 78, 78, 78, 78, 78, 78, 107,
    /* STATE 46 */ 78, 78, 78, 78, 102, 102, 102, 102, 102, 102, 78, 102, 102, 78, 78, 78, 78, 78, 78, 102,
    /* STATE 47 */ 78, 78, 78, 78, 103, 103, 103, 103, 103, 103, 78, 103, 103, 78, 78, 78, 78, 78, 78, 103,
    /* STATE 48 */ 78, 78, 78, 78, 104, 104, 104, 104, 104, 104, 78, 104, 104, 78, 78, 78, 78, 78, 78, 104,
    /* STATE 49 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 115, 115, 78, 115, 78, 78,
    /* STATE 50 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 116, 116, 78, 116, 78, 78,
    /* STATE 51 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 49, 50, 78, 78, 51, 78, 78, 78, 78, 78, 78,
    /* STATE 52 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 60, 78, 61, 78, 78,
    /* STATE 53 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 114, 114, 78, 114, 78, 78,
    /* STATE 54 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 49, 50, 78, 78, 51, 78, 78, 78, 78, 78, 78,
    /* STATE 55 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 49, 50, 78, 78, 51, 78, 78, 78, 78, 78, 78,
    /* STATE 56 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 49, 50, 78, 78, 51, 78, 78, 78, 78, 78, 78,
    /* STATE 57 */ 78, 78, 78, 78, 112, 112, 112, 112, 112, 112, 78, 112, 112, 78, 78, 78, 78, 78, 78, 112,
    /* STATE 58 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 65, 66, 78, 78, 78,
    /* STATE 59 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 67, 78, 78, 61, 78, 78,
    /* STATE 60 */ 78, 78, 78, 78, 109, 109, 109, 109, 109, 109, 78, 109, 109, 78, 78, 78, 78, 78, 78, 109,
    /* STATE 61 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 49, 50, 78, 78, 51, 78, 78, 78, 78, 78, 78,
    /* STATE 62 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 69, 78, 78, 61, 78, 78,
    /* STATE 63 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 70, 78, 78, 61, 78, 78,
    /* STATE 64 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 71, 78, 61, 78, 78,
    /* STATE 65 */ 78, 78, 78, 78, 105, 105, 105, 105, 105, 105, 78, 105, 105, 78, 78, 78, 78, 78, 78, 105,
    /* STATE 66 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 49, 50, 78, 78, 51, 78, 78, 78, 78, 78, 78,
    /* STATE 67 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 117, 117, 78, 117, 78, 78,
    /* STATE 68 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 113, 113, 78, 113, 78, 78,
    /* STATE 69 */ 78, 78, 78, 78, 78, 78, 38, 39, 40, 73, 78, 34, 78, 78, 78, 78, 78, 78, 78, 43,
    /* STATE 70 */ 78, 78, 78, 78, 78, 78, 38, 39, 40, 73, 78, 34, 78, 78, 78, 78, 78, 78, 78, 43,
    /* STATE 71 */ 78, 78, 78, 78, 108, 108, 108, 108, 108, 108, 78, 108, 108, 78, 78, 78, 78, 78, 78, 108,
    /* STATE 72 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 76, 78, 61, 78, 78,
    /* STATE 73 */ 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 56, 78, 78, 78,
    /* STATE 74 */ 78, 78, 78, 78, 110, 110, 110, 110, 110, 110, 78, 110, 110, 78, 78, 78, 78, 78, 78, 110,
    /* STATE 75 */ 78, 78, 78, 78, 111, 111, 111, 111, 111, 111, 78, 111, 111, 78, 78, 78, 78, 78, 78, 111,
    /* STATE 76 */ 78, 78, 78, 78, 106, 106, 106, 106, 106, 106, 78, 106, 106, 78, 78, 78, 78, 78, 78, 106,
];

pub const GOTO: &[u16] = &[
    /* STATE 1 */ 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 2 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 3 */ 0, 0, 4, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 4 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 5 */ 0, 0, 0, 0, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 6 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 7 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 8 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 9 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 10 */ 0, 0, 0, 0, 0, 12, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 11 */ 0, 0, 0, 0, 0, 0, 13, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 12 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 13 */ 0, 0, 16, 17, 0, 0, 0, 18, 19, 20, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 14 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 15 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 16 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 17 */ 0, 0, 0, 0, 9, 0, 0, 0, 0, 0, 26, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 18 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 19 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 20 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 21 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 22 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 23 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 24 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 25 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 26 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 27 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 28 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 29 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 30 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 31 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 32 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 35, 0, 0, 0, 0, 0, 0,
    /* STATE 33 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 36, 0, 0, 0, 0, 0, 0,
    /* STATE 34 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 37, 0, 0, 0, 0, 0,
    /* STATE 35 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 36 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 37 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 44, 45, 0, 46, 47, 48, 0, 0,
    /* STATE 38 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 52, 53,
    /* STATE 39 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 40 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 41 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 42 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 43 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 44 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 45 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 46 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 47 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 48 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 49 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 50 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 51 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 59, 53,
    /* STATE 52 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 53 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 54 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 62, 53,
    /* STATE 55 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 63, 53,
    /* STATE 56 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 64, 53,
    /* STATE 57 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 58 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 59 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 60 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 61 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 68,
    /* STATE 62 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 63 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 64 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 65 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 66 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 72, 53,
    /* STATE 67 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 68 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 69 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 45, 0, 0, 0, 74, 0, 0,
    /* STATE 70 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 45, 0, 0, 0, 75, 0, 0,
    /* STATE 71 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 72 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 73 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 74 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 75 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* STATE 76 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

pub const RECOVERY_STATES: &[u16] = &[11, 13, 34, 37];

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
