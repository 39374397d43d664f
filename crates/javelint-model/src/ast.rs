//! Tagged AST node kinds
//!
//! The tree is a closed set of variants: every expression, statement and
//! declaration shape the inspections understand is spelled out here, and a
//! `match` over a kind is exhaustive by construction. Nodes live in the
//! model's arenas and point at each other through ids, never references.

use text_size::TextRange;

use crate::arena::SlotKey;
use crate::ty::TypeElement;

/// Stable handle to an expression node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExprId(pub(crate) SlotKey);

/// Stable handle to a statement node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StmtId(pub(crate) SlotKey);

/// Stable handle to a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeclId(pub(crate) SlotKey);

/// The node owning an expression: another expression, a statement slot, or
/// a declaration initializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprParent {
    Expr(ExprId),
    Stmt(StmtId),
    Decl(DeclId),
}

/// Literal constants.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Int(i64),
    Bool(bool),
}

/// Closed set of expression kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Reference to a declared variable or field. `target` is the host's
    /// resolution result; unresolved references carry `None`.
    NameRef {
        name: String,
        target: Option<DeclId>,
    },
    /// Instance or unqualified method call. `receiver` is `None` for
    /// unqualified calls, which never resolve in this model.
    MethodCall {
        receiver: Option<ExprId>,
        method: String,
        args: Vec<ExprId>,
    },
    /// Parenthesized expression; structurally transparent.
    Paren { inner: ExprId },
    /// Ternary conditional.
    Conditional {
        condition: ExprId,
        when_true: ExprId,
        when_false: ExprId,
    },
    Literal(Literal),
    /// Constructor invocation, `new ClassName(args)`.
    New {
        class_name: String,
        args: Vec<ExprId>,
    },
    /// Simple assignment, `target = value`.
    Assign { target: ExprId, value: ExprId },
}

/// An expression node: its kind, tree wiring, source range and any comments
/// attached to it.
#[derive(Debug, Clone)]
pub struct Expression {
    pub kind: ExprKind,
    pub parent: Option<ExprParent>,
    pub range: TextRange,
    pub comments: Vec<String>,
}

/// Closed set of statement kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// Local variable declaration statement
    Local(DeclId),
    /// Expression statement
    Expr(ExprId),
    Block(Vec<StmtId>),
    If {
        condition: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    },
    While {
        condition: ExprId,
        body: StmtId,
    },
    Return(Option<ExprId>),
}

/// A statement node.
#[derive(Debug, Clone)]
pub struct Statement {
    pub kind: StmtKind,
    /// Enclosing statement; `None` at the top level
    pub parent: Option<StmtId>,
}

/// Whether a declaration is a class field or a local variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Field,
    Local,
}

/// Modifier flags carried by a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub is_private: bool,
    pub is_final: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        is_private: false,
        is_final: false,
    };
    pub const FINAL: Modifiers = Modifiers {
        is_private: false,
        is_final: true,
    };
    pub const PRIVATE: Modifiers = Modifiers {
        is_private: true,
        is_final: false,
    };
    pub const PRIVATE_FINAL: Modifiers = Modifiers {
        is_private: true,
        is_final: true,
    };
}

/// A named field or local variable.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub kind: DeclKind,
    pub name: String,
    /// The written type, tracked separately from how it is spelled
    pub declared_type: TypeElement,
    pub modifiers: Modifiers,
    pub initializer: Option<ExprId>,
}
