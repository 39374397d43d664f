//! javelint-model: host-shaped program model for Java inspections
//!
//! The model mirrors what an IDE host hands an inspection pass:
//! - arena-backed trees of expressions, statements and declarations with
//!   generation-checked ids (`arena`, `ast`, `model`)
//! - a class registry with super types and override edges, preloaded with
//!   the `java.lang` core (`classes`)
//! - resolution, reference search and effectively-final analysis built on
//!   static types (`resolve`, `search`, `flow`)
//! - structural edits and rendering used by quick fixes (`edit`, `render`)
//! - cooperative cancellation threaded through every long traversal
//!   (`cancel`)
//!
//! Every id-taking accessor returns `Option`; after an edit, stale ids
//! resolve to `None` instead of panicking or aliasing a new node.

pub mod arena;
pub mod ast;
pub mod cancel;
pub mod classes;
mod edit;
mod flow;
pub mod model;
mod render;
mod resolve;
mod search;
pub mod ty;

pub use arena::{Arena, SlotKey};
pub use ast::{
    DeclId, DeclKind, Declaration, ExprId, ExprKind, ExprParent, Expression, Literal, Modifiers,
    Statement, StmtId, StmtKind,
};
pub use cancel::{CancelToken, Cancelled};
pub use classes::{ClassDef, ClassId, ClassRegistry, MethodDef, MethodId};
pub use edit::EditError;
pub use model::FileModel;
pub use ty::{
    JavaType, Primitive, TypeElement, TypeForm, JAVA_LANG_CHAR_SEQUENCE, JAVA_LANG_OBJECT,
    JAVA_LANG_STRING, JAVA_LANG_STRING_BUILDER,
};
