//! Structural edits for quick fixes
//!
//! Edits splice the parent's child slot, free the nodes that drop out of
//! the tree, and carry their comments over to the surviving node. Freed ids
//! stop resolving immediately; later lookups through them return `None`.

use thiserror::Error;

use crate::ast::{DeclId, ExprId, ExprKind, ExprParent, StmtId, StmtKind};
use crate::model::FileModel;
use crate::ty::{JavaType, TypeForm};

/// Errors from structural tree edits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("expression no longer exists in the model")]
    MissingExpression,
    #[error("declaration no longer exists in the model")]
    MissingDeclaration,
    #[error("expression is not attached to the tree")]
    DetachedExpression,
}

impl FileModel {
    /// Replace `old` with `replacement` in `old`'s parent slot and free the
    /// nodes that drop out. Comments attached to freed nodes move onto the
    /// replacement. Returns the replacement id.
    ///
    /// The replacement is typically a descendant of `old`, such as a call
    /// receiver taking the place of the whole call.
    pub fn replace_expression(
        &mut self,
        old: ExprId,
        replacement: ExprId,
    ) -> Result<ExprId, EditError> {
        if old == replacement {
            return Ok(replacement);
        }
        if self.expression(replacement).is_none() {
            return Err(EditError::MissingExpression);
        }
        let parent = self
            .expression(old)
            .ok_or(EditError::MissingExpression)?
            .parent
            .ok_or(EditError::DetachedExpression)?;

        match parent {
            ExprParent::Expr(owner) => self.replace_in_expr(owner, old, replacement)?,
            ExprParent::Stmt(owner) => self.replace_in_stmt(owner, old, replacement)?,
            ExprParent::Decl(owner) => self.replace_in_initializer(owner, old, replacement)?,
        }

        // free old's subtree except the part that lives on
        let removed = self.subtree_excluding(old, replacement);
        let mut saved = Vec::new();
        for &node in &removed {
            if let Some(expression) = self.exprs.get_mut(node.0) {
                saved.append(&mut expression.comments);
            }
        }
        for node in removed {
            self.exprs.remove(node.0);
        }
        if let Some(expression) = self.exprs.get_mut(replacement.0) {
            expression.parent = Some(parent);
            expression.comments.extend(saved);
        }
        Ok(replacement)
    }

    fn subtree_excluding(&self, root: ExprId, keep: ExprId) -> Vec<ExprId> {
        let mut out = Vec::new();
        self.collect_subtree(root, keep, &mut out);
        out
    }

    fn collect_subtree(&self, expr: ExprId, keep: ExprId, out: &mut Vec<ExprId>) {
        if expr == keep {
            return;
        }
        out.push(expr);
        for child in self.expr_children(expr) {
            self.collect_subtree(child, keep, out);
        }
    }

    fn replace_in_expr(&mut self, owner: ExprId, old: ExprId, new: ExprId) -> Result<(), EditError> {
        let owner_node = self
            .exprs
            .get_mut(owner.0)
            .ok_or(EditError::DetachedExpression)?;
        let slot = match &mut owner_node.kind {
            ExprKind::MethodCall { receiver, args, .. } => receiver
                .iter_mut()
                .chain(args.iter_mut())
                .find(|slot| **slot == old),
            ExprKind::Paren { inner } => (*inner == old).then_some(inner),
            ExprKind::Conditional {
                condition,
                when_true,
                when_false,
            } => [condition, when_true, when_false]
                .into_iter()
                .find(|slot| **slot == old),
            ExprKind::New { args, .. } => args.iter_mut().find(|slot| **slot == old),
            ExprKind::Assign { target, value } => {
                [target, value].into_iter().find(|slot| **slot == old)
            }
            ExprKind::NameRef { .. } | ExprKind::Literal(_) => None,
        };
        match slot {
            Some(slot) => {
                *slot = new;
                Ok(())
            }
            None => Err(EditError::DetachedExpression),
        }
    }

    fn replace_in_stmt(&mut self, owner: StmtId, old: ExprId, new: ExprId) -> Result<(), EditError> {
        let statement = self
            .stmts
            .get_mut(owner.0)
            .ok_or(EditError::DetachedExpression)?;
        let slot = match &mut statement.kind {
            StmtKind::Expr(expr) => (*expr == old).then_some(expr),
            StmtKind::If { condition, .. } => (*condition == old).then_some(condition),
            StmtKind::While { condition, .. } => (*condition == old).then_some(condition),
            StmtKind::Return(Some(value)) => (*value == old).then_some(value),
            StmtKind::Local(_) | StmtKind::Block(_) | StmtKind::Return(None) => None,
        };
        match slot {
            Some(slot) => {
                *slot = new;
                Ok(())
            }
            None => Err(EditError::DetachedExpression),
        }
    }

    fn replace_in_initializer(
        &mut self,
        owner: DeclId,
        old: ExprId,
        new: ExprId,
    ) -> Result<(), EditError> {
        let declaration = self
            .decls
            .get_mut(owner.0)
            .ok_or(EditError::DetachedExpression)?;
        if declaration.initializer == Some(old) {
            declaration.initializer = Some(new);
            Ok(())
        } else {
            Err(EditError::DetachedExpression)
        }
    }

    /// Point a declaration at a new nominal type. A `var` declaration keeps
    /// inferring; a spelled-out reference becomes fully qualified until
    /// [`FileModel::shorten_type_reference`] runs.
    pub fn set_declared_type(&mut self, decl: DeclId, ty: JavaType) -> Result<(), EditError> {
        let declaration = self
            .decls
            .get_mut(decl.0)
            .ok_or(EditError::MissingDeclaration)?;
        declaration.declared_type.ty = ty;
        if declaration.declared_type.form != TypeForm::Inferred {
            declaration.declared_type.form = TypeForm::Qualified;
        }
        Ok(())
    }

    /// Rewrite a qualified type reference to its short spelling. Inferred
    /// declarations stay `var`; already-short references are left alone.
    pub fn shorten_type_reference(&mut self, decl: DeclId) -> Result<(), EditError> {
        let declaration = self
            .decls
            .get_mut(decl.0)
            .ok_or(EditError::MissingDeclaration)?;
        if declaration.declared_type.form == TypeForm::Qualified {
            declaration.declared_type.form = TypeForm::Short;
        }
        Ok(())
    }
}
