//! Reference search over the file tree

use crate::ast::{DeclId, ExprId, ExprKind, StmtId, StmtKind};
use crate::cancel::{CancelToken, Cancelled};
use crate::model::FileModel;

impl FileModel {
    /// Every resolved reference to `decl`, in source order: field
    /// initializers first, then the body statements depth-first. Polls the
    /// token once per visited node.
    pub fn find_references(
        &self,
        decl: DeclId,
        token: &CancelToken,
    ) -> Result<Vec<ExprId>, Cancelled> {
        let mut references = Vec::new();
        for &field in self.fields() {
            if let Some(initializer) = self.declaration(field).and_then(|d| d.initializer) {
                self.references_in_expr(initializer, decl, token, &mut references)?;
            }
        }
        for &stmt in self.body() {
            self.references_in_stmt(stmt, decl, token, &mut references)?;
        }
        Ok(references)
    }

    fn references_in_stmt(
        &self,
        stmt: StmtId,
        decl: DeclId,
        token: &CancelToken,
        out: &mut Vec<ExprId>,
    ) -> Result<(), Cancelled> {
        token.check()?;
        let Some(statement) = self.statement(stmt) else {
            return Ok(());
        };
        match &statement.kind {
            StmtKind::Local(local) => {
                if let Some(initializer) = self.declaration(*local).and_then(|d| d.initializer) {
                    self.references_in_expr(initializer, decl, token, out)?;
                }
            }
            StmtKind::Expr(expr) => self.references_in_expr(*expr, decl, token, out)?,
            StmtKind::Block(children) => {
                for &child in children {
                    self.references_in_stmt(child, decl, token, out)?;
                }
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.references_in_expr(*condition, decl, token, out)?;
                self.references_in_stmt(*then_branch, decl, token, out)?;
                if let Some(else_branch) = else_branch {
                    self.references_in_stmt(*else_branch, decl, token, out)?;
                }
            }
            StmtKind::While { condition, body } => {
                self.references_in_expr(*condition, decl, token, out)?;
                self.references_in_stmt(*body, decl, token, out)?;
            }
            StmtKind::Return(value) => {
                if let Some(value) = value {
                    self.references_in_expr(*value, decl, token, out)?;
                }
            }
        }
        Ok(())
    }

    fn references_in_expr(
        &self,
        expr: ExprId,
        decl: DeclId,
        token: &CancelToken,
        out: &mut Vec<ExprId>,
    ) -> Result<(), Cancelled> {
        token.check()?;
        if let Some(ExprKind::NameRef {
            target: Some(target),
            ..
        }) = self.expr_kind(expr)
        {
            if *target == decl {
                out.push(expr);
            }
        }
        for child in self.expr_children(expr) {
            self.references_in_expr(child, decl, token, out)?;
        }
        Ok(())
    }
}
