//! Effectively-final analysis
//!
//! A declaration is effectively final when its value cannot change after it
//! gets one: it carries `final`, or it has an initializer and no
//! assignments, or it has no initializer and exactly one assignment outside
//! any loop. The analysis is intentionally conservative; anything it cannot
//! prove counts as reassignable.

use crate::ast::{DeclId, ExprId, ExprKind, StmtId, StmtKind};
use crate::model::FileModel;

impl FileModel {
    pub fn is_effectively_final(&self, decl: DeclId) -> bool {
        let Some(declaration) = self.declaration(decl) else {
            return false;
        };
        if declaration.modifiers.is_final {
            return true;
        }
        let assignments = self.assignments_to(decl);
        match declaration.initializer {
            Some(_) => assignments.is_empty(),
            None => assignments.len() == 1 && !self.inside_loop(assignments[0]),
        }
    }

    /// Assignment expressions whose target resolves to `decl`, in source
    /// order.
    fn assignments_to(&self, decl: DeclId) -> Vec<ExprId> {
        let mut out = Vec::new();
        for &field in self.fields() {
            if let Some(initializer) = self.declaration(field).and_then(|d| d.initializer) {
                self.assignments_in_expr(initializer, decl, &mut out);
            }
        }
        for &stmt in self.body() {
            self.assignments_in_stmt(stmt, decl, &mut out);
        }
        out
    }

    fn assignments_in_stmt(&self, stmt: StmtId, decl: DeclId, out: &mut Vec<ExprId>) {
        let Some(statement) = self.statement(stmt) else {
            return;
        };
        match &statement.kind {
            StmtKind::Local(local) => {
                if let Some(initializer) = self.declaration(*local).and_then(|d| d.initializer) {
                    self.assignments_in_expr(initializer, decl, out);
                }
            }
            StmtKind::Expr(expr) => self.assignments_in_expr(*expr, decl, out),
            StmtKind::Block(children) => {
                for &child in children {
                    self.assignments_in_stmt(child, decl, out);
                }
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.assignments_in_expr(*condition, decl, out);
                self.assignments_in_stmt(*then_branch, decl, out);
                if let Some(else_branch) = else_branch {
                    self.assignments_in_stmt(*else_branch, decl, out);
                }
            }
            StmtKind::While { condition, body } => {
                self.assignments_in_expr(*condition, decl, out);
                self.assignments_in_stmt(*body, decl, out);
            }
            StmtKind::Return(value) => {
                if let Some(value) = value {
                    self.assignments_in_expr(*value, decl, out);
                }
            }
        }
    }

    fn assignments_in_expr(&self, expr: ExprId, decl: DeclId, out: &mut Vec<ExprId>) {
        if let Some(ExprKind::Assign { target, .. }) = self.expr_kind(expr) {
            if let Some(ExprKind::NameRef {
                target: Some(resolved),
                ..
            }) = self.expr_kind(*target)
            {
                if *resolved == decl {
                    out.push(expr);
                }
            }
        }
        for child in self.expr_children(expr) {
            self.assignments_in_expr(child, decl, out);
        }
    }

    fn inside_loop(&self, expr: ExprId) -> bool {
        let mut current = self.enclosing_statement(expr);
        while let Some(stmt) = current {
            let Some(statement) = self.statement(stmt) else {
                return false;
            };
            if matches!(statement.kind, StmtKind::While { .. }) {
                return true;
            }
            current = statement.parent;
        }
        false
    }
}
