//! The per-file program model
//!
//! A [`FileModel`] owns three arenas (expressions, statements and
//! declarations) plus the class registry the file resolves against. Hosts
//! build the tree bottom-up through the `new_*` constructors, which wire
//! parent links as children are attached. All accessors take ids and return
//! `Option`; a stale id after an edit is an ordinary miss, never a panic.

use std::collections::HashMap;

use text_size::{TextRange, TextSize};

use crate::arena::Arena;
use crate::ast::{
    DeclId, DeclKind, Declaration, ExprId, ExprKind, ExprParent, Expression, Literal, Modifiers,
    Statement, StmtId, StmtKind,
};
use crate::classes::ClassRegistry;
use crate::ty::TypeElement;

/// Model of a single analyzed file.
#[derive(Debug, Clone)]
pub struct FileModel {
    name: String,
    classes: ClassRegistry,
    pub(crate) exprs: Arena<Expression>,
    pub(crate) stmts: Arena<Statement>,
    pub(crate) decls: Arena<Declaration>,
    /// Class fields, in declaration order
    fields: Vec<DeclId>,
    /// Top-level statements, in source order
    body: Vec<StmtId>,
    local_stmts: HashMap<DeclId, StmtId>,
}

impl FileModel {
    pub fn new(classes: ClassRegistry) -> Self {
        FileModel {
            name: "<in-memory>".to_string(),
            classes,
            exprs: Arena::new(),
            stmts: Arena::new(),
            decls: Arena::new(),
            fields: Vec::new(),
            body: Vec::new(),
            local_stmts: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn classes(&self) -> &ClassRegistry {
        &self.classes
    }

    // ---- expression constructors ----

    pub fn new_name_ref(&mut self, name: impl Into<String>, target: Option<DeclId>) -> ExprId {
        self.insert_expr(ExprKind::NameRef {
            name: name.into(),
            target,
        })
    }

    pub fn new_method_call(
        &mut self,
        receiver: Option<ExprId>,
        method: impl Into<String>,
        args: Vec<ExprId>,
    ) -> ExprId {
        let id = self.insert_expr(ExprKind::MethodCall {
            receiver,
            method: method.into(),
            args: args.clone(),
        });
        if let Some(receiver) = receiver {
            self.set_expr_parent(receiver, ExprParent::Expr(id));
        }
        for arg in args {
            self.set_expr_parent(arg, ExprParent::Expr(id));
        }
        id
    }

    pub fn new_paren(&mut self, inner: ExprId) -> ExprId {
        let id = self.insert_expr(ExprKind::Paren { inner });
        self.set_expr_parent(inner, ExprParent::Expr(id));
        id
    }

    pub fn new_conditional(
        &mut self,
        condition: ExprId,
        when_true: ExprId,
        when_false: ExprId,
    ) -> ExprId {
        let id = self.insert_expr(ExprKind::Conditional {
            condition,
            when_true,
            when_false,
        });
        for child in [condition, when_true, when_false] {
            self.set_expr_parent(child, ExprParent::Expr(id));
        }
        id
    }

    pub fn new_string_literal(&mut self, value: impl Into<String>) -> ExprId {
        self.insert_expr(ExprKind::Literal(Literal::Str(value.into())))
    }

    pub fn new_int_literal(&mut self, value: i64) -> ExprId {
        self.insert_expr(ExprKind::Literal(Literal::Int(value)))
    }

    pub fn new_bool_literal(&mut self, value: bool) -> ExprId {
        self.insert_expr(ExprKind::Literal(Literal::Bool(value)))
    }

    pub fn new_constructor_call(
        &mut self,
        class_name: impl Into<String>,
        args: Vec<ExprId>,
    ) -> ExprId {
        let id = self.insert_expr(ExprKind::New {
            class_name: class_name.into(),
            args: args.clone(),
        });
        for arg in args {
            self.set_expr_parent(arg, ExprParent::Expr(id));
        }
        id
    }

    pub fn new_assignment(&mut self, target: ExprId, value: ExprId) -> ExprId {
        let id = self.insert_expr(ExprKind::Assign { target, value });
        self.set_expr_parent(target, ExprParent::Expr(id));
        self.set_expr_parent(value, ExprParent::Expr(id));
        id
    }

    fn insert_expr(&mut self, kind: ExprKind) -> ExprId {
        ExprId(self.exprs.insert(Expression {
            kind,
            parent: None,
            range: TextRange::empty(TextSize::from(0)),
            comments: Vec::new(),
        }))
    }

    pub(crate) fn set_expr_parent(&mut self, expr: ExprId, parent: ExprParent) {
        if let Some(node) = self.exprs.get_mut(expr.0) {
            node.parent = Some(parent);
        }
    }

    // ---- declaration constructors ----

    /// Register a class field. Fields keep their registration order.
    pub fn new_field(
        &mut self,
        name: impl Into<String>,
        declared_type: TypeElement,
        modifiers: Modifiers,
        initializer: Option<ExprId>,
    ) -> DeclId {
        let id = self.insert_decl(DeclKind::Field, name.into(), declared_type, modifiers, initializer);
        self.fields.push(id);
        id
    }

    /// Register a local variable. Attach it to the tree with
    /// [`FileModel::new_local_stmt`].
    pub fn new_local(
        &mut self,
        name: impl Into<String>,
        declared_type: TypeElement,
        modifiers: Modifiers,
        initializer: Option<ExprId>,
    ) -> DeclId {
        self.insert_decl(DeclKind::Local, name.into(), declared_type, modifiers, initializer)
    }

    fn insert_decl(
        &mut self,
        kind: DeclKind,
        name: String,
        declared_type: TypeElement,
        modifiers: Modifiers,
        initializer: Option<ExprId>,
    ) -> DeclId {
        let id = DeclId(self.decls.insert(Declaration {
            kind,
            name,
            declared_type,
            modifiers,
            initializer,
        }));
        if let Some(initializer) = initializer {
            self.set_expr_parent(initializer, ExprParent::Decl(id));
        }
        id
    }

    // ---- statement constructors ----

    pub fn new_local_stmt(&mut self, decl: DeclId) -> StmtId {
        let id = self.insert_stmt(StmtKind::Local(decl));
        self.local_stmts.insert(decl, id);
        id
    }

    pub fn new_expr_stmt(&mut self, expr: ExprId) -> StmtId {
        let id = self.insert_stmt(StmtKind::Expr(expr));
        self.set_expr_parent(expr, ExprParent::Stmt(id));
        id
    }

    pub fn new_block(&mut self, statements: Vec<StmtId>) -> StmtId {
        let id = self.insert_stmt(StmtKind::Block(statements.clone()));
        for child in statements {
            self.set_stmt_parent(child, id);
        }
        id
    }

    pub fn new_if(
        &mut self,
        condition: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    ) -> StmtId {
        let id = self.insert_stmt(StmtKind::If {
            condition,
            then_branch,
            else_branch,
        });
        self.set_expr_parent(condition, ExprParent::Stmt(id));
        self.set_stmt_parent(then_branch, id);
        if let Some(else_branch) = else_branch {
            self.set_stmt_parent(else_branch, id);
        }
        id
    }

    pub fn new_while(&mut self, condition: ExprId, body: StmtId) -> StmtId {
        let id = self.insert_stmt(StmtKind::While { condition, body });
        self.set_expr_parent(condition, ExprParent::Stmt(id));
        self.set_stmt_parent(body, id);
        id
    }

    pub fn new_return(&mut self, value: Option<ExprId>) -> StmtId {
        let id = self.insert_stmt(StmtKind::Return(value));
        if let Some(value) = value {
            self.set_expr_parent(value, ExprParent::Stmt(id));
        }
        id
    }

    fn insert_stmt(&mut self, kind: StmtKind) -> StmtId {
        StmtId(self.stmts.insert(Statement { kind, parent: None }))
    }

    fn set_stmt_parent(&mut self, stmt: StmtId, parent: StmtId) {
        if let Some(node) = self.stmts.get_mut(stmt.0) {
            node.parent = Some(parent);
        }
    }

    /// Append a statement to the file body.
    pub fn push_statement(&mut self, stmt: StmtId) {
        self.body.push(stmt);
    }

    // ---- accessors ----

    pub fn expression(&self, expr: ExprId) -> Option<&Expression> {
        self.exprs.get(expr.0)
    }

    pub fn expr_kind(&self, expr: ExprId) -> Option<&ExprKind> {
        self.expression(expr).map(|node| &node.kind)
    }

    pub fn expr_parent(&self, expr: ExprId) -> Option<ExprParent> {
        self.expression(expr).and_then(|node| node.parent)
    }

    pub fn expr_range(&self, expr: ExprId) -> Option<TextRange> {
        self.expression(expr).map(|node| node.range)
    }

    pub fn set_expr_range(&mut self, expr: ExprId, range: TextRange) {
        if let Some(node) = self.exprs.get_mut(expr.0) {
            node.range = range;
        }
    }

    /// Attach a comment to an expression. Comments survive edits that remove
    /// the node; see [`FileModel::replace_expression`].
    pub fn add_comment(&mut self, expr: ExprId, text: impl Into<String>) {
        if let Some(node) = self.exprs.get_mut(expr.0) {
            node.comments.push(text.into());
        }
    }

    pub fn comments(&self, expr: ExprId) -> &[String] {
        self.expression(expr)
            .map(|node| node.comments.as_slice())
            .unwrap_or(&[])
    }

    pub fn statement(&self, stmt: StmtId) -> Option<&Statement> {
        self.stmts.get(stmt.0)
    }

    pub fn declaration(&self, decl: DeclId) -> Option<&Declaration> {
        self.decls.get(decl.0)
    }

    pub fn fields(&self) -> &[DeclId] {
        &self.fields
    }

    pub fn body(&self) -> &[StmtId] {
        &self.body
    }

    /// The statement declaring a local variable, if it was attached.
    pub fn declaring_statement(&self, decl: DeclId) -> Option<StmtId> {
        self.local_stmts.get(&decl).copied()
    }

    /// Every local declaration in the body, in statement order.
    pub fn local_declarations(&self) -> Vec<DeclId> {
        let mut out = Vec::new();
        for &stmt in &self.body {
            self.collect_locals(stmt, &mut out);
        }
        out
    }

    fn collect_locals(&self, stmt: StmtId, out: &mut Vec<DeclId>) {
        let Some(statement) = self.statement(stmt) else {
            return;
        };
        match &statement.kind {
            StmtKind::Local(decl) => out.push(*decl),
            StmtKind::Block(children) => {
                for &child in children {
                    self.collect_locals(child, out);
                }
            }
            StmtKind::If {
                then_branch,
                else_branch,
                ..
            } => {
                self.collect_locals(*then_branch, out);
                if let Some(else_branch) = else_branch {
                    self.collect_locals(*else_branch, out);
                }
            }
            StmtKind::While { body, .. } => self.collect_locals(*body, out),
            StmtKind::Expr(_) | StmtKind::Return(_) => {}
        }
    }

    /// Flatten purely structural wrappers: parentheses dissolve into their
    /// inner expression and conditionals into both value branches (the
    /// condition is not a value position). Any other expression is returned
    /// as itself.
    pub fn structural_expressions(&self, expr: ExprId) -> Vec<ExprId> {
        let mut out = Vec::new();
        self.flatten_structural(expr, &mut out);
        out
    }

    fn flatten_structural(&self, expr: ExprId, out: &mut Vec<ExprId>) {
        match self.expr_kind(expr) {
            Some(ExprKind::Paren { inner }) => self.flatten_structural(*inner, out),
            Some(ExprKind::Conditional {
                when_true,
                when_false,
                ..
            }) => {
                self.flatten_structural(*when_true, out);
                self.flatten_structural(*when_false, out);
            }
            Some(_) => out.push(expr),
            None => {}
        }
    }

    /// Direct child expressions in syntactic order.
    pub fn expr_children(&self, expr: ExprId) -> Vec<ExprId> {
        match self.expr_kind(expr) {
            Some(ExprKind::MethodCall { receiver, args, .. }) => {
                receiver.iter().copied().chain(args.iter().copied()).collect()
            }
            Some(ExprKind::Paren { inner }) => vec![*inner],
            Some(ExprKind::Conditional {
                condition,
                when_true,
                when_false,
            }) => vec![*condition, *when_true, *when_false],
            Some(ExprKind::New { args, .. }) => args.clone(),
            Some(ExprKind::Assign { target, value }) => vec![*target, *value],
            Some(ExprKind::NameRef { .. }) | Some(ExprKind::Literal(_)) | None => Vec::new(),
        }
    }

    /// The statement an expression ultimately hangs under, crossing local
    /// declaration initializers.
    pub fn enclosing_statement(&self, expr: ExprId) -> Option<StmtId> {
        let mut current = expr;
        loop {
            match self.expr_parent(current)? {
                ExprParent::Expr(parent) => current = parent,
                ExprParent::Stmt(stmt) => return Some(stmt),
                ExprParent::Decl(decl) => return self.declaring_statement(decl),
            }
        }
    }
}
