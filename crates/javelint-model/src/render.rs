//! Plain-text rendering of model nodes
//!
//! Produces Java-ish source text for messages and assertions. Rendering is
//! best effort: freed ids come out as `<missing>` instead of failing.

use crate::ast::{DeclId, ExprId, ExprKind, Literal};
use crate::model::FileModel;

impl FileModel {
    pub fn render_expression(&self, expr: ExprId) -> String {
        let Some(kind) = self.expr_kind(expr) else {
            return "<missing>".to_string();
        };
        match kind {
            ExprKind::NameRef { name, .. } => name.clone(),
            ExprKind::MethodCall {
                receiver,
                method,
                args,
            } => {
                let args = self.render_args(args);
                match receiver {
                    Some(receiver) => {
                        format!("{}.{}({})", self.render_expression(*receiver), method, args)
                    }
                    None => format!("{}({})", method, args),
                }
            }
            ExprKind::Paren { inner } => format!("({})", self.render_expression(*inner)),
            ExprKind::Conditional {
                condition,
                when_true,
                when_false,
            } => format!(
                "{} ? {} : {}",
                self.render_expression(*condition),
                self.render_expression(*when_true),
                self.render_expression(*when_false)
            ),
            ExprKind::Literal(Literal::Str(value)) => format!("\"{}\"", value),
            ExprKind::Literal(Literal::Int(value)) => value.to_string(),
            ExprKind::Literal(Literal::Bool(value)) => value.to_string(),
            ExprKind::New { class_name, args } => {
                format!("new {}({})", class_name, self.render_args(args))
            }
            ExprKind::Assign { target, value } => format!(
                "{} = {}",
                self.render_expression(*target),
                self.render_expression(*value)
            ),
        }
    }

    fn render_args(&self, args: &[ExprId]) -> String {
        args.iter()
            .map(|&arg| self.render_expression(arg))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Declaration as written: modifiers, type (respecting its spelling
    /// form), name and initializer.
    pub fn render_declaration(&self, decl: DeclId) -> String {
        let Some(declaration) = self.declaration(decl) else {
            return "<missing>".to_string();
        };
        let mut out = String::new();
        if declaration.modifiers.is_private {
            out.push_str("private ");
        }
        if declaration.modifiers.is_final {
            out.push_str("final ");
        }
        out.push_str(&declaration.declared_type.render());
        out.push(' ');
        out.push_str(&declaration.name);
        if let Some(initializer) = declaration.initializer {
            out.push_str(" = ");
            out.push_str(&self.render_expression(initializer));
        }
        out
    }
}
