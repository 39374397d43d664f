//! Call resolution and expression typing
//!
//! Resolution works from static receiver types against the class registry.
//! Anything the model cannot see (unqualified calls, unresolved name
//! references, unknown classes) resolves to `None` rather than guessing.

use crate::ast::{ExprId, ExprKind, Literal};
use crate::classes::MethodId;
use crate::model::FileModel;
use crate::ty::{JavaType, Primitive, JAVA_LANG_STRING};

impl FileModel {
    /// Resolve an instance call to the method it invokes. Requires a
    /// receiver with a known class type.
    pub fn resolve_call(&self, call: ExprId) -> Option<MethodId> {
        let ExprKind::MethodCall {
            receiver,
            method,
            args,
        } = self.expr_kind(call)?
        else {
            return None;
        };
        let receiver = (*receiver)?;
        let receiver_type = self.expression_type(receiver)?;
        let class = self.classes().class_named(receiver_type.class_name()?)?;
        self.classes().lookup_method(class, method, args.len())
    }

    /// Static type of an expression, when the model can determine one.
    pub fn expression_type(&self, expr: ExprId) -> Option<JavaType> {
        match self.expr_kind(expr)? {
            ExprKind::NameRef { target, .. } => {
                let declaration = self.declaration((*target)?)?;
                Some(declaration.declared_type.ty.clone())
            }
            ExprKind::MethodCall { .. } => {
                let method = self.resolve_call(expr)?;
                Some(self.classes().method(method)?.return_type.clone())
            }
            ExprKind::Paren { inner } => self.expression_type(*inner),
            ExprKind::Conditional {
                when_true,
                when_false,
                ..
            } => {
                let true_type = self.expression_type(*when_true)?;
                let false_type = self.expression_type(*when_false)?;
                // no least-upper-bound computation; agree or give up
                (true_type == false_type).then_some(true_type)
            }
            ExprKind::Literal(Literal::Str(_)) => Some(JavaType::class(JAVA_LANG_STRING)),
            ExprKind::Literal(Literal::Int(_)) => Some(JavaType::Primitive(Primitive::Int)),
            ExprKind::Literal(Literal::Bool(_)) => Some(JavaType::Primitive(Primitive::Boolean)),
            ExprKind::New { class_name, .. } => Some(JavaType::class(class_name.clone())),
            ExprKind::Assign { target, .. } => self.expression_type(*target),
        }
    }
}
