//! Inspection: report `toString()` calls on values that can stay `CharSequence`
//!
//! Example:
//! ```java
//! // Before
//! CharSequence raw = source.describe();
//! final String text = raw.toString();
//! sink.accept(text.toString());
//!
//! // After
//! CharSequence raw = source.describe();
//! final CharSequence text = raw;
//! sink.accept(text);
//! ```
//!
//! A declaration is flagged only when its written type is exactly `String`
//! or `CharSequence`, it is effectively final, and every usage still works
//! once the value is typed `CharSequence`. Fields additionally have to be
//! `private final`, since anything wider can be retyped under a caller the
//! analysis never sees.

mod check;
mod fix;

pub use fix::UnnecessaryToStringFix;

use javelint_core::{visit_declarations, DeclarationVisitor, Diagnostic};
use javelint_model::{Cancelled, DeclId, ExprKind, FileModel};

use crate::bundle;
use crate::registry::{Inspection, InspectionContext};

use check::Finding;

pub const INSPECTION_ID: &str = "unnecessary_charsequence_tostring";

pub struct UnnecessaryCharSequenceToString;

impl Inspection for UnnecessaryCharSequenceToString {
    fn id(&self) -> &'static str {
        INSPECTION_ID
    }

    fn display_name(&self) -> String {
        bundle::message("unnecessary.charsequence.tostring.displayName", &[])
    }

    fn run(
        &self,
        model: &FileModel,
        ctx: &InspectionContext<'_>,
    ) -> Result<Vec<Diagnostic>, Cancelled> {
        let mut collector = Collector {
            ctx,
            diagnostics: Vec::new(),
        };
        visit_declarations(model, &mut collector)?;
        Ok(collector.diagnostics)
    }
}

struct Collector<'a> {
    ctx: &'a InspectionContext<'a>,
    diagnostics: Vec<Diagnostic>,
}

impl DeclarationVisitor for Collector<'_> {
    fn visit_field(&mut self, model: &FileModel, decl: DeclId) -> Result<(), Cancelled> {
        let Some(declaration) = model.declaration(decl) else {
            return Ok(());
        };
        if !(declaration.modifiers.is_private && declaration.modifiers.is_final) {
            return Ok(());
        }
        self.collect(model, decl)
    }

    fn visit_local(&mut self, model: &FileModel, decl: DeclId) -> Result<(), Cancelled> {
        self.collect(model, decl)
    }
}

impl Collector<'_> {
    fn collect(&mut self, model: &FileModel, decl: DeclId) -> Result<(), Cancelled> {
        self.ctx.token.check()?;
        for finding in check::check_variable(model, decl, self.ctx.token)? {
            self.diagnostics.push(self.build_diagnostic(model, finding));
        }
        Ok(())
    }

    fn build_diagnostic(&self, model: &FileModel, finding: Finding) -> Diagnostic {
        let receiver = match model.expr_kind(finding.call) {
            Some(ExprKind::MethodCall {
                receiver: Some(receiver),
                ..
            }) => model.render_expression(*receiver),
            _ => model.render_expression(finding.call),
        };
        let message = bundle::message("unnecessary.charsequence.tostring.problem", &[&receiver]);
        let mut diagnostic = Diagnostic::new(INSPECTION_ID, self.ctx.severity, message, finding.call)
            .with_file(model.name())
            .with_fix(Box::new(UnnecessaryToStringFix::new(
                finding.decl,
                finding.call,
            )));
        if let Some(range) = model.expr_range(finding.call) {
            diagnostic = diagnostic.with_range(range);
        }
        diagnostic
    }
}
