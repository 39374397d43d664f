//! Deferred rewrite for a flagged `toString()` call
//!
//! The fix runs against whatever the model looks like at apply time, which
//! may be long after the diagnostic was produced. It therefore repeats the
//! whole eligibility check and locates its call among the fresh findings
//! before touching anything; a model that moved on yields a
//! [`FixOutcome::Stale`] instead of a bad edit.

use javelint_core::{FixOutcome, QuickFix, StaleReason};
use javelint_model::{
    CancelToken, Cancelled, DeclId, ExprId, ExprKind, FileModel, JavaType, JAVA_LANG_CHAR_SEQUENCE,
};

use crate::{bundle, logging};

use super::check;

/// Replaces `x.toString()` with `x` and retypes the flagged declaration to
/// `CharSequence` when it is not already written that way.
#[derive(Debug, Clone, Copy)]
pub struct UnnecessaryToStringFix {
    decl: DeclId,
    call: ExprId,
}

impl UnnecessaryToStringFix {
    pub(crate) fn new(decl: DeclId, call: ExprId) -> Self {
        UnnecessaryToStringFix { decl, call }
    }

    fn stale(&self, reason: StaleReason) -> FixOutcome {
        logging::log_fix_stale(&self.name(), reason);
        FixOutcome::Stale(reason)
    }
}

impl QuickFix for UnnecessaryToStringFix {
    fn name(&self) -> String {
        bundle::message("unnecessary.charsequence.tostring.fix.description", &[])
    }

    fn family_name(&self) -> String {
        bundle::message("fix.family.simplify", &[])
    }

    fn apply(&self, model: &mut FileModel, token: &CancelToken) -> Result<FixOutcome, Cancelled> {
        if model.declaration(self.decl).is_none() {
            return Ok(self.stale(StaleReason::DeclarationMissing));
        }
        let findings = check::check_variable(model, self.decl, token)?;
        if findings.is_empty() {
            return Ok(self.stale(StaleReason::NoLongerEligible));
        }
        if !findings.iter().any(|finding| finding.call == self.call) {
            return Ok(self.stale(StaleReason::CallMissing));
        }

        let receiver = match model.expr_kind(self.call) {
            Some(ExprKind::MethodCall {
                receiver: Some(receiver),
                ..
            }) => *receiver,
            _ => return Ok(self.stale(StaleReason::CallMissing)),
        };
        if model.replace_expression(self.call, receiver).is_err() {
            return Ok(self.stale(StaleReason::CallMissing));
        }

        let needs_retype = match model.declaration(self.decl) {
            Some(declaration) => !declaration
                .declared_type
                .ty
                .is_class(JAVA_LANG_CHAR_SEQUENCE),
            None => return Ok(self.stale(StaleReason::DeclarationMissing)),
        };
        if needs_retype {
            let retyped = model
                .set_declared_type(self.decl, JavaType::class(JAVA_LANG_CHAR_SEQUENCE))
                .and_then(|_| model.shorten_type_reference(self.decl));
            if retyped.is_err() {
                return Ok(self.stale(StaleReason::DeclarationMissing));
            }
        }

        logging::log_fix_applied(&self.name());
        Ok(FixOutcome::Applied)
    }
}
