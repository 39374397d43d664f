//! Eligibility check and redundant-call scan
//!
//! A declaration qualifies when its written type is exactly `String` or
//! `CharSequence`, it is effectively final, and every reference stays on
//! the `CharSequence` surface. For qualifying declarations the initializer
//! is scanned for calls that resolve to `CharSequence.toString()` itself,
//! and references that feed such a call directly are flagged too.

use javelint_model::{
    CancelToken, Cancelled, DeclId, ExprId, ExprKind, ExprParent, FileModel,
    JAVA_LANG_CHAR_SEQUENCE, JAVA_LANG_STRING,
};

const GATE_TYPES: [&str; 2] = [JAVA_LANG_STRING, JAVA_LANG_CHAR_SEQUENCE];

/// One redundant `toString()` call attributed to a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Finding {
    pub decl: DeclId,
    pub call: ExprId,
}

/// Full check for one declaration. Initializer findings come first, then
/// usage-site findings in reference order; an ineligible declaration
/// yields nothing.
pub(crate) fn check_variable(
    model: &FileModel,
    decl: DeclId,
    token: &CancelToken,
) -> Result<Vec<Finding>, Cancelled> {
    let Some(declaration) = model.declaration(decl) else {
        return Ok(Vec::new());
    };
    if !declaration.declared_type.ty.is_one_of(&GATE_TYPES) {
        return Ok(Vec::new());
    }
    if !model.is_effectively_final(decl) {
        return Ok(Vec::new());
    }
    let Some(usage_calls) = classify_usages(model, decl, token)? else {
        return Ok(Vec::new());
    };

    let mut findings = Vec::new();
    scan_initializer(model, declaration.initializer, decl, token, &mut findings)?;
    findings.extend(usage_calls.into_iter().map(|call| Finding { decl, call }));
    Ok(findings)
}

/// Classify every reference to `decl`. Returns `None` as soon as one usage
/// would break under a `CharSequence`-typed declaration; otherwise the
/// usage-site `toString()` calls that are themselves redundant.
fn classify_usages(
    model: &FileModel,
    decl: DeclId,
    token: &CancelToken,
) -> Result<Option<Vec<ExprId>>, Cancelled> {
    let references = model.find_references(decl, token)?;
    // no usages at all: narrowing the declared type can break nothing
    if references.is_empty() {
        return Ok(Some(Vec::new()));
    }

    let mut redundant_calls = Vec::new();
    for reference in references {
        token.check()?;
        if let Some(call) = receiver_call(model, reference) {
            if redundant_to_string(model, call) && !reached_by_initializer_scan(model, call) {
                redundant_calls.push(call);
            }
        }
        if !usage_is_compatible(model, reference, token)? {
            return Ok(None);
        }
    }
    Ok(Some(redundant_calls))
}

/// One reference is compatible when every call it feeds stays on the
/// `CharSequence` surface. Accepting a receiver position moves the
/// classification up to the enclosing call, so a whole chain is judged by
/// where its result finally flows.
fn usage_is_compatible(
    model: &FileModel,
    reference: ExprId,
    token: &CancelToken,
) -> Result<bool, Cancelled> {
    let mut current = reference;
    loop {
        token.check()?;
        let Some(ExprParent::Expr(parent)) = model.expr_parent(current) else {
            return Ok(true);
        };
        match model.expr_kind(parent) {
            Some(ExprKind::MethodCall {
                receiver: Some(receiver),
                ..
            }) if *receiver == current => {
                // receiver position: the invoked method must live on
                // CharSequence, directly or through its override roots
                let Some(method) = model.resolve_call(parent) else {
                    return Ok(false);
                };
                if model
                    .classes()
                    .method_owned_by(method, JAVA_LANG_CHAR_SEQUENCE)
                {
                    current = parent;
                    continue;
                }
                let roots = model.classes().deepest_super_methods(method);
                if roots
                    .iter()
                    .any(|&root| model.classes().method_owned_by(root, JAVA_LANG_CHAR_SEQUENCE))
                {
                    current = parent;
                    continue;
                }
                return Ok(false);
            }
            Some(ExprKind::MethodCall { args, .. }) => {
                let Some(index) = args.iter().position(|&arg| arg == current) else {
                    return Ok(true);
                };
                // argument position: only a resolved parameter that is not
                // CharSequence (behind arrays) rejects
                let compatible = match model
                    .resolve_call(parent)
                    .and_then(|method| model.classes().parameter_at(method, index))
                {
                    Some(parameter) => parameter.deep_component().is_class(JAVA_LANG_CHAR_SEQUENCE),
                    None => true,
                };
                return Ok(compatible);
            }
            _ => return Ok(true),
        }
    }
}

/// The call that has `expr` as its receiver, if any.
fn receiver_call(model: &FileModel, expr: ExprId) -> Option<ExprId> {
    let ExprParent::Expr(parent) = model.expr_parent(expr)? else {
        return None;
    };
    match model.expr_kind(parent) {
        Some(ExprKind::MethodCall {
            receiver: Some(receiver),
            ..
        }) if *receiver == expr => Some(parent),
        _ => None,
    }
}

/// `call` is `x.toString()` resolving to `CharSequence.toString()` itself
/// or to a method that ultimately overrides it.
fn redundant_to_string(model: &FileModel, call: ExprId) -> bool {
    if !is_to_string_shape(model, call) {
        return false;
    }
    let Some(method) = model.resolve_call(call) else {
        return false;
    };
    if model
        .classes()
        .method_owned_by(method, JAVA_LANG_CHAR_SEQUENCE)
    {
        return true;
    }
    model
        .classes()
        .deepest_super_methods(method)
        .iter()
        .any(|&root| model.classes().method_owned_by(root, JAVA_LANG_CHAR_SEQUENCE))
}

/// Exact matcher used by the initializer scan: an instance `toString()`
/// declared on `CharSequence` itself, with no subclass widening.
fn exact_char_sequence_to_string(model: &FileModel, call: ExprId) -> bool {
    if !is_to_string_shape(model, call) {
        return false;
    }
    match model.resolve_call(call) {
        Some(method) => model
            .classes()
            .method_owned_by(method, JAVA_LANG_CHAR_SEQUENCE),
        None => false,
    }
}

fn is_to_string_shape(model: &FileModel, call: ExprId) -> bool {
    matches!(
        model.expr_kind(call),
        Some(ExprKind::MethodCall {
            receiver: Some(_),
            method,
            args,
        }) if method == "toString" && args.is_empty()
    )
}

/// Whether the initializer scan of some `String`/`CharSequence` declaration
/// already reaches this call: ascending through parentheses, conditional
/// value branches and receiver chains ends at such a declaration's
/// initializer slot. Usage capture skips those calls so they are reported
/// once, against the declaration that owns the initializer.
fn reached_by_initializer_scan(model: &FileModel, call: ExprId) -> bool {
    let mut current = call;
    loop {
        match model.expr_parent(current) {
            Some(ExprParent::Expr(parent)) => {
                let reachable = match model.expr_kind(parent) {
                    Some(ExprKind::Paren { .. }) => true,
                    Some(ExprKind::Conditional {
                        when_true,
                        when_false,
                        ..
                    }) => *when_true == current || *when_false == current,
                    Some(ExprKind::MethodCall { receiver, .. }) => *receiver == Some(current),
                    _ => false,
                };
                if !reachable {
                    return false;
                }
                current = parent;
            }
            Some(ExprParent::Decl(decl)) => {
                return model
                    .declaration(decl)
                    .map(|declaration| declaration.declared_type.ty.is_one_of(&GATE_TYPES))
                    .unwrap_or(false);
            }
            _ => return false,
        }
    }
}

/// Depth-first scan over an initializer: flatten structural wrappers,
/// recurse into receivers first, then match the call itself, so findings
/// come out innermost first.
fn scan_initializer(
    model: &FileModel,
    expr: Option<ExprId>,
    decl: DeclId,
    token: &CancelToken,
    findings: &mut Vec<Finding>,
) -> Result<(), Cancelled> {
    let Some(expr) = expr else {
        return Ok(());
    };
    for candidate in model.structural_expressions(expr) {
        token.check()?;
        if let Some(ExprKind::MethodCall { receiver, .. }) = model.expr_kind(candidate) {
            scan_initializer(model, *receiver, decl, token, findings)?;
            if exact_char_sequence_to_string(model, candidate) {
                findings.push(Finding {
                    decl,
                    call: candidate,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use javelint_model::{
        ClassRegistry, JavaType, Modifiers, TypeElement, JAVA_LANG_STRING_BUILDER,
    };

    fn java_model() -> FileModel {
        FileModel::new(ClassRegistry::with_java_lang())
    }

    fn string_type() -> TypeElement {
        TypeElement::short(JavaType::class(JAVA_LANG_STRING))
    }

    fn cs_type() -> TypeElement {
        TypeElement::short(JavaType::class(JAVA_LANG_CHAR_SEQUENCE))
    }

    fn check(model: &FileModel, decl: DeclId) -> Vec<Finding> {
        check_variable(model, decl, &CancelToken::new()).unwrap()
    }

    /// `final CharSequence cs;` attached to the body.
    fn cs_local(model: &mut FileModel, name: &str) -> DeclId {
        let decl = model.new_local(name, cs_type(), Modifiers::FINAL, None);
        let stmt = model.new_local_stmt(decl);
        model.push_statement(stmt);
        decl
    }

    /// `final String <name> = cs.toString();` attached to the body.
    fn string_from_to_string(model: &mut FileModel, name: &str, cs: DeclId) -> (DeclId, ExprId) {
        let receiver = model.new_name_ref("cs", Some(cs));
        let call = model.new_method_call(Some(receiver), "toString", Vec::new());
        let decl = model.new_local(name, string_type(), Modifiers::FINAL, Some(call));
        let stmt = model.new_local_stmt(decl);
        model.push_statement(stmt);
        (decl, call)
    }

    // ==================== Type gate ====================

    #[test]
    fn test_other_declared_types_are_ignored() {
        let mut model = java_model();
        let cs = cs_local(&mut model, "cs");
        let receiver = model.new_name_ref("cs", Some(cs));
        let call = model.new_method_call(Some(receiver), "toString", Vec::new());
        let decl = model.new_local(
            "o",
            TypeElement::short(JavaType::class("java.lang.Object")),
            Modifiers::FINAL,
            Some(call),
        );
        let stmt = model.new_local_stmt(decl);
        model.push_statement(stmt);

        assert!(check(&model, decl).is_empty());
    }

    #[test]
    fn test_string_and_charsequence_pass_the_gate() {
        let mut model = java_model();
        let cs = cs_local(&mut model, "cs");
        let (string_decl, _) = string_from_to_string(&mut model, "s", cs);
        assert_eq!(check(&model, string_decl).len(), 1);

        let receiver = model.new_name_ref("cs", Some(cs));
        let call = model.new_method_call(Some(receiver), "toString", Vec::new());
        let cs_decl = model.new_local("t", cs_type(), Modifiers::FINAL, Some(call));
        let stmt = model.new_local_stmt(cs_decl);
        model.push_statement(stmt);
        assert_eq!(check(&model, cs_decl).len(), 1);
    }

    // ==================== Effectively final ====================

    #[test]
    fn test_reassigned_variable_is_ineligible() {
        let mut model = java_model();
        let cs = cs_local(&mut model, "cs");
        let receiver = model.new_name_ref("cs", Some(cs));
        let call = model.new_method_call(Some(receiver), "toString", Vec::new());
        let decl = model.new_local("s", string_type(), Modifiers::NONE, Some(call));
        let decl_stmt = model.new_local_stmt(decl);

        let target = model.new_name_ref("s", Some(decl));
        let value = model.new_string_literal("other");
        let assign = model.new_assignment(target, value);
        let assign_stmt = model.new_expr_stmt(assign);

        model.push_statement(decl_stmt);
        model.push_statement(assign_stmt);

        assert!(check(&model, decl).is_empty());
    }

    // ==================== Usage classification ====================

    #[test]
    fn test_no_usages_is_vacuously_compatible() {
        let mut model = java_model();
        let cs = cs_local(&mut model, "cs");
        let (decl, call) = string_from_to_string(&mut model, "s", cs);

        assert_eq!(check(&model, decl), vec![Finding { decl, call }]);
    }

    #[test]
    fn test_receiver_of_charsequence_method_is_compatible() {
        let mut model = java_model();
        let cs = cs_local(&mut model, "cs");
        let (decl, call) = string_from_to_string(&mut model, "s", cs);

        // s.length();
        let reference = model.new_name_ref("s", Some(decl));
        let length = model.new_method_call(Some(reference), "length", Vec::new());
        let stmt = model.new_expr_stmt(length);
        model.push_statement(stmt);

        assert_eq!(check(&model, decl), vec![Finding { decl, call }]);
    }

    #[test]
    fn test_receiver_of_override_with_charsequence_root_is_compatible() {
        let mut model = java_model();
        let cs = cs_local(&mut model, "cs");
        let (decl, call) = string_from_to_string(&mut model, "s", cs);

        // s.charAt(0) resolves on String; its override root lives on CharSequence
        let reference = model.new_name_ref("s", Some(decl));
        let zero = model.new_int_literal(0);
        let char_at = model.new_method_call(Some(reference), "charAt", vec![zero]);
        let stmt = model.new_expr_stmt(char_at);
        model.push_statement(stmt);

        assert_eq!(check(&model, decl), vec![Finding { decl, call }]);
    }

    #[test]
    fn test_receiver_of_string_only_method_is_incompatible() {
        let mut model = java_model();
        let cs = cs_local(&mut model, "cs");
        let (decl, _) = string_from_to_string(&mut model, "s", cs);

        // s.trim() has no CharSequence counterpart
        let reference = model.new_name_ref("s", Some(decl));
        let trim = model.new_method_call(Some(reference), "trim", Vec::new());
        let stmt = model.new_expr_stmt(trim);
        model.push_statement(stmt);

        assert!(check(&model, decl).is_empty());
    }

    #[test]
    fn test_unresolved_receiver_call_is_incompatible() {
        let mut model = java_model();
        let cs = cs_local(&mut model, "cs");
        let (decl, _) = string_from_to_string(&mut model, "s", cs);

        let reference = model.new_name_ref("s", Some(decl));
        let mystery = model.new_method_call(Some(reference), "mystery", Vec::new());
        let stmt = model.new_expr_stmt(mystery);
        model.push_statement(stmt);

        assert!(check(&model, decl).is_empty());
    }

    #[test]
    fn test_argument_of_charsequence_parameter_is_compatible() {
        let mut model = java_model();
        let cs = cs_local(&mut model, "cs");
        let (decl, call) = string_from_to_string(&mut model, "s", cs);

        // sb.append(s) takes a CharSequence parameter
        let sb = model.new_local(
            "sb",
            TypeElement::short(JavaType::class(JAVA_LANG_STRING_BUILDER)),
            Modifiers::FINAL,
            None,
        );
        let sb_stmt = model.new_local_stmt(sb);
        let sb_ref = model.new_name_ref("sb", Some(sb));
        let reference = model.new_name_ref("s", Some(decl));
        let append = model.new_method_call(Some(sb_ref), "append", vec![reference]);
        let stmt = model.new_expr_stmt(append);
        model.push_statement(sb_stmt);
        model.push_statement(stmt);

        assert_eq!(check(&model, decl), vec![Finding { decl, call }]);
    }

    #[test]
    fn test_argument_of_non_charsequence_parameter_is_incompatible() {
        let mut model = java_model();
        let cs = cs_local(&mut model, "cs");
        let (decl, _) = string_from_to_string(&mut model, "s", cs);

        // t.concat(s) takes a String parameter
        let t = model.new_local("t", string_type(), Modifiers::FINAL, None);
        let t_stmt = model.new_local_stmt(t);
        let t_ref = model.new_name_ref("t", Some(t));
        let reference = model.new_name_ref("s", Some(decl));
        let concat = model.new_method_call(Some(t_ref), "concat", vec![reference]);
        let stmt = model.new_expr_stmt(concat);
        model.push_statement(t_stmt);
        model.push_statement(stmt);

        assert!(check(&model, decl).is_empty());
    }

    #[test]
    fn test_argument_of_unresolved_call_is_compatible() {
        let mut model = java_model();
        let cs = cs_local(&mut model, "cs");
        let (decl, call) = string_from_to_string(&mut model, "s", cs);

        // use(s) does not resolve; nothing proves the usage incompatible
        let reference = model.new_name_ref("s", Some(decl));
        let use_call = model.new_method_call(None, "use", vec![reference]);
        let stmt = model.new_expr_stmt(use_call);
        model.push_statement(stmt);

        assert_eq!(check(&model, decl), vec![Finding { decl, call }]);
    }

    #[test]
    fn test_varargs_parameter_alignment() {
        let mut classes = ClassRegistry::with_java_lang();
        let cs_array = JavaType::array(JavaType::class(JAVA_LANG_CHAR_SEQUENCE));
        let string_ty = JavaType::class(JAVA_LANG_STRING);
        let joiner = classes.add_class("demo.Joiner", &[]);
        classes.add_varargs_method(joiner, "join", &[cs_array], string_ty.clone());
        let sink = classes.add_class("demo.Sink", &[]);
        classes.add_varargs_method(
            sink,
            "push",
            &[JavaType::array(string_ty)],
            JavaType::class("demo.Sink"),
        );
        let mut model = FileModel::new(classes);

        let cs = cs_local(&mut model, "cs");
        let (decl, call) = string_from_to_string(&mut model, "s", cs);

        // joiner.join(a, b, s): index 2 aligns with the CharSequence varargs
        let joiner_decl = model.new_local(
            "joiner",
            TypeElement::short(JavaType::class("demo.Joiner")),
            Modifiers::FINAL,
            None,
        );
        let joiner_stmt = model.new_local_stmt(joiner_decl);
        let joiner_ref = model.new_name_ref("joiner", Some(joiner_decl));
        let a = model.new_string_literal("a");
        let b = model.new_string_literal("b");
        let reference = model.new_name_ref("s", Some(decl));
        let join = model.new_method_call(Some(joiner_ref), "join", vec![a, b, reference]);
        let join_stmt = model.new_expr_stmt(join);
        model.push_statement(joiner_stmt);
        model.push_statement(join_stmt);

        assert_eq!(check(&model, decl), vec![Finding { decl, call }]);

        // sink.push(s): a String varargs parameter rejects
        let sink_decl = model.new_local(
            "sink",
            TypeElement::short(JavaType::class("demo.Sink")),
            Modifiers::FINAL,
            None,
        );
        let sink_stmt = model.new_local_stmt(sink_decl);
        let sink_ref = model.new_name_ref("sink", Some(sink_decl));
        let reference2 = model.new_name_ref("s", Some(decl));
        let push = model.new_method_call(Some(sink_ref), "push", vec![reference2]);
        let push_stmt = model.new_expr_stmt(push);
        model.push_statement(sink_stmt);
        model.push_statement(push_stmt);

        assert!(check(&model, decl).is_empty());
    }

    #[test]
    fn test_return_position_is_compatible() {
        let mut model = java_model();
        let cs = cs_local(&mut model, "cs");
        let (decl, call) = string_from_to_string(&mut model, "s", cs);

        let reference = model.new_name_ref("s", Some(decl));
        let ret = model.new_return(Some(reference));
        model.push_statement(ret);

        assert_eq!(check(&model, decl), vec![Finding { decl, call }]);
    }

    #[test]
    fn test_compatible_receiver_chain() {
        let mut model = java_model();
        let cs = cs_local(&mut model, "cs");
        let (decl, call) = string_from_to_string(&mut model, "s", cs);

        // s.subSequence(0, 1).charAt(0)
        let reference = model.new_name_ref("s", Some(decl));
        let zero = model.new_int_literal(0);
        let one = model.new_int_literal(1);
        let sub = model.new_method_call(Some(reference), "subSequence", vec![zero, one]);
        let zero2 = model.new_int_literal(0);
        let char_at = model.new_method_call(Some(sub), "charAt", vec![zero2]);
        let stmt = model.new_expr_stmt(char_at);
        model.push_statement(stmt);

        assert_eq!(check(&model, decl), vec![Finding { decl, call }]);
    }

    #[test]
    fn test_chain_reclassifies_the_enclosing_call() {
        let mut model = java_model();
        let cs = cs_local(&mut model, "cs");
        let (decl, _) = string_from_to_string(&mut model, "s", cs);

        // t.concat(s.toString()): the toString result feeds a String
        // parameter, so the reference is incompatible
        let t = model.new_local("t", string_type(), Modifiers::FINAL, None);
        let t_stmt = model.new_local_stmt(t);
        let t_ref = model.new_name_ref("t", Some(t));
        let reference = model.new_name_ref("s", Some(decl));
        let to_string = model.new_method_call(Some(reference), "toString", Vec::new());
        let concat = model.new_method_call(Some(t_ref), "concat", vec![to_string]);
        let stmt = model.new_expr_stmt(concat);
        model.push_statement(t_stmt);
        model.push_statement(stmt);

        assert!(check(&model, decl).is_empty());
    }

    // ==================== Initializer scan ====================

    #[test]
    fn test_initializer_without_calls_yields_nothing() {
        let mut model = java_model();
        let other = cs_local(&mut model, "other");
        let reference = model.new_name_ref("other", Some(other));
        let decl = model.new_local("s", cs_type(), Modifiers::FINAL, Some(reference));
        let stmt = model.new_local_stmt(decl);
        model.push_statement(stmt);

        assert!(check(&model, decl).is_empty());
    }

    #[test]
    fn test_parenthesized_initializer_is_flattened() {
        let mut model = java_model();
        let cs = cs_local(&mut model, "cs");
        let receiver = model.new_name_ref("cs", Some(cs));
        let call = model.new_method_call(Some(receiver), "toString", Vec::new());
        let inner_paren = model.new_paren(call);
        let outer_paren = model.new_paren(inner_paren);
        let decl = model.new_local("s", string_type(), Modifiers::FINAL, Some(outer_paren));
        let stmt = model.new_local_stmt(decl);
        model.push_statement(stmt);

        assert_eq!(check(&model, decl), vec![Finding { decl, call }]);
    }

    #[test]
    fn test_conditional_initializer_finds_both_branches() {
        let mut model = java_model();
        let a = cs_local(&mut model, "a");
        let b = cs_local(&mut model, "b");

        // flag ? a.toString() : (b.toString())
        let flag = model.new_name_ref("flag", None);
        let a_ref = model.new_name_ref("a", Some(a));
        let a_call = model.new_method_call(Some(a_ref), "toString", Vec::new());
        let b_ref = model.new_name_ref("b", Some(b));
        let b_call = model.new_method_call(Some(b_ref), "toString", Vec::new());
        let b_paren = model.new_paren(b_call);
        let conditional = model.new_conditional(flag, a_call, b_paren);
        let decl = model.new_local("s", string_type(), Modifiers::FINAL, Some(conditional));
        let stmt = model.new_local_stmt(decl);
        model.push_statement(stmt);

        assert_eq!(
            check(&model, decl),
            vec![
                Finding { decl, call: a_call },
                Finding { decl, call: b_call }
            ]
        );
    }

    #[test]
    fn test_receiver_findings_come_before_the_enclosing_call() {
        let mut model = java_model();
        let a = cs_local(&mut model, "a");

        // a.toString().subSequence(0, 1).toString()
        let a_ref = model.new_name_ref("a", Some(a));
        let inner = model.new_method_call(Some(a_ref), "toString", Vec::new());
        let zero = model.new_int_literal(0);
        let one = model.new_int_literal(1);
        let sub = model.new_method_call(Some(inner), "subSequence", vec![zero, one]);
        let outer = model.new_method_call(Some(sub), "toString", Vec::new());
        let decl = model.new_local("s", string_type(), Modifiers::FINAL, Some(outer));
        let stmt = model.new_local_stmt(decl);
        model.push_statement(stmt);

        assert_eq!(
            check(&model, decl),
            vec![Finding { decl, call: inner }, Finding { decl, call: outer }]
        );
    }

    #[test]
    fn test_scan_does_not_descend_into_arguments() {
        let mut model = java_model();
        let cs = cs_local(&mut model, "cs");
        let receiver = model.new_name_ref("cs", Some(cs));
        let call = model.new_method_call(Some(receiver), "toString", Vec::new());
        let wrap = model.new_method_call(None, "wrap", vec![call]);
        let decl = model.new_local("s", string_type(), Modifiers::FINAL, Some(wrap));
        let stmt = model.new_local_stmt(decl);
        model.push_statement(stmt);

        assert!(check(&model, decl).is_empty());
    }

    #[test]
    fn test_subclass_to_string_is_not_an_exact_match() {
        let mut model = java_model();
        // str.toString() resolves on String, not CharSequence itself
        let str_decl = model.new_local("str", string_type(), Modifiers::FINAL, None);
        let str_stmt = model.new_local_stmt(str_decl);
        model.push_statement(str_stmt);

        let receiver = model.new_name_ref("str", Some(str_decl));
        let call = model.new_method_call(Some(receiver), "toString", Vec::new());
        let decl = model.new_local("s", string_type(), Modifiers::FINAL, Some(call));
        let stmt = model.new_local_stmt(decl);
        model.push_statement(stmt);

        assert!(check(&model, decl).is_empty());
    }

    // ==================== Usage-site findings ====================

    #[test]
    fn test_redundant_to_string_at_a_usage_site() {
        let mut model = java_model();
        let decl = model.new_local("s", string_type(), Modifiers::FINAL, None);
        let decl_stmt = model.new_local_stmt(decl);

        // sb.append(s.toString())
        let sb = model.new_local(
            "sb",
            TypeElement::short(JavaType::class(JAVA_LANG_STRING_BUILDER)),
            Modifiers::FINAL,
            None,
        );
        let sb_stmt = model.new_local_stmt(sb);
        let sb_ref = model.new_name_ref("sb", Some(sb));
        let reference = model.new_name_ref("s", Some(decl));
        let to_string = model.new_method_call(Some(reference), "toString", Vec::new());
        let append = model.new_method_call(Some(sb_ref), "append", vec![to_string]);
        let stmt = model.new_expr_stmt(append);
        model.push_statement(decl_stmt);
        model.push_statement(sb_stmt);
        model.push_statement(stmt);

        assert_eq!(
            check(&model, decl),
            vec![Finding {
                decl,
                call: to_string
            }]
        );
    }

    #[test]
    fn test_usage_in_an_initializer_is_reported_once() {
        let mut model = java_model();
        let raw = cs_local(&mut model, "cs");
        let (decl, call) = string_from_to_string(&mut model, "s", raw);

        // the call belongs to s's initializer scan, not to cs's usage list
        assert!(check(&model, raw).is_empty());
        assert_eq!(check(&model, decl), vec![Finding { decl, call }]);
    }

    // ==================== Cancellation ====================

    #[test]
    fn test_cancelled_token_stops_the_check() {
        let mut model = java_model();
        let cs = cs_local(&mut model, "cs");
        let (decl, _) = string_from_to_string(&mut model, "s", cs);

        let token = CancelToken::new();
        token.cancel();
        assert_eq!(check_variable(&model, decl, &token), Err(Cancelled));
    }
}
