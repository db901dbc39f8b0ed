//! Context-free classification of candidate functions.
//!
//! `resolve` looks at one function in isolation and either pins down a
//! provisional (helper, target) pair or rejects outright. Rules that need
//! sibling or parent context (nesting, static hosts) run later in the
//! scope validation pass.

use ctordoc_model::{Function, INVOKE_OPERATOR, SymbolRef, TypeRef};

use crate::reject::RejectReason;

/// Outcome of classifying a single candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Provisionally resolved: `helper` is the scope that hosts the factory
    /// (`None` for package-level functions with package-level targets),
    /// `target` is the type being constructed.
    Found {
        helper: Option<SymbolRef>,
        target: SymbolRef,
    },
    Invalid(RejectReason),
}

/// Whether a function follows the invoke pattern (reserved call-operator
/// name). The named pattern covers everything else.
pub(crate) fn is_invoke_pattern(function: &Function) -> bool {
    function.name == INVOKE_OPERATOR
}

/// Classify one constructor-candidate function.
///
/// Pure function of the declaration alone; first matching rule wins.
pub fn resolve(function: &Function) -> Resolution {
    let target = match &function.return_type {
        TypeRef::Classlike(reference) => reference.clone(),
        TypeRef::Unit => return Resolution::Invalid(RejectReason::TargetIsUnit),
        TypeRef::Never => return Resolution::Invalid(RejectReason::TargetIsNever),
        TypeRef::Other => return Resolution::Invalid(RejectReason::TargetNotClass),
    };

    let receiver = match &function.receiver {
        None => None,
        Some(TypeRef::Classlike(reference)) => Some(reference.clone()),
        Some(_) => return Resolution::Invalid(RejectReason::ReceiverNotClasslike),
    };

    let enclosing = function.reference.enclosing_classlike();

    if is_invoke_pattern(function) {
        if !function.is_operator {
            return Resolution::Invalid(RejectReason::NotOperator);
        }
        // Exactly one of extension/member may hold.
        return match (receiver, enclosing) {
            (None, None) => Resolution::Invalid(RejectReason::InvokeNeitherExtensionNorMember),
            (Some(_), Some(_)) => Resolution::Invalid(RejectReason::ExtensionInClasslike),
            (receiver, enclosing) => Resolution::Found {
                helper: receiver.or(enclosing),
                target,
            },
        };
    }

    // Named pattern: the function stands in for the target's constructor,
    // so their simple names must agree.
    if function.name != target.simple_name() {
        return Resolution::Invalid(RejectReason::NameNotTarget);
    }
    if receiver.is_none() && enclosing.is_none() && target.enclosing_classlike().is_some() {
        return Resolution::Invalid(RejectReason::TargetNotTopLevel);
    }
    if receiver.is_some() && enclosing.is_some() {
        return Resolution::Invalid(RejectReason::ExtensionInClasslike);
    }
    Resolution::Found {
        helper: receiver.or(enclosing),
        target,
    }
}
