//! Context-aware validation of provisional candidates, one scope at a time.
//!
//! Classification decides who the helper scope is; this pass decides whether
//! that scope actually agrees to host the candidate. Two rule sets apply:
//! one for candidates hosted directly by the scope, one for candidates
//! hosted by the scope's static host on its behalf.

use ctordoc_model::{ClasslikeKind, Nesting, SymbolRef};

use crate::reject::RejectReason;
use crate::resolve::is_invoke_pattern;
use crate::walk::{CandidateIndex, ScopeInfo};

type Verdict = Result<(), RejectReason>;

/// Validate every candidate whose helper is `scope` or `scope`'s static host.
///
/// Never called for scopes that are themselves static hosts; their
/// candidates are judged here, through the parent.
pub(crate) fn validate_scope(scope: &SymbolRef, info: &ScopeInfo, index: &mut CandidateIndex) {
    for id in index.hosted_by(scope) {
        let Some(target) = index.pending_target(id) else {
            continue;
        };
        let invoke = is_invoke_pattern(&index.candidates[id].function);
        index.settle(id, direct_verdict(info, invoke, &target));
    }

    if let Some(host) = info.static_host.clone() {
        for id in index.hosted_by(&host) {
            let Some(target) = index.pending_target(id) else {
                continue;
            };
            let invoke = is_invoke_pattern(&index.candidates[id].function);
            index.settle(id, companion_verdict(scope, info, invoke, &target));
        }
    }
}

/// Rules for candidates hosted directly by the scope.
pub(crate) fn direct_verdict(info: &ScopeInfo, invoke: bool, target: &SymbolRef) -> Verdict {
    // The invoke pattern is only legitimate on a static host; an arbitrary
    // instance scope would shadow the instance's own call operator.
    if invoke {
        return Err(RejectReason::InvokeOnClasslike);
    }
    match info.children.get(target) {
        None => Err(RejectReason::TargetNotNested),
        Some(Nesting::Inner) => Ok(()),
        // Singleton scopes have no instance-receiver ambiguity, so the
        // inner requirement is waived.
        Some(_) if info.kind == ClasslikeKind::Object => Ok(()),
        Some(_) => Err(RejectReason::TargetNotInner),
    }
}

/// Rules for candidates hosted by the scope's static host.
pub(crate) fn companion_verdict(
    scope: &SymbolRef,
    info: &ScopeInfo,
    invoke: bool,
    target: &SymbolRef,
) -> Verdict {
    if invoke {
        // A static host's only legitimate invoke target is its parent.
        return if target == scope {
            Ok(())
        } else {
            Err(RejectReason::TargetNotCompanionParent)
        };
    }
    match info.children.get(target) {
        None => Err(RejectReason::TargetNotNested),
        Some(Nesting::Inner) => Err(RejectReason::TargetIsInner),
        Some(_) => Ok(()),
    }
}
