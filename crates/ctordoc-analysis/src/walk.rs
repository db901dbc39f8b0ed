//! Tree walker: drives classification and validation over one module.
//!
//! Two deterministic phases over an index, instead of a single descent that
//! mutates candidates in place:
//! 1. Classify every annotated function and record scope structure
//! 2. Validate each scope's candidates against the completed index
//!
//! A target's acceptance depends on context discovered only at its hosting
//! scope; finishing phase 1 before any validation removes the
//! forward-reference hazard, so traversal order can follow declaration
//! order throughout.

use indexmap::IndexMap;

use ctordoc_model::{
    Classlike, ClasslikeKind, Function, Module, Nesting, Package, SymbolRef, VariantSet,
};

use crate::outcome::Attachments;
use crate::reject::RejectReason;
use crate::resolve::{Resolution, resolve};
use crate::validate::validate_scope;
use crate::{Error, Result};

/// Index entry for one class-like scope.
#[derive(Debug, Clone)]
pub(crate) struct ScopeInfo {
    pub(crate) kind: ClasslikeKind,
    pub(crate) variants: VariantSet,
    /// Direct child class-likes with their nesting flags, in declaration order.
    pub(crate) children: IndexMap<SymbolRef, Nesting>,
    pub(crate) static_host: Option<SymbolRef>,
    /// Static hosts are validated by their parent, never by their own pass.
    pub(crate) is_static_host: bool,
}

#[derive(Debug, Clone)]
pub(crate) enum CandidateState {
    /// Classified, awaiting its helper scope's validation pass.
    Pending { target: SymbolRef },
    Valid { target: SymbolRef },
    Rejected(RejectReason),
}

#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub(crate) function: Function,
    pub(crate) state: CandidateState,
}

/// Candidates in discovery order, plus the helper-scope lookup consumed by
/// the validation phase.
#[derive(Debug, Default)]
pub(crate) struct CandidateIndex {
    pub(crate) candidates: Vec<Candidate>,
    by_helper: IndexMap<SymbolRef, Vec<usize>>,
}

impl CandidateIndex {
    fn classify(&mut self, function: &Function) {
        if !function.constructor_like {
            return;
        }
        let state = match resolve(function) {
            Resolution::Invalid(reason) => CandidateState::Rejected(reason),
            // No helper scope: fully determined by classification.
            Resolution::Found {
                helper: None,
                target,
            } => CandidateState::Valid { target },
            Resolution::Found {
                helper: Some(helper),
                target,
            } => {
                self.by_helper
                    .entry(helper)
                    .or_default()
                    .push(self.candidates.len());
                CandidateState::Pending { target }
            }
        };
        self.candidates.push(Candidate {
            function: function.clone(),
            state,
        });
    }

    /// Ids of candidates whose provisional helper is the given scope.
    pub(crate) fn hosted_by(&self, helper: &SymbolRef) -> Vec<usize> {
        self.by_helper.get(helper).cloned().unwrap_or_default()
    }

    /// Target of a still-pending candidate.
    pub(crate) fn pending_target(&self, id: usize) -> Option<SymbolRef> {
        match &self.candidates[id].state {
            CandidateState::Pending { target } => Some(target.clone()),
            CandidateState::Valid { .. } | CandidateState::Rejected(_) => None,
        }
    }

    /// Finalize a pending candidate's verdict. Settled states never change
    /// again.
    pub(crate) fn settle(&mut self, id: usize, verdict: std::result::Result<(), RejectReason>) {
        let candidate = &mut self.candidates[id];
        let CandidateState::Pending { target } = &candidate.state else {
            return;
        };
        candidate.state = match verdict {
            Ok(()) => CandidateState::Valid {
                target: target.clone(),
            },
            Err(reason) => CandidateState::Rejected(reason),
        };
    }
}

/// All class-like scopes of the module, in discovery (declaration) order.
#[derive(Debug, Default)]
pub(crate) struct ScopeIndex {
    scopes: IndexMap<SymbolRef, ScopeInfo>,
}

impl ScopeIndex {
    pub(crate) fn get(&self, reference: &SymbolRef) -> Option<&ScopeInfo> {
        self.scopes.get(reference)
    }

    fn iter(&self) -> impl Iterator<Item = (&SymbolRef, &ScopeInfo)> {
        self.scopes.iter()
    }
}

/// Run the full pass over one module.
///
/// Returns the per-target accepted lists and the whole-tree rejection list.
/// The only error conditions are contract violations of the input tree;
/// every rule failure is a normal `Rejected` outcome inside the result.
pub fn analyze(module: &Module) -> Result<Attachments> {
    let mut index = CandidateIndex::default();
    let mut scopes = ScopeIndex::default();

    for package in &module.packages {
        collect_package(package, &mut index, &mut scopes)?;
    }

    for (reference, info) in scopes.iter() {
        if info.is_static_host {
            continue;
        }
        validate_scope(reference, info, &mut index);
    }

    Ok(finalize(index, &scopes))
}

fn collect_package(
    package: &Package,
    index: &mut CandidateIndex,
    scopes: &mut ScopeIndex,
) -> Result<()> {
    for function in &package.functions {
        index.classify(function);
    }
    for classlike in &package.classlikes {
        collect_classlike(classlike, false, index, scopes)?;
    }
    Ok(())
}

fn collect_classlike(
    classlike: &Classlike,
    is_static_host: bool,
    index: &mut CandidateIndex,
    scopes: &mut ScopeIndex,
) -> Result<()> {
    // The front end validates this at load time; re-check here so trees
    // built programmatically fail the same way.
    if let Some(host) = &classlike.static_host {
        let host_node = classlike.child(host).ok_or_else(|| Error::StaticHostMissing {
            scope: classlike.reference.clone(),
            host: host.clone(),
        })?;
        if host_node.kind != ClasslikeKind::Object {
            return Err(Error::StaticHostNotObject {
                scope: classlike.reference.clone(),
                host: host_node.reference.clone(),
            });
        }
    }

    let children = classlike
        .classlikes
        .iter()
        .map(|child| (child.reference.clone(), child.nesting))
        .collect();
    scopes.scopes.insert(
        classlike.reference.clone(),
        ScopeInfo {
            kind: classlike.kind,
            variants: classlike.variants.clone(),
            children,
            static_host: classlike.static_host.clone(),
            is_static_host,
        },
    );

    for function in &classlike.functions {
        index.classify(function);
    }
    for child in &classlike.classlikes {
        let child_is_host = classlike.static_host.as_ref() == Some(&child.reference);
        collect_classlike(child, child_is_host, index, scopes)?;
    }
    Ok(())
}

/// Assemble the final partition. Applied per candidate in discovery order,
/// which keeps accepted lists in declaration order of the original
/// candidates.
fn finalize(index: CandidateIndex, scopes: &ScopeIndex) -> Attachments {
    let mut accepted: IndexMap<SymbolRef, Vec<Function>> = IndexMap::new();
    let mut rejected: Vec<(Function, RejectReason)> = Vec::new();

    for candidate in index.candidates {
        let target = match candidate.state {
            CandidateState::Rejected(reason) => {
                rejected.push((candidate.function, reason));
                continue;
            }
            // Helper scope never visited: the reference points outside this
            // analysis unit.
            CandidateState::Pending { .. } => {
                rejected.push((candidate.function, RejectReason::TargetNotFound));
                continue;
            }
            CandidateState::Valid { target } => target,
        };

        match scopes.get(&target) {
            None => rejected.push((candidate.function, RejectReason::TargetNotFound)),
            Some(info) if !info.kind.constructible() => {
                rejected.push((candidate.function, RejectReason::TargetInvalidKind));
            }
            // A target that is not compiled under all of the candidate's
            // variants belongs to a different build of the tree.
            Some(info) if !candidate.function.variants.is_subset(&info.variants) => {
                rejected.push((candidate.function, RejectReason::TargetNotFound));
            }
            Some(_) => accepted
                .entry(target)
                .or_default()
                .push(candidate.function.as_constructor()),
        }
    }

    Attachments::new(accepted, rejected)
}
