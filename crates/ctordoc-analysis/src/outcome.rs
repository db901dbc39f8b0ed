//! Aggregated results of the analysis pass.
//!
//! Two read-only collections: per-target accepted lists (declaration order)
//! and the whole-tree rejection list. Consumed by the documentation
//! rendering layer; the advisory log lines are a side channel, not part of
//! the data contract.

use indexmap::IndexMap;

use ctordoc_model::{Function, SymbolRef};

use crate::reject::RejectReason;

/// Simple name of the marker annotation, quoted in advisory log lines.
const CANDIDATE_ANNOTATION: &str = "ConstructorLike";

/// Final partition of all constructor candidates.
///
/// Every annotated function in the analyzed module appears in exactly one
/// of the two collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attachments {
    accepted: IndexMap<SymbolRef, Vec<Function>>,
    rejected: Vec<(Function, RejectReason)>,
}

impl Attachments {
    pub(crate) fn new(
        accepted: IndexMap<SymbolRef, Vec<Function>>,
        rejected: Vec<(Function, RejectReason)>,
    ) -> Self {
        Self { accepted, rejected }
    }

    /// Accepted pseudo-constructors for one target, in declaration order.
    /// Each is rewritten with the constructor marker set and the receiver
    /// stripped. Empty for targets with no attachments.
    pub fn accepted_for(&self, target: &SymbolRef) -> &[Function] {
        self.accepted.get(target).map_or(&[], Vec::as_slice)
    }

    /// Targets that received at least one attachment, in discovery order.
    pub fn targets(&self) -> impl Iterator<Item = &SymbolRef> {
        self.accepted.keys()
    }

    /// All rejected candidates with their reasons, in discovery order.
    /// Functions here are the originals, not rewritten.
    pub fn rejected(&self) -> &[(Function, RejectReason)] {
        &self.rejected
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted.values().map(Vec::len).sum()
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty() && self.rejected.is_empty()
    }

    /// Human-readable line per rejection, for the caller's logger.
    pub fn log_messages(&self) -> Vec<String> {
        self.rejected
            .iter()
            .map(|(function, reason)| {
                format!(
                    "annotation @{CANDIDATE_ANNOTATION} cannot be applied to function {}{} because {}",
                    function.reference, function.variants, reason
                )
            })
            .collect()
    }
}
