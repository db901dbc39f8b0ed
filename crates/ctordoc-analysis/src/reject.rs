//! Rejection reasons for pseudo-constructor candidates.
//!
//! A closed enumeration: every rule failure maps to exactly one variant and
//! the human-readable text lives here, not at the rule sites. Rejections are
//! expected outcomes of analysis, never errors.

use serde::Serialize;

/// Why a candidate function cannot be presented as a constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RejectReason {
    // Classification: signature shape alone rules the candidate out
    TargetNotClass,
    TargetIsUnit,
    TargetIsNever,
    ReceiverNotClasslike,
    NotOperator,
    InvokeNeitherExtensionNorMember,
    ExtensionInClasslike,
    NameNotTarget,
    TargetNotTopLevel,

    // Scope validation: the hosting scope disagrees with the candidate
    InvokeOnClasslike,
    TargetNotNested,
    TargetNotInner,
    TargetIsInner,
    TargetNotCompanionParent,

    // Attachment: the resolved target itself is unusable
    TargetInvalidKind,
    TargetNotFound,
}

impl RejectReason {
    /// Human-readable explanation, used by the advisory rejection log.
    pub fn message(self) -> &'static str {
        match self {
            Self::TargetNotClass => "the function does not return a class type",
            Self::TargetIsUnit => "the function returns the unit type",
            Self::TargetIsNever => "the function returns the bottom type",
            Self::ReceiverNotClasslike => "the receiver is not a class type",
            Self::NotOperator => "the function is not marked as an operator",
            Self::InvokeNeitherExtensionNorMember => {
                "the invoke function is neither an extension nor a member"
            }
            Self::ExtensionInClasslike => "the function is an extension declared in a class type",
            Self::NameNotTarget => "the name of the function does not match the return type",
            Self::TargetNotTopLevel => "the target type is not package-level",
            Self::InvokeOnClasslike => {
                "the invoke function is hosted by a class type instead of a static host"
            }
            Self::TargetNotNested => "the target type is not nested in the hosting scope",
            Self::TargetNotInner => "the target type is not an inner class",
            Self::TargetIsInner => "the target type is an inner class",
            Self::TargetNotCompanionParent => {
                "the target type is not the parent of the static host"
            }
            Self::TargetInvalidKind => {
                "the target type is an annotation class, enum class, or object"
            }
            Self::TargetNotFound => "the target type cannot be found or is in a different module",
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
