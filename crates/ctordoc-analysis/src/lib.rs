//! Pseudo-constructor analysis over a declaration tree.
//!
//! Finds annotated factory functions and decides, per candidate, which type
//! it constructs and whether its hosting scope legitimately presents it as
//! a constructor. The pass partitions every candidate into exactly one of
//! a per-target accepted list or the whole-tree rejection list:
//! - `resolve` - context-free classification of one candidate
//! - `validate` - per-scope rules over sibling/child nesting
//! - `walk` - the two-phase traversal driving both
//! - `outcome` - the aggregated, rendering-facing result
//!
//! # Example
//!
//! ```
//! use ctordoc_analysis::analyze;
//! use ctordoc_model::Module;
//!
//! let tree = r#"{
//!     "name": "docs",
//!     "packages": [{
//!         "name": "example",
//!         "classlikes": [{"name": "Counter", "kind": "class"}],
//!         "functions": [{
//!             "name": "Counter",
//!             "return_type": {"classlike": {"package": "example", "classes": ["Counter"]}},
//!             "constructor_like": true
//!         }]
//!     }]
//! }"#;
//!
//! let module = Module::from_json(tree).unwrap();
//! let attachments = analyze(&module).unwrap();
//! let target = module.packages[0].classlikes[0].reference.clone();
//! assert_eq!(attachments.accepted_for(&target).len(), 1);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod outcome;
pub mod reject;
pub mod resolve;
mod validate;
mod walk;

#[cfg(test)]
mod test_utils;


use ctordoc_model::SymbolRef;

pub use outcome::Attachments;
pub use reject::RejectReason;
pub use resolve::{Resolution, resolve};
pub use walk::analyze;

/// Errors that can occur during analysis.
///
/// These are contract violations of the input tree — an inconsistent front
/// end, not a legitimate user mistake — and fail the entire run. Rule
/// failures are never errors; they are `Rejected` outcomes in the result.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("static host `{host}` of `{scope}` is not declared in that scope")]
    StaticHostMissing { scope: SymbolRef, host: SymbolRef },

    #[error("static host `{host}` of `{scope}` is not an object declaration")]
    StaticHostNotObject { scope: SymbolRef, host: SymbolRef },
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;
