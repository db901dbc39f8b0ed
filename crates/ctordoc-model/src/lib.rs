#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Declaration-tree model for pseudo-constructor analysis.
//!
//! Two layers:
//! - **Model layer**: the immutable declaration tree handed over by the
//!   documentation front end (`Module` → `Package` → `Classlike`/`Function`)
//! - **Wire layer** (`json`): 1:1 mapping to the front end's JSON hand-off,
//!   converted into the validated model
//!
//! The tree is read-only input: analysis never mutates it, only derives
//! classifications from it.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

pub mod json;

#[cfg(test)]
mod json_tests;
#[cfg(test)]
mod lib_tests;

/// Reserved call-operator name. A candidate function with this name and the
/// operator flag set follows the invoke pattern instead of the named pattern.
pub const INVOKE_OPERATOR: &str = "invoke";

// ============================================================================
// Symbol References
// ============================================================================

/// Qualified reference to a declaration.
///
/// Two declarations are the same entity iff their references are equal.
/// A reference encodes its own position: the package, the chain of enclosing
/// class-likes (outermost first), and, for functions, the member name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SymbolRef {
    package: String,
    classes: Vec<String>,
    member: Option<String>,
}

impl SymbolRef {
    /// Reference to a package scope.
    pub fn package(name: impl Into<String>) -> Self {
        Self {
            package: name.into(),
            classes: Vec::new(),
            member: None,
        }
    }

    /// Reference to a class-like declared directly inside this scope.
    pub fn child(&self, name: impl Into<String>) -> Self {
        debug_assert!(self.member.is_none(), "cannot nest a class-like in a function");
        let mut classes = self.classes.clone();
        classes.push(name.into());
        Self {
            package: self.package.clone(),
            classes,
            member: None,
        }
    }

    /// Reference to a function declared directly inside this scope.
    pub fn member(&self, name: impl Into<String>) -> Self {
        debug_assert!(self.member.is_none(), "cannot nest a function in a function");
        Self {
            package: self.package.clone(),
            classes: self.classes.clone(),
            member: Some(name.into()),
        }
    }

    /// Reference of the immediately enclosing scope.
    ///
    /// Drops the member name first, then the innermost class segment.
    /// Returns `None` for package references.
    pub fn parent(&self) -> Option<SymbolRef> {
        if self.member.is_some() {
            return Some(Self {
                package: self.package.clone(),
                classes: self.classes.clone(),
                member: None,
            });
        }
        if self.classes.is_empty() {
            return None;
        }
        Some(Self {
            package: self.package.clone(),
            classes: self.classes[..self.classes.len() - 1].to_vec(),
            member: None,
        })
    }

    /// The enclosing scope, if that scope is a class-like (not a package).
    pub fn enclosing_classlike(&self) -> Option<SymbolRef> {
        self.parent().filter(|p| !p.classes.is_empty())
    }

    /// Last path element: the member name, else the innermost class name,
    /// else the package name.
    pub fn simple_name(&self) -> &str {
        if let Some(member) = &self.member {
            return member;
        }
        self.classes.last().map_or(self.package.as_str(), String::as_str)
    }

    pub fn package_name(&self) -> &str {
        &self.package
    }

    /// Whether this reference names a class-like declaration.
    pub fn is_classlike(&self) -> bool {
        self.member.is_none() && !self.classes.is_empty()
    }
}

impl fmt::Display for SymbolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        if !self.package.is_empty() {
            write!(f, "{}", self.package)?;
            first = false;
        }
        for class in &self.classes {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{class}")?;
            first = false;
        }
        if let Some(member) = &self.member {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{member}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Type References
// ============================================================================

/// Reference to a type as it appears in a function signature.
///
/// Only `Classlike` references can ever be constructor targets. `Unit` and
/// `Never` are the built-in void-like/bottom sentinels; `Other` covers
/// functional, primitive, and type-parameter references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypeRef {
    Classlike(SymbolRef),
    Unit,
    Never,
    Other,
}

impl TypeRef {
    /// The referenced class-like, if this is a resolved class reference.
    pub fn classlike(&self) -> Option<&SymbolRef> {
        match self {
            TypeRef::Classlike(reference) => Some(reference),
            TypeRef::Unit | TypeRef::Never | TypeRef::Other => None,
        }
    }
}

// ============================================================================
// Build Variants
// ============================================================================

/// Set of build/target variant names a declaration is compiled under.
///
/// Attachment requires the candidate's variant set to be contained in the
/// target's. Empty sets (single-variant projects) are contained in every set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariantSet(BTreeSet<String>);

impl VariantSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, variant: &str) -> bool {
        self.0.contains(variant)
    }

    pub fn is_subset(&self, other: &VariantSet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for VariantSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for VariantSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, variant) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{variant}")?;
        }
        write!(f, "]")
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// Kind of a class-like declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClasslikeKind {
    Class,
    Interface,
    Object,
    Enum,
    Annotation,
}

impl ClasslikeKind {
    /// Whether instances of this kind can be produced by a constructor.
    /// Objects, enums, and annotations cannot.
    pub fn constructible(self) -> bool {
        match self {
            ClasslikeKind::Class | ClasslikeKind::Interface => true,
            ClasslikeKind::Object | ClasslikeKind::Enum | ClasslikeKind::Annotation => false,
        }
    }
}

/// How a class-like relates to its enclosing declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Nesting {
    TopLevel,
    Nested,
    /// Nested, and instances hold an implicit reference to an enclosing
    /// instance.
    Inner,
}

/// A function declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    pub reference: SymbolRef,
    pub name: String,
    /// Receiver type for extensions; `None` for members and free functions.
    pub receiver: Option<TypeRef>,
    pub return_type: TypeRef,
    pub is_operator: bool,
    /// Annotation flag sourced from the front end's annotation resolution.
    pub constructor_like: bool,
    /// Output-side marker; always `false` on input, set when the function is
    /// rewritten for presentation as a constructor.
    pub is_constructor: bool,
    /// Generic parameter names, in declaration order.
    pub generics: Vec<String>,
    pub variants: VariantSet,
}

impl Function {
    pub fn is_extension(&self) -> bool {
        self.receiver.is_some()
    }

    /// Rewrite for presentation as a constructor of its target type: the
    /// constructor marker is set and the receiver is stripped.
    pub fn as_constructor(&self) -> Function {
        Function {
            receiver: None,
            is_constructor: true,
            ..self.clone()
        }
    }
}

/// A class-like declaration: class, interface, object, enum, or annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classlike {
    pub reference: SymbolRef,
    pub name: String,
    pub kind: ClasslikeKind,
    pub nesting: Nesting,
    /// The distinguished singleton child hosting factory functions on behalf
    /// of this declaration. Always a direct child of kind `Object`.
    pub static_host: Option<SymbolRef>,
    pub classlikes: Vec<Classlike>,
    pub functions: Vec<Function>,
    pub variants: VariantSet,
}

impl Classlike {
    /// Direct child class-like with the given reference.
    pub fn child(&self, reference: &SymbolRef) -> Option<&Classlike> {
        self.classlikes.iter().find(|c| c.reference == *reference)
    }

    /// The static-host child node, if one is designated.
    pub fn static_host_node(&self) -> Option<&Classlike> {
        self.static_host.as_ref().and_then(|host| self.child(host))
    }
}

/// A package: top-level class-likes and free functions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Package {
    pub reference: SymbolRef,
    pub name: String,
    pub classlikes: Vec<Classlike>,
    pub functions: Vec<Function>,
}

/// Root of the declaration tree for one analysis unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Module {
    pub name: String,
    pub packages: Vec<Package>,
}
