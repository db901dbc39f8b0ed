//! JSON deserialization for the front end's symbol-tree hand-off.
//!
//! The wire format does not repeat qualified references; they are computed
//! from tree position during conversion. Static-host designations and
//! nesting flags are validated here — a malformed tree is a front-end
//! contract violation and fails the whole load.

use serde::Deserialize;

use crate::{Classlike, ClasslikeKind, Function, Module, Nesting, Package, SymbolRef, TypeRef};

/// Error during symbol-tree loading.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("malformed symbol tree: {0}")]
    Json(#[from] serde_json::Error),

    /// A scope designates a static host that is not among its children.
    #[error("static host `{host}` of `{scope}` is not declared in that scope")]
    StaticHostMissing { scope: SymbolRef, host: String },

    /// A scope designates a static host that is not an object declaration.
    #[error("static host `{host}` of `{scope}` is not an object declaration")]
    StaticHostNotObject { scope: SymbolRef, host: SymbolRef },

    /// Only nested declarations can capture an enclosing instance.
    #[error("top-level declaration `{reference}` cannot be marked inner")]
    InnerAtTopLevel { reference: SymbolRef },
}

impl Module {
    /// Parse a declaration tree from the front end's JSON hand-off.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let raw: RawModule = serde_json::from_str(json)?;
        raw.try_into()
    }
}

/// Raw module structure matching the front end's JSON format.
#[derive(Debug, Deserialize)]
struct RawModule {
    name: String,
    #[serde(default)]
    packages: Vec<RawPackage>,
}

#[derive(Debug, Deserialize)]
struct RawPackage {
    name: String,
    #[serde(default)]
    classlikes: Vec<RawClasslike>,
    #[serde(default)]
    functions: Vec<RawFunction>,
}

#[derive(Debug, Deserialize)]
struct RawClasslike {
    name: String,
    kind: RawKind,
    #[serde(default)]
    inner: bool,
    /// Simple name of the child designated as static host.
    #[serde(default)]
    static_host: Option<String>,
    #[serde(default)]
    classlikes: Vec<RawClasslike>,
    #[serde(default)]
    functions: Vec<RawFunction>,
    #[serde(default)]
    variants: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawFunction {
    name: String,
    #[serde(default)]
    receiver: Option<RawTypeRef>,
    return_type: RawTypeRef,
    #[serde(default)]
    operator: bool,
    #[serde(default)]
    constructor_like: bool,
    #[serde(default)]
    generics: Vec<String>,
    #[serde(default)]
    variants: Vec<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawKind {
    Class,
    Interface,
    Object,
    Enum,
    Annotation,
}

impl From<RawKind> for ClasslikeKind {
    fn from(raw: RawKind) -> Self {
        match raw {
            RawKind::Class => ClasslikeKind::Class,
            RawKind::Interface => ClasslikeKind::Interface,
            RawKind::Object => ClasslikeKind::Object,
            RawKind::Enum => ClasslikeKind::Enum,
            RawKind::Annotation => ClasslikeKind::Annotation,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawTypeRef {
    Classlike(RawClassRef),
    Unit,
    Never,
    Other,
}

/// Explicit package/classes split; a dotted string cannot distinguish
/// package segments from class segments.
#[derive(Debug, Deserialize)]
struct RawClassRef {
    #[serde(default)]
    package: String,
    classes: Vec<String>,
}

impl From<RawTypeRef> for TypeRef {
    fn from(raw: RawTypeRef) -> Self {
        match raw {
            RawTypeRef::Classlike(class_ref) => {
                let mut reference = SymbolRef::package(class_ref.package);
                for class in class_ref.classes {
                    reference = reference.child(class);
                }
                TypeRef::Classlike(reference)
            }
            RawTypeRef::Unit => TypeRef::Unit,
            RawTypeRef::Never => TypeRef::Never,
            RawTypeRef::Other => TypeRef::Other,
        }
    }
}

impl TryFrom<RawModule> for Module {
    type Error = ModelError;

    fn try_from(raw: RawModule) -> Result<Self, ModelError> {
        let packages = raw
            .packages
            .into_iter()
            .map(convert_package)
            .collect::<Result<_, _>>()?;
        Ok(Module {
            name: raw.name,
            packages,
        })
    }
}

fn convert_package(raw: RawPackage) -> Result<Package, ModelError> {
    let reference = SymbolRef::package(&raw.name);
    let classlikes = raw
        .classlikes
        .into_iter()
        .map(|c| convert_classlike(c, &reference, true))
        .collect::<Result<_, _>>()?;
    let functions = raw
        .functions
        .into_iter()
        .map(|f| convert_function(f, &reference))
        .collect();
    Ok(Package {
        reference,
        name: raw.name,
        classlikes,
        functions,
    })
}

fn convert_classlike(
    raw: RawClasslike,
    parent: &SymbolRef,
    top_level: bool,
) -> Result<Classlike, ModelError> {
    let reference = parent.child(&raw.name);

    let nesting = match (top_level, raw.inner) {
        (true, true) => return Err(ModelError::InnerAtTopLevel { reference }),
        (true, false) => Nesting::TopLevel,
        (false, true) => Nesting::Inner,
        (false, false) => Nesting::Nested,
    };

    let classlikes: Vec<Classlike> = raw
        .classlikes
        .into_iter()
        .map(|c| convert_classlike(c, &reference, false))
        .collect::<Result<_, _>>()?;
    let functions = raw
        .functions
        .into_iter()
        .map(|f| convert_function(f, &reference))
        .collect();

    let static_host = match raw.static_host {
        None => None,
        Some(host_name) => {
            let host = classlikes
                .iter()
                .find(|c| c.name == host_name)
                .ok_or_else(|| ModelError::StaticHostMissing {
                    scope: reference.clone(),
                    host: host_name.clone(),
                })?;
            if host.kind != ClasslikeKind::Object {
                return Err(ModelError::StaticHostNotObject {
                    scope: reference.clone(),
                    host: host.reference.clone(),
                });
            }
            Some(host.reference.clone())
        }
    };

    Ok(Classlike {
        reference,
        name: raw.name,
        kind: raw.kind.into(),
        nesting,
        static_host,
        classlikes,
        functions,
        variants: raw.variants.into_iter().collect(),
    })
}

fn convert_function(raw: RawFunction, scope: &SymbolRef) -> Function {
    Function {
        reference: scope.member(&raw.name),
        name: raw.name,
        receiver: raw.receiver.map(Into::into),
        return_type: raw.return_type.into(),
        is_operator: raw.operator,
        constructor_like: raw.constructor_like,
        is_constructor: false,
        generics: raw.generics,
        variants: raw.variants.into_iter().collect(),
    }
}
