//! Builders for declaration trees used across the analysis tests.

use ctordoc_model::{
    Classlike, ClasslikeKind, Function, INVOKE_OPERATOR, Module, Nesting, Package, SymbolRef,
    TypeRef, VariantSet,
};

pub(crate) fn module(packages: Vec<Package>) -> Module {
    Module {
        name: "test".to_string(),
        packages,
    }
}

pub(crate) fn package(name: &str, classlikes: Vec<Classlike>, functions: Vec<Function>) -> Package {
    Package {
        reference: SymbolRef::package(name),
        name: name.to_string(),
        classlikes,
        functions,
    }
}

pub(crate) fn classlike(reference: &SymbolRef, kind: ClasslikeKind, nesting: Nesting) -> Classlike {
    Classlike {
        name: reference.simple_name().to_string(),
        reference: reference.clone(),
        kind,
        nesting,
        static_host: None,
        classlikes: Vec::new(),
        functions: Vec::new(),
        variants: VariantSet::new(),
    }
}

/// Designate `host` as the static host of `class` and attach it as a child.
pub(crate) fn with_host(mut class: Classlike, host: Classlike) -> Classlike {
    class.static_host = Some(host.reference.clone());
    class.classlikes.push(host);
    class
}

fn candidate(reference: SymbolRef, name: &str, target: &SymbolRef) -> Function {
    Function {
        reference,
        name: name.to_string(),
        receiver: None,
        return_type: TypeRef::Classlike(target.clone()),
        is_operator: false,
        constructor_like: true,
        is_constructor: false,
        generics: Vec::new(),
        variants: VariantSet::new(),
    }
}

/// Named-pattern candidate declared in `scope`: a function named after its
/// target.
pub(crate) fn named_factory(scope: &SymbolRef, target: &SymbolRef) -> Function {
    candidate(scope.member(target.simple_name()), target.simple_name(), target)
}

/// Invoke-pattern candidate declared as a member of `scope`.
pub(crate) fn invoke_member(scope: &SymbolRef, target: &SymbolRef) -> Function {
    let mut function = candidate(scope.member(INVOKE_OPERATOR), INVOKE_OPERATOR, target);
    function.is_operator = true;
    function
}

/// Invoke-pattern candidate declared at package level as an extension of
/// `receiver`.
pub(crate) fn invoke_extension(
    scope: &SymbolRef,
    receiver: &SymbolRef,
    target: &SymbolRef,
) -> Function {
    let mut function = invoke_member(scope, target);
    function.receiver = Some(TypeRef::Classlike(receiver.clone()));
    function
}
