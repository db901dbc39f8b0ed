use crate::{ClasslikeKind, Function, SymbolRef, TypeRef, VariantSet};

#[test]
fn symbol_ref_display() {
    let package = SymbolRef::package("com.example");
    let class = package.child("Foo");
    let nested = class.child("Companion");
    let function = nested.member("invoke");

    assert_eq!(package.to_string(), "com.example");
    assert_eq!(class.to_string(), "com.example.Foo");
    assert_eq!(nested.to_string(), "com.example.Foo.Companion");
    assert_eq!(function.to_string(), "com.example.Foo.Companion.invoke");
}

#[test]
fn symbol_ref_display_empty_package() {
    let class = SymbolRef::package("").child("Foo");
    assert_eq!(class.to_string(), "Foo");
    assert_eq!(class.member("bar").to_string(), "Foo.bar");
}

#[test]
fn parent_drops_member_then_class() {
    let package = SymbolRef::package("p");
    let class = package.child("Foo");
    let function = class.member("make");

    assert_eq!(function.parent(), Some(class.clone()));
    assert_eq!(class.parent(), Some(package.clone()));
    assert_eq!(package.parent(), None);
}

#[test]
fn enclosing_classlike_skips_packages() {
    let package = SymbolRef::package("p");
    let class = package.child("Foo");
    let nested = class.child("Bar");

    // A free function's enclosing scope is a package, not a class-like.
    assert_eq!(package.member("make").enclosing_classlike(), None);
    assert_eq!(class.member("make").enclosing_classlike(), Some(class.clone()));
    assert_eq!(class.enclosing_classlike(), None);
    assert_eq!(nested.enclosing_classlike(), Some(class.clone()));
}

#[test]
fn simple_name() {
    let package = SymbolRef::package("com.example");
    assert_eq!(package.simple_name(), "com.example");
    assert_eq!(package.child("Foo").simple_name(), "Foo");
    assert_eq!(package.child("Foo").member("make").simple_name(), "make");
}

#[test]
fn is_classlike() {
    let package = SymbolRef::package("p");
    assert!(!package.is_classlike());
    assert!(package.child("Foo").is_classlike());
    assert!(!package.child("Foo").member("make").is_classlike());
}

#[test]
fn variant_set_subset() {
    let empty = VariantSet::new();
    let jvm: VariantSet = ["jvm"].into_iter().collect();
    let all: VariantSet = ["js", "jvm"].into_iter().collect();

    assert!(empty.is_subset(&empty));
    assert!(empty.is_subset(&jvm));
    assert!(jvm.is_subset(&all));
    assert!(!all.is_subset(&jvm));
}

#[test]
fn variant_set_display_is_sorted() {
    let variants: VariantSet = ["jvm", "js", "native"].into_iter().collect();
    assert_eq!(variants.to_string(), "[js, jvm, native]");
    assert_eq!(VariantSet::new().to_string(), "[]");
}

#[test]
fn constructible_kinds() {
    assert!(ClasslikeKind::Class.constructible());
    assert!(ClasslikeKind::Interface.constructible());
    assert!(!ClasslikeKind::Object.constructible());
    assert!(!ClasslikeKind::Enum.constructible());
    assert!(!ClasslikeKind::Annotation.constructible());
}

#[test]
fn as_constructor_strips_receiver() {
    let class = SymbolRef::package("p").child("Foo");
    let function = Function {
        reference: SymbolRef::package("p").member("invoke"),
        name: "invoke".to_string(),
        receiver: Some(TypeRef::Classlike(class.clone())),
        return_type: TypeRef::Classlike(class),
        is_operator: true,
        constructor_like: true,
        is_constructor: false,
        generics: vec!["T".to_string()],
        variants: VariantSet::new(),
    };

    let rewritten = function.as_constructor();
    assert!(rewritten.is_constructor);
    assert_eq!(rewritten.receiver, None);
    // Identity is untouched: same reference, name, and generics.
    assert_eq!(rewritten.reference, function.reference);
    assert_eq!(rewritten.name, function.name);
    assert_eq!(rewritten.generics, function.generics);
}
