use indoc::indoc;

use crate::json::ModelError;
use crate::{ClasslikeKind, Module, Nesting, SymbolRef, TypeRef};

#[test]
fn full_tree_round() {
    let input = indoc! {r#"
        {
          "name": "docs",
          "packages": [
            {
              "name": "com.example",
              "classlikes": [
                {
                  "name": "Foo",
                  "kind": "class",
                  "static_host": "Companion",
                  "variants": ["jvm", "js"],
                  "classlikes": [
                    {
                      "name": "Companion",
                      "kind": "object",
                      "functions": [
                        {
                          "name": "invoke",
                          "return_type": {"classlike": {"package": "com.example", "classes": ["Foo"]}},
                          "operator": true,
                          "constructor_like": true
                        }
                      ]
                    },
                    {"name": "Inner", "kind": "class", "inner": true}
                  ]
                }
              ],
              "functions": [
                {
                  "name": "helper",
                  "return_type": "unit"
                }
              ]
            }
          ]
        }
    "#};

    let module = Module::from_json(input).unwrap();
    assert_eq!(module.name, "docs");
    assert_eq!(module.packages.len(), 1);

    let package = &module.packages[0];
    assert_eq!(package.reference, SymbolRef::package("com.example"));

    let foo = &package.classlikes[0];
    assert_eq!(foo.reference, package.reference.child("Foo"));
    assert_eq!(foo.kind, ClasslikeKind::Class);
    assert_eq!(foo.nesting, Nesting::TopLevel);
    assert_eq!(foo.static_host, Some(foo.reference.child("Companion")));
    assert_eq!(foo.variants.to_string(), "[js, jvm]");

    let companion = foo.static_host_node().unwrap();
    assert_eq!(companion.kind, ClasslikeKind::Object);
    assert_eq!(companion.nesting, Nesting::Nested);

    let invoke = &companion.functions[0];
    assert_eq!(invoke.reference, companion.reference.member("invoke"));
    assert!(invoke.is_operator);
    assert!(invoke.constructor_like);
    assert!(!invoke.is_constructor);
    assert_eq!(
        invoke.return_type,
        TypeRef::Classlike(foo.reference.clone())
    );

    let inner = &foo.classlikes[1];
    assert_eq!(inner.nesting, Nesting::Inner);

    let helper = &package.functions[0];
    assert_eq!(helper.return_type, TypeRef::Unit);
    assert!(!helper.constructor_like);
}

#[test]
fn sentinel_and_opaque_type_refs() {
    let input = indoc! {r#"
        {
          "name": "m",
          "packages": [
            {
              "name": "p",
              "functions": [
                {"name": "a", "return_type": "unit"},
                {"name": "b", "return_type": "never"},
                {"name": "c", "return_type": "other"},
                {"name": "d", "return_type": "other", "receiver": "other"}
              ]
            }
          ]
        }
    "#};

    let module = Module::from_json(input).unwrap();
    let functions = &module.packages[0].functions;
    assert_eq!(functions[0].return_type, TypeRef::Unit);
    assert_eq!(functions[1].return_type, TypeRef::Never);
    assert_eq!(functions[2].return_type, TypeRef::Other);
    assert_eq!(functions[3].receiver, Some(TypeRef::Other));
}

#[test]
fn static_host_must_exist() {
    let input = indoc! {r#"
        {
          "name": "m",
          "packages": [
            {
              "name": "p",
              "classlikes": [
                {"name": "Foo", "kind": "class", "static_host": "Companion"}
              ]
            }
          ]
        }
    "#};

    let err = Module::from_json(input).unwrap_err();
    assert!(matches!(err, ModelError::StaticHostMissing { .. }));
    assert_eq!(
        err.to_string(),
        "static host `Companion` of `p.Foo` is not declared in that scope"
    );
}

#[test]
fn static_host_must_be_object() {
    let input = indoc! {r#"
        {
          "name": "m",
          "packages": [
            {
              "name": "p",
              "classlikes": [
                {
                  "name": "Foo",
                  "kind": "class",
                  "static_host": "Companion",
                  "classlikes": [{"name": "Companion", "kind": "class"}]
                }
              ]
            }
          ]
        }
    "#};

    let err = Module::from_json(input).unwrap_err();
    assert!(matches!(err, ModelError::StaticHostNotObject { .. }));
    assert_eq!(
        err.to_string(),
        "static host `p.Foo.Companion` of `p.Foo` is not an object declaration"
    );
}

#[test]
fn inner_rejected_at_top_level() {
    let input = indoc! {r#"
        {
          "name": "m",
          "packages": [
            {
              "name": "p",
              "classlikes": [{"name": "Foo", "kind": "class", "inner": true}]
            }
          ]
        }
    "#};

    let err = Module::from_json(input).unwrap_err();
    assert!(matches!(err, ModelError::InnerAtTopLevel { .. }));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(matches!(
        Module::from_json("{").unwrap_err(),
        ModelError::Json(_)
    ));
    // Unknown classlike kinds come from a front end we don't understand.
    let input = r#"{"name": "m", "packages": [{"name": "p", "classlikes": [{"name": "F", "kind": "struct"}]}]}"#;
    assert!(matches!(
        Module::from_json(input).unwrap_err(),
        ModelError::Json(_)
    ));
}
