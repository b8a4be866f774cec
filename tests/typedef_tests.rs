// tests/typedef_tests.rs

use std::sync::Arc;

use srcql::typedef::{ChanDir, Definition, File, Package, TypeExpr, resolve_type};

fn resolve(node: &Arc<TypeExpr>) -> Definition {
    let pkg = Package::new("demo", "example.com/demo");
    let file = File::new("demo.go");
    resolve_type(&pkg, &file, node)
}

// ============================================================================
// Canonical rendering
// ============================================================================

#[test]
fn test_basic_types() {
    let test_cases = vec!["int", "string", "bool", "float64", "Foo"];

    for name in test_cases {
        let def = resolve(&TypeExpr::name(name));
        assert_eq!(def.to_string(), name);
    }
}

#[test]
fn test_qualified_name() {
    let def = resolve(&TypeExpr::qualified("ast", "Node"));
    assert_eq!(def.to_string(), "ast.Node");
}

#[test]
fn test_map_rendering() {
    let node = TypeExpr::map(TypeExpr::name("string"), TypeExpr::name("int"));
    assert_eq!(resolve(&node).to_string(), "map[string]int");
}

#[test]
fn test_nested_map_rendering() {
    let node = TypeExpr::map(
        TypeExpr::name("string"),
        TypeExpr::map(TypeExpr::name("int"), TypeExpr::name("bool")),
    );
    assert_eq!(resolve(&node).to_string(), "map[string]map[int]bool");
}

#[test]
fn test_slice_and_array() {
    assert_eq!(
        resolve(&TypeExpr::slice(TypeExpr::name("byte"))).to_string(),
        "[]byte"
    );
    assert_eq!(
        resolve(&TypeExpr::array(4, TypeExpr::name("int"))).to_string(),
        "[4]int"
    );
}

#[test]
fn test_pointer() {
    assert_eq!(
        resolve(&TypeExpr::ptr(TypeExpr::name("Foo"))).to_string(),
        "*Foo"
    );
}

#[test]
fn test_channel_directions() {
    let elem = TypeExpr::name("int");
    assert_eq!(
        resolve(&TypeExpr::chan(ChanDir::Both, elem.clone())).to_string(),
        "chan int"
    );
    assert_eq!(
        resolve(&TypeExpr::chan(ChanDir::Recv, elem.clone())).to_string(),
        "<-chan int"
    );
    assert_eq!(
        resolve(&TypeExpr::chan(ChanDir::Send, elem)).to_string(),
        "chan<- int"
    );
}

#[test]
fn test_func_rendering() {
    let node = TypeExpr::func(
        vec![TypeExpr::name("int"), TypeExpr::name("string")],
        vec![TypeExpr::name("bool"), TypeExpr::name("error")],
    );
    assert_eq!(resolve(&node).to_string(), "func(int, string) (bool, error)");

    let node = TypeExpr::func(vec![TypeExpr::name("int")], vec![TypeExpr::name("bool")]);
    assert_eq!(resolve(&node).to_string(), "func(int) bool");

    let node = TypeExpr::func(vec![], vec![]);
    assert_eq!(resolve(&node).to_string(), "func()");
}

#[test]
fn test_deeply_nested_composite() {
    // map[string]map[int][]*pkg.Foo
    let node = TypeExpr::map(
        TypeExpr::name("string"),
        TypeExpr::map(
            TypeExpr::name("int"),
            TypeExpr::slice(TypeExpr::ptr(TypeExpr::qualified("pkg", "Foo"))),
        ),
    );
    assert_eq!(resolve(&node).to_string(), "map[string]map[int][]*pkg.Foo");
}

#[test]
fn test_unsupported_renders_verbatim() {
    let def = resolve(&TypeExpr::unsupported("struct{ x int }"));
    assert_eq!(def.to_string(), "struct{ x int }");
}

// ============================================================================
// Structural equality
// ============================================================================

#[test]
fn test_independent_constructions_compare_equal() {
    let a = resolve(&TypeExpr::map(
        TypeExpr::name("string"),
        TypeExpr::name("bool"),
    ));
    let b = resolve(&TypeExpr::map(
        TypeExpr::name("string"),
        TypeExpr::name("bool"),
    ));
    assert!(a.compare(&b));
    assert_eq!(a, b);
}

#[test]
fn test_differing_key_types_compare_unequal() {
    let a = resolve(&TypeExpr::map(
        TypeExpr::name("string"),
        TypeExpr::name("bool"),
    ));
    let b = resolve(&TypeExpr::map(TypeExpr::name("int"), TypeExpr::name("bool")));
    assert!(!a.compare(&b));
    assert_ne!(a, b);
}

#[test]
fn test_differing_value_types_compare_unequal() {
    let a = resolve(&TypeExpr::map(
        TypeExpr::name("string"),
        TypeExpr::name("bool"),
    ));
    let b = resolve(&TypeExpr::map(
        TypeExpr::name("string"),
        TypeExpr::name("int"),
    ));
    assert!(!a.compare(&b));
}

#[test]
fn test_named_alias_is_not_its_underlying_type() {
    // Equality is over canonical text; aliases are never resolved
    let alias = resolve(&TypeExpr::name("MyInt"));
    let underlying = resolve(&TypeExpr::name("int"));
    assert!(!alias.compare(&underlying));
}

#[test]
fn test_equality_across_shapes() {
    let slice = resolve(&TypeExpr::slice(TypeExpr::name("int")));
    let array = resolve(&TypeExpr::array(4, TypeExpr::name("int")));
    assert!(!slice.compare(&array));
}

#[test]
fn test_equality_ignores_source_context() {
    let node = TypeExpr::map(TypeExpr::name("string"), TypeExpr::name("bool"));

    let a = resolve_type(
        &Package::new("alpha", "example.com/alpha"),
        &File::new("a.go"),
        &node,
    );
    let b = resolve_type(
        &Package::new("beta", "example.com/beta"),
        &File::new("b.go"),
        &node,
    );
    assert!(a.compare(&b));
}

// ============================================================================
// Accessors and context
// ============================================================================

#[test]
fn test_map_children_are_definitions() {
    let node = TypeExpr::map(
        TypeExpr::name("string"),
        TypeExpr::slice(TypeExpr::name("int")),
    );
    match resolve(&node) {
        Definition::Map(map) => {
            assert_eq!(map.key().to_string(), "string");
            assert_eq!(map.val().to_string(), "[]int");
        }
        other => panic!("Expected map definition, got {:?}", other),
    }
}

#[test]
fn test_context_records_package_and_file() {
    let pkg = Package::new("demo", "example.com/demo");
    let file = File::new("demo.go");
    let node = TypeExpr::name("int");

    let def = resolve_type(&pkg, &file, &node);
    assert_eq!(def.context().pkg().name(), "demo");
    assert_eq!(def.context().pkg().path(), "example.com/demo");
    assert_eq!(def.context().file().name(), "demo.go");
    assert_eq!(def.context().node(), node.as_ref());
}

#[test]
fn test_children_carry_context_too() {
    let pkg = Package::new("demo", "example.com/demo");
    let file = File::new("demo.go");
    let node = TypeExpr::map(TypeExpr::name("string"), TypeExpr::name("int"));

    match resolve_type(&pkg, &file, &node) {
        Definition::Map(map) => {
            assert_eq!(map.key().context().pkg().name(), "demo");
            assert_eq!(map.key().context().node(), &TypeExpr::Name("string".into()));
        }
        other => panic!("Expected map definition, got {:?}", other),
    }
}
