use std::sync::Arc;

use crate::typedef::{
    definition::{
        ArrayType, ChanType, Definition, FuncType, IdentType, MapType, PtrType, SliceType,
        UnsupportedType,
    },
    source::{File, Package, SourceContext, TypeExpr},
};

/// Resolves a raw type-expression node into a [`Definition`].
///
/// Dispatches on the node's shape; composite shapes resolve their
/// children through the same dispatch, so arbitrary nesting works
/// (`map[string]map[int][]Foo`). Every resolved definition carries the
/// package, file, and node it came from for diagnostics.
///
/// Nodes are strict trees, so the recursion is bounded by the node's
/// depth and termination needs no cycle guard.
pub fn resolve_type(pkg: &Arc<Package>, file: &Arc<File>, node: &Arc<TypeExpr>) -> Definition {
    let ctx = SourceContext::new(pkg.clone(), file.clone(), node.clone());

    match node.as_ref() {
        TypeExpr::Name(name) => Definition::Ident(IdentType::new(ctx, name.clone())),
        TypeExpr::Qualified { pkg: qualifier, name } => {
            Definition::Ident(IdentType::new(ctx, format!("{}.{}", qualifier, name)))
        }
        TypeExpr::Map { key, value } => Definition::Map(MapType::new(
            ctx,
            resolve_type(pkg, file, key),
            resolve_type(pkg, file, value),
        )),
        TypeExpr::Slice { elem } => {
            Definition::Slice(SliceType::new(ctx, resolve_type(pkg, file, elem)))
        }
        TypeExpr::Array { len, elem } => {
            Definition::Array(ArrayType::new(ctx, *len, resolve_type(pkg, file, elem)))
        }
        TypeExpr::Ptr { elem } => Definition::Ptr(PtrType::new(ctx, resolve_type(pkg, file, elem))),
        TypeExpr::Chan { dir, elem } => {
            Definition::Chan(ChanType::new(ctx, *dir, resolve_type(pkg, file, elem)))
        }
        TypeExpr::Func { params, results } => Definition::Func(FuncType::new(
            ctx,
            params.iter().map(|p| resolve_type(pkg, file, p)).collect(),
            results.iter().map(|r| resolve_type(pkg, file, r)).collect(),
        )),
        TypeExpr::Unsupported { repr } => {
            Definition::Unsupported(UnsupportedType::new(ctx, repr.clone()))
        }
    }
}
