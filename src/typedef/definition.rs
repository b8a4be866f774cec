use std::fmt;

use crate::typedef::source::{ChanDir, SourceContext};

/// A named or basic type.
///
/// Covers builtins (`int`, `string`), locally declared names (`Foo`),
/// and qualified references (`pkg.Foo`). The canonical text is the name
/// itself — aliases are never chased, so `MyInt` and `int` stay
/// distinct even when one is declared as the other.
#[derive(Debug, Clone)]
pub struct IdentType {
    ctx: SourceContext,
    name: String,
}

impl IdentType {
    pub(crate) fn new(ctx: SourceContext, name: String) -> Self {
        IdentType { ctx, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for IdentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A map type.
#[derive(Debug, Clone)]
pub struct MapType {
    ctx: SourceContext,
    key: Box<Definition>,
    value: Box<Definition>,
}

impl MapType {
    pub(crate) fn new(ctx: SourceContext, key: Definition, value: Definition) -> Self {
        MapType {
            ctx,
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Key type definition.
    pub fn key(&self) -> &Definition {
        &self.key
    }

    /// Value type definition.
    pub fn val(&self) -> &Definition {
        &self.value
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "map[{}]{}", self.key, self.value)
    }
}

/// A slice type, `[]T`.
#[derive(Debug, Clone)]
pub struct SliceType {
    ctx: SourceContext,
    elem: Box<Definition>,
}

impl SliceType {
    pub(crate) fn new(ctx: SourceContext, elem: Definition) -> Self {
        SliceType {
            ctx,
            elem: Box::new(elem),
        }
    }

    pub fn elem(&self) -> &Definition {
        &self.elem
    }
}

impl fmt::Display for SliceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[]{}", self.elem)
    }
}

/// A fixed-length array type, `[N]T`.
#[derive(Debug, Clone)]
pub struct ArrayType {
    ctx: SourceContext,
    len: u64,
    elem: Box<Definition>,
}

impl ArrayType {
    pub(crate) fn new(ctx: SourceContext, len: u64, elem: Definition) -> Self {
        ArrayType {
            ctx,
            len,
            elem: Box::new(elem),
        }
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn elem(&self) -> &Definition {
        &self.elem
    }
}

impl fmt::Display for ArrayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]{}", self.len, self.elem)
    }
}

/// A pointer type, `*T`.
#[derive(Debug, Clone)]
pub struct PtrType {
    ctx: SourceContext,
    elem: Box<Definition>,
}

impl PtrType {
    pub(crate) fn new(ctx: SourceContext, elem: Definition) -> Self {
        PtrType {
            ctx,
            elem: Box::new(elem),
        }
    }

    pub fn elem(&self) -> &Definition {
        &self.elem
    }
}

impl fmt::Display for PtrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*{}", self.elem)
    }
}

/// A channel type with its direction.
#[derive(Debug, Clone)]
pub struct ChanType {
    ctx: SourceContext,
    dir: ChanDir,
    elem: Box<Definition>,
}

impl ChanType {
    pub(crate) fn new(ctx: SourceContext, dir: ChanDir, elem: Definition) -> Self {
        ChanType {
            ctx,
            dir,
            elem: Box::new(elem),
        }
    }

    pub fn dir(&self) -> ChanDir {
        self.dir
    }

    pub fn elem(&self) -> &Definition {
        &self.elem
    }
}

impl fmt::Display for ChanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dir {
            ChanDir::Both => write!(f, "chan {}", self.elem),
            ChanDir::Recv => write!(f, "<-chan {}", self.elem),
            ChanDir::Send => write!(f, "chan<- {}", self.elem),
        }
    }
}

/// A function type with parameter and result definitions.
#[derive(Debug, Clone)]
pub struct FuncType {
    ctx: SourceContext,
    params: Vec<Definition>,
    results: Vec<Definition>,
}

impl FuncType {
    pub(crate) fn new(ctx: SourceContext, params: Vec<Definition>, results: Vec<Definition>) -> Self {
        FuncType {
            ctx,
            params,
            results,
        }
    }

    pub fn params(&self) -> &[Definition] {
        &self.params
    }

    pub fn results(&self) -> &[Definition] {
        &self.results
    }
}

impl fmt::Display for FuncType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.params.iter().map(|p| p.to_string()).collect();
        write!(f, "func({})", params.join(", "))?;
        match self.results.len() {
            0 => Ok(()),
            1 => write!(f, " {}", self.results[0]),
            _ => {
                let results: Vec<String> = self.results.iter().map(|r| r.to_string()).collect();
                write!(f, " ({})", results.join(", "))
            }
        }
    }
}

/// Fallback for node shapes the ingestion collaborator could not
/// classify. Renders the source text captured for the node.
#[derive(Debug, Clone)]
pub struct UnsupportedType {
    ctx: SourceContext,
    repr: String,
}

impl UnsupportedType {
    pub(crate) fn new(ctx: SourceContext, repr: String) -> Self {
        UnsupportedType { ctx, repr }
    }

    pub fn repr(&self) -> &str {
        &self.repr
    }
}

impl fmt::Display for UnsupportedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.repr)
    }
}

/// A resolved type definition.
///
/// Built once, bottom-up, by [`resolve_type`](crate::typedef::resolve_type)
/// and immutable afterwards. Each composite variant exclusively owns its
/// children, so a definition is always a strict tree.
///
/// The canonical declarative text (`Display`) is the definition's sole
/// identity: [`compare`](Definition::compare) and `PartialEq` are exactly
/// canonical-text equality, not a field-by-field walk.
#[derive(Debug, Clone)]
pub enum Definition {
    /// Named or basic type
    Ident(IdentType),
    /// `map[K]V`
    Map(MapType),
    /// `[]T`
    Slice(SliceType),
    /// `[N]T`
    Array(ArrayType),
    /// `*T`
    Ptr(PtrType),
    /// `chan T` / `<-chan T` / `chan<- T`
    Chan(ChanType),
    /// `func(...) ...`
    Func(FuncType),
    /// Unclassifiable shape, rendered verbatim
    Unsupported(UnsupportedType),
}

impl Definition {
    /// Compares two definitions by their canonical text.
    ///
    /// Distinctly constructed but textually identical definitions are
    /// equal; a named alias and its underlying type are not.
    pub fn compare(&self, other: &Definition) -> bool {
        self.to_string() == other.to_string()
    }

    /// The diagnostic context the definition was resolved in.
    pub fn context(&self) -> &SourceContext {
        match self {
            Definition::Ident(d) => &d.ctx,
            Definition::Map(d) => &d.ctx,
            Definition::Slice(d) => &d.ctx,
            Definition::Array(d) => &d.ctx,
            Definition::Ptr(d) => &d.ctx,
            Definition::Chan(d) => &d.ctx,
            Definition::Func(d) => &d.ctx,
            Definition::Unsupported(d) => &d.ctx,
        }
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Definition::Ident(d) => write!(f, "{}", d),
            Definition::Map(d) => write!(f, "{}", d),
            Definition::Slice(d) => write!(f, "{}", d),
            Definition::Array(d) => write!(f, "{}", d),
            Definition::Ptr(d) => write!(f, "{}", d),
            Definition::Chan(d) => write!(f, "{}", d),
            Definition::Func(d) => write!(f, "{}", d),
            Definition::Unsupported(d) => write!(f, "{}", d),
        }
    }
}

impl PartialEq for Definition {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other)
    }
}
