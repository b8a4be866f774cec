use std::sync::Arc;

/// A package handle from the source-analysis layer.
///
/// Identity is stable for the lifetime of a catalog; definitions keep a
/// reference to their owning package purely for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    name: String,
    path: String,
}

impl Package {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Arc<Self> {
        Arc::new(Package {
            name: name.into(),
            path: path.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// A file handle within a package.
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    name: String,
}

impl File {
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Arc::new(File { name: name.into() })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Channel direction for channel-shaped type expressions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChanDir {
    /// `chan T`
    Both,
    /// `<-chan T`
    Recv,
    /// `chan<- T`
    Send,
}

/// A raw type-expression node handed over by the source-analysis
/// collaborator.
///
/// Composite shapes own their children through `Arc`, so a node is a
/// strict tree built bottom-up; a cycle is unrepresentable at this
/// level. Named references (`Name`, `Qualified`) stay names — they are
/// never chased back into the node they name.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    /// A named or basic type: `int`, `Foo`.
    Name(String),

    /// A reference into another package: `pkg.Foo`.
    Qualified { pkg: String, name: String },

    /// `map[K]V`
    Map {
        key: Arc<TypeExpr>,
        value: Arc<TypeExpr>,
    },

    /// `[]T`
    Slice { elem: Arc<TypeExpr> },

    /// `[N]T`
    Array { len: u64, elem: Arc<TypeExpr> },

    /// `*T`
    Ptr { elem: Arc<TypeExpr> },

    /// `chan T`, `<-chan T`, or `chan<- T`
    Chan { dir: ChanDir, elem: Arc<TypeExpr> },

    /// `func(A, B) R` / `func(A) (R1, R2)`
    Func {
        params: Vec<Arc<TypeExpr>>,
        results: Vec<Arc<TypeExpr>>,
    },

    /// A shape the collaborator could not classify, with the source text
    /// it captured for it.
    Unsupported { repr: String },
}

impl TypeExpr {
    pub fn name(name: impl Into<String>) -> Arc<Self> {
        Arc::new(TypeExpr::Name(name.into()))
    }

    pub fn qualified(pkg: impl Into<String>, name: impl Into<String>) -> Arc<Self> {
        Arc::new(TypeExpr::Qualified {
            pkg: pkg.into(),
            name: name.into(),
        })
    }

    pub fn map(key: Arc<TypeExpr>, value: Arc<TypeExpr>) -> Arc<Self> {
        Arc::new(TypeExpr::Map { key, value })
    }

    pub fn slice(elem: Arc<TypeExpr>) -> Arc<Self> {
        Arc::new(TypeExpr::Slice { elem })
    }

    pub fn array(len: u64, elem: Arc<TypeExpr>) -> Arc<Self> {
        Arc::new(TypeExpr::Array { len, elem })
    }

    pub fn ptr(elem: Arc<TypeExpr>) -> Arc<Self> {
        Arc::new(TypeExpr::Ptr { elem })
    }

    pub fn chan(dir: ChanDir, elem: Arc<TypeExpr>) -> Arc<Self> {
        Arc::new(TypeExpr::Chan { dir, elem })
    }

    pub fn func(params: Vec<Arc<TypeExpr>>, results: Vec<Arc<TypeExpr>>) -> Arc<Self> {
        Arc::new(TypeExpr::Func { params, results })
    }

    pub fn unsupported(repr: impl Into<String>) -> Arc<Self> {
        Arc::new(TypeExpr::Unsupported { repr: repr.into() })
    }
}

/// Where a definition came from.
///
/// Carried by every definition for diagnostic reporting only: it takes
/// no part in canonical text or equality.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pkg: Arc<Package>,
    file: Arc<File>,
    node: Arc<TypeExpr>,
}

impl SourceContext {
    pub(crate) fn new(pkg: Arc<Package>, file: Arc<File>, node: Arc<TypeExpr>) -> Self {
        SourceContext { pkg, file, node }
    }

    /// The owning package.
    pub fn pkg(&self) -> &Package {
        &self.pkg
    }

    /// The owning file.
    pub fn file(&self) -> &File {
        &self.file
    }

    /// The node this definition was resolved from.
    pub fn node(&self) -> &TypeExpr {
        &self.node
    }
}
