//! # Type Definition Model
//!
//! Models source-language type expressions (`map[K]V`, `[]T`, `*T`, ...)
//! as a recursive [`Definition`] tree that serves as the schema queries
//! run against.
//!
//! The module is organized into:
//!
//! - **[source]** - ingestion-side handles: packages, files, and the
//!   raw [`TypeExpr`] nodes a source-analysis collaborator hands over
//! - **[definition]** - the [`Definition`] variants with their canonical
//!   text rendering and text-based equality
//! - **[resolve]** - the recursive [`resolve_type`] dispatch that turns a
//!   node into a definition, bottom-up
//!
//! ## Canonical text is the identity
//!
//! Every definition renders a canonical declarative form via `Display`
//! (`map[string]map[int]bool`, `<-chan *Foo`, ...) and two definitions
//! are equal exactly when their canonical texts are equal. Named types
//! are not resolved to their underlying type: `MyInt` and `int` are
//! distinct on purpose, even when one aliases the other.
//!
//! Definitions are built once and immutable afterwards, so a shared
//! catalog of them can be read concurrently without locking.
pub mod definition;
pub mod resolve;
pub mod source;

pub use definition::{
    ArrayType, ChanType, Definition, FuncType, IdentType, MapType, PtrType, SliceType,
    UnsupportedType,
};
pub use resolve::resolve_type;
pub use source::{ChanDir, File, Package, SourceContext, TypeExpr};
