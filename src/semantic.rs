//! Semantic tree construction
//!
//! Turns a parsed linearization ([`Sexp`](crate::skeleton::Sexp)) into an
//! explicit tree of identified nodes. Nodes live in an arena owned by the
//! tree; parent and child edges are indices, so the back-reference is a
//! plain navigational pointer rather than an ownership edge.
//!
//! Each node gets a document-unique `name` built from a per-expression
//! disambiguator, which is what keeps multiple expressions with
//! overlapping local ids apart on one page.

pub mod tree;
pub mod treeviz;

pub use tree::{make_name, NodeIx, SemanticNode, SemanticTree, NAME_PREFIX};
pub use treeviz::to_treeviz;
