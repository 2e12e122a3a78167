//! # mathnav
//!
//! ARIA enrichment and keyboard navigation for rendered math expressions.
//!
//! An upstream renderer annotates each expression with a parenthesized
//! linearization of its semantic structure (`data-semantic-structure`),
//! per-node semantic ids and optional speech text. This crate consumes
//! those annotations:
//!
//! - [`skeleton`] parses the linearization into a nested expression,
//! - [`semantic`] builds an arena tree of identified nodes with
//!   document-unique names,
//! - [`dom`] stamps stable ids, `aria-owns` links and labels onto the
//!   DOM so assistive technology can traverse the semantic structure
//!   independent of DOM nesting,
//! - [`navigate`] is the pure directional state machine over the tree,
//! - [`focus`] binds key events to navigator moves and reflects the
//!   active node via highlight and `aria-activedescendant`,
//! - [`enhance`] wires it all up for every expression in a document.
//!
//! Errors degrade single expressions, never the whole document; see
//! [`error::RewriteError`].

pub mod dom;
pub mod enhance;
pub mod error;
pub mod focus;
pub mod navigate;
pub mod semantic;
pub mod skeleton;

pub use enhance::enhance_document;
pub use error::RewriteError;
pub use focus::NavigatorRegistry;
pub use navigate::{Direction, Navigator};
pub use semantic::{SemanticTree, NodeIx};
pub use skeleton::{parse_skeleton, Sexp};
