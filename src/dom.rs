//! DOM synchronization
//!
//! Everything that touches the `rcdom` tree lives here: attribute
//! helpers, the worklist-based attribute search, the synchronizer that
//! stamps ids / labels / ownership links onto DOM nodes, and the
//! shielding pass that hides stray presentation text from assistive
//! technology.
//!
//! The synchronizer mutates attributes only; the one structural change in
//! this module (wrapping inert text nodes) is a separate, explicit pass.

pub mod attrs;
pub mod query;
pub mod shield;
pub mod sync;

pub use shield::shield_inert_text;
pub use sync::{rewrite_collapsed, sync};

/// Attribute carrying the parenthesized linearization on each expression root
pub const ATTR_STRUCTURE: &str = "data-semantic-structure";
/// Attribute carrying a DOM node's own semantic identifier
pub const ATTR_SEMANTIC_ID: &str = "data-semantic-id";
/// Attribute carrying upstream-supplied speech text
pub const ATTR_SPEECH: &str = "data-semantic-speech";
/// Attribute listing collapsed-child identifiers
pub const ATTR_COLLAPSED: &str = "data-semantic-collapsed";
