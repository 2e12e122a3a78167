//! Document-level wiring.
//!
//! Discovers every annotated expression root in a parsed document, builds
//! its semantic tree, synchronizes the DOM and registers a navigator for
//! it. Failures are expression-local: a bad skeleton or missing DOM node
//! degrades that one expression and is reported in the returned list,
//! while every other expression on the page proceeds normally.

use crate::dom::attrs::{get_attr, set_attr};
use crate::dom::query::collect_with_attr;
use crate::dom::{rewrite_collapsed, shield_inert_text, sync, ATTR_COLLAPSED, ATTR_STRUCTURE};
use crate::error::RewriteError;
use crate::focus::NavigatorRegistry;
use crate::navigate::Navigator;
use crate::semantic::SemanticTree;
use crate::skeleton::parse_skeleton;
use markup5ever_rcdom::{Handle, RcDom};
use std::rc::Rc;

/// Enrich every annotated expression in the document.
///
/// Expression roots are the elements carrying the skeleton attribute, in
/// document order; their position in that order is the disambiguator for
/// node names. Returns the navigator registry for subsequent key handling
/// together with everything that went wrong along the way.
pub fn enhance_document(dom: &RcDom) -> (NavigatorRegistry, Vec<RewriteError>) {
    let mut registry = NavigatorRegistry::new();
    let mut errors = Vec::new();

    for (count, root) in collect_with_attr(&dom.document, ATTR_STRUCTURE)
        .into_iter()
        .enumerate()
    {
        match enhance_expression(&root, count, &mut errors) {
            Ok(tree) => {
                let root_name = tree.root_name().to_string();
                set_attr(&root, "tabindex", "0");
                set_attr(&root, "role", "group");
                set_attr(&root, "aria-activedescendant", &root_name);
                registry.register(root_name, Navigator::new(tree), root);
            }
            Err(error) => errors.push(error),
        }
    }

    (registry, errors)
}

/// Build and apply one expression; `Err` means the whole expression is
/// skipped, entries in `errors` mean parts of it stayed unsynchronized.
fn enhance_expression(
    root: &Handle,
    count: usize,
    errors: &mut Vec<RewriteError>,
) -> Result<Rc<SemanticTree>, RewriteError> {
    // Present by construction: roots are selected on this attribute
    let skeleton = get_attr(root, ATTR_STRUCTURE).unwrap_or_default();
    let sexp = parse_skeleton(&skeleton)?;
    let tree = Rc::new(SemanticTree::build(&sexp, count)?);

    errors.extend(sync(root, &tree));
    for node in collect_with_attr(root, ATTR_COLLAPSED) {
        rewrite_collapsed(&node, count);
    }
    shield_inert_text(root);
    Ok(tree)
}
