//! Stamping semantic structure onto the DOM.
//!
//! `sync` walks the semantic tree with an explicit stack and, for each
//! node, locates the DOM element carrying the matching semantic id and
//! writes the stable `id`, the accessible label (or presentation role),
//! and the `aria-owns` ownership link. Children may live anywhere under
//! the expression root, so every lookup is scoped to the root, not to
//! the parent's DOM node.

use super::attrs::{get_attr, remove_attr, set_attr};
use super::query::find_by_attr;
use super::{ATTR_COLLAPSED, ATTR_SEMANTIC_ID, ATTR_SPEECH};
use crate::error::RewriteError;
use crate::semantic::{make_name, SemanticTree};
use markup5ever_rcdom::Handle;
use once_cell::sync::Lazy;
use regex::Regex;

/// Digit runs inside the collapsed-children attribute are raw semantic ids
static RAW_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Synchronize the DOM subtree under `dom_root` with the semantic tree.
///
/// Attribute mutations only, applied depth-first in reading order. A
/// failed lookup leaves that subtree untouched and is reported in the
/// returned list; sibling subtrees still synchronize. Running `sync`
/// twice with the same inputs leaves the DOM in the same state as
/// running it once.
pub fn sync(dom_root: &Handle, tree: &SemanticTree) -> Vec<RewriteError> {
    let mut errors = Vec::new();
    let mut stack = vec![tree.root()];
    while let Some(ix) = stack.pop() {
        let node = tree.node(ix);
        let dom_node = if get_attr(dom_root, ATTR_SEMANTIC_ID).as_deref() == Some(node.id.as_str())
        {
            Some(dom_root.clone())
        } else {
            find_by_attr(dom_root, ATTR_SEMANTIC_ID, &node.id)
        };
        let Some(dom_node) = dom_node else {
            // Skip this subtree; siblings already on the stack continue
            errors.push(RewriteError::DomLookup {
                id: node.id.clone(),
            });
            continue;
        };

        set_attr(&dom_node, "id", &node.name);
        // The node participates in the ownership graph now
        remove_attr(&dom_node, "aria-hidden");
        match get_attr(&dom_node, ATTR_SPEECH) {
            Some(speech) => set_attr(&dom_node, "aria-label", &speech),
            None => set_attr(&dom_node, "role", "presentation"),
        }

        if !node.children.is_empty() {
            let owned: Vec<&str> = node
                .children
                .iter()
                .map(|&child| tree.node(child).name.as_str())
                .collect();
            set_attr(&dom_node, "aria-owns", &owned.join(" "));
            stack.extend(node.children.iter().rev().copied());
        }
    }
    errors
}

/// Rewrite a `data-semantic-collapsed` attribute in place, substituting
/// each raw id with its disambiguated name. A pass-through transform;
/// navigation does not depend on it.
pub fn rewrite_collapsed(node: &Handle, disambiguator: usize) {
    if let Some(list) = get_attr(node, ATTR_COLLAPSED) {
        let rewritten = RAW_ID_REGEX.replace_all(&list, |captures: &regex::Captures| {
            make_name(disambiguator, &captures[0])
        });
        set_attr(node, ATTR_COLLAPSED, &rewritten);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::attrs::{append_child, create_element, has_attr};
    use crate::skeleton::parse_skeleton;

    fn tree(skeleton: &str) -> SemanticTree {
        SemanticTree::build(&parse_skeleton(skeleton).unwrap(), 0).unwrap()
    }

    /// Root div without its own semantic id, wrapping the annotated markup
    fn dom_for_reference_expression() -> Handle {
        let root = create_element("div", vec![]);
        let one = create_element(
            "span",
            vec![("data-semantic-id", "1"), ("data-semantic-speech", "sum")],
        );
        let two = create_element("span", vec![("data-semantic-id", "2")]);
        let three = create_element(
            "span",
            vec![("data-semantic-id", "3"), ("data-semantic-speech", "three")],
        );
        let four = create_element("span", vec![("data-semantic-id", "4")]);
        append_child(&two, three);
        append_child(&one, two);
        append_child(&one, four);
        append_child(&root, one);
        root
    }

    fn by_id(root: &Handle, id: &str) -> Handle {
        crate::dom::query::find_by_id(root, id).unwrap()
    }

    #[test]
    fn stamps_ids_labels_and_ownership() {
        let root = dom_for_reference_expression();
        let errors = sync(&root, &tree("(1 (2 3) 4)"));
        assert!(errors.is_empty());

        let one = by_id(&root, "MJX0-1");
        assert_eq!(get_attr(&one, "aria-owns").as_deref(), Some("MJX0-2 MJX0-4"));
        assert_eq!(get_attr(&one, "aria-label").as_deref(), Some("sum"));
        assert!(!has_attr(&one, "role"));

        let two = by_id(&root, "MJX0-2");
        assert_eq!(get_attr(&two, "aria-owns").as_deref(), Some("MJX0-3"));
        assert_eq!(get_attr(&two, "role").as_deref(), Some("presentation"));

        let three = by_id(&root, "MJX0-3");
        assert_eq!(get_attr(&three, "aria-label").as_deref(), Some("three"));
        assert!(!has_attr(&three, "aria-owns"));
    }

    #[test]
    fn root_element_may_carry_the_root_id_itself() {
        let root = create_element("span", vec![("data-semantic-id", "1")]);
        let child = create_element("span", vec![("data-semantic-id", "2")]);
        append_child(&root, child);
        let errors = sync(&root, &tree("(1 2)"));
        assert!(errors.is_empty());
        assert_eq!(get_attr(&root, "id").as_deref(), Some("MJX0-1"));
    }

    #[test]
    fn missing_node_skips_its_subtree_but_not_siblings() {
        // DOM carries 1 and 4 but not 2, so 2's subtree (including 3)
        // stays untouched while 4 still synchronizes.
        let root = create_element("div", vec![]);
        let one = create_element("span", vec![("data-semantic-id", "1")]);
        let three = create_element("span", vec![("data-semantic-id", "3")]);
        let four = create_element("span", vec![("data-semantic-id", "4")]);
        append_child(&one, three.clone());
        append_child(&one, four.clone());
        append_child(&root, one);

        let errors = sync(&root, &tree("(1 (2 3) 4)"));
        assert_eq!(errors, vec![RewriteError::DomLookup { id: "2".into() }]);
        assert!(!has_attr(&three, "id"));
        assert_eq!(get_attr(&four, "id").as_deref(), Some("MJX0-4"));
    }

    #[test]
    fn sync_clears_stale_aria_hidden() {
        let root = create_element("div", vec![]);
        let one = create_element(
            "span",
            vec![("data-semantic-id", "1"), ("aria-hidden", "true")],
        );
        append_child(&root, one.clone());
        sync(&root, &tree("1"));
        assert!(!has_attr(&one, "aria-hidden"));
    }

    #[test]
    fn rewrite_collapsed_substitutes_every_raw_id() {
        let node = create_element("span", vec![("data-semantic-collapsed", "(12 (3 4))")]);
        rewrite_collapsed(&node, 1);
        assert_eq!(
            get_attr(&node, "data-semantic-collapsed").as_deref(),
            Some("(MJX1-12 (MJX1-3 MJX1-4))")
        );
    }

    #[test]
    fn rewrite_collapsed_without_attribute_is_a_noop() {
        let node = create_element("span", vec![]);
        rewrite_collapsed(&node, 0);
        assert!(!has_attr(&node, "data-semantic-collapsed"));
    }
}
