//! Arena-backed semantic tree and its builder.

use crate::error::RewriteError;
use crate::skeleton::Sexp;
use serde::Serialize;

/// Fixed prefix for disambiguated node names
pub const NAME_PREFIX: &str = "MJX";

/// Build the document-unique name for a semantic id.
///
/// Two different disambiguators never collide, even for identical ids:
/// the disambiguator sits between the fixed prefix and the separator.
pub fn make_name(disambiguator: usize, id: &str) -> String {
    format!("{NAME_PREFIX}{disambiguator}-{id}")
}

/// Index of a node within its owning [`SemanticTree`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeIx(usize);

impl NodeIx {
    /// The raw arena index
    pub fn index(self) -> usize {
        self.0
    }
}

/// One logical part of an expression, distinct from its DOM representation
#[derive(Debug, Clone, Serialize)]
pub struct SemanticNode {
    /// Raw semantic id from the linearization
    pub id: String,
    /// Document-unique disambiguated name
    pub name: String,
    /// Owning node, `None` for the root
    pub parent: Option<NodeIx>,
    /// Children in linearization order (left-to-right reading order);
    /// never re-sorted
    pub children: Vec<NodeIx>,
}

/// The semantic tree for one expression.
///
/// All nodes are owned by the arena; the tree is read-only after
/// construction.
#[derive(Debug, Clone, Serialize)]
pub struct SemanticTree {
    nodes: Vec<SemanticNode>,
    root: NodeIx,
    disambiguator: usize,
}

impl SemanticTree {
    /// Build a tree from a parsed linearization.
    ///
    /// An atom becomes a single leaf. A list becomes a parent built from
    /// its head token with the remaining elements as children, in order.
    /// An empty list, or a list headed by another list, is a structural
    /// error; the caller skips the enclosing expression.
    pub fn build(expr: &Sexp, disambiguator: usize) -> Result<Self, RewriteError> {
        let mut nodes = Vec::new();
        let root = build_node(expr, disambiguator, None, &mut nodes)?;
        Ok(SemanticTree {
            nodes,
            root,
            disambiguator,
        })
    }

    /// The root node index
    pub fn root(&self) -> NodeIx {
        self.root
    }

    /// The disambiguated name of the root node
    pub fn root_name(&self) -> &str {
        &self.node(self.root).name
    }

    /// Look up a node by index
    pub fn node(&self, ix: NodeIx) -> &SemanticNode {
        &self.nodes[ix.0]
    }

    /// Number of nodes in the tree (always at least one)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty; by construction it never is
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The per-expression disambiguator this tree was built with
    pub fn disambiguator(&self) -> usize {
        self.disambiguator
    }

    /// Iterate over all nodes in arena order
    pub fn nodes(&self) -> impl Iterator<Item = &SemanticNode> {
        self.nodes.iter()
    }

    /// Position of `child` among its parent's children, if it has a parent
    pub fn sibling_index(&self, child: NodeIx) -> Option<usize> {
        let parent = self.node(child).parent?;
        self.node(parent).children.iter().position(|&c| c == child)
    }
}

fn build_node(
    expr: &Sexp,
    disambiguator: usize,
    parent: Option<NodeIx>,
    nodes: &mut Vec<SemanticNode>,
) -> Result<NodeIx, RewriteError> {
    match expr {
        Sexp::Atom(id) => Ok(push_node(nodes, id, disambiguator, parent)),
        Sexp::List(items) => {
            let head = items
                .first()
                .ok_or_else(|| RewriteError::Structure("empty list".to_string()))?;
            let Sexp::Atom(id) = head else {
                return Err(RewriteError::Structure(
                    "list head must be a bare token".to_string(),
                ));
            };
            let ix = push_node(nodes, id, disambiguator, parent);
            for child_expr in &items[1..] {
                let child = build_node(child_expr, disambiguator, Some(ix), nodes)?;
                nodes[ix.0].children.push(child);
            }
            Ok(ix)
        }
    }
}

fn push_node(
    nodes: &mut Vec<SemanticNode>,
    id: &str,
    disambiguator: usize,
    parent: Option<NodeIx>,
) -> NodeIx {
    let ix = NodeIx(nodes.len());
    nodes.push(SemanticNode {
        id: id.to_string(),
        name: make_name(disambiguator, id),
        parent,
        children: Vec::new(),
    });
    ix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::parse_skeleton;
    use std::collections::HashSet;

    fn build(skeleton: &str, disambiguator: usize) -> SemanticTree {
        SemanticTree::build(&parse_skeleton(skeleton).unwrap(), disambiguator).unwrap()
    }

    #[test]
    fn builds_leaf_from_atom() {
        let tree = build("7", 0);
        assert_eq!(tree.len(), 1);
        let root = tree.node(tree.root());
        assert_eq!(root.id, "7");
        assert_eq!(root.name, "MJX0-7");
        assert!(root.parent.is_none());
        assert!(root.children.is_empty());
    }

    #[test]
    fn builds_nested_tree_in_reading_order() {
        let tree = build("(1 (2 3) 4)", 0);
        assert_eq!(tree.len(), 4);

        let root = tree.node(tree.root());
        assert_eq!(root.id, "1");
        let child_ids: Vec<&str> = root
            .children
            .iter()
            .map(|&c| tree.node(c).id.as_str())
            .collect();
        assert_eq!(child_ids, ["2", "4"]);

        let two = tree.node(root.children[0]);
        let grandchild_ids: Vec<&str> = two
            .children
            .iter()
            .map(|&c| tree.node(c).id.as_str())
            .collect();
        assert_eq!(grandchild_ids, ["3"]);
    }

    #[test]
    fn every_non_root_node_has_exactly_one_parent() {
        let tree = build("(1 (2 3 5) (6 7) 4)", 0);
        let mut seen = 0;
        for node in tree.nodes() {
            for &child in &node.children {
                assert!(tree.node(child).parent.is_some());
                seen += 1;
            }
        }
        // Every node except the root appears in exactly one children list
        assert_eq!(seen, tree.len() - 1);
        assert!(tree.node(tree.root()).parent.is_none());
    }

    #[test]
    fn names_are_disjoint_across_disambiguators() {
        let first = build("(1 (2 3) 4)", 0);
        let second = build("(1 2 3)", 1);
        let first_names: HashSet<&str> = first.nodes().map(|n| n.name.as_str()).collect();
        let second_names: HashSet<&str> = second.nodes().map(|n| n.name.as_str()).collect();
        assert!(first_names.is_disjoint(&second_names));
    }

    #[test]
    fn empty_list_is_a_structural_error() {
        let err = SemanticTree::build(&parse_skeleton("()").unwrap(), 0).unwrap_err();
        assert!(matches!(err, RewriteError::Structure(_)));
    }

    #[test]
    fn nested_empty_list_is_a_structural_error() {
        let err = SemanticTree::build(&parse_skeleton("(1 ())").unwrap(), 0).unwrap_err();
        assert!(matches!(err, RewriteError::Structure(_)));
    }

    #[test]
    fn list_head_must_be_a_token() {
        let err = SemanticTree::build(&parse_skeleton("((1 2) 3)").unwrap(), 0).unwrap_err();
        assert!(matches!(err, RewriteError::Structure(_)));
    }

    #[test]
    fn sibling_index_follows_reading_order() {
        let tree = build("(1 2 3 4)", 0);
        let root = tree.node(tree.root());
        assert_eq!(tree.sibling_index(tree.root()), None);
        for (expected, &child) in root.children.iter().enumerate() {
            assert_eq!(tree.sibling_index(child), Some(expected));
        }
    }
}
