//! Indented textual rendering of a semantic tree.
//!
//! One node per line, two spaces of indentation per depth level. Used by
//! the CLI's `--dump tree` output and by snapshot tests; has no role in
//! the rewrite pipeline itself.

use super::tree::{NodeIx, SemanticTree};

/// Render a tree as `name [id]` lines, children indented under parents.
pub fn to_treeviz(tree: &SemanticTree) -> String {
    let mut lines = Vec::with_capacity(tree.len());
    render(tree, tree.root(), 0, &mut lines);
    lines.join("\n")
}

fn render(tree: &SemanticTree, ix: NodeIx, depth: usize, lines: &mut Vec<String>) {
    let node = tree.node(ix);
    lines.push(format!("{}{} [{}]", "  ".repeat(depth), node.name, node.id));
    for &child in &node.children {
        render(tree, child, depth + 1, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::SemanticTree;
    use crate::skeleton::parse_skeleton;

    #[test]
    fn renders_nested_tree() {
        let sexp = parse_skeleton("(1 (2 3) 4)").unwrap();
        let tree = SemanticTree::build(&sexp, 0).unwrap();
        insta::assert_snapshot!(to_treeviz(&tree), @r###"
        MJX0-1 [1]
          MJX0-2 [2]
            MJX0-3 [3]
          MJX0-4 [4]
        "###);
    }

    #[test]
    fn renders_single_leaf() {
        let tree = SemanticTree::build(&parse_skeleton("5").unwrap(), 2).unwrap();
        assert_eq!(to_treeviz(&tree), "MJX2-5 [5]");
    }
}
