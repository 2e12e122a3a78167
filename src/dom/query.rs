//! Worklist-based DOM search.
//!
//! All lookups run over an explicit stack rather than recursion, so
//! deeply nested markup cannot exhaust the call stack. Traversal is
//! preorder, which matches document order.

use super::attrs::get_attr;
use markup5ever_rcdom::Handle;

/// Find the first descendant of `scope` whose attribute `name` equals
/// `value`. The scope node itself is not considered.
pub fn find_by_attr(scope: &Handle, name: &str, value: &str) -> Option<Handle> {
    let mut stack: Vec<Handle> = scope.children.borrow().iter().rev().cloned().collect();
    while let Some(node) = stack.pop() {
        if get_attr(&node, name).as_deref() == Some(value) {
            return Some(node);
        }
        stack.extend(node.children.borrow().iter().rev().cloned());
    }
    None
}

/// Collect every node under (and including) `scope` that carries the
/// attribute, in document order.
pub fn collect_with_attr(scope: &Handle, name: &str) -> Vec<Handle> {
    let mut found = Vec::new();
    let mut stack = vec![scope.clone()];
    while let Some(node) = stack.pop() {
        if get_attr(&node, name).is_some() {
            found.push(node.clone());
        }
        stack.extend(node.children.borrow().iter().rev().cloned());
    }
    found
}

/// Find the node whose `id` attribute equals `id`, checking `scope`
/// itself first and then its descendants.
pub fn find_by_id(scope: &Handle, id: &str) -> Option<Handle> {
    if get_attr(scope, "id").as_deref() == Some(id) {
        return Some(scope.clone());
    }
    find_by_attr(scope, "id", id)
}
