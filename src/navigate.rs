//! Focus-navigation state machine
//!
//! A [`Navigator`] holds exactly one active node of one semantic tree and
//! exposes four directional moves over tree adjacency. All moves are
//! total: hitting a boundary (root, leaf, first or last sibling) is a
//! defined no-op, never an error. This is pure state-transition logic
//! with no DOM or event-loop dependency; the focus adapter is a thin
//! shell around it.

use crate::semantic::{NodeIx, SemanticTree};
use std::rc::Rc;

/// A directional move through the semantic tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// To the parent
    Up,
    /// To the first child (first in reading order)
    Down,
    /// To the previous sibling
    Left,
    /// To the next sibling
    Right,
}

/// Keyboard-navigation state for one expression.
///
/// The tree is shared and read-only; the active node is the only mutable
/// state and changes only through [`step`](Navigator::step). Starts at
/// the root and runs for the lifetime of the page.
#[derive(Debug, Clone)]
pub struct Navigator {
    tree: Rc<SemanticTree>,
    active: NodeIx,
}

impl Navigator {
    /// Create a navigator with the root as the active node
    pub fn new(tree: Rc<SemanticTree>) -> Self {
        let active = tree.root();
        Navigator { tree, active }
    }

    /// The tree this navigator was built from
    pub fn tree(&self) -> &SemanticTree {
        &self.tree
    }

    /// The currently active node index
    pub fn active(&self) -> NodeIx {
        self.active
    }

    /// The disambiguated name of the active node
    pub fn active_name(&self) -> &str {
        &self.tree.node(self.active).name
    }

    /// Apply one directional move; a no-op when the move has no target.
    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Up => {
                if let Some(parent) = self.tree.node(self.active).parent {
                    self.active = parent;
                }
            }
            Direction::Down => {
                if let Some(&first) = self.tree.node(self.active).children.first() {
                    self.active = first;
                }
            }
            Direction::Left => {
                if let Some(previous) = self.sibling(-1) {
                    self.active = previous;
                }
            }
            Direction::Right => {
                if let Some(next) = self.sibling(1) {
                    self.active = next;
                }
            }
        }
    }

    fn sibling(&self, offset: isize) -> Option<NodeIx> {
        let parent = self.tree.node(self.active).parent?;
        let siblings = &self.tree.node(parent).children;
        let index = self.tree.sibling_index(self.active)?;
        let target = index.checked_add_signed(offset)?;
        siblings.get(target).copied()
    }
}
