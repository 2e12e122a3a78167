//! Focus and highlight adapter
//!
//! Routes a keyboard-input stream to the navigator owning the currently
//! focused expression and reflects the resulting active node back onto
//! the DOM. The registry is an explicit context object passed around by
//! the caller, not module-level state, so independent documents (and
//! tests) never share navigators.
//!
//! Per recognized key the handler runs strictly in order: unhighlight the
//! old active node, step the navigator, highlight the new active node,
//! update `aria-activedescendant` on the expression root. Unrecognized
//! keys and unknown target ids are ignored.

use crate::dom::attrs::{get_attr, in_svg, remove_attr, set_attr};
use crate::dom::query::find_by_id;
use crate::navigate::{Direction, Navigator};
use crossterm::event::{KeyCode, KeyEvent};
use markup5ever_rcdom::Handle;

/// Highlight color applied to the active node's DOM counterpart
const HIGHLIGHT_COLOR: &str = "lightblue";

struct NavEntry {
    name: String,
    navigator: Navigator,
    root: Handle,
}

/// Registry mapping expression-root names to their navigators.
///
/// Populated once at discovery time, read-mostly afterwards. Entries keep
/// document order, which is also the order expressions were discovered in.
#[derive(Default)]
pub struct NavigatorRegistry {
    entries: Vec<NavEntry>,
}

impl NavigatorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        NavigatorRegistry::default()
    }

    /// Register a navigator for the expression rooted at `root`,
    /// reachable under the given document-unique name.
    pub fn register(&mut self, name: String, navigator: Navigator, root: Handle) {
        self.entries.push(NavEntry {
            name,
            navigator,
            root,
        });
    }

    /// Number of registered expressions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any expression is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names in discovery order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// The navigator registered under `name`, if any
    pub fn navigator(&self, name: &str) -> Option<&Navigator> {
        self.find(name).map(|e| &e.navigator)
    }

    /// The active node's name for the expression registered under `name`
    pub fn active_name(&self, name: &str) -> Option<&str> {
        self.find(name).map(|e| e.navigator.active_name())
    }

    /// The active node's speech text (its `aria-label`), if it has one
    pub fn active_speech(&self, name: &str) -> Option<String> {
        let entry = self.find(name)?;
        let node = find_by_id(&entry.root, entry.navigator.active_name())?;
        get_attr(&node, "aria-label")
    }

    /// Handle one key event targeted at the element with id `focused_id`.
    ///
    /// Returns `true` when the event was recognized and dispatched to a
    /// navigator. Boundary moves still count as handled; the navigator
    /// treats them as no-ops internally.
    pub fn handle_key(&mut self, focused_id: &str, key: KeyEvent) -> bool {
        let Some(direction) = map_key(key.code) else {
            return false;
        };
        let Some(entry) = self.entries.iter_mut().find(|e| e.name == focused_id) else {
            return false;
        };

        let previous = entry.navigator.active_name().to_string();
        if let Some(node) = find_by_id(&entry.root, &previous) {
            unhighlight(&node);
        }
        entry.navigator.step(direction);
        let active = entry.navigator.active_name().to_string();
        if let Some(node) = find_by_id(&entry.root, &active) {
            highlight(&node);
        }
        set_attr(&entry.root, "aria-activedescendant", &active);
        true
    }

    fn find(&self, name: &str) -> Option<&NavEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

/// Map a key code to a directional move; everything else is ignored.
pub fn map_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Apply the visual highlight. Idempotent: both branches overwrite with
/// the same value on repeat application.
fn highlight(node: &Handle) {
    if in_svg(node) {
        set_attr(node, "class", HIGHLIGHT_COLOR);
    } else {
        set_attr(node, "style", &format!("background-color: {HIGHLIGHT_COLOR}"));
    }
}

fn unhighlight(node: &Handle) {
    if in_svg(node) {
        remove_attr(node, "class");
    } else {
        remove_attr(node, "style");
    }
}
