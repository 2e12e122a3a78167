//! Shielding inert text from assistive technology.
//!
//! Raw text nodes inside rendered math are pure decoration once the
//! ownership graph carries the semantics; left bare they get announced
//! twice. This pass wraps each of them in a `<span aria-hidden="true">`
//! at the same child position. Embedded `svg` regions are skipped
//! entirely, as is anything already hidden (including wrappers from an
//! earlier run, which makes the pass idempotent).

use super::attrs::{create_element, element_name, get_attr, is_text};
use markup5ever_rcdom::Handle;
use std::rc::Rc;

/// Wrap every bare text node under `root` (outside `svg`) in a hidden span.
pub fn shield_inert_text(root: &Handle) {
    let mut stack = vec![root.clone()];
    while let Some(node) = stack.pop() {
        if element_name(&node).as_deref() == Some("svg") {
            continue;
        }
        if get_attr(&node, "aria-hidden").as_deref() == Some("true") {
            continue;
        }

        let mut children = node.children.borrow_mut();
        for slot in children.iter_mut() {
            if is_text(slot) {
                let span = create_element("span", vec![("aria-hidden", "true")]);
                let text = slot.clone();
                text.parent.set(Some(Rc::downgrade(&span)));
                span.children.borrow_mut().push(text);
                span.parent.set(Some(Rc::downgrade(&node)));
                *slot = span;
            }
        }
        stack.extend(children.iter().rev().cloned());
    }
}
