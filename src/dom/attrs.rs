//! Attribute and node helpers over `markup5ever_rcdom`.

use html5ever::{ns, Attribute, LocalName, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Read an attribute value from an element; `None` for non-elements and
/// missing attributes.
pub fn get_attr(node: &Handle, name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| a.name.local.as_ref() == name)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// Whether an element carries the attribute
pub fn has_attr(node: &Handle, name: &str) -> bool {
    get_attr(node, name).is_some()
}

/// Set an attribute on an element, replacing any existing value.
/// Non-elements are left untouched.
pub fn set_attr(node: &Handle, name: &str, value: &str) {
    if let NodeData::Element { attrs, .. } = &node.data {
        let mut attrs = attrs.borrow_mut();
        if let Some(existing) = attrs.iter_mut().find(|a| a.name.local.as_ref() == name) {
            existing.value = value.to_string().into();
        } else {
            attrs.push(Attribute {
                name: QualName::new(None, ns!(), LocalName::from(name)),
                value: value.to_string().into(),
            });
        }
    }
}

/// Remove an attribute from an element if present
pub fn remove_attr(node: &Handle, name: &str) {
    if let NodeData::Element { attrs, .. } = &node.data {
        attrs.borrow_mut().retain(|a| a.name.local.as_ref() != name);
    }
}

/// The element's local tag name, `None` for non-elements
pub fn element_name(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

/// Whether the node is a text node
pub fn is_text(node: &Handle) -> bool {
    matches!(node.data, NodeData::Text { .. })
}

/// Whether the node sits inside an `svg` subtree (itself included)
pub fn in_svg(node: &Handle) -> bool {
    let mut current = Some(node.clone());
    while let Some(n) = current {
        if element_name(&n).as_deref() == Some("svg") {
            return true;
        }
        let parent = n.parent.take();
        let next = parent.as_ref().and_then(|weak| weak.upgrade());
        n.parent.set(parent);
        current = next;
    }
    false
}

/// Create a detached element with the given attributes
pub fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: QualName::new(None, ns!(html), LocalName::from(tag)),
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a detached text node
pub fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Append a child, wiring its parent back-pointer
pub fn append_child(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_roundtrips() {
        let element = create_element("span", vec![]);
        assert_eq!(get_attr(&element, "id"), None);
        set_attr(&element, "id", "MJX0-1");
        assert_eq!(get_attr(&element, "id").as_deref(), Some("MJX0-1"));
    }

    #[test]
    fn set_replaces_existing_value() {
        let element = create_element("span", vec![("role", "presentation")]);
        set_attr(&element, "role", "group");
        assert_eq!(get_attr(&element, "role").as_deref(), Some("group"));
        // Still a single attribute, not a duplicate
        if let NodeData::Element { attrs, .. } = &element.data {
            assert_eq!(attrs.borrow().len(), 1);
        }
    }

    #[test]
    fn remove_deletes_the_attribute() {
        let element = create_element("span", vec![("aria-hidden", "true")]);
        remove_attr(&element, "aria-hidden");
        assert!(!has_attr(&element, "aria-hidden"));
        // Removing again is harmless
        remove_attr(&element, "aria-hidden");
    }

    #[test]
    fn text_nodes_have_no_attributes() {
        let text = create_text("x");
        assert_eq!(get_attr(&text, "id"), None);
        set_attr(&text, "id", "ignored");
        assert_eq!(get_attr(&text, "id"), None);
    }

    #[test]
    fn in_svg_walks_ancestors() {
        let svg = create_element("svg", vec![]);
        let group = create_element("g", vec![]);
        let label = create_element("text", vec![]);
        append_child(&group, label.clone());
        append_child(&svg, group.clone());

        assert!(in_svg(&svg));
        assert!(in_svg(&label));
        assert!(!in_svg(&create_element("span", vec![])));
    }
}
