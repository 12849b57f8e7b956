use crate::element::{find_element, Content, Element};
use crate::types::Tag;

/// Element filter for document-order scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Elements with this tag.
    Tag(Tag),
    /// Elements carrying this class.
    Class(String),
}

impl Selector {
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Selector::Tag(tag) => element.tag == *tag,
            Selector::Class(name) => element.has_class(name),
        }
    }
}

/// Collect ids of all elements matching `selector`, in document order.
/// The root itself is included when it matches.
pub fn select(root: &Element, selector: &Selector) -> Vec<String> {
    let mut result = Vec::new();
    select_recursive(root, selector, &mut result);
    result
}

/// Collect ids of descendants of `ancestor_id` matching `selector`, in
/// document order. The ancestor itself is never included; an unknown
/// ancestor yields an empty list.
pub fn select_within(root: &Element, ancestor_id: &str, selector: &Selector) -> Vec<String> {
    let Some(ancestor) = find_element(root, ancestor_id) else {
        return Vec::new();
    };

    let mut result = Vec::new();
    if let Content::Children(children) = &ancestor.content {
        for child in children {
            select_recursive(child, selector, &mut result);
        }
    }
    result
}

fn select_recursive(element: &Element, selector: &Selector, result: &mut Vec<String>) {
    if selector.matches(element) {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            select_recursive(child, selector, result);
        }
    }
}
