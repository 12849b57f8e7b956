mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find the element with `id`, depth first.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    match &root.content {
        Content::Children(children) => children.iter().find_map(|child| find_element(child, id)),
        _ => None,
    }
}

/// Find the element with `id`, depth first, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    match &mut root.content {
        Content::Children(children) => children
            .iter_mut()
            .find_map(|child| find_element_mut(child, id)),
        _ => None,
    }
}

/// Concatenated text of a subtree, in document order.
pub fn text_content(root: &Element) -> String {
    let mut out = String::new();
    collect_text(root, &mut out);
    out
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
        Content::None => {}
    }
}
