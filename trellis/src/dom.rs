//! Document access trait for enhancement passes.
//!
//! Enhancement passes are written against this trait rather than a concrete
//! document so they:
//! - Stay testable against recording fakes
//! - Never depend on how the host shell represents its tree
//! - Can be rewired to a different backend without touching pass logic
//!
//! Node handles are opaque strings. With the pagedom backend they are
//! element ids, but passes must not assume that.

use pagedom::{Page, Tag};

/// Cursor affordance a pass can request on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Signals that the node responds to activation.
    Pointer,
}

/// Node query, by tag name or by class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Tag(&'static str),
    Class(&'static str),
}

/// Navigation sink handed to activation handlers.
///
/// Handlers never navigate directly; they ask the navigator to, which lets
/// tests observe requested targets without leaving the process.
pub trait Navigator {
    /// Request navigation to `target`, exactly as given.
    fn assign(&mut self, target: &str);
}

/// Handler invoked when a node is activated.
pub type ActivationHandler = Box<dyn FnMut(&mut dyn Navigator)>;

/// Trait for documents that enhancement passes run against.
///
/// Lookups are read-only and return handles; `set_cursor` and
/// `register_activation` are the only mutations a pass can perform.
/// Registering on the same node twice stacks both handlers.
pub trait Dom {
    /// Resolve an id to a node handle, if the node exists.
    fn find_by_id(&self, id: &str) -> Option<String>;

    /// Handles of all nodes matching `selector`, in document order.
    fn select_all(&self, selector: &Selector) -> Vec<String>;

    /// Handles of descendants of `node` matching `selector`, in document
    /// order. The node itself is never included.
    fn select_within(&self, node: &str, selector: &Selector) -> Vec<String>;

    /// Attribute value on a node. None when the node or attribute is absent.
    fn attribute(&self, node: &str, name: &str) -> Option<String>;

    /// Concatenated text of a node's subtree.
    fn text_content(&self, node: &str) -> String;

    /// Set the cursor affordance on a node.
    fn set_cursor(&mut self, node: &str, cursor: Cursor);

    /// Register an activation handler on a node.
    fn register_activation(&mut self, node: &str, handler: ActivationHandler);
}

impl Navigator for pagedom::Location {
    fn assign(&mut self, target: &str) {
        pagedom::Location::assign(self, target);
    }
}

fn page_selector(selector: &Selector) -> pagedom::Selector {
    match selector {
        Selector::Tag(name) => pagedom::Selector::Tag(Tag::from_name(name)),
        Selector::Class(name) => pagedom::Selector::Class((*name).to_string()),
    }
}

fn page_cursor(cursor: Cursor) -> pagedom::Cursor {
    match cursor {
        Cursor::Default => pagedom::Cursor::Default,
        Cursor::Pointer => pagedom::Cursor::Pointer,
    }
}

impl Dom for Page {
    fn find_by_id(&self, id: &str) -> Option<String> {
        self.find(id).map(|element| element.id.clone())
    }

    fn select_all(&self, selector: &Selector) -> Vec<String> {
        self.select(&page_selector(selector))
    }

    fn select_within(&self, node: &str, selector: &Selector) -> Vec<String> {
        Page::select_within(self, node, &page_selector(selector))
    }

    fn attribute(&self, node: &str, name: &str) -> Option<String> {
        Page::attribute(self, node, name)
    }

    fn text_content(&self, node: &str) -> String {
        Page::text_content(self, node)
    }

    fn set_cursor(&mut self, node: &str, cursor: Cursor) {
        Page::set_cursor(self, node, page_cursor(cursor));
    }

    fn register_activation(&mut self, node: &str, mut handler: ActivationHandler) {
        self.on_activate(node, Box::new(move |location| handler(location)));
    }
}
