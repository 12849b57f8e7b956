use std::collections::HashMap;
use std::fmt;

use crate::element::{find_element, find_element_mut, text_content, Element};
use crate::event::Event;
use crate::location::Location;
use crate::query;
use crate::query::Selector;
use crate::types::{Cursor, Tag};

/// Handler invoked when an element is activated.
pub type ActivationHandler = Box<dyn FnMut(&mut Location)>;

/// A rendered page: the element tree plus the interactive state scripts
/// attach to it.
///
/// The tree arrives from the server renderer and is owned here; scripts
/// register activation handlers and mutate styles, and the host shell
/// feeds events in. Handlers stack: registering twice on one element runs
/// both, in registration order.
pub struct Page {
    root: Element,
    handlers: HashMap<String, Vec<ActivationHandler>>,
    location: Location,
}

impl Page {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            handlers: HashMap::new(),
            location: Location::new(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Find an element by id.
    pub fn find(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    /// Find an element by id, mutably.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    /// Ids of all elements matching `selector`, in document order.
    pub fn select(&self, selector: &Selector) -> Vec<String> {
        query::select(&self.root, selector)
    }

    /// Ids of descendants of `ancestor_id` matching `selector`, in
    /// document order.
    pub fn select_within(&self, ancestor_id: &str, selector: &Selector) -> Vec<String> {
        query::select_within(&self.root, ancestor_id, selector)
    }

    /// Attribute value on an element, if both exist.
    pub fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.find(id)
            .and_then(|element| element.attribute(name).map(str::to_string))
    }

    /// Concatenated text of an element's subtree. Empty for unknown ids.
    pub fn text_content(&self, id: &str) -> String {
        self.find(id).map(text_content).unwrap_or_default()
    }

    /// Set the cursor affordance on an element.
    /// Returns false when the element does not exist.
    pub fn set_cursor(&mut self, id: &str, cursor: Cursor) -> bool {
        match self.find_mut(id) {
            Some(element) => {
                element.style.cursor = Some(cursor);
                true
            }
            None => false,
        }
    }

    /// Register an activation handler on an element.
    pub fn on_activate(&mut self, id: &str, handler: ActivationHandler) {
        self.handlers.entry(id.to_string()).or_default().push(handler);
    }

    /// Number of handlers currently bound to an element.
    pub fn handler_count(&self, id: &str) -> usize {
        self.handlers.get(id).map(Vec::len).unwrap_or(0)
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Dispatch one event against the page.
    pub fn dispatch(&mut self, event: Event) {
        match event {
            Event::Click { target: Some(target) } => self.activate(&target),
            Event::Click { target: None } => {}
            Event::Activate { target } => self.activate(&target),
        }
    }

    /// Convenience: click the element with `id`.
    pub fn click(&mut self, id: &str) {
        self.dispatch(Event::Click {
            target: Some(id.to_string()),
        });
    }

    fn activate(&mut self, id: &str) {
        log::debug!("[page] activate: {}", id);

        if let Some(handlers) = self.handlers.get_mut(id) {
            for handler in handlers.iter_mut() {
                handler(&mut self.location);
            }
        }

        // Native hyperlink behavior: an anchor with a target navigates on
        // its own, whether or not anything was registered on it.
        if let Some(element) = find_element(&self.root, id) {
            if element.tag == Tag::A {
                if let Some(href) = element.attribute("href") {
                    let href = href.to_string();
                    self.location.assign(href);
                }
            }
        }
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("root", &self.root)
            .field("handlers", &self.handlers.len())
            .field("location", &self.location)
            .finish()
    }
}
