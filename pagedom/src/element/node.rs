use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Style, Tag};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// One element of a rendered page.
///
/// Elements arrive fully built from the server renderer; scripts only read
/// them and mutate `style`. Every element has an id so handlers and queries
/// can address it; elements the renderer did not name get a generated one.
#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Markup state
    pub attributes: HashMap<String, String>,
    pub classes: Vec<String>,

    // Inline style (mutable by scripts)
    pub style: Style,

    // Content
    pub content: Content,
}

impl Element {
    /// Create an element with a generated id.
    pub fn new(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.name()),
            tag,
            attributes: HashMap::new(),
            classes: Vec::new(),
            style: Style::default(),
            content: Content::None,
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn span() -> Self {
        Self::new(Tag::Span)
    }

    pub fn table() -> Self {
        Self::new(Tag::Table)
    }

    pub fn thead() -> Self {
        Self::new(Tag::THead)
    }

    pub fn tbody() -> Self {
        Self::new(Tag::TBody)
    }

    pub fn tr() -> Self {
        Self::new(Tag::Tr)
    }

    pub fn th() -> Self {
        Self::new(Tag::Th)
    }

    pub fn td() -> Self {
        Self::new(Tag::Td)
    }

    /// Create a hyperlink with its navigation target set.
    pub fn anchor(href: impl Into<String>) -> Self {
        Self::new(Tag::A).attr("href", href)
    }

    pub fn pre() -> Self {
        Self::new(Tag::Pre)
    }

    pub fn select() -> Self {
        Self::new(Tag::Select)
    }

    pub fn option() -> Self {
        Self::new(Tag::Option)
    }

    /// Create a non-executing script element, the carrier for embedded
    /// JSON payloads.
    pub fn script() -> Self {
        Self::new(Tag::Script)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Markup state
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.classes.push(name.into());
        self
    }

    // Style
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    /// Append a child, replacing any text content.
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            content => *content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            content => *content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Accessors
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|class| class == name)
    }
}
