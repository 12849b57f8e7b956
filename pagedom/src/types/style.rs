/// Pointer affordance shown when the mouse is over an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

impl Cursor {
    /// The CSS keyword for this cursor.
    pub fn css(&self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        }
    }
}

/// Inline style state scripts may mutate.
///
/// Only the properties the enhancement behaviors touch are modeled; unset
/// properties mean "whatever the stylesheet says".
#[derive(Debug, Clone, Default)]
pub struct Style {
    pub cursor: Option<Cursor>,
    pub background: Option<String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }
}
