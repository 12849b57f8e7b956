use std::fmt;

/// Markup vocabulary of a rendered page.
///
/// Tags outside the set the model cares about are carried verbatim in
/// `Other`, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Html,
    Body,
    Div,
    Span,
    Table,
    THead,
    TBody,
    Tr,
    Th,
    Td,
    A,
    Pre,
    Select,
    Option,
    Script,
    Other(String),
}

impl Tag {
    /// Parse a tag name (case-insensitive).
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "html" => Tag::Html,
            "body" => Tag::Body,
            "div" => Tag::Div,
            "span" => Tag::Span,
            "table" => Tag::Table,
            "thead" => Tag::THead,
            "tbody" => Tag::TBody,
            "tr" => Tag::Tr,
            "th" => Tag::Th,
            "td" => Tag::Td,
            "a" => Tag::A,
            "pre" => Tag::Pre,
            "select" => Tag::Select,
            "option" => Tag::Option,
            "script" => Tag::Script,
            other => Tag::Other(other.to_string()),
        }
    }

    /// The lowercase tag name.
    pub fn name(&self) -> &str {
        match self {
            Tag::Html => "html",
            Tag::Body => "body",
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::Table => "table",
            Tag::THead => "thead",
            Tag::TBody => "tbody",
            Tag::Tr => "tr",
            Tag::Th => "th",
            Tag::Td => "td",
            Tag::A => "a",
            Tag::Pre => "pre",
            Tag::Select => "select",
            Tag::Option => "option",
            Tag::Script => "script",
            Tag::Other(name) => name,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
