/// What an element holds: nothing, a text run, or child elements.
///
/// An element holds either text or children, not both; that is all the
/// pages driving these behaviors need.
#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
}
