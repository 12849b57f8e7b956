/// High-level events with element targeting.
///
/// The host shell owns input handling and target resolution; the page only
/// consumes events that already name an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer click. `target` is the id of the element that was hit, or
    /// `None` when the click landed on nothing addressable.
    Click { target: Option<String> },
    /// Keyboard-originated activation of an element (Enter or Space while
    /// it holds focus).
    Activate { target: String },
}
