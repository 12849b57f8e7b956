pub mod element;
pub mod event;
pub mod location;
pub mod page;
pub mod query;
pub mod types;

pub use element::{find_element, find_element_mut, text_content, Content, Element};
pub use event::Event;
pub use location::Location;
pub use page::{ActivationHandler, Page};
pub use query::{select, select_within, Selector};
pub use types::{Cursor, Style, Tag};
