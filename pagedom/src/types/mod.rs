mod style;
mod tag;

pub use style::{Cursor, Style};
pub use tag::Tag;
