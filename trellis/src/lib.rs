pub mod boot;
pub mod context;
pub mod dom;
pub mod rows;
pub mod widgets;

pub use boot::ready;

pub mod prelude {
    pub use crate::boot::ready;
    pub use crate::context::{ContextError, PageContext, CONTEXT_ELEMENT_ID};
    pub use crate::dom::{ActivationHandler, Cursor, Dom, Navigator, Selector};
    pub use crate::rows::bind_clickable_rows;
    pub use crate::widgets::{
        mount_json_fields, mount_selects, JsonViewConfig, SelectConfig, WidgetHost,
        JSON_FIELD_CLASS,
    };
}
