//! Third-party widget adapters.
//!
//! The widgets themselves (a JSON tree view and a searchable select) live
//! outside this crate. The passes here only find the marked elements and
//! hand each one to the host with the right configuration; the host owns
//! the actual widget libraries and everything after the mount.

pub mod json;
pub mod select;

pub use json::{mount_json_fields, JsonViewConfig, JSON_FIELD_CLASS};
pub use select::{mount_selects, SelectConfig};

use serde_json::Value;

/// Mount sink for the widget passes.
///
/// Implemented by whatever embeds the widget libraries; tests implement it
/// with a recorder.
pub trait WidgetHost {
    /// Mount a JSON tree view on `target`, rendering `value`.
    fn mount_json_view(&mut self, target: &str, value: Value, config: &JsonViewConfig);

    /// Mount a searchable select on `target`.
    fn mount_select(&mut self, target: &str, config: &SelectConfig);
}
