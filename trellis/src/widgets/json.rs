//! JSON tree view adapter.

use serde::Serialize;
use serde::Serializer;
use serde_json::Value;

use super::WidgetHost;
use crate::dom::{Dom, Selector};

/// Class marking elements whose text is a JSON payload to render.
pub const JSON_FIELD_CLASS: &str = "json-field";

/// Configuration for the JSON tree view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JsonViewConfig {
    /// Label shown on the root node. The viewer expects literal `false` to
    /// hide the label entirely, which is what rendered pages want, so an
    /// absent label serializes as `false` rather than being omitted.
    #[serde(rename = "name", serialize_with = "root_label_or_false")]
    pub root_label: Option<String>,
}

/// Serializes the root label, or literal `false` when absent.
fn root_label_or_false<S>(label: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match label {
        Some(label) => serializer.serialize_str(label),
        None => serializer.serialize_bool(false),
    }
}

/// Render every marked JSON field through the host.
///
/// Fields whose text is not valid JSON are logged and skipped; one bad
/// payload never hides the rest.
pub fn mount_json_fields<D, H>(dom: &D, host: &mut H)
where
    D: Dom + ?Sized,
    H: WidgetHost + ?Sized,
{
    let config = JsonViewConfig::default();

    for field in dom.select_all(&Selector::Class(JSON_FIELD_CLASS)) {
        let payload = dom.text_content(&field);
        match serde_json::from_str::<Value>(&payload) {
            Ok(value) => host.mount_json_view(&field, value, &config),
            Err(err) => log::error!("[widgets] invalid json payload in {}: {}", field, err),
        }
    }
}
