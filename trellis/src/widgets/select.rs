//! Searchable select adapter.

use serde::Serialize;

use super::WidgetHost;
use crate::dom::{Dom, Selector};

/// Configuration handed to the select widget.
///
/// Serializes to the widget library's option object: only the fields a
/// variant actually sets end up in the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,

    /// Option count below which the search box is hidden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_results_for_search: Option<u32>,

    /// Show a clear button once something is selected.
    #[serde(skip_serializing_if = "is_false")]
    pub allow_clear: bool,

    /// Accept free-typed entries alongside the listed options.
    #[serde(skip_serializing_if = "is_false")]
    pub tags: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Characters that finish a free-typed entry.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub token_separators: Vec<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl SelectConfig {
    fn themed() -> Self {
        Self {
            theme: Some("bootstrap-5".to_string()),
            width: Some("100%".to_string()),
            ..Self::default()
        }
    }

    /// Plain searchable select; the search box appears past ten options.
    pub fn standard() -> Self {
        Self {
            minimum_results_for_search: Some(10),
            allow_clear: true,
            ..Self::themed()
        }
    }

    /// Select that also accepts free-typed tags.
    pub fn tag() -> Self {
        Self {
            allow_clear: true,
            tags: true,
            placeholder: Some("Select or type tags".to_string()),
            ..Self::themed()
        }
    }

    /// Multi-select; same searchable behavior as `standard`.
    pub fn multiple() -> Self {
        Self::standard()
    }

    /// Tag list split on commas.
    pub fn tags() -> Self {
        Self {
            tags: true,
            token_separators: vec![",".to_string()],
            ..Self::themed()
        }
    }
}

/// Marker classes and the configuration each one gets.
pub fn variants() -> [(&'static str, SelectConfig); 4] {
    [
        ("select2", SelectConfig::standard()),
        ("select2-tag", SelectConfig::tag()),
        ("select2-multiple", SelectConfig::multiple()),
        ("select2-tags", SelectConfig::tags()),
    ]
}

/// Mount a select on every element marked with a variant class.
pub fn mount_selects<D, H>(dom: &D, host: &mut H)
where
    D: Dom + ?Sized,
    H: WidgetHost + ?Sized,
{
    for (class, config) in variants() {
        for node in dom.select_all(&Selector::Class(class)) {
            host.mount_select(&node, &config);
        }
    }
}
