//! Server-provided page context.

use serde::Deserialize;

use crate::dom::Dom;

/// Id of the element carrying the context payload.
pub const CONTEXT_ELEMENT_ID: &str = "js-context";

/// Context the server embeds in the rendered page for enhancement passes
/// to read.
///
/// The payload is a grab bag; unknown keys are ignored so the server can
/// add fields without breaking older bundles.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageContext {
    /// Ids of the tables whose rows should become clickable.
    #[serde(default)]
    pub target_tables: Option<Vec<String>>,
}

/// Errors that can occur while reading the page context.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    /// The rendered page has no context element.
    #[error("context element #js-context not found")]
    MissingElement,

    /// The context element is present but carries no payload.
    #[error("context element is empty")]
    EmptyPayload,

    /// The payload is not valid JSON.
    #[error("context parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl PageContext {
    /// Parse a context payload from raw JSON.
    pub fn from_json(payload: &str) -> Result<Self, ContextError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Read and parse the context payload embedded in a document.
    pub fn from_dom<D: Dom + ?Sized>(dom: &D) -> Result<Self, ContextError> {
        let node = dom
            .find_by_id(CONTEXT_ELEMENT_ID)
            .ok_or(ContextError::MissingElement)?;

        let payload = dom.text_content(&node);
        if payload.trim().is_empty() {
            return Err(ContextError::EmptyPayload);
        }

        Self::from_json(&payload)
    }
}
