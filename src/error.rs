//! Widget error taxonomy.

use thiserror::Error;

use crate::card::Side;

/// Errors produced by the flashcard widget.
///
/// Only [`FlashcardError::Parse`] is ever returned to the host. The other
/// variants are logged where they occur and the widget carries on.
#[derive(Debug, Error)]
pub enum FlashcardError {
    /// Unrecognized attribute name, or a value outside the attribute's domain.
    #[error("attribute '{name}' is not handled: {reason}")]
    Configuration { name: String, reason: String },

    /// The `value` attribute did not contain a JSON object.
    #[error("failed to parse card model: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// A face value matched none of image, short text or long text.
    #[error("{side} face has no content to render")]
    ContentTypeUnresolved { side: Side },
}

impl FlashcardError {
    pub(crate) fn configuration(name: &str, reason: impl Into<String>) -> Self {
        Self::Configuration {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
