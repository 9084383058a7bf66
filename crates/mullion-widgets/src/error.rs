//! Error types for the widget system.

use crate::widgets::WidgetId;
use std::fmt;

/// Errors that can occur during widget lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// No constructor registered for the given type tag.
    UnknownTag {
        /// The tag that failed to resolve.
        tag: String,
    },

    /// The widget was already destroyed, or was never created by this
    /// factory.
    AlreadyDestroyed {
        /// The id of the offending widget.
        id: WidgetId,
    },
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetError::UnknownTag { tag } => {
                write!(f, "no widget registered for tag: {:?}", tag)
            }
            WidgetError::AlreadyDestroyed { id } => {
                write!(f, "widget {} is not live (already destroyed?)", id.get())
            }
        }
    }
}

impl std::error::Error for WidgetError {}

/// Result type for widget operations.
pub type WidgetResult<T> = Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_tag() {
        let err = WidgetError::UnknownTag {
            tag: "slider".to_string(),
        };
        assert!(err.to_string().contains("slider"));
    }
}
