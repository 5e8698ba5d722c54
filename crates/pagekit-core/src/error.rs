//! Error types for page behaviour

use std::fmt;
use thiserror::Error;

/// The page element a lookup was trying to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementRole {
    /// Navigation panel whose classes are toggled.
    NavPanel,
    /// Vector icon nested inside the menu button.
    MenuIcon,
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NavPanel => "navigation panel",
            Self::MenuIcon => "menu icon",
        })
    }
}

/// Errors raised while wiring behaviour onto a document.
#[derive(Error, Debug)]
pub enum PageError {
    /// A required element could not be found.
    #[error("missing {role} element ({selector})")]
    MissingElement {
        /// What the element is used for.
        role: ElementRole,
        /// Id or selector that was looked up.
        selector: String,
    },

    /// The underlying DOM rejected an operation.
    #[error("DOM error: {0}")]
    Dom(String),

    /// Configuration parsed but failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed.
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PageError {
    pub(crate) fn missing(role: ElementRole, selector: impl Into<String>) -> Self {
        Self::MissingElement {
            role,
            selector: selector.into(),
        }
    }
}

/// Result type for page operations
pub type PageResult<T> = Result<T, PageError>;
