//! Error types for the menu subsystem.
//!
//! Menu state never fails at runtime: out-of-range selections wrap, empty
//! menus collapse to a placeholder and stale ids inside event handlers are
//! ignored. Only operations that address a menu or widget by id, and loading
//! configuration, return errors.

use std::path::PathBuf;

use crate::menu::MenuId;
use crate::widget::WidgetId;

/// Result type alias for menu operations.
pub type Result<T> = std::result::Result<T, CascadeError>;

/// Errors returned by [`Manager`](crate::Manager) operations.
#[derive(Debug, thiserror::Error)]
pub enum CascadeError {
    /// The menu id does not name a live menu.
    #[error("Unknown menu {0:?}")]
    UnknownMenu(MenuId),

    /// The widget id does not name a registered host widget.
    #[error("Unknown widget {0:?}")]
    UnknownWidget(WidgetId),

    /// The operation requires a context menu but the id names another kind.
    #[error("Menu {0:?} is not a context menu")]
    NotAContextMenu(MenuId),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors that can occur while loading [`CascadeConfig`](crate::CascadeConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
