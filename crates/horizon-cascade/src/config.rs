//! Configuration for the menu subsystem.
//!
//! [`CascadeConfig`] is deserialized from TOML. Every field has a default, so a
//! file only needs the values it changes:
//!
//! ```
//! use horizon_cascade::CascadeConfig;
//!
//! let config = CascadeConfig::from_toml_str(r#"
//! menu_delay_ms = 250
//!
//! [screen]
//! width = 1024
//! height = 768
//! "#).unwrap();
//! assert_eq!(config.screen.width, 1024);
//! assert_eq!(config.placement.seam_overlap, 2);
//! ```

use std::path::Path;
use std::time::Duration;

use horizon_cascade_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::Size;

/// Default submenu-open delay in milliseconds.
pub const DEFAULT_MENU_DELAY_MS: i64 = 500;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CascadeConfig {
    /// Dwell time before a hovered entry opens its submenu.
    ///
    /// Signed so that a negative value from a hand-edited file is accepted and
    /// then clamped by [`CascadeConfig::menu_delay`].
    pub menu_delay_ms: i64,
    /// Screen (render target) size.
    pub screen: ScreenConfig,
    /// Pixel nudges applied when a submenu is clamped against the screen.
    pub placement: PlacementConfig,
    /// Paddings used by auto-sizing and drawing.
    pub metrics: MetricsConfig,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            menu_delay_ms: DEFAULT_MENU_DELAY_MS,
            screen: ScreenConfig::default(),
            placement: PlacementConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

impl CascadeConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        tracing::debug!(target: targets::CONFIG, ?config, "configuration parsed");
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|err| ConfigError::io(path, err))?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loading configuration");
        Self::from_toml_str(&source)
    }

    /// The submenu-open delay, clamped to be non-negative.
    pub fn menu_delay(&self) -> Duration {
        if self.menu_delay_ms < 0 {
            tracing::warn!(
                target: targets::CONFIG,
                menu_delay_ms = self.menu_delay_ms,
                "negative menu delay clamped to zero"
            );
            return Duration::ZERO;
        }
        Duration::from_millis(self.menu_delay_ms.unsigned_abs())
    }
}

/// Screen size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl ScreenConfig {
    /// The screen size as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Placement nudges for submenus that had to be flipped at a screen edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Overlap between a flipped submenu and its context-menu parent.
    pub seam_overlap: i32,
    /// Gap kept between a flipped submenu of a menu bar and the right edge.
    pub bar_edge_gap: i32,
    /// Gap kept between a flipped submenu of a menu bar and the bar's top.
    pub bar_top_gap: i32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            seam_overlap: 2,
            bar_edge_gap: 2,
            bar_top_gap: 1,
        }
    }
}

/// Fixed paddings used when measuring and drawing entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Added to the font's line spacing to get the entry line height.
    pub line_padding: i32,
    /// Added to every measured entry text width.
    pub text_padding: i32,
    /// Added once to the widest entry, next to the icon gutter.
    pub gutter_padding: i32,
    /// Width and height of a menu without entries.
    pub placeholder_size: i32,
    /// Inset of entry icons from the entry's top-left corner.
    pub icon_inset: i32,
    /// Distance of the submenu arrow from the right edge of the text column.
    pub arrow_offset_x: i32,
    /// Vertical offset of the submenu arrow inside its line.
    pub arrow_offset_y: i32,
    /// Horizontal padding around each menu bar entry.
    pub bar_item_padding: i32,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            line_padding: 9,
            text_padding: 16,
            gutter_padding: 4,
            placeholder_size: 16,
            icon_inset: 3,
            arrow_offset_x: 4,
            arrow_offset_y: 8,
            bar_item_padding: 8,
        }
    }
}
