//! Skin lookups consumed by the menus.
//!
//! A [`Skin`] is an opaque resource table: given a control name it returns a
//! [`SkinControl`] with named [`SkinLayer`]s, each carrying content margins,
//! text metrics and colors. Menus only measure and pick rectangles from these
//! values; how layers and glyphs turn into pixels is the renderer's business.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use horizon_cascade_core::logging::targets;

use crate::geometry::{Margins, Size};

/// Control name of the context menu skin entry.
pub const CONTEXT_MENU: &str = "ContextMenu";
/// Control name of the menu bar skin entry.
pub const MENU_BAR: &str = "MenuBar";
/// Control name of the generic control skin entry (source of the rule image).
pub const CONTROL: &str = "Control";
/// Layer drawn behind every entry.
pub const LAYER_CONTROL: &str = "Control";
/// Layer drawn behind the highlighted entry.
pub const LAYER_SELECTION: &str = "Selection";
/// Right-pointing arrow shown next to entries with children.
pub const IMAGE_ARROW_RIGHT: &str = "Shared.ArrowRight";
/// Horizontal rule drawn above separated entries.
pub const IMAGE_RULE: &str = "Shared.Rule";

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);

    /// Create an opaque color.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with alpha.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Handle to an image resource owned by the skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

/// Text measurement provided by the font resource.
pub trait FontMetrics: Send + Sync {
    /// Measure the rendered extent of `text`.
    fn measure(&self, text: &str) -> Size;

    /// Vertical distance between consecutive baselines.
    fn line_spacing(&self) -> i32;
}

/// A font where every character has the same advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAdvanceFont {
    /// Horizontal advance per character.
    pub advance: i32,
    /// Line spacing.
    pub line_spacing: i32,
}

impl Default for FixedAdvanceFont {
    fn default() -> Self {
        Self {
            advance: 7,
            line_spacing: 14,
        }
    }
}

impl FontMetrics for FixedAdvanceFont {
    fn measure(&self, text: &str) -> Size {
        let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        Size::new(chars.saturating_mul(self.advance), self.line_spacing)
    }

    fn line_spacing(&self) -> i32 {
        self.line_spacing
    }
}

/// Enabled and disabled colors for a piece of text or a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateColors {
    pub enabled: Color,
    pub disabled: Color,
}

/// Which state a layer or string is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerState {
    Enabled,
    Disabled,
}

/// Text style of a layer.
#[derive(Clone)]
pub struct SkinText {
    /// Font used for measuring and drawing.
    pub font: Arc<dyn FontMetrics>,
    /// Text colors.
    pub colors: StateColors,
    /// Horizontal text offset inside its rectangle.
    pub offset_x: i32,
    /// Vertical text offset inside its rectangle.
    pub offset_y: i32,
}

impl fmt::Debug for SkinText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkinText")
            .field("line_spacing", &self.font.line_spacing())
            .field("colors", &self.colors)
            .field("offset_x", &self.offset_x)
            .field("offset_y", &self.offset_y)
            .finish()
    }
}

/// A named drawing layer of a control.
#[derive(Debug, Clone)]
pub struct SkinLayer {
    /// Layer name, e.g. [`LAYER_CONTROL`].
    pub name: String,
    /// Padding between the control border and its drawable interior.
    pub content_margins: Margins,
    /// Text style.
    pub text: SkinText,
    /// Fill colors per state.
    pub states: StateColors,
    /// Optional image backing the layer.
    pub image: Option<ImageId>,
}

impl SkinLayer {
    /// Text color for the given state.
    pub fn text_color(&self, state: LayerState) -> Color {
        match state {
            LayerState::Enabled => self.text.colors.enabled,
            LayerState::Disabled => self.text.colors.disabled,
        }
    }
}

/// Skin description of one control type.
#[derive(Debug, Clone)]
pub struct SkinControl {
    /// Control name, e.g. [`CONTEXT_MENU`].
    pub name: String,
    /// Margins between the control's origin and its skin frame.
    pub origin_margins: Margins,
    /// Layers in draw order. Never empty.
    pub layers: Vec<SkinLayer>,
}

impl SkinControl {
    /// Look up a layer by name, falling back to the first layer.
    pub fn layer(&self, name: &str) -> &SkinLayer {
        self.layers
            .iter()
            .find(|layer| layer.name == name)
            .unwrap_or_else(|| {
                tracing::warn!(target: targets::SKIN, control = %self.name, layer = name, "unknown skin layer");
                &self.layers[0]
            })
    }
}

/// The skin resource table.
#[derive(Debug, Clone)]
pub struct Skin {
    controls: HashMap<String, SkinControl>,
    images: HashMap<String, ImageId>,
    fallback: SkinControl,
}

impl Skin {
    /// Build a skin from controls and named images.
    ///
    /// `fallback` answers lookups for unknown control names.
    pub fn new(
        controls: impl IntoIterator<Item = SkinControl>,
        images: impl IntoIterator<Item = (String, ImageId)>,
        fallback: SkinControl,
    ) -> Self {
        Self {
            controls: controls
                .into_iter()
                .map(|control| (control.name.clone(), control))
                .collect(),
            images: images.into_iter().collect(),
            fallback,
        }
    }

    /// The built-in skin: fixed-advance font, light colors.
    pub fn standard() -> Self {
        Self::with_font(Arc::new(FixedAdvanceFont::default()))
    }

    /// The built-in skin using a custom font.
    pub fn with_font(font: Arc<dyn FontMetrics>) -> Self {
        let text = SkinText {
            font,
            colors: StateColors {
                enabled: Color::BLACK,
                disabled: Color::from_rgb8(128, 128, 128),
            },
            offset_x: 0,
            offset_y: 0,
        };
        let selection_text = SkinText {
            colors: StateColors {
                enabled: Color::WHITE,
                disabled: Color::from_rgb8(180, 180, 180),
            },
            ..text.clone()
        };
        let background = StateColors {
            enabled: Color::WHITE,
            disabled: Color::from_rgb8(240, 240, 240),
        };
        let highlight = StateColors {
            enabled: Color::from_rgb8(0, 120, 215),
            disabled: Color::from_rgb8(200, 200, 200),
        };

        let menu_control = |name: &str, margins: Margins| SkinControl {
            name: name.to_string(),
            origin_margins: Margins::ZERO,
            layers: vec![
                SkinLayer {
                    name: LAYER_CONTROL.to_string(),
                    content_margins: margins,
                    text: text.clone(),
                    states: background,
                    image: None,
                },
                SkinLayer {
                    name: LAYER_SELECTION.to_string(),
                    content_margins: margins,
                    text: selection_text.clone(),
                    states: highlight,
                    image: None,
                },
            ],
        };

        let rule = ImageId(2);
        let mut control = menu_control(CONTROL, Margins::ZERO);
        control.layers[0].image = Some(rule);

        let context = menu_control(CONTEXT_MENU, Margins::uniform(3));
        Self::new(
            [context.clone(), menu_control(MENU_BAR, Margins::uniform(2)), control],
            [
                (IMAGE_ARROW_RIGHT.to_string(), ImageId(1)),
                (IMAGE_RULE.to_string(), rule),
            ],
            context,
        )
    }

    /// Look up a control by name, falling back to the default control.
    pub fn control(&self, name: &str) -> &SkinControl {
        self.controls.get(name).unwrap_or_else(|| {
            tracing::warn!(target: targets::SKIN, control = name, "unknown skin control");
            &self.fallback
        })
    }

    /// Look up a named image.
    pub fn image(&self, name: &str) -> Option<ImageId> {
        self.images.get(name).copied()
    }
}

impl Default for Skin {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_font_measure() {
        let font = FixedAdvanceFont::default();
        assert_eq!(font.measure("Open"), Size::new(28, 14));
        assert_eq!(font.measure(""), Size::new(0, 14));
    }

    #[test]
    fn test_standard_skin_lookups() {
        let skin = Skin::standard();
        let control = skin.control(CONTEXT_MENU);
        assert_eq!(control.layer(LAYER_CONTROL).content_margins, Margins::uniform(3));
        assert_eq!(control.layer(LAYER_SELECTION).name, LAYER_SELECTION);
        assert!(skin.image(IMAGE_ARROW_RIGHT).is_some());
        assert_eq!(skin.control(CONTROL).layers[0].image, skin.image(IMAGE_RULE));
    }

    #[test]
    fn test_unknown_names_fall_back() {
        let skin = Skin::standard();
        assert_eq!(skin.control("NoSuchControl").name, CONTEXT_MENU);
        let layer = skin.control(CONTEXT_MENU).layer("NoSuchLayer");
        assert_eq!(layer.name, LAYER_CONTROL);
        assert_eq!(skin.image("NoSuchImage"), None);
    }
}
