//! Draw-request contract between menus and the host renderer.
//!
//! Menus never rasterize. While drawing they call a [`Renderer`] with skin
//! layers and absolute rectangles; how those become pixels is up to the host.
//! [`DrawList`] records the requests instead, which is what batching hosts and
//! the tests use.

use crate::geometry::Rect;
use crate::skin::{Color, ImageId, LayerState, SkinLayer};

/// Receiver of draw requests.
pub trait Renderer {
    // =========================================================================
    // Layers
    // =========================================================================

    /// Fill `rect` with a skin layer in the given state.
    fn draw_layer(&mut self, layer: &SkinLayer, rect: Rect, state: LayerState);

    // =========================================================================
    // Text and Images
    // =========================================================================

    /// Draw `text` inside `rect` with the layer's font. Offsets are already
    /// applied to `rect`.
    fn draw_string(&mut self, layer: &SkinLayer, text: &str, rect: Rect, color: Color, wrap: bool);

    /// Draw an image stretched to `rect`, tinted with `tint`.
    ///
    /// A rect with an empty size draws the image at its natural size.
    fn draw_image(&mut self, image: ImageId, rect: Rect, tint: Color);
}

/// A single recorded draw request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Layer {
        layer: String,
        rect: Rect,
        state: LayerState,
    },
    String {
        layer: String,
        text: String,
        rect: Rect,
        color: Color,
        wrap: bool,
    },
    Image {
        image: ImageId,
        rect: Rect,
        tint: Color,
    },
}

/// A renderer that records requests in order.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop every recorded command.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Texts of all recorded string requests, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::String { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Rectangles of all recorded image requests for `image`.
    pub fn image_rects(&self, image: ImageId) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Image { image: id, rect, .. } if *id == image => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for DrawList {
    fn draw_layer(&mut self, layer: &SkinLayer, rect: Rect, state: LayerState) {
        self.commands.push(DrawCommand::Layer {
            layer: layer.name.clone(),
            rect,
            state,
        });
    }

    fn draw_string(&mut self, layer: &SkinLayer, text: &str, rect: Rect, color: Color, wrap: bool) {
        self.commands.push(DrawCommand::String {
            layer: layer.name.clone(),
            text: text.to_string(),
            rect,
            color,
            wrap,
        });
    }

    fn draw_image(&mut self, image: ImageId, rect: Rect, tint: Color) {
        self.commands.push(DrawCommand::Image { image, rect, tint });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skin::{CONTEXT_MENU, LAYER_CONTROL, Skin};

    #[test]
    fn test_draw_list_records_in_order() {
        let skin = Skin::standard();
        let layer = skin.control(CONTEXT_MENU).layer(LAYER_CONTROL);
        let mut list = DrawList::new();
        assert!(list.is_empty());

        list.draw_layer(layer, Rect::new(0, 0, 10, 10), LayerState::Enabled);
        list.draw_string(layer, "Open", Rect::new(0, 0, 10, 10), Color::BLACK, false);
        list.draw_image(ImageId(7), Rect::new(1, 2, 3, 4), Color::WHITE);

        assert_eq!(list.len(), 3);
        assert!(matches!(list.commands()[0], DrawCommand::Layer { .. }));
        assert_eq!(list.texts(), vec!["Open"]);
        assert_eq!(list.image_rects(ImageId(7)), vec![Rect::new(1, 2, 3, 4)]);

        list.clear();
        assert!(list.is_empty());
    }
}
