//! Screen-boundary placement of context menus.
//!
//! A menu that would cross the right or bottom screen edge is flipped to the
//! other side of its anchor. Submenus then get a nudge that depends on the
//! kind of their parent, so the child never lands exactly on the parent's
//! edge. Whatever still crosses an edge after that is shifted inside.

use horizon_cascade_core::logging::targets;

use crate::config::PlacementConfig;
use crate::geometry::{Point, Rect, Size};

/// What the menu being placed cascades from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentAnchor {
    /// A root menu.
    None,
    /// A context menu of the given width.
    Context { width: i32 },
    /// A menu bar whose top edge (in the shared attachment space) is `top`.
    Bar { top: i32 },
}

/// Input to [`place`].
#[derive(Debug, Clone, Copy)]
pub struct PlacementRequest {
    /// Requested position, relative to `origin`.
    pub position: Point,
    /// Final menu size.
    pub size: Size,
    /// Absolute origin of the menu's attachment.
    pub origin: Point,
    /// Screen size.
    pub screen: Size,
    /// Entry line height of the menu being placed.
    pub line_height: i32,
    pub parent: ParentAnchor,
}

/// Compute the attachment-relative position of a menu.
pub fn place(request: &PlacementRequest, config: &PlacementConfig) -> Point {
    let PlacementRequest {
        position,
        size,
        origin,
        screen,
        line_height,
        parent,
    } = *request;
    let mut left = position.x;
    let mut top = position.y;

    // Flip horizontally
    if origin.x + left + size.width > screen.width {
        left -= size.width;
        match parent {
            ParentAnchor::Context { width } => left = left - width + config.seam_overlap,
            ParentAnchor::Bar { .. } => {
                left = screen.width - origin.x - size.width - config.bar_edge_gap;
            }
            ParentAnchor::None => {}
        }
        tracing::debug!(target: targets::PLACEMENT, ?parent, left, "flipped left");
    }

    // Flip vertically
    if origin.y + top + size.height > screen.height {
        top -= size.height;
        match parent {
            ParentAnchor::Context { .. } => top += line_height,
            ParentAnchor::Bar { top: parent_top } => {
                top = parent_top - size.height - config.bar_top_gap;
            }
            ParentAnchor::None => {}
        }
        tracing::debug!(target: targets::PLACEMENT, ?parent, top, "flipped up");
    }

    // Shift to stay within the screen, pinning oversized menus at the origin
    let rect = Rect::from_origin_size(Point::new(origin.x + left, origin.y + top), size);
    let mut shifted = rect.origin;
    if rect.right() > screen.width {
        shifted.x = screen.width - size.width;
    }
    if shifted.x < 0 {
        shifted.x = 0;
    }
    if rect.bottom() > screen.height {
        shifted.y = screen.height - size.height;
    }
    if shifted.y < 0 {
        shifted.y = 0;
    }
    if shifted != rect.origin {
        tracing::debug!(target: targets::PLACEMENT, from = ?rect.origin, to = ?shifted, "shifted inside screen");
    }

    Point::new(shifted.x - origin.x, shifted.y - origin.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Size = Size::new(800, 600);

    fn request(x: i32, y: i32, width: i32, height: i32, parent: ParentAnchor) -> PlacementRequest {
        PlacementRequest {
            position: Point::new(x, y),
            size: Size::new(width, height),
            origin: Point::ZERO,
            screen: SCREEN,
            line_height: 23,
            parent,
        }
    }

    #[test]
    fn test_fits_unchanged() {
        let pos = place(&request(100, 100, 60, 75, ParentAnchor::None), &PlacementConfig::default());
        assert_eq!(pos, Point::new(100, 100));
    }

    #[test]
    fn test_root_flips_left_at_right_edge() {
        let pos = place(&request(790, 100, 60, 75, ParentAnchor::None), &PlacementConfig::default());
        assert_eq!(pos, Point::new(730, 100));
    }

    #[test]
    fn test_context_child_overlaps_parent_seam() {
        let config = PlacementConfig::default();
        let pos = place(&request(770, 100, 60, 75, ParentAnchor::Context { width: 56 }), &config);
        assert_eq!(pos.x, 770 - 60 - 56 + 2);
    }

    #[test]
    fn test_context_child_flips_up_by_one_line() {
        let pos = place(
            &request(100, 560, 60, 75, ParentAnchor::Context { width: 56 }),
            &PlacementConfig::default(),
        );
        assert_eq!(pos.y, 560 - 75 + 23);
    }

    #[test]
    fn test_bar_child_flush_with_right_edge() {
        let config = PlacementConfig::default();
        let mut req = request(760, 20, 100, 75, ParentAnchor::Bar { top: 0 });
        req.origin = Point::new(10, 0);
        let pos = place(&req, &config);
        assert_eq!(pos.x, 800 - 10 - 100 - 2);
    }

    #[test]
    fn test_bar_child_above_bar_top() {
        let config = PlacementConfig::default();
        let pos = place(&request(10, 580, 60, 75, ParentAnchor::Bar { top: 560 }), &config);
        assert_eq!(pos.y, 560 - 75 - 1);
    }

    #[test]
    fn test_oversized_menu_pinned_at_origin() {
        let pos = place(&request(300, 100, 60, 900, ParentAnchor::None), &PlacementConfig::default());
        assert_eq!(pos.y, 0);
    }

    #[test]
    fn test_always_within_screen() {
        let config = PlacementConfig::default();
        let parents = [
            ParentAnchor::None,
            ParentAnchor::Context { width: 120 },
            ParentAnchor::Bar { top: 0 },
        ];
        for parent in parents {
            for x in (-50..=850).step_by(37) {
                for y in (-50..=650).step_by(41) {
                    let size = Size::new(130, 90);
                    let pos = place(&request(x, y, size.width, size.height, parent), &config);
                    let rect = Rect::from_origin_size(pos, size);
                    assert!(Rect::new(0, 0, 800, 600).encloses(&rect), "{parent:?} at ({x},{y}) -> {rect:?}");
                }
            }
        }
    }
}
