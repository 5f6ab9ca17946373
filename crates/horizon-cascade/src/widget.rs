//! The slice of the host widget system that menus consume.
//!
//! Menus need three things from the widget layer: their own geometry and
//! visibility ([`WidgetBase`]), where they are attached ([`Attachment`]), and
//! for the widget that requested a menu, its root container and absolute
//! position ([`WidgetRegistry`]). Everything else about host widgets is out of
//! scope.

use slotmap::{SlotMap, new_key_type};

use crate::geometry::{Point, Rect, Size};

new_key_type! {
    /// Identifier of a host widget registered with the manager.
    pub struct WidgetId;
}

/// Where a menu lives in the control hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Attachment {
    /// Directly in the manager's control list; geometry is in screen space.
    #[default]
    Manager,
    /// Inside a host container; geometry is relative to `origin`.
    Container {
        /// The container widget.
        id: WidgetId,
        /// The container's absolute origin, captured when the menu was attached.
        origin: Point,
    },
}

impl Attachment {
    /// The absolute origin of the coordinate space this attachment defines.
    pub fn origin(&self) -> Point {
        match self {
            Attachment::Manager => Point::ZERO,
            Attachment::Container { origin, .. } => *origin,
        }
    }

    /// The container, if attached to one.
    pub fn container(&self) -> Option<WidgetId> {
        match self {
            Attachment::Manager => None,
            Attachment::Container { id, .. } => Some(*id),
        }
    }
}

/// Geometry and visibility shared by every menu.
#[derive(Debug, Clone, Default)]
pub struct WidgetBase {
    /// Geometry relative to the attachment.
    geometry: Rect,
    visible: bool,
    attachment: Attachment,
    needs_repaint: bool,
}

impl WidgetBase {
    /// Create a hidden widget base at the origin.
    pub fn new() -> Self {
        Self {
            geometry: Rect::default(),
            visible: false,
            attachment: Attachment::Manager,
            needs_repaint: true,
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Geometry relative to the attachment.
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the geometry relative to the attachment.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.needs_repaint = true;
        }
    }

    /// Position relative to the attachment.
    #[inline]
    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    /// Set the position relative to the attachment.
    pub fn set_pos(&mut self, pos: Point) {
        self.set_geometry(Rect::from_origin_size(pos, self.geometry.size));
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.geometry.left()
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.geometry.top()
    }

    /// Set the horizontal position relative to the attachment.
    pub fn set_left(&mut self, left: i32) {
        self.set_pos(Point::new(left, self.top()));
    }

    /// Set the vertical position relative to the attachment.
    pub fn set_top(&mut self, top: i32) {
        self.set_pos(Point::new(self.left(), top));
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Set the size, keeping the position.
    pub fn set_size(&mut self, size: Size) {
        self.set_geometry(Rect::from_origin_size(self.geometry.origin, size));
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.geometry.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.geometry.height()
    }

    /// Absolute horizontal position.
    #[inline]
    pub fn absolute_left(&self) -> i32 {
        self.attachment.origin().x + self.left()
    }

    /// Absolute vertical position.
    #[inline]
    pub fn absolute_top(&self) -> i32 {
        self.attachment.origin().y + self.top()
    }

    /// Geometry in screen space.
    pub fn absolute_rect(&self) -> Rect {
        let origin = self.attachment.origin();
        self.geometry.offset(origin.x, origin.y)
    }

    /// Map a screen-space point into this widget's local space.
    pub fn map_from_screen(&self, point: Point) -> Point {
        point.offset(-self.absolute_left(), -self.absolute_top())
    }

    // =========================================================================
    // Visibility and Attachment
    // =========================================================================

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.needs_repaint = true;
        }
    }

    #[inline]
    pub fn attachment(&self) -> Attachment {
        self.attachment
    }

    pub fn set_attachment(&mut self, attachment: Attachment) {
        self.attachment = attachment;
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Check whether the widget changed since the last draw.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Request a repaint.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Clear the repaint request after drawing.
    pub fn mark_painted(&mut self) {
        self.needs_repaint = false;
    }
}

/// A host widget as seen by the menu subsystem.
#[derive(Debug, Clone)]
pub struct HostWidget {
    /// Geometry relative to the parent (or the screen for top-level widgets).
    pub geometry: Rect,
    /// Parent widget, if any.
    pub parent: Option<WidgetId>,
    /// Whether menus may be attached to this widget.
    pub is_container: bool,
}

/// Registry of host widgets that may request menus.
#[derive(Debug, Default)]
pub struct WidgetRegistry {
    widgets: SlotMap<WidgetId, HostWidget>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget.
    pub fn insert(&mut self, widget: HostWidget) -> WidgetId {
        self.widgets.insert(widget)
    }

    /// Remove a widget.
    pub fn remove(&mut self, id: WidgetId) -> Option<HostWidget> {
        self.widgets.remove(id)
    }

    pub fn get(&self, id: WidgetId) -> Option<&HostWidget> {
        self.widgets.get(id)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut HostWidget> {
        self.widgets.get_mut(id)
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    /// The topmost ancestor of `id`, or `None` for a top-level widget.
    pub fn root_of(&self, id: WidgetId) -> Option<WidgetId> {
        let mut current = self.widgets.get(id)?.parent?;
        while let Some(parent) = self.widgets.get(current).and_then(|w| w.parent) {
            current = parent;
        }
        Some(current)
    }

    /// The root of `id` when that root is a container.
    pub fn root_container_of(&self, id: WidgetId) -> Option<WidgetId> {
        self.root_of(id)
            .filter(|root| self.widgets.get(*root).is_some_and(|w| w.is_container))
    }

    /// Absolute origin of `id`, summed over its ancestor chain.
    pub fn absolute_origin(&self, id: WidgetId) -> Option<Point> {
        let mut widget = self.widgets.get(id)?;
        let mut origin = widget.geometry.origin;
        while let Some(parent) = widget.parent.and_then(|p| self.widgets.get(p)) {
            origin = origin.offset(parent.geometry.left(), parent.geometry.top());
            widget = parent;
        }
        Some(origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(x: i32, y: i32, parent: Option<WidgetId>, is_container: bool) -> HostWidget {
        HostWidget {
            geometry: Rect::new(x, y, 100, 100),
            parent,
            is_container,
        }
    }

    #[test]
    fn test_root_and_absolute_origin() {
        let mut registry = WidgetRegistry::new();
        let window = registry.insert(host(50, 40, None, true));
        let panel = registry.insert(host(10, 5, Some(window), false));
        let button = registry.insert(host(3, 2, Some(panel), false));

        assert_eq!(registry.root_of(window), None);
        assert_eq!(registry.root_of(button), Some(window));
        assert_eq!(registry.root_container_of(button), Some(window));
        assert_eq!(registry.absolute_origin(button), Some(Point::new(63, 47)));
    }

    #[test]
    fn test_root_that_is_not_a_container() {
        let mut registry = WidgetRegistry::new();
        let label = registry.insert(host(0, 0, None, false));
        let child = registry.insert(host(1, 1, Some(label), false));
        assert_eq!(registry.root_of(child), Some(label));
        assert_eq!(registry.root_container_of(child), None);
    }

    #[test]
    fn test_widget_base_absolute_geometry() {
        let mut base = WidgetBase::new();
        assert!(!base.is_visible());
        base.set_geometry(Rect::new(10, 20, 30, 40));
        base.set_attachment(Attachment::Container {
            id: WidgetId::default(),
            origin: Point::new(100, 200),
        });
        assert_eq!(base.absolute_left(), 110);
        assert_eq!(base.absolute_top(), 220);
        assert_eq!(base.absolute_rect(), Rect::new(110, 220, 30, 40));
        assert_eq!(base.map_from_screen(Point::new(115, 230)), Point::new(5, 10));
    }

    #[test]
    fn test_widget_base_repaint_tracking() {
        let mut base = WidgetBase::new();
        base.mark_painted();
        base.set_left(4);
        assert!(base.needs_repaint());
        base.mark_painted();
        base.set_left(4);
        assert!(!base.needs_repaint());
    }
}
