//! Context menus: positionable, auto-sizing popups that cascade.
//!
//! A [`ContextMenu`] measures itself from its entries, clamps itself to the
//! screen when shown, and spawns a child context menu for entries that have
//! children, either after the pointer dwells on the entry for the configured
//! delay or immediately on activation. The cascade operations live on
//! [`Manager`] because they touch several menus of the arena at once.
//!
//! # Input
//!
//! | Input                      | Effect                                        |
//! |----------------------------|-----------------------------------------------|
//! | Pointer move               | Highlight the enabled entry under the pointer |
//! | Left click                 | Activate the highlighted entry                |
//! | Down, Tab                  | Next entry, wrapping                          |
//! | Up, Shift+Tab              | Previous entry, wrapping                      |
//! | Right                      | Open the highlighted entry's submenu          |
//! | Left                       | Close this submenu, back to the parent        |
//! | Enter, Space               | Activate the highlighted entry                |
//! | Escape                     | Close this menu and everything below it       |
//!
//! Gamepad actions map onto the same behavior.

use std::sync::Arc;
use std::time::Duration;

use horizon_cascade_core::DwellTimer;
use horizon_cascade_core::logging::targets;

use crate::config::MetricsConfig;
use crate::error::{CascadeError, Result};
use crate::events::{Activation, GamepadAction, GamepadEvent, Key, KeyPressEvent, MouseButton};
use crate::geometry::{Point, Rect, Size};
use crate::manager::{FocusTarget, Manager};
use crate::menu::{MenuBase, MenuEntry, MenuId, MenuKind, MenuNode, Sender};
use crate::placement::{self, ParentAnchor, PlacementRequest};
use crate::render::Renderer;
use crate::skin::{self, Color, ImageId, LayerState, Skin, SkinControl, SkinLayer};

/// Skin and metric values a context menu measures and draws itself with.
#[derive(Debug, Clone, Copy)]
pub struct ContextStyle<'a> {
    pub control: &'a SkinControl,
    /// Layer behind every entry; its margins and font drive all metrics.
    pub layer: &'a SkinLayer,
    /// Layer behind the highlighted entry.
    pub selection: &'a SkinLayer,
    pub rule: Option<ImageId>,
    pub arrow: Option<ImageId>,
    pub metrics: &'a MetricsConfig,
}

impl<'a> ContextStyle<'a> {
    pub fn new(skin: &'a Skin, metrics: &'a MetricsConfig) -> Self {
        let control = skin.control(skin::CONTEXT_MENU);
        Self {
            control,
            layer: control.layer(skin::LAYER_CONTROL),
            selection: control.layer(skin::LAYER_SELECTION),
            rule: skin
                .control(skin::CONTROL)
                .layers
                .first()
                .and_then(|layer| layer.image),
            arrow: skin.image(skin::IMAGE_ARROW_RIGHT),
            metrics,
        }
    }
}

/// A cascading popup menu.
#[derive(Debug)]
pub struct ContextMenu {
    pub(crate) base: MenuBase,
    pub(crate) sender: Option<Sender>,
    pub(crate) dwell: DwellTimer,
}

impl ContextMenu {
    pub(crate) fn new(root: MenuId, parent: Option<MenuId>) -> Self {
        Self {
            base: MenuBase::new(MenuKind::Context, root, parent),
            sender: None,
            dwell: DwellTimer::new(),
        }
    }

    pub fn base(&self) -> &MenuBase {
        &self.base
    }

    /// Who requested the menu on its last show.
    pub fn sender(&self) -> Option<Sender> {
        self.sender
    }

    /// The hover timer gating delayed submenu expansion.
    pub fn dwell(&self) -> &DwellTimer {
        &self.dwell
    }

    pub fn is_visible(&self) -> bool {
        self.base.widget.is_visible()
    }

    /// Bounds relative to the attachment.
    pub fn geometry(&self) -> Rect {
        self.base.widget.geometry()
    }

    /// Bounds in screen space.
    pub fn bounds(&self) -> Rect {
        self.base.widget.absolute_rect()
    }

    // =========================================================================
    // Metrics
    // =========================================================================

    /// Height of one entry line, 0 for an empty menu.
    pub fn line_height(&self, style: &ContextStyle<'_>) -> i32 {
        if self.base.is_empty() {
            return 0;
        }
        style.layer.text.font.line_spacing() + style.metrics.line_padding
    }

    /// Width of the text column: the widest entry plus gutter and padding.
    pub fn line_width(&self, style: &ContextStyle<'_>) -> i32 {
        let font = &style.layer.text.font;
        let widest = self
            .base
            .entries()
            .iter()
            .map(|entry| font.measure(&entry.text()).width + style.metrics.text_padding)
            .max()
            .unwrap_or(0);
        widest + style.metrics.gutter_padding + self.line_height(style)
    }

    /// The size the current entries need.
    pub fn measure(&self, style: &ContextStyle<'_>) -> Size {
        if self.base.is_empty() {
            let side = style.metrics.placeholder_size;
            return Size::new(side, side);
        }
        let margins = style.layer.content_margins;
        let origin = style.control.origin_margins;
        let rows = self.base.len() as i32;
        Size::new(
            self.line_width(style) + (margins.horizontal() - origin.horizontal()) + style.layer.text.offset_x,
            self.line_height(style) * rows + (margins.vertical() - origin.vertical()),
        )
    }

    /// Resize to fit the current entries.
    pub(crate) fn auto_size(&mut self, style: &ContextStyle<'_>) {
        let size = self.measure(style);
        self.base.widget.set_size(size);
    }

    /// The entry row under a point in local coordinates.
    ///
    /// Rows come from truncating the offset below the content top by the line
    /// height. Points above the first row or below the last are off the list.
    pub fn item_at(&self, style: &ContextStyle<'_>, local: Point) -> Option<usize> {
        let line_height = self.line_height(style);
        if line_height <= 0 {
            return None;
        }
        let y = local.y - style.layer.content_margins.top;
        if y < 0 {
            return None;
        }
        let index = usize::try_from(y / line_height).ok()?;
        (index < self.base.len()).then_some(index)
    }

    /// Screen-space anchor for the submenu of entry `index`.
    pub fn child_anchor(&self, style: &ContextStyle<'_>, index: usize) -> Point {
        let widget = &self.base.widget;
        Point::new(
            widget.absolute_left() + widget.width() - 1,
            widget.absolute_top() + style.layer.content_margins.top + index as i32 * self.line_height(style),
        )
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Issue the draw requests for this menu.
    pub fn draw(&self, style: &ContextStyle<'_>, renderer: &mut dyn Renderer) {
        let rect = self.bounds();
        let normal = style.layer;
        let margins = normal.content_margins;
        let metrics = style.metrics;

        renderer.draw_layer(normal, rect, LayerState::Enabled);

        let line_height = self.line_height(style);
        let line_width = self.line_width(style);
        let text_width = line_width - line_height;
        let band_width = rect.width() - (margins.horizontal() - style.control.origin_margins.horizontal());
        let count = self.base.len();

        for (i, entry) in self.base.entries().iter().enumerate() {
            let line_top = rect.top() + margins.top + i as i32 * line_height;
            let inset = if i > 0 { 2 } else { 0 };
            let left = rect.left() + margins.left + line_height;
            let top = line_top + inset;
            let height = line_height - inset - i32::from(i + 1 < count);

            if entry.is_separated() && i > 0 {
                if let Some(rule) = style.rule {
                    let rule_rect = Rect::new(left, line_top, text_width + metrics.gutter_padding, 1);
                    renderer.draw_image(rule, rule_rect, normal.text.colors.enabled);
                }
            }

            let state = if entry.is_enabled() {
                LayerState::Enabled
            } else {
                LayerState::Disabled
            };
            let layer = if self.base.selected() == Some(i) {
                let band_height = match state {
                    LayerState::Enabled => height,
                    LayerState::Disabled => line_height,
                };
                let band = Rect::new(rect.left() + margins.left, top, band_width, band_height);
                renderer.draw_layer(style.selection, band, state);
                style.selection
            } else {
                normal
            };

            let color = layer.text_color(state);
            let text_rect = Rect::new(
                left + normal.text.offset_x,
                top + normal.text.offset_y,
                text_width,
                height,
            );
            renderer.draw_string(layer, &entry.text(), text_rect, color, false);

            if let Some(icon) = entry.icon() {
                let side = line_height - 2 * metrics.icon_inset;
                let icon_rect = Rect::new(
                    rect.left() + margins.left + metrics.icon_inset,
                    top + metrics.icon_inset,
                    side,
                    side,
                );
                renderer.draw_image(icon, icon_rect, Color::WHITE);
            }

            if entry.has_children() {
                if let Some(arrow) = style.arrow {
                    let at = Rect::new(
                        rect.left() + line_width - metrics.arrow_offset_x,
                        line_top + metrics.arrow_offset_y,
                        0,
                        0,
                    );
                    renderer.draw_image(arrow, at, color);
                }
            }
        }
    }
}

// =============================================================================
// Cascade operations
// =============================================================================

impl Manager {
    pub(crate) fn context_ref(&self, menu: MenuId) -> Option<&ContextMenu> {
        self.menus.get(menu).and_then(MenuNode::as_context)
    }

    pub(crate) fn context_mut(&mut self, menu: MenuId) -> Option<&mut ContextMenu> {
        self.menus.get_mut(menu).and_then(MenuNode::as_context_mut)
    }

    /// Show a context menu at its current screen position, with no sender.
    pub fn show(&mut self, menu: MenuId) -> Result<()> {
        let widget = &self
            .context_ref(menu)
            .ok_or_else(|| self.not_a_context_menu(menu))?
            .base
            .widget;
        let (x, y) = (widget.absolute_left(), widget.absolute_top());
        self.show_at(menu, None, x, y)
    }

    /// Show a context menu at screen position (`x`, `y`) on behalf of `sender`.
    ///
    /// The menu is resized, attached next to the sender (inside the sender's
    /// root container when it has one), clamped to the screen and focused. An
    /// open submenu from a previous show is torn down first.
    pub fn show_at(&mut self, menu: MenuId, sender: Option<Sender>, x: i32, y: i32) -> Result<()> {
        if self.context_ref(menu).is_none() {
            return Err(self.not_a_context_menu(menu));
        }
        match sender {
            Some(Sender::Widget(widget)) if !self.widgets.contains(widget) => {
                return Err(CascadeError::UnknownWidget(widget));
            }
            Some(Sender::Menu(other)) if !self.menus.contains_key(other) => {
                return Err(CascadeError::UnknownMenu(other));
            }
            _ => {}
        }
        self.show_context(menu, sender, Point::new(x, y));
        Ok(())
    }

    pub(crate) fn show_context(&mut self, menu: MenuId, sender: Option<Sender>, anchor: Point) {
        self.teardown_child(menu);

        let attachment = self.attachment_for(sender);
        let parent = self.parent_anchor(menu);
        let screen = self.screen;
        let style = ContextStyle::new(&self.skin, &self.config.metrics);
        let Some(context) = self.menus.get_mut(menu).and_then(MenuNode::as_context_mut) else {
            return;
        };

        context.auto_size(&style);
        context.sender = sender;
        let widget = &mut context.base.widget;
        widget.set_visible(true);
        widget.set_attachment(attachment);

        let origin = attachment.origin();
        let request = PlacementRequest {
            position: Point::new(anchor.x - origin.x, anchor.y - origin.y),
            size: widget.size(),
            origin,
            screen,
            line_height: context.line_height(&style),
            parent,
        };
        let position = placement::place(&request, &self.config.placement);
        context.base.widget.set_pos(position);

        tracing::debug!(
            target: targets::MENU,
            ?menu,
            ?sender,
            bounds = ?context.bounds(),
            "context menu shown"
        );

        self.raise(menu);
        self.focus = Some(FocusTarget::Menu(menu));
    }

    fn parent_anchor(&self, menu: MenuId) -> ParentAnchor {
        let parent = self.menus.get(menu).and_then(|node| node.base().parent());
        match parent.and_then(|parent| self.menus.get(parent)) {
            Some(MenuNode::Context(context)) => ParentAnchor::Context {
                width: context.base.widget.width(),
            },
            Some(MenuNode::Bar(bar)) => ParentAnchor::Bar {
                top: bar.base.widget.top(),
            },
            None => ParentAnchor::None,
        }
    }

    /// Hide a context menu and destroy its submenus.
    ///
    /// With `hide_current` false only the submenu chain is torn down.
    pub(crate) fn hide_context(&mut self, menu: MenuId, hide_current: bool) {
        let Some(context) = self.context_mut(menu) else {
            return;
        };
        if hide_current {
            context.base.widget.set_visible(false);
            context.base.set_selected(None);
            context.dwell.disarm();
            self.lower(menu);
            self.release_focus(menu);
            tracing::debug!(target: targets::MENU, ?menu, "context menu hidden");
        }
        self.teardown_child(menu);
    }

    /// Create the submenu of `parent` holding `entries`.
    pub(crate) fn spawn_child(
        &mut self,
        parent: MenuId,
        sender: Option<Sender>,
        entries: Vec<Arc<MenuEntry>>,
    ) -> MenuId {
        let root = self
            .menus
            .get(parent)
            .map(|node| node.base().root())
            .unwrap_or(parent);
        let mut child = ContextMenu::new(root, Some(parent));
        child.sender = sender;
        child.base.replace_entries(entries);
        child.auto_size(&ContextStyle::new(&self.skin, &self.config.metrics));

        let id = self.menus.insert(MenuNode::Context(child));
        if let Some(node) = self.menus.get_mut(parent) {
            node.base_mut().child = Some(id);
        }
        tracing::debug!(target: targets::MENU, ?parent, child = ?id, "submenu created");
        id
    }

    /// Act on the highlighted entry: open its submenu or fire it.
    pub(crate) fn context_activate(&mut self, menu: MenuId, activation: Activation) {
        let style = ContextStyle::new(&self.skin, &self.config.metrics);
        let Some(context) = self.menus.get_mut(menu).and_then(MenuNode::as_context_mut) else {
            return;
        };
        if let Some(Sender::Widget(widget)) = context.sender {
            self.focus = Some(FocusTarget::Widget(widget));
        }
        context.dwell.disarm();

        if !activation.is_actionable() {
            return;
        }
        let Some(index) = context.base.selected() else {
            return;
        };
        let Some(entry) = context.base.entry(index).cloned() else {
            return;
        };
        if !entry.is_enabled() {
            return;
        }

        if entry.has_children() {
            let anchor = context.child_anchor(&style, index);
            let sender = context.sender;
            let existing = context.base.child;
            let child = match existing {
                Some(child) => child,
                None => self.spawn_child(menu, sender, entry.children()),
            };
            self.show_context(child, sender, anchor);
            if activation == Activation::Phantom {
                if let Some(child) = self.context_mut(child) {
                    child.base.set_selected(Some(0));
                }
            }
            tracing::debug!(target: targets::MENU, ?menu, index, ?child, "submenu expanded");
        } else {
            tracing::debug!(target: targets::MENU, ?menu, index, ?activation, "entry activated");
            entry.activated.emit(activation);
            self.collapse_from_root(menu);
        }
    }

    /// Per-tick work: re-measure and open the dwelled-on submenu.
    pub(crate) fn context_update(&mut self, menu: MenuId, now: u64, delay: Duration) {
        let style = ContextStyle::new(&self.skin, &self.config.metrics);
        let Some(context) = self.menus.get_mut(menu).and_then(MenuNode::as_context_mut) else {
            return;
        };
        if !context.is_visible() {
            return;
        }
        context.auto_size(&style);

        let expand = context.dwell.has_elapsed(now, delay)
            && context.base.child.is_none()
            && context
                .base
                .selected_entry()
                .is_some_and(|entry| entry.has_children());
        if expand {
            tracing::trace!(target: targets::MENU, ?menu, now, "dwell elapsed");
            self.context_activate(menu, Activation::Pointer(MouseButton::Left));
        }
    }

    /// Track the entry under the pointer (`local` is menu-relative).
    pub(crate) fn context_pointer_move(&mut self, menu: MenuId, local: Point) {
        let now = self.clock.now();
        let style = ContextStyle::new(&self.skin, &self.config.metrics);
        let Some(context) = self.menus.get_mut(menu).and_then(MenuNode::as_context_mut) else {
            return;
        };
        context.base.widget.update();

        let Some(index) = context.item_at(&style, local) else {
            return;
        };
        let Some(entry) = context.base.entry(index).cloned() else {
            return;
        };
        let has_child = context.base.child.is_some();

        if context.base.selected() != Some(index) && entry.is_enabled() {
            if has_child {
                self.hide_context(menu, false);
            }
            entry.highlighted.emit(());
            self.focus = Some(FocusTarget::Menu(menu));
            if let Some(context) = self.context_mut(menu) {
                context.base.set_selected(Some(index));
                context.dwell.arm(now);
            }
            tracing::trace!(target: targets::INPUT, ?menu, index, "entry highlighted");
        } else if !entry.is_enabled() && !has_child {
            context.base.set_selected(None);
        }
    }

    /// Drop the highlight once the pointer has left the whole cascade.
    pub(crate) fn context_pointer_leave(&mut self, menu: MenuId, position: Point) {
        let inside = self.check_area(menu, position);
        if let Some(context) = self.context_mut(menu) {
            if !inside && context.base.child.is_none() {
                context.base.set_selected(None);
            }
        }
    }

    /// Collapse a root context menu when a press lands outside its cascade.
    pub(crate) fn context_dismiss(&mut self, menu: MenuId, position: Point) {
        let visible = self.context_ref(menu).is_some_and(ContextMenu::is_visible);
        if visible && !self.check_area(menu, position) {
            tracing::debug!(target: targets::INPUT, ?menu, ?position, "press outside cascade");
            self.hide_context(menu, true);
        }
    }

    pub(crate) fn context_key(&mut self, menu: MenuId, event: &mut KeyPressEvent) {
        let Some(context) = self.context_mut(menu) else {
            return;
        };
        context.dwell.disarm();
        tracing::trace!(target: targets::INPUT, ?menu, key = ?event.key, "context menu key");

        if event.key == Key::ArrowDown || event.is_forward_tab() {
            event.base.accept();
            self.context_step(menu, true);
            return;
        }
        if event.key == Key::ArrowUp || event.is_back_tab() {
            event.base.accept();
            self.context_step(menu, false);
            return;
        }

        match event.key {
            Key::ArrowRight => {
                if self.selected_has_children(menu) {
                    event.base.accept();
                    self.context_activate(menu, Activation::Phantom);
                }
            }
            Key::ArrowLeft => {
                event.base.accept();
                self.context_step_out(menu);
            }
            Key::Enter | Key::Space => {
                if self.selected_index(menu).is_some() {
                    event.base.accept();
                    self.context_activate(menu, Activation::Phantom);
                }
            }
            Key::Escape => {
                event.base.accept();
                self.context_escape(menu);
            }
            _ => {}
        }
    }

    pub(crate) fn context_gamepad(&mut self, menu: MenuId, event: &mut GamepadEvent) {
        let Some(context) = self.context_mut(menu) else {
            return;
        };
        context.dwell.disarm();
        tracing::trace!(target: targets::INPUT, ?menu, action = ?event.action, "context menu gamepad");

        match event.action {
            GamepadAction::None => {}
            GamepadAction::Down | GamepadAction::NextControl => {
                event.base.accept();
                self.context_step(menu, true);
            }
            GamepadAction::Up | GamepadAction::PrevControl => {
                event.base.accept();
                self.context_step(menu, false);
            }
            GamepadAction::Right => {
                if self.selected_has_children(menu) {
                    event.base.accept();
                    self.context_activate(menu, Activation::Phantom);
                }
            }
            GamepadAction::Left => {
                event.base.accept();
                self.context_step_out(menu);
            }
            GamepadAction::Press => {
                if self.selected_index(menu).is_some() {
                    event.base.accept();
                    self.context_activate(menu, Activation::Phantom);
                }
            }
        }
    }

    fn selected_index(&self, menu: MenuId) -> Option<usize> {
        self.menus.get(menu).and_then(|node| node.base().selected())
    }

    fn selected_has_children(&self, menu: MenuId) -> bool {
        self.menus
            .get(menu)
            .and_then(|node| node.base().selected_entry())
            .is_some_and(|entry| entry.has_children())
    }

    /// Move the selection one entry, wrapping at both ends.
    fn context_step(&mut self, menu: MenuId, forward: bool) {
        let Some(context) = self.context_ref(menu) else {
            return;
        };
        let Some(index) = context.base.step_index(forward) else {
            return;
        };
        let entry = context.base.entry(index).cloned();

        self.hide_context(menu, false);
        if let Some(context) = self.context_mut(menu) {
            context.base.set_selected(Some(index));
        }
        if let Some(entry) = entry.filter(|entry| entry.is_enabled()) {
            entry.highlighted.emit(());
        }
        tracing::trace!(target: targets::INPUT, ?menu, index, forward, "selection stepped");
    }

    /// Return to a context-menu parent, closing this menu only.
    fn context_step_out(&mut self, menu: MenuId) {
        let parent = self.menus.get(menu).and_then(|node| node.base().parent());
        let Some(parent) = parent.filter(|&parent| {
            self.menus.get(parent).map(MenuNode::kind) == Some(MenuKind::Context)
        }) else {
            return;
        };
        self.focus = Some(FocusTarget::Menu(parent));
        self.hide_context(parent, false);
    }

    /// Close this menu and its descendants, focusing the parent if any.
    fn context_escape(&mut self, menu: MenuId) {
        match self.menus.get(menu).and_then(|node| node.base().parent()) {
            Some(parent) => {
                self.focus = Some(FocusTarget::Menu(parent));
                self.close_submenu(parent);
            }
            None => self.hide_context(menu, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CascadeConfig;
    use crate::render::{DrawCommand, DrawList};
    use crate::skin::FixedAdvanceFont;

    fn manager_with(entries: Vec<MenuEntry>) -> (Manager, MenuId) {
        let mut manager = Manager::new(CascadeConfig::default());
        let menu = manager.create_context_menu();
        for entry in entries {
            manager.add_entry(menu, entry).unwrap();
        }
        (manager, menu)
    }

    #[test]
    fn test_metrics_follow_font_and_margins() {
        let (manager, menu) = manager_with(vec![MenuEntry::new("Open"), MenuEntry::new("Save As")]);
        let style = manager.context_style();
        let context = manager.context_menu(menu).unwrap();

        // 14 px line spacing + 9 px padding
        assert_eq!(context.line_height(&style), 23);
        // widest: 7 chars * 7 px + 16, then + 4 + line height
        assert_eq!(context.line_width(&style), 49 + 16 + 4 + 23);
        // 3 px content margins on each side
        assert_eq!(context.measure(&style), Size::new(92 + 6, 23 * 2 + 6));
    }

    #[test]
    fn test_empty_menu_is_placeholder() {
        let (manager, menu) = manager_with(vec![]);
        let style = manager.context_style();
        let context = manager.context_menu(menu).unwrap();
        assert_eq!(context.line_height(&style), 0);
        assert_eq!(context.measure(&style), Size::new(16, 16));
        assert_eq!(context.item_at(&style, Point::new(5, 5)), None);
    }

    #[test]
    fn test_item_at_truncates_rows() {
        let (manager, menu) = manager_with(vec![MenuEntry::new("A"), MenuEntry::new("B")]);
        let style = manager.context_style();
        let context = manager.context_menu(menu).unwrap();

        assert_eq!(context.item_at(&style, Point::new(10, 3)), Some(0));
        assert_eq!(context.item_at(&style, Point::new(10, 25)), Some(0));
        assert_eq!(context.item_at(&style, Point::new(10, 26)), Some(1));
        assert_eq!(context.item_at(&style, Point::new(10, 48)), Some(1));
        assert_eq!(context.item_at(&style, Point::new(10, 49)), None);
        assert_eq!(context.item_at(&style, Point::new(10, 1)), None);
    }

    #[test]
    fn test_custom_font_widths() {
        let config = CascadeConfig::default();
        let skin = Skin::with_font(Arc::new(FixedAdvanceFont {
            advance: 10,
            line_spacing: 11,
        }));
        let mut manager = Manager::with_skin(config, skin);
        let menu = manager.create_context_menu();
        manager.add_entry(menu, MenuEntry::new("abc")).unwrap();
        let style = manager.context_style();
        let context = manager.context_menu(menu).unwrap();
        assert_eq!(context.line_height(&style), 20);
        assert_eq!(context.line_width(&style), 30 + 16 + 4 + 20);
    }

    #[test]
    fn test_draw_requests() {
        let (mut manager, menu) = manager_with(vec![
            MenuEntry::new("Cut"),
            MenuEntry::new("More").separated().with_child(MenuEntry::new("Inner")),
            MenuEntry::new("Gone").with_enabled(false).with_icon(ImageId(9)),
        ]);
        manager.show_at(menu, None, 100, 100).unwrap();

        let mut list = DrawList::new();
        manager.draw(&mut list);

        assert_eq!(list.texts(), vec!["Cut", "More", "Gone"]);
        let rule = manager.skin().image(skin::IMAGE_RULE).unwrap();
        assert_eq!(list.image_rects(rule).len(), 1);

        let arrow = manager.skin().image(skin::IMAGE_ARROW_RIGHT).unwrap();
        let arrows = list.image_rects(arrow);
        assert_eq!(arrows.len(), 1);
        let style = manager.context_style();
        let context = manager.context_menu(menu).unwrap();
        let line_width = context.line_width(&style);
        assert_eq!(arrows[0].origin, Point::new(100 + line_width - 4, 100 + 3 + 23 + 8));

        let icons = list.image_rects(ImageId(9));
        assert_eq!(icons, vec![Rect::new(106, 100 + 3 + 46 + 2 + 3, 17, 17)]);

        let disabled_text = list.commands().iter().any(|command| {
            matches!(command, DrawCommand::String { text, color, .. }
                if text == "Gone" && *color == style.layer.text.colors.disabled)
        });
        assert!(disabled_text);
    }

    #[test]
    fn test_selected_entry_gets_selection_layer() {
        let (mut manager, menu) = manager_with(vec![MenuEntry::new("A"), MenuEntry::new("B")]);
        manager.show_at(menu, None, 0, 0).unwrap();
        manager.context_pointer_move(menu, Point::new(10, 30));

        let mut list = DrawList::new();
        manager.draw(&mut list);
        let selection_layers = list
            .commands()
            .iter()
            .filter(|command| {
                matches!(command, DrawCommand::Layer { layer, .. } if layer == skin::LAYER_SELECTION)
            })
            .count();
        assert_eq!(selection_layers, 1);
    }

    #[test]
    fn test_reshow_keeps_screen_position() {
        let (mut manager, menu) = manager_with(vec![MenuEntry::new("Open")]);
        let window = manager
            .add_widget(Rect::new(50, 40, 400, 300), None, true)
            .unwrap();
        let button = manager
            .add_widget(Rect::new(10, 10, 80, 20), Some(window), false)
            .unwrap();

        manager
            .show_at(menu, Some(Sender::Widget(button)), 120, 90)
            .unwrap();
        assert_eq!(manager.context_menu(menu).unwrap().bounds().origin, Point::new(120, 90));

        manager.hide_menu(menu, true).unwrap();
        manager.show(menu).unwrap();
        let context = manager.context_menu(menu).unwrap();
        assert!(context.is_visible());
        assert_eq!(context.bounds().origin, Point::new(120, 90));
    }
}
