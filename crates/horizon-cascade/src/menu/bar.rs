//! Menu bars: horizontal top-level menus that drop down context menus.
//!
//! A bar is always visible while it exists. Hovering tracks the highlighted
//! entry and, while a dropdown is open, switches the dropdown to the hovered
//! entry. Dropdowns are ordinary [`ContextMenu`](crate::ContextMenu)s whose
//! parent and root are the bar.

use horizon_cascade_core::logging::targets;

use crate::config::MetricsConfig;
use crate::events::{Activation, GamepadAction, GamepadEvent, Key, KeyPressEvent, MouseButton};
use crate::geometry::{Point, Rect};
use crate::manager::{FocusTarget, Manager};
use crate::menu::{MenuBase, MenuId, MenuKind, MenuNode, Sender};
use crate::render::Renderer;
use crate::skin::{self, LayerState, Skin, SkinLayer};

/// Skin and metric values a menu bar measures and draws itself with.
#[derive(Debug, Clone, Copy)]
pub struct BarStyle<'a> {
    pub layer: &'a SkinLayer,
    pub selection: &'a SkinLayer,
    pub metrics: &'a MetricsConfig,
}

impl<'a> BarStyle<'a> {
    pub fn new(skin: &'a Skin, metrics: &'a MetricsConfig) -> Self {
        let control = skin.control(skin::MENU_BAR);
        Self {
            layer: control.layer(skin::LAYER_CONTROL),
            selection: control.layer(skin::LAYER_SELECTION),
            metrics,
        }
    }
}

/// A horizontal menu bar.
#[derive(Debug)]
pub struct MenuBar {
    pub(crate) base: MenuBase,
}

impl MenuBar {
    pub(crate) fn new(root: MenuId) -> Self {
        Self {
            base: MenuBase::new(MenuKind::Bar, root, None),
        }
    }

    pub fn base(&self) -> &MenuBase {
        &self.base
    }

    /// Bounds in screen space.
    pub fn bounds(&self) -> Rect {
        self.base.widget.absolute_rect()
    }

    /// Entry rectangles, relative to the bar.
    pub fn item_rects(&self, style: &BarStyle<'_>) -> Vec<Rect> {
        let font = &style.layer.text.font;
        let height = self.base.widget.height();
        let mut left = style.layer.content_margins.left;
        self.base
            .entries()
            .iter()
            .map(|entry| {
                let width = font.measure(&entry.text()).width + 2 * style.metrics.bar_item_padding;
                let rect = Rect::new(left, 0, width, height);
                left += width;
                rect
            })
            .collect()
    }

    /// The entry under a point in local coordinates.
    pub fn item_at(&self, style: &BarStyle<'_>, local: Point) -> Option<usize> {
        self.item_rects(style)
            .iter()
            .position(|rect| rect.contains(local))
    }

    /// Screen-space anchor for the dropdown of entry `index`: below the entry.
    pub fn dropdown_anchor(&self, style: &BarStyle<'_>, index: usize) -> Option<Point> {
        let bounds = self.bounds();
        self.item_rects(style)
            .get(index)
            .map(|rect| Point::new(bounds.left() + rect.left(), bounds.bottom()))
    }

    pub fn draw(&self, style: &BarStyle<'_>, renderer: &mut dyn Renderer) {
        let bounds = self.bounds();
        let margins = style.layer.content_margins;
        let padding = style.metrics.bar_item_padding;
        renderer.draw_layer(style.layer, bounds, LayerState::Enabled);

        for (i, (entry, item)) in self
            .base
            .entries()
            .iter()
            .zip(self.item_rects(style))
            .enumerate()
        {
            let item = item.offset(bounds.left(), bounds.top());
            let state = if entry.is_enabled() {
                LayerState::Enabled
            } else {
                LayerState::Disabled
            };
            let layer = if self.base.selected() == Some(i) {
                renderer.draw_layer(style.selection, item, state);
                style.selection
            } else {
                style.layer
            };
            let text_rect = Rect::new(
                item.left() + padding + layer.text.offset_x,
                item.top() + margins.top + layer.text.offset_y,
                item.width() - 2 * padding,
                item.height() - margins.vertical(),
            );
            renderer.draw_string(layer, &entry.text(), text_rect, layer.text_color(state), false);
        }
    }
}

// =============================================================================
// Bar operations
// =============================================================================

impl Manager {
    pub(crate) fn bar_ref(&self, bar: MenuId) -> Option<&MenuBar> {
        self.menus.get(bar).and_then(MenuNode::as_bar)
    }

    /// Close the open dropdown and clear the highlight. The bar stays visible.
    pub(crate) fn collapse_bar(&mut self, bar: MenuId) {
        self.teardown_child(bar);
        if let Some(node) = self.menus.get_mut(bar) {
            node.base_mut().set_selected(None);
            tracing::debug!(target: targets::MENU, ?bar, "menu bar collapsed");
        }
    }

    /// Open the dropdown of entry `index`, replacing any open dropdown.
    fn open_dropdown(&mut self, bar: MenuId, index: usize, select_first: bool) {
        self.teardown_child(bar);
        let style = BarStyle::new(&self.skin, &self.config.metrics);
        let Some(menu_bar) = self.menus.get_mut(bar).and_then(MenuNode::as_bar_mut) else {
            return;
        };
        let Some(entry) = menu_bar.base.entry(index).cloned() else {
            return;
        };
        let Some(anchor) = menu_bar.dropdown_anchor(&style, index) else {
            return;
        };
        menu_bar.base.set_selected(Some(index));

        let sender = Some(Sender::Menu(bar));
        let child = self.spawn_child(bar, sender, entry.children());
        self.show_context(child, sender, anchor);
        if select_first {
            if let Some(child) = self.context_mut(child) {
                child.base.set_selected(Some(0));
            }
        }
        tracing::debug!(target: targets::MENU, ?bar, index, ?child, "dropdown opened");
    }

    /// Highlight `index`, following with the dropdown if one is open.
    fn bar_select(&mut self, bar: MenuId, index: usize) {
        let Some(menu_bar) = self.bar_ref(bar) else {
            return;
        };
        let Some(entry) = menu_bar.base.entry(index).cloned() else {
            return;
        };
        let open = menu_bar.base.child.is_some();

        if open && entry.has_children() {
            self.open_dropdown(bar, index, false);
        } else {
            if open {
                self.teardown_child(bar);
            }
            if let Some(node) = self.menus.get_mut(bar) {
                node.base_mut().set_selected(Some(index));
            }
        }
        if entry.is_enabled() {
            entry.highlighted.emit(());
        }
    }

    pub(crate) fn bar_pointer_move(&mut self, bar: MenuId, local: Point) {
        let style = BarStyle::new(&self.skin, &self.config.metrics);
        let Some(menu_bar) = self.bar_ref(bar) else {
            return;
        };
        let hit = menu_bar.item_at(&style, local);
        let selected = menu_bar.base.selected();
        let open = menu_bar.base.child.is_some();
        let enabled = hit
            .and_then(|index| menu_bar.base.entry(index))
            .is_some_and(|entry| entry.is_enabled());

        match hit {
            Some(index) if enabled && selected != Some(index) => {
                tracing::trace!(target: targets::INPUT, ?bar, index, "bar entry highlighted");
                self.bar_select(bar, index);
            }
            Some(_) => {}
            None if !open => {
                if let Some(node) = self.menus.get_mut(bar) {
                    node.base_mut().set_selected(None);
                }
            }
            None => {}
        }
    }

    pub(crate) fn bar_pointer_leave(&mut self, bar: MenuId) {
        if let Some(node) = self.menus.get_mut(bar) {
            let base = node.base_mut();
            if base.child.is_none() {
                base.set_selected(None);
            }
        }
    }

    /// A click on the bar: toggle a dropdown or fire a leaf entry.
    pub(crate) fn bar_click(&mut self, bar: MenuId, local: Point, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        let style = BarStyle::new(&self.skin, &self.config.metrics);
        let Some(menu_bar) = self.bar_ref(bar) else {
            return;
        };
        let Some(index) = menu_bar.item_at(&style, local) else {
            return;
        };
        let Some(entry) = menu_bar.base.entry(index).cloned() else {
            return;
        };
        let open_here = menu_bar.base.child.is_some() && menu_bar.base.selected() == Some(index);
        if !entry.is_enabled() {
            return;
        }

        self.focus = Some(FocusTarget::Menu(bar));
        if !entry.has_children() {
            tracing::debug!(target: targets::MENU, ?bar, index, "bar entry activated");
            entry.activated.emit(Activation::Pointer(button));
            self.collapse_bar(bar);
        } else if open_here {
            self.collapse_bar(bar);
        } else {
            self.open_dropdown(bar, index, false);
        }
    }

    /// Fire the highlighted entry or open its dropdown with the first entry selected.
    fn bar_confirm(&mut self, bar: MenuId, activation: Activation) -> bool {
        let Some(menu_bar) = self.bar_ref(bar) else {
            return false;
        };
        let Some(index) = menu_bar.base.selected() else {
            return false;
        };
        let Some(entry) = menu_bar.base.entry(index).cloned() else {
            return false;
        };
        if !entry.is_enabled() {
            return false;
        }
        if entry.has_children() {
            self.open_dropdown(bar, index, true);
        } else {
            entry.activated.emit(activation);
            self.collapse_bar(bar);
        }
        true
    }

    fn bar_step(&mut self, bar: MenuId, forward: bool) {
        if let Some(index) = self.bar_ref(bar).and_then(|b| b.base.step_index(forward)) {
            self.bar_select(bar, index);
        }
    }

    pub(crate) fn bar_key(&mut self, bar: MenuId, event: &mut KeyPressEvent) {
        tracing::trace!(target: targets::INPUT, ?bar, key = ?event.key, "menu bar key");
        match event.key {
            Key::ArrowLeft => {
                event.base.accept();
                self.bar_step(bar, false);
            }
            Key::ArrowRight => {
                event.base.accept();
                self.bar_step(bar, true);
            }
            Key::ArrowDown | Key::Enter | Key::Space => {
                if self.bar_confirm(bar, Activation::Phantom) {
                    event.base.accept();
                }
            }
            Key::Escape => {
                event.base.accept();
                self.collapse_bar(bar);
            }
            _ => {}
        }
    }

    pub(crate) fn bar_gamepad(&mut self, bar: MenuId, event: &mut GamepadEvent) {
        match event.action {
            GamepadAction::Left | GamepadAction::PrevControl => {
                event.base.accept();
                self.bar_step(bar, false);
            }
            GamepadAction::Right | GamepadAction::NextControl => {
                event.base.accept();
                self.bar_step(bar, true);
            }
            GamepadAction::Down | GamepadAction::Press => {
                if self.bar_confirm(bar, Activation::Phantom) {
                    event.base.accept();
                }
            }
            GamepadAction::Up | GamepadAction::None => {}
        }
    }

    /// Collapse the bar when a press lands outside the bar and its dropdowns.
    pub(crate) fn bar_dismiss(&mut self, bar: MenuId, position: Point) {
        let open = self.bar_ref(bar).is_some_and(|b| b.base.child.is_some());
        if open && !self.check_area(bar, position) {
            tracing::debug!(target: targets::INPUT, ?bar, ?position, "press outside menu bar");
            self.collapse_bar(bar);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CascadeConfig;
    use crate::menu::MenuEntry;

    fn bar_manager() -> (Manager, MenuId) {
        let mut manager = Manager::new(CascadeConfig::default());
        let bar = manager
            .create_menu_bar(None, Rect::new(0, 0, 800, 24))
            .unwrap();
        manager
            .add_entry(bar, MenuEntry::new("File").with_child(MenuEntry::new("Open")))
            .unwrap();
        manager
            .add_entry(bar, MenuEntry::new("Edit").with_child(MenuEntry::new("Copy")))
            .unwrap();
        manager.add_entry(bar, MenuEntry::new("Help")).unwrap();
        (manager, bar)
    }

    #[test]
    fn test_item_rects_are_laid_out_left_to_right() {
        let (manager, bar) = bar_manager();
        let style = manager.bar_style();
        let rects = manager.menu_bar(bar).unwrap().item_rects(&style);
        // 2 px margin, then 4 chars * 7 px + 2 * 8 px padding each
        assert_eq!(rects[0], Rect::new(2, 0, 44, 24));
        assert_eq!(rects[1], Rect::new(46, 0, 44, 24));
        assert_eq!(rects[2], Rect::new(90, 0, 44, 24));
        assert_eq!(manager.menu_bar(bar).unwrap().item_at(&style, Point::new(50, 5)), Some(1));
    }

    #[test]
    fn test_click_toggles_dropdown() {
        let (mut manager, bar) = bar_manager();
        manager.bar_click(bar, Point::new(10, 5), MouseButton::Left);
        let child = manager.menu(bar).unwrap().base().child().unwrap();
        let dropdown = manager.context_menu(child).unwrap();
        assert_eq!(dropdown.bounds().origin, Point::new(2, 24));
        assert_eq!(manager.focus(), Some(FocusTarget::Menu(child)));

        manager.bar_click(bar, Point::new(10, 5), MouseButton::Left);
        assert_eq!(manager.menu(bar).unwrap().base().child(), None);
        assert!(manager.context_menu(child).is_none());
        assert_eq!(manager.focus(), Some(FocusTarget::Menu(bar)));
    }

    #[test]
    fn test_hover_switches_open_dropdown() {
        let (mut manager, bar) = bar_manager();
        manager.bar_click(bar, Point::new(10, 5), MouseButton::Left);
        let first = manager.menu(bar).unwrap().base().child().unwrap();

        manager.bar_pointer_move(bar, Point::new(50, 5));
        let second = manager.menu(bar).unwrap().base().child().unwrap();
        assert_ne!(first, second);
        assert!(manager.context_menu(first).is_none());
        assert_eq!(manager.menu(bar).unwrap().base().selected(), Some(1));
        assert_eq!(manager.context_menu(second).unwrap().bounds().left(), 46);
    }

    #[test]
    fn test_keyboard_opens_with_first_entry() {
        let (mut manager, bar) = bar_manager();
        manager.set_focus(Some(FocusTarget::Menu(bar)));

        let mut right = KeyPressEvent::plain(Key::ArrowRight);
        manager.key_press(&mut right);
        assert_eq!(manager.menu(bar).unwrap().base().selected(), Some(0));

        let mut down = KeyPressEvent::plain(Key::ArrowDown);
        assert!(manager.key_press(&mut down));
        let child = manager.menu(bar).unwrap().base().child().unwrap();
        assert_eq!(manager.context_menu(child).unwrap().base().selected(), Some(0));
    }

    #[test]
    fn test_press_outside_collapses_bar() {
        let (mut manager, bar) = bar_manager();
        manager.bar_click(bar, Point::new(10, 5), MouseButton::Left);
        assert!(manager.menu(bar).unwrap().base().child().is_some());

        manager.bar_dismiss(bar, Point::new(400, 400));
        assert!(manager.menu(bar).unwrap().base().child().is_none());
        assert_eq!(manager.menu(bar).unwrap().base().selected(), None);
        assert!(manager.menu(bar).unwrap().base().widget().is_visible());
    }

    #[test]
    fn test_escape_in_dropdown_clears_highlight() {
        let (mut manager, bar) = bar_manager();
        manager.bar_click(bar, Point::new(10, 5), MouseButton::Left);
        let child = manager.menu(bar).unwrap().base().child().unwrap();
        assert_eq!(manager.focus(), Some(FocusTarget::Menu(child)));

        let mut escape = KeyPressEvent::plain(Key::Escape);
        assert!(manager.key_press(&mut escape));
        assert!(manager.context_menu(child).is_none());
        assert_eq!(manager.menu(bar).unwrap().base().child(), None);
        assert_eq!(manager.menu(bar).unwrap().base().selected(), None);
        assert_eq!(manager.focus(), Some(FocusTarget::Menu(bar)));
    }
}
