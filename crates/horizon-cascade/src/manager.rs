//! The GUI manager hosting menu cascades.
//!
//! [`Manager`] owns every menu in an arena keyed by [`MenuId`]. Parent and
//! root links are plain ids, the child link is the one owning edge, and a
//! child is only ever destroyed by the menu that spawned it. The manager also
//! keeps the active control set (visible menus in z-order), the focus, the
//! pointer-down channel used for outside-click dismissal, and the tick clock
//! that drives delayed submenu expansion.
//!
//! The host feeds it input and a per-frame [`update`](Manager::update):
//!
//! ```
//! use std::time::Duration;
//! use horizon_cascade::{CascadeConfig, Manager, MenuEntry, Point, PointerEvent};
//!
//! let mut manager = Manager::new(CascadeConfig::default());
//! let menu = manager.create_context_menu();
//! manager.add_entry(menu, MenuEntry::new("Open")).unwrap();
//! manager.add_entry(menu, MenuEntry::new("Recent").with_child(MenuEntry::new("a.txt"))).unwrap();
//! manager.show_at(menu, None, 100, 100).unwrap();
//!
//! // Dwell on "Recent" until the submenu opens.
//! manager.pointer_move(&mut PointerEvent::moved(Point::new(110, 130)));
//! manager.update(Duration::from_millis(600));
//! assert_eq!(manager.cascade_of(menu).len(), 2);
//! ```

use std::sync::Arc;
use std::time::Duration;

use horizon_cascade_core::logging::{span_names, targets};
use horizon_cascade_core::{PerfSpan, TickClock};
use slotmap::SlotMap;

use crate::config::CascadeConfig;
use crate::error::{CascadeError, Result};
use crate::events::{Activation, GamepadEvent, KeyPressEvent, PointerEvent};
use crate::geometry::{Point, Rect, Size};
use crate::input::PointerDownChannel;
use crate::menu::{
    BarStyle, ContextMenu, ContextStyle, MenuBar, MenuEntry, MenuId, MenuKind, MenuNode, Sender,
};
use crate::render::Renderer;
use crate::skin::Skin;
use crate::widget::{Attachment, HostWidget, WidgetId, WidgetRegistry};

/// What currently receives keyboard and gamepad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    Menu(MenuId),
    Widget(WidgetId),
}

/// Owner of menus, focus and input routing.
pub struct Manager {
    pub(crate) config: CascadeConfig,
    pub(crate) skin: Skin,
    pub(crate) screen: Size,
    menu_delay: Duration,
    pub(crate) clock: TickClock,
    pub(crate) menus: SlotMap<MenuId, MenuNode>,
    pub(crate) widgets: WidgetRegistry,
    /// Visible menus, bottom to top.
    active: Vec<MenuId>,
    pub(crate) focus: Option<FocusTarget>,
    hovered: Option<MenuId>,
    pointer_down: PointerDownChannel,
}

impl Manager {
    /// Create a manager with the standard skin.
    pub fn new(config: CascadeConfig) -> Self {
        Self::with_skin(config, Skin::standard())
    }

    /// Create a manager with a custom skin.
    pub fn with_skin(config: CascadeConfig, skin: Skin) -> Self {
        let menu_delay = config.menu_delay();
        let screen = config.screen.size();
        tracing::debug!(target: targets::MENU, ?screen, ?menu_delay, "manager created");
        Self {
            config,
            skin,
            screen,
            menu_delay,
            clock: TickClock::new(),
            menus: SlotMap::with_key(),
            widgets: WidgetRegistry::new(),
            active: Vec::new(),
            focus: None,
            hovered: None,
            pointer_down: PointerDownChannel::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &CascadeConfig {
        &self.config
    }

    pub fn skin(&self) -> &Skin {
        &self.skin
    }

    pub fn screen_size(&self) -> Size {
        self.screen
    }

    /// Resize the render target. Open menus keep their position.
    pub fn set_screen_size(&mut self, size: Size) {
        self.screen = size;
    }

    /// The submenu-open delay, already clamped to be non-negative.
    pub fn menu_delay(&self) -> Duration {
        self.menu_delay
    }

    /// Current tick-clock time in milliseconds.
    pub fn now(&self) -> u64 {
        self.clock.now()
    }

    pub fn context_style(&self) -> ContextStyle<'_> {
        ContextStyle::new(&self.skin, &self.config.metrics)
    }

    pub fn bar_style(&self) -> BarStyle<'_> {
        BarStyle::new(&self.skin, &self.config.metrics)
    }

    pub fn menu(&self, menu: MenuId) -> Option<&MenuNode> {
        self.menus.get(menu)
    }

    pub fn context_menu(&self, menu: MenuId) -> Option<&ContextMenu> {
        self.context_ref(menu)
    }

    pub fn menu_bar(&self, menu: MenuId) -> Option<&MenuBar> {
        self.bar_ref(menu)
    }

    /// Number of live menus, hidden ones included.
    pub fn menu_count(&self) -> usize {
        self.menus.len()
    }

    /// Visible menus, bottom to top.
    pub fn active_menus(&self) -> &[MenuId] {
        &self.active
    }

    pub fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Option<FocusTarget>) {
        tracing::trace!(target: targets::INPUT, ?focus, "focus set");
        self.focus = focus;
    }

    /// The menu the pointer is over.
    pub fn hovered(&self) -> Option<MenuId> {
        self.hovered
    }

    pub fn pointer_down_channel(&self) -> &PointerDownChannel {
        &self.pointer_down
    }

    pub fn widgets(&self) -> &WidgetRegistry {
        &self.widgets
    }

    // =========================================================================
    // Host Widgets
    // =========================================================================

    /// Register a host widget that can request menus.
    pub fn add_widget(
        &mut self,
        geometry: Rect,
        parent: Option<WidgetId>,
        is_container: bool,
    ) -> Result<WidgetId> {
        if let Some(parent) = parent {
            if !self.widgets.contains(parent) {
                return Err(CascadeError::UnknownWidget(parent));
            }
        }
        Ok(self.widgets.insert(HostWidget {
            geometry,
            parent,
            is_container,
        }))
    }

    /// Unregister a host widget.
    pub fn remove_widget(&mut self, widget: WidgetId) -> Result<()> {
        self.widgets
            .remove(widget)
            .ok_or(CascadeError::UnknownWidget(widget))?;
        if self.focus == Some(FocusTarget::Widget(widget)) {
            self.focus = None;
        }
        Ok(())
    }

    pub(crate) fn attachment_for(&self, sender: Option<Sender>) -> Attachment {
        let container = match sender {
            Some(Sender::Widget(widget)) => self.widgets.root_container_of(widget),
            Some(Sender::Menu(menu)) => self
                .menus
                .get(menu)
                .and_then(|node| node.base().widget().attachment().container()),
            None => None,
        };
        container
            .and_then(|id| {
                self.widgets
                    .absolute_origin(id)
                    .map(|origin| Attachment::Container { id, origin })
            })
            .unwrap_or(Attachment::Manager)
    }

    // =========================================================================
    // Menu Lifecycle
    // =========================================================================

    /// Create a hidden root context menu.
    ///
    /// The menu listens for global pointer presses until it is disposed.
    pub fn create_context_menu(&mut self) -> MenuId {
        let menu = self
            .menus
            .insert_with_key(|id| MenuNode::Context(ContextMenu::new(id, None)));
        let subscription = self.pointer_down.subscribe(menu);
        if let Some(node) = self.menus.get_mut(menu) {
            node.base_mut().subscription = Some(subscription);
        }
        tracing::debug!(target: targets::MENU, ?menu, "context menu created");
        menu
    }

    /// Create a visible menu bar at `geometry`, relative to `container`.
    pub fn create_menu_bar(&mut self, container: Option<WidgetId>, geometry: Rect) -> Result<MenuId> {
        let attachment = match container {
            Some(id) => Attachment::Container {
                id,
                origin: self
                    .widgets
                    .absolute_origin(id)
                    .ok_or(CascadeError::UnknownWidget(id))?,
            },
            None => Attachment::Manager,
        };

        let bar = self
            .menus
            .insert_with_key(|id| MenuNode::Bar(MenuBar::new(id)));
        let subscription = self.pointer_down.subscribe(bar);
        if let Some(node) = self.menus.get_mut(bar) {
            let base = node.base_mut();
            base.subscription = Some(subscription);
            base.widget.set_attachment(attachment);
            base.widget.set_geometry(geometry);
            base.widget.set_visible(true);
        }
        self.raise(bar);
        tracing::debug!(target: targets::MENU, ?bar, ?geometry, "menu bar created");
        Ok(bar)
    }

    /// Append an entry to a menu.
    pub fn add_entry(&mut self, menu: MenuId, entry: impl Into<Arc<MenuEntry>>) -> Result<()> {
        let node = self
            .menus
            .get_mut(menu)
            .ok_or(CascadeError::UnknownMenu(menu))?;
        node.base_mut().push_entry(entry.into());
        Ok(())
    }

    /// Replace all entries of a menu.
    pub fn set_entries(
        &mut self,
        menu: MenuId,
        entries: impl IntoIterator<Item = Arc<MenuEntry>>,
    ) -> Result<()> {
        if !self.menus.contains_key(menu) {
            return Err(CascadeError::UnknownMenu(menu));
        }
        // An open submenu belongs to an entry that is about to go away.
        self.teardown_child(menu);
        if let Some(context) = self.context_mut(menu) {
            context.dwell.disarm();
        }
        if let Some(node) = self.menus.get_mut(menu) {
            let base = node.base_mut();
            base.set_selected(None);
            base.replace_entries(entries.into_iter().collect());
        }
        Ok(())
    }

    /// Hide a menu's submenus, and the menu itself when `hide_current` is set.
    ///
    /// Hiding a submenu destroys it and detaches it from its parent; if the
    /// pointer keeps dwelling on the parent entry, the submenu opens again.
    /// Menu bars never hide themselves; for them this closes the dropdown and
    /// clears the highlight.
    pub fn hide_menu(&mut self, menu: MenuId, hide_current: bool) -> Result<()> {
        let parent = self
            .menus
            .get(menu)
            .ok_or(CascadeError::UnknownMenu(menu))?
            .base()
            .parent();

        match parent {
            Some(parent) if hide_current => {
                self.close_submenu(parent);
                let now = self.clock.now();
                if let Some(context) = self.context_mut(parent) {
                    if context.base.selected().is_some() {
                        context.dwell.arm(now);
                    }
                }
            }
            _ => self.hide_node(menu, hide_current),
        }
        Ok(())
    }

    /// Collapse the whole cascade `menu` belongs to.
    pub fn collapse_cascade(&mut self, menu: MenuId) -> Result<()> {
        if !self.menus.contains_key(menu) {
            return Err(CascadeError::UnknownMenu(menu));
        }
        self.collapse_from_root(menu);
        Ok(())
    }

    /// Hide and destroy a menu, detaching it from its parent.
    ///
    /// Disposing a root releases its pointer-down subscription.
    pub fn dispose_menu(&mut self, menu: MenuId) -> Result<()> {
        let parent = self
            .menus
            .get(menu)
            .ok_or(CascadeError::UnknownMenu(menu))?
            .base()
            .parent();

        self.hide_node(menu, true);
        if let Some(node) = parent.and_then(|parent| self.menus.get_mut(parent)) {
            let base = node.base_mut();
            if base.child == Some(menu) {
                base.child = None;
            }
        }
        self.destroy(menu);
        Ok(())
    }

    /// The live chain starting at `menu`: the menu, its child, and so on.
    pub fn cascade_of(&self, menu: MenuId) -> Vec<MenuId> {
        let mut chain = Vec::new();
        let mut current = self.menus.contains_key(menu).then_some(menu);
        while let Some(id) = current {
            chain.push(id);
            current = self.menus.get(id).and_then(|node| node.base().child());
        }
        chain
    }

    /// Whether `position` lies inside `menu` or any live descendant.
    ///
    /// Edges count as outside. Hidden menus never contain anything.
    pub fn check_area(&self, menu: MenuId, position: Point) -> bool {
        let Some(node) = self.menus.get(menu) else {
            return false;
        };
        let base = node.base();
        if !base.widget().is_visible() {
            return false;
        }
        if base.widget().absolute_rect().contains_strict(position) {
            return true;
        }
        base.child()
            .is_some_and(|child| self.check_area(child, position))
    }

    pub(crate) fn not_a_context_menu(&self, menu: MenuId) -> CascadeError {
        if self.menus.contains_key(menu) {
            CascadeError::NotAContextMenu(menu)
        } else {
            CascadeError::UnknownMenu(menu)
        }
    }

    pub(crate) fn hide_node(&mut self, menu: MenuId, hide_current: bool) {
        match self.menus.get(menu).map(MenuNode::kind) {
            Some(MenuKind::Context) => self.hide_context(menu, hide_current),
            Some(MenuKind::Bar) => self.collapse_bar(menu),
            None => {}
        }
    }

    /// Destroy the submenu of `parent`. A bar also drops its highlight.
    pub(crate) fn close_submenu(&mut self, parent: MenuId) {
        match self.menus.get(parent).map(MenuNode::kind) {
            Some(MenuKind::Context) => self.teardown_child(parent),
            Some(MenuKind::Bar) => self.collapse_bar(parent),
            None => {}
        }
    }

    /// Collapse from the root of `menu`'s cascade.
    pub(crate) fn collapse_from_root(&mut self, menu: MenuId) {
        let Some(root) = self.menus.get(menu).map(|node| node.base().root()) else {
            return;
        };
        match self.menus.get(root).map(MenuNode::kind) {
            Some(MenuKind::Context) => self.hide_context(root, true),
            Some(MenuKind::Bar) => self.collapse_bar(root),
            None => {}
        }
    }

    /// Hide and destroy the child of `menu`, if any.
    pub(crate) fn teardown_child(&mut self, menu: MenuId) {
        let Some(child) = self
            .menus
            .get_mut(menu)
            .and_then(|node| node.base_mut().child.take())
        else {
            return;
        };
        self.hide_node(child, true);
        self.destroy(child);
    }

    /// Remove a menu from the arena. Its child must already be gone.
    fn destroy(&mut self, menu: MenuId) {
        self.teardown_child(menu);
        self.lower(menu);
        self.release_focus(menu);
        if self.hovered == Some(menu) {
            self.hovered = None;
        }
        if self.menus.remove(menu).is_some() {
            tracing::debug!(target: targets::MENU, ?menu, "menu destroyed");
        }
    }

    /// Move focus off `menu` to whoever requested it.
    pub(crate) fn release_focus(&mut self, menu: MenuId) {
        if self.focus != Some(FocusTarget::Menu(menu)) {
            return;
        }
        let sender = self.context_ref(menu).and_then(ContextMenu::sender);
        self.focus = match sender {
            Some(Sender::Widget(widget)) if self.widgets.contains(widget) => {
                Some(FocusTarget::Widget(widget))
            }
            Some(Sender::Menu(other)) if other != menu && self.menus.contains_key(other) => {
                Some(FocusTarget::Menu(other))
            }
            _ => None,
        };
        tracing::trace!(target: targets::INPUT, ?menu, focus = ?self.focus, "focus released");
    }

    /// Put `menu` on top of the active set.
    pub(crate) fn raise(&mut self, menu: MenuId) {
        self.active.retain(|&id| id != menu);
        self.active.push(menu);
    }

    /// Take `menu` out of the active set.
    pub(crate) fn lower(&mut self, menu: MenuId) {
        self.active.retain(|&id| id != menu);
    }

    // =========================================================================
    // Update and Draw
    // =========================================================================

    /// Advance the clock and run per-tick menu work.
    pub fn update(&mut self, elapsed: Duration) {
        let _span = PerfSpan::new(span_names::UPDATE);
        let now = self.clock.advance(elapsed);
        let delay = self.menu_delay;

        for menu in self.active.clone() {
            if self.context_ref(menu).is_some() {
                self.context_update(menu, now, delay);
            }
        }
    }

    /// Issue draw requests for every visible menu, bottom to top.
    pub fn draw(&mut self, renderer: &mut dyn Renderer) {
        let _span = PerfSpan::new(span_names::DRAW);
        let context_style = ContextStyle::new(&self.skin, &self.config.metrics);
        let bar_style = BarStyle::new(&self.skin, &self.config.metrics);

        for &menu in &self.active {
            match self.menus.get(menu) {
                Some(MenuNode::Context(context)) if context.is_visible() => {
                    context.draw(&context_style, renderer);
                }
                Some(MenuNode::Bar(bar)) if bar.base.widget.is_visible() => {
                    bar.draw(&bar_style, renderer);
                }
                _ => {}
            }
        }

        for node in self.menus.values_mut() {
            node.base_mut().widget.mark_painted();
        }
    }

    /// Whether any visible menu changed since the last draw.
    pub fn needs_repaint(&self) -> bool {
        self.active.iter().any(|&menu| {
            self.menus
                .get(menu)
                .is_some_and(|node| node.base().widget().needs_repaint())
        })
    }

    // =========================================================================
    // Input Routing
    // =========================================================================

    /// Topmost visible menu containing `position`.
    pub fn menu_at(&self, position: Point) -> Option<MenuId> {
        self.active.iter().rev().copied().find(|&menu| {
            self.menus.get(menu).is_some_and(|node| {
                let widget = node.base().widget();
                widget.is_visible() && widget.absolute_rect().contains(position)
            })
        })
    }

    /// Route a pointer move. Returns whether a menu was under the pointer.
    pub fn pointer_move(&mut self, event: &mut PointerEvent) -> bool {
        let position = event.position;
        let target = self.menu_at(position);

        if self.hovered != target {
            if let Some(previous) = self.hovered.take() {
                self.pointer_leave(previous, position);
            }
            self.hovered = target;
        }

        let Some(menu) = target else {
            return false;
        };
        let Some(local) = self
            .menus
            .get(menu)
            .map(|node| node.base().widget().map_from_screen(position))
        else {
            return false;
        };
        match self.menus.get(menu).map(MenuNode::kind) {
            Some(MenuKind::Context) => self.context_pointer_move(menu, local),
            Some(MenuKind::Bar) => self.bar_pointer_move(menu, local),
            None => {}
        }
        event.base.accept();
        true
    }

    fn pointer_leave(&mut self, menu: MenuId, position: Point) {
        tracing::trace!(target: targets::INPUT, ?menu, ?position, "pointer left menu");
        match self.menus.get(menu).map(MenuNode::kind) {
            Some(MenuKind::Context) => self.context_pointer_leave(menu, position),
            Some(MenuKind::Bar) => self.bar_pointer_leave(menu),
            None => {}
        }
    }

    /// Route a pointer press.
    ///
    /// Every pointer-down subscriber sees the press first, so cascades the
    /// press lands outside of collapse. Returns whether a menu is under the
    /// pointer afterwards.
    pub fn pointer_down(&mut self, event: &mut PointerEvent) -> bool {
        let position = event.position;
        for menu in self.pointer_down.listeners() {
            match self.menus.get(menu).map(MenuNode::kind) {
                Some(MenuKind::Context) => self.context_dismiss(menu, position),
                Some(MenuKind::Bar) => self.bar_dismiss(menu, position),
                None => {}
            }
        }

        let hit = self.menu_at(position).is_some();
        if hit {
            event.base.accept();
        }
        hit
    }

    /// Route a pointer release as a click on the menu under the pointer.
    pub fn pointer_up(&mut self, event: &mut PointerEvent) -> bool {
        let Some(button) = event.button else {
            return false;
        };
        let Some(menu) = self.menu_at(event.position) else {
            return false;
        };
        let Some(local) = self
            .menus
            .get(menu)
            .map(|node| node.base().widget().map_from_screen(event.position))
        else {
            return false;
        };

        tracing::trace!(target: targets::INPUT, ?menu, ?button, "click");
        match self.menus.get(menu).map(MenuNode::kind) {
            Some(MenuKind::Context) => self.context_activate(menu, Activation::Pointer(button)),
            Some(MenuKind::Bar) => self.bar_click(menu, local, button),
            None => {}
        }
        event.base.accept();
        true
    }

    /// Route a key press to the focused menu. Returns whether it was handled.
    pub fn key_press(&mut self, event: &mut KeyPressEvent) -> bool {
        let Some(FocusTarget::Menu(menu)) = self.focus else {
            return false;
        };
        match self.menus.get(menu).map(MenuNode::kind) {
            Some(MenuKind::Context) => self.context_key(menu, event),
            Some(MenuKind::Bar) => self.bar_key(menu, event),
            None => tracing::trace!(target: targets::INPUT, ?menu, "focused menu is gone"),
        }
        event.base.is_accepted()
    }

    /// Route a gamepad press to the focused menu. Returns whether it was handled.
    pub fn gamepad_press(&mut self, event: &mut GamepadEvent) -> bool {
        let Some(FocusTarget::Menu(menu)) = self.focus else {
            return false;
        };
        match self.menus.get(menu).map(MenuNode::kind) {
            Some(MenuKind::Context) => self.context_gamepad(menu, event),
            Some(MenuKind::Bar) => self.bar_gamepad(menu, event),
            None => tracing::trace!(target: targets::INPUT, ?menu, "focused menu is gone"),
        }
        event.base.is_accepted()
    }
}

impl std::fmt::Debug for Manager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manager")
            .field("screen", &self.screen)
            .field("menu_delay", &self.menu_delay)
            .field("now", &self.clock.now())
            .field("menus", &self.menus.len())
            .field("active", &self.active)
            .field("focus", &self.focus)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Key, MouseButton};

    fn manager() -> Manager {
        Manager::new(CascadeConfig::default())
    }

    #[test]
    fn test_create_context_menu_subscribes() {
        let mut manager = manager();
        let menu = manager.create_context_menu();
        assert_eq!(manager.pointer_down_channel().listeners(), vec![menu]);
        assert!(manager.menu(menu).unwrap().base().is_subscribed());
        assert!(!manager.context_menu(menu).unwrap().is_visible());
        assert!(manager.active_menus().is_empty());

        manager.dispose_menu(menu).unwrap();
        assert!(manager.pointer_down_channel().is_empty());
        assert_eq!(manager.menu_count(), 0);
    }

    #[test]
    fn test_unknown_ids_are_errors() {
        let mut manager = manager();
        let menu = manager.create_context_menu();
        manager.dispose_menu(menu).unwrap();

        assert!(matches!(manager.show_at(menu, None, 0, 0), Err(CascadeError::UnknownMenu(_))));
        assert!(matches!(manager.hide_menu(menu, true), Err(CascadeError::UnknownMenu(_))));
        assert!(matches!(manager.dispose_menu(menu), Err(CascadeError::UnknownMenu(_))));
        assert!(matches!(
            manager.add_entry(menu, MenuEntry::new("x")),
            Err(CascadeError::UnknownMenu(_))
        ));
    }

    #[test]
    fn test_show_on_bar_is_rejected() {
        let mut manager = manager();
        let bar = manager.create_menu_bar(None, Rect::new(0, 0, 800, 24)).unwrap();
        assert!(matches!(manager.show(bar), Err(CascadeError::NotAContextMenu(_))));
    }

    #[test]
    fn test_show_in_root_container() {
        let mut manager = manager();
        let window = manager.add_widget(Rect::new(50, 40, 400, 300), None, true).unwrap();
        let button = manager
            .add_widget(Rect::new(10, 10, 80, 20), Some(window), false)
            .unwrap();
        let menu = manager.create_context_menu();
        manager.add_entry(menu, MenuEntry::new("Copy")).unwrap();

        manager.show_at(menu, Some(Sender::Widget(button)), 120, 90).unwrap();
        let context = manager.context_menu(menu).unwrap();
        assert_eq!(
            context.base().widget().attachment(),
            Attachment::Container {
                id: window,
                origin: Point::new(50, 40)
            }
        );
        assert_eq!(context.geometry().origin, Point::new(70, 50));
        assert_eq!(context.bounds().origin, Point::new(120, 90));
        assert_eq!(manager.focus(), Some(FocusTarget::Menu(menu)));
    }

    #[test]
    fn test_show_with_unknown_widget() {
        let mut manager = manager();
        let widget = manager.add_widget(Rect::new(0, 0, 10, 10), None, false).unwrap();
        manager.remove_widget(widget).unwrap();
        let menu = manager.create_context_menu();
        assert!(matches!(
            manager.show_at(menu, Some(Sender::Widget(widget)), 0, 0),
            Err(CascadeError::UnknownWidget(_))
        ));
    }

    #[test]
    fn test_hide_returns_focus_to_sender() {
        let mut manager = manager();
        let widget = manager.add_widget(Rect::new(0, 0, 10, 10), None, false).unwrap();
        let menu = manager.create_context_menu();
        manager.add_entry(menu, MenuEntry::new("A")).unwrap();
        manager.show_at(menu, Some(Sender::Widget(widget)), 30, 30).unwrap();
        assert_eq!(manager.active_menus(), &[menu]);

        let mut escape = KeyPressEvent::plain(Key::Escape);
        assert!(manager.key_press(&mut escape));
        assert!(!manager.context_menu(menu).unwrap().is_visible());
        assert!(manager.active_menus().is_empty());
        assert_eq!(manager.focus(), Some(FocusTarget::Widget(widget)));
    }

    #[test]
    fn test_pointer_routing_tracks_hover() {
        let mut manager = manager();
        let menu = manager.create_context_menu();
        manager.add_entry(menu, MenuEntry::new("A")).unwrap();
        manager.add_entry(menu, MenuEntry::new("B")).unwrap();
        manager.show_at(menu, None, 100, 100).unwrap();

        assert!(manager.pointer_move(&mut PointerEvent::moved(Point::new(110, 105))));
        assert_eq!(manager.hovered(), Some(menu));
        assert_eq!(manager.context_menu(menu).unwrap().base().selected(), Some(0));

        assert!(!manager.pointer_move(&mut PointerEvent::moved(Point::new(500, 500))));
        assert_eq!(manager.hovered(), None);
        assert_eq!(manager.context_menu(menu).unwrap().base().selected(), None);
    }

    #[test]
    fn test_right_click_does_not_activate() {
        let mut manager = manager();
        let menu = manager.create_context_menu();
        manager.add_entry(menu, MenuEntry::new("A")).unwrap();
        manager.show_at(menu, None, 100, 100).unwrap();
        manager.pointer_move(&mut PointerEvent::moved(Point::new(110, 105)));

        let mut release = PointerEvent::button(Point::new(110, 105), MouseButton::Right);
        assert!(manager.pointer_up(&mut release));
        assert!(manager.context_menu(menu).unwrap().is_visible());
    }

    #[test]
    fn test_set_entries_clears_stale_selection() {
        let mut manager = manager();
        let menu = manager.create_context_menu();
        for text in ["A", "B", "C"] {
            manager.add_entry(menu, MenuEntry::new(text)).unwrap();
        }
        manager.show_at(menu, None, 0, 0).unwrap();
        manager.key_press(&mut KeyPressEvent::plain(Key::ArrowUp));
        assert_eq!(manager.context_menu(menu).unwrap().base().selected(), Some(2));

        manager
            .set_entries(menu, [Arc::new(MenuEntry::new("Only"))])
            .unwrap();
        let context = manager.context_menu(menu).unwrap();
        assert_eq!(context.base().len(), 1);
        assert_eq!(context.base().selected(), None);
    }

    #[test]
    fn test_repaint_tracking() {
        let mut manager = manager();
        let menu = manager.create_context_menu();
        manager.add_entry(menu, MenuEntry::new("A")).unwrap();
        manager.show_at(menu, None, 10, 10).unwrap();
        assert!(manager.needs_repaint());

        manager.draw(&mut crate::render::DrawList::new());
        assert!(!manager.needs_repaint());

        manager.pointer_move(&mut PointerEvent::moved(Point::new(20, 15)));
        assert!(manager.needs_repaint());
    }
}
