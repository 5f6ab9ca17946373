//! State shared by every menu kind.

use std::sync::Arc;

use slotmap::new_key_type;

use crate::input::PointerDownSubscription;
use crate::menu::{ContextMenu, MenuBar, MenuEntry};
use crate::widget::{WidgetBase, WidgetId};

new_key_type! {
    /// Identifier of a menu in the manager's arena.
    pub struct MenuId;
}

/// The concrete kind of a menu, consulted by placement and collapse rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuKind {
    /// A positionable popup that can cascade.
    Context,
    /// A horizontal top-level bar.
    Bar,
}

/// Who asked for a menu to be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    /// A host widget, which gets focus back when the cascade closes.
    Widget(WidgetId),
    /// Another menu, e.g. the bar a dropdown was opened from.
    Menu(MenuId),
}

/// Entry list, selection and cascade links of a menu.
///
/// `parent` and `root` are non-owning links. `child` is the one owning link:
/// a child is destroyed by the menu that spawned it, never by anyone else.
#[derive(Debug)]
pub struct MenuBase {
    kind: MenuKind,
    pub(crate) widget: WidgetBase,
    entries: Vec<Arc<MenuEntry>>,
    selected: Option<usize>,
    pub(crate) child: Option<MenuId>,
    parent: Option<MenuId>,
    root: MenuId,
    pub(crate) subscription: Option<PointerDownSubscription>,
}

impl MenuBase {
    /// Create a menu with no entries. `root` is the menu's own id for roots.
    pub(crate) fn new(kind: MenuKind, root: MenuId, parent: Option<MenuId>) -> Self {
        Self {
            kind,
            widget: WidgetBase::new(),
            entries: Vec::new(),
            selected: None,
            child: None,
            parent,
            root,
            subscription: None,
        }
    }

    pub fn kind(&self) -> MenuKind {
        self.kind
    }

    pub fn widget(&self) -> &WidgetBase {
        &self.widget
    }

    // =========================================================================
    // Entries
    // =========================================================================

    /// Entries in display order.
    pub fn entries(&self) -> &[Arc<MenuEntry>] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&Arc<MenuEntry>> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push_entry(&mut self, entry: Arc<MenuEntry>) {
        self.entries.push(entry);
        self.widget.update();
    }

    /// Replace the entries, dropping a selection that no longer fits.
    pub(crate) fn replace_entries(&mut self, entries: Vec<Arc<MenuEntry>>) {
        self.entries = entries;
        if self.selected.is_some_and(|index| index >= self.entries.len()) {
            self.selected = None;
        }
        self.widget.update();
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The highlighted entry index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The highlighted entry.
    pub fn selected_entry(&self) -> Option<&Arc<MenuEntry>> {
        self.selected.and_then(|index| self.entries.get(index))
    }

    /// Set the selection. Out-of-range indices clear it.
    pub(crate) fn set_selected(&mut self, index: Option<usize>) {
        let index = index.filter(|&i| i < self.entries.len());
        if self.selected != index {
            self.selected = index;
            self.widget.update();
        }
    }

    /// Index one step forward or backward from the selection, wrapping.
    ///
    /// From no selection, forward lands on the first entry and backward on the
    /// last. Returns `None` for an empty menu.
    pub fn step_index(&self, forward: bool) -> Option<usize> {
        let count = self.entries.len();
        if count == 0 {
            return None;
        }
        Some(match (self.selected, forward) {
            (Some(index), true) => (index + 1) % count,
            (Some(index), false) => (index + count - 1) % count,
            (None, true) => 0,
            (None, false) => count - 1,
        })
    }

    // =========================================================================
    // Cascade Links
    // =========================================================================

    /// The live submenu, if any.
    pub fn child(&self) -> Option<MenuId> {
        self.child
    }

    /// The menu that spawned this one.
    pub fn parent(&self) -> Option<MenuId> {
        self.parent
    }

    /// The top of this menu's cascade.
    pub fn root(&self) -> MenuId {
        self.root
    }

    /// Whether this menu listens for global pointer presses.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }
}

/// A menu stored in the manager's arena.
#[derive(Debug)]
pub enum MenuNode {
    Context(ContextMenu),
    Bar(MenuBar),
}

impl MenuNode {
    pub fn base(&self) -> &MenuBase {
        match self {
            MenuNode::Context(menu) => &menu.base,
            MenuNode::Bar(bar) => &bar.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut MenuBase {
        match self {
            MenuNode::Context(menu) => &mut menu.base,
            MenuNode::Bar(bar) => &mut bar.base,
        }
    }

    pub fn kind(&self) -> MenuKind {
        self.base().kind()
    }

    pub fn as_context(&self) -> Option<&ContextMenu> {
        match self {
            MenuNode::Context(menu) => Some(menu),
            MenuNode::Bar(_) => None,
        }
    }

    pub fn as_context_mut(&mut self) -> Option<&mut ContextMenu> {
        match self {
            MenuNode::Context(menu) => Some(menu),
            MenuNode::Bar(_) => None,
        }
    }

    pub fn as_bar(&self) -> Option<&MenuBar> {
        match self {
            MenuNode::Bar(bar) => Some(bar),
            MenuNode::Context(_) => None,
        }
    }

    pub fn as_bar_mut(&mut self) -> Option<&mut MenuBar> {
        match self {
            MenuNode::Bar(bar) => Some(bar),
            MenuNode::Context(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn base_with(count: usize) -> MenuBase {
        let mut ids: SlotMap<MenuId, ()> = SlotMap::with_key();
        let mut base = MenuBase::new(MenuKind::Context, ids.insert(()), None);
        base.replace_entries(
            (0..count)
                .map(|i| Arc::new(MenuEntry::new(format!("Item {i}"))))
                .collect(),
        );
        base
    }

    #[test]
    fn test_step_wraps_forward_and_backward() {
        let mut base = base_with(3);
        assert_eq!(base.step_index(true), Some(0));
        assert_eq!(base.step_index(false), Some(2));

        base.set_selected(Some(2));
        assert_eq!(base.step_index(true), Some(0));
        base.set_selected(Some(0));
        assert_eq!(base.step_index(false), Some(2));
    }

    #[test]
    fn test_forward_cycle_returns_to_start() {
        let mut base = base_with(5);
        base.set_selected(Some(3));
        for _ in 0..5 {
            let next = base.step_index(true);
            base.set_selected(next);
        }
        assert_eq!(base.selected(), Some(3));
    }

    #[test]
    fn test_empty_menu_has_no_step() {
        let base = base_with(0);
        assert_eq!(base.step_index(true), None);
        assert_eq!(base.step_index(false), None);
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut base = base_with(2);
        base.set_selected(Some(7));
        assert_eq!(base.selected(), None);

        base.set_selected(Some(1));
        assert_eq!(base.selected_entry().map(|e| e.text()), Some("Item 1".to_string()));
        base.replace_entries(vec![Arc::new(MenuEntry::new("Only"))]);
        assert_eq!(base.selected(), None);
    }
}
