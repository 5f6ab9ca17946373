//! Menu entries.
//!
//! A [`MenuEntry`] is one line of a menu: a label with an optional icon, an
//! enabled flag, a "separated from previous" flag and its own list of child
//! entries. Entries are shared by `Arc`, so the submenu spawned for an entry
//! shows the very same child entries the application built.
//!
//! # Example
//!
//! ```
//! use horizon_cascade::MenuEntry;
//!
//! let edit = MenuEntry::new("Edit")
//!     .with_child(MenuEntry::new("Copy"))
//!     .with_child(MenuEntry::new("Paste").with_enabled(false));
//!
//! edit.children()[0].activated.connect(|_| println!("copy"));
//! assert!(edit.has_children());
//! ```

use std::fmt;
use std::sync::Arc;

use horizon_cascade_core::Signal;
use parking_lot::RwLock;

use crate::events::Activation;
use crate::skin::ImageId;

struct EntryState {
    text: String,
    icon: Option<ImageId>,
    enabled: bool,
    separated: bool,
    children: Vec<Arc<MenuEntry>>,
}

/// A single menu entry.
///
/// # Signals
///
/// - [`activated`](MenuEntry::activated): the entry was clicked or confirmed
///   and has no children
/// - [`highlighted`](MenuEntry::highlighted): the entry became the selection
pub struct MenuEntry {
    state: RwLock<EntryState>,

    /// Emitted when a leaf entry is activated, with the trigger.
    pub activated: Signal<Activation>,

    /// Emitted when the entry becomes the highlighted selection.
    pub highlighted: Signal<()>,
}

impl MenuEntry {
    /// Create an enabled entry with the given label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            state: RwLock::new(EntryState {
                text: text.into(),
                icon: None,
                enabled: true,
                separated: false,
                children: Vec::new(),
            }),
            activated: Signal::new(),
            highlighted: Signal::new(),
        }
    }

    // ========================================================================
    // Text and Icon
    // ========================================================================

    pub fn text(&self) -> String {
        self.state.read().text.clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.state.write().text = text.into();
    }

    pub fn icon(&self) -> Option<ImageId> {
        self.state.read().icon
    }

    pub fn set_icon(&self, icon: Option<ImageId>) {
        self.state.write().icon = icon;
    }

    /// Builder pattern for setting the icon.
    pub fn with_icon(self, icon: ImageId) -> Self {
        self.set_icon(Some(icon));
        self
    }

    // ========================================================================
    // Flags
    // ========================================================================

    pub fn is_enabled(&self) -> bool {
        self.state.read().enabled
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.state.write().enabled = enabled;
    }

    /// Builder pattern for setting the enabled state.
    pub fn with_enabled(self, enabled: bool) -> Self {
        self.set_enabled(enabled);
        self
    }

    /// Whether a rule is drawn between this entry and the previous one.
    pub fn is_separated(&self) -> bool {
        self.state.read().separated
    }

    pub fn set_separated(&self, separated: bool) {
        self.state.write().separated = separated;
    }

    /// Builder pattern for marking the entry as separated.
    pub fn separated(self) -> Self {
        self.set_separated(true);
        self
    }

    // ========================================================================
    // Children
    // ========================================================================

    /// The child entries, in display order.
    pub fn children(&self) -> Vec<Arc<MenuEntry>> {
        self.state.read().children.clone()
    }

    pub fn has_children(&self) -> bool {
        !self.state.read().children.is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.state.read().children.len()
    }

    /// Append a child entry.
    pub fn add_child(&self, child: Arc<MenuEntry>) {
        self.state.write().children.push(child);
    }

    /// Remove every child entry.
    pub fn clear_children(&self) {
        self.state.write().children.clear();
    }

    /// Builder pattern for appending a child entry.
    pub fn with_child(self, child: MenuEntry) -> Self {
        self.add_child(Arc::new(child));
        self
    }

    /// Builder pattern for appending several child entries.
    pub fn with_children(self, children: impl IntoIterator<Item = MenuEntry>) -> Self {
        {
            let mut state = self.state.write();
            state.children.extend(children.into_iter().map(Arc::new));
        }
        self
    }
}

impl fmt::Debug for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("MenuEntry")
            .field("text", &state.text)
            .field("icon", &state.icon)
            .field("enabled", &state.enabled)
            .field("separated", &state.separated)
            .field("children", &state.children.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::MouseButton;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_entry_defaults() {
        let entry = MenuEntry::new("Open");
        assert_eq!(entry.text(), "Open");
        assert!(entry.is_enabled());
        assert!(!entry.is_separated());
        assert!(!entry.has_children());
        assert_eq!(entry.icon(), None);
    }

    #[test]
    fn test_entry_builder() {
        let entry = MenuEntry::new("Recent")
            .with_icon(ImageId(4))
            .separated()
            .with_children([MenuEntry::new("a.txt"), MenuEntry::new("b.txt")])
            .with_child(MenuEntry::new("Clear").with_enabled(false));

        assert_eq!(entry.icon(), Some(ImageId(4)));
        assert!(entry.is_separated());
        assert_eq!(entry.child_count(), 3);
        let children = entry.children();
        assert_eq!(children[1].text(), "b.txt");
        assert!(!children[2].is_enabled());

        entry.clear_children();
        assert!(!entry.has_children());
    }

    #[test]
    fn test_children_are_shared() {
        let parent = MenuEntry::new("File").with_child(MenuEntry::new("Save"));
        let first = parent.children();
        let second = parent.children();
        assert!(Arc::ptr_eq(&first[0], &second[0]));

        first[0].set_text("Save As");
        assert_eq!(second[0].text(), "Save As");
    }

    #[test]
    fn test_activated_signal() {
        let entry = MenuEntry::new("Quit");
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        entry.activated.connect(move |activation| {
            assert_eq!(*activation, Activation::Pointer(MouseButton::Left));
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        entry.activated.emit(Activation::Pointer(MouseButton::Left));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
