//! Textual dumps of open cascades for debugging.
//!
//! ```
//! use horizon_cascade::{CascadeConfig, Manager, MenuEntry};
//! use horizon_cascade::debug::CascadeTreeDebug;
//!
//! let mut manager = Manager::new(CascadeConfig::default());
//! let menu = manager.create_context_menu();
//! manager.add_entry(menu, MenuEntry::new("Open")).unwrap();
//! manager.show_at(menu, None, 10, 10).unwrap();
//!
//! let dump = CascadeTreeDebug::new(&manager).format_cascade(menu);
//! assert!(dump.contains("context menu"));
//! ```

use std::fmt::{self, Write};

use crate::manager::Manager;
use crate::menu::{MenuId, MenuKind, MenuNode};

/// Style of tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII connectors (`+--`).
    Ascii,
    /// Unicode box-drawing connectors.
    #[default]
    Unicode,
    /// Dashes only.
    Compact,
}

/// Configuration for cascade dump output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    pub style: TreeStyle,
    /// Whether to show menu ids.
    pub show_ids: bool,
    /// Whether to list each menu's entries below it.
    pub show_entries: bool,
    /// Maximum cascade depth to follow (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: true,
            show_entries: false,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Options that also list entries.
    pub fn detailed() -> Self {
        Self {
            show_entries: true,
            ..Default::default()
        }
    }

    /// Options without ids.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            ..Default::default()
        }
    }
}

/// Renders the menus of a [`Manager`] as an indented tree.
#[derive(Debug, Clone)]
pub struct CascadeTreeDebug<'a> {
    manager: &'a Manager,
    options: TreeFormatOptions,
}

impl<'a> CascadeTreeDebug<'a> {
    pub fn new(manager: &'a Manager) -> Self {
        Self::with_options(manager, TreeFormatOptions::default())
    }

    pub fn with_options(manager: &'a Manager, options: TreeFormatOptions) -> Self {
        Self { manager, options }
    }

    /// Format every root menu and its open cascade.
    pub fn format_all(&self) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_all(&mut output);
        output
    }

    /// Format the cascade starting at `menu`.
    pub fn format_cascade(&self, menu: MenuId) -> String {
        let mut output = String::new();
        let _ = self.write_cascade(menu, 0, &mut output);
        output
    }

    fn write_all(&self, output: &mut impl Write) -> fmt::Result {
        let roots: Vec<MenuId> = self
            .manager
            .menus
            .iter()
            .filter(|(_, node)| node.base().parent().is_none())
            .map(|(id, _)| id)
            .collect();

        writeln!(output, "Menus ({} total):", self.manager.menu_count())?;
        if roots.is_empty() {
            writeln!(output, "  (empty)")?;
        }
        for root in roots {
            self.write_cascade(root, 0, output)?;
        }
        Ok(())
    }

    fn write_cascade(&self, menu: MenuId, depth: usize, output: &mut impl Write) -> fmt::Result {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return Ok(());
        }
        let Some(node) = self.manager.menu(menu) else {
            return Ok(());
        };
        let base = node.base();

        output.write_str(&self.build_prefix(depth))?;
        match node.kind() {
            MenuKind::Context => output.write_str("context menu")?,
            MenuKind::Bar => output.write_str("menu bar")?,
        }
        if self.options.show_ids {
            write!(output, " [{menu:?}]")?;
        }

        let visible = if base.widget().is_visible() { "visible" } else { "hidden" };
        write!(output, " ({visible}, {} entries", base.len())?;
        if let Some(selected) = base.selected() {
            write!(output, ", selected {selected}")?;
        }
        if let MenuNode::Context(context) = node {
            if let Some(sender) = context.sender() {
                write!(output, ", from {sender:?}")?;
            }
        }
        writeln!(output, ")")?;

        if self.options.show_entries {
            let indent = " ".repeat((depth + 1) * self.options.indent_size);
            for (i, entry) in base.entries().iter().enumerate() {
                let marker = if base.selected() == Some(i) { '>' } else { ' ' };
                write!(output, "{indent}{marker} {}", entry.text())?;
                if !entry.is_enabled() {
                    output.write_str(" (disabled)")?;
                }
                if entry.has_children() {
                    output.write_str(" ...")?;
                }
                output.write_char('\n')?;
            }
        }

        match base.child() {
            Some(child) => self.write_cascade(child, depth + 1, output),
            None => Ok(()),
        }
    }

    fn build_prefix(&self, depth: usize) -> String {
        if depth == 0 {
            return String::new();
        }
        let connector = match self.options.style {
            TreeStyle::Ascii => "+-- ",
            TreeStyle::Unicode => "\u{2514}\u{2500}\u{2500} ",
            TreeStyle::Compact => "- ",
        };
        let mut prefix = " ".repeat((depth - 1) * (self.options.indent_size + 2));
        prefix.push_str(connector);
        prefix
    }
}

impl fmt::Display for CascadeTreeDebug<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_all(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CascadeConfig;
    use crate::menu::MenuEntry;

    #[test]
    fn test_format_open_cascade() {
        let mut manager = Manager::new(CascadeConfig::default());
        let menu = manager.create_context_menu();
        manager.add_entry(menu, MenuEntry::new("Open")).unwrap();
        manager
            .add_entry(menu, MenuEntry::new("Recent").with_child(MenuEntry::new("a.txt")))
            .unwrap();
        manager.show_at(menu, None, 10, 10).unwrap();
        manager.key_press(&mut crate::events::KeyPressEvent::plain(crate::events::Key::ArrowUp));
        manager.key_press(&mut crate::events::KeyPressEvent::plain(crate::events::Key::ArrowRight));

        let options = TreeFormatOptions {
            style: TreeStyle::Ascii,
            ..TreeFormatOptions::detailed()
        };
        let dump = CascadeTreeDebug::with_options(&manager, options).format_cascade(menu);
        let lines: Vec<&str> = dump.lines().collect();
        assert!(lines[0].starts_with("context menu ["));
        assert!(lines[0].contains("visible, 2 entries, selected 1"));
        assert_eq!(lines[1], "   Open");
        assert_eq!(lines[2], "  > Recent ...");
        assert!(lines[3].starts_with("+-- context menu"));
        assert!(lines[3].contains("selected 0"));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_format_all_lists_roots() {
        let mut manager = Manager::new(CascadeConfig::default());
        assert!(CascadeTreeDebug::new(&manager).to_string().contains("(empty)"));

        manager.create_context_menu();
        manager
            .create_menu_bar(None, crate::geometry::Rect::new(0, 0, 800, 24))
            .unwrap();
        let dump = CascadeTreeDebug::with_options(&manager, TreeFormatOptions::minimal()).format_all();
        assert!(dump.starts_with("Menus (2 total):"));
        assert!(dump.contains("context menu (hidden, 0 entries)"));
        assert!(dump.contains("menu bar (visible, 0 entries)"));
    }
}
