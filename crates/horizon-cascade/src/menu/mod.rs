//! Menu types.
//!
//! - [`MenuEntry`]: a labelled entry, possibly with child entries
//! - [`MenuBase`]: entry list, selection and cascade links shared by all menus
//! - [`ContextMenu`]: a popup that auto-sizes and cascades into submenus
//! - [`MenuBar`]: a horizontal bar opening context menus as dropdowns

mod bar;
mod base;
mod context;
mod entry;

pub use bar::{BarStyle, MenuBar};
pub use base::{MenuBase, MenuId, MenuKind, MenuNode, Sender};
pub use context::{ContextMenu, ContextStyle};
pub use entry::MenuEntry;
