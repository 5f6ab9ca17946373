//! Horizon Cascade - cascading popup menus for retained-mode GUIs.
//!
//! The crate provides context menus that measure themselves from their
//! entries, stay on screen, and open submenus after a hover delay or on
//! activation, plus a menu bar that opens context menus as dropdowns. All
//! menus live in a [`Manager`], which the host drives with input events, a
//! per-frame [`Manager::update`] and [`Manager::draw`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use horizon_cascade::{CascadeConfig, Manager, MenuEntry, MouseButton, Point, PointerEvent};
//!
//! let mut manager = Manager::new(CascadeConfig::default());
//! let menu = manager.create_context_menu();
//!
//! let copy = Arc::new(MenuEntry::new("Copy"));
//! let count = Arc::new(AtomicUsize::new(0));
//! let seen = count.clone();
//! copy.activated.connect(move |_| {
//!     seen.fetch_add(1, Ordering::SeqCst);
//! });
//! manager.add_entry(menu, copy).unwrap();
//! manager.show_at(menu, None, 100, 100).unwrap();
//!
//! let at = Point::new(110, 105);
//! manager.pointer_move(&mut PointerEvent::moved(at));
//! manager.pointer_up(&mut PointerEvent::button(at, MouseButton::Left));
//! assert_eq!(count.load(Ordering::SeqCst), 1);
//! assert!(!manager.context_menu(menu).unwrap().is_visible());
//! ```

pub mod config;
pub mod debug;
pub mod error;
pub mod events;
pub mod geometry;
pub mod input;
pub mod manager;
pub mod menu;
pub mod placement;
pub mod render;
pub mod skin;
pub mod widget;

pub use horizon_cascade_core::{ConnectionId, DwellTimer, Signal, TickClock};

pub use config::{CascadeConfig, MetricsConfig, PlacementConfig, ScreenConfig};
pub use error::{CascadeError, ConfigError, Result};
pub use events::{
    Activation, GamepadAction, GamepadEvent, Key, KeyPressEvent, KeyboardModifiers, MouseButton,
    PointerEvent,
};
pub use geometry::{Margins, Point, Rect, Size};
pub use manager::{FocusTarget, Manager};
pub use menu::{ContextMenu, MenuBar, MenuBase, MenuEntry, MenuId, MenuKind, MenuNode, Sender};
pub use render::{DrawCommand, DrawList, Renderer};
pub use skin::{Color, FixedAdvanceFont, FontMetrics, ImageId, Skin};
pub use widget::WidgetId;
