//! Headless walkthrough of a menu bar and a cascading context menu.
//!
//! Drives the manager with synthetic input, prints the draw requests and the
//! cascade tree after each step. An optional TOML file can override the
//! default configuration.
//!
//! Run with: cargo run -p horizon-cascade --example cascade_demo [config.toml]

use std::sync::Arc;
use std::time::Duration;

use horizon_cascade::debug::CascadeTreeDebug;
use horizon_cascade::{
    CascadeConfig, DrawCommand, DrawList, Key, KeyPressEvent, Manager, MenuEntry, MouseButton,
    Point, PointerEvent, Rect, Sender,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "horizon_cascade=debug".into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => CascadeConfig::from_file(path)?,
        None => CascadeConfig::default(),
    };
    let mut manager = Manager::new(config);

    println!("Cascade demo");
    println!("============");
    println!();

    // A window with a button that requests a context menu
    let window = manager.add_widget(Rect::new(40, 40, 640, 480), None, true)?;
    let button = manager.add_widget(Rect::new(20, 60, 120, 24), Some(window), false)?;

    let context = manager.create_context_menu();
    let copy = Arc::new(MenuEntry::new("Copy"));
    copy.activated.connect(|activation| println!("  -> Copy activated ({activation:?})"));
    manager.add_entry(context, copy)?;
    manager.add_entry(context, MenuEntry::new("Paste").with_enabled(false))?;
    manager.add_entry(
        context,
        MenuEntry::new("Share")
            .separated()
            .with_children([MenuEntry::new("Mail"), MenuEntry::new("Chat")]),
    )?;

    // A menu bar across the top of the window
    let bar = manager.create_menu_bar(Some(window), Rect::new(0, 0, 640, 24))?;
    let file = Arc::new(MenuEntry::new("File"));
    let open = Arc::new(MenuEntry::new("Open"));
    open.activated.connect(|_| println!("  -> File/Open activated"));
    file.add_child(open);
    file.add_child(Arc::new(MenuEntry::new("Quit")));
    manager.add_entry(bar, file)?;
    manager.add_entry(bar, MenuEntry::new("Edit").with_child(MenuEntry::new("Undo")))?;

    println!("1. Right-click on the button opens the context menu");
    manager.show_at(context, Some(Sender::Widget(button)), 150, 140)?;
    dump(&mut manager);

    println!("2. Dwell on \"Share\" until the submenu opens");
    let share = Point::new(160, 140 + 3 + 2 * 23 + 5);
    manager.pointer_move(&mut PointerEvent::moved(share));
    for _ in 0..40 {
        manager.update(Duration::from_millis(16));
    }
    dump(&mut manager);

    println!("3. Press outside the cascade");
    manager.pointer_down(&mut PointerEvent::button(Point::new(600, 400), MouseButton::Left));
    dump(&mut manager);

    println!("4. Open File from the menu bar and activate Open with the keyboard");
    let file = Point::new(50, 50);
    manager.pointer_up(&mut PointerEvent::button(file, MouseButton::Left));
    manager.key_press(&mut KeyPressEvent::plain(Key::ArrowDown));
    dump(&mut manager);
    manager.key_press(&mut KeyPressEvent::plain(Key::Enter));
    dump(&mut manager);

    Ok(())
}

fn dump(manager: &mut Manager) {
    let mut list = DrawList::new();
    manager.draw(&mut list);
    for command in list.commands() {
        if let DrawCommand::String { text, rect, .. } = command {
            println!("  text {text:?} at ({}, {})", rect.left(), rect.top());
        }
    }
    print!("{}", CascadeTreeDebug::new(manager));
    println!("  focus: {:?}", manager.focus());
    println!();
}
