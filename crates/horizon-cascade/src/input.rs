//! The process-wide pointer-down channel.
//!
//! Top-level menus must see every pointer press, including presses that land
//! on no menu at all, so they can collapse when the user clicks elsewhere.
//! They do this by holding a [`PointerDownSubscription`] for as long as they
//! live. The subscription removes itself from the channel when dropped, so a
//! menu that is torn down can never be called back.

use std::sync::{Arc, Weak};

use horizon_cascade_core::logging::targets;
use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::menu::MenuId;

new_key_type! {
    /// Identifier of a pointer-down subscription.
    pub struct ListenerId;
}

type Listeners = Mutex<SlotMap<ListenerId, MenuId>>;

/// Registry of menus listening for global pointer presses.
#[derive(Debug, Clone, Default)]
pub struct PointerDownChannel {
    listeners: Arc<Listeners>,
}

impl PointerDownChannel {
    /// Create an empty channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `menu` until the returned guard is dropped.
    pub fn subscribe(&self, menu: MenuId) -> PointerDownSubscription {
        let id = self.listeners.lock().insert(menu);
        tracing::trace!(target: targets::INPUT, ?menu, ?id, "pointer-down subscription acquired");
        PointerDownSubscription {
            id,
            menu,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Snapshot of the subscribed menus, in subscription order.
    pub fn listeners(&self) -> Vec<MenuId> {
        self.listeners.lock().values().copied().collect()
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.listeners.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.lock().is_empty()
    }
}

/// A live subscription to the [`PointerDownChannel`].
///
/// Dropping the subscription unsubscribes. A subscription that outlives its
/// channel is inert.
#[derive(Debug)]
pub struct PointerDownSubscription {
    id: ListenerId,
    menu: MenuId,
    listeners: Weak<Listeners>,
}

impl PointerDownSubscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// The subscribed menu.
    pub fn menu(&self) -> MenuId {
        self.menu
    }
}

impl Drop for PointerDownSubscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.lock().remove(self.id);
            tracing::trace!(target: targets::INPUT, menu = ?self.menu, id = ?self.id, "pointer-down subscription released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_subscription_released_on_drop() {
        let mut menus: SlotMap<MenuId, ()> = SlotMap::with_key();
        let first = menus.insert(());
        let second = menus.insert(());

        let channel = PointerDownChannel::new();
        let a = channel.subscribe(first);
        let b = channel.subscribe(second);
        assert_eq!(channel.listeners(), vec![first, second]);
        assert_eq!(a.menu(), first);

        drop(a);
        assert_eq!(channel.listeners(), vec![second]);
        drop(b);
        assert!(channel.is_empty());
    }

    #[test]
    fn test_subscription_outliving_channel() {
        let mut menus: SlotMap<MenuId, ()> = SlotMap::with_key();
        let channel = PointerDownChannel::new();
        let subscription = channel.subscribe(menus.insert(()));
        drop(channel);
        drop(subscription);
    }
}
