//! Document-level pointer-down dispatch.
//!
//! Frontends hit-test every pointer press and dispatch it here before
//! delivering the click to the element itself. Components subscribe to learn
//! about presses that land outside of them.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Where a pointer press landed, relative to the ground-floor menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The "Ground Floor" button that opens the menu.
    GroundFloorTrigger,
    /// Anywhere inside the open menu body, including its options.
    GroundFloorMenu,
    /// Anywhere else.
    Elsewhere,
}

impl PointerTarget {
    /// True when the press is outside both the trigger and the menu body.
    pub fn is_outside_menu(self) -> bool {
        matches!(self, Self::Elsewhere)
    }
}

/// A pointer press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDown {
    pub target: PointerTarget,
}

impl PointerDown {
    pub fn new(target: PointerTarget) -> Self {
        Self { target }
    }
}

type Listener = Rc<RefCell<dyn FnMut(&PointerDown)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

impl Registry {
    fn contains(&self, id: u64) -> bool {
        self.listeners.iter().any(|(lid, _)| *lid == id)
    }
}

/// Dispatcher for pointer presses.
///
/// Cloning yields another handle to the same set of listeners.
#[derive(Clone, Default)]
pub struct PointerHub {
    registry: Rc<RefCell<Registry>>,
}

impl std::fmt::Debug for PointerHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for every pointer press.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped.
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, listener: impl FnMut(&PointerDown) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        registry.listeners.push((id, listener));
        tracing::trace!(id, "pointer listener registered");

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver a press to every registered listener, in registration order.
    ///
    /// Listeners registered during dispatch see the next press; listeners
    /// unregistered during dispatch are skipped.
    pub fn dispatch(&self, event: PointerDown) {
        let snapshot: Vec<(u64, Listener)> = self.registry.borrow().listeners.clone();
        for (id, listener) in snapshot {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            // A listener that dispatches from inside itself is not re-entered.
            if let Ok(mut listener) = listener.try_borrow_mut() {
                (&mut *listener)(&event);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Keeps a pointer listener registered. Dropping it unregisters the listener.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let removed = {
                let mut registry = registry.borrow_mut();
                let index = registry.listeners.iter().position(|(id, _)| *id == self.id);
                index.map(|index| registry.listeners.remove(index))
            };
            // The closure may own other subscriptions; drop it with the registry released.
            drop(removed);
            tracing::trace!(id = self.id, "pointer listener unregistered");
        }
    }
}
