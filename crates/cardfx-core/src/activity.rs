//! One-writer, many-reader broadcast of a tilt container's activity flag.
//!
//! The container owns the [`ActivityChannel`]; items hold cloned
//! [`ActivitySignal`]s and never see each other. Everything is single-threaded
//! (`Rc`/`RefCell`), matching the browser event loop the engine runs on.

use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Callback = Rc<RefCell<dyn FnMut(bool)>>;

#[derive(Default)]
struct Shared {
    active: Cell<bool>,
    next_id: Cell<u64>,
    subscribers: RefCell<SmallVec<[(u64, Callback); 4]>>,
}

impl Shared {
    fn remove(&self, id: u64) {
        self.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
    }
}

/// Write side of the activity flag. Not `Clone`: there is exactly one writer.
#[derive(Default)]
pub struct ActivityChannel {
    shared: Rc<Shared>,
}

impl ActivityChannel {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self) -> bool {
        self.shared.active.get()
    }

    /// Read-only handle for descendants.
    pub fn signal(&self) -> ActivitySignal {
        ActivitySignal {
            shared: Rc::downgrade(&self.shared),
        }
    }

    /// Store `active` and notify subscribers if it changed.
    ///
    /// Notification goes to the subscribers present when the call starts;
    /// subscribing or unsubscribing from inside a callback is allowed.
    pub fn publish(&self, active: bool) -> bool {
        if self.shared.active.replace(active) == active {
            return false;
        }
        let snapshot: SmallVec<[Callback; 4]> = self
            .shared
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for cb in snapshot {
            // A callback already running further up the stack is skipped.
            if let Ok(mut f) = cb.try_borrow_mut() {
                (&mut *f)(active);
            }
        }
        true
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers.borrow().len()
    }
}

/// Read side of the activity flag.
///
/// Holds only a weak reference: once the owning container is gone the signal
/// reads `false` and subscriptions are inert.
#[derive(Clone, Default)]
pub struct ActivitySignal {
    shared: Weak<Shared>,
}

impl ActivitySignal {
    /// A signal with no channel behind it. Always inactive.
    pub fn detached() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self) -> bool {
        self.shared.upgrade().map_or(false, |s| s.active.get())
    }

    pub fn is_connected(&self) -> bool {
        self.shared.strong_count() > 0
    }

    /// Register `f` for change notifications. Dropping the returned
    /// [`Subscription`] unregisters it.
    pub fn subscribe(&self, f: impl FnMut(bool) + 'static) -> Subscription {
        let Some(shared) = self.shared.upgrade() else {
            return Subscription::inert();
        };
        let id = shared.next_id.get();
        shared.next_id.set(id + 1);
        let cb: Callback = Rc::new(RefCell::new(f));
        shared.subscribers.borrow_mut().push((id, cb));
        Subscription {
            shared: Rc::downgrade(&shared),
            id,
        }
    }
}

#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    shared: Weak<Shared>,
    id: u64,
}

impl Subscription {
    fn inert() -> Self {
        Self {
            shared: Weak::new(),
            id: 0,
        }
    }

    pub fn is_live(&self) -> bool {
        let Some(shared) = self.shared.upgrade() else {
            return false;
        };
        let live = shared.subscribers.borrow().iter().any(|(id, _)| *id == self.id);
        live
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.remove(self.id);
        }
    }
}
