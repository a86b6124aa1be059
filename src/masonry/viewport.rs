//! Single-threaded viewport that publishes resize events

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

type Listener = Rc<RefCell<dyn FnMut(u32)>>;

struct Inner {
    width: u32,
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// The window a grid is laid out in.
///
/// Cloning yields another handle to the same viewport.
#[derive(Clone)]
pub struct Viewport {
    inner: Rc<RefCell<Inner>>,
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                width,
                next_id: 0,
                listeners: BTreeMap::new(),
            })),
        }
    }

    pub fn width(&self) -> u32 {
        self.inner.borrow().width
    }

    /// Number of live resize registrations
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Register `listener` for resize events.
    ///
    /// The registration lives exactly as long as the returned guard.
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn on_resize<F>(&self, listener: F) -> ResizeSubscription
    where
        F: FnMut(u32) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.insert(id, Rc::new(RefCell::new(listener)));
        tracing::debug!("Registered resize listener {}", id);

        ResizeSubscription {
            id,
            viewport: Rc::downgrade(&self.inner),
        }
    }

    /// Change the width and notify every listener, in registration order.
    ///
    /// A listener may resize its own viewport. The nested dispatch skips
    /// listeners that are still running.
    pub fn resize(&self, width: u32) {
        let snapshot: Vec<(u64, Listener)> = {
            let mut inner = self.inner.borrow_mut();
            inner.width = width;
            inner
                .listeners
                .iter()
                .map(|(id, l)| (*id, Rc::clone(l)))
                .collect()
        };

        for (id, listener) in snapshot {
            // A listener may have been released by an earlier one
            if !self.inner.borrow().listeners.contains_key(&id) {
                continue;
            }
            match listener.try_borrow_mut() {
                Ok(mut f) => (&mut *f)(width),
                Err(_) => tracing::debug!("Skipping busy resize listener {}", id),
            }
        }
    }
}

/// Guard for a resize registration; dropping it unregisters the listener
pub struct ResizeSubscription {
    id: u64,
    viewport: Weak<RefCell<Inner>>,
}

impl ResizeSubscription {
    /// Unregister now instead of at end of scope
    pub fn cancel(self) {}
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.viewport.upgrade() {
            if inner.borrow_mut().listeners.remove(&self.id).is_some() {
                tracing::debug!("Released resize listener {}", self.id);
            }
        }
    }
}
