// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed listener lists for pager notifications.
//!
//! [`Listeners`] is a shared handle: clones refer to the same registry, so a
//! callback can hold a clone and remove itself (or others) while a notification
//! is being delivered. Every notification iterates a snapshot taken when it
//! starts; changes made during delivery apply from the next notification on.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_pager::{ListenerKind, Listeners};
//!
//! let listeners = Listeners::default();
//! let seen = Rc::new(Cell::new(0));
//!
//! let sink = Rc::clone(&seen);
//! let id = listeners.on_page_changed(move |page| sink.set(page));
//! assert_eq!(listeners.len(ListenerKind::PageChanged), 1);
//!
//! assert!(listeners.remove(id));
//! assert_eq!(listeners.len(ListenerKind::PageChanged), 0);
//! ```

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use smallvec::SmallVec;

use crate::pages::PageLookup;

type PageChangedFn = dyn Fn(usize);
type ScrollChangedFn = dyn Fn(f64);
type PageSetChangedFn = dyn Fn(&dyn PageLookup);

/// The three notification kinds a pager emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// The selected page changed; receives the visible page index.
    PageChanged,
    /// The scroll value changed; receives the visible fractional scroll value.
    ScrollChanged,
    /// Pages were inserted or removed; receives the new page set.
    PageSetChanged,
}

/// Identifies one registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId {
    kind: ListenerKind,
    serial: u64,
}

impl ListenerId {
    /// Notification kind this listener is registered for.
    #[must_use]
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

struct Slot<F: ?Sized> {
    serial: u64,
    callback: Rc<F>,
}

#[derive(Default)]
struct Registry {
    next_serial: u64,
    page_changed: Vec<Slot<PageChangedFn>>,
    scroll_changed: Vec<Slot<ScrollChangedFn>>,
    page_set_changed: Vec<Slot<PageSetChangedFn>>,
}

impl Registry {
    fn next_id(&mut self, kind: ListenerKind) -> ListenerId {
        let serial = self.next_serial;
        self.next_serial += 1;
        ListenerId { kind, serial }
    }

    fn len(&self, kind: ListenerKind) -> usize {
        match kind {
            ListenerKind::PageChanged => self.page_changed.len(),
            ListenerKind::ScrollChanged => self.scroll_changed.len(),
            ListenerKind::PageSetChanged => self.page_set_changed.len(),
        }
    }
}

/// Shared registry of pager listeners.
///
/// Callbacks run in registration order. Registering the same closure twice
/// registers it twice.
#[derive(Clone, Default)]
pub struct Listeners {
    registry: Rc<RefCell<Registry>>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.borrow();
        f.debug_struct("Listeners")
            .field("page_changed", &registry.page_changed.len())
            .field("scroll_changed", &registry.scroll_changed.len())
            .field("page_set_changed", &registry.page_set_changed.len())
            .finish()
    }
}

impl Listeners {
    /// Registers a callback for page changes.
    pub fn on_page_changed(&self, callback: impl Fn(usize) + 'static) -> ListenerId {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id(ListenerKind::PageChanged);
        registry.page_changed.push(Slot {
            serial: id.serial,
            callback: Rc::new(callback),
        });
        id
    }

    /// Registers a callback for scroll value changes.
    pub fn on_scroll_changed(&self, callback: impl Fn(f64) + 'static) -> ListenerId {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id(ListenerKind::ScrollChanged);
        registry.scroll_changed.push(Slot {
            serial: id.serial,
            callback: Rc::new(callback),
        });
        id
    }

    /// Registers a callback for page set changes.
    pub fn on_page_set_changed(
        &self,
        callback: impl Fn(&dyn PageLookup) + 'static,
    ) -> ListenerId {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id(ListenerKind::PageSetChanged);
        registry.page_set_changed.push(Slot {
            serial: id.serial,
            callback: Rc::new(callback),
        });
        id
    }

    /// Removes a single listener.
    ///
    /// Returns `false` if it was already removed.
    pub fn remove(&self, id: ListenerId) -> bool {
        let mut registry = self.registry.borrow_mut();
        match id.kind {
            ListenerKind::PageChanged => remove_slot(&mut registry.page_changed, id.serial),
            ListenerKind::ScrollChanged => remove_slot(&mut registry.scroll_changed, id.serial),
            ListenerKind::PageSetChanged => {
                remove_slot(&mut registry.page_set_changed, id.serial)
            }
        }
    }

    /// Removes every listener of the given kind.
    pub fn clear(&self, kind: ListenerKind) {
        let mut registry = self.registry.borrow_mut();
        match kind {
            ListenerKind::PageChanged => registry.page_changed.clear(),
            ListenerKind::ScrollChanged => registry.scroll_changed.clear(),
            ListenerKind::PageSetChanged => registry.page_set_changed.clear(),
        }
    }

    /// Number of listeners registered for `kind`.
    #[must_use]
    pub fn len(&self, kind: ListenerKind) -> usize {
        self.registry.borrow().len(kind)
    }

    /// Returns `true` if no listener of `kind` is registered.
    #[must_use]
    pub fn is_empty(&self, kind: ListenerKind) -> bool {
        self.len(kind) == 0
    }

    pub(crate) fn notify_page_changed(&self, page: usize) {
        let snapshot = snapshot(&self.registry.borrow().page_changed);
        for callback in snapshot {
            callback(page);
        }
    }

    pub(crate) fn notify_scroll_changed(&self, value: f64) {
        let snapshot = snapshot(&self.registry.borrow().scroll_changed);
        for callback in snapshot {
            callback(value);
        }
    }

    pub(crate) fn notify_page_set_changed(&self, pages: &dyn PageLookup) {
        let snapshot = snapshot(&self.registry.borrow().page_set_changed);
        for callback in snapshot {
            callback(pages);
        }
    }
}

fn snapshot<F: ?Sized>(slots: &[Slot<F>]) -> SmallVec<[Rc<F>; 4]> {
    slots.iter().map(|slot| Rc::clone(&slot.callback)).collect()
}

fn remove_slot<F: ?Sized>(slots: &mut Vec<Slot<F>>, serial: u64) -> bool {
    match slots.iter().position(|slot| slot.serial == serial) {
        Some(index) => {
            slots.remove(index);
            true
        }
        None => false,
    }
}
