// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The registry of open tooltips per [`GroupKey`].
//!
//! ## Lifecycle
//!
//! A tooltip with a group claims the group's slot when it opens. Claiming
//! first closes the previous occupant, then registers the new one, so the
//! group never has two open members. A tooltip releases the slot when it
//! closes, changes group or is disposed, but only while it is still the
//! occupant; a newer occupant is never evicted by a stale release.
//!
//! The registry is per thread, matching the single-threaded event loop the
//! engines run on. [`reset`] empties it, which tests use to start clean.

use alloc::rc::{Rc, Weak};
use alloc::string::String;
use core::cell::RefCell;
use std::collections::HashMap;

use crate::config::GroupKey;
use crate::tooltip::Core;

type Slot = Weak<RefCell<Core>>;

thread_local! {
    static OPEN: RefCell<HashMap<GroupKey, Slot>> = RefCell::new(HashMap::new());
}

/// Forget every registration on this thread.
pub fn reset() {
    OPEN.with(|open| open.borrow_mut().clear());
}

/// Trigger id of the tooltip currently registered as open for `key`.
pub fn occupant(key: &GroupKey) -> Option<String> {
    let slot = OPEN.with(|open| open.borrow().get(key).cloned())?;
    let core = slot.upgrade()?;
    let core = core.try_borrow().ok()?;
    Some(String::from(core.trigger_id()))
}

pub(crate) fn is_occupant(key: &GroupKey, me: &Slot) -> bool {
    OPEN.with(|open| open.borrow().get(key).is_some_and(|s| s.ptr_eq(me)))
}

/// Close the current occupant of `key`, then register `me`.
pub(crate) fn claim(key: &GroupKey, me: &Slot) {
    // Clone the slot out; closing the occupant re-enters the registry.
    let previous = OPEN.with(|open| open.borrow().get(key).cloned());
    if let Some(previous) = previous.filter(|p| !p.ptr_eq(me)).and_then(|p| p.upgrade()) {
        evict(key, &previous);
    }
    OPEN.with(|open| {
        open.borrow_mut().insert(key.clone(), me.clone());
    });
}

fn evict(key: &GroupKey, previous: &Rc<RefCell<Core>>) {
    match previous.try_borrow_mut() {
        Ok(mut core) => {
            tracing::debug!(
                target: "understory::tooltip",
                group = ?key,
                evicted = core.trigger_id(),
                "closing previous group occupant"
            );
            core.set_open(false);
        }
        Err(_) => {
            tracing::warn!(
                target: "understory::tooltip",
                group = ?key,
                "group occupant is busy; registering without closing it"
            );
        }
    }
}

/// Drop `me`'s registration for `key` if it is still the occupant.
pub(crate) fn release(key: &GroupKey, me: &Slot) {
    OPEN.with(|open| {
        let mut open = open.borrow_mut();
        if open.get(key).is_some_and(|s| s.ptr_eq(me)) {
            open.remove(key);
        }
    });
}
