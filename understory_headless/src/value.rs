// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Values that are either owned by a widget or delegated to the caller.
//!
//! ## Overview
//!
//! Every piece of widget state that a consumer may want to control (a slider's
//! values, a tooltip's open flag, a toggle's pressed flag) is stored as a
//! [`Value`]. The variant is chosen once, at construction:
//!
//! - [`OwnedValue`]: the widget keeps the state itself. This is what you get
//!   from `T.into()`.
//! - [`ExternalValue`]: the widget reads through a caller-supplied getter and,
//!   when a setter was supplied, writes through it. Without a setter the value
//!   is read-only and writes fail with [`ValueError::ReadOnly`].
//!
//! ## Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_headless::value::{ExternalValue, Value};
//!
//! let mut owned: Value<bool> = false.into();
//! owned.set(true).unwrap();
//! assert!(owned.get());
//!
//! let store = Rc::new(Cell::new(3_u32));
//! let (get, set) = (store.clone(), store.clone());
//! let mut external = Value::External(ExternalValue::new(
//!     move || get.get(),
//!     move |v| set.set(v),
//! ));
//! external.set(7).unwrap();
//! assert_eq!(store.get(), 7);
//! ```

use alloc::boxed::Box;
use core::fmt;

use crate::error::ValueError;

/// State stored inside the widget.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OwnedValue<T> {
    value: T,
}

impl<T> OwnedValue<T> {
    /// Wrap an initial value.
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Borrow the stored value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replace the stored value.
    pub fn replace(&mut self, value: T) -> T {
        core::mem::replace(&mut self.value, value)
    }
}

/// State owned by the caller and accessed through closures.
pub struct ExternalValue<T> {
    get: Box<dyn Fn() -> T>,
    set: Option<Box<dyn FnMut(T)>>,
}

impl<T> ExternalValue<T> {
    /// Read and write through the supplied accessors.
    pub fn new(get: impl Fn() -> T + 'static, set: impl FnMut(T) + 'static) -> Self {
        Self {
            get: Box::new(get),
            set: Some(Box::new(set)),
        }
    }

    /// Read through `get`; writes are rejected.
    pub fn read_only(get: impl Fn() -> T + 'static) -> Self {
        Self {
            get: Box::new(get),
            set: None,
        }
    }

    /// Whether a setter was supplied.
    pub fn is_writable(&self) -> bool {
        self.set.is_some()
    }
}

impl<T> fmt::Debug for ExternalValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalValue")
            .field("writable", &self.is_writable())
            .finish_non_exhaustive()
    }
}

/// A value that may be owned internally or delegated to the caller.
#[derive(Debug)]
pub enum Value<T> {
    /// Internally stored state.
    Owned(OwnedValue<T>),
    /// Caller-owned state.
    External(ExternalValue<T>),
}

impl<T> From<T> for Value<T> {
    fn from(value: T) -> Self {
        Self::Owned(OwnedValue::new(value))
    }
}

impl<T: Default> Default for Value<T> {
    fn default() -> Self {
        Self::Owned(OwnedValue::default())
    }
}

impl<T: Clone> Value<T> {
    /// Current value.
    pub fn get(&self) -> T {
        match self {
            Self::Owned(v) => v.value.clone(),
            Self::External(v) => (v.get)(),
        }
    }

    /// Write a new value.
    ///
    /// Owned values always accept the write; external values forward it to
    /// their setter or fail with [`ValueError::ReadOnly`].
    pub fn set(&mut self, value: T) -> Result<(), ValueError> {
        match self {
            Self::Owned(v) => {
                v.value = value;
                Ok(())
            }
            Self::External(v) => match v.set.as_mut() {
                Some(set) => {
                    set(value);
                    Ok(())
                }
                None => Err(ValueError::ReadOnly),
            },
        }
    }

    /// Read, modify and write back in one step.
    ///
    /// The closure runs on a copy; nothing is written if the value is read-only.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) -> Result<(), ValueError> {
        if let Self::Owned(v) = self {
            f(&mut v.value);
            return Ok(());
        }
        let mut current = self.get();
        f(&mut current);
        self.set(current)
    }

    /// Write a value, logging rather than propagating a read-only rejection.
    ///
    /// Engines use this inside event handlers, where there is no caller to
    /// report to.
    pub fn set_or_warn(&mut self, value: T, what: &'static str) {
        if let Err(err) = self.set(value) {
            tracing::warn!(target: "understory::value", %err, what, "write ignored");
        }
    }

    /// Whether the value is stored internally.
    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }
}
