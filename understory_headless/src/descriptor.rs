// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element descriptors: the attributes and events a widget part wants on its element.
//!
//! ## Overview
//!
//! A builder does not render anything. For each part it produces an
//! [`ElementDescriptor`], a snapshot of attribute values plus the list of
//! events the host must route back into the engine. Hosts spread the
//! attributes onto their element and re-query the descriptor after any handler
//! ran, since the snapshot does not update itself.
//!
//! Every descriptor carries [`PART_ATTR`] naming its part, which lets hosts
//! (and tests) find the element a descriptor belongs to.
//!
//! ```
//! use understory_headless::descriptor::{AttrValue, ElementDescriptor, Style};
//! use understory_headless::event::EventKind;
//!
//! let d = ElementDescriptor::new("toggle")
//!     .with("type", "button")
//!     .flag("disabled", false)
//!     .with("style", Style::new().set("position", "absolute"))
//!     .on(EventKind::Click);
//!
//! assert_eq!(d.get("type"), Some(&AttrValue::from("button")));
//! assert_eq!(d.get("disabled"), None);
//! assert!(d.handles(EventKind::Click));
//! ```

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::event::EventKind;

/// Attribute naming the widget part a descriptor belongs to.
pub const PART_ATTR: &str = "data-understory-part";

/// An attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// A string value.
    Str(String),
    /// A numeric value.
    Number(f64),
    /// An explicit boolean (`aria-*` style `"true"`/`"false"`).
    Bool(bool),
    /// A present, valueless attribute (`disabled`, `hidden`, `data-disabled`).
    Present,
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Present => Ok(()),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Style> for AttrValue {
    fn from(v: Style) -> Self {
        Self::Str(v.to_string())
    }
}

/// Attribute and event requirements of one widget part.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementDescriptor {
    part: &'static str,
    attrs: BTreeMap<&'static str, AttrValue>,
    events: Vec<EventKind>,
}

impl ElementDescriptor {
    /// A descriptor for `part`, carrying only the part marker.
    pub fn new(part: &'static str) -> Self {
        let mut attrs = BTreeMap::new();
        attrs.insert(PART_ATTR, AttrValue::from(part));
        Self {
            part,
            attrs,
            events: Vec::new(),
        }
    }

    /// Set an attribute.
    pub fn with(mut self, name: &'static str, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name, value.into());
        self
    }

    /// Add a valueless attribute when `on` is true; omit it otherwise.
    pub fn flag(mut self, name: &'static str, on: bool) -> Self {
        if on {
            self.attrs.insert(name, AttrValue::Present);
        } else {
            self.attrs.remove(name);
        }
        self
    }

    /// Ask the host to deliver `event` for this element.
    pub fn on(mut self, event: EventKind) -> Self {
        if !self.events.contains(&event) {
            self.events.push(event);
        }
        self
    }

    /// The part name.
    pub fn part(&self) -> &'static str {
        self.part
    }

    /// Look up an attribute.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    /// Look up an attribute and render it as text.
    pub fn get_str(&self, name: &str) -> Option<String> {
        self.get(name).map(ToString::to_string)
    }

    /// All attributes, sorted by name.
    pub fn attrs(&self) -> impl Iterator<Item = (&'static str, &AttrValue)> + '_ {
        self.attrs.iter().map(|(k, v)| (*k, v))
    }

    /// Events the host must deliver, in registration order.
    pub fn events(&self) -> &[EventKind] {
        &self.events
    }

    /// Whether the host must deliver `event`.
    pub fn handles(&self, event: EventKind) -> bool {
        self.events.contains(&event)
    }
}

/// An ordered inline style declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    entries: Vec<(&'static str, String)>,
}

impl Style {
    /// An empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing an earlier value for the same property.
    pub fn set(mut self, property: &'static str, value: impl fmt::Display) -> Self {
        let value = value.to_string();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
        self
    }

    /// Set a property only if `value` is `Some`.
    pub fn set_opt(self, property: &'static str, value: Option<impl fmt::Display>) -> Self {
        match value {
            Some(v) => self.set(property, v),
            None => self,
        }
    }

    /// Value of a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Whether no property is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (p, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{p}: {v};")?;
        }
        Ok(())
    }
}
