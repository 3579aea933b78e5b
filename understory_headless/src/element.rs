// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element lookup: the host-side view of the widget's elements.
//!
//! ## Overview
//!
//! Engines refer to elements only by string id. Whenever they need geometry or
//! focus they ask an [`ElementLookup`] supplied by the host, which resolves the
//! id against whatever tree the host renders into. A missing element is never
//! an error: lookups return `None`/`false` and the engine skips the effect.
//!
//! [`ElementMap`] is a small in-memory implementation with parent links and a
//! focus slot, suitable for tests, demos and hosts that mirror their layout
//! into a flat map.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use kurbo::Rect;

/// Resolve element ids to geometry and focus.
pub trait ElementLookup {
    /// World-space bounds of the element, or `None` if it does not exist.
    fn bounds(&self, id: &str) -> Option<Rect>;

    /// Whether `descendant` is `ancestor` or lies inside it.
    fn contains(&self, ancestor: &str, descendant: &str) -> bool;

    /// Move keyboard focus to the element. Returns `false` if it does not exist.
    fn focus(&mut self, id: &str) -> bool;

    /// Remove keyboard focus from the element. Returns `false` if it does not exist.
    fn blur(&mut self, id: &str) -> bool;

    /// Id of the element's parent, if the host tracks parents.
    fn parent(&self, _id: &str) -> Option<&str> {
        None
    }

    /// Whether the element is marked as a portal destination (`data-portal`).
    fn is_portal(&self, _id: &str) -> bool {
        false
    }
}

#[derive(Clone, Debug)]
struct Entry {
    bounds: Rect,
    parent: Option<String>,
    portal: bool,
}

/// An in-memory [`ElementLookup`].
#[derive(Clone, Debug, Default)]
pub struct ElementMap {
    entries: BTreeMap<String, Entry>,
    focused: Option<String>,
}

impl ElementMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an element.
    pub fn insert(&mut self, id: impl Into<String>, parent: Option<&str>, bounds: Rect) {
        self.entries.insert(
            id.into(),
            Entry {
                bounds,
                parent: parent.map(ToString::to_string),
                portal: false,
            },
        );
    }

    /// Update the bounds of an existing element. Unknown ids are ignored.
    pub fn set_bounds(&mut self, id: &str, bounds: Rect) {
        if let Some(e) = self.entries.get_mut(id) {
            e.bounds = bounds;
        }
    }

    /// Mark an existing element as a portal destination. Unknown ids are ignored.
    pub fn mark_portal(&mut self, id: &str) {
        if let Some(e) = self.entries.get_mut(id) {
            e.portal = true;
        }
    }

    /// Remove an element and every element parented under it.
    pub fn remove(&mut self, id: &str) {
        let children: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, e)| e.parent.as_deref() == Some(id))
            .map(|(k, _)| k.clone())
            .collect();
        for child in children {
            self.remove(&child);
        }
        self.entries.remove(id);
        if self.focused.as_deref() == Some(id) {
            self.focused = None;
        }
    }

    /// The currently focused element id.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Whether an element with this id exists.
    pub fn exists(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }
}

impl ElementLookup for ElementMap {
    fn bounds(&self, id: &str) -> Option<Rect> {
        self.entries.get(id).map(|e| e.bounds)
    }

    fn contains(&self, ancestor: &str, descendant: &str) -> bool {
        let mut cur = Some(descendant);
        // Parent links are caller-supplied; bound the walk by the map size.
        for _ in 0..=self.entries.len() {
            let Some(id) = cur else {
                return false;
            };
            if id == ancestor {
                return self.entries.contains_key(id);
            }
            cur = self.entries.get(id).and_then(|e| e.parent.as_deref());
        }
        false
    }

    fn focus(&mut self, id: &str) -> bool {
        if !self.entries.contains_key(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    fn blur(&mut self, id: &str) -> bool {
        if !self.entries.contains_key(id) {
            return false;
        }
        if self.focused.as_deref() == Some(id) {
            self.focused = None;
        }
        true
    }

    fn parent(&self, id: &str) -> Option<&str> {
        self.entries.get(id).and_then(|e| e.parent.as_deref())
    }

    fn is_portal(&self, id: &str) -> bool {
        self.entries.get(id).is_some_and(|e| e.portal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ElementMap {
        let mut m = ElementMap::new();
        m.insert("root", None, Rect::new(0.0, 0.0, 100.0, 10.0));
        m.insert("thumb", Some("root"), Rect::new(45.0, 0.0, 55.0, 10.0));
        m.insert("other", None, Rect::new(0.0, 50.0, 10.0, 60.0));
        m
    }

    #[test]
    fn contains_walks_parents() {
        let m = sample();
        assert!(m.contains("root", "thumb"));
        assert!(m.contains("root", "root"));
        assert!(!m.contains("root", "other"));
        assert!(!m.contains("thumb", "root"));
        assert!(!m.contains("missing", "missing"));
    }

    #[test]
    fn focus_tracks_single_element() {
        let mut m = sample();
        assert!(m.focus("thumb"));
        assert_eq!(m.focused(), Some("thumb"));
        assert!(!m.focus("missing"));
        assert_eq!(m.focused(), Some("thumb"));
        assert!(m.blur("other"));
        assert_eq!(m.focused(), Some("thumb"));
        assert!(m.blur("thumb"));
        assert_eq!(m.focused(), None);
    }

    #[test]
    fn parent_and_portal_marks() {
        let mut m = sample();
        assert_eq!(m.parent("thumb"), Some("root"));
        assert_eq!(m.parent("root"), None);
        assert!(!m.is_portal("root"));
        m.mark_portal("root");
        m.mark_portal("missing");
        assert!(m.is_portal("root"));
        assert!(!m.is_portal("missing"));
    }

    #[test]
    fn remove_drops_subtree_and_focus() {
        let mut m = sample();
        m.focus("thumb");
        m.remove("root");
        assert!(!m.exists("thumb"));
        assert_eq!(m.bounds("root"), None);
        assert_eq!(m.focused(), None);
    }
}
