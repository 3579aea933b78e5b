// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A label that keeps double-clicks from selecting its text.

use understory_headless::descriptor::ElementDescriptor;
use understory_headless::event::{EventKind, Outcome};

/// Part name of the label.
pub const LABEL_PART: &str = "label";

/// A headless label.
#[derive(Clone, Copy, Debug, Default)]
pub struct Label;

impl Label {
    /// A label.
    pub fn new() -> Self {
        Self
    }

    /// Mouse pressed on the label.
    ///
    /// `click_count` is the platform's consecutive click count. Repeated
    /// clicks are prevented so they do not select text, unless another
    /// handler already prevented the event.
    pub fn mouse_down(&self, click_count: u32, default_prevented: bool) -> Outcome {
        if !default_prevented && click_count > 1 {
            Outcome::PreventDefault
        } else {
            Outcome::Continue
        }
    }

    /// Descriptor for the label element.
    pub fn root_element(&self) -> ElementDescriptor {
        ElementDescriptor::new(LABEL_PART).on(EventKind::MouseDown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_repeated_clicks_are_prevented() {
        let label = Label::new();
        assert_eq!(label.mouse_down(1, false), Outcome::Continue);
        assert_eq!(label.mouse_down(2, false), Outcome::PreventDefault);
        assert_eq!(label.mouse_down(3, true), Outcome::Continue);
        assert!(label.root_element().handles(EventKind::MouseDown));
    }
}
