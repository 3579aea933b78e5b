// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A two-state button.

use understory_headless::descriptor::ElementDescriptor;
use understory_headless::event::{EventKind, Key, KeyEvent, Outcome};
use understory_headless::value::Value;

/// Part name of the toggle button.
pub const TOGGLE_PART: &str = "toggle";

/// A headless toggle button.
///
/// The pressed flag is a [`Value`], so a caller can keep it in its own state
/// and observe every change through the setter.
#[derive(Debug)]
pub struct Toggle {
    pressed: Value<bool>,
    disabled: bool,
}

impl Toggle {
    /// An enabled toggle.
    pub fn new(pressed: impl Into<Value<bool>>) -> Self {
        Self {
            pressed: pressed.into(),
            disabled: false,
        }
    }

    /// Whether the toggle is on.
    pub fn is_pressed(&self) -> bool {
        self.pressed.get()
    }

    /// Turn the toggle on or off.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed.set_or_warn(pressed, "toggle pressed");
    }

    /// Whether input is ignored.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable input.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Flip the pressed state, unless disabled.
    pub fn click(&mut self) {
        if self.disabled {
            return;
        }
        let pressed = !self.is_pressed();
        tracing::debug!(target: "understory::toggle", pressed, "toggle clicked");
        self.set_pressed(pressed);
    }

    /// `Enter` and `Space` act as a click.
    pub fn key_down(&mut self, event: KeyEvent) -> Outcome {
        match event.key {
            Key::Enter | Key::Space => {
                self.click();
                Outcome::PreventDefault
            }
            _ => Outcome::Continue,
        }
    }

    /// Descriptor for the button.
    pub fn root_element(&self) -> ElementDescriptor {
        let pressed = self.is_pressed();
        ElementDescriptor::new(TOGGLE_PART)
            .with("type", "button")
            .flag("disabled", self.disabled)
            .flag("data-disabled", self.disabled)
            .with("data-state", if pressed { "on" } else { "off" })
            .with("aria-pressed", pressed)
            .on(EventKind::Click)
            .on(EventKind::KeyDown)
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new(false)
    }
}
