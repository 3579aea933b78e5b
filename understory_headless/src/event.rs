// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input vocabulary shared by the engines: keys, modifiers, pointer kinds and
//! handler outcomes.
//!
//! Hosts translate their native events into these types before calling an
//! engine handler. Handlers return an [`Outcome`] telling the host whether to
//! suppress the platform's default action.

/// A key relevant to widget keyboard contracts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    /// `Home`.
    Home,
    /// `End`.
    End,
    /// `ArrowLeft`.
    ArrowLeft,
    /// `ArrowRight`.
    ArrowRight,
    /// `ArrowUp`.
    ArrowUp,
    /// `ArrowDown`.
    ArrowDown,
    /// `Escape`.
    Escape,
    /// `Enter`.
    Enter,
    /// The space bar.
    Space,
    /// Any key no engine reacts to.
    Other,
}

bitflags::bitflags! {
    /// Modifier keys held during a keyboard event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Meta / Command. Extends slider arrow moves to the bounds.
        const META  = 0b0000_1000;
    }
}

/// A keyboard event as seen by an engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key pressed.
    pub key: Key,
    /// Modifiers held at the time of the press.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press without modifiers.
    pub const fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// A key press with modifiers.
    pub const fn with(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::plain(key)
    }
}

/// The device that produced a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerKind {
    /// A mouse.
    #[default]
    Mouse,
    /// A stylus.
    Pen,
    /// A finger on a touch surface.
    Touch,
}

impl PointerKind {
    /// Whether the pointer is a touch contact.
    pub const fn is_touch(self) -> bool {
        matches!(self, Self::Touch)
    }
}

/// Which pointer button changed state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button (left mouse button, pen tip, touch contact).
    #[default]
    Primary,
    /// Auxiliary button (usually the wheel).
    Auxiliary,
    /// Secondary button (usually right).
    Secondary,
    /// Any other button.
    Other(u8),
}

/// What the host should do with the native event after a handler ran.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Outcome {
    /// Let the event continue with its default behavior.
    #[default]
    Continue,
    /// Suppress the platform default (scrolling, text selection, ...).
    PreventDefault,
}

impl Outcome {
    /// Whether the default action should be suppressed.
    pub const fn prevents_default(self) -> bool {
        matches!(self, Self::PreventDefault)
    }
}

/// Kinds of events an element descriptor asks the host to deliver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// Pointer pressed over the element.
    PointerDown,
    /// Pointer entered the element.
    PointerEnter,
    /// Pointer left the element.
    PointerLeave,
    /// Mouse pressed over the element (with click count).
    MouseDown,
    /// Element received focus.
    Focus,
    /// Element lost focus.
    Blur,
    /// Key pressed while the element is focused.
    KeyDown,
    /// Activation click.
    Click,
}
