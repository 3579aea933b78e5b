// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Controls: small headless controls.
//!
//! - [`Toggle`]: a two-state button.
//! - [`Label`]: a label that does not select its text on double-click.
//!
//! ```
//! use understory_controls::Toggle;
//! use understory_headless::event::{Key, KeyEvent};
//!
//! let mut toggle = Toggle::new(false);
//! toggle.click();
//! assert!(toggle.is_pressed());
//!
//! let outcome = toggle.key_down(KeyEvent::plain(Key::Space));
//! assert!(outcome.prevents_default());
//! assert!(!toggle.is_pressed());
//! assert_eq!(toggle.root_element().get_str("data-state").as_deref(), Some("off"));
//! ```

pub mod label;
pub mod toggle;

pub use label::Label;
pub use toggle::Toggle;
