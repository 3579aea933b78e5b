// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A toggle whose state lives in the caller, plus a label.
//!
//! Run:
//! - `cargo run -p understory_demos --example toggle_basics`

use std::cell::Cell;
use std::rc::Rc;

use understory_controls::{Label, Toggle};
use understory_demos::init_tracing;
use understory_headless::event::{Key, KeyEvent};
use understory_headless::value::{ExternalValue, Value};

fn main() {
    init_tracing();

    let muted = Rc::new(Cell::new(false));
    let (get, set) = (muted.clone(), muted.clone());
    let mut toggle = Toggle::new(Value::External(ExternalValue::new(
        move || get.get(),
        move |v| {
            println!("  caller sees muted = {v}");
            set.set(v);
        },
    )));

    println!("== click ==");
    toggle.click();
    println!("== space ==");
    let outcome = toggle.key_down(KeyEvent::plain(Key::Space));
    println!("  prevent default: {}", outcome.prevents_default());

    println!("== disabled ==");
    toggle.set_disabled(true);
    toggle.click();
    for (name, value) in toggle.root_element().attrs() {
        println!("  {name} = {value:?}");
    }
    assert!(!muted.get());

    let label = Label::new();
    println!("== label ==");
    for clicks in 1..=3 {
        println!(
            "  mousedown x{clicks}: prevent default = {}",
            label.mouse_down(clicks, false).prevents_default()
        );
    }
}
