// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A two-thumb range slider driven by pointer and keyboard input.
//!
//! The first thumb is dragged past the second; the thumbs swap and the drag
//! continues on the other thumb. Then the keyboard nudges it back.
//!
//! Run:
//! - `cargo run -p understory_demos --example slider_range`

use kurbo::{Point, Rect};
use understory_demos::init_tracing;
use understory_headless::element::ElementMap;
use understory_headless::event::{Key, KeyEvent, Modifiers, PointerButton};
use understory_slider::{Slider, SliderConfig};

fn layout(slider: &Slider) -> ElementMap {
    let mut host = ElementMap::new();
    host.insert("price", None, Rect::new(0.0, 0.0, 200.0, 16.0));
    for i in 0..slider.thumb_count() {
        let x = slider.position(slider.thumb_value(i)) * 2.0;
        host.insert(slider.thumb_id(i), Some("price"), Rect::new(x - 6.0, 0.0, x + 6.0, 16.0));
    }
    host
}

fn print_state(label: &str, slider: &Slider) {
    println!("== {label} ==");
    println!("  values: {:?} active: {:?}", slider.values(), slider.active_thumb());
    println!("  range: {}", slider.range_element().get_str("style").unwrap_or_default());
    for thumb in slider.thumb_elements() {
        println!(
            "  {}: {}",
            thumb.get_str("id").unwrap_or_default(),
            thumb.get_str("style").unwrap_or_default()
        );
    }
}

fn main() {
    init_tracing();

    let config = SliderConfig {
        max: 500.0,
        step: 10.0,
        root_id: Some("price".into()),
        ..SliderConfig::default()
    };
    let mut slider = Slider::new(config, vec![100.0, 300.0]);
    let mut host = layout(&slider);
    print_state("initial", &slider);

    // Pixel 40 is value 100: grab the first thumb.
    slider.pointer_down(Point::new(40.0, 8.0), PointerButton::Primary, "price", &mut host);
    for x in [80.0, 120.0, 160.0] {
        slider.pointer_move(Point::new(x, 8.0), &mut host);
        host = relayout(&slider, host);
    }
    slider.pointer_up();
    print_state("after drag", &slider);
    assert_eq!(slider.values(), [300.0, 400.0]);
    assert_eq!(slider.active_thumb(), Some(1));
    assert_eq!(host.focused(), Some("price-thumb-1"));

    slider.key_down(1, KeyEvent::plain(Key::ArrowLeft), &mut host);
    slider.key_down(1, KeyEvent::with(Key::ArrowRight, Modifiers::META), &mut host);
    print_state("after keys", &slider);
    assert_eq!(slider.values(), [300.0, 500.0]);

    let bounded: Vec<bool> = slider
        .ticks()
        .iter()
        .map(|t| t.bounded == Some(true))
        .collect();
    println!("== ticks ==\n  {} ticks, {} bounded", bounded.len(), bounded.iter().filter(|b| **b).count());
}

// Keep the focus slot while moving thumbs.
fn relayout(slider: &Slider, mut host: ElementMap) -> ElementMap {
    for i in 0..slider.thumb_count() {
        let x = slider.position(slider.thumb_value(i)) * 2.0;
        host.set_bounds(&slider.thumb_id(i), Rect::new(x - 6.0, 0.0, x + 6.0, 16.0));
    }
    host
}
