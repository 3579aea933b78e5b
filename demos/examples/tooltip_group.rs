// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two grouped tooltips on a toolbar, driven by a manual clock.
//!
//! Hovering the first button opens its tooltip after the delay; moving to the
//! second button opens that one and closes the first.
//!
//! Run:
//! - `cargo run -p understory_demos --example tooltip_group`

use core::time::Duration;

use kurbo::{Point, Rect};
use understory_demos::{PrintingOverlay, init_tracing};
use understory_headless::element::ElementMap;
use understory_headless::event::PointerKind;
use understory_headless::overlay::PortalTarget;
use understory_headless::timer::{Clock, ManualClock};
use understory_tooltip::{GroupKey, Tooltip, TooltipConfig, group};

fn tooltip(name: &str, clock: &ManualClock) -> Tooltip {
    let config = TooltipConfig {
        open_delay: Duration::from_millis(300),
        close_delay: Duration::from_millis(100),
        group: Some(GroupKey::from("toolbar")),
        portal: Some(PortalTarget::Body),
        trigger_id: Some(format!("{name}-button")),
        content_id: Some(format!("{name}-tip")),
        ..TooltipConfig::default()
    };
    Tooltip::new(config, false, clock.clone())
}

fn main() {
    init_tracing();

    let clock = ManualClock::new();
    let mut bold = tooltip("bold", &clock);
    let mut italic = tooltip("italic", &clock);
    let mut overlay = PrintingOverlay;

    let mut host = ElementMap::new();
    host.insert("bold-button", None, Rect::new(0.0, 0.0, 32.0, 32.0));
    host.insert("bold-tip", None, Rect::new(-10.0, 40.0, 60.0, 64.0));
    host.insert("italic-button", None, Rect::new(40.0, 0.0, 72.0, 32.0));
    host.insert("italic-tip", None, Rect::new(30.0, 40.0, 100.0, 64.0));

    let mut step = |label: &str, ms: u64, bold: &mut Tooltip, italic: &mut Tooltip| {
        clock.advance(Duration::from_millis(ms));
        for t in [&mut *bold, &mut *italic] {
            t.poll();
            t.sync_overlay(&host, &mut overlay, &mut PrintingOverlay);
        }
        println!(
            "== {label} (t={}ms) ==\n  bold open: {}  italic open: {}  occupant: {:?}",
            clock.now().as_millis(),
            bold.is_open(),
            italic.is_open(),
            group::occupant(&GroupKey::from("toolbar"))
        );
    };

    bold.trigger_pointer_enter(PointerKind::Mouse);
    step("hover bold", 0, &mut bold, &mut italic);
    step("bold delay elapsed", 300, &mut bold, &mut italic);
    assert!(bold.is_open());

    // The pointer slides right, out of bold's hover region.
    bold.trigger_pointer_leave(PointerKind::Mouse);
    bold.document_pointer_move(Point::new(56.0, 16.0), &host);
    italic.trigger_pointer_enter(PointerKind::Mouse);
    step("hover italic", 0, &mut bold, &mut italic);
    step("italic delay elapsed", 300, &mut bold, &mut italic);
    assert!(!bold.is_open());
    assert!(italic.is_open());
    assert_eq!(
        group::occupant(&GroupKey::from("toolbar")).as_deref(),
        Some("italic-button")
    );
}
