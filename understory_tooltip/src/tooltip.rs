// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tooltip engine.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use core::cell::RefCell;
use core::fmt;
use core::time::Duration;

use kurbo::Point;
use understory_headless::element::ElementLookup;
use understory_headless::event::{Key, KeyEvent, PointerKind};
use understory_headless::hull::point_in_region;
use understory_headless::id::id_or_generate;
use understory_headless::overlay::{FloatingConfig, Portal, PortalTarget, Positioner, Teardown};
use understory_headless::timer::{Clock, Timer};
use understory_headless::value::Value;

use crate::config::{GroupKey, OpenReason, TooltipConfig};
use crate::group;

// Live positioning and portal effects.
struct Overlay {
    floating: Teardown,
    portal: Teardown,
}

impl Overlay {
    fn teardown(mut self) {
        self.floating.run();
        self.portal.run();
    }
}

/// Shared tooltip state. The group registry holds weak references to it.
pub(crate) struct Core {
    me: Weak<RefCell<Self>>,
    config: TooltipConfig,
    trigger_id: String,
    content_id: String,
    open: Value<bool>,
    reason: Option<OpenReason>,
    pointer_in_area: bool,
    clicked_trigger: bool,
    open_timer: Timer<OpenReason>,
    // Payload: whether the close was requested by a blur.
    close_timer: Timer<bool>,
    registered: Option<GroupKey>,
    overlay: Option<Overlay>,
    overlay_stale: bool,
    disposed: bool,
}

impl Core {
    pub(crate) fn trigger_id(&self) -> &str {
        &self.trigger_id
    }

    fn is_open(&self) -> bool {
        self.open.get()
    }

    fn is_hidden(&self) -> bool {
        !self.is_open() && !self.config.force_visible
    }

    /// Write the open flag. Both timers are cancelled, whatever the outcome.
    pub(crate) fn set_open(&mut self, open: bool) {
        let was_open = self.is_open();
        self.open.set_or_warn(open, "tooltip open");
        self.open_timer.cancel();
        self.close_timer.cancel();
        if was_open != self.is_open() {
            tracing::debug!(
                target: "understory::tooltip",
                trigger = %self.trigger_id,
                open = self.is_open(),
                "tooltip toggled"
            );
        }
        self.reconcile_group();
    }

    fn request_open(&mut self, now: Duration, reason: OpenReason) {
        self.close_timer.cancel();
        if self.open_timer.start(now, self.config.open_delay, reason) {
            tracing::trace!(target: "understory::tooltip", trigger = %self.trigger_id, ?reason, "open scheduled");
        }
    }

    fn request_close(&mut self, now: Duration, is_blur: bool) {
        self.open_timer.cancel();
        if is_blur && self.pointer_in_area {
            // Still hovered: let the pointer decide when to close.
            self.reason = Some(OpenReason::Pointer);
            return;
        }
        if self.close_timer.start(now, self.config.close_delay, is_blur) {
            tracing::trace!(target: "understory::tooltip", trigger = %self.trigger_id, is_blur, "close scheduled");
        }
    }

    fn poll(&mut self, now: Duration) {
        if let Some(reason) = self.open_timer.take_due(now) {
            self.set_open(true);
            if self.reason.is_none() {
                self.reason = Some(reason);
            }
        }
        if let Some(is_blur) = self.close_timer.take_due(now) {
            self.set_open(false);
            self.reason = None;
            if is_blur {
                self.clicked_trigger = false;
            }
        }
        // Picks up changes made behind an external open value.
        self.reconcile_group();
    }

    fn reconcile_group(&mut self) {
        if self.disposed {
            return;
        }
        let wanted = if self.is_open() {
            self.config.group.clone()
        } else {
            None
        };
        if self.registered != wanted {
            if let Some(old) = self.registered.take() {
                group::release(&old, &self.me);
            }
        }
        if let Some(key) = wanted {
            if !group::is_occupant(&key, &self.me) {
                group::claim(&key, &self.me);
            }
            self.registered = Some(key);
        }
    }

    fn pointer_moved<L: ElementLookup + ?Sized>(&mut self, now: Duration, point: Point, host: &L) {
        if !self.is_open() {
            return;
        }
        let (Some(trigger), Some(content)) =
            (host.bounds(&self.trigger_id), host.bounds(&self.content_id))
        else {
            return;
        };
        self.pointer_in_area = if self.config.disable_hoverable_content {
            point_in_region(point, &[trigger])
        } else {
            point_in_region(point, &[trigger, content])
        };
        tracing::trace!(
            target: "understory::tooltip",
            trigger = %self.trigger_id,
            x = point.x,
            y = point.y,
            inside = self.pointer_in_area,
            "hover region test"
        );
        if self.reason == Some(OpenReason::Pointer) && !self.pointer_in_area {
            self.request_close(now, false);
        }
    }

    fn key_down(&mut self, event: KeyEvent) {
        if self.config.close_on_escape && event.key == Key::Escape {
            self.set_open(false);
        }
    }

    fn sync_overlay<L, P, Q>(&mut self, host: &L, positioner: &mut P, portal: &mut Q)
    where
        L: ElementLookup + ?Sized,
        P: Positioner + ?Sized,
        Q: Portal + ?Sized,
    {
        let present =
            host.bounds(&self.trigger_id).is_some() && host.bounds(&self.content_id).is_some();
        if self.is_hidden() || !present {
            self.teardown_overlay();
            return;
        }
        if self.overlay.is_some() && !self.overlay_stale {
            return;
        }
        self.teardown_overlay();
        let floating = match &self.config.positioning {
            Some(config) => positioner.attach(&self.trigger_id, &self.content_id, config),
            None => Teardown::noop(),
        };
        let portal = match &self.config.portal {
            Some(target) => portal.mount(&self.content_id, &target.resolve(host, &self.content_id)),
            None => Teardown::noop(),
        };
        tracing::debug!(target: "understory::tooltip", trigger = %self.trigger_id, "overlay attached");
        self.overlay = Some(Overlay { floating, portal });
        self.overlay_stale = false;
    }

    fn teardown_overlay(&mut self) {
        if let Some(overlay) = self.overlay.take() {
            overlay.teardown();
        }
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.open_timer.cancel();
        self.close_timer.cancel();
        if let Some(key) = self.registered.take() {
            group::release(&key, &self.me);
        }
        self.teardown_overlay();
        self.disposed = true;
        tracing::debug!(target: "understory::tooltip", trigger = %self.trigger_id, "tooltip disposed");
    }
}

/// A headless tooltip.
///
/// The tooltip opens after `open_delay` when its trigger is hovered or
/// focused and closes after `close_delay` when the pointer leaves the hover
/// region (the trigger plus, unless disabled, the content and the gap between
/// them) or the trigger blurs. `Escape` and pressing the trigger close it at
/// once.
///
/// Timers only fire from [`Tooltip::poll`], which the host calls from its
/// event loop. Dropping the tooltip disposes it.
pub struct Tooltip {
    core: Rc<RefCell<Core>>,
    clock: Box<dyn Clock>,
}

impl fmt::Debug for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Tooltip");
        if let Ok(core) = self.core.try_borrow() {
            s.field("trigger_id", &core.trigger_id)
                .field("content_id", &core.content_id)
                .field("open", &core.is_open())
                .field("reason", &core.reason)
                .field("group", &core.config.group);
        }
        s.finish_non_exhaustive()
    }
}

impl Tooltip {
    /// Create a tooltip reading time from `clock`.
    ///
    /// An initially open tooltip claims its group right away.
    pub fn new(
        mut config: TooltipConfig,
        open: impl Into<Value<bool>>,
        clock: impl Clock + 'static,
    ) -> Self {
        let trigger_id = id_or_generate(config.trigger_id.take());
        let content_id = id_or_generate(config.content_id.take());
        let open = open.into();
        let core = Rc::new_cyclic(|me| {
            RefCell::new(Core {
                me: me.clone(),
                config,
                trigger_id,
                content_id,
                open,
                reason: None,
                pointer_in_area: false,
                clicked_trigger: false,
                open_timer: Timer::new(),
                close_timer: Timer::new(),
                registered: None,
                overlay: None,
                overlay_stale: false,
                disposed: false,
            })
        });
        core.borrow_mut().reconcile_group();
        Self {
            core,
            clock: Box::new(clock),
        }
    }

    fn now(&self) -> Duration {
        self.clock.now()
    }

    // Run `f` on the core unless the tooltip was disposed.
    fn live(&mut self, f: impl FnOnce(&mut Core, Duration)) {
        let now = self.now();
        let mut core = self.core.borrow_mut();
        if !core.disposed {
            f(&mut core, now);
        }
    }

    /// Id of the trigger element.
    pub fn trigger_id(&self) -> String {
        self.core.borrow().trigger_id.clone()
    }

    /// Id of the content element.
    pub fn content_id(&self) -> String {
        self.core.borrow().content_id.clone()
    }

    /// The current configuration. Ids reflect the generated values.
    pub fn config(&self) -> TooltipConfig {
        let core = self.core.borrow();
        TooltipConfig {
            trigger_id: Some(core.trigger_id.clone()),
            content_id: Some(core.content_id.clone()),
            ..core.config.clone()
        }
    }

    /// Whether the tooltip is open.
    pub fn is_open(&self) -> bool {
        self.core.borrow().is_open()
    }

    /// Whether the content should be hidden: closed and not force-visible.
    pub fn is_hidden(&self) -> bool {
        self.core.borrow().is_hidden()
    }

    /// Why the tooltip is open, if known.
    pub fn open_reason(&self) -> Option<OpenReason> {
        self.core.borrow().reason
    }

    /// Whether an open is scheduled.
    pub fn open_pending(&self) -> bool {
        self.core.borrow().open_timer.is_pending()
    }

    /// Whether a close is scheduled.
    pub fn close_pending(&self) -> bool {
        self.core.borrow().close_timer.is_pending()
    }

    /// The earliest pending deadline, for hosts that schedule a wakeup.
    pub fn next_deadline(&self) -> Option<Duration> {
        let core = self.core.borrow();
        match (core.open_timer.deadline(), core.close_timer.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Whether this tooltip is registered as its group's open tooltip.
    pub fn is_group_occupant(&self) -> bool {
        let core = self.core.borrow();
        core.registered
            .as_ref()
            .is_some_and(|key| group::is_occupant(key, &core.me))
    }

    /// Open or close immediately, cancelling pending timers.
    pub fn set_open(&mut self, open: bool) {
        self.live(|core, _| core.set_open(open));
    }

    /// Schedule an open after the open delay.
    ///
    /// Cancels a pending close. An already pending open keeps its deadline.
    pub fn request_open(&mut self, reason: OpenReason) {
        self.live(|core, now| core.request_open(now, reason));
    }

    /// Schedule a close after the close delay.
    ///
    /// Cancels a pending open. A blur while the pointer is inside the hover
    /// region does not close; it hands the decision to the pointer instead.
    pub fn request_close(&mut self, is_blur: bool) {
        self.live(|core, now| core.request_close(now, is_blur));
    }

    /// Fire due timers.
    pub fn poll(&mut self) {
        self.live(|core, now| core.poll(now));
    }

    /// Pointer pressed on the trigger.
    pub fn trigger_pointer_down(&mut self) {
        self.live(|core, _| {
            if core.config.close_on_pointer_down {
                core.set_open(false);
                core.clicked_trigger = true;
            }
        });
    }

    /// Pointer entered the trigger. Touch pointers are ignored.
    pub fn trigger_pointer_enter(&mut self, kind: PointerKind) {
        if !kind.is_touch() {
            self.request_open(OpenReason::Pointer);
        }
    }

    /// Pointer left the trigger. Cancels a pending open only.
    pub fn trigger_pointer_leave(&mut self, kind: PointerKind) {
        if !kind.is_touch() {
            self.live(|core, _| {
                core.open_timer.cancel();
            });
        }
    }

    /// Trigger received focus. Ignored right after the trigger was pressed.
    pub fn trigger_focus(&mut self) {
        self.live(|core, now| {
            if !core.clicked_trigger {
                core.request_open(now, OpenReason::Focus);
            }
        });
    }

    /// Trigger lost focus.
    pub fn trigger_blur(&mut self) {
        self.request_close(true);
    }

    /// Key pressed on the trigger.
    pub fn trigger_key_down(&mut self, event: KeyEvent) {
        self.live(|core, _| core.key_down(event));
    }

    /// Key pressed anywhere in the document.
    pub fn document_key_down(&mut self, event: KeyEvent) {
        self.live(|core, _| core.key_down(event));
    }

    /// Pointer entered the content.
    pub fn content_pointer_enter(&mut self) {
        self.request_open(OpenReason::Pointer);
    }

    /// Pointer pressed on the content.
    pub fn content_pointer_down(&mut self) {
        self.request_open(OpenReason::Pointer);
    }

    /// Pointer moved anywhere in the document.
    ///
    /// While open, re-tests the pointer against the hover region. A tooltip
    /// opened by the pointer starts closing once the pointer is outside.
    pub fn document_pointer_move<L: ElementLookup + ?Sized>(&mut self, point: Point, host: &L) {
        self.live(|core, now| core.pointer_moved(now, point, host));
    }

    /// Move the tooltip to another group, or out of any group.
    ///
    /// An open tooltip releases its old group and claims the new one.
    pub fn set_group(&mut self, group: Option<GroupKey>) {
        self.live(|core, _| {
            core.config.group = group;
            core.reconcile_group();
        });
    }

    /// Change the positioning. A live overlay is re-attached on the next sync.
    pub fn set_positioning(&mut self, positioning: Option<FloatingConfig>) {
        self.live(|core, _| {
            core.config.positioning = positioning;
            core.overlay_stale = true;
        });
    }

    /// Change the portal target. A live overlay is re-attached on the next sync.
    pub fn set_portal(&mut self, portal: Option<PortalTarget>) {
        self.live(|core, _| {
            core.config.portal = portal;
            core.overlay_stale = true;
        });
    }

    /// Change the open delay. A pending open keeps its deadline.
    pub fn set_open_delay(&mut self, delay: Duration) {
        self.live(|core, _| core.config.open_delay = delay);
    }

    /// Change the close delay. A pending close keeps its deadline.
    pub fn set_close_delay(&mut self, delay: Duration) {
        self.live(|core, _| core.config.close_delay = delay);
    }

    /// Keep the content visible while closed.
    pub fn set_force_visible(&mut self, force_visible: bool) {
        self.live(|core, _| core.config.force_visible = force_visible);
    }

    /// Attach or tear down positioning and portal to match visibility.
    ///
    /// While the content is visible and both elements exist, the content is
    /// positioned against the trigger and, with a portal target, mounted
    /// there. Otherwise any live overlay is torn down. Call after every
    /// state change or layout pass.
    pub fn sync_overlay<L, P, Q>(&mut self, host: &L, positioner: &mut P, portal: &mut Q)
    where
        L: ElementLookup + ?Sized,
        P: Positioner + ?Sized,
        Q: Portal + ?Sized,
    {
        self.live(|core, _| core.sync_overlay(host, positioner, portal));
    }

    /// Cancel timers, leave the group and tear down overlays.
    ///
    /// Every handler is a no-op afterwards. Dropping the tooltip does the same.
    pub fn dispose(&mut self) {
        self.core.borrow_mut().dispose();
    }

    /// Whether [`Tooltip::dispose`] ran.
    pub fn is_disposed(&self) -> bool {
        self.core.borrow().disposed
    }

    #[cfg(test)]
    fn with_core<R>(&self, f: impl FnOnce(&Core) -> R) -> R {
        f(&self.core.borrow())
    }
}

impl Drop for Tooltip {
    fn drop(&mut self) {
        if let Ok(mut core) = self.core.try_borrow_mut() {
            core.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::Cell;
    use kurbo::Rect;
    use understory_headless::element::ElementMap;
    use understory_headless::overlay::NoOverlay;
    use understory_headless::timer::ManualClock;

    const MS: Duration = Duration::from_millis(1);

    fn config(name: &str) -> TooltipConfig {
        TooltipConfig {
            trigger_id: Some(alloc::format!("{name}-trigger")),
            content_id: Some(alloc::format!("{name}-content")),
            ..TooltipConfig::default()
        }
    }

    // Trigger at the top, content below it with a 20px gap.
    fn host() -> ElementMap {
        let mut map = ElementMap::new();
        map.insert("t-trigger", None, Rect::new(0.0, 0.0, 100.0, 20.0));
        map.insert("t-content", None, Rect::new(0.0, 40.0, 100.0, 80.0));
        map
    }

    #[test]
    fn open_waits_for_the_delay() {
        let clock = ManualClock::new();
        let mut t = Tooltip::new(config("t"), false, clock.clone());
        t.request_open(OpenReason::Pointer);
        clock.advance(999 * MS);
        t.poll();
        assert!(!t.is_open());
        assert!(t.open_pending());
        clock.advance(MS);
        t.poll();
        assert!(t.is_open());
        assert_eq!(t.open_reason(), Some(OpenReason::Pointer));
        assert!(!t.open_pending());
    }

    #[test]
    fn repeated_requests_keep_the_first_deadline() {
        let clock = ManualClock::new();
        let mut t = Tooltip::new(config("t"), false, clock.clone());
        t.trigger_pointer_enter(PointerKind::Mouse);
        clock.advance(600 * MS);
        t.trigger_pointer_enter(PointerKind::Mouse);
        assert_eq!(t.next_deadline(), Some(1000 * MS));
        clock.advance(400 * MS);
        t.poll();
        assert!(t.is_open());
    }

    #[test]
    fn leave_cancels_pending_open_only() {
        let clock = ManualClock::new();
        let mut t = Tooltip::new(config("t"), false, clock.clone());
        t.trigger_pointer_enter(PointerKind::Mouse);
        t.trigger_pointer_leave(PointerKind::Mouse);
        clock.advance(2000 * MS);
        t.poll();
        assert!(!t.is_open());

        t.set_open(true);
        t.trigger_pointer_leave(PointerKind::Mouse);
        t.poll();
        assert!(t.is_open());
    }

    #[test]
    fn touch_pointers_do_not_open() {
        let clock = ManualClock::new();
        let mut t = Tooltip::new(config("t"), false, clock.clone());
        t.trigger_pointer_enter(PointerKind::Touch);
        assert!(!t.open_pending());
    }

    #[test]
    fn escape_closes_without_delay() {
        let clock = ManualClock::new();
        let cfg = TooltipConfig {
            close_delay: 500 * MS,
            ..config("t")
        };
        let mut t = Tooltip::new(cfg, true, clock.clone());
        t.trigger_key_down(KeyEvent::plain(Key::Escape));
        assert!(!t.is_open());

        t.set_open(true);
        t.document_key_down(KeyEvent::plain(Key::Escape));
        assert!(!t.is_open());
        assert!(!t.close_pending());
    }

    #[test]
    fn escape_is_ignored_when_disabled() {
        let clock = ManualClock::new();
        let cfg = TooltipConfig {
            close_on_escape: false,
            ..config("t")
        };
        let mut t = Tooltip::new(cfg, true, clock);
        t.document_key_down(KeyEvent::plain(Key::Escape));
        assert!(t.is_open());
    }

    #[test]
    fn pointer_down_suppresses_the_following_focus() {
        let clock = ManualClock::new();
        let mut t = Tooltip::new(config("t"), true, clock.clone());
        t.trigger_pointer_down();
        assert!(!t.is_open());
        t.trigger_focus();
        assert!(!t.open_pending());

        // A blur-triggered close clears the flag again.
        t.trigger_blur();
        t.poll();
        t.trigger_focus();
        assert!(t.open_pending());
    }

    #[test]
    fn blur_inside_hover_region_keeps_open() {
        let clock = ManualClock::new();
        let mut t = Tooltip::new(config("t"), false, clock.clone());
        let h = host();
        t.trigger_focus();
        clock.advance(1000 * MS);
        t.poll();
        assert_eq!(t.open_reason(), Some(OpenReason::Focus));

        // In the gap between trigger and content.
        t.document_pointer_move(Point::new(50.0, 30.0), &h);
        t.trigger_blur();
        t.poll();
        assert!(t.is_open());
        assert_eq!(t.open_reason(), Some(OpenReason::Pointer));
        assert!(!t.close_pending());

        // Leaving the region now closes.
        t.document_pointer_move(Point::new(300.0, 30.0), &h);
        assert!(t.close_pending());
        t.poll();
        assert!(!t.is_open());
        assert_eq!(t.open_reason(), None);
    }

    #[test]
    fn pointer_leaving_a_focus_opened_tooltip_does_not_close() {
        let clock = ManualClock::new();
        let mut t = Tooltip::new(config("t"), false, clock.clone());
        let h = host();
        t.trigger_focus();
        clock.advance(1000 * MS);
        t.poll();
        t.document_pointer_move(Point::new(300.0, 300.0), &h);
        assert!(!t.close_pending());
        assert!(t.is_open());
    }

    #[test]
    fn non_hoverable_content_closes_in_the_gap() {
        let clock = ManualClock::new();
        let cfg = TooltipConfig {
            disable_hoverable_content: true,
            close_delay: 100 * MS,
            ..config("t")
        };
        let mut t = Tooltip::new(cfg, false, clock.clone());
        let h = host();
        t.trigger_pointer_enter(PointerKind::Mouse);
        clock.advance(1000 * MS);
        t.poll();
        t.document_pointer_move(Point::new(50.0, 30.0), &h);
        assert!(t.close_pending());
        // Re-entering the content re-affirms the open state.
        t.content_pointer_enter();
        assert!(!t.close_pending());
        clock.advance(100 * MS);
        t.poll();
        assert!(t.is_open());
    }

    #[test]
    fn set_open_cancels_timers() {
        let clock = ManualClock::new();
        let mut t = Tooltip::new(config("t"), false, clock.clone());
        t.request_open(OpenReason::Focus);
        t.set_open(false);
        clock.advance(5000 * MS);
        t.poll();
        assert!(!t.is_open());
    }

    #[test]
    fn opening_evicts_the_group_occupant() {
        group::reset();
        let clock = ManualClock::new();
        let key = GroupKey::from("g");
        let grouped = |name: &str| TooltipConfig {
            group: Some(key.clone()),
            ..config(name)
        };
        let mut a = Tooltip::new(grouped("a"), false, clock.clone());
        let mut b = Tooltip::new(grouped("b"), false, clock.clone());

        a.set_open(true);
        assert_eq!(group::occupant(&key).as_deref(), Some("a-trigger"));

        b.request_open(OpenReason::Pointer);
        clock.advance(1000 * MS);
        b.poll();
        assert!(!a.is_open());
        assert!(b.is_open());
        assert!(b.is_group_occupant());
        assert_eq!(group::occupant(&key).as_deref(), Some("b-trigger"));

        // A stale close of `a` must not drop `b`.
        a.set_open(false);
        assert_eq!(group::occupant(&key).as_deref(), Some("b-trigger"));
        b.set_open(false);
        assert_eq!(group::occupant(&key), None);
    }

    #[test]
    fn global_group_is_shared() {
        group::reset();
        let clock = ManualClock::new();
        let global = |name: &str| TooltipConfig {
            group: Some(GroupKey::Global),
            ..config(name)
        };
        let mut a = Tooltip::new(global("a"), true, clock.clone());
        let mut b = Tooltip::new(global("b"), false, clock.clone());
        let ungrouped = Tooltip::new(config("c"), true, clock.clone());
        b.set_open(true);
        assert!(!a.is_open());
        assert!(ungrouped.is_open());
        a.set_open(true);
        assert!(!b.is_open());
    }

    #[test]
    fn changing_group_moves_the_registration() {
        group::reset();
        let clock = ManualClock::new();
        let cfg = TooltipConfig {
            group: Some(GroupKey::from("x")),
            ..config("a")
        };
        let mut a = Tooltip::new(cfg, true, clock);
        a.set_group(Some(GroupKey::from("y")));
        assert_eq!(group::occupant(&GroupKey::from("x")), None);
        assert_eq!(group::occupant(&GroupKey::from("y")).as_deref(), Some("a-trigger"));
        a.set_group(None);
        assert_eq!(group::occupant(&GroupKey::from("y")), None);
    }

    #[test]
    fn dispose_cancels_and_deregisters() {
        group::reset();
        let clock = ManualClock::new();
        let key = GroupKey::from("d");
        let cfg = TooltipConfig {
            group: Some(key.clone()),
            ..config("a")
        };
        let mut a = Tooltip::new(cfg.clone(), true, clock.clone());
        assert!(group::occupant(&key).is_some());
        a.dispose();
        assert_eq!(group::occupant(&key), None);
        a.set_open(false);
        a.request_open(OpenReason::Pointer);
        assert!(!a.open_pending());

        let mut b = Tooltip::new(TooltipConfig { group: None, ..cfg }, false, clock.clone());
        b.request_open(OpenReason::Pointer);
        drop(b);
        clock.advance(5000 * MS);
        assert!(a.is_disposed());
    }

    #[test]
    fn dropping_an_occupant_frees_the_group() {
        group::reset();
        let clock = ManualClock::new();
        let key = GroupKey::from("drop");
        let cfg = TooltipConfig {
            group: Some(key.clone()),
            ..config("a")
        };
        let a = Tooltip::new(cfg, true, clock);
        drop(a);
        assert_eq!(group::occupant(&key), None);
    }

    #[derive(Default)]
    struct Recorder {
        log: Rc<RefCell<Vec<&'static str>>>,
        targets: Rc<RefCell<Vec<PortalTarget>>>,
    }

    impl Positioner for Recorder {
        fn attach(&mut self, _: &str, _: &str, _: &FloatingConfig) -> Teardown {
            self.log.borrow_mut().push("attach");
            let log = self.log.clone();
            Teardown::new(move || log.borrow_mut().push("detach"))
        }
    }

    impl Portal for Recorder {
        fn mount(&mut self, _: &str, target: &PortalTarget) -> Teardown {
            self.log.borrow_mut().push("mount");
            self.targets.borrow_mut().push(target.clone());
            let log = self.log.clone();
            Teardown::new(move || log.borrow_mut().push("unmount"))
        }
    }

    #[test]
    fn overlay_follows_visibility() {
        let clock = ManualClock::new();
        let cfg = TooltipConfig {
            portal: Some(PortalTarget::Body),
            ..config("t")
        };
        let mut t = Tooltip::new(cfg, false, clock);
        let h = host();
        let mut positioner = Recorder::default();
        let mut portal = Recorder {
            log: positioner.log.clone(),
            ..Recorder::default()
        };

        t.sync_overlay(&h, &mut positioner, &mut portal);
        assert!(positioner.log.borrow().is_empty());

        t.set_open(true);
        t.sync_overlay(&h, &mut positioner, &mut portal);
        t.sync_overlay(&h, &mut positioner, &mut portal);
        assert_eq!(*positioner.log.borrow(), ["attach", "mount"]);

        t.set_positioning(Some(FloatingConfig::default()));
        t.sync_overlay(&h, &mut positioner, &mut portal);
        assert_eq!(
            *positioner.log.borrow(),
            ["attach", "mount", "detach", "unmount", "attach", "mount"]
        );

        t.set_open(false);
        t.sync_overlay(&h, &mut positioner, &mut portal);
        assert_eq!(positioner.log.borrow().len(), 8);

        // The default configuration portals to the nearest marked ancestor.
        let mut auto = Tooltip::new(config("t"), true, ManualClock::new());
        let mut positioner = Recorder::default();
        let mut portal = Recorder::default();
        auto.sync_overlay(&h, &mut positioner, &mut portal);
        assert_eq!(*portal.log.borrow(), ["mount"]);
        assert_eq!(*portal.targets.borrow(), [PortalTarget::Body]);

        let mut nested = host();
        nested.insert("layer", None, Rect::new(0.0, 0.0, 200.0, 200.0));
        nested.insert("t-content", Some("layer"), Rect::new(0.0, 40.0, 100.0, 80.0));
        nested.mark_portal("layer");
        auto.set_portal(Some(PortalTarget::Auto));
        auto.sync_overlay(&nested, &mut positioner, &mut portal);
        assert_eq!(
            portal.targets.borrow().last(),
            Some(&PortalTarget::Element("layer".into()))
        );

        auto.set_portal(None);
        auto.sync_overlay(&nested, &mut positioner, &mut portal);
        assert_eq!(*portal.log.borrow(), ["mount", "unmount", "mount", "unmount"]);
        assert_eq!(positioner.log.borrow().len(), 5);
    }

    #[test]
    fn overlay_waits_for_elements_and_tears_down_on_dispose() {
        let clock = ManualClock::new();
        let mut t = Tooltip::new(config("t"), true, clock);
        let count = Rc::new(Cell::new(0));
        struct Counting(Rc<Cell<u32>>);
        impl Positioner for Counting {
            fn attach(&mut self, _: &str, _: &str, _: &FloatingConfig) -> Teardown {
                let c = self.0.clone();
                Teardown::new(move || c.set(c.get() + 1))
            }
        }
        let mut positioner = Counting(count.clone());
        t.sync_overlay(&ElementMap::new(), &mut positioner, &mut NoOverlay);
        assert!(t.with_core(|core| core.overlay.is_none()));
        t.sync_overlay(&host(), &mut positioner, &mut NoOverlay);
        assert!(t.with_core(|core| core.overlay.is_some()));
        t.dispose();
        assert_eq!(count.get(), 1);
    }
}
