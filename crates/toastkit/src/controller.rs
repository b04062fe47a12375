//! The toast lifecycle controller.
//!
//! [`ToastController`] owns every toast's state machine:
//!
//! ```text
//! Created ──show──> Showing ──fade in──> Visible ──duration/hide──> Hiding ──fade out──> Detached
//!                      │                    │                         │
//!                      └────────hide────────┴──────────show───────────┘ (retrigger: Hiding, then Showing again)
//! ```
//!
//! Only one toast per `(host, tag)` is attached at a time. Showing a second
//! toast under the same tag fades the first one out and attaches the second
//! at the instant the fade-out completes. At most one toast waits behind a
//! fade-out; a newer request supersedes it and the superseded toast is
//! dropped without ever being attached.
//!
//! Nothing happens between calls: fade completions and auto-hide timers are
//! entries in an event queue that only [`advance`](ToastController::advance)
//! and [`tick`](ToastController::tick) drain.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use toastkit::{SceneHost, ToastController, ToastPhase, ToastRequest};
//!
//! let mut toasts = ToastController::new();
//! let host = toasts.add_host(SceneHost::new(375.0, 667.0));
//!
//! let id = toasts.create(ToastRequest::new("Saved").host(host)).unwrap();
//! toasts.show(id);
//! toasts.advance(Duration::from_millis(400));
//! assert_eq!(toasts.phase(id), Some(ToastPhase::Visible));
//!
//! toasts.advance(Duration::from_secs(6));
//! assert_eq!(toasts.phase(id), Some(ToastPhase::Detached));
//! assert!(toasts.host(host).unwrap().is_empty());
//! ```

use std::time::Duration;

use toastkit_core::alloc::HashMap;
use toastkit_core::profiling::profile_function;

use crate::animation::{fade_in, fade_out};
use crate::error::{ToastError, ToastResult};
use crate::host::{HostId, HostView, ToastView};
use crate::layout::compute_layout;
use crate::queue::{EventKind, EventQueue, ScheduledEvent};
use crate::screen::ScreenStack;
use crate::text::{ApproximateTextMeasure, TextMeasure};
use crate::time::FrameClock;
use crate::toast::{Toast, ToastEvent, ToastId, ToastPhase, ToastRequest, ToastTag};

/// A registered host and the toast currently attached under each tag.
struct HostSlot<H> {
    view: H,
    active: HashMap<ToastTag, ToastId>,
}

/// Manages toasts across a set of hosts.
pub struct ToastController<H: HostView> {
    /// Registered hosts by ID.
    hosts: HashMap<HostId, HostSlot<H>>,
    next_host: u64,
    /// Fallback attachment points.
    screens: ScreenStack,
    /// Toasts that have not been detached for good.
    toasts: HashMap<ToastId, Toast>,
    /// Ids below this were issued by this controller.
    next_toast: u64,
    queue: EventQueue,
    measure: Box<dyn TextMeasure>,
    clock: FrameClock,
    /// Controller clock; only moves in `advance`.
    now: Duration,
    events: Vec<ToastEvent>,
}

impl<H: HostView> ToastController<H> {
    /// Create a controller that measures text with [`ApproximateTextMeasure`].
    pub fn new() -> Self {
        Self::with_text_measure(ApproximateTextMeasure::default())
    }

    pub fn with_text_measure(measure: impl TextMeasure + 'static) -> Self {
        Self {
            hosts: HashMap::new(),
            next_host: 1,
            screens: ScreenStack::new(),
            toasts: HashMap::new(),
            next_toast: 1,
            queue: EventQueue::new(),
            measure: Box::new(measure),
            clock: FrameClock::new(),
            now: Duration::ZERO,
            events: Vec::new(),
        }
    }

    /// Register a host view. Toasts can attach to it once it has an id.
    pub fn add_host(&mut self, view: H) -> HostId {
        let id = HostId(self.next_host);
        self.next_host += 1;
        self.hosts.insert(
            id,
            HostSlot {
                view,
                active: HashMap::new(),
            },
        );
        tracing::debug!(host = id.0, "registered host");
        id
    }

    /// Unregister a host, detaching its toasts immediately.
    ///
    /// Pending fades and timers for those toasts are cancelled and the host
    /// is dropped from the screen stack.
    pub fn remove_host(&mut self, id: HostId) -> Option<H> {
        let mut slot = self.hosts.remove(&id)?;
        self.screens.remove(id);

        let owned: Vec<ToastId> = self
            .toasts
            .values()
            .filter(|toast| toast.host() == id)
            .map(Toast::id)
            .collect();

        for toast_id in owned {
            if let Some(toast) = self.toasts.get_mut(&toast_id) {
                for key in [toast.fade_event.take(), toast.auto_hide.take()]
                    .into_iter()
                    .flatten()
                {
                    self.queue.cancel(key);
                }
                if toast.phase.is_attached() {
                    slot.view.detach(toast_id);
                    self.events.push(ToastEvent::Detached(toast_id));
                }
            }
            self.retire(toast_id);
        }

        tracing::debug!(host = id.0, "removed host");
        Some(slot.view)
    }

    pub fn host(&self, id: HostId) -> Option<&H> {
        self.hosts.get(&id).map(|slot| &slot.view)
    }

    /// Mutable access to a host view, e.g. to resize it. Attached toasts are
    /// laid out again only on their next show.
    pub fn host_mut(&mut self, id: HostId) -> Option<&mut H> {
        self.hosts.get_mut(&id).map(|slot| &mut slot.view)
    }

    pub fn screens(&self) -> &ScreenStack {
        &self.screens
    }

    /// Present and dismiss screens used as fallback attachment points.
    pub fn screens_mut(&mut self) -> &mut ScreenStack {
        &mut self.screens
    }

    /// Create a toast without showing it.
    ///
    /// The toast attaches to the request's host, or to the top of the screen
    /// stack when the request names none.
    pub fn create(&mut self, request: ToastRequest) -> ToastResult<ToastId> {
        let host = request
            .host
            .or_else(|| self.screens.top())
            .ok_or(ToastError::NoAttachmentPoint)?;
        if !self.hosts.contains_key(&host) {
            return Err(ToastError::UnknownHost(host));
        }

        let id = ToastId(self.next_toast);
        self.next_toast += 1;
        let toast = Toast::new(id, host, request);
        tracing::debug!(toast = id.0, host = host.0, message = toast.message(), "created toast");
        self.toasts.insert(id, toast);
        Ok(id)
    }

    /// Create a toast and show it.
    pub fn present(&mut self, request: ToastRequest) -> ToastResult<ToastId> {
        let id = self.create(request)?;
        self.show(id);
        Ok(id)
    }

    /// Show a toast.
    ///
    /// - Already attached: fade out, then fade in again with a fresh timer.
    /// - Another toast attached under the same host and tag: fade that one
    ///   out, then show this one.
    /// - Otherwise: attach and fade in.
    pub fn show(&mut self, id: ToastId) {
        profile_function!();

        let Some(toast) = self.toasts.get(&id) else {
            tracing::warn!(toast = id.0, "show ignored: unknown or detached toast");
            return;
        };

        match toast.phase {
            ToastPhase::Showing | ToastPhase::Visible | ToastPhase::Hiding => {
                tracing::debug!(toast = id.0, "retriggering toast");
                self.queue_behind(id, id);
            }
            ToastPhase::Created => {
                if toast.waiting_on.is_some() {
                    tracing::debug!(toast = id.0, "toast already waiting to be shown");
                    return;
                }

                let active = self
                    .hosts
                    .get(&toast.host())
                    .and_then(|slot| slot.active.get(&toast.tag()))
                    .copied();

                match active {
                    Some(blocker) if blocker != id => {
                        tracing::debug!(
                            toast = id.0,
                            replacing = blocker.0,
                            "replacing visible toast"
                        );
                        self.queue_behind(blocker, id);
                    }
                    _ => self.attach(id),
                }
            }
            ToastPhase::Detached => {
                tracing::warn!(toast = id.0, "show ignored: toast is detached");
            }
        }
    }

    /// Hide a toast.
    ///
    /// Cancels the auto-hide timer and fades out from the current opacity.
    /// Hiding a toast that waits behind another cancels its pending show and
    /// drops it; hiding a toast that is not attached does nothing.
    pub fn hide(&mut self, id: ToastId) {
        profile_function!();

        let Some(toast) = self.toasts.get_mut(&id) else {
            tracing::warn!(toast = id.0, "hide ignored: unknown or detached toast");
            return;
        };

        match toast.phase {
            ToastPhase::Showing | ToastPhase::Visible => self.begin_hide(id),
            ToastPhase::Hiding => {
                if toast.then_show == Some(id) {
                    toast.then_show = None;
                    tracing::debug!(toast = id.0, "cancelled pending retrigger");
                }
            }
            ToastPhase::Created => {
                if let Some(blocker) = toast.waiting_on.take() {
                    if let Some(blocking) = self.toasts.get_mut(&blocker)
                        && blocking.then_show == Some(id)
                    {
                        blocking.then_show = None;
                    }
                    tracing::debug!(toast = id.0, "cancelled pending show");
                    self.retire(id);
                } else {
                    tracing::debug!(toast = id.0, "hide ignored: toast is not attached");
                }
            }
            ToastPhase::Detached => {}
        }
    }

    /// Drop a toast that was created but never shown.
    ///
    /// Attached toasts are left alone; use [`hide`](Self::hide) for those.
    /// Returns true if the toast was dropped.
    pub fn discard(&mut self, id: ToastId) -> bool {
        let Some(toast) = self.toasts.get(&id) else {
            return false;
        };
        if toast.phase != ToastPhase::Created {
            tracing::warn!(toast = id.0, phase = ?toast.phase, "discard ignored: toast is attached");
            return false;
        }

        if toast.waiting_on.is_some() {
            self.hide(id);
        } else {
            self.retire(id);
        }
        true
    }

    /// Move the controller clock forward by `delta`.
    ///
    /// Queued events fire in deadline order. Running fades are stepped up to
    /// each event before it is handled, and events scheduled while handling
    /// fire in the same call if they fall inside `delta`.
    pub fn advance(&mut self, delta: Duration) {
        profile_function!();

        let target = self.now.saturating_add(delta);
        while let Some((key, event)) = self.queue.pop_due(target) {
            let at = key.deadline().max(self.now);
            self.step_fades(at - self.now);
            self.now = at;
            self.handle(event);
        }

        self.step_fades(target - self.now);
        self.now = target;
    }

    /// Advance by the wall-clock time since the previous tick.
    pub fn tick(&mut self) {
        let delta = self.clock.tick();
        self.advance(delta);
    }

    /// Controller clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// When the next queued event fires.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.next_deadline()
    }

    /// Whether no fade or timer is pending.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Lifecycle phase of a toast. `None` for ids this controller never created.
    pub fn phase(&self, id: ToastId) -> Option<ToastPhase> {
        if let Some(toast) = self.toasts.get(&id) {
            Some(toast.phase)
        } else if (1..self.next_toast).contains(&id.0) {
            Some(ToastPhase::Detached)
        } else {
            None
        }
    }

    /// Number of toasts that have not been detached for good.
    pub fn toast_count(&self) -> usize {
        self.toasts.len()
    }

    /// State of a toast that has not been detached for good.
    pub fn toast(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.get(&id)
    }

    /// The toast attached to `host` under `tag`, if any.
    pub fn active_toast(&self, host: HostId, tag: ToastTag) -> Option<ToastId> {
        self.hosts
            .get(&host)
            .and_then(|slot| slot.active.get(&tag))
            .copied()
    }

    /// Take the lifecycle events recorded since the last drain.
    pub fn drain_events(&mut self) -> impl Iterator<Item = ToastEvent> + '_ {
        self.events.drain(..)
    }

    /// Arrange for `next` to be shown once `blocker` has faded out, starting
    /// the fade-out if it is not already running. `next == blocker` is a
    /// retrigger.
    fn queue_behind(&mut self, blocker: ToastId, next: ToastId) {
        let Some(toast) = self.toasts.get_mut(&blocker) else {
            return;
        };
        let previous = toast.then_show.replace(next);
        let needs_hide = matches!(toast.phase, ToastPhase::Showing | ToastPhase::Visible);

        if let Some(previous) = previous
            && previous != next
            && previous != blocker
        {
            self.events.push(ToastEvent::Superseded(previous));
            tracing::debug!(toast = previous.0, by = next.0, "pending toast superseded");
            self.retire(previous);
        }

        if next != blocker
            && let Some(waiting) = self.toasts.get_mut(&next)
        {
            waiting.waiting_on = Some(blocker);
        }

        if needs_hide {
            self.begin_hide(blocker);
        }
    }

    /// Lay out a toast, attach it to its host and start the fade-in.
    fn attach(&mut self, id: ToastId) {
        let Some(toast) = self.toasts.get_mut(&id) else {
            return;
        };
        let Some(slot) = self.hosts.get_mut(&toast.host()) else {
            tracing::warn!(toast = id.0, host = toast.host().0, "host is gone");
            return;
        };

        let layout = match compute_layout(
            slot.view.bounds(),
            toast.message(),
            toast.image(),
            toast.options(),
            self.measure.as_ref(),
        ) {
            Ok(layout) => layout,
            Err(err) => {
                tracing::error!(toast = id.0, "{err}");
                self.retire(id);
                return;
            }
        };

        let view = ToastView::new(toast.message(), toast.image(), toast.options(), &layout);
        slot.view.attach(id, &view);
        slot.active.insert(toast.tag(), id);

        let duration = toast.options().animation_duration;
        toast.layout = Some(layout);
        toast.opacity = 0.0;
        toast.phase = ToastPhase::Showing;
        toast.fade = Some(fade_in(duration));
        toast.fade_event = Some(self.queue.schedule(
            self.now.saturating_add(duration),
            ScheduledEvent {
                toast: id,
                kind: EventKind::FadeInFinished,
            },
        ));

        self.events.push(ToastEvent::Attached(id));
        tracing::debug!(toast = id.0, frame = ?layout.frame, "toast attached");
    }

    /// Cancel timers and start fading out from the current opacity.
    fn begin_hide(&mut self, id: ToastId) {
        let Some(toast) = self.toasts.get_mut(&id) else {
            return;
        };

        for key in [toast.fade_event.take(), toast.auto_hide.take()]
            .into_iter()
            .flatten()
        {
            self.queue.cancel(key);
        }

        let duration = toast.options().animation_duration;
        toast.phase = ToastPhase::Hiding;
        toast.fade = Some(fade_out(toast.opacity, duration));
        toast.fade_event = Some(self.queue.schedule(
            self.now.saturating_add(duration),
            ScheduledEvent {
                toast: id,
                kind: EventKind::FadeOutFinished,
            },
        ));

        self.events.push(ToastEvent::HideStarted(id));
        tracing::debug!(toast = id.0, from = toast.opacity, "toast hiding");
    }

    fn handle(&mut self, event: ScheduledEvent) {
        match event.kind {
            EventKind::FadeInFinished => self.finish_fade_in(event.toast),
            EventKind::AutoHide => {
                if let Some(toast) = self.toasts.get_mut(&event.toast) {
                    toast.auto_hide = None;
                    tracing::debug!(toast = event.toast.0, "auto-hide timer fired");
                    self.begin_hide(event.toast);
                }
            }
            EventKind::FadeOutFinished => self.finish_fade_out(event.toast),
        }
    }

    fn finish_fade_in(&mut self, id: ToastId) {
        let Some(toast) = self.toasts.get_mut(&id) else {
            return;
        };

        toast.fade_event = None;
        toast.fade = None;
        toast.opacity = 1.0;
        toast.phase = ToastPhase::Visible;
        if let Some(slot) = self.hosts.get_mut(&toast.host()) {
            slot.view.set_opacity(id, 1.0);
        }

        toast.auto_hide = Some(self.queue.schedule(
            self.now.saturating_add(toast.options().duration),
            ScheduledEvent {
                toast: id,
                kind: EventKind::AutoHide,
            },
        ));

        self.events.push(ToastEvent::Shown(id));
        tracing::debug!(toast = id.0, "toast visible");
    }

    fn finish_fade_out(&mut self, id: ToastId) {
        let Some(toast) = self.toasts.get_mut(&id) else {
            return;
        };

        toast.fade_event = None;
        toast.fade = None;
        toast.opacity = 0.0;
        let then_show = toast.then_show.take();

        if let Some(slot) = self.hosts.get_mut(&toast.host()) {
            slot.view.detach(id);
            if slot.active.get(&toast.tag()) == Some(&id) {
                slot.active.remove(&toast.tag());
            }
        }
        self.events.push(ToastEvent::Detached(id));
        tracing::debug!(toast = id.0, "toast detached");

        if then_show == Some(id) {
            toast.phase = ToastPhase::Created;
            self.attach(id);
            return;
        }

        self.retire(id);
        if let Some(next) = then_show {
            if let Some(waiting) = self.toasts.get_mut(&next) {
                waiting.waiting_on = None;
            }
            self.attach(next);
        }
    }

    /// Step running fades by `delta` and push the new opacities to the hosts.
    fn step_fades(&mut self, delta: Duration) {
        if delta.is_zero() {
            return;
        }

        for toast in self.toasts.values_mut() {
            let Some(fade) = toast.fade.as_mut() else {
                continue;
            };
            fade.update(delta);
            toast.opacity = fade.value();
            if let Some(slot) = self.hosts.get_mut(&toast.host()) {
                slot.view.set_opacity(toast.id(), toast.opacity);
            }
        }
    }

    fn retire(&mut self, id: ToastId) {
        if self.toasts.remove(&id).is_some() {
            tracing::trace!(toast = id.0, "toast retired");
        }
    }
}

impl<H: HostView> Default for ToastController<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::SceneHost;
    use crate::options::ToastOptions;

    const FADE: Duration = Duration::from_millis(400);

    fn setup() -> (ToastController<SceneHost>, HostId) {
        let mut controller = ToastController::new();
        let host = controller.add_host(SceneHost::new(375.0, 667.0));
        (controller, host)
    }

    #[test]
    fn test_create_requires_attachment_point() {
        let mut controller: ToastController<SceneHost> = ToastController::new();
        assert_eq!(
            controller.create(ToastRequest::new("Hi")),
            Err(ToastError::NoAttachmentPoint)
        );
        assert_eq!(
            controller.create(ToastRequest::new("Hi").host(HostId(42))),
            Err(ToastError::UnknownHost(HostId(42)))
        );
    }

    #[test]
    fn test_create_falls_back_to_top_screen() {
        let mut controller = ToastController::new();
        let root = controller.add_host(SceneHost::new(375.0, 667.0));
        let modal = controller.add_host(SceneHost::new(375.0, 400.0));
        controller.screens_mut().set_root(root);
        controller.screens_mut().present(modal);

        let id = controller.create(ToastRequest::new("Hi")).unwrap();
        assert_eq!(controller.toast(id).unwrap().host(), modal);

        controller.screens_mut().dismiss();
        let id = controller.create(ToastRequest::new("Hi")).unwrap();
        assert_eq!(controller.toast(id).unwrap().host(), root);
    }

    #[test]
    fn test_show_fades_in_then_schedules_auto_hide() {
        let (mut controller, host) = setup();
        let id = controller.create(ToastRequest::new("Hi").host(host)).unwrap();
        assert_eq!(controller.phase(id), Some(ToastPhase::Created));

        controller.show(id);
        assert_eq!(controller.phase(id), Some(ToastPhase::Showing));
        assert_eq!(controller.active_toast(host, ToastTag::default()), Some(id));
        assert_eq!(controller.host(host).unwrap().child(id).unwrap().opacity, 0.0);

        controller.advance(FADE / 2);
        let opacity = controller.toast(id).unwrap().opacity();
        assert!(opacity > 0.0 && opacity < 1.0);

        controller.advance(FADE / 2);
        assert_eq!(controller.phase(id), Some(ToastPhase::Visible));
        assert_eq!(
            controller.toast(id).unwrap().auto_hide_deadline(),
            Some(FADE + Duration::from_secs(5))
        );
    }

    #[test]
    fn test_hide_during_fade_in_fades_from_current_opacity() {
        let (mut controller, host) = setup();
        let id = controller.present(ToastRequest::new("Hi").host(host)).unwrap();

        controller.advance(FADE / 2);
        let midway = controller.toast(id).unwrap().opacity();
        controller.hide(id);
        assert_eq!(controller.phase(id), Some(ToastPhase::Hiding));
        assert_eq!(controller.toast(id).unwrap().opacity(), midway);

        controller.advance(FADE);
        assert_eq!(controller.phase(id), Some(ToastPhase::Detached));
        assert!(controller.is_idle());
    }

    #[test]
    fn test_hide_unattached_toast_is_noop() {
        let (mut controller, host) = setup();
        let id = controller.create(ToastRequest::new("Hi").host(host)).unwrap();
        controller.hide(id);
        assert_eq!(controller.phase(id), Some(ToastPhase::Created));
        assert!(controller.is_idle());
    }

    #[test]
    fn test_detached_toast_cannot_be_shown_again() {
        let (mut controller, host) = setup();
        let id = controller.present(ToastRequest::new("Hi").host(host)).unwrap();
        controller.advance(FADE);
        controller.hide(id);
        controller.advance(FADE);

        controller.show(id);
        assert_eq!(controller.phase(id), Some(ToastPhase::Detached));
        assert!(controller.host(host).unwrap().is_empty());
    }

    #[test]
    fn test_zero_animation_duration_completes_in_one_advance() {
        let (mut controller, host) = setup();
        let options = ToastOptions::builder()
            .animation_duration(Duration::ZERO)
            .duration(Duration::from_secs(1))
            .build();
        let id = controller
            .present(ToastRequest::new("Hi").host(host).options(options))
            .unwrap();

        controller.advance(Duration::ZERO);
        assert_eq!(controller.phase(id), Some(ToastPhase::Visible));

        controller.advance(Duration::from_secs(1));
        assert_eq!(controller.phase(id), Some(ToastPhase::Detached));
    }

    #[test]
    fn test_discard_drops_unshown_toast() {
        let (mut controller, host) = setup();
        let idle = controller.create(ToastRequest::new("Idle").host(host)).unwrap();
        assert!(controller.discard(idle));
        assert_eq!(controller.phase(idle), Some(ToastPhase::Detached));
        assert_eq!(controller.toast_count(), 0);

        let shown = controller.present(ToastRequest::new("Shown").host(host)).unwrap();
        let waiting = controller.present(ToastRequest::new("Waiting").host(host)).unwrap();
        assert!(controller.toast(waiting).unwrap().is_pending());
        assert!(controller.discard(waiting));
        assert!(controller.toast(shown).unwrap().then_show.is_none());

        // Attached toasts have to be hidden instead.
        controller.advance(FADE);
        assert!(!controller.discard(shown));
        assert!(!controller.discard(idle));
    }

    #[test]
    fn test_phase_of_issued_ids_survives_removal() {
        let (mut controller, host) = setup();
        let id = controller.create(ToastRequest::new("Hi").host(host)).unwrap();
        controller.discard(id);
        assert_eq!(controller.phase(id), Some(ToastPhase::Detached));
        assert_eq!(controller.phase(ToastId(id.0 + 1)), None);
        assert_eq!(controller.phase(ToastId(0)), None);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let (mut controller, _) = setup();
        controller.show(ToastId(u64::MAX));
        controller.hide(ToastId(u64::MAX));
        assert_eq!(controller.phase(ToastId(u64::MAX)), None);
        assert_eq!(controller.drain_events().count(), 0);
    }
}
