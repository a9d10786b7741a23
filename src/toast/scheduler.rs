// SPDX-License-Identifier: MPL-2.0
//! Imperative toast lifecycle management.
//!
//! The `Scheduler` owns every active presentation on one surface. A toast
//! moves through `Idle -> Presented -> Dismissed` exactly once: `show`
//! mounts it and arms a non-cancelable deadline, `tick`/`tick_at` unmounts
//! it once the deadline has passed. There is no cancellation path; a
//! presented toast always runs its full duration.
//!
//! Concurrent `show` calls are independent: nothing is queued, serialized,
//! or deduplicated, so overlapping toasts may visually stack (a warning is
//! logged when that happens).

use super::descriptor::{Toast, ToastId};
use super::style::Style;
use std::time::Instant;

/// The rendering seam: whatever actually draws toasts on screen.
///
/// Elm-style hosts that derive their view from [`Scheduler::active`] can
/// use [`DerivedSurface`]; retained-mode hosts implement the callbacks.
pub trait PresentationSurface {
    /// Called once when a toast is presented.
    fn mount(&mut self, toast: &Presented);

    /// Called once when a toast's countdown elapses.
    fn unmount(&mut self, id: ToastId);
}

/// Surface for hosts whose rendering is a pure function of scheduler
/// state. Mount and unmount are no-ops.
#[derive(Debug, Clone, Copy, Default)]
pub struct DerivedSurface;

impl PresentationSurface for DerivedSurface {
    fn mount(&mut self, _toast: &Presented) {}

    fn unmount(&mut self, _id: ToastId) {}
}

/// One active presentation: the descriptor, its resolved style, and the
/// deadline it will be dismissed at.
#[derive(Debug, Clone)]
pub struct Presented {
    toast: Toast,
    style: Style,
    presented_at: Instant,
    deadline: Instant,
}

impl Presented {
    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.toast.id()
    }

    /// Returns the descriptor.
    #[must_use]
    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    /// Returns the style resolved at presentation time.
    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Returns when this toast was presented.
    #[must_use]
    pub fn presented_at(&self) -> Instant {
        self.presented_at
    }

    /// Returns the dismissal deadline.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Whether the countdown has elapsed at `now`. Never true before the
    /// full duration has passed.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// Owns the active toasts of one presentation surface.
#[derive(Debug, Default)]
pub struct Scheduler {
    active: Vec<Presented>,
}

impl Scheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Presents `toast` and arms its countdown.
    ///
    /// Blank messages (whitespace-only after trimming) are a no-op: the
    /// toast never leaves Idle and `None` is returned. Otherwise the
    /// resolved style and descriptor are handed to the surface to mount,
    /// and the returned ID identifies the presentation until it expires.
    pub fn show<S: PresentationSurface>(&mut self, surface: &mut S, toast: Toast) -> Option<ToastId> {
        self.show_at(surface, toast, Instant::now())
    }

    /// [`show`](Self::show) with an explicit presentation instant.
    pub fn show_at<S: PresentationSurface>(
        &mut self,
        surface: &mut S,
        toast: Toast,
        now: Instant,
    ) -> Option<ToastId> {
        if toast.is_blank() {
            log::debug!("ignoring toast with blank message");
            return None;
        }

        let style = toast.style();
        let deadline = now + toast.duration();
        let presented = Presented {
            toast,
            style,
            presented_at: now,
            deadline,
        };
        let id = presented.id();

        surface.mount(&presented);
        self.active.push(presented);

        log::debug!("presented toast {id:?}");
        if self.active.len() > 1 {
            log::warn!(
                "{} toasts active on one surface; they will stack visually",
                self.active.len()
            );
        }

        Some(id)
    }

    /// Dismisses every toast whose countdown has elapsed.
    ///
    /// Should be called periodically (e.g. every 100 ms) while toasts are
    /// active.
    pub fn tick<S: PresentationSurface>(&mut self, surface: &mut S) {
        self.tick_at(surface, Instant::now());
    }

    /// [`tick`](Self::tick) with an explicit current instant.
    pub fn tick_at<S: PresentationSurface>(&mut self, surface: &mut S, now: Instant) {
        let mut index = 0;
        while index < self.active.len() {
            if self.active[index].is_expired_at(now) {
                let expired = self.active.remove(index);
                surface.unmount(expired.id());
                log::debug!("dismissed toast {:?}", expired.id());
            } else {
                index += 1;
            }
        }
    }

    /// Returns the active presentations, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &Presented> {
        self.active.iter()
    }

    /// Returns the number of active presentations.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Whether any toast is currently presented.
    #[must_use]
    pub fn has_active(&self) -> bool {
        !self.active.is_empty()
    }

    /// Whether the toast with `id` is still presented.
    #[must_use]
    pub fn is_active(&self, id: ToastId) -> bool {
        self.active.iter().any(|p| p.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct RecordingSurface {
        mounted: Vec<ToastId>,
        unmounted: Vec<ToastId>,
    }

    impl PresentationSurface for RecordingSurface {
        fn mount(&mut self, toast: &Presented) {
            self.mounted.push(toast.id());
        }

        fn unmount(&mut self, id: ToastId) {
            self.unmounted.push(id);
        }
    }

    #[test]
    fn show_mounts_and_activates() {
        let mut scheduler = Scheduler::new();
        let mut surface = RecordingSurface::default();

        let id = scheduler
            .show(&mut surface, Toast::success("saved"))
            .expect("non-blank toast should present");

        assert_eq!(surface.mounted, vec![id]);
        assert!(scheduler.is_active(id));
        assert_eq!(scheduler.active_count(), 1);
    }

    #[test]
    fn blank_message_is_a_no_op() {
        let mut scheduler = Scheduler::new();
        let mut surface = RecordingSurface::default();

        assert!(scheduler.show(&mut surface, Toast::new("")).is_none());
        assert!(scheduler.show(&mut surface, Toast::new("   ")).is_none());
        assert!(surface.mounted.is_empty());
        assert!(!scheduler.has_active());
    }

    #[test]
    fn toast_is_dismissed_at_deadline_never_earlier() {
        let mut scheduler = Scheduler::new();
        let mut surface = RecordingSurface::default();
        let start = Instant::now();

        let toast = Toast::new("hello").with_duration(Duration::from_secs(3));
        let id = scheduler.show_at(&mut surface, toast, start).unwrap();

        scheduler.tick_at(&mut surface, start + Duration::from_millis(2999));
        assert!(scheduler.is_active(id));
        assert!(surface.unmounted.is_empty());

        scheduler.tick_at(&mut surface, start + Duration::from_secs(3));
        assert!(!scheduler.is_active(id));
        assert_eq!(surface.unmounted, vec![id]);
    }

    #[test]
    fn overlapping_shows_have_independent_deadlines() {
        let mut scheduler = Scheduler::new();
        let mut surface = RecordingSurface::default();
        let start = Instant::now();

        let short = scheduler
            .show_at(
                &mut surface,
                Toast::new("short").with_duration(Duration::from_secs(1)),
                start,
            )
            .unwrap();
        let long = scheduler
            .show_at(
                &mut surface,
                Toast::new("long").with_duration(Duration::from_secs(5)),
                start,
            )
            .unwrap();
        assert_eq!(scheduler.active_count(), 2);

        scheduler.tick_at(&mut surface, start + Duration::from_secs(1));
        assert!(!scheduler.is_active(short));
        assert!(scheduler.is_active(long));

        scheduler.tick_at(&mut surface, start + Duration::from_secs(5));
        assert!(!scheduler.has_active());
        assert_eq!(surface.unmounted, vec![short, long]);
    }

    #[test]
    fn dismissal_is_terminal() {
        let mut scheduler = Scheduler::new();
        let mut surface = RecordingSurface::default();
        let start = Instant::now();

        let toast = Toast::new("once").with_duration(Duration::from_secs(1));
        let id = scheduler.show_at(&mut surface, toast, start).unwrap();

        scheduler.tick_at(&mut surface, start + Duration::from_secs(1));
        scheduler.tick_at(&mut surface, start + Duration::from_secs(2));

        assert!(!scheduler.is_active(id));
        assert_eq!(surface.unmounted, vec![id]);
    }

    #[test]
    fn presented_exposes_resolved_style() {
        let mut scheduler = Scheduler::new();
        let mut surface = RecordingSurface::default();

        let _ = scheduler.show(&mut surface, Toast::notify("fyi"));
        let presented = scheduler.active().next().unwrap();
        assert!(presented.style().icon.is_none());
    }
}
