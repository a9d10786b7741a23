// SPDX-License-Identifier: MPL-2.0
//! Reactive toast flavor: presentation derived from a bound message.
//!
//! A `Binding` is a caller-owned mutable slot holding the "current message
//! to display". Whether a toast renders is a pure function of that state:
//! non-blank means visible, blank means nothing. Writing a non-blank
//! message arms a single-shot clear that empties the slot once
//! `ToastAttributes::time` has elapsed.
//!
//! Every write bumps a render generation and the pending clear is tagged
//! with it, so a stale countdown can never erase a message written after
//! it was armed; the newest message always gets its full display time.

use super::attributes::ToastAttributes;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct PendingClear {
    generation: u64,
    deadline: Instant,
}

/// A caller-owned message slot driving a derived toast.
#[derive(Debug, Default)]
pub struct Binding {
    value: String,
    generation: u64,
    pending: Option<PendingClear>,
}

impl Binding {
    /// Creates an empty binding; nothing renders until a message is set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `message` into the slot and arms the clear countdown of
    /// `attributes.time`.
    ///
    /// Blank messages render nothing, so no countdown is armed for them.
    pub fn show(&mut self, message: impl Into<String>, attributes: &ToastAttributes) {
        self.show_at(message, attributes.time, Instant::now());
    }

    /// [`show`](Self::show) with an explicit duration and instant.
    pub fn show_at(&mut self, message: impl Into<String>, duration: Duration, now: Instant) {
        self.value = message.into();
        self.generation = self.generation.wrapping_add(1);

        if self.is_visible() {
            self.pending = Some(PendingClear {
                generation: self.generation,
                deadline: now + duration,
            });
            log::debug!("armed clear countdown for generation {}", self.generation);
        } else {
            self.pending = None;
        }
    }

    /// Empties the slot immediately and disarms any pending clear.
    pub fn clear(&mut self) {
        self.value.clear();
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    /// Whether a toast currently renders: true iff the message is
    /// non-blank after trimming whitespace.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.value.trim().is_empty()
    }

    /// Returns the current message, blank or not.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.value
    }

    /// Whether a clear countdown is armed.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Fires the clear countdown if it is due. Returns whether the slot
    /// was emptied.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// [`tick`](Self::tick) with an explicit current instant.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if now < pending.deadline {
            return false;
        }

        self.pending = None;
        // A countdown armed for an older write must not touch the slot.
        if pending.generation != self.generation {
            return false;
        }

        self.value.clear();
        log::debug!("cleared bound message at generation {}", self.generation);
        true
    }
}
