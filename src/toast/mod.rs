// SPDX-License-Identifier: MPL-2.0
//! Toast scheduling and styling core.
//!
//! Everything in this module is independent of pixel rendering: it decides
//! *what* a toast looks like and *when* it appears and disappears, and
//! hands the rest to a [`PresentationSurface`] (or, for Elm-style hosts,
//! to a view deriving from scheduler state; see [`crate::ui::overlay`]).
//!
//! # Components
//!
//! - [`category`](Category) - the shared `Category`/`Position` enums
//! - [`style`](resolve) - pure category-to-style resolution
//! - [`descriptor`](Toast) - the immutable per-show value
//! - [`scheduler`](Scheduler) - imperative show/expire lifecycle
//! - [`reactive`](Binding) - bound-message flavor with a derived view
//! - [`layout`] - placement offsets and width capping
//!
//! # Usage
//!
//! ```
//! use iced_toast::toast::{DerivedSurface, Scheduler, Toast};
//!
//! let mut scheduler = Scheduler::new();
//! let mut surface = DerivedSurface;
//!
//! let id = scheduler.show(&mut surface, Toast::success("Image saved"));
//! assert!(id.is_some());
//!
//! // Drive expiry from a periodic tick while toasts are active.
//! scheduler.tick(&mut surface);
//! ```

mod attributes;
mod category;
mod descriptor;
pub mod layout;
mod reactive;
mod scheduler;
mod style;

pub use attributes::{LineBreak, ToastAttributes};
pub use category::{Category, Position};
pub use descriptor::{Toast, ToastId};
pub use reactive::Binding;
pub use scheduler::{DerivedSurface, Presented, PresentationSurface, Scheduler};
pub use style::{resolve, Overrides, Style};
