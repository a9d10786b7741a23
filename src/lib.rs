// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` provides transient toast notification overlays for the
//! Iced GUI toolkit.
//!
//! Toasts come in two flavors: an imperative, fire-and-forget
//! [`Scheduler`](toast::Scheduler) driven through a
//! [`PresentationSurface`](toast::PresentationSurface), and a reactive
//! [`Binding`](toast::Binding) whose toast is derived from a bound message
//! slot. Styling is resolved by category (warning, success, error, notify,
//! custom) through the pure [`resolve`](toast::resolve) function.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod toast;
pub mod ui;
