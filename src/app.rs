// SPDX-License-Identifier: MPL-2.0
//! Demo application showcasing both toast flavors.
//!
//! One button per category drives the imperative scheduler; a separate
//! button writes into the reactive binding. The tick subscription is only
//! alive while something is on screen, so the idle app never wakes.

use crate::config;
use crate::toast::{
    Binding, Category, DerivedSurface, Overrides, Position, Scheduler, Toast, ToastAttributes,
};
use crate::ui::design_tokens::palette;
use crate::ui::overlay;
use iced::widget::{button, text, Column, Container, Stack};
use iced::{alignment, Element, Length, Subscription, Task};
use std::time::Instant;

/// Runtime flags parsed by `main.rs`.
#[derive(Debug, Default)]
pub struct Flags {
    /// Position for every toast the demo shows.
    pub position: Option<Position>,
    /// Message presented on startup.
    pub message: Option<String>,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Present an imperative toast of the given category.
    Show(Category),
    /// Write into the reactive binding.
    ShowBound,
    /// Periodic tick for toast expiry.
    Tick(Instant),
}

/// Root demo state: one scheduler, one binding, shared placement.
pub struct App {
    scheduler: Scheduler,
    surface: DerivedSurface,
    binding: Binding,
    attributes: ToastAttributes,
    position: Position,
    duration: std::time::Duration,
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let mut app = App {
            scheduler: Scheduler::new(),
            surface: DerivedSurface,
            binding: Binding::new(),
            attributes: ToastAttributes {
                time: config.reactive_time(),
                category: Category::Success,
                ..ToastAttributes::default()
            },
            position: flags.position.unwrap_or_else(|| config.position()),
            duration: config.duration(),
        };

        if let Some(message) = flags.message {
            let toast = Toast::new(message)
                .with_category(config.category())
                .with_position(app.position)
                .with_duration(app.duration);
            let _ = app.scheduler.show(&mut app.surface, toast);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("iced_toast demo")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(category) => {
                let toast = demo_toast(category)
                    .with_position(self.position)
                    .with_duration(self.duration);
                let _ = self.scheduler.show(&mut self.surface, toast);
                Task::none()
            }
            Message::ShowBound => {
                self.binding.show("Saved", &self.attributes);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.scheduler.tick(&mut self.surface);
                self.binding.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let mut buttons = Column::new().spacing(10).width(Length::Shrink);
        for (label, category) in [
            ("Warning", Category::Warning),
            ("Success", Category::Success),
            ("Error", Category::Error),
            ("Notify", Category::Notify),
            ("Custom", Category::Custom),
        ] {
            buttons = buttons.push(
                button(text(label))
                    .width(Length::Fixed(160.0))
                    .on_press(Message::Show(category)),
            );
        }
        buttons = buttons.push(
            button(text("Reactive"))
                .width(Length::Fixed(160.0))
                .on_press(Message::ShowBound),
        );

        let content = Container::new(buttons)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        let with_imperative = Stack::new()
            .push(content)
            .push(overlay::view_overlay(&self.scheduler))
            .width(Length::Fill)
            .height(Length::Fill);

        overlay::wrap(
            with_imperative.into(),
            &self.binding,
            self.position,
            config::defaults::DEFAULT_REACTIVE_PADDING,
            &self.attributes,
        )
    }

    fn subscription(&self) -> Subscription<Message> {
        overlay::tick_subscription(self.scheduler.has_active() || self.binding.has_pending())
            .map(Message::Tick)
    }
}

/// Builds the sample toast for a category button.
fn demo_toast(category: Category) -> Toast {
    match category {
        Category::Warning => Toast::warning("Check the export settings"),
        Category::Success => Toast::success("Image saved"),
        Category::Error => Toast::error("Unable to load the file"),
        Category::Notify => Toast::notify("Rendering finished"),
        Category::Custom => Toast::custom(
            "Styled just for you",
            Overrides {
                text_color: Some(palette::NAVY),
                ..Overrides::default()
            },
        ),
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_toasts_cover_every_category() {
        for category in Category::ALL {
            assert_eq!(demo_toast(category).category(), category);
        }
    }

    #[test]
    fn tick_dismisses_and_clears() {
        let (mut app, _task) = App::new(Flags {
            position: None,
            message: Some(String::from("startup")),
        });
        assert!(app.scheduler.has_active());

        let _ = app.update(Message::ShowBound);
        assert!(app.binding.is_visible());

        // A tick long before any deadline changes nothing.
        let _ = app.update(Message::Tick(Instant::now()));
        assert!(app.scheduler.has_active());
        assert!(app.binding.is_visible());
    }
}
