// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the toast demo.
//!
//! The `App` struct owns the string resources and the toast overlay. Each demo
//! button builds a toast through [`crate::toast::Builder`] and shows it on the
//! overlay, which dismisses it again once its duration has elapsed.

pub mod demo;
pub mod message;
mod view;

pub use demo::Demo;
pub use message::{Flags, Message};

use crate::config;
use crate::toast::{Builder, Duration, Overlay, Resources, Theme, Timings};
use iced::{time, window, Element, Subscription, Task};
use std::path::PathBuf;

/// Interval between auto-dismiss checks while a toast is on screen.
const TICK_INTERVAL: std::time::Duration = std::time::Duration::from_millis(100);

pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Root Iced application state.
#[derive(Debug, Default)]
pub struct App {
    resources: Resources,
    overlay: Overlay,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a `Fn` boot closure; the flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and strings, then surfaces a config warning as a toast.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));
        let resources = Resources::from_config(flags.lang, &config);
        let overlay = Overlay::new(Timings::from_settings(&config.toast));

        let mut app = App { resources, overlay };

        if let Some(key) = config_warning {
            let message = app.resources.i18n().tr(&key);
            let shown = Builder::new(&app.resources, message)
                .with_theme(Theme::Warning)
                .with_duration(Duration::Long)
                .build()
                .and_then(|toast| toast.show(&mut app.overlay));
            if let Err(err) = shown {
                log::error!("Failed to show config warning: {err}");
            }
        }

        (app, Task::none())
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn title(&self) -> String {
        self.resources.i18n().tr("app-title")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(demo) => {
                if let Err(err) = demo.show(&self.resources, &mut self.overlay) {
                    log::error!("Failed to show {demo:?} toast: {err}");
                }
            }
            Message::Tick(now) => {
                self.overlay.tick(now);
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self.resources.i18n(), &self.overlay)
    }

    /// Ticks only while a toast is visible so an idle window stays idle.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.overlay.is_visible() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }
}
