// SPDX-License-Identifier: MPL-2.0
//! Iced display host.
//!
//! The `Overlay` keeps the toast that is currently on screen and drops it once
//! its duration has elapsed. A new toast replaces the visible one.

use super::options::{Duration, Position};
use super::renderer::{DisplayHost, DisplayRequest};
use crate::config::ToastSettings;
use crate::error::Result;
use crate::ui::design_tokens::sizing;
use iced::widget::Container;
use iced::{alignment, Element, Length, Padding};
use std::time::Instant;

/// Display time of each [`Duration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    short: std::time::Duration,
    long: std::time::Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self::from_settings(&ToastSettings::default())
    }
}

impl Timings {
    pub fn from_settings(settings: &ToastSettings) -> Self {
        Self {
            short: settings.short_duration(),
            long: settings.long_duration(),
        }
    }

    #[must_use]
    pub fn of(&self, duration: Duration) -> std::time::Duration {
        match duration {
            Duration::Short => self.short,
            Duration::Long => self.long,
        }
    }
}

#[derive(Debug)]
struct Presented {
    request: DisplayRequest,
    shown_at: Instant,
    lifetime: std::time::Duration,
}

/// Single-slot toast host for an Iced application.
#[derive(Debug, Default)]
pub struct Overlay {
    timings: Timings,
    current: Option<Presented>,
}

impl Overlay {
    pub fn new(timings: Timings) -> Self {
        Self {
            timings,
            current: None,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// The request currently on screen, if any.
    pub fn current(&self) -> Option<&DisplayRequest> {
        self.current.as_ref().map(|presented| &presented.request)
    }

    /// Drops the visible toast if it has expired at `now`.
    ///
    /// Returns `true` when a toast was dismissed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|p| now.saturating_duration_since(p.shown_at) >= p.lifetime);
        if expired {
            log::debug!("toast expired");
            self.current = None;
        }
        expired
    }

    /// Renders the visible toast anchored according to its gravity.
    pub fn view<'a, Message: 'a>(&'a self) -> Option<Element<'a, Message>> {
        let request = &self.current.as_ref()?.request;
        let gravity = request.gravity;

        let padding = match gravity.position {
            Position::Top => Padding {
                top: gravity.y_offset,
                ..Padding::ZERO
            },
            Position::Center => Padding::ZERO,
            Position::Bottom => Padding {
                bottom: gravity.y_offset,
                ..Padding::ZERO
            },
        };
        let padding = Padding {
            left: gravity.x_offset.max(0.0),
            ..padding
        };

        let toast =
            Container::new(request.view.view::<Message>()).max_width(sizing::TOAST_MAX_WIDTH);

        Some(
            Container::new(toast)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(gravity.position.vertical_alignment())
                .padding(padding)
                .into(),
        )
    }
}

impl DisplayHost for Overlay {
    fn display(&mut self, request: DisplayRequest) -> Result<()> {
        if self.current.is_some() {
            log::debug!("replacing visible toast");
        }
        let lifetime = self.timings.of(request.duration);
        self.current = Some(Presented {
            request,
            shown_at: Instant::now(),
            lifetime,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::renderer::Gravity;
    use crate::toast::view::MessageView;

    fn request(text: &str, duration: Duration) -> DisplayRequest {
        DisplayRequest {
            view: MessageView::with_text(text),
            gravity: Gravity {
                position: Position::Bottom,
                x_offset: 0.0,
                y_offset: 64.0,
            },
            duration,
        }
    }

    fn timings() -> Timings {
        Timings::from_settings(&ToastSettings {
            short_duration_ms: Some(1_000),
            long_duration_ms: Some(3_000),
            ..ToastSettings::default()
        })
    }

    #[test]
    fn new_overlay_is_empty() {
        let overlay = Overlay::new(timings());
        assert!(!overlay.is_visible());
        assert!(overlay.current().is_none());
    }

    #[test]
    fn display_makes_toast_visible() {
        let mut overlay = Overlay::new(timings());
        overlay
            .display(request("hi", Duration::Short))
            .expect("display");
        assert!(overlay.is_visible());
        assert_eq!(overlay.current().map(|r| r.view.text()), Some("hi"));
    }

    #[test]
    fn newer_toast_replaces_visible_one() {
        let mut overlay = Overlay::new(timings());
        overlay
            .display(request("first", Duration::Long))
            .expect("display");
        overlay
            .display(request("second", Duration::Short))
            .expect("display");
        assert_eq!(overlay.current().map(|r| r.view.text()), Some("second"));
    }

    #[test]
    fn tick_keeps_fresh_toast() {
        let mut overlay = Overlay::new(timings());
        overlay
            .display(request("hi", Duration::Short))
            .expect("display");
        assert!(!overlay.tick(Instant::now()));
        assert!(overlay.is_visible());
    }

    #[test]
    fn tick_dismisses_expired_toast() {
        let mut overlay = Overlay::new(timings());
        overlay
            .display(request("hi", Duration::Short))
            .expect("display");
        let later = Instant::now() + std::time::Duration::from_secs(2);
        assert!(overlay.tick(later));
        assert!(!overlay.is_visible());
    }

    #[test]
    fn long_toast_outlives_short_lifetime() {
        let mut overlay = Overlay::new(timings());
        overlay
            .display(request("hi", Duration::Long))
            .expect("display");
        let later = Instant::now() + std::time::Duration::from_secs(2);
        assert!(!overlay.tick(later));
        assert!(overlay.is_visible());
    }

    #[test]
    fn timings_follow_settings() {
        let timings = timings();
        assert_eq!(timings.of(Duration::Short), std::time::Duration::from_secs(1));
        assert_eq!(timings.of(Duration::Long), std::time::Duration::from_secs(3));
    }
}
