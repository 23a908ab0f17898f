// SPDX-License-Identifier: MPL-2.0
//! Turning a [`ToastConfig`] into a display request.
//!
//! [`Toast::show`] resolves the theme, fills a fresh [`MessageView`], computes
//! the gravity and hands everything to a [`DisplayHost`] in one call. Timing and
//! overlap with other toasts are the host's business.

use super::options::{Duration, Position, ToastConfig};
use super::resources::{Dimension, ResourceResolver};
use super::view::MessageView;
use crate::error::Result;

/// Anchor and offsets of a toast on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    pub position: Position,
    pub x_offset: f32,
    pub y_offset: f32,
}

/// Everything a host needs to present one toast.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRequest {
    pub view: MessageView,
    pub gravity: Gravity,
    pub duration: Duration,
}

/// Something that can put a toast on screen.
pub trait DisplayHost {
    /// Presents `request`. The host schedules appearance and dismissal itself.
    fn display(&mut self, request: DisplayRequest) -> Result<()>;
}

/// Vertical offset for `position`: centered toasts sit exactly in the middle.
#[must_use]
pub fn y_offset_for(position: Position, y_offset: f32) -> f32 {
    match position {
        Position::Center => 0.0,
        Position::Top | Position::Bottom => y_offset,
    }
}

/// A built toast, ready to be shown once.
#[derive(Debug)]
pub struct Toast<'a, C: ResourceResolver + ?Sized> {
    context: &'a C,
    config: ToastConfig,
}

impl<'a, C: ResourceResolver + ?Sized> Toast<'a, C> {
    pub(crate) fn new(context: &'a C, config: ToastConfig) -> Self {
        Self { context, config }
    }

    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Shows the toast on `host`. Errors raised by the host are returned as-is.
    pub fn show<H: DisplayHost + ?Sized>(self, host: &mut H) -> Result<()> {
        let request = self.prepare(MessageView::default());
        log::debug!(
            "showing {:?} toast at {:?} for {:?}",
            self.config.theme(),
            request.gravity.position,
            request.duration
        );
        host.display(request)
    }

    /// Applies theme, text and placement to `view`.
    pub(crate) fn prepare(&self, mut view: MessageView) -> DisplayRequest {
        let visuals = self.context.visuals(self.config.theme());

        if let Some(icon) = visuals.icon {
            let padding = self.context.dimension(Dimension::IconPadding);
            view.set_leading_icon(icon, padding);
        }

        view.set_text_color(visuals.text_color);
        if !self.config.message().is_empty() {
            view.set_text(self.config.message());
        }

        view.set_background(visuals.background);

        let position = self.config.position();
        let gravity = Gravity {
            position,
            x_offset: 0.0,
            y_offset: y_offset_for(position, self.context.dimension(Dimension::YOffset)),
        };

        DisplayRequest {
            view,
            gravity,
            duration: self.config.duration(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::toast::options::{StringId, Theme};
    use crate::toast::resources::{theme_visuals, Icon};
    use crate::toast::Builder;

    const Y_OFFSET: f32 = 50.0;
    const ICON_PADDING: f32 = 6.0;

    #[derive(Debug)]
    struct Fixed;

    impl ResourceResolver for Fixed {
        fn string(&self, id: StringId) -> Result<String> {
            Err(Error::MissingResource(id.key().to_string()))
        }

        fn dimension(&self, dimension: Dimension) -> f32 {
            match dimension {
                Dimension::YOffset => Y_OFFSET,
                Dimension::IconPadding => ICON_PADDING,
            }
        }
    }

    #[derive(Default)]
    struct Recorder {
        requests: Vec<DisplayRequest>,
    }

    impl DisplayHost for Recorder {
        fn display(&mut self, request: DisplayRequest) -> Result<()> {
            self.requests.push(request);
            Ok(())
        }
    }

    struct Refusing;

    impl DisplayHost for Refusing {
        fn display(&mut self, _request: DisplayRequest) -> Result<()> {
            Err(Error::Display("window is gone".to_string()))
        }
    }

    #[test]
    fn center_has_no_vertical_offset() {
        assert_eq!(y_offset_for(Position::Center, Y_OFFSET), 0.0);
        assert_eq!(y_offset_for(Position::Top, Y_OFFSET), Y_OFFSET);
        assert_eq!(y_offset_for(Position::Bottom, Y_OFFSET), Y_OFFSET);
    }

    #[test]
    fn offsets_ignore_theme_and_duration() {
        for theme in Theme::ALL {
            for duration in [Duration::Short, Duration::Long] {
                for position in Position::ALL {
                    let toast = Builder::new(&Fixed, "x")
                        .with_theme(theme)
                        .with_duration(duration)
                        .with_position(position)
                        .build()
                        .expect("build");
                    let gravity = toast.prepare(MessageView::default()).gravity;
                    let expected = if position == Position::Center { 0.0 } else { Y_OFFSET };
                    assert_eq!(gravity.y_offset, expected);
                    assert_eq!(gravity.x_offset, 0.0);
                }
            }
        }
    }

    #[test]
    fn empty_message_keeps_existing_text() {
        let toast = Builder::empty(&Fixed).build().expect("build");
        let request = toast.prepare(MessageView::with_text("previous"));
        assert_eq!(request.view.text(), "previous");
    }

    #[test]
    fn message_replaces_existing_text() {
        let toast = Builder::new(&Fixed, "Saved").build().expect("build");
        let request = toast.prepare(MessageView::with_text("previous"));
        assert_eq!(request.view.text(), "Saved");
    }

    #[test]
    fn default_theme_leaves_icon_unset() {
        let toast = Builder::new(&Fixed, "Plain").build().expect("build");
        let request = toast.prepare(MessageView::default());
        assert!(request.view.leading_icon().is_none());
        assert_eq!(request.view.icon_padding(), 0.0);
    }

    #[test]
    fn themed_toast_gets_icon_with_padding() {
        let toast = Builder::new(&Fixed, "Careful")
            .with_theme(Theme::Warning)
            .build()
            .expect("build");
        let request = toast.prepare(MessageView::default());
        let visuals = theme_visuals(Theme::Warning);
        assert_eq!(request.view.leading_icon(), Some(Icon::Warning));
        assert_eq!(request.view.icon_padding(), ICON_PADDING);
        assert_eq!(request.view.text_color(), visuals.text_color);
        assert_eq!(request.view.background(), visuals.background);
    }

    #[test]
    fn show_hands_exactly_one_request_to_host() {
        let mut host = Recorder::default();
        Builder::new(&Fixed, "Oops")
            .with_theme(Theme::Error)
            .with_duration(Duration::Long)
            .build()
            .expect("build")
            .show(&mut host)
            .expect("show");

        assert_eq!(host.requests.len(), 1);
        let request = &host.requests[0];
        assert_eq!(request.duration, Duration::Long);
        assert_eq!(request.view.text(), "Oops");
        assert_eq!(request.view.leading_icon(), Some(Icon::Error));
    }

    #[test]
    fn host_errors_are_returned_unchanged() {
        let err = Builder::new(&Fixed, "Lost")
            .build()
            .expect("build")
            .show(&mut Refusing)
            .unwrap_err();
        assert_eq!(err, Error::Display("window is gone".to_string()));
    }
}
