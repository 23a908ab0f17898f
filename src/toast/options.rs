// SPDX-License-Identifier: MPL-2.0
//! Toast option values and the finalized [`ToastConfig`].

use iced::alignment;

/// Visual style applied to the toast view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// No icon, neutral colors.
    #[default]
    Default,
    Success,
    Warning,
    Error,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Default, Theme::Success, Theme::Warning, Theme::Error];
}

/// How long the host keeps the toast on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Duration {
    #[default]
    Short,
    Long,
}

/// Where the toast is anchored vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    Top,
    Center,
    #[default]
    Bottom,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Top, Position::Center, Position::Bottom];

    #[must_use]
    pub fn vertical_alignment(self) -> alignment::Vertical {
        match self {
            Position::Top => alignment::Vertical::Top,
            Position::Center => alignment::Vertical::Center,
            Position::Bottom => alignment::Vertical::Bottom,
        }
    }
}

/// Identifier of a localized string resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringId(&'static str);

impl StringId {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub fn key(&self) -> &'static str {
        self.0
    }
}

/// Where the toast text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    Text(String),
    Resource(StringId),
}

impl From<&str> for MessageSource {
    fn from(text: &str) -> Self {
        MessageSource::Text(text.to_string())
    }
}

impl From<String> for MessageSource {
    fn from(text: String) -> Self {
        MessageSource::Text(text)
    }
}

impl From<StringId> for MessageSource {
    fn from(id: StringId) -> Self {
        MessageSource::Resource(id)
    }
}

/// Finalized toast options, produced once by
/// [`Builder::build`](super::Builder::build).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastConfig {
    message: String,
    theme: Theme,
    duration: Duration,
    position: Position,
}

impl ToastConfig {
    pub(crate) fn new(message: String, theme: Theme, duration: Duration, position: Position) -> Self {
        Self {
            message,
            theme,
            duration,
            position,
        }
    }

    /// Resolved text. Empty when no message was ever set.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }
}
