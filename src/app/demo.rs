// SPDX-License-Identifier: MPL-2.0
//! The toasts offered by the demo screen, one per button.

use crate::error::Result;
use crate::toast::{
    Builder, DisplayHost, Duration, Position, ResourceResolver, StringId, Theme,
};

/// A demo button and the toast it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    Simple,
    Success,
    Warning,
    Error,
    Top,
    Middle,
    LongDuration,
}

impl Demo {
    pub const ALL: [Demo; 7] = [
        Demo::Simple,
        Demo::Success,
        Demo::Warning,
        Demo::Error,
        Demo::Top,
        Demo::Middle,
        Demo::LongDuration,
    ];

    /// i18n key of the button label.
    pub fn label_key(self) -> &'static str {
        match self {
            Demo::Simple => "demo-button-simple",
            Demo::Success => "demo-button-success",
            Demo::Warning => "demo-button-warning",
            Demo::Error => "demo-button-error",
            Demo::Top => "demo-button-top",
            Demo::Middle => "demo-button-middle",
            Demo::LongDuration => "demo-button-long-duration",
        }
    }

    /// String resource shown by the toast.
    pub fn message_id(self) -> StringId {
        match self {
            Demo::Simple => StringId::new("toast-simple-message"),
            Demo::Success => StringId::new("toast-success-message"),
            Demo::Warning => StringId::new("toast-warning-message"),
            Demo::Error => StringId::new("toast-error-message"),
            Demo::Top => StringId::new("toast-top-message"),
            Demo::Middle => StringId::new("toast-middle-message"),
            Demo::LongDuration => StringId::new("toast-long-duration-message"),
        }
    }

    /// Builds this demo's toast and shows it on `host`.
    pub fn show<R, H>(self, resources: &R, host: &mut H) -> Result<()>
    where
        R: ResourceResolver + ?Sized,
        H: DisplayHost + ?Sized,
    {
        let builder = Builder::empty(resources).with_message(self.message_id());
        let builder = match self {
            Demo::Simple => builder,
            Demo::Success => builder.with_theme(Theme::Success),
            Demo::Warning => builder.with_theme(Theme::Warning),
            Demo::Error => builder.with_theme(Theme::Error),
            Demo::Top => builder.with_position(Position::Top),
            Demo::Middle => builder.with_position(Position::Center),
            Demo::LongDuration => builder.with_duration(Duration::Long),
        };
        builder.build()?.show(host)
    }
}
