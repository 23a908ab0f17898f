// SPDX-License-Identifier: MPL-2.0
//! Fluent construction of a [`Toast`].

use super::options::{Duration, MessageSource, Position, Theme, ToastConfig};
use super::renderer::Toast;
use super::resources::ResourceResolver;
use crate::error::Result;

/// Accumulates toast options. Consumed by [`Builder::build`].
#[derive(Debug)]
pub struct Builder<'a, C: ResourceResolver + ?Sized> {
    context: &'a C,
    message: Option<MessageSource>,
    theme: Theme,
    duration: Duration,
    position: Position,
}

impl<'a, C: ResourceResolver + ?Sized> Builder<'a, C> {
    /// Starts a toast showing `message`, with the default theme, a short
    /// duration, anchored at the bottom.
    pub fn new(context: &'a C, message: impl Into<MessageSource>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::empty(context)
        }
    }

    /// Starts a toast without a message.
    pub fn empty(context: &'a C) -> Self {
        Self {
            context,
            message: None,
            theme: Theme::default(),
            duration: Duration::default(),
            position: Position::default(),
        }
    }

    /// Replaces the message. The last call wins.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<MessageSource>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Resolves the message and freezes the options.
    ///
    /// Fails when the message is a string resource the context does not know.
    pub fn build(self) -> Result<Toast<'a, C>> {
        let message = match self.message {
            Some(MessageSource::Text(text)) => text,
            Some(MessageSource::Resource(id)) => self.context.string(id)?,
            None => String::new(),
        };

        let config = ToastConfig::new(message, self.theme, self.duration, self.position);
        Ok(Toast::new(self.context, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::toast::options::StringId;
    use crate::toast::resources::Dimension;

    #[derive(Debug)]
    struct Strings;

    impl ResourceResolver for Strings {
        fn string(&self, id: StringId) -> Result<String> {
            match id.key() {
                "greeting" => Ok("Hello".to_string()),
                other => Err(Error::MissingResource(other.to_string())),
            }
        }

        fn dimension(&self, _dimension: Dimension) -> f32 {
            0.0
        }
    }

    #[test]
    fn build_without_options_uses_defaults() {
        let toast = Builder::new(&Strings, "Hi").build().expect("build");
        let config = toast.config();
        assert_eq!(config.message(), "Hi");
        assert_eq!(config.theme(), Theme::Default);
        assert_eq!(config.duration(), Duration::Short);
        assert_eq!(config.position(), Position::Bottom);
    }

    #[test]
    fn resource_message_is_resolved_at_build() {
        let toast = Builder::new(&Strings, StringId::new("greeting"))
            .build()
            .expect("build");
        assert_eq!(toast.config().message(), "Hello");
    }

    #[test]
    fn last_message_wins_literal_after_resource() {
        let toast = Builder::new(&Strings, StringId::new("greeting"))
            .with_message("Literal")
            .build()
            .expect("build");
        assert_eq!(toast.config().message(), "Literal");
    }

    #[test]
    fn last_message_wins_resource_after_literal() {
        let toast = Builder::new(&Strings, "Literal")
            .with_message(StringId::new("greeting"))
            .build()
            .expect("build");
        assert_eq!(toast.config().message(), "Hello");
    }

    #[test]
    fn empty_builder_has_empty_message() {
        let toast = Builder::empty(&Strings).build().expect("build");
        assert!(toast.config().message().is_empty());
    }

    #[test]
    fn setters_overwrite_options() {
        let toast = Builder::new(&Strings, "Oops")
            .with_theme(Theme::Warning)
            .with_theme(Theme::Error)
            .with_duration(Duration::Long)
            .with_position(Position::Top)
            .build()
            .expect("build");
        let config = toast.config();
        assert_eq!(config.theme(), Theme::Error);
        assert_eq!(config.duration(), Duration::Long);
        assert_eq!(config.position(), Position::Top);
    }

    #[test]
    fn missing_resource_propagates() {
        let err = Builder::new(&Strings, StringId::new("unknown"))
            .build()
            .unwrap_err();
        assert_eq!(err, Error::MissingResource("unknown".to_string()));
    }
}
