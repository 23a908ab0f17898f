// SPDX-License-Identifier: MPL-2.0
//! Resource resolution: theme visuals, string resources and dimensions.
//!
//! [`ResourceResolver`] is the context a [`Builder`](super::Builder) is created
//! with. [`Resources`] is the stock implementation, backed by Fluent
//! translations and the `[toast]` config section.

use super::options::{StringId, Theme};
use crate::config::{Config, ToastSettings};
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette};
use iced::Color;

/// Icon drawn before the toast text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Success,
    Warning,
    Error,
}

/// Fill and outline of the toast view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundStyle {
    pub fill: Color,
    pub border: Color,
    pub border_width: f32,
}

impl BackgroundStyle {
    /// No fill, no outline. A freshly created view starts with this.
    pub const NONE: BackgroundStyle = BackgroundStyle {
        fill: Color::TRANSPARENT,
        border: Color::TRANSPARENT,
        border_width: 0.0,
    };
}

/// Everything a theme decides about the look of a toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeVisuals {
    pub icon: Option<Icon>,
    pub text_color: Color,
    pub background: BackgroundStyle,
}

/// Named dimensions used while laying out a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Distance between a top/bottom toast and the window edge.
    YOffset,
    /// Space between the icon and the text.
    IconPadding,
}

/// Returns the stock visuals for `theme`.
#[must_use]
pub fn theme_visuals(theme: Theme) -> ThemeVisuals {
    match theme {
        Theme::Default => ThemeVisuals {
            icon: None,
            text_color: palette::WHITE,
            background: BackgroundStyle {
                fill: Color {
                    a: opacity::SURFACE,
                    ..palette::GRAY_900
                },
                border: palette::GRAY_700,
                border_width: border::WIDTH_SM,
            },
        },
        Theme::Success => accented(Icon::Success, palette::SUCCESS_500, palette::SUCCESS_900),
        Theme::Warning => accented(Icon::Warning, palette::WARNING_500, palette::WARNING_900),
        Theme::Error => accented(Icon::Error, palette::ERROR_500, palette::ERROR_900),
    }
}

fn accented(icon: Icon, accent: Color, fill: Color) -> ThemeVisuals {
    ThemeVisuals {
        icon: Some(icon),
        text_color: accent,
        background: BackgroundStyle {
            fill: Color {
                a: opacity::SURFACE,
                ..fill
            },
            border: accent,
            border_width: border::WIDTH_MD,
        },
    }
}

/// Context consulted while building and showing a toast.
pub trait ResourceResolver {
    /// Visuals for `theme`. Must be total over [`Theme`].
    fn visuals(&self, theme: Theme) -> ThemeVisuals {
        theme_visuals(theme)
    }

    /// Text of a string resource.
    fn string(&self, id: StringId) -> Result<String>;

    /// Pixel size of a named dimension.
    fn dimension(&self, dimension: Dimension) -> f32;
}

/// Fluent-backed resolver using the `[toast]` config section for dimensions.
#[derive(Debug)]
pub struct Resources {
    i18n: I18n,
    settings: ToastSettings,
}

impl Default for Resources {
    fn default() -> Self {
        Self::new(I18n::default(), ToastSettings::default())
    }
}

impl Resources {
    pub fn new(i18n: I18n, settings: ToastSettings) -> Self {
        Self { i18n, settings }
    }

    /// Builds resources from a loaded config and an optional CLI locale.
    pub fn from_config(cli_lang: Option<String>, config: &Config) -> Self {
        Self::new(I18n::new(cli_lang, config), config.toast.clone())
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }
}

impl ResourceResolver for Resources {
    fn string(&self, id: StringId) -> Result<String> {
        self.i18n
            .get(id.key())
            .ok_or_else(|| Error::MissingResource(id.key().to_string()))
    }

    fn dimension(&self, dimension: Dimension) -> f32 {
        match dimension {
            Dimension::YOffset => self.settings.y_offset(),
            Dimension::IconPadding => self.settings.icon_padding(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_Y_OFFSET;

    #[test]
    fn default_theme_has_no_icon_and_neutral_colors() {
        let visuals = theme_visuals(Theme::Default);
        assert!(visuals.icon.is_none());
        assert_eq!(visuals.text_color, palette::WHITE);
        assert_eq!(visuals.background.border, palette::GRAY_700);
    }

    #[test]
    fn accented_themes_carry_their_icon() {
        assert_eq!(theme_visuals(Theme::Success).icon, Some(Icon::Success));
        assert_eq!(theme_visuals(Theme::Warning).icon, Some(Icon::Warning));
        assert_eq!(theme_visuals(Theme::Error).icon, Some(Icon::Error));
    }

    #[test]
    fn no_two_themes_share_all_visuals() {
        for (i, a) in Theme::ALL.iter().enumerate() {
            for b in &Theme::ALL[i + 1..] {
                assert_ne!(theme_visuals(*a), theme_visuals(*b), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn resources_resolve_known_strings() {
        let resources = Resources::from_config(Some("en-US".to_string()), &Config::default());
        let text = resources
            .string(StringId::new("toast-success-message"))
            .expect("string should exist");
        assert_eq!(text, "Everything went fine!");
    }

    #[test]
    fn resources_report_missing_strings() {
        let resources = Resources::default();
        let err = resources.string(StringId::new("no-such-key")).unwrap_err();
        assert_eq!(err, Error::MissingResource("no-such-key".to_string()));
    }

    #[test]
    fn dimensions_come_from_settings() {
        let settings = ToastSettings {
            icon_padding: Some(12.0),
            ..ToastSettings::default()
        };
        let resources = Resources::new(I18n::default(), settings);
        assert_eq!(resources.dimension(Dimension::YOffset), DEFAULT_Y_OFFSET);
        assert_eq!(resources.dimension(Dimension::IconPadding), 12.0);
    }
}
