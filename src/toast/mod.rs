// SPDX-License-Identifier: MPL-2.0
//! Themeable, positionable toast messages.
//!
//! A toast is configured through a [`Builder`], frozen by [`Builder::build`]
//! and shown exactly once with [`Toast::show`]. Showing resolves the theme into
//! an icon, a text color and a background, computes where the toast sits, and
//! passes the result to a [`DisplayHost`].
//!
//! # Components
//!
//! - [`options`] - `Theme`, `Duration`, `Position`, message sources and `ToastConfig`
//! - [`builder`] - The fluent `Builder`
//! - [`resources`] - `ResourceResolver` trait, stock theme visuals and `Resources`
//! - [`renderer`] - `Toast::show` and the `DisplayHost` trait
//! - [`view`] - `MessageView`, the text/icon element a toast displays
//! - [`overlay`] - `Overlay`, a `DisplayHost` for Iced applications
//!
//! # Usage
//!
//! ```ignore
//! use nice_toast::toast::{Builder, Overlay, Resources, Theme};
//!
//! let resources = Resources::default();
//! let mut overlay = Overlay::default();
//!
//! Builder::new(&resources, "Saved")
//!     .with_theme(Theme::Success)
//!     .build()?
//!     .show(&mut overlay)?;
//!
//! // In your view function
//! if let Some(toast) = overlay.view() {
//!     layers.push(toast);
//! }
//! ```

pub mod builder;
pub mod options;
pub mod overlay;
pub mod renderer;
pub mod resources;
pub mod view;

pub use builder::Builder;
pub use options::{Duration, MessageSource, Position, StringId, Theme, ToastConfig};
pub use overlay::{Overlay, Timings};
pub use renderer::{y_offset_for, DisplayHost, DisplayRequest, Gravity, Toast};
pub use resources::{
    theme_visuals, BackgroundStyle, Dimension, Icon, ResourceResolver, Resources, ThemeVisuals,
};
pub use view::MessageView;
