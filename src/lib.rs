// SPDX-License-Identifier: MPL-2.0
//! `nice_toast` shows short, themed notifications in an Iced window.
//!
//! A toast is described with [`toast::Builder`] (message, theme, duration and
//! position), resolved against a [`toast::ResourceResolver`] for its icon,
//! colors and offsets, and handed to a [`toast::DisplayHost`]. The bundled
//! [`toast::Overlay`] host draws it above the window content; the demo in
//! [`app`] exercises every option.

#![doc(html_root_url = "https://docs.rs/nice_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod toast;
pub mod ui;
