// SPDX-License-Identifier: MPL-2.0
//! Localized string resources.
//!
//! Toast messages given as a [`StringId`](crate::toast::StringId) are looked up
//! here. Translations are Fluent `.ftl` files embedded at compile time.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Fallback to `en-US` when no preferred locale is available

pub mod fluent;
