// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each one
//! renders from a `ViewContext` and emits its own `Message`, which the app maps
//! into its top-level message.
//!
//! - [`navbar`] - Fixed navigation bar with the mobile menu
//! - [`sections`] - Hero, collections, features, about, and contact sections
//! - [`notifications`] - Toast notification system for user feedback
//! - [`reveal`] - Reveal-on-scroll and lazy image loading
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod reveal;
pub mod sections;
