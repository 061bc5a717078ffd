// SPDX-License-Identifier: MPL-2.0
//! `storefront_fx` is a clothing storefront page built with the Iced GUI toolkit.
//!
//! Beyond the page itself it provides two reusable effects: transient toast
//! notifications with a fixed lifecycle, and one-shot reveal-on-scroll for page
//! blocks driven by viewport intersection.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod page;
pub mod scheduler;
pub mod ui;
