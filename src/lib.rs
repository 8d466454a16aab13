// SPDX-License-Identifier: MPL-2.0
//! `banner_overlay` shows, queues and dismisses in-app banner messages.
//!
//! The [`banner`] module holds the message model, the view building contract
//! and the manager state machine. [`ui`] renders built banners with iced, and
//! [`config`] persists the display policy in a `settings.toml` file.

pub mod banner;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;
