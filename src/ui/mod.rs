// SPDX-License-Identifier: MPL-2.0
//! iced rendering of built banners.
//!
//! The banner core never depends on this module; it is one possible renderer
//! for views produced by [`DefaultViewBuilder`](crate::banner::DefaultViewBuilder).
//!
//! - [`banner_widget`] - Banner cards and the stacked overlay
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod banner_widget;
pub mod design_tokens;

pub use banner_widget::BannerWidget;
