// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with no dependency on rendering or I/O.
//!
//! # Modules
//!
//! - [`newtypes`]: validated policy values ([`DisplayCapacity`](newtypes::DisplayCapacity))

pub mod newtypes;

pub use newtypes::{capacity_bounds, DisplayCapacity};
