// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floorplan Model - Apartment and room types for area reports
//!
//! This crate provides the data model shared by the floor plan reader and the
//! report renderer. A [`Building`] owns an ordered list of [`Apartment`]s and
//! every apartment owns its ordered list of [`Room`]s.
//!
//! # Architecture
//!
//! - [`Room`] / [`Apartment`] / [`Building`] - owned data, no back-references
//! - [`RoomCategory`] - dry/wet/utility partition of the room type codes
//! - [`area`] - room area derivation and per-apartment totals
//! - [`lifecycle`] - ordered release of a building after reporting
//! - [`FloorPlanParser`] - entry point implemented by parser backends
//!
//! # Example
//!
//! ```
//! use floorplan_model::{Apartment, Room, RoomCategory};
//!
//! let mut apartment = Apartment::new(1);
//! apartment.push_room(Room::new(1, 1, 2.0, 3.0));
//! apartment.derive_totals();
//!
//! assert_eq!(apartment.category_area(RoomCategory::Dry), 6.0);
//! assert_eq!(apartment.category_percent(RoomCategory::Dry), 100.0);
//! ```

pub mod area;
pub mod category;
pub mod error;
pub mod lifecycle;
pub mod traits;
pub mod types;

// Re-export all public types
pub use area::{derive_apartment_totals, derive_room_area};
pub use category::*;
pub use error::*;
pub use lifecycle::{release, ReleaseReport};
pub use traits::*;
pub use types::*;
