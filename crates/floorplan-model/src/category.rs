// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room categories and the room type name table

use serde::{Deserialize, Serialize};

/// Highest type code counted as dry area
pub const DRY_THRESHOLD: i32 = 3;

/// Lowest type code counted as utility area
pub const UTILITY_THRESHOLD: i32 = 7;

const _: () = assert!(DRY_THRESHOLD < UTILITY_THRESHOLD);

/// Display names for room type codes, indexed by `code - 1`
pub const ROOM_TYPE_NAMES: [&str; 9] = [
    "Hallway", "Bedroom", "Living", "Bathroom", "Kitchen", "Laundry", "Storage", "Garage",
    "Balcony",
];

/// Area category of a room
///
/// Every type code belongs to exactly one category:
/// `code <= DRY_THRESHOLD` is dry, `code >= UTILITY_THRESHOLD` is utility
/// and anything strictly between is wet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomCategory {
    /// Hallways, bedrooms, living rooms
    Dry,
    /// Bathrooms, kitchens, laundries
    Wet,
    /// Storage, garages, balconies
    Utility,
}

impl RoomCategory {
    /// All categories in report column order
    pub const ALL: [RoomCategory; 3] = [
        RoomCategory::Dry,
        RoomCategory::Wet,
        RoomCategory::Utility,
    ];

    /// Determine the category of a room type code
    pub fn from_type_code(code: i32) -> Self {
        if code <= DRY_THRESHOLD {
            RoomCategory::Dry
        } else if code >= UTILITY_THRESHOLD {
            RoomCategory::Utility
        } else {
            RoomCategory::Wet
        }
    }
}

/// Look up the display name of a room type code
///
/// Returns `None` for codes outside `1..=ROOM_TYPE_NAMES.len()`.
pub fn room_type_name(code: i32) -> Option<&'static str> {
    let index = usize::try_from(code).ok()?.checked_sub(1)?;
    ROOM_TYPE_NAMES.get(index).copied()
}
