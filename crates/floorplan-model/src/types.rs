// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for apartment and room data
//!
//! Ownership runs one way: a [`Building`] owns its apartments and each
//! [`Apartment`] owns its rooms.

use crate::area::{derive_apartment_totals, derive_room_area};
use crate::category::{room_type_name, RoomCategory};
use serde::{Deserialize, Serialize};

/// A single room record
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Room type code (1-based index into the room name table)
    pub type_code: i32,
    /// Room number within the apartment
    pub num: i32,
    /// x dimension in metres
    pub xsize: f64,
    /// y dimension in metres
    pub ysize: f64,
    /// Derived area, `xsize * ysize` once the room is added to an apartment
    pub area: f64,
}

impl Room {
    /// Create a new room; the area is derived when it joins an apartment
    pub fn new(type_code: i32, num: i32, xsize: f64, ysize: f64) -> Self {
        Self {
            type_code,
            num,
            xsize,
            ysize,
            area: 0.0,
        }
    }

    /// Create a room with only its type code set
    pub fn with_type(type_code: i32) -> Self {
        Self {
            type_code,
            ..Self::default()
        }
    }

    /// Area category this room contributes to
    pub fn category(&self) -> RoomCategory {
        RoomCategory::from_type_code(self.type_code)
    }

    /// Display name of the room type, if the code is in the name table
    pub fn type_name(&self) -> Option<&'static str> {
        room_type_name(self.type_code)
    }

    /// Whether `other` records another part of the same physical room
    pub fn is_same_room(&self, other: &Room) -> bool {
        self.type_code == other.type_code && self.num == other.num
    }
}

/// An apartment with its rooms and derived area breakdown
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Apartment {
    /// Apartment number
    pub num: i32,
    /// Rooms in input order
    pub rooms: Vec<Room>,
    /// Total dry area
    pub dry_area: f64,
    /// Dry area percentage
    pub dry_percent: f64,
    /// Total wet area
    pub wet_area: f64,
    /// Wet area percentage
    pub wet_percent: f64,
    /// Total utility area
    pub uti_area: f64,
    /// Utility area percentage
    pub uti_percent: f64,
    /// Total area
    pub tot_area: f64,
}

impl Apartment {
    /// Create an empty apartment
    pub fn new(num: i32) -> Self {
        Self {
            num,
            ..Self::default()
        }
    }

    /// Derive the room's area, fold it into the category totals and append it
    pub fn push_room(&mut self, mut room: Room) {
        derive_room_area(self, &mut room);
        self.rooms.push(room);
    }

    /// Derive total area and percentages from the category totals
    pub fn derive_totals(&mut self) {
        derive_apartment_totals(self);
    }

    /// Number of rooms
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Accumulated area of one category
    pub fn category_area(&self, category: RoomCategory) -> f64 {
        match category {
            RoomCategory::Dry => self.dry_area,
            RoomCategory::Wet => self.wet_area,
            RoomCategory::Utility => self.uti_area,
        }
    }

    /// Share of the total area held by one category
    pub fn category_percent(&self, category: RoomCategory) -> f64 {
        match category {
            RoomCategory::Dry => self.dry_percent,
            RoomCategory::Wet => self.wet_percent,
            RoomCategory::Utility => self.uti_percent,
        }
    }

    pub(crate) fn category_area_mut(&mut self, category: RoomCategory) -> &mut f64 {
        match category {
            RoomCategory::Dry => &mut self.dry_area,
            RoomCategory::Wet => &mut self.wet_area,
            RoomCategory::Utility => &mut self.uti_area,
        }
    }
}

/// All apartments read in one run, in input order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Building {
    apartments: Vec<Apartment>,
}

impl Building {
    /// Create an empty building
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an apartment
    pub fn push(&mut self, apartment: Apartment) {
        self.apartments.push(apartment);
    }

    /// Apartments in input order
    pub fn apartments(&self) -> &[Apartment] {
        &self.apartments
    }

    /// Iterate apartments in input order
    pub fn iter(&self) -> std::slice::Iter<'_, Apartment> {
        self.apartments.iter()
    }

    /// Number of apartments
    pub fn len(&self) -> usize {
        self.apartments.len()
    }

    /// Whether no apartment was read
    pub fn is_empty(&self) -> bool {
        self.apartments.is_empty()
    }

    /// Total number of rooms across all apartments
    pub fn room_count(&self) -> usize {
        self.apartments.iter().map(Apartment::room_count).sum()
    }

    /// Take ownership of the apartments
    pub fn into_apartments(self) -> Vec<Apartment> {
        self.apartments
    }
}

impl FromIterator<Apartment> for Building {
    fn from_iter<I: IntoIterator<Item = Apartment>>(iter: I) -> Self {
        Self {
            apartments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Building {
    type Item = &'a Apartment;
    type IntoIter = std::slice::Iter<'a, Apartment>;

    fn into_iter(self) -> Self::IntoIter {
        self.apartments.iter()
    }
}
