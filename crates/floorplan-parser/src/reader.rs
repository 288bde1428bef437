// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Apartment and room record reader
//!
//! Input layout:
//!
//! ```text
//! <apartment-number>
//!   <room-type> <room-number> <x> <y>
//!   ...
//!   -1
//! <apartment-number>
//!   ...
//! ```

use crate::tokenizer::TokenCursor;
use floorplan_model::{Apartment, Building, Room};

/// Room type value that ends an apartment's room list
pub const END_OF_ROOMS: i32 = -1;

/// Default maximum number of apartments
pub const MAX_APARTMENTS: usize = 100;

/// Default maximum number of rooms per apartment
pub const MAX_ROOMS: usize = 100;

/// Record count limits applied while reading
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReaderLimits {
    /// Maximum number of apartments read
    pub max_apartments: usize,
    /// Maximum number of rooms read per apartment
    pub max_rooms: usize,
}

impl Default for ReaderLimits {
    fn default() -> Self {
        Self {
            max_apartments: MAX_APARTMENTS,
            max_rooms: MAX_ROOMS,
        }
    }
}

/// Read apartments until the limit, a parse failure or apartment number 0
pub fn read_building(cursor: &mut TokenCursor<'_>, limits: ReaderLimits) -> Building {
    let mut building = Building::new();

    loop {
        if building.len() >= limits.max_apartments {
            if !cursor.is_exhausted() {
                log::warn!(
                    "Apartment limit of {} reached, ignoring remaining input",
                    limits.max_apartments
                );
            }
            break;
        }

        let Some(num) = cursor.next_int() else {
            log::debug!("No further apartment number after {} apartments", building.len());
            break;
        };

        if num == 0 {
            log::debug!("Apartment number 0 ends the apartment list");
            break;
        }

        let mut apartment = Apartment::new(num);
        read_rooms(cursor, &mut apartment, limits.max_rooms);
        apartment.derive_totals();
        log::debug!(
            "Read apartment {} with {} rooms, total area {:.2}",
            apartment.num,
            apartment.room_count(),
            apartment.tot_area
        );
        building.push(apartment);
    }

    building
}

/// Read rooms into `apartment` until the limit, a parse failure or the sentinel
fn read_rooms(cursor: &mut TokenCursor<'_>, apartment: &mut Apartment, max_rooms: usize) {
    loop {
        if apartment.room_count() >= max_rooms {
            if !cursor.is_exhausted() {
                log::warn!(
                    "Room limit of {} reached in apartment {}",
                    max_rooms,
                    apartment.num
                );
            }
            return;
        }

        let Some(type_code) = cursor.next_int() else {
            log::debug!("Room list of apartment {} ends without sentinel", apartment.num);
            return;
        };

        if type_code == END_OF_ROOMS {
            return;
        }

        let room = read_room_fields(cursor, type_code);
        log::trace!(
            "Apartment {}: room type {} number {} ({} x {})",
            apartment.num,
            room.type_code,
            room.num,
            room.xsize,
            room.ysize
        );
        apartment.push_room(room);
    }
}

/// Read number and dimensions; fields from the first failing one on stay 0
fn read_room_fields(cursor: &mut TokenCursor<'_>, type_code: i32) -> Room {
    let mut room = Room::with_type(type_code);

    let Some(num) = cursor.next_int() else {
        return room;
    };
    room.num = num;

    let Some(xsize) = cursor.next_real() else {
        return room;
    };
    room.xsize = xsize;

    if let Some(ysize) = cursor.next_real() {
        room.ysize = ysize;
    }
    room
}
