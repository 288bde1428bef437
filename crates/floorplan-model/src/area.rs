// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Area calculation for rooms and apartments

use crate::types::{Apartment, Room};

/// Derive a room's area and add it to the apartment's category total
///
/// The room is not appended to the apartment; see [`Apartment::push_room`].
pub fn derive_room_area(apartment: &mut Apartment, room: &mut Room) {
    room.area = room.xsize * room.ysize;
    *apartment.category_area_mut(room.category()) += room.area;
}

/// Derive total area and category percentages
///
/// The total is accumulated onto `tot_area`. Percentages are only written
/// when the total is non-zero, otherwise they keep their zero default.
pub fn derive_apartment_totals(apartment: &mut Apartment) {
    apartment.tot_area += apartment.dry_area + apartment.wet_area + apartment.uti_area;
    if apartment.tot_area != 0.0 {
        apartment.dry_percent = apartment.dry_area * 100.0 / apartment.tot_area;
        apartment.wet_percent = apartment.wet_area * 100.0 / apartment.tot_area;
        apartment.uti_percent = apartment.uti_area * 100.0 / apartment.tot_area;
    }
}
