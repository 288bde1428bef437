// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ordered release of a building after reporting

use crate::types::{Apartment, Building, Room};

/// Counts of the nodes released by [`release`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReleaseReport {
    /// Apartments released
    pub apartments: usize,
    /// Rooms released, across all apartments
    pub rooms: usize,
}

/// Release every room and apartment of a building
///
/// Each apartment's rooms are released before the apartment itself, and
/// apartments are released in input order. The building is consumed, so
/// nothing remains reachable afterwards.
pub fn release(building: Building) -> ReleaseReport {
    let mut report = ReleaseReport::default();

    for apartment in building.into_apartments() {
        report.rooms += release_apartment(apartment);
        report.apartments += 1;
    }

    log::debug!(
        "Released {} apartments and {} rooms",
        report.apartments,
        report.rooms
    );
    report
}

/// Release one apartment, rooms first; returns the number of rooms released
fn release_apartment(mut apartment: Apartment) -> usize {
    let rooms = std::mem::take(&mut apartment.rooms);
    let released = release_rooms(rooms);
    log::trace!("Releasing apartment {} ({} rooms)", apartment.num, released);
    drop(apartment);
    released
}

fn release_rooms(rooms: Vec<Room>) -> usize {
    let released = rooms.len();
    drop(rooms);
    released
}

impl Building {
    /// Release this building; see [`release`]
    pub fn release(self) -> ReleaseReport {
        release(self)
    }
}
