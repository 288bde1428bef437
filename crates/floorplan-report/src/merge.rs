// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Continuation merge for the detail listing
//!
//! A room split over consecutive records (same type code and number) is
//! listed once per record, but only the last record shows an area: the sum
//! of all parts. Category totals are not affected.

use floorplan_model::Room;

/// One listed room with the area to display
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomLine<'a> {
    /// The room record
    pub room: &'a Room,
    /// Displayed area, `None` when the next record continues this room
    pub area: Option<f64>,
}

impl RoomLine<'_> {
    /// Whether the area of this record is shown on a later line
    pub fn is_continuation(&self) -> bool {
        self.area.is_none()
    }
}

/// Build the display lines for a room list, carrying split room areas forward
pub fn merge_continuations(rooms: &[Room]) -> Vec<RoomLine<'_>> {
    let mut lines = Vec::with_capacity(rooms.len());
    let mut carried: Option<f64> = None;
    let mut iter = rooms.iter().peekable();

    while let Some(room) = iter.next() {
        let area = carried.take().map_or(room.area, |c| room.area + c);
        let continues = iter.peek().is_some_and(|next| room.is_same_room(next));

        if continues {
            carried = Some(area);
            lines.push(RoomLine { room, area: None });
        } else {
            lines.push(RoomLine {
                room,
                area: Some(area),
            });
        }
    }

    lines
}
