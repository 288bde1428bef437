// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-apartment detail listing

use crate::merge::merge_continuations;
use floorplan_model::{Apartment, Building, Error, Result};
use std::io::Write;

/// Write the detail listing of every apartment
pub fn write_details<W: Write + ?Sized>(out: &mut W, building: &Building) -> Result<()> {
    for apartment in building {
        write_apartment(out, apartment)?;
    }
    Ok(())
}

/// Write one apartment: header, one line per room record, total area
///
/// Fails with [`Error::InvalidCategory`] on a room type code that has no
/// name; lines before the offending room are already written.
pub fn write_apartment<W: Write + ?Sized>(out: &mut W, apartment: &Apartment) -> Result<()> {
    writeln!(out, "Apartment {}\n-------------", apartment.num)?;

    for line in merge_continuations(&apartment.rooms) {
        let room = line.room;
        let name = room
            .type_name()
            .ok_or_else(|| Error::invalid_category(apartment.num, room.num, room.type_code))?;

        write!(
            out,
            "    {:<8} {:1} {:5.2} {:5.2} ",
            name, room.num, room.xsize, room.ysize
        )?;
        match line.area {
            Some(area) => writeln!(out, "{:6.2}", area)?,
            None => writeln!(out, "  ---")?,
        }
    }

    writeln!(out, "    Total area {:18.2} metres^2\n", apartment.tot_area)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplan_model::Room;

    fn render(apartment: &Apartment) -> String {
        let mut out = Vec::new();
        write_apartment(&mut out, apartment).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn apartment(num: i32, rooms: &[(i32, i32, f64, f64)]) -> Apartment {
        let mut apartment = Apartment::new(num);
        for &(type_code, room_num, x, y) in rooms {
            apartment.push_room(Room::new(type_code, room_num, x, y));
        }
        apartment.derive_totals();
        apartment
    }

    #[test]
    fn test_single_room() {
        let text = render(&apartment(1, &[(1, 1, 2.0, 3.0)]));
        assert_eq!(
            text,
            "Apartment 1\n\
             -------------\n    \
             Hallway  1  2.00  3.00   6.00\n    \
             Total area               6.00 metres^2\n\n"
        );
    }

    #[test]
    fn test_continuation_placeholder() {
        let text = render(&apartment(3, &[(1, 5, 2.0, 3.0), (1, 5, 1.0, 1.0)]));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "    Hallway  5  2.00  3.00   ---");
        assert_eq!(lines[3], "    Hallway  5  1.00  1.00   7.00");
        // The total still counts both records
        assert_eq!(lines[4], "    Total area               7.00 metres^2");
    }

    #[test]
    fn test_no_rooms() {
        let text = render(&apartment(44, &[]));
        assert_eq!(
            text,
            "Apartment 44\n-------------\n    Total area               0.00 metres^2\n\n"
        );
    }

    #[test]
    fn test_name_column_padding() {
        let text = render(&apartment(2, &[(4, 1, 1.5, 2.0), (2, 2, 10.25, 3.0)]));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "    Bathroom 1  1.50  2.00   3.00");
        assert_eq!(lines[3], "    Bedroom  2 10.25  3.00  30.75");
    }

    #[test]
    fn test_room_number_zero_is_listed() {
        let text = render(&apartment(6, &[(2, 0, 1.0, 1.0), (1, 4, 2.0, 1.0)]));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "    Bedroom  0  1.00  1.00   1.00");
        assert_eq!(lines[3], "    Hallway  4  2.00  1.00   2.00");
        assert_eq!(lines[4], "    Total area               3.00 metres^2");
    }

    #[test]
    fn test_invalid_category() {
        let apartment = apartment(9, &[(2, 1, 1.0, 1.0), (10, 2, 1.0, 1.0)]);
        let mut out = Vec::new();
        let err = write_apartment(&mut out, &apartment).unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidCategory {
                apartment: 9,
                room: 2,
                code: 10
            }
        ));
        let written = String::from_utf8(out).unwrap();
        assert!(written.ends_with("Bedroom  1  1.00  1.00   1.00\n"));
    }

    #[test]
    fn test_zero_type_code_is_invalid() {
        let apartment = apartment(1, &[(0, 1, 1.0, 1.0)]);
        let err = write_apartment(&mut Vec::new(), &apartment).unwrap_err();
        assert!(matches!(err, Error::InvalidCategory { code: 0, .. }));
    }
}
