// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixed-width summary table

use floorplan_model::{Apartment, Building, Result, RoomCategory};
use std::io::Write;

/// Table divider line
pub const DIVIDER: &str = "+-------+----------------+----------------+----------------+";

/// Table header line
pub const HEADER: &str = "| Apart |    Dry areas   |    Wet areas   |  Utility areas |";

/// Write the summary table, one row per apartment
pub fn write_summary<W: Write + ?Sized>(out: &mut W, building: &Building) -> Result<()> {
    writeln!(out, "{DIVIDER}")?;
    writeln!(out, "{HEADER}")?;
    writeln!(out, "{DIVIDER}")?;
    for apartment in building {
        write_row(out, apartment)?;
    }
    writeln!(out, "{DIVIDER}")?;
    Ok(())
}

/// Write one table row: number, then area and percentage per category
fn write_row<W: Write + ?Sized>(out: &mut W, apartment: &Apartment) -> Result<()> {
    write!(out, "|  {:3}  |", apartment.num)?;
    for category in RoomCategory::ALL {
        write!(
            out,
            " {:6.2} {:5.1}%  |",
            apartment.category_area(category),
            apartment.category_percent(category)
        )?;
    }
    writeln!(out)?;
    Ok(())
}
