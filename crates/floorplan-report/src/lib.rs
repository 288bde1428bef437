// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floorplan Report - Apartment area listing and summary table
//!
//! Renders a parsed [`Building`] in two passes:
//!
//! 1. [`write_details`] - every apartment with its rooms and total area,
//!    with split rooms merged for display by [`merge_continuations`]
//! 2. [`write_summary`] - one table row per apartment with the dry, wet and
//!    utility areas and their percentages
//!
//! Rendering never modifies the building.
//!
//! # Example
//!
//! ```
//! use floorplan_report::render_report;
//!
//! let building = floorplan_parser::parse("1\n1 1 2.0 3.0\n-1\n");
//! let report = render_report(&building).unwrap();
//! assert!(report.starts_with("Apartment 1\n"));
//! ```

pub mod detail;
pub mod merge;
pub mod summary;

pub use detail::{write_apartment, write_details};
pub use merge::{merge_continuations, RoomLine};
pub use summary::{write_summary, DIVIDER, HEADER};

use floorplan_model::{Building, Error, Result};
use std::io::Write;

/// Write the detail listing followed by the summary table
pub fn write_report<W: Write + ?Sized>(out: &mut W, building: &Building) -> Result<()> {
    write_details(out, building)?;
    write_summary(out, building)?;
    Ok(())
}

/// Render the full report into a string
pub fn render_report(building: &Building) -> Result<String> {
    let mut out = Vec::new();
    write_report(&mut out, building)?;
    String::from_utf8(out).map_err(|e| Error::other(format!("Report is not UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplan_model::FloorPlanParser;
    use floorplan_parser::PlanParser;

    const TWO_APARTMENTS: &str = "\
101
1 1 3.5 4.0
2 2 3.0 3.2
2 2 1.0 2.0
4 3 2.0 1.5
8 4 6.0 3.0
-1
102
5 1 2.5 2.0
9 2 1.2 3.0
-1
";

    const TWO_APARTMENTS_REPORT: &str = "\
Apartment 101
-------------
    Hallway  1  3.50  4.00  14.00
    Bedroom  2  3.00  3.20   ---
    Bedroom  2  1.00  2.00  11.60
    Bathroom 3  2.00  1.50   3.00
    Garage   4  6.00  3.00  18.00
    Total area              46.60 metres^2

Apartment 102
-------------
    Kitchen  1  2.50  2.00   5.00
    Balcony  2  1.20  3.00   3.60
    Total area               8.60 metres^2

+-------+----------------+----------------+----------------+
| Apart |    Dry areas   |    Wet areas   |  Utility areas |
+-------+----------------+----------------+----------------+
|  101  |  25.60  54.9%  |   3.00   6.4%  |  18.00  38.6%  |
|  102  |   0.00   0.0%  |   5.00  58.1%  |   3.60  41.9%  |
+-------+----------------+----------------+----------------+
";

    #[test]
    fn test_end_to_end_single_room() {
        let building = PlanParser::new().parse("1\n1 1 2.0 3.0\n-1\n");
        let report = render_report(&building).unwrap();
        assert_eq!(
            report,
            "Apartment 1\n\
             -------------\n    \
             Hallway  1  2.00  3.00   6.00\n    \
             Total area               6.00 metres^2\n\
             \n\
             +-------+----------------+----------------+----------------+\n\
             | Apart |    Dry areas   |    Wet areas   |  Utility areas |\n\
             +-------+----------------+----------------+----------------+\n\
             |    1  |   6.00 100.0%  |   0.00   0.0%  |   0.00   0.0%  |\n\
             +-------+----------------+----------------+----------------+\n"
        );
    }

    #[test]
    fn test_end_to_end_two_apartments() {
        let building = PlanParser::new().parse(TWO_APARTMENTS);
        assert_eq!(render_report(&building).unwrap(), TWO_APARTMENTS_REPORT);
    }

    #[test]
    fn test_merge_does_not_change_totals() {
        let building = PlanParser::new().parse(TWO_APARTMENTS);
        let before = building.clone();
        render_report(&building).unwrap();

        assert_eq!(building, before);
        let bedroom_parts: Vec<f64> = building.apartments()[0]
            .rooms
            .iter()
            .filter(|r| r.type_code == 2)
            .map(|r| r.area)
            .collect();
        assert_eq!(bedroom_parts, vec![3.0 * 3.2, 2.0]);
    }

    #[test]
    fn test_rendered_apartment_count_matches_input() {
        let input: String = (1..=5).map(|n| format!("{n}\n4 1 1.0 2.0\n-1\n")).collect();
        let building = PlanParser::new().parse(&input);
        let report = render_report(&building).unwrap();

        assert_eq!(report.matches("Apartment ").count(), 5);
        let rows = report.lines().filter(|l| l.starts_with("|  ")).count();
        assert_eq!(rows, 5);
    }

    #[test]
    fn test_empty_input_renders_empty_table() {
        let building = PlanParser::new().parse("");
        let report = render_report(&building).unwrap();
        assert_eq!(report, format!("{DIVIDER}\n{HEADER}\n{DIVIDER}\n{DIVIDER}\n"));
    }

    #[test]
    fn test_invalid_category_stops_report() {
        let building = PlanParser::new().parse("1\n12 1 1.0 1.0\n-1\n");
        let err = render_report(&building).unwrap_err();
        assert_eq!(err.to_string(), "Invalid category 12 for room 1 in apartment 1");
    }
}
