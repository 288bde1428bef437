// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core traits for floor plan parsing

use crate::{Building, Result};
use std::io::Read;

/// Main parsing interface - entry point for reading apartment records
///
/// Implementations turn a whitespace separated token stream into a
/// [`Building`]. Malformed or truncated input is never an error: the
/// apartment and room sequences simply end where parsing stops.
///
/// # Example
///
/// ```ignore
/// use floorplan_model::FloorPlanParser;
///
/// let parser: Box<dyn FloorPlanParser> = get_parser();
/// let building = parser.parse("1\n1 1 2.0 3.0\n-1\n");
/// assert_eq!(building.len(), 1);
/// ```
pub trait FloorPlanParser: Send + Sync {
    /// Parse apartment records from a string
    ///
    /// # Arguments
    /// * `content` - The whole input stream
    ///
    /// # Returns
    /// The apartments read, in input order
    fn parse(&self, content: &str) -> Building;

    /// Read the whole stream and parse it
    ///
    /// # Returns
    /// The apartments read, or an `Error::Io` if the stream can't be read
    fn parse_reader(&self, reader: &mut dyn Read) -> Result<Building> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(self.parse(&content))
    }
}
