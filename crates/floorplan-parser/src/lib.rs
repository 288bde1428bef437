// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floorplan Parser - Reader for apartment and room records
//!
//! This crate reads the whitespace separated apartment/room record stream
//! into a [`Building`]. It implements the [`FloorPlanParser`] trait defined in
//! `floorplan-model`.
//!
//! # Features
//!
//! - **Decimal number tokens** recognized with `nom` combinators
//! - **Fast number conversion** using `lexical-core`
//! - **Record limits** on apartments and rooms per apartment
//!
//! # Example
//!
//! ```
//! use floorplan_model::FloorPlanParser;
//! use floorplan_parser::PlanParser;
//!
//! let building = PlanParser::new().parse("1\n1 1 2.0 3.0\n-1\n");
//! assert_eq!(building.len(), 1);
//! assert_eq!(building.apartments()[0].tot_area, 6.0);
//! ```

mod reader;
mod tokenizer;

pub use reader::{read_building, ReaderLimits, END_OF_ROOMS, MAX_APARTMENTS, MAX_ROOMS};
pub use tokenizer::TokenCursor;

use floorplan_model::{Building, FloorPlanParser};

/// Apartment record parser implementing `FloorPlanParser`
#[derive(Clone, Copy, Debug, Default)]
pub struct PlanParser {
    /// Record count limits
    pub limits: ReaderLimits,
}

impl PlanParser {
    /// Create a new parser with the default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of apartments
    pub fn with_max_apartments(mut self, max_apartments: usize) -> Self {
        self.limits.max_apartments = max_apartments;
        self
    }

    /// Set the maximum number of rooms per apartment
    pub fn with_max_rooms(mut self, max_rooms: usize) -> Self {
        self.limits.max_rooms = max_rooms;
        self
    }
}

impl FloorPlanParser for PlanParser {
    fn parse(&self, content: &str) -> Building {
        let mut cursor = TokenCursor::new(content);
        let building = read_building(&mut cursor, self.limits);
        log::debug!(
            "Parsed {} apartments with {} rooms",
            building.len(),
            building.room_count()
        );
        building
    }
}

/// Quick parse function using the default limits
pub fn parse(content: &str) -> Building {
    PlanParser::new().parse(content)
}
