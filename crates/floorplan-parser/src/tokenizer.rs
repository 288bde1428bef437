// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Whitespace separated number tokenizer using nom combinators
//!
//! Tokens are plain decimal numbers: leading whitespace is skipped and a
//! number ends at the first character that can't continue it, so `3.5` read
//! as an integer yields `3` and leaves `.5` in the stream.

use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace0, one_of},
    combinator::{map_res, opt, recognize},
    sequence::preceded,
    IResult, Parser,
};

// ============================================================================
// Parsing Primitives
// ============================================================================

/// Recognize an optionally signed integer (`-1`, `+12`, `7`)
fn integer_text(input: &str) -> IResult<&str, &str> {
    recognize((opt(one_of("+-")), digit1)).parse(input)
}

/// Recognize an optionally signed real (`2`, `2.`, `.5`, `1.5e-3`)
fn real_text(input: &str) -> IResult<&str, &str> {
    recognize((
        opt(one_of("+-")),
        alt((
            recognize((digit1, opt((char('.'), opt(digit1))))),
            recognize((char('.'), digit1)),
        )),
        opt((one_of("eE"), opt(one_of("+-")), digit1)),
    ))
    .parse(input)
}

/// Parse an `i32` after skipping whitespace
fn integer(input: &str) -> IResult<&str, i32> {
    preceded(
        multispace0,
        map_res(integer_text, |s: &str| lexical_core::parse::<i32>(s.as_bytes())),
    )
    .parse(input)
}

/// Parse an `f64` after skipping whitespace
fn real(input: &str) -> IResult<&str, f64> {
    preceded(
        multispace0,
        map_res(real_text, |s: &str| lexical_core::parse::<f64>(s.as_bytes())),
    )
    .parse(input)
}

// ============================================================================
// Cursor
// ============================================================================

/// Sequential reader over the number tokens of an input stream
///
/// A token is consumed only when it parses. After a failure the cursor stays
/// in front of the offending token, so every later read fails as well.
#[derive(Clone, Debug)]
pub struct TokenCursor<'a> {
    input: &'a str,
}

impl<'a> TokenCursor<'a> {
    /// Create a cursor at the start of `input`
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Read the next integer token
    pub fn next_int(&mut self) -> Option<i32> {
        self.advance(integer)
    }

    /// Read the next real token
    pub fn next_real(&mut self) -> Option<f64> {
        self.advance(real)
    }

    /// Unconsumed input
    pub fn remaining(&self) -> &'a str {
        self.input
    }

    /// Whether only whitespace is left
    pub fn is_exhausted(&self) -> bool {
        self.input.trim_start().is_empty()
    }

    fn advance<T>(&mut self, parser: fn(&'a str) -> IResult<&'a str, T>) -> Option<T> {
        let (rest, value) = parser(self.input).ok()?;
        self.input = rest;
        Some(value)
    }
}
