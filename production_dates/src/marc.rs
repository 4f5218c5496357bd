// Copyright 2024-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoding the date block of a MARC21 `008` control field.
//!
//! Positions 06-14 of the field hold a one-character date type code followed by two
//! four-character date slots. The code says how to read the slots.

use nom::{
    bytes::complete::take,
    character::complete::anychar,
    combinator::{all_consuming, rest},
    sequence::{preceded, terminated, tuple},
    Finish, IResult,
};

use crate::{
    era::Era,
    fragment::{sanitize_year, Position, OPEN_BOUND},
    years::DateRange,
};

/// Offset of the date type code in a full `008` field.
const DATE_TYPE_OFFSET: usize = 6;

/// The date type code of an `008` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateTypeCode {
    /// `b`: no dates given, B.C. date involved
    Bce,
    /// `e`: detailed date, with month and day after the year
    Detailed,
    /// `i`: inclusive dates of a collection
    Inclusive,
    /// `k`: range of years of bulk of a collection
    Range,
    /// `m`: multiple dates
    Multiple,
    /// `n`: dates unknown
    Unknown,
    /// `p`: date of distribution differs from date of production
    Distribution,
    /// `q`: questionable date
    Questionable,
    /// `r`: reprint or reissue, with the original date in the first slot
    Reprint,
    /// `s`: single known or probable date
    Single,
    /// Anything else, including fill characters
    Unrecognized(char),
}

impl From<char> for DateTypeCode {
    fn from(code: char) -> Self {
        match code {
            'b' => DateTypeCode::Bce,
            'e' => DateTypeCode::Detailed,
            'i' => DateTypeCode::Inclusive,
            'k' => DateTypeCode::Range,
            'm' => DateTypeCode::Multiple,
            'n' => DateTypeCode::Unknown,
            'p' => DateTypeCode::Distribution,
            'q' => DateTypeCode::Questionable,
            'r' => DateTypeCode::Reprint,
            's' => DateTypeCode::Single,
            other => DateTypeCode::Unrecognized(other),
        }
    }
}

impl DateTypeCode {
    /// Read the two date slots the way this code calls for.
    ///
    /// `end_era` only matters for [`DateTypeCode::Bce`], where both bounds are BCE unless
    /// a structured field says the second one is CE.
    pub fn decode(self, date1: &str, date2: &str, end_era: Option<Era>) -> Option<DateRange> {
        match self {
            DateTypeCode::Bce => bce_dates(date1, date2, end_era.unwrap_or(Era::Bce)),
            DateTypeCode::Detailed
            | DateTypeCode::Distribution
            | DateTypeCode::Reprint
            | DateTypeCode::Single => first_date_only(date1),
            DateTypeCode::Inclusive
            | DateTypeCode::Range
            | DateTypeCode::Multiple
            | DateTypeCode::Questionable => both_dates(date1, date2),
            DateTypeCode::Unknown | DateTypeCode::Unrecognized(_) => None,
        }
    }
}

/// A usable year from one slot.
///
/// Blank and fill slots are absent, as is an open bound: `9999`, or `uuuu` at the end.
/// A `uuuu` start resolves like any other start, to `0000`.
fn slot_year(fragment: &str, position: Position) -> Option<u16> {
    sanitize_year(fragment, position).filter(|year| *year != OPEN_BOUND)
}

fn first_date_only(date1: &str) -> Option<DateRange> {
    slot_year(date1, Position::Start).map(|year| DateRange::single(Era::Ce.resolve(year)))
}

fn both_dates(date1: &str, date2: &str) -> Option<DateRange> {
    DateRange::from_bounds(
        slot_year(date1, Position::Start).map(|year| Era::Ce.resolve(year)),
        slot_year(date2, Position::End).map(|year| Era::Ce.resolve(year)),
    )
}

fn bce_dates(date1: &str, date2: &str, end_era: Era) -> Option<DateRange> {
    let start = slot_year(date1, Position::Start).map(|year| Era::Bce.resolve(year));
    let end = slot_year(date2, Position::End).map(|year| end_era.resolve(year));
    DateRange::from_bounds(start, end)
}

/// Decode a date type code and its two date slots.
pub fn decode(date_type_code: char, date1: &str, date2: &str) -> Option<DateRange> {
    decode_with_end_era(date_type_code, date1, date2, None)
}

/// Like [`decode`], with an explicit era for the second bound of a BCE date.
pub fn decode_with_end_era(
    date_type_code: char,
    date1: &str,
    date2: &str,
    end_era: Option<Era>,
) -> Option<DateRange> {
    DateTypeCode::from(date_type_code).decode(date1, date2, end_era)
}

/// The date block of an `008` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field008<'a> {
    pub date_type: DateTypeCode,
    pub date1: &'a str,
    pub date2: &'a str,
}

type DateBlock<'a> = (char, &'a str, &'a str);

fn date_block(input: &str) -> IResult<&str, DateBlock<'_>> {
    tuple((anychar, take(4usize), take(4usize)))(input)
}

/// Just the nine characters of the date block.
fn compact_block(input: &str) -> IResult<&str, DateBlock<'_>> {
    all_consuming(date_block)(input)
}

/// A whole field: skip the entry date, ignore everything after the second date.
fn full_field(input: &str) -> IResult<&str, DateBlock<'_>> {
    terminated(preceded(take(DATE_TYPE_OFFSET), date_block), rest)(input)
}

impl<'a> Field008<'a> {
    /// Locate the date block in either a full `008` value or the bare nine-character
    /// block (`s1171    `).
    pub fn parse(field: &'a str) -> Option<Self> {
        compact_block(field)
            .or_else(|_| full_field(field))
            .finish()
            .ok()
            .map(|(_, (code, date1, date2))| Field008 {
                date_type: DateTypeCode::from(code),
                date1,
                date2,
            })
    }

    pub fn decode(&self, end_era: Option<Era>) -> Option<DateRange> {
        self.date_type.decode(self.date1, self.date2, end_era)
    }
}
