// Copyright 2024-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use nom::{
    bytes::complete::{tag, take_while_m_n},
    character::complete::{char, space0},
    combinator::{map_res, opt, recognize},
    sequence::{delimited, pair, preceded},
    IResult,
};

use crate::years::Year;

/// Most digits a year may have, as in a MARC date slot.
const MAX_YEAR_DIGITS: usize = 4;

/// An optionally negative year of up to four digits, as written in a normalized range
/// string.
pub(crate) fn signed_year(input: &str) -> IResult<&str, Year> {
    map_res(
        recognize(pair(
            opt(char('-')),
            take_while_m_n(1, MAX_YEAR_DIGITS, |c: char| c.is_ascii_digit()),
        )),
        |out: &str| out.parse::<i32>().map(Year::from),
    )(input)
}

/// A single year, or two years joined by `separator`, with surrounding spaces removed.
///
/// The separator may itself be `-`: the start year is consumed first, so `-150--75` is
/// read as `-150` to `-75`.
pub(crate) fn date_range<'a>(
    separator: &'a str,
) -> impl FnMut(&'a str) -> IResult<&'a str, (Year, Option<Year>)> {
    move |input: &'a str| {
        delimited(
            space0,
            pair(
                signed_year,
                opt(preceded(
                    delimited(space0, tag(separator), space0),
                    signed_year,
                )),
            ),
            space0,
        )(input)
    }
}
