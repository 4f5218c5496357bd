// Copyright 2024-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading the small set of free-text date phrases found in spreadsheets and TEI.
//!
//! Recognized: single years and year ranges with optional era markers, ordinal centuries
//! ("15th century", "18th-20th centuries"), and an optional leading "circa" or similar.
//! Anything else yields no date rather than a guess.

use lazy_static::lazy_static;
use log::debug;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::{space0, space1},
    combinator::{all_consuming, map, map_opt, map_res, not, opt, value, verify},
    sequence::{delimited, preceded, separated_pair, terminated, tuple},
    Finish, IResult,
};
use regex::Regex;

use crate::{
    century::CENTURY_DURATION,
    era::Era,
    years::{DateRange, DateRangeList, Year, MULTI_VALUE_SEPARATOR},
};

lazy_static! {
    // inferred or doubtful dates are bracketed or queried
    static ref DOUBT_MARKS: Regex = Regex::new(r"[\[\]()?]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref TRAILING_PUNCTUATION: Regex = Regex::new(r"[.,;:]+$").unwrap();
}

fn clean_phrase(phrase: &str) -> String {
    let without_marks = DOUBT_MARKS.replace_all(phrase, "");
    let collapsed = WHITESPACE.replace_all(without_marks.trim(), " ");
    TRAILING_PUNCTUATION
        .replace(&collapsed, "")
        .trim()
        .to_lowercase()
}

/// A year of up to four digits, with the number of digits written.
fn year_digits(input: &str) -> IResult<&str, (u16, usize)> {
    map_res(take_while_m_n(1, 4, |c: char| c.is_ascii_digit()), |out: &str| {
        out.parse::<u16>().map(|year| (year, out.len()))
    })(input)
}

fn bce_marker(input: &str) -> IResult<&str, Era> {
    value(
        Era::Bce,
        alt((
            tag("b.c.e."),
            tag("b.c.e"),
            tag("bce"),
            tag("b.c."),
            tag("b.c"),
            tag("bc"),
        )),
    )(input)
}

fn ce_marker(input: &str) -> IResult<&str, Era> {
    value(
        Era::Ce,
        alt((
            tag("c.e."),
            tag("c.e"),
            tag("ce"),
            tag("a.d."),
            tag("a.d"),
            tag("ad"),
        )),
    )(input)
}

fn trailing_era(input: &str) -> IResult<&str, Option<Era>> {
    opt(preceded(space0, alt((bce_marker, ce_marker))))(input)
}

/// A year with its era, if one was written before ("AD 850") or after ("150 BC") it.
fn dated_year(input: &str) -> IResult<&str, ((u16, usize), Option<Era>)> {
    map(
        tuple((opt(terminated(ce_marker, space0)), year_digits, trailing_era)),
        |(prefix, year, suffix)| (year, suffix.or(prefix)),
    )(input)
}

fn range_separator(input: &str) -> IResult<&str, &str> {
    delimited(
        space0,
        alt((tag("-"), tag("–"), tag("^"), tag("to"))),
        space0,
    )(input)
}

fn single_year(input: &str) -> IResult<&str, DateRange> {
    map(dated_year, |((year, _), era)| {
        DateRange::single(era.unwrap_or(Era::Ce).resolve(year))
    })(input)
}

/// Fill in the leading digits of an abbreviated end year from the start year.
///
/// `1450-75` ends in 1475. An end that would fall before the start is refused.
fn complete_end_year(start: u16, end: u16, end_digits: usize) -> Option<u16> {
    let place = 10u16.pow(end_digits as u32);
    Some(start - start % place + end).filter(|end| *end >= start)
}

fn year_range(input: &str) -> IResult<&str, DateRange> {
    map_opt(
        separated_pair(dated_year, range_separator, dated_year),
        |(((start, start_digits), start_era), ((end, end_digits), end_era))| {
            let end_era = end_era.unwrap_or(Era::Ce);
            // "150-75 BC": the marker on the end covers an unmarked start
            let start_era = start_era.unwrap_or(end_era);
            let abbreviated = end_digits < start_digits;
            let end = if abbreviated && start_era == Era::Ce && end_era == Era::Ce {
                complete_end_year(start, end, end_digits)?
            } else {
                end
            };
            Some(DateRange::new(start_era.resolve(start), end_era.resolve(end)))
        },
    )(input)
}

fn century_number(input: &str) -> IResult<&str, u16> {
    verify(
        terminated(
            map_res(take_while_m_n(1, 2, |c: char| c.is_ascii_digit()), |out: &str| {
                out.parse::<u16>()
            }),
            alt((tag("st"), tag("nd"), tag("rd"), tag("th"))),
        ),
        |n: &u16| *n > 0,
    )(input)
}

fn century_word(input: &str) -> IResult<&str, &str> {
    alt((tag("centuries"), tag("century"), tag("cent."), tag("cent")))(input)
}

/// The years of the `number`th century, written the way MARC writes `14uu`.
fn century_span(number: u16, era: Era) -> (Year, Year) {
    let number = i32::from(number);
    match era {
        Era::Ce => (
            Year((number - 1) * CENTURY_DURATION),
            Year(number * CENTURY_DURATION - 1),
        ),
        Era::Bce => (
            Year(-number * CENTURY_DURATION),
            Year(-((number - 1) * CENTURY_DURATION + 1)),
        ),
    }
}

fn centuries(input: &str) -> IResult<&str, DateRange> {
    map(
        tuple((
            century_number,
            opt(preceded(range_separator, century_number)),
            preceded(space1, century_word),
            trailing_era,
        )),
        |(first, last, _, era)| {
            let era = era.unwrap_or(Era::Ce);
            let (first, last) = (
                century_span(first, era),
                century_span(last.unwrap_or(first), era),
            );
            DateRange::new(first.0.min(last.0), first.1.max(last.1))
        },
    )(input)
}

fn qualifier(input: &str) -> IResult<&str, &str> {
    terminated(
        alt((
            tag("approximately"),
            tag("circa"),
            tag("about"),
            tag("ca."),
            tag("ca"),
            // but not the "c.e." of an era
            terminated(tag("c."), not(tag("e"))),
        )),
        space0,
    )(input)
}

fn date_phrase(input: &str) -> IResult<&str, DateRange> {
    preceded(opt(qualifier), alt((centuries, year_range, single_year)))(input)
}

/// Read one free-text date phrase, or `None` if it is not one we recognize.
pub fn read_date_phrase(phrase: &str) -> Option<DateRange> {
    let cleaned = clean_phrase(phrase);
    if cleaned.is_empty() {
        return None;
    }
    let parsed = all_consuming(date_phrase)(cleaned.as_str()).finish();
    match parsed {
        Ok((_, range)) => Some(range),
        Err(e) => {
            debug!("Unrecognized date phrase {:?}: {}", phrase, e);
            None
        }
    }
}

/// Read every `|`-separated phrase of a free-text date value, skipping unrecognized ones.
pub fn read_free_text(text: &str) -> DateRangeList {
    text.split(MULTI_VALUE_SEPARATOR)
        .filter_map(read_date_phrase)
        .collect()
}
