// Copyright 2024-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::{fmt::Display, iter::FromIterator};

use derive_more::{From, Into};
use itertools::Itertools;
use nom::{combinator::all_consuming, Finish};

use crate::{
    century::CenturyList,
    fragment::parse::{date_range, signed_year},
};

/// Separator between the bounds of a normalized range.
pub const DEFAULT_RANGE_SEPARATOR: &str = "^";

/// Separator between independent date statements of one record.
pub const MULTI_VALUE_SEPARATOR: &str = "|";

/// A signed year: negative years are BCE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
pub struct Year(pub i32);

impl Year {
    pub fn is_bce(self) -> bool {
        self.0 < 0
    }
}

impl Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A closed range of years, possibly just one year.
///
/// Bounds are kept in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Year,
    end: Year,
}

impl DateRange {
    pub fn new(start: Year, end: Year) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    pub fn single(year: Year) -> Self {
        Self {
            start: year,
            end: year,
        }
    }

    /// Assemble a range from whatever bounds are known: `None` if neither is.
    pub fn from_bounds(start: Option<Year>, end: Option<Year>) -> Option<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Some(Self::new(start, end)),
            (Some(year), None) | (None, Some(year)) => Some(Self::single(year)),
            (None, None) => None,
        }
    }

    /// Read already-separated start and end values, such as a pair of spreadsheet columns.
    ///
    /// Blank or non-numeric sides count as absent.
    pub fn from_start_end(start: &str, end: &str) -> Option<Self> {
        fn side(s: &str) -> Option<Year> {
            all_consuming(signed_year)(s.trim())
                .finish()
                .ok()
                .map(|(_, year)| year)
        }
        Self::from_bounds(side(start), side(end))
    }

    /// Parse a normalized range string such as `1400^1499` or `-150`.
    pub fn try_parse(input: &str, separator: &str) -> Result<Self, RangeParseError> {
        let (start, end) = all_consuming(date_range(separator))(input)
            .finish()
            .map(|(_leftover, parsed)| parsed)?;
        Ok(Self::new(start, end.unwrap_or(start)))
    }

    pub fn start(&self) -> Year {
        self.start
    }

    pub fn end(&self) -> Year {
        self.end
    }

    pub fn is_single_year(&self) -> bool {
        self.start == self.end
    }

    pub fn centuries(&self) -> CenturyList {
        CenturyList::for_range(self)
    }

    /// Format with the given separator between distinct bounds.
    pub fn to_string_with(&self, separator: &str) -> String {
        if self.is_single_year() {
            self.start.to_string()
        } else {
            format!("{}{}{}", self.start, separator, self.end)
        }
    }
}

impl From<Year> for DateRange {
    fn from(year: Year) -> Self {
        Self::single(year)
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string_with(DEFAULT_RANGE_SEPARATOR))
    }
}

/// Format whichever bounds are known: empty if there are none.
pub fn build_range(start: Option<Year>, end: Option<Year>, separator: &str) -> String {
    DateRange::from_bounds(start, end)
        .map(|range| range.to_string_with(separator))
        .unwrap_or_default()
}

/// The independent date statements of one record, in the order they were found.
///
/// Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeList(Vec<DateRange>);

impl DateRangeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, range: DateRange) {
        self.0.push(range)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DateRange> {
        self.0.iter()
    }

    /// One century list per range, in the same order.
    pub fn centuries(&self) -> Vec<CenturyList> {
        self.0.iter().map(DateRange::centuries).collect()
    }

    /// The external form: each range formatted with `separator`, joined with `|`.
    pub fn to_string_with(&self, separator: &str) -> String {
        self.0
            .iter()
            .map(|range| range.to_string_with(separator))
            .join(MULTI_VALUE_SEPARATOR)
    }
}

impl Display for DateRangeList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string_with(DEFAULT_RANGE_SEPARATOR))
    }
}

impl FromIterator<DateRange> for DateRangeList {
    fn from_iter<T: IntoIterator<Item = DateRange>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<DateRange> for DateRangeList {
    fn extend<T: IntoIterator<Item = DateRange>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}

impl IntoIterator for DateRangeList {
    type Item = DateRange;
    type IntoIter = std::vec::IntoIter<DateRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Failed parsing date range: {0}")]
pub struct RangeParseError(String);

impl From<nom::error::Error<&str>> for RangeParseError {
    fn from(value: nom::error::Error<&str>) -> Self {
        RangeParseError(value.to_string())
    }
}
