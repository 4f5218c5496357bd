// Copyright 2024-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Centuries of years and year ranges.
//!
//! Centuries count from 1 in both directions: years 1 through 100 are the first century,
//! 101 through 200 the second, and likewise for BCE years, whose centuries are negative.
//! There is no century zero, and year zero is put in the first century.

use std::{fmt::Display, iter::FromIterator, str::FromStr};

use derive_more::Into;
use itertools::Itertools;
use log::debug;

use crate::years::{DateRange, Year, DEFAULT_RANGE_SEPARATOR, MULTI_VALUE_SEPARATOR};

/// Number of years in a century
pub(crate) const CENTURY_DURATION: i32 = 100;

/// Separator between the centuries of one range.
pub const CENTURY_SEPARATOR: &str = ";";

/// A nonzero signed century number: negative centuries are BCE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Into)]
pub struct Century(i32);

impl Century {
    pub fn new(number: i32) -> Option<Self> {
        if number == 0 {
            None
        } else {
            Some(Self(number))
        }
    }

    pub fn of_year(year: Year) -> Self {
        // i32::MIN has no positive counterpart, but its century is that of i32::MAX
        let magnitude = year.0.checked_abs().unwrap_or(i32::MAX);
        let number = if magnitude == 0 {
            1
        } else {
            (magnitude - 1) / CENTURY_DURATION + 1
        };
        if year.is_bce() {
            Self(-number)
        } else {
            Self(number)
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }

    pub fn is_bce(self) -> bool {
        self.0 < 0
    }

    /// The following century, stepping from -1 straight to 1.
    fn succ(self) -> Self {
        match self.0 {
            -1 => Self(1),
            n => Self(n + 1),
        }
    }
}

impl Display for Century {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Century {
    type Err = CenturyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .ok()
            .and_then(Century::new)
            .ok_or_else(|| CenturyParseError(s.to_string()))
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Not a century number: {0:?}")]
pub struct CenturyParseError(String);

/// Shift range bounds that sit on a century multiple into the century they introduce.
///
/// `14uu` becomes `1400^1499`, which means the fifteenth century, so a range opening on
/// an exact CE multiple opens the following century. The mirror image holds for a range
/// closing on an exact BCE multiple. Single years are never moved.
pub(crate) fn adjust_for_century(start: Year, end: Year) -> (Year, Year) {
    if start >= end {
        return (start, end);
    }
    let start = if start.0 > 0 && start.0 % CENTURY_DURATION == 0 {
        Year(start.0 + 1)
    } else {
        start
    };
    let end = if end.0 < 0 && end.0 % CENTURY_DURATION == 0 && end > start {
        Year(end.0 - 1)
    } else {
        end
    };
    (start, end)
}

/// The ascending, duplicate-free centuries touched by one range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CenturyList(Vec<Century>);

impl CenturyList {
    pub fn for_range(range: &DateRange) -> Self {
        let (start, end) = adjust_for_century(range.start(), range.end());
        let last = Century::of_year(end);
        std::iter::successors(Some(Century::of_year(start)), |c| {
            Some(c.succ()).filter(|next| *next <= last)
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Century> {
        self.0.iter()
    }

    /// Parse a `;`-joined list of century numbers.
    pub fn try_parse(input: &str) -> Result<Self, CenturyParseError> {
        input
            .split(CENTURY_SEPARATOR)
            .map(str::parse)
            .collect::<Result<Vec<Century>, _>>()
            .map(|mut centuries| {
                centuries.sort();
                centuries.dedup();
                Self(centuries)
            })
    }
}

impl FromIterator<Century> for CenturyList {
    fn from_iter<T: IntoIterator<Item = Century>>(iter: T) -> Self {
        Self(iter.into_iter().sorted().dedup().collect())
    }
}

impl Display for CenturyList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(CENTURY_SEPARATOR))
    }
}

/// Centuries for a normalized range string using `^` between bounds.
///
/// See [`to_centuries_with_separator`].
pub fn to_centuries(range_string: &str) -> String {
    to_centuries_with_separator(range_string, DEFAULT_RANGE_SEPARATOR)
}

/// Centuries for a normalized range string, `|`-delimited ranges giving `|`-delimited lists.
///
/// A range that does not parse contributes an empty entry; this never fails.
pub fn to_centuries_with_separator(range_string: &str, separator: &str) -> String {
    if range_string.trim().is_empty() {
        return String::new();
    }
    range_string
        .split(MULTI_VALUE_SEPARATOR)
        .map(|sub_range| match DateRange::try_parse(sub_range, separator) {
            Ok(range) => range.centuries().to_string(),
            Err(e) => {
                debug!("No centuries for {:?}: {}", sub_range, e);
                String::new()
            }
        })
        .join(MULTI_VALUE_SEPARATOR)
}

/// The external form of per-range century lists: `;` within a range, `|` between ranges.
pub fn join_century_lists(lists: &[CenturyList]) -> String {
    lists.iter().map(CenturyList::to_string).join(MULTI_VALUE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn century_of_ce_year() {
        assert_eq!(Century::of_year(Year(0)).get(), 1);
        assert_eq!(Century::of_year(Year(1)).get(), 1);
        assert_eq!(Century::of_year(Year(100)).get(), 1);
        assert_eq!(Century::of_year(Year(101)).get(), 2);
        assert_eq!(Century::of_year(Year(850)).get(), 9);
        assert_eq!(Century::of_year(Year(1499)).get(), 15);
        assert_eq!(Century::of_year(Year(1500)).get(), 15);
        assert_eq!(Century::of_year(Year(2024)).get(), 21);
    }

    #[test]
    fn century_of_bce_year() {
        assert_eq!(Century::of_year(Year(-99)).get(), -1);
        assert_eq!(Century::of_year(Year(-100)).get(), -1);
        assert_eq!(Century::of_year(Year(-101)).get(), -2);
        assert_eq!(Century::of_year(Year(-300)).get(), -3);
        assert_eq!(Century::of_year(Year(-1)).get(), -1);
        assert_eq!(Century::of_year(Year(i32::MIN)).get(), -21_474_837);
        assert_eq!(Century::of_year(Year(i32::MAX)).get(), 21_474_837);
    }

    #[test]
    fn boundary_adjustment() {
        assert_eq!(to_centuries("1400^1499"), "15");
        assert_eq!(to_centuries("1401^1500"), "15");
        assert_eq!(to_centuries("1400^1500"), "15");
        assert_eq!(to_centuries("1300^1499"), "14;15");
        assert_eq!(to_centuries("1400"), "14");
        assert_eq!(to_centuries("1900^2000"), "20");
        assert_eq!(to_centuries("-1600^-1400"), "-16;-15");
        assert_eq!(to_centuries("-200^-100"), "-2");
    }

    #[test]
    fn crossing_the_era_boundary() {
        assert_eq!(to_centuries("-300^200"), "-3;-2;-1;1;2");
        assert_eq!(to_centuries("-1^1"), "-1;1");
        assert_eq!(to_centuries("-150^-75"), "-2;-1");
    }

    #[test]
    fn single_years_and_spans() {
        assert_eq!(to_centuries("850"), "9");
        assert_eq!(to_centuries("1700^1900"), "18;19");
        assert_eq!(to_centuries("1150^1450"), "12;13;14;15");
        assert_eq!(to_centuries_with_separator("1400-1499", "-"), "15");
        assert_eq!(to_centuries_with_separator("-150--75", "-"), "-2;-1");
    }

    #[test]
    fn multi_valued_and_degraded_input() {
        assert_eq!(to_centuries("1400^1499|850"), "15|9");
        assert_eq!(to_centuries("1400^1499|garbage|850"), "15||9");
        assert_eq!(to_centuries(""), "");
        assert_eq!(to_centuries("   "), "");
        assert_eq!(to_centuries("circa 1450"), "");
    }

    #[test]
    fn out_of_range_years() {
        assert_eq!(to_centuries("-2147483648"), "");
        assert_eq!(to_centuries("2147483647"), "");
        assert_eq!(to_centuries("-200000000^200000000"), "");
        assert_eq!(to_centuries("10000"), "");
        assert_eq!(to_centuries("1400^1499|99999|850"), "15||9");
        assert_eq!(to_centuries("-9999^9999").split(';').count(), 200);
    }

    #[test]
    fn parse_century_lists() {
        let list = CenturyList::try_parse("-3;-2;-1;1;2").unwrap();
        assert_eq!(list.to_string(), "-3;-2;-1;1;2");
        assert_eq!(CenturyList::try_parse("15;14;15").unwrap().to_string(), "14;15");
        assert!(CenturyList::try_parse("0").is_err());
        assert!(CenturyList::try_parse("fifteen").is_err());
        assert!("".parse::<Century>().is_err());
    }

    #[test]
    fn joined_lists() {
        let lists = vec![
            DateRange::new(Year(1400), Year(1499)).centuries(),
            DateRange::single(Year(-150)).centuries(),
        ];
        assert_eq!(join_century_lists(&lists), "15|-2");
        assert_eq!(join_century_lists(&[]), "");
    }

    proptest! {
        #[test]
        fn same_century_ranges_give_one_century(century in 1i32..=30, a in 1i32..=100, b in 1i32..=100) {
            let base = (century - 1) * 100;
            let (y1, y2) = (base + a.min(b), base + a.max(b));
            prop_assume!(y1 < y2);
            let expected = Century::of_year(Year(y1)).to_string();
            prop_assert_eq!(to_centuries(&format!("{}^{}", y1, y2)), expected);
        }

        #[test]
        fn century_multiples_stay_in_their_century(century in 1i32..=99) {
            let year = Year(century * 100);
            prop_assert_eq!(Century::of_year(year).get(), century);
            prop_assert_eq!(to_centuries(&year.to_string()), century.to_string());
        }

        #[test]
        fn centuries_are_ascending_and_nonzero(start in -3000i32..3000, end in -3000i32..3000) {
            let range = DateRange::new(Year(start), Year(end));
            let centuries: Vec<i32> = range.centuries().iter().map(|c| c.get()).collect();
            prop_assert!(!centuries.is_empty());
            prop_assert!(centuries.iter().all(|c| *c != 0));
            prop_assert!(centuries.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
