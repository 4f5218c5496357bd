// Copyright 2024-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{fragment::Position, years::Year};

/// Which side of year zero a year is counted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    /// Before Common Era
    Bce,
    /// Common Era
    Ce,
}

impl Era {
    /// Interpret a MARC `046` subfield code as an era marker for one bound.
    ///
    /// `$b` and `$c` qualify the first date as BC or CE, `$d` and `$e` the second.
    pub fn from_046_subfield(code: char) -> Option<(Position, Era)> {
        match code {
            'b' => Some((Position::Start, Era::Bce)),
            'c' => Some((Position::Start, Era::Ce)),
            'd' => Some((Position::End, Era::Bce)),
            'e' => Some((Position::End, Era::Ce)),
            _ => None,
        }
    }

    /// The era an `046` field gives the second date, from the codes of its subfields.
    ///
    /// Later subfields win. Codes that say nothing about the second date are ignored.
    pub fn end_era_from_046<I>(subfield_codes: I) -> Option<Era>
    where
        I: IntoIterator<Item = char>,
    {
        subfield_codes
            .into_iter()
            .filter_map(Era::from_046_subfield)
            .filter(|(position, _)| *position == Position::End)
            .map(|(_, era)| era)
            .last()
    }

    pub fn resolve(self, year: u16) -> Year {
        Year(resolve_era(year, self == Era::Bce))
    }
}

/// Sign a year: BCE years become negative.
pub fn resolve_era(year: u16, is_bce: bool) -> i32 {
    let year = i32::from(year);
    if is_bce {
        -year
    } else {
        year
    }
}
