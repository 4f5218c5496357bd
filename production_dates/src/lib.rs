// Copyright 2021-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod aat;
mod century;
mod era;
pub mod fragment;
mod free_text;
mod marc;
mod years;

pub use aat::{CenturyTerms, AAT_URI_PREFIX};
pub use century::{
    join_century_lists, to_centuries, to_centuries_with_separator, Century, CenturyList,
    CenturyParseError, CENTURY_SEPARATOR,
};
pub use era::{resolve_era, Era};
pub use fragment::Position;
pub use free_text::{read_date_phrase, read_free_text};
pub use marc::{decode, decode_with_end_era, DateTypeCode, Field008};
pub use years::{
    build_range, DateRange, DateRangeList, RangeParseError, Year, DEFAULT_RANGE_SEPARATOR,
    MULTI_VALUE_SEPARATOR,
};

#[cfg(test)]
mod tests {
    use super::*;

    /// Decoder output always survives the trip through the range builder and back.
    #[test]
    fn decode_build_centuries_round_trip() {
        let cases = [
            ('s', "1171", "    ", "1171", "12"),
            ('m', "17uu", "1900", "1700^1900", "18;19"),
            ('m', "9999", "9999", "", ""),
            ('q', "13uu", "14uu", "1300^1499", "14;15"),
            ('b', "0300", "0200", "-300^-200", "-3"),
            ('n', "uuuu", "uuuu", "", ""),
        ];
        for (code, date1, date2, range, centuries) in cases.iter() {
            let decoded = decode(*code, date1, date2);
            let built = build_range(
                decoded.map(|r| r.start()),
                decoded.map(|r| r.end()),
                DEFAULT_RANGE_SEPARATOR,
            );
            assert_eq!(built, *range);
            assert_eq!(to_centuries(&built), *centuries);
        }
    }

    #[test]
    fn aat_terms_for_decoded_dates() {
        let terms = CenturyTerms::builtin();
        let centuries = to_centuries("1400^1499|-300^200");
        assert_eq!(centuries, "15|-3;-2;-1;1;2");
        let uris = terms.to_aat_uris(&centuries);
        assert_eq!(uris.split('|').count(), 2);
        assert_eq!(uris.split(|c: char| c == '|' || c == ';').count(), 6);
        assert!(uris
            .split(|c: char| c == '|' || c == ';')
            .all(|uri| uri.starts_with(AAT_URI_PREFIX)));
    }
}
