// Copyright 2024-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::Display;

use itertools::Itertools;
use log::debug;
use production_dates::{
    join_century_lists, read_free_text, to_centuries_with_separator, CenturyTerms, DateRange,
    DateRangeList, Era, Field008, MULTI_VALUE_SEPARATOR,
};

use crate::settings::{Settings, SettingsError};

/// Raw date material for one record, as handed over by an extraction layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSource {
    /// A MARC `008` field, with the era of its second date if an `046` field gives one
    Marc008 {
        field: String,
        end_era: Option<Era>,
    },
    /// Separately recorded earliest and latest years
    StartEnd { start: String, end: String },
    /// A date as a cataloguer wrote it
    FreeText(String),
}

impl DateSource {
    pub fn ranges(&self) -> DateRangeList {
        match self {
            DateSource::Marc008 { field, end_era } => match Field008::parse(field) {
                Some(block) => block.decode(*end_era).into_iter().collect(),
                None => {
                    debug!("No date block in 008 field {:?}", field);
                    DateRangeList::new()
                }
            },
            DateSource::StartEnd { start, end } => {
                DateRange::from_start_end(start, end).into_iter().collect()
            }
            DateSource::FreeText(text) => read_free_text(text),
        }
    }
}

/// The three strings downstream consumers read. Any of them may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedDate {
    pub range: String,
    pub century: String,
    pub aat: String,
}

impl Display for NormalizedDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}\t{}", self.range, self.century, self.aat)
    }
}

#[derive(Debug, Clone)]
pub struct Normalizer {
    range_separator: String,
    terms: CenturyTerms,
}

impl Normalizer {
    pub fn new(range_separator: impl Into<String>, terms: CenturyTerms) -> Self {
        Self {
            range_separator: range_separator.into(),
            terms,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self::new(
            settings.range_separator.clone(),
            settings.century_terms()?,
        ))
    }

    /// Normalize every date statement of one record, keeping their order.
    pub fn normalize(&self, sources: &[DateSource]) -> NormalizedDate {
        let ranges: DateRangeList = sources.iter().flat_map(DateSource::ranges).collect();
        self.normalize_ranges(&ranges)
    }

    pub fn normalize_ranges(&self, ranges: &DateRangeList) -> NormalizedDate {
        let centuries = ranges.centuries();
        NormalizedDate {
            range: ranges.to_string_with(&self.range_separator),
            century: join_century_lists(&centuries),
            aat: centuries
                .iter()
                .map(|list| self.terms.uris(list))
                .join(MULTI_VALUE_SEPARATOR),
        }
    }

    /// Centuries and terms for a range string that was normalized earlier.
    pub fn normalize_range_string(&self, range_string: &str) -> NormalizedDate {
        let century = to_centuries_with_separator(range_string, &self.range_separator);
        let aat = self.terms.to_aat_uris(&century);
        NormalizedDate {
            range: range_string.trim().to_string(),
            century,
            aat,
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(
            production_dates::DEFAULT_RANGE_SEPARATOR,
            CenturyTerms::builtin().clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use production_dates::Century;

    use super::*;

    fn small_normalizer(separator: &str) -> Normalizer {
        let terms = vec![(14, "urn:ce14"), (15, "urn:ce15"), (-1, "urn:bce1")]
            .into_iter()
            .filter_map(|(n, uri)| Century::new(n).map(|c| (c, uri.to_string())))
            .collect();
        Normalizer::new(separator, terms)
    }

    fn marc(field: &str) -> DateSource {
        DateSource::Marc008 {
            field: field.to_string(),
            end_era: None,
        }
    }

    #[test]
    fn marc_sources() {
        let normalizer = small_normalizer("^");
        let normalized = normalizer.normalize(&[marc("850423q13uu14uuit            000 0 lat d")]);
        assert_eq!(
            normalized,
            NormalizedDate {
                range: "1300^1499".to_string(),
                century: "14;15".to_string(),
                aat: "urn:ce14;urn:ce15".to_string(),
            }
        );
        assert_eq!(normalizer.normalize(&[marc("nuuuuuuuu")]), NormalizedDate::default());
        assert_eq!(normalizer.normalize(&[marc("short")]), NormalizedDate::default());
    }

    #[test]
    fn bce_with_ce_end() {
        let normalizer = small_normalizer("^");
        let normalized = normalizer.normalize(&[DateSource::Marc008 {
            field: "b00500020".to_string(),
            end_era: Some(Era::Ce),
        }]);
        assert_eq!(normalized.range, "-50^20");
        assert_eq!(normalized.century, "-1;1");
        assert_eq!(normalized.aat, "urn:bce1;");
    }

    #[test]
    fn mixed_sources_keep_order() {
        let normalizer = small_normalizer("-");
        let normalized = normalizer.normalize(&[
            DateSource::FreeText("15th century|undated".to_string()),
            DateSource::StartEnd {
                start: "1350".to_string(),
                end: "".to_string(),
            },
            marc("m17uu1900"),
        ]);
        assert_eq!(normalized.range, "1400-1499|1350|1700-1900");
        assert_eq!(normalized.century, "15|14|18;19");
        assert_eq!(normalized.aat, "urn:ce15|urn:ce14|;");
        assert_eq!(
            normalized.to_string(),
            "1400-1499|1350|1700-1900\t15|14|18;19\turn:ce15|urn:ce14|;"
        );
    }

    #[test]
    fn existing_range_strings() {
        let normalizer = small_normalizer("^");
        let normalized = normalizer.normalize_range_string("1401^1500");
        assert_eq!(normalized.century, "15");
        assert_eq!(normalized.aat, "urn:ce15");
        assert_eq!(normalizer.normalize_range_string(""), NormalizedDate::default());
    }

    #[test]
    fn from_settings() {
        let normalizer = Normalizer::from_settings(&Settings::default()).unwrap();
        let normalized = normalizer.normalize(&[DateSource::FreeText("circa 1450".to_string())]);
        assert_eq!(normalized.range, "1450");
        assert_eq!(normalized.century, "15");
        assert!(!normalized.aat.is_empty());

        let empty_separator = Settings {
            range_separator: String::new(),
            ..Settings::default()
        };
        assert!(Normalizer::from_settings(&empty_separator).is_err());

        let pipe_separator = Settings {
            range_separator: "|".to_string(),
            ..Settings::default()
        };
        assert!(Normalizer::from_settings(&pipe_separator).is_err());
    }

    #[test]
    fn out_of_range_years_give_no_date() {
        let normalizer = small_normalizer("^");
        let normalized = normalizer.normalize(&[DateSource::StartEnd {
            start: "-2147483648".to_string(),
            end: "200000000".to_string(),
        }]);
        assert_eq!(normalized, NormalizedDate::default());
        let normalized = normalizer.normalize_range_string("-200000000^200000000");
        assert_eq!(normalized.century, "");
        assert_eq!(normalized.aat, "");
    }
}
