// Copyright 2024-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Getty Art & Architecture Thesaurus terms for centuries.

use std::{collections::BTreeMap, iter::FromIterator};

use itertools::Itertools;
use lazy_static::lazy_static;

use crate::{
    century::{Century, CenturyList, CENTURY_SEPARATOR},
    years::MULTI_VALUE_SEPARATOR,
};

/// Prefix of every AAT concept URI.
pub const AAT_URI_PREFIX: &str = "http://vocab.getty.edu/aat/";

// TODO: check these subject IDs against the AAT "centuries (dates BCE)" and
// "centuries (dates CE)" hierarchies before the next data release.
const BUILTIN_SUBJECT_IDS: &[(i32, u32)] = &[
    (-21, 300404430),
    (-20, 300404431),
    (-19, 300404432),
    (-18, 300404433),
    (-17, 300404434),
    (-16, 300404435),
    (-15, 300404436),
    (-14, 300404437),
    (-13, 300404438),
    (-12, 300404439),
    (-11, 300404440),
    (-10, 300404441),
    (-9, 300404442),
    (-8, 300404443),
    (-7, 300404444),
    (-6, 300404445),
    (-5, 300404446),
    (-4, 300404447),
    (-3, 300404448),
    (-2, 300404449),
    (-1, 300404450),
    (1, 300404451),
    (2, 300404452),
    (3, 300404453),
    (4, 300404454),
    (5, 300404455),
    (6, 300404456),
    (7, 300404457),
    (8, 300404458),
    (9, 300404459),
    (10, 300404460),
    (11, 300404461),
    (12, 300404462),
    (13, 300404463),
    (14, 300404464),
    (15, 300404465),
    (16, 300404466),
    (17, 300404467),
    (18, 300404468),
    (19, 300404469),
    (20, 300404470),
    (21, 300404471),
];

lazy_static! {
    static ref BUILTIN: CenturyTerms = BUILTIN_SUBJECT_IDS
        .iter()
        .filter_map(|(number, id)| {
            Century::new(*number).map(|century| (century, format!("{}{}", AAT_URI_PREFIX, id)))
        })
        .collect();
}

/// An immutable lookup from century to controlled-vocabulary URI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CenturyTerms {
    terms: BTreeMap<Century, String>,
}

impl CenturyTerms {
    /// The table shipped with this crate, covering the 21st century BCE through the 21st CE.
    pub fn builtin() -> &'static CenturyTerms {
        &BUILTIN
    }

    /// A copy of this table with some entries added or replaced.
    pub fn with_overrides(&self, overrides: impl IntoIterator<Item = (Century, String)>) -> Self {
        let mut terms = self.terms.clone();
        terms.extend(overrides);
        Self { terms }
    }

    pub fn uri(&self, century: Century) -> Option<&str> {
        self.terms.get(&century).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Century, &String)> {
        self.terms.iter()
    }

    /// `;`-joined URIs parallel to the centuries, with an empty entry for each unmapped one.
    pub fn uris(&self, centuries: &CenturyList) -> String {
        centuries
            .iter()
            .map(|century| self.uri(*century).unwrap_or_default())
            .join(CENTURY_SEPARATOR)
    }

    /// URIs for a century string, keeping its `;` and `|` shape.
    ///
    /// Anything that is not a century number maps to an empty entry.
    pub fn to_aat_uris(&self, century_string: &str) -> String {
        if century_string.trim().is_empty() {
            return String::new();
        }
        century_string
            .split(MULTI_VALUE_SEPARATOR)
            .map(|list| {
                list.split(CENTURY_SEPARATOR)
                    .map(|number| {
                        number
                            .parse::<Century>()
                            .ok()
                            .and_then(|century| self.uri(century))
                            .unwrap_or_default()
                    })
                    .join(CENTURY_SEPARATOR)
            })
            .join(MULTI_VALUE_SEPARATOR)
    }
}

impl FromIterator<(Century, String)> for CenturyTerms {
    fn from_iter<T: IntoIterator<Item = (Century, String)>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}
