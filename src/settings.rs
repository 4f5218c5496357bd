// Copyright 2024-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use log::warn;
use production_dates::{Century, CenturyTerms, DEFAULT_RANGE_SEPARATOR, MULTI_VALUE_SEPARATOR};
use serde::Deserialize;

/// Corresponds to the entire TOML settings file.
///
/// ```toml
/// range_separator = "-"
/// builtin_centuries = true
///
/// [centuries]
/// "22" = "http://vocab.getty.edu/aat/..."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Placed between the two years of a range
    pub range_separator: String,
    /// Start from the built-in century table, rather than only the entries below
    pub builtin_centuries: bool,
    /// Century number to vocabulary URI, added to or replacing built-in entries
    pub centuries: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            range_separator: DEFAULT_RANGE_SEPARATOR.to_string(),
            builtin_centuries: true,
            centuries: BTreeMap::new(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let separator = &self.range_separator;
        if separator.is_empty() {
            return Err(SettingsError::EmptySeparator);
        }
        // range strings must still split into statements and years
        if separator.contains(MULTI_VALUE_SEPARATOR)
            || separator.contains(|c: char| c.is_ascii_digit())
        {
            return Err(SettingsError::AmbiguousSeparator(separator.clone()));
        }
        Ok(())
    }

    /// Build the century lookup these settings describe.
    pub fn century_terms(&self) -> Result<CenturyTerms, SettingsError> {
        let overrides = self
            .centuries
            .iter()
            .map(|(key, uri)| {
                key.parse::<Century>()
                    .map(|century| (century, uri.clone()))
                    .map_err(|_| SettingsError::CenturyKey(key.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let base = if self.builtin_centuries {
            CenturyTerms::builtin().clone()
        } else {
            CenturyTerms::default()
        };
        let terms = base.with_overrides(overrides);
        if terms.is_empty() {
            warn!("No century terms configured, AAT output will be empty");
        }
        Ok(terms)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Could not read settings file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid settings file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Range separator must not be empty")]
    EmptySeparator,
    #[error("Range separator {0:?} must not contain \"|\" or digits")]
    AmbiguousSeparator(String),
    #[error("Century key {0:?} is not a nonzero integer")]
    CenturyKey(String),
}
