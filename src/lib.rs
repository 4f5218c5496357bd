// Copyright 2021-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

pub mod normalize;
pub mod settings;

pub use normalize::{DateSource, NormalizedDate, Normalizer};
pub use settings::{Settings, SettingsError};
