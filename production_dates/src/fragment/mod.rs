// Copyright 2024-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

pub(crate) mod parse;
mod sanitize;

/// The all-nines year MARC uses for an open or unknown bound.
pub(crate) const OPEN_BOUND: u16 = 9999;

pub use sanitize::{sanitize, sanitize_year, Position};
