// Copyright 2024-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving the uncertain-digit placeholders of a four-character year slot.
//!
//! MARC writes an unknown digit as `u`, so `14uu` is "some year in the 1400s".
//! At the start of a range that resolves to the earliest candidate (`1400`),
//! at the end to the latest (`1499`).

/// Width of a year slot in a MARC fixed field.
const FRAGMENT_LEN: usize = 4;

/// Placeholder for a digit that is not known.
const UNCERTAIN: char = 'u';

/// Which end of a range a year fragment describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Start,
    End,
}

impl Position {
    fn placeholder_digit(self) -> char {
        match self {
            Position::Start => '0',
            Position::End => '9',
        }
    }
}

/// Replace every uncertain digit in the first four characters of `fragment`.
///
/// Returns `None` when the slot is short, or holds anything other than digits and `u`
/// (blanks and fill characters mean the field is absent).
pub fn sanitize(fragment: &str, position: Position) -> Option<String> {
    let slot: Vec<char> = fragment.chars().take(FRAGMENT_LEN).collect();
    if slot.len() < FRAGMENT_LEN {
        return None;
    }
    slot.into_iter()
        .map(|c| match c {
            UNCERTAIN => Some(position.placeholder_digit()),
            c if c.is_ascii_digit() => Some(c),
            _ => None,
        })
        .collect()
}

/// Like [`sanitize`], but yielding the numeric year.
pub fn sanitize_year(fragment: &str, position: Position) -> Option<u16> {
    sanitize(fragment, position).and_then(|digits| digits.parse().ok())
}
