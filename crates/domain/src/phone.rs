// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Maximum number of digits kept from a typed phone number.
pub const PHONE_DIGITS: usize = 10;

/// A phone number already on file, offered as a one-click choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneOption {
    /// Option identifier, e.g. `"work"`.
    pub id: String,
    /// Label shown on the card.
    pub label: String,
    /// Formatted number.
    pub number: String,
}

/// Formats typed input as `(XXX) XXX-XXXX`, progressively.
///
/// Non-digits are discarded and at most ten digits are kept. Partial input
/// is formatted as far as it goes: `"555"` stays `"555"`, `"5551"` becomes
/// `"(555) 1"`.
#[must_use]
pub fn format_phone_number(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect();

    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

/// Returns whether `phone` holds a complete ten-digit number.
#[must_use]
pub fn is_complete_phone_number(phone: &str) -> bool {
    phone.chars().filter(char::is_ascii_digit).count() == PHONE_DIGITS
}
