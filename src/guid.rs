// Copyright 2025 The Roster Server Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Lexical validation of record identifiers.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Canonical UUID textual layout: 8-4-4-4-12 hexadecimal groups,
    /// hyphen-separated, 36 characters total. Hex digits may be either case.
    static ref GUID_PATTERN: Regex = Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
    ).expect("Invalid GUID pattern");
}

/// Returns true if `s` has the textual shape of a GUID.
///
/// This is a purely lexical check. It says nothing about whether a record
/// with this identifier exists, and it does not normalize letter case.
pub fn is_valid_guid(s: &str) -> bool {
    GUID_PATTERN.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_lowercase_guid() {
        assert!(is_valid_guid("05024756-765e-41a9-89d7-1407436d9a58"));
    }

    #[test]
    fn test_accepts_uppercase_guid() {
        assert!(is_valid_guid("05024756-765E-41A9-89D7-1407436D9A58"));
    }

    #[test]
    fn test_accepts_mixed_case_guid() {
        assert!(is_valid_guid("AbCdEf01-2345-6789-abcd-EF0123456789"));
    }

    #[test]
    fn test_accepts_nil_guid() {
        // Lexically well-formed even though no dataset should contain it
        assert!(is_valid_guid("00000000-0000-0000-0000-000000000000"));
    }

    #[test]
    fn test_rejects_empty_string() {
        assert!(!is_valid_guid(""));
    }

    #[test]
    fn test_rejects_too_short() {
        assert!(!is_valid_guid("05024756-765e-41a9-89d7"));
    }

    #[test]
    fn test_rejects_too_long() {
        assert!(!is_valid_guid("05024756-765e-41a9-89d7-1407436d9a58ff"));
    }

    #[test]
    fn test_rejects_missing_hyphens() {
        assert!(!is_valid_guid("05024756765e41a989d71407436d9a58"));
    }

    #[test]
    fn test_rejects_non_hex_characters() {
        assert!(!is_valid_guid("g5024756-765e-41a9-89d7-1407436d9a58"));
    }

    #[test]
    fn test_rejects_misplaced_hyphens() {
        assert!(!is_valid_guid("05024756765e-41a9-89d7-1407-436d9a58"));
    }

    #[test]
    fn test_rejects_surrounding_whitespace() {
        assert!(!is_valid_guid(" 05024756-765e-41a9-89d7-1407436d9a58"));
        assert!(!is_valid_guid("05024756-765e-41a9-89d7-1407436d9a58\n"));
    }

    #[test]
    fn test_rejects_plain_words() {
        assert!(!is_valid_guid("invalid-guid"));
        assert!(!is_valid_guid("not a guid at all"));
    }
}
