use crate::checksum::Validator;
use lazy_static::lazy_static;
use regex::Regex;

/// Validates the check character of Guatemalan tax identification numbers
/// (NIT).
///
/// A NIT is a variable-length digit body followed by a check character that
/// is either a digit or the letter `k`, usually written after a dash.
pub struct NitChecksum;

lazy_static! {
    // Unanchored at the end on purpose: the check character comparison below
    // is what actually decides validity.
    static ref NIT_PATTERN: Regex = Regex::new(r"(?i)^[0-9]+(-?[0-9k])?").unwrap();
}

impl Validator for NitChecksum {
    fn is_valid(&self, input: &str) -> bool {
        if !NIT_PATTERN.is_match(input) {
            return false;
        }

        let normalized: String = input.to_lowercase().chars().filter(|c| *c != '-').collect();
        let mut chars = normalized.chars();
        let check_char = match chars.next_back() {
            Some(c) => c,
            None => return false,
        };
        let body = chars.as_str();

        // The leftmost body digit weighs body length + 1, decreasing to 2 at
        // the rightmost. Only the remainder mod 11 matters, so the sum is
        // reduced as it accumulates and bodies of any length stay in range.
        let mut weight = body.chars().count() as u64 + 1;
        let mut sum: u64 = 0;
        for c in body.chars() {
            let digit = match c.to_digit(10) {
                Some(d) => d,
                None => return false,
            };
            sum = (sum + digit as u64 * weight) % 11;
            weight -= 1;
        }

        let expected = match (11 - sum) % 11 {
            10 => 'k',
            value => (b'0' + value as u8) as char,
        };

        expected == check_char
    }
}

#[cfg(test)]
mod test {
    use crate::checksum::*;

    #[test]
    fn valid_nits() {
        let valid_ids = vec![
            // body 12345678 -> weighted sum 156, (11 - 156 % 11) % 11 = 9
            "12345678-9",
            "123456789",
            // body 12 -> weighted sum 7, expected check digit 4
            "12-4",
            // body 29 -> weighted sum 24, expected check digit 9
            "29-9",
            // bodies whose check value is 10 use the letter k
            "6-k",
            "6-K",
            "6k",
            "40-k",
            // a zero body expects a zero check digit
            "0-0",
            "00",
        ];
        for id in valid_ids {
            println!("testing for input {id}");
            assert!(NitChecksum.is_valid(id));
        }
    }

    #[test]
    fn invalid_nits() {
        let invalid_ids = vec![
            // wrong check character
            "12345678-8",
            "12345678-k",
            "6-5",
            "0-1",
            // a lone check character has no digit body
            "k",
            // the pre-check tolerates trailing garbage but the body does not
            "12345678-9xyz",
            // interior spaces are not separators for a NIT
            "1234 5678-9",
            // non digit characters
            "abc",
            "",
        ];
        for id in invalid_ids {
            println!("testing for input {id}");
            assert!(!NitChecksum.is_valid(id));
        }
    }

    #[test]
    fn handles_arbitrarily_long_bodies() {
        // 40,000 nines: weights 2..=40001 sum to 800,060,000, times 9 is
        // 7,200,540,000, which is 5 mod 11, so the check digit is 6
        let body = "9".repeat(40_000);
        assert!(NitChecksum.is_valid(&format!("{body}-6")));
        assert!(!NitChecksum.is_valid(&format!("{body}-0")));
    }

    #[test]
    fn single_digit_input_is_its_own_body_and_check() {
        // "5" is read as an empty body with check character '5'; an empty
        // body sums to 0 and expects '0'.
        assert!(!NitChecksum.is_valid("5"));
        assert!(NitChecksum.is_valid("0"));
    }
}
