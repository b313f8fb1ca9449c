use crate::checksum::Validator;
use lazy_static::lazy_static;
use regex::Regex;

/// Validates the check digit of Guatemalan personal identity numbers (CUI).
///
/// A CUI is 13 digits: 8 checksum-source digits, 1 check digit, then the
/// 2-digit department and 2-digit municipality codes of the issuing registry
/// office.
pub struct CuiChecksum;

const CUI_LENGTH: usize = 13;

// Number of municipalities per department, indexed by department code - 1.
const MUNICIPALITIES_PER_DEPARTMENT: &[u32; 22] = &[
    17, 8, 16, 16, 13, 14, 19, 8, 24, 21, 9, 30, 32, 21, 8, 17, 14, 5, 11, 11, 7, 17,
];

lazy_static! {
    // Spaces and dashes are stripped before matching; anything left must be
    // exactly 13 digits. Other whitespace is not a separator.
    static ref CUI_PATTERN: Regex = Regex::new(r"^[0-9]{13}$").unwrap();
}

impl Validator for CuiChecksum {
    fn is_valid(&self, input: &str) -> bool {
        let normalized: String = input.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
        if !CUI_PATTERN.is_match(&normalized) {
            return false;
        }

        let digits: Vec<u32> = normalized.chars().filter_map(|c| c.to_digit(10)).collect();
        if digits.len() != CUI_LENGTH {
            return false;
        }

        let department = (digits[9] * 10 + digits[10]) as usize;
        let municipality = digits[11] * 10 + digits[12];
        if department < 1 || department > MUNICIPALITIES_PER_DEPARTMENT.len() {
            return false;
        }
        if municipality < 1 || municipality > MUNICIPALITIES_PER_DEPARTMENT[department - 1] {
            return false;
        }

        // The digit at 0-indexed position i weighs i + 2.
        let sum: u32 = digits[..8]
            .iter()
            .enumerate()
            .map(|(i, digit)| digit * (i as u32 + 2))
            .sum();

        sum % 11 == digits[8]
    }
}
