// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod password;

// This is the public API of the validation core library
pub use checksum::{CuiChecksum, IdentifierValidator, NitChecksum, Validator};
pub use password::{evaluate_password_strength, PasswordPolicy, PasswordPolicyError};

/// Checks that a string is a well-formed, checksum-correct CUI (Guatemalan
/// personal identity number).
pub fn validate_cui(input: &str) -> bool {
    CuiChecksum.is_valid(input)
}

/// Checks that a string is a well-formed, checksum-correct NIT (Guatemalan
/// tax identification number).
pub fn validate_nit(input: &str) -> bool {
    NitChecksum.is_valid(input)
}
