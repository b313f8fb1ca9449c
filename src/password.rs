use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use thiserror::Error;

const DEFAULT_MIN_LENGTH: usize = 8;
const DEFAULT_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

#[derive(Debug, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("The minimum length must be at least 1")]
    ZeroMinimumLength,

    #[error("The symbol set must contain at least one character")]
    EmptySymbolSet,
}

/// Password strength policy applied to candidate passwords at sign-up and
/// on password change.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PasswordPolicy {
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default = "default_symbols")]
    pub symbols: Vec<char>,
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_symbols() -> Vec<char> {
    DEFAULT_SYMBOLS.chars().collect()
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        PasswordPolicy {
            min_length: DEFAULT_MIN_LENGTH,
            symbols: default_symbols(),
        }
    }
}

impl PasswordPolicy {
    /// Checks that the policy itself is usable before it is attached to a
    /// form. Evaluation never fails; a broken policy is a configuration bug.
    pub fn validate(&self) -> Result<(), PasswordPolicyError> {
        if self.min_length == 0 {
            return Err(PasswordPolicyError::ZeroMinimumLength);
        }
        if self.symbols.is_empty() {
            return Err(PasswordPolicyError::EmptySymbolSet);
        }
        Ok(())
    }

    /// Returns the Spanish violation messages for every rule the password
    /// fails, in a fixed order. Rules are evaluated independently, never
    /// short-circuited. An empty list means the password is acceptable.
    pub fn evaluate(&self, password: &str) -> Vec<String> {
        let mut violations = Vec::new();

        if password.chars().count() < self.min_length {
            violations.push(format!(
                "La contraseña debe tener al menos {} caracteres",
                self.min_length
            ));
        }
        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            violations.push("La contraseña debe incluir al menos una letra minúscula".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            violations.push("La contraseña debe incluir al menos una letra mayúscula".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            violations.push("La contraseña debe incluir al menos un número".to_string());
        }
        if !password.chars().any(|c| self.symbols.contains(&c)) {
            violations.push("La contraseña debe incluir al menos un símbolo".to_string());
        }

        violations
    }
}

/// Evaluates a password against the default platform policy.
pub fn evaluate_password_strength(password: &str) -> Vec<String> {
    PasswordPolicy::default().evaluate(password)
}
