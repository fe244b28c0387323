//! Password generation
//!
//! Builds an alphabet from the enabled character classes and draws each
//! output character independently and uniformly from it. Randomness comes
//! from the thread-local generator in `rand` 0.9, which is a CSPRNG, so
//! the output is suitable for real passwords.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{MojiKitError, Result};

const UPPER_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Policy for password generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Password length
    pub length: usize,
    /// Include uppercase letters (A-Z)
    pub uppercase: bool,
    /// Include lowercase letters (a-z)
    pub lowercase: bool,
    /// Include digits (0-9)
    pub digits: bool,
    /// Include punctuation symbols (!@#$%...)
    pub symbols: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            length: crate::PASSWORD_DEFAULT_LENGTH,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: false,
        }
    }
}

impl PasswordPolicy {
    /// Concatenated alphabet of the enabled classes, in a stable order:
    /// uppercase, lowercase, digits, symbols.
    pub fn alphabet(&self) -> String {
        let mut chars = String::new();

        if self.uppercase {
            chars.push_str(UPPER_LETTERS);
        }

        if self.lowercase {
            chars.push_str(LOWER_LETTERS);
        }

        if self.digits {
            chars.push_str(DIGITS);
        }

        if self.symbols {
            chars.push_str(SYMBOLS);
        }

        chars
    }
}

/// Generate a random password following `policy`.
///
/// Each of the `policy.length` characters is drawn independently and
/// uniformly from the policy's alphabet.
///
/// # Errors
/// Returns [`MojiKitError::InvalidPolicy`] when no character class is
/// enabled, since uniform selection over an empty alphabet is undefined.
///
/// # Example
/// ```
/// use mojikit::password::{PasswordPolicy, generate_password};
///
/// let password = generate_password(&PasswordPolicy::default()).unwrap();
/// assert_eq!(password.len(), 12);
/// ```
pub fn generate_password(policy: &PasswordPolicy) -> Result<String> {
    let alphabet: Vec<char> = policy.alphabet().chars().collect();
    if alphabet.is_empty() {
        return Err(MojiKitError::InvalidPolicy);
    }

    let mut rng = rand::rng();
    let mut password = String::with_capacity(policy.length);

    for _ in 0..policy.length {
        let idx = rng.random_range(0..alphabet.len());
        password.push(alphabet[idx]);
    }

    Ok(password)
}
