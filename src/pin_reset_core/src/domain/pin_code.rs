use std::fmt;

use rand::Rng;
use thiserror::Error;

const PIN_CODE_LENGTH: usize = 6;

#[derive(Debug, Error, PartialEq)]
pub enum PinCodeError {
    #[error("PIN code must be exactly {PIN_CODE_LENGTH} digits")]
    InvalidPinCode,
}

/// One-time numeric code sent to the user's phone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinCode(String);

impl PinCode {
    pub fn new() -> Self {
        let code = rand::rng().random_range(0..1_000_000u32);
        Self(format!("{code:0width$}", width = PIN_CODE_LENGTH))
    }

    pub fn parse(code: String) -> Result<Self, PinCodeError> {
        if code.len() == PIN_CODE_LENGTH && code.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(code))
        } else {
            Err(PinCodeError::InvalidPinCode)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PinCode {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
