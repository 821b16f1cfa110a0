use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

static PHONE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{6,14}$").expect("valid phone number regex"));

#[derive(Debug, Error, PartialEq)]
pub enum PhoneNumberError {
    #[error("Invalid phone number")]
    InvalidPhoneNumber,
}

/// Registered contact channel for PIN delivery.
///
/// The number is kept behind `Secret` so it never shows up in `Debug`
/// output; use [`PhoneNumber::masked`] when it has to appear in logs.
#[derive(Debug, Clone)]
pub struct PhoneNumber(Secret<String>);

impl PhoneNumber {
    pub fn parse(phone_number: Secret<String>) -> Result<Self, PhoneNumberError> {
        if PHONE_NUMBER_REGEX.is_match(phone_number.expose_secret()) {
            Ok(Self(phone_number))
        } else {
            Err(PhoneNumberError::InvalidPhoneNumber)
        }
    }

    /// All but the last four digits replaced with `*`.
    pub fn masked(&self) -> String {
        let digits = self.0.expose_secret();
        let visible = digits.len().saturating_sub(4);
        format!("{}{}", "*".repeat(visible), &digits[visible..])
    }
}

impl AsRef<Secret<String>> for PhoneNumber {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for PhoneNumber {
    type Error = PhoneNumberError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for PhoneNumber {}
