//! Validated analyzer exchange name type.

use super::AnalyzerDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for an exchange name, matching AMQP short strings.
const MAX_NAME_LENGTH: usize = 255;

/// Validated name of an analyzer message exchange.
///
/// Exchange names address one analyzer backend on the broker (e.g.
/// `analyzer.auto`, `analyzer.pattern`). Only characters in
/// `[a-zA-Z0-9-_.:]` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeName(String);

impl ExchangeName {
    /// Creates a validated exchange name.
    ///
    /// The input is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerDomainError::EmptyExchangeName`] when the value is
    /// empty after trimming, [`AnalyzerDomainError::InvalidExchangeName`]
    /// when it contains characters outside `[a-zA-Z0-9-_.:]`, or
    /// [`AnalyzerDomainError::ExchangeNameTooLong`] when it exceeds 255
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, AnalyzerDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(AnalyzerDomainError::EmptyExchangeName);
        }

        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(AnalyzerDomainError::ExchangeNameTooLong(raw));
        }

        let is_valid = trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'));

        if !is_valid {
            return Err(AnalyzerDomainError::InvalidExchangeName(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the exchange name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ExchangeName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ExchangeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
