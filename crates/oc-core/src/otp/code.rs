use serde::Serialize;
use std::fmt;

/// Shortest code the extractor will accept.
pub const MIN_CODE_LEN: usize = 4;
/// Longest code the extractor will accept.
pub const MAX_CODE_LEN: usize = 8;

/// A one-time password pulled out of a message.
///
/// Invariant: 4 to 8 ASCII digits. The extractor is the normal producer;
/// [`OtpCode::parse`] exists for callers that already hold a digit string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OtpCode(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OtpCodeError {
    #[error("code must be {MIN_CODE_LEN}-{MAX_CODE_LEN} digits, got {0}")]
    BadLength(usize),

    #[error("code must contain only ASCII digits")]
    NonDigit,
}

impl OtpCode {
    /// Validates `raw` and wraps it.
    pub fn parse(raw: &str) -> Result<Self, OtpCodeError> {
        let len = raw.chars().count();
        if !(MIN_CODE_LEN..=MAX_CODE_LEN).contains(&len) {
            return Err(OtpCodeError::BadLength(len));
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(OtpCodeError::NonDigit);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits in the code.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl AsRef<str> for OtpCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
