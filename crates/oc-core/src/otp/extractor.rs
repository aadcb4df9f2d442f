use super::code::OtpCode;
use super::patterns::{DIGIT_RUN, KEYWORD_ADJACENT};
use super::rules::first_rejection;

/// Extracts an OTP candidate from a free-form message.
///
/// Two stages:
/// 1. A trigger keyword directly followed by 4-8 digits wins immediately
///    and skips every screening rule. `"code: 1234"` yields `1234` even
///    though `1234` is sequential.
/// 2. Otherwise standalone 4-8 digit runs are screened in order of
///    appearance; the first run passing all rules wins.
///
/// Returns `None` for empty or whitespace-only input, and for messages
/// where no candidate survives.
pub fn extract(message: &str) -> Option<OtpCode> {
    if message.trim().is_empty() {
        return None;
    }

    if let Some(digits) = KEYWORD_ADJACENT
        .captures(message)
        .and_then(|caps| caps.get(1))
    {
        tracing::debug!(
            stage = "keyword_adjacent",
            len = digits.as_str().len(),
            "otp candidate accepted"
        );
        return OtpCode::parse(digits.as_str()).ok();
    }

    let lowered = message.to_lowercase();
    for run in DIGIT_RUN.find_iter(message) {
        match first_rejection(run.as_str(), &lowered) {
            Some(reason) => {
                tracing::trace!(
                    stage = "standalone",
                    offset = run.start(),
                    len = run.as_str().len(),
                    reason = ?reason,
                    "otp candidate rejected"
                );
            }
            None => {
                tracing::debug!(
                    stage = "standalone",
                    offset = run.start(),
                    len = run.as_str().len(),
                    "otp candidate accepted"
                );
                return OtpCode::parse(run.as_str()).ok();
            }
        }
    }

    None
}
