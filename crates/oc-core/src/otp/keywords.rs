/// Keywords that introduce a code inline, e.g. `"code: 1234"`.
///
/// Matched case-insensitively, directly adjacent to the digits.
pub const TRIGGER_KEYWORDS: [&str; 7] = [
    "otp",
    "code",
    "verification",
    "verify",
    "pin",
    "password",
    "passcode",
];

/// Keywords whose presence anywhere in the message marks it as OTP-bearing.
///
/// Superset of [`TRIGGER_KEYWORDS`]. Checked as lowercase substrings.
pub const CONTEXT_KEYWORDS: [&str; 9] = [
    "otp",
    "code",
    "verification",
    "verify",
    "pin",
    "password",
    "passcode",
    "authenticate",
    "security",
];

/// `haystack_lc` must already be lowercased.
pub(crate) fn contains_any(haystack_lc: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| haystack_lc.contains(kw))
}
