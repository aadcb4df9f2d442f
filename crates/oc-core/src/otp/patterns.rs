use once_cell::sync::Lazy;
use regex::Regex;

// 使用 once_cell 惰性初始化正则表达式，避免每次提取时重新编译

/// A trigger keyword followed by 4-8 digits. Group 1 is the digits.
///
/// Between keyword and digits the pattern admits whitespace, colons and a
/// single "is" connective, so `"Your OTP is 123456"` counts as adjacent.
pub(crate) static KEYWORD_ADJACENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:otp|code|verification|verify|pin|password|passcode)[\s:]*(?:is[\s:]+)?([0-9]{4,8})",
    )
    .unwrap()
});

/// A standalone run of 4-8 digits delimited by word boundaries.
///
/// Longer runs produce no match at all: no 4-8 digit window inside a
/// 9+ digit run has boundaries on both sides.
pub(crate) static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([0-9]{4,8})\b").unwrap());
