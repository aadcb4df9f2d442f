use super::code::{MAX_CODE_LEN, MIN_CODE_LEN};
use super::keywords::{contains_any, CONTEXT_KEYWORDS};

/// Why a standalone digit run was turned down.
///
/// 规则按固定顺序评估，第一条命中的即为拒绝原因：
/// - length / repeated / sequential 只看候选本身
/// - keyword / phone / year 还要结合消息上下文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Fewer than 4 or more than 8 digits.
    BadLength,
    /// Every digit identical, e.g. `0000`.
    RepeatedDigits,
    /// Strictly ascending or descending with step 1, e.g. `1234`, `987654`.
    SequentialRun,
    /// No OTP-related keyword anywhere in the message.
    NoContextKeyword,
    /// Looks like a phone number: 10 digits in a message mentioning "call".
    PhoneNumber,
    /// A 4-digit value in 1900..=2100 in a message mentioning "date" or "year".
    YearLike,
}

/// Evaluation order. First rejecting rule wins.
pub(crate) const RULE_CHAIN: [RejectReason; 6] = [
    RejectReason::BadLength,
    RejectReason::RepeatedDigits,
    RejectReason::SequentialRun,
    RejectReason::NoContextKeyword,
    RejectReason::PhoneNumber,
    RejectReason::YearLike,
];

/// Runs `digits` through the chain. `message_lc` must be lowercased.
pub(crate) fn first_rejection(digits: &str, message_lc: &str) -> Option<RejectReason> {
    RULE_CHAIN
        .iter()
        .copied()
        .find(|rule| rule.rejects(digits, message_lc))
}

impl RejectReason {
    fn rejects(self, digits: &str, message_lc: &str) -> bool {
        match self {
            RejectReason::BadLength => {
                digits.len() < MIN_CODE_LEN || digits.len() > MAX_CODE_LEN
            }
            RejectReason::RepeatedDigits => all_same_digit(digits),
            RejectReason::SequentialRun => is_sequential(digits),
            RejectReason::NoContextKeyword => !contains_any(message_lc, &CONTEXT_KEYWORDS),
            // The standalone scan only yields 4-8 digit runs, so this rule
            // never fires on scan output. It stays in the chain so a wider
            // candidate source still gets screened.
            RejectReason::PhoneNumber => digits.len() == 10 && message_lc.contains("call"),
            RejectReason::YearLike => {
                digits.len() == 4
                    && (message_lc.contains("date") || message_lc.contains("year"))
                    && digits
                        .parse::<u32>()
                        .map_or(false, |value| (1900..=2100).contains(&value))
            }
        }
    }
}

fn all_same_digit(digits: &str) -> bool {
    let mut bytes = digits.bytes();
    match bytes.next() {
        Some(first) => bytes.all(|b| b == first),
        None => false,
    }
}

fn is_sequential(digits: &str) -> bool {
    let bytes = digits.as_bytes();
    let ascending = bytes.windows(2).all(|w| w[1] == w[0].wrapping_add(1));
    let descending = bytes.windows(2).all(|w| w[0] == w[1].wrapping_add(1));
    ascending || descending
}
