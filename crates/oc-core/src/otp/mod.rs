//! OTP candidate extraction from free-form message text.
mod code;
mod extractor;
mod keywords;
mod patterns;
mod rules;

pub use code::{OtpCode, OtpCodeError};
pub use extractor::extract;
pub use keywords::{CONTEXT_KEYWORDS, TRIGGER_KEYWORDS};
pub use rules::RejectReason;
