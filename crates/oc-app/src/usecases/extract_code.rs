//! Use case for extracting an OTP from message text
//! 从消息文本中提取验证码的用例

use tracing::{debug, info_span};

use oc_core::OtpCode;

/// Use case for running the extractor over a message.
///
/// ## Behavior / 行为
/// - Runs the two-stage extraction over the supplied text
/// - Returns the first accepted candidate, or nothing
///
/// Extraction is pure; this type exists so callers get consistent spans
/// and logging around it.
#[derive(Debug, Default)]
pub struct ExtractCode;

impl ExtractCode {
    pub fn new() -> Self {
        Self
    }

    /// Execute the use case.
    ///
    /// # Returns / 返回值
    /// - `Some(code)` - The extracted code
    /// - `None` - No candidate survived
    pub fn execute(&self, message: &str) -> Option<OtpCode> {
        let span = info_span!("usecase.extract_code.execute", msg_len = message.len());
        let _guard = span.enter();

        let result = oc_core::extract(message);
        match &result {
            Some(code) => debug!(code_len = code.len(), "code extracted"),
            None => debug!("no code found"),
        }
        result
    }
}
