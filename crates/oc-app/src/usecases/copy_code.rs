//! Use case for extracting a code and copying it to the clipboard
//! 提取验证码并复制到剪贴板的用例

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use oc_core::ports::SettingsPort;
use oc_core::OtpCode;

use crate::bridge::ClipboardBridge;
use crate::usecases::GetClearDelay;

/// What a copy attempt ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Code is on the clipboard; a clear is pending unless the delay is 0.
    Copied {
        code: OtpCode,
        clear_delay_secs: u32,
    },
    /// Extraction found nothing to copy.
    NoCode,
    /// The platform denied the clipboard write.
    CopyFailed,
}

/// Use case for the whole copy flow.
///
/// ## Behavior / 行为
/// - Extracts a code from the message
/// - Writes it to the clipboard through the bridge
/// - Schedules the delayed clear per the stored delay
///
/// A fresh successful copy always supersedes a previously pending clear,
/// even when the configured delay is 0.
pub struct CopyCode {
    bridge: Arc<ClipboardBridge>,
    settings: Arc<dyn SettingsPort>,
}

impl CopyCode {
    /// Create a new CopyCode use case.
    pub fn new(bridge: Arc<ClipboardBridge>, settings: Arc<dyn SettingsPort>) -> Self {
        Self { bridge, settings }
    }

    /// Execute the use case.
    ///
    /// # Parameters / 参数
    /// - `message`: Text to extract from
    /// - `delay_override`: Delay for this copy only, bypassing the store
    /// - `on_cleared`: Invoked once if the scheduled clear succeeds
    ///
    /// # Returns / 返回值
    /// - The [`CopyOutcome`] describing how far the flow got
    pub async fn execute<F>(
        &self,
        message: &str,
        delay_override: Option<u32>,
        on_cleared: F,
    ) -> CopyOutcome
    where
        F: FnOnce() + Send + 'static,
    {
        let span = info_span!("usecase.copy_code.execute", msg_len = message.len());

        async {
            let code = match oc_core::extract(message) {
                Some(code) => code,
                None => return CopyOutcome::NoCode,
            };

            if !self.bridge.copy(code.as_str()).await {
                return CopyOutcome::CopyFailed;
            }

            let clear_delay_secs = match delay_override {
                Some(secs) => secs,
                None => GetClearDelay::new(Arc::clone(&self.settings)).execute().await,
            };

            // Cancels any clear left over from an earlier copy; schedules
            // nothing when the delay is 0.
            self.bridge
                .schedule_clear(u64::from(clear_delay_secs), on_cleared)
                .await;

            info!(code_len = code.len(), clear_delay_secs, "code copied");
            CopyOutcome::Copied {
                code,
                clear_delay_secs,
            }
        }
        .instrument(span)
        .await
    }
}
