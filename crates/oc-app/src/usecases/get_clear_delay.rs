//! Use case for reading the configured clear delay
//! 读取剪贴板清除延迟设置的用例

use std::sync::Arc;

use tracing::{info_span, warn, Instrument};

use oc_core::ports::SettingsPort;
use oc_core::DEFAULT_CLEAR_DELAY_SECS;

/// Use case for reading the clear delay.
///
/// ## Behavior / 行为
/// - Loads settings from the settings port
/// - Falls back to the default delay when loading fails
///
/// This use case never fails: a broken settings store must not stop a
/// copy from going through.
pub struct GetClearDelay {
    settings: Arc<dyn SettingsPort>,
}

impl GetClearDelay {
    /// Create a new GetClearDelay use case.
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    /// Execute the use case.
    ///
    /// # Returns / 返回值
    /// - The configured delay in seconds, or the default (30) when the
    ///   store cannot be read
    pub async fn execute(&self) -> u32 {
        let span = info_span!("usecase.get_clear_delay.execute");

        async {
            match self.settings.load().await {
                Ok(settings) => settings.clear_delay_secs,
                Err(e) => {
                    warn!(error = %e, "settings unavailable, using default delay");
                    DEFAULT_CLEAR_DELAY_SECS
                }
            }
        }
        .instrument(span)
        .await
    }
}
