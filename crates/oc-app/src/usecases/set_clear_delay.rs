//! Use case for updating the configured clear delay
//! 更新剪贴板清除延迟设置的用例

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use oc_core::ports::SettingsPort;
use oc_core::Settings;

/// Use case for persisting a new clear delay.
///
/// ## Behavior / 行为
/// - Loads current settings (falling back to defaults when unreadable)
/// - Replaces the delay and persists through the settings port
///
/// Persistence failures are logged and reported as `false`; they never
/// propagate as errors.
pub struct SetClearDelay {
    settings: Arc<dyn SettingsPort>,
}

impl SetClearDelay {
    /// Create a new SetClearDelay use case.
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    /// Execute the use case.
    ///
    /// # Parameters / 参数
    /// - `delay_secs`: Seconds before the clipboard is cleared; `0` never
    ///
    /// # Returns / 返回值
    /// - `true` if the new value was persisted
    pub async fn execute(&self, delay_secs: u32) -> bool {
        let span = info_span!("usecase.set_clear_delay.execute", delay_secs);

        async {
            let mut settings = match self.settings.load().await {
                Ok(settings) => settings,
                Err(e) => {
                    warn!(error = %e, "settings unavailable, starting from defaults");
                    Settings::default()
                }
            };

            settings.clear_delay_secs = delay_secs;

            match self.settings.save(&settings).await {
                Ok(()) => {
                    info!("clear delay updated");
                    true
                }
                Err(e) => {
                    warn!(error = %e, "failed to persist clear delay");
                    false
                }
            }
        }
        .instrument(span)
        .await
    }
}
