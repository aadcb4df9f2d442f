use serde::{Deserialize, Serialize};

/// Clipboard is cleared this many seconds after a copy unless configured.
pub const DEFAULT_CLEAR_DELAY_SECS: u32 = 30;

/// Delay choices surfaced by front-ends, in seconds. The store itself
/// accepts any non-negative value.
pub const CLEAR_DELAY_CHOICES: [u32; 4] = [0, 15, 30, 60];

/// User settings, persisted as a single JSON object.
///
/// On-disk shape is `{"clearDelay": <seconds>}`. Unknown fields are
/// ignored so files written by newer builds still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Seconds before a copied code is wiped from the clipboard.
    ///
    /// `0` 表示不自动清理
    #[serde(rename = "clearDelay", default = "default_clear_delay")]
    pub clear_delay_secs: u32,
}

fn default_clear_delay() -> u32 {
    DEFAULT_CLEAR_DELAY_SECS
}

impl Settings {
    /// True when the configured delay disables the scheduled clear.
    pub fn clear_disabled(&self) -> bool {
        self.clear_delay_secs == 0
    }
}
