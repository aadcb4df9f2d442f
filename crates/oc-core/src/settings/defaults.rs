use super::model::*;

impl Default for Settings {
    fn default() -> Self {
        Self {
            clear_delay_secs: DEFAULT_CLEAR_DELAY_SECS,
        }
    }
}
