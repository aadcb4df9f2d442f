//! User settings model.
mod defaults;
mod model;

pub use model::{Settings, CLEAR_DELAY_CHOICES, DEFAULT_CLEAR_DELAY_SECS};
