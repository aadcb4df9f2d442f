//! OtpClip Application Orchestration Layer
//!
//! This crate contains business logic use cases and runtime orchestration.

pub mod bridge;
pub mod usecases;

pub use bridge::ClipboardBridge;
pub use usecases::{CopyCode, CopyOutcome, ExtractCode, GetClearDelay, SetClearDelay};
