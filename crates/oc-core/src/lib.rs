//! # oc-core
//!
//! Core domain models and business logic for OtpClip.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod otp;
pub mod ports;
pub mod settings;

// Re-export commonly used types at the crate root
pub use otp::{extract, OtpCode, OtpCodeError, RejectReason};
pub use settings::{Settings, CLEAR_DELAY_CHOICES, DEFAULT_CLEAR_DELAY_SECS};
