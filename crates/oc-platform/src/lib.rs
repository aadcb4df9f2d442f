//! # oc-platform
//!
//! Platform-specific implementations for OtpClip.
//!
//! This crate contains infrastructure implementations that interact with
//! the operating system clipboard.

pub mod clipboard;

pub use clipboard::{MemoryClipboard, SystemClipboard};
