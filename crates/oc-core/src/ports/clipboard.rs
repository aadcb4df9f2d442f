//! Clipboard sink port - abstracts write access to the system clipboard
//!
//! The sink is intentionally write-only: the application never reads what
//! other programs put on the clipboard.

use anyhow::Result;
use async_trait::async_trait;

/// Write-only clipboard access.
///
/// Platform crates supply concrete adapters, so orchestration code can run
/// against the real clipboard or an in-memory one.
#[async_trait]
pub trait ClipboardSinkPort: Send + Sync {
    /// Replace the clipboard content with `text`.
    async fn write_text(&self, text: &str) -> Result<()>;

    /// Overwrite the clipboard with empty content.
    async fn clear(&self) -> Result<()>;
}
