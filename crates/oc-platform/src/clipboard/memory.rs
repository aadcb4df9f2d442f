//! 内存剪贴板适配器
//!
//! In-memory clipboard sink for tests and headless runs.
//!
//! 行为与系统剪贴板一致：写入覆盖旧内容，清理写入空文本。

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use oc_core::ports::ClipboardSinkPort;

/// Clipboard sink that keeps its content in process memory.
#[derive(Default)]
pub struct MemoryClipboard {
    content: Mutex<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the current content.
    pub fn current(&self) -> String {
        self.content.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl ClipboardSinkPort for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let mut content = self.content.lock().unwrap_or_else(|e| e.into_inner());
        *content = text.to_owned();
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut content = self.content.lock().unwrap_or_else(|e| e.into_inner());
        content.clear();
        Ok(())
    }
}
