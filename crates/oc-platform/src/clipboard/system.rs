//! 系统剪贴板适配器
//!
//! System clipboard sink backed by `arboard`.
//!
//! `arboard` 的 API 是阻塞的，所以每次操作都在 `spawn_blocking` 中
//! 打开一个新的剪贴板句柄，避免跨 await 持有平台资源。

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tracing::debug;

use oc_core::ports::ClipboardSinkPort;

/// Writes to the operating system clipboard.
///
/// Each call opens a fresh `arboard::Clipboard` on a blocking thread;
/// the handle never crosses an await point.
#[derive(Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    async fn run_blocking<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut arboard::Clipboard) -> std::result::Result<(), arboard::Error>
            + Send
            + 'static,
    {
        let joined = tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new().map_err(map_clipboard_err)?;
            f(&mut clipboard).map_err(map_clipboard_err)
        })
        .await;

        match joined {
            Ok(result) => result,
            Err(e) => Err(anyhow!("clipboard task failed: {}", e)),
        }
    }
}

#[async_trait]
impl ClipboardSinkPort for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let len = text.len();
        let text = text.to_owned();
        self.run_blocking(move |clipboard| clipboard.set_text(text))
            .await?;
        debug!(len, "wrote text to system clipboard");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        // 清理即写入空文本，而不是释放剪贴板所有权
        self.run_blocking(|clipboard| clipboard.set_text(String::new()))
            .await?;
        debug!("cleared system clipboard");
        Ok(())
    }
}

fn map_clipboard_err(e: arboard::Error) -> anyhow::Error {
    anyhow!("clipboard error: {}", e)
}
