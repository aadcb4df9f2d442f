//! Clipboard bridge: writes codes out and wipes them again later.
//! 负责写入剪贴板并在延迟后清除

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::time::{sleep, Duration};
use tracing::{debug, info, warn};

use oc_core::ports::ClipboardSinkPort;

/// Owns the sink plus the single pending-clear task.
///
/// At most one clear is pending per bridge instance; scheduling a new one
/// aborts the previous task before its sleep elapses. Share the bridge
/// behind an [`Arc`] to use it from several tasks.
pub struct ClipboardBridge {
    sink: Arc<dyn ClipboardSinkPort>,
    pending_clear: Arc<Mutex<Option<tokio::task::AbortHandle>>>,
}

impl ClipboardBridge {
    pub fn new(sink: Arc<dyn ClipboardSinkPort>) -> Self {
        Self {
            sink,
            pending_clear: Arc::new(Mutex::new(None)),
        }
    }

    /// Best-effort write of `text` to the clipboard.
    ///
    /// Returns `false` when the platform denies the write. The error is
    /// logged here; user-visible messaging is the caller's job.
    pub async fn copy(&self, text: &str) -> bool {
        match self.sink.write_text(text).await {
            Ok(()) => {
                debug!(len = text.len(), "clipboard write ok");
                true
            }
            Err(e) => {
                warn!(error = %e, "clipboard write failed");
                false
            }
        }
    }

    /// Schedules an overwrite of the clipboard with empty content after
    /// `delay_secs`, cancelling any previously pending clear first.
    ///
    /// A delay of `0` means "never": the prior clear is still cancelled,
    /// but nothing new is scheduled. `on_cleared` runs only if the
    /// overwrite succeeds.
    pub async fn schedule_clear<F>(&self, delay_secs: u64, on_cleared: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut pending = self.pending_clear.lock().await;
        if let Some(existing) = pending.take() {
            existing.abort();
            debug!("pending clear superseded");
        }

        if delay_secs == 0 {
            debug!("clear delay is 0, nothing scheduled");
            return;
        }

        let sink = Arc::clone(&self.sink);
        let slot = Arc::clone(&self.pending_clear);
        let handle = tokio::spawn(async move {
            sleep(Duration::from_secs(delay_secs)).await;
            // Remove our own handle first so a late cancel is a no-op.
            slot.lock().await.take();
            match sink.clear().await {
                Ok(()) => {
                    info!("clipboard cleared");
                    on_cleared();
                }
                Err(e) => warn!(error = %e, "clipboard clear failed"),
            }
        });

        *pending = Some(handle.abort_handle());
        debug!(delay_secs, "clipboard clear scheduled");
    }

    /// Aborts the pending clear if one exists. Safe to call repeatedly and
    /// after the clear has already fired.
    pub async fn cancel_scheduled_clear(&self) {
        let mut pending = self.pending_clear.lock().await;
        if let Some(handle) = pending.take() {
            handle.abort();
            debug!("pending clear cancelled");
        }
    }
}
