//! User-facing notices
//!
//! Every mutating action reports through one [`Notifier`]: success text on
//! completion, the server's (or validator's) message on failure. Subscribers
//! render them however they like; nothing here blocks or retries.

use crate::error::ClientResult;
use std::future::Future;
use tokio::sync::broadcast;
use uuid::Uuid;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: Uuid,
    pub level: NoticeLevel,
    pub message: String,
}

/// Broadcast bus of [`Notice`]s
#[derive(Debug, Clone)]
pub struct Notifier {
    sender: broadcast::Sender<Notice>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.sender.subscribe()
    }

    /// Publish a notice; dropped silently when nobody listens
    pub fn notify(&self, level: NoticeLevel, message: impl Into<String>) -> Notice {
        let notice = Notice {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
        };
        if self.sender.send(notice.clone()).is_err() {
            tracing::trace!(message = %notice.message, "notice dropped, no subscribers");
        }
        notice
    }

    pub fn success(&self, message: impl Into<String>) -> Notice {
        self.notify(NoticeLevel::Success, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Notice {
        self.notify(NoticeLevel::Info, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> Notice {
        self.notify(NoticeLevel::Warning, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Notice {
        self.notify(NoticeLevel::Error, message)
    }

    /// Run one mutating call and report its outcome
    ///
    /// The result is handed back untouched so the caller can keep its form
    /// open on failure.
    pub async fn guard<T, F>(&self, action: F, success_message: &str) -> ClientResult<T>
    where
        F: Future<Output = ClientResult<T>>,
    {
        match action.await {
            Ok(value) => {
                self.success(success_message);
                Ok(value)
            }
            Err(e) => {
                tracing::warn!(code = %e.code(), error = %e, "action failed");
                self.error(e.user_message());
                Err(e)
            }
        }
    }
}

/// Feed every notice to `sink` until the bus closes
///
/// A receiver that falls behind skips the overwritten notices and keeps going.
pub async fn for_each_notice<F>(mut rx: broadcast::Receiver<Notice>, mut sink: F)
where
    F: FnMut(Notice),
{
    loop {
        match rx.recv().await {
            Ok(notice) => sink(notice),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "notice receiver lagged");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
