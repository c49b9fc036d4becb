//! User-facing notices, the server-side counterpart of a toast bus.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Outbound hook for notices; injected into every service.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice) -> Result<(), NoticeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NoticeError {
    #[error("notice transport unavailable: {0}")]
    Transport(String),
}

/// Notices never fail the operation that produced them.
pub(crate) fn publish<N: Notifier + ?Sized>(notifier: &N, notice: Notice) {
    if let Err(err) = notifier.notify(notice) {
        warn!(%err, "notice dropped");
    }
}

/// Keeps every notice in memory, newest last.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("notice mutex poisoned").clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .map(|notice| notice.message)
            .collect()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices
            .lock()
            .expect("notice mutex poisoned")
            .last()
            .cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) -> Result<(), NoticeError> {
        self.notices
            .lock()
            .expect("notice mutex poisoned")
            .push(notice);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedChannel;

    impl Notifier for ClosedChannel {
        fn notify(&self, _notice: Notice) -> Result<(), NoticeError> {
            Err(NoticeError::Transport("closed".to_string()))
        }
    }

    #[test]
    fn publishing_to_a_broken_transport_is_silent() {
        publish(&ClosedChannel, Notice::error("lost"));
    }

    #[test]
    fn recorder_keeps_order() {
        let notifier = RecordingNotifier::default();
        publish(&notifier, Notice::success("first"));
        publish(&notifier, Notice::info("second"));
        assert_eq!(notifier.messages(), vec!["first", "second"]);
        assert_eq!(
            notifier.last().map(|notice| notice.level),
            Some(NoticeLevel::Info)
        );
    }
}
