pub mod accounts;
pub mod analytics;
pub mod content;
pub(crate) mod http;
pub mod inbox;
pub mod lists;
pub mod notices;
pub mod outreach;
pub mod pipeline;
pub mod prospecting;
pub mod scheduling;

pub use notices::{Notice, NoticeError, NoticeLevel, Notifier, RecordingNotifier};
