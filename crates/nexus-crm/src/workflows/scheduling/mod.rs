//! Meeting calendar and follow-up tasks.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;


pub use domain::{
    Meeting, MeetingDraft, MeetingId, MeetingKind, Task, TaskDraft, TaskId, TaskKind,
    TaskPriority,
};
pub use repository::ScheduleRepository;
pub use router::schedule_router;
pub use service::{MeetingDay, ScheduleError, ScheduleService};
