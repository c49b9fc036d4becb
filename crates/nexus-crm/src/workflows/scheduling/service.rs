use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use tracing::info;

use super::domain::{
    Meeting, MeetingDraft, MeetingId, Task, TaskDraft, TaskId, TIME_FORMAT,
};
use super::repository::ScheduleRepository;
use crate::store::{next_id, RepositoryError};
use crate::workflows::notices::{publish, Notice, Notifier};
use crate::workflows::prospecting::domain::LeadId;
use crate::workflows::prospecting::repository::ProspectRepository;

/// Meetings grouped under one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingDay {
    pub date: NaiveDate,
    pub meetings: Vec<Meeting>,
}

/// Meetings calendar and the personal task list.
pub struct ScheduleService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
}

impl<R, N> ScheduleService<R, N>
where
    R: ScheduleRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// All meetings in chronological order.
    pub fn meetings(&self) -> Result<Vec<Meeting>, ScheduleError> {
        let mut meetings = self.repository.meetings()?;
        meetings.sort_by(Meeting::chronological);
        Ok(meetings)
    }

    pub fn meetings_by_day(&self) -> Result<Vec<MeetingDay>, ScheduleError> {
        let mut days: Vec<MeetingDay> = Vec::new();
        for meeting in self.meetings()? {
            match days.last_mut() {
                Some(day) if day.date == meeting.date => day.meetings.push(meeting),
                _ => days.push(MeetingDay {
                    date: meeting.date,
                    meetings: vec![meeting],
                }),
            }
        }
        Ok(days)
    }

    /// Meetings dated after `today`.
    pub fn upcoming_count(&self, today: NaiveDate) -> Result<usize, ScheduleError> {
        let meetings = self.repository.meetings()?;
        Ok(meetings.iter().filter(|meeting| meeting.date > today).count())
    }

    pub fn schedule(&self, draft: MeetingDraft) -> Result<Meeting, ScheduleError> {
        let meeting = self.build_meeting(MeetingId(next_id("meeting")), draft)?;
        let stored = self.repository.insert_meeting(meeting)?;
        info!(meeting_id = %stored.id, date = %stored.date, "meeting scheduled");
        publish(
            self.notifier.as_ref(),
            Notice::success("Meeting scheduled successfully"),
        );
        Ok(stored)
    }

    pub fn reschedule(&self, id: &MeetingId, draft: MeetingDraft) -> Result<Meeting, ScheduleError> {
        if self.repository.meeting(id)?.is_none() {
            return Err(RepositoryError::NotFound.into());
        }
        let meeting = self.build_meeting(id.clone(), draft)?;
        self.repository.update_meeting(meeting.clone())?;
        publish(
            self.notifier.as_ref(),
            Notice::success("Meeting updated successfully"),
        );
        Ok(meeting)
    }

    pub fn cancel(&self, id: &MeetingId) -> Result<(), ScheduleError> {
        self.repository.delete_meeting(id)?;
        publish(self.notifier.as_ref(), Notice::info("Meeting deleted"));
        Ok(())
    }

    pub fn tasks(&self) -> Result<Vec<Task>, ScheduleError> {
        Ok(self.repository.tasks()?)
    }

    /// The first `limit` open tasks, in stored order.
    pub fn pending_tasks(&self, limit: usize) -> Result<Vec<Task>, ScheduleError> {
        let tasks = self.repository.tasks()?;
        Ok(tasks
            .into_iter()
            .filter(|task| !task.completed)
            .take(limit)
            .collect())
    }

    pub fn create_task(&self, draft: TaskDraft) -> Result<Task, ScheduleError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(ScheduleError::MissingFields);
        }

        let task = self.repository.insert_task(Task {
            id: TaskId(next_id("task")),
            title: title.to_string(),
            due: draft.due,
            priority: draft.priority,
            completed: false,
            kind: draft.kind,
            related_id: draft.related_id,
            related_name: draft.related_name,
        })?;
        info!(task_id = %task.id, "task created");
        Ok(task)
    }

    pub fn toggle_task(&self, id: &TaskId) -> Result<Task, ScheduleError> {
        let mut task = self.repository.task(id)?.ok_or(RepositoryError::NotFound)?;
        task.completed = !task.completed;
        self.repository.update_task(task.clone())?;
        Ok(task)
    }

    pub fn delete_task(&self, id: &TaskId) -> Result<(), ScheduleError> {
        self.repository.delete_task(id)?;
        Ok(())
    }

    fn build_meeting(&self, id: MeetingId, draft: MeetingDraft) -> Result<Meeting, ScheduleError> {
        let title = draft.title.trim();
        if title.is_empty() || draft.time.trim().is_empty() {
            return Err(ScheduleError::MissingFields);
        }
        let time = draft.time.trim();
        if NaiveTime::parse_from_str(time, TIME_FORMAT).is_err() {
            return Err(ScheduleError::InvalidTime(time.to_string()));
        }

        let lead = match &draft.lead_id {
            Some(lead_id) => Some(
                self.repository
                    .lead(lead_id)?
                    .ok_or_else(|| ScheduleError::UnknownLead(lead_id.clone()))?,
            ),
            None => None,
        };

        Ok(Meeting {
            id,
            title: title.to_string(),
            date: draft.date,
            time: time.to_string(),
            duration_minutes: draft.duration_minutes,
            kind: draft.kind,
            lead_id: lead.as_ref().map(|lead| lead.id.clone()),
            lead_name: lead.map(|lead| lead.name),
            notes: draft.notes,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Please fill in required fields")]
    MissingFields,
    #[error("meeting time `{0}` is not HH:MM")]
    InvalidTime(String),
    #[error("lead {0} does not exist")]
    UnknownLead(LeadId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
