use super::domain::{Meeting, MeetingId, Task, TaskId};
use crate::store::RepositoryError;

pub trait ScheduleRepository: Send + Sync {
    fn meetings(&self) -> Result<Vec<Meeting>, RepositoryError>;
    fn meeting(&self, id: &MeetingId) -> Result<Option<Meeting>, RepositoryError>;
    fn insert_meeting(&self, meeting: Meeting) -> Result<Meeting, RepositoryError>;
    fn update_meeting(&self, meeting: Meeting) -> Result<(), RepositoryError>;
    fn delete_meeting(&self, id: &MeetingId) -> Result<(), RepositoryError>;

    fn tasks(&self) -> Result<Vec<Task>, RepositoryError>;
    fn task(&self, id: &TaskId) -> Result<Option<Task>, RepositoryError>;
    fn insert_task(&self, task: Task) -> Result<Task, RepositoryError>;
    fn update_task(&self, task: Task) -> Result<(), RepositoryError>;
    fn delete_task(&self, id: &TaskId) -> Result<(), RepositoryError>;
}
