use super::domain::{Deal, DealId, DealStage};
use crate::store::RepositoryError;

/// Deal storage; new deals append to the end of the board.
pub trait DealRepository: Send + Sync {
    fn deals(&self) -> Result<Vec<Deal>, RepositoryError>;
    fn deal(&self, id: &DealId) -> Result<Option<Deal>, RepositoryError>;
    fn insert_deal(&self, deal: Deal) -> Result<Deal, RepositoryError>;
    fn update_deal(&self, deal: Deal) -> Result<(), RepositoryError>;
    fn update_stage(&self, id: &DealId, stage: DealStage) -> Result<(), RepositoryError>;
    fn delete_deal(&self, id: &DealId) -> Result<(), RepositoryError>;
}
