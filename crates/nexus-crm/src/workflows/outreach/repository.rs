use super::domain::{CampaignId, LinkedInCampaign, Sequence, SequenceId};
use crate::store::RepositoryError;

/// Storage for email sequences and LinkedIn campaigns, steps included.
///
/// New sequences append; new campaigns are listed first.
pub trait OutreachRepository: Send + Sync {
    fn sequences(&self) -> Result<Vec<Sequence>, RepositoryError>;
    fn sequence(&self, id: &SequenceId) -> Result<Option<Sequence>, RepositoryError>;
    fn insert_sequence(&self, sequence: Sequence) -> Result<Sequence, RepositoryError>;
    fn update_sequence(&self, sequence: Sequence) -> Result<(), RepositoryError>;
    fn delete_sequence(&self, id: &SequenceId) -> Result<(), RepositoryError>;

    fn campaigns(&self) -> Result<Vec<LinkedInCampaign>, RepositoryError>;
    fn campaign(&self, id: &CampaignId) -> Result<Option<LinkedInCampaign>, RepositoryError>;
    fn insert_campaign(&self, campaign: LinkedInCampaign)
        -> Result<LinkedInCampaign, RepositoryError>;
    fn update_campaign(&self, campaign: LinkedInCampaign) -> Result<(), RepositoryError>;
    fn delete_campaign(&self, id: &CampaignId) -> Result<(), RepositoryError>;
}
