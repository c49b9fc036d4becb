use std::sync::Arc;

use tracing::{info, warn};

use super::domain::{
    ContentPost, EmailBrief, GeneratedContent, IcebreakerRequest, PostDraft, PostId,
    RefineRequest, WEEKDAYS,
};
use super::generator::{ContentGenerator, GeneratorError};
use super::prompts;
use super::repository::ContentRepository;
use crate::store::{next_id, RepositoryError};
use crate::workflows::notices::{publish, Notice, Notifier};
use crate::workflows::prospecting::domain::LeadId;
use crate::workflows::prospecting::repository::ProspectRepository;

/// Content calendar plus AI-assisted copywriting.
pub struct ContentService<R, N, G> {
    repository: Arc<R>,
    notifier: Arc<N>,
    generator: Arc<G>,
    default_api_key: Option<String>,
}

impl<R, N, G> ContentService<R, N, G>
where
    R: ContentRepository + ProspectRepository + 'static,
    N: Notifier + 'static,
    G: ContentGenerator + 'static,
{
    pub fn new(
        repository: Arc<R>,
        notifier: Arc<N>,
        generator: Arc<G>,
        default_api_key: Option<String>,
    ) -> Self {
        Self {
            repository,
            notifier,
            generator,
            default_api_key,
        }
    }

    /// Posts ordered by weekday.
    pub fn posts(&self) -> Result<Vec<ContentPost>, ContentError> {
        let mut posts = self.repository.posts()?;
        posts.sort_by_key(|post| post.day);
        Ok(posts)
    }

    pub fn schedule_post(&self, draft: PostDraft) -> Result<ContentPost, ContentError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(ContentError::TitleRequired);
        }
        if usize::from(draft.day) >= WEEKDAYS.len() {
            return Err(ContentError::InvalidDay(draft.day));
        }

        let post = self.repository.insert_post(ContentPost {
            id: PostId(next_id("post")),
            title: title.to_string(),
            platform: draft.platform,
            day: draft.day,
            time: draft.time,
        })?;
        info!(post_id = %post.id, day = post.day, "post scheduled");
        publish(
            self.notifier.as_ref(),
            Notice::success("Post scheduled successfully"),
        );
        Ok(post)
    }

    pub fn delete_post(&self, id: &PostId) -> Result<(), ContentError> {
        self.repository.delete_post(id)?;
        Ok(())
    }

    pub async fn generate_email(&self, brief: EmailBrief) -> Result<GeneratedContent, ContentError> {
        if brief.topic.trim().is_empty() || brief.recipient.trim().is_empty() {
            return Err(ContentError::BriefIncomplete);
        }

        let key = self.api_key(brief.api_key.as_deref());
        let content = match key {
            Some(key) => self.run(&prompts::sales_email(&brief), &key).await?,
            None => mock(prompts::mock_email(&brief)),
        };
        publish(
            self.notifier.as_ref(),
            Notice::success("Content generated successfully!"),
        );
        Ok(content)
    }

    pub async fn generate_icebreaker(
        &self,
        request: IcebreakerRequest,
    ) -> Result<GeneratedContent, ContentError> {
        let lead = self
            .repository
            .lead(&request.lead_id)?
            .ok_or_else(|| ContentError::UnknownLead(request.lead_id.clone()))?;

        match self.api_key(request.api_key.as_deref()) {
            Some(key) => self.run(&prompts::icebreaker(&lead), &key).await,
            None => Ok(mock(prompts::mock_icebreaker(&lead))),
        }
    }

    /// Rewrite earlier output following a short instruction such as "shorter".
    pub async fn refine(&self, request: RefineRequest) -> Result<GeneratedContent, ContentError> {
        if request.original.trim().is_empty() || request.instruction.trim().is_empty() {
            return Err(ContentError::BriefIncomplete);
        }

        let instruction = request.instruction.trim();
        let content = match self.api_key(request.api_key.as_deref()) {
            Some(key) => {
                self.run(&prompts::refinement(&request.original, instruction), &key)
                    .await?
            }
            None => mock(prompts::mock_refinement(&request.original, instruction)),
        };
        publish(
            self.notifier.as_ref(),
            Notice::success(format!("Refined: {instruction}")),
        );
        Ok(content)
    }

    fn api_key(&self, override_key: Option<&str>) -> Option<String> {
        override_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .or_else(|| self.default_api_key.clone())
    }

    async fn run(&self, prompt: &str, key: &str) -> Result<GeneratedContent, ContentError> {
        match self.generator.generate(prompt, key).await {
            Ok(text) => Ok(GeneratedContent { text, mock: false }),
            Err(error) => {
                warn!(%error, "content generation failed");
                publish(
                    self.notifier.as_ref(),
                    Notice::error("Error calling Gemini API. Check Settings."),
                );
                Err(ContentError::Generator(error))
            }
        }
    }
}

fn mock(text: String) -> GeneratedContent {
    GeneratedContent { text, mock: true }
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("post title is required")]
    TitleRequired,
    #[error("day {0} is outside Sunday (0) to Saturday (6)")]
    InvalidDay(u8),
    #[error("topic and recipient are required")]
    BriefIncomplete,
    #[error("lead {0} does not exist")]
    UnknownLead(LeadId),
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
