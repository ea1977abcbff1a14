use std::sync::Arc;

use tokio::sync::RwLock;

use crate::adaptive::adapt::{adapt_lesson, AdaptedLesson};
use crate::adaptive::config::AdaptiveConfig;
use crate::adaptive::difficulty::next_tier;
use crate::adaptive::path::synthesize_path;
use crate::adaptive::performance::performance_score;
use crate::adaptive::quiz::{assessment_questions, QuizQuestion};
use crate::adaptive::scorer::score_assessment;
use crate::adaptive::types::{
    AnswerRecord, AssessmentOutcome, CompletionOutcome, CompletionResult, LearningPath, SkillTier,
};
use crate::services::learning_path;
use crate::store::{DocumentStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("no learner profile for user {0}")]
    ProfileMissing(String),
    #[error("no learning path for user {0}")]
    PathMissing(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Orchestrates the five adaptation components around the document store.
/// The components themselves are pure; everything async lives here.
pub struct AdaptiveEngine {
    config: Arc<RwLock<AdaptiveConfig>>,
    store: Arc<dyn DocumentStore>,
    questions: Vec<QuizQuestion>,
}

impl AdaptiveEngine {
    pub fn new(config: AdaptiveConfig, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            store,
            questions: assessment_questions(),
        }
    }

    pub async fn get_config(&self) -> AdaptiveConfig {
        self.config.read().await.clone()
    }

    pub async fn reload_config(&self) {
        let new_config = AdaptiveConfig::from_env();
        {
            let mut config = self.config.write().await;
            *config = new_config;
        }
        tracing::info!("adaptive config reloaded");
    }

    /// Scores the quiz, persists the derived profile, and synthesizes a
    /// fresh path. Retaking the assessment replaces any existing path.
    pub async fn complete_assessment(
        &self,
        user_id: &str,
        answers: &[AnswerRecord],
    ) -> Result<AssessmentOutcome, EngineError> {
        let config = self.config.read().await.clone();

        let profile = score_assessment(answers, &self.questions, &config.scorer);
        self.store.put_profile(user_id, &profile).await?;

        let mut path = synthesize_path(&profile, &config.path);
        path.user_id = user_id.to_string();
        learning_path::regenerate_path(self.store.as_ref(), user_id, &path).await?;

        tracing::info!(
            user_id,
            tier = profile.skill_level.as_str(),
            pace = profile.pace.as_str(),
            lessons = path.lessons.len(),
            "assessment scored, path generated"
        );

        Ok(AssessmentOutcome { profile, path })
    }

    /// Resolves one lesson document at the given tier. Tier fallbacks are
    /// silent; only a wholly absent document surfaces as an error.
    pub async fn adapted_lesson(
        &self,
        path_id: &str,
        module_id: &str,
        lesson_id: &str,
        tier: SkillTier,
    ) -> Result<AdaptedLesson, EngineError> {
        let config = self.config.read().await.clone();
        let doc = self.store.get_lesson(path_id, module_id, lesson_id).await?;
        Ok(adapt_lesson(&doc, tier, &config.adapt))
    }

    /// Convenience wrapper that resolves the tier from the stored profile.
    pub async fn adapted_lesson_for_user(
        &self,
        user_id: &str,
        path_id: &str,
        module_id: &str,
        lesson_id: &str,
    ) -> Result<AdaptedLesson, EngineError> {
        let tier = self.current_tier(user_id).await?;
        self.adapted_lesson(path_id, module_id, lesson_id, tier).await
    }

    /// Records a completed lesson, scores the attempt, and feeds the
    /// resulting tier recommendation back into the stored profile.
    pub async fn complete_lesson(
        &self,
        user_id: &str,
        lesson_id: &str,
        result: Option<CompletionResult>,
    ) -> Result<CompletionOutcome, EngineError> {
        let config = self.config.read().await.clone();

        let profile = self
            .store
            .get_profile(user_id)
            .await?
            .ok_or_else(|| EngineError::ProfileMissing(user_id.to_string()))?;

        let path =
            learning_path::apply_completion(self.store.as_ref(), user_id, lesson_id, result.as_ref())
                .await
                .map_err(|err| match err {
                    StoreError::NotFound(_) => EngineError::PathMissing(user_id.to_string()),
                    other => EngineError::Store(other),
                })?;

        let performance = performance_score(result.as_ref(), &config.performance);
        let previous_tier = profile.skill_level;
        let recommended_tier = next_tier(previous_tier, performance, &config.thresholds);

        if recommended_tier != previous_tier {
            let updated = profile.with_skill_level(recommended_tier);
            self.store.put_profile(user_id, &updated).await?;
            tracing::info!(
                user_id,
                lesson_id,
                performance,
                from = previous_tier.as_str(),
                to = recommended_tier.as_str(),
                "skill tier adjusted"
            );
        } else {
            tracing::debug!(user_id, lesson_id, performance, "skill tier unchanged");
        }

        Ok(CompletionOutcome {
            performance,
            previous_tier,
            recommended_tier,
            path,
        })
    }

    pub async fn get_path(&self, user_id: &str) -> Result<LearningPath, EngineError> {
        self.store
            .get_path(user_id)
            .await?
            .ok_or_else(|| EngineError::PathMissing(user_id.to_string()))
    }

    async fn current_tier(&self, user_id: &str) -> Result<SkillTier, EngineError> {
        Ok(self
            .store
            .get_profile(user_id)
            .await?
            .map(|p| p.skill_level)
            .unwrap_or_default())
    }
}
