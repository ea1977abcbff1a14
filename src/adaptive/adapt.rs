//! Resolves a stored lesson document against a skill tier.
//!
//! Each variant field falls back independently along `tier ->
//! intermediate -> flat payload`; rewards and timing resolve through their
//! own maps, never through the content fallback. Adaptation is total: any
//! structurally valid document produces a view, including documents with
//! no tier structure at all.

use serde::{Deserialize, Serialize};

use crate::adaptive::config::AdaptDefaults;
use crate::adaptive::types::SkillTier;

/// Tier-keyed variant holder. Absent keys fall back to `intermediate`.
/// Unknown fields are rejected so an untagged [`VariantSet`] can tell a
/// tier map apart from a flat payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TierMap<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beginner: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediate: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced: Option<T>,
}

impl<T> TierMap<T> {
    pub fn get(&self, tier: SkillTier) -> Option<&T> {
        match tier {
            SkillTier::Beginner => self.beginner.as_ref(),
            SkillTier::Intermediate => self.intermediate.as_ref(),
            SkillTier::Advanced => self.advanced.as_ref(),
        }
    }

    /// Ordered fallback: requested tier, then intermediate.
    pub fn resolve(&self, tier: SkillTier) -> Option<&T> {
        self.get(tier).or(self.intermediate.as_ref())
    }
}

/// A lesson field is either authored per tier or as one flat payload that
/// serves every tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantSet<T> {
    Tiered(TierMap<T>),
    Flat(T),
}

impl<T> VariantSet<T> {
    fn resolve(&self, tier: SkillTier) -> Option<&T> {
        match self {
            Self::Tiered(map) => map.resolve(tier),
            Self::Flat(value) => Some(value),
        }
    }
}

fn resolve_field<T>(field: Option<&VariantSet<T>>, tier: SkillTier) -> Option<&T> {
    field.and_then(|f| f.resolve(tier))
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonContent {
    pub core_concept: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SandboxSpec {
    pub instructions: String,
    #[serde(default)]
    pub starter_prompt: String,
    #[serde(default)]
    pub exercises: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSpec {
    #[serde(default)]
    pub questions: Vec<AssessmentQuestion>,
    #[serde(default)]
    pub passing_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub answer_index: usize,
}

/// Catalog entry as stored. Authored externally; read-only here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDocument {
    pub id: String,
    pub path_id: String,
    pub module_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_concept: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<VariantSet<LessonContent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbox: Option<VariantSet<SandboxSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<VariantSet<AssessmentSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp_rewards: Option<TierMap<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<TierMap<i32>>,
}

/// Request-scoped projection of one document at one tier. Never persisted;
/// recomputed on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptedLesson {
    pub lesson_id: String,
    pub title: String,
    pub tier: SkillTier,
    pub content: LessonContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbox: Option<SandboxSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<AssessmentSpec>,
    pub xp_reward: i32,
    pub estimated_time: i32,
}

pub fn adapt_lesson(
    doc: &LessonDocument,
    tier: SkillTier,
    defaults: &AdaptDefaults,
) -> AdaptedLesson {
    let content = resolve_field(doc.content.as_ref(), tier)
        .cloned()
        .unwrap_or_else(|| fallback_content(doc));
    let sandbox = resolve_field(doc.sandbox.as_ref(), tier).cloned();
    let assessment = resolve_field(doc.assessment.as_ref(), tier).cloned();

    if doc.content.is_none() && doc.sandbox.is_none() && doc.assessment.is_none() {
        tracing::debug!(lesson_id = %doc.id, "lesson has no tier variants, serving fallback view");
    }

    AdaptedLesson {
        lesson_id: doc.id.clone(),
        title: doc.title.clone(),
        tier,
        content,
        sandbox,
        assessment,
        xp_reward: doc
            .xp_rewards
            .as_ref()
            .and_then(|m| m.resolve(tier))
            .copied()
            .unwrap_or(defaults.xp_reward),
        estimated_time: doc
            .estimated_time
            .as_ref()
            .and_then(|m| m.resolve(tier))
            .copied()
            .unwrap_or(defaults.estimated_minutes),
    }
}

/// Minimal view for documents with no variant structure: top-level concept,
/// empty exercise and question collections.
fn fallback_content(doc: &LessonDocument) -> LessonContent {
    LessonContent {
        core_concept: doc.core_concept.clone().unwrap_or_default(),
        explanation: String::new(),
        examples: Vec::new(),
    }
}
