use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum SkillTier {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl SkillTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    pub fn capitalized(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    pub fn promoted(&self) -> Self {
        match self {
            Self::Beginner => Self::Intermediate,
            _ => Self::Advanced,
        }
    }

    pub fn demoted(&self) -> Self {
        match self {
            Self::Advanced => Self::Intermediate,
            _ => Self::Beginner,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "beginner" => Self::Beginner,
            "advanced" => Self::Advanced,
            _ => Self::Intermediate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Pace {
    Slow,
    #[default]
    Moderate,
    Fast,
}

impl Pace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Moderate => "moderate",
            Self::Fast => "fast",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "slow" => Self::Slow,
            "fast" => Self::Fast,
            _ => Self::Moderate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum SessionLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl SessionLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "short" => Self::Short,
            "long" => Self::Long,
            _ => Self::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    SingleChoice,
    MultiChoice,
    InfoSlide,
}

/// One submitted quiz answer. Discarded after scoring; only the derived
/// profile persists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question_id: String,
    pub kind: QuestionKind,
    pub value: AnswerValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    One(String),
    Many(Vec<String>),
}

impl AnswerValue {
    pub fn as_one(&self) -> Option<&str> {
        match self {
            Self::One(v) => Some(v),
            Self::Many(_) => None,
        }
    }

    pub fn as_many(&self) -> Option<&[String]> {
        match self {
            Self::One(_) => None,
            Self::Many(v) => Some(v),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProfile {
    pub skill_level: SkillTier,
    pub pace: Pace,
    pub session_length: SessionLength,
    pub tech_level: i32,
    pub motivation: i32,
    pub confidence: i32,
    pub goals: BTreeSet<String>,
    pub challenges: BTreeSet<String>,
    pub preferences: BTreeSet<String>,
    pub created_at: i64,
}

impl Default for LearnerProfile {
    fn default() -> Self {
        Self {
            skill_level: SkillTier::default(),
            pace: Pace::default(),
            session_length: SessionLength::default(),
            tech_level: 0,
            motivation: 3,
            confidence: 3,
            goals: BTreeSet::new(),
            challenges: BTreeSet::new(),
            preferences: BTreeSet::new(),
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

impl LearnerProfile {
    /// Snapshot with a rewritten skill tier. Quiz-derived fields are kept
    /// verbatim; only the tier moves with lesson performance.
    pub fn with_skill_level(&self, tier: SkillTier) -> Self {
        Self {
            skill_level: tier,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonStub {
    pub id: String,
    pub title: String,
    pub duration_minutes: i32,
    pub difficulty: SkillTier,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub lessons: Vec<LessonStub>,
    pub next_lesson_index: usize,
    pub completed_lessons: BTreeSet<String>,
    pub estimated_duration: i32,
    pub created_at: i64,
}

impl LearningPath {
    pub fn lesson_index(&self, lesson_id: &str) -> Option<usize> {
        self.lessons.iter().position(|l| l.id == lesson_id)
    }

    pub fn is_finished(&self) -> bool {
        self.next_lesson_index >= self.lessons.len()
    }
}

/// Raw telemetry for one lesson attempt, as reported by the UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_score: Option<f64>,
    pub sandbox_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<f64>,
}

/// Cursor/set delta applied to a stored path when a lesson completes.
/// Applied via a store-side merge, never a blind record overwrite, so two
/// concurrent completions cannot erase each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionMerge {
    pub lesson_id: String,
    pub next_lesson_index: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentOutcome {
    pub profile: LearnerProfile,
    pub path: LearningPath,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionOutcome {
    pub performance: f64,
    pub previous_tier: SkillTier,
    pub recommended_tier: SkillTier,
    pub path: LearningPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_steps_saturate() {
        assert_eq!(SkillTier::Advanced.promoted(), SkillTier::Advanced);
        assert_eq!(SkillTier::Beginner.demoted(), SkillTier::Beginner);
        assert_eq!(SkillTier::Beginner.promoted(), SkillTier::Intermediate);
        assert_eq!(SkillTier::Advanced.demoted(), SkillTier::Intermediate);
    }

    #[test]
    fn tier_parse_defaults_to_intermediate() {
        assert_eq!(SkillTier::parse("ADVANCED"), SkillTier::Advanced);
        assert_eq!(SkillTier::parse("unknown"), SkillTier::Intermediate);
    }

    #[test]
    fn answer_value_accessors() {
        let one = AnswerValue::One("a".into());
        let many = AnswerValue::Many(vec!["a".into(), "b".into()]);
        assert_eq!(one.as_one(), Some("a"));
        assert!(one.as_many().is_none());
        assert_eq!(many.as_many().map(|v| v.len()), Some(2));
    }
}
