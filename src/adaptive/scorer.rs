//! Reduces submitted quiz answers into a [`LearnerProfile`].
//!
//! Scoring is last-writer-wins for the scalar signals (pace, time, tech,
//! motivation, confidence) since each is normally asked once, and additive
//! for skill points. Unanswered questions leave the configured defaults in
//! place; nothing here can fail.

use std::collections::BTreeSet;

use crate::adaptive::config::ScorerDefaults;
use crate::adaptive::quiz::{QuizQuestion, SkillPoints, TagBucket};
use crate::adaptive::types::{
    AnswerRecord, LearnerProfile, Pace, QuestionKind, SessionLength, SkillTier,
};

struct Accumulators {
    skill: SkillPoints,
    pace_score: i32,
    time_score: i32,
    tech_level: i32,
    motivation: i32,
    confidence: i32,
    goals: BTreeSet<String>,
    challenges: BTreeSet<String>,
    preferences: BTreeSet<String>,
}

impl Accumulators {
    fn new(defaults: &ScorerDefaults) -> Self {
        Self {
            skill: SkillPoints::default(),
            pace_score: defaults.pace_score,
            time_score: defaults.time_score,
            tech_level: defaults.tech_level,
            motivation: defaults.motivation,
            confidence: defaults.confidence,
            goals: BTreeSet::new(),
            challenges: BTreeSet::new(),
            preferences: BTreeSet::new(),
        }
    }
}

pub fn score_assessment(
    answers: &[AnswerRecord],
    questions: &[QuizQuestion],
    defaults: &ScorerDefaults,
) -> LearnerProfile {
    let mut acc = Accumulators::new(defaults);

    for answer in answers {
        let Some(question) = questions.iter().find(|q| q.id == answer.question_id) else {
            continue;
        };

        match question.kind {
            QuestionKind::SingleChoice => {
                let Some(option) = answer.value.as_one().and_then(|id| question.option(id))
                else {
                    continue;
                };
                if let Some(ref points) = option.skill_points {
                    acc.skill.add(points);
                }
                if let Some(pace) = option.pace_score {
                    acc.pace_score = pace;
                }
                if let Some(time) = option.time_score {
                    acc.time_score = time;
                }
                if let Some(tech) = option.tech_level {
                    acc.tech_level = tech;
                }
                if let Some(motivation) = option.motivation {
                    acc.motivation = motivation;
                }
                if let Some(confidence) = option.confidence {
                    acc.confidence = confidence;
                }
            }
            QuestionKind::MultiChoice => {
                let Some(values) = answer.value.as_many() else {
                    continue;
                };
                let target = match question.bucket {
                    Some(TagBucket::Goals) => &mut acc.goals,
                    Some(TagBucket::Challenges) => &mut acc.challenges,
                    Some(TagBucket::Preferences) => &mut acc.preferences,
                    None => continue,
                };
                target.extend(values.iter().cloned());
            }
            QuestionKind::InfoSlide => {}
        }
    }

    LearnerProfile {
        skill_level: resolve_tier(&acc.skill),
        pace: resolve_pace(acc.pace_score),
        session_length: resolve_session_length(acc.time_score),
        tech_level: acc.tech_level,
        motivation: acc.motivation,
        confidence: acc.confidence,
        goals: acc.goals,
        challenges: acc.challenges,
        preferences: acc.preferences,
        created_at: chrono::Utc::now().timestamp_millis(),
    }
}

/// Ties break toward the higher tier; all-zero points land on beginner.
fn resolve_tier(points: &SkillPoints) -> SkillTier {
    if points.advanced > 0
        && points.advanced >= points.intermediate
        && points.advanced >= points.beginner
    {
        SkillTier::Advanced
    } else if points.intermediate > 0 && points.intermediate >= points.beginner {
        SkillTier::Intermediate
    } else {
        SkillTier::Beginner
    }
}

fn resolve_pace(score: i32) -> Pace {
    if score >= 4 {
        Pace::Fast
    } else if score <= 2 {
        Pace::Slow
    } else {
        Pace::Moderate
    }
}

fn resolve_session_length(score: i32) -> SessionLength {
    if score >= 3 {
        SessionLength::Long
    } else if score <= 1 {
        SessionLength::Short
    } else {
        SessionLength::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptive::quiz::assessment_questions;
    use crate::adaptive::types::AnswerValue;

    fn single(question_id: &str, option_id: &str) -> AnswerRecord {
        AnswerRecord {
            question_id: question_id.to_string(),
            kind: QuestionKind::SingleChoice,
            value: AnswerValue::One(option_id.to_string()),
        }
    }

    fn multi(question_id: &str, option_ids: &[&str]) -> AnswerRecord {
        AnswerRecord {
            question_id: question_id.to_string(),
            kind: QuestionKind::MultiChoice,
            value: AnswerValue::Many(option_ids.iter().map(|s| s.to_string()).collect()),
        }
    }

    #[test]
    fn empty_answers_yield_defaults() {
        let profile =
            score_assessment(&[], &assessment_questions(), &ScorerDefaults::default());
        assert_eq!(profile.skill_level, SkillTier::Beginner);
        assert_eq!(profile.pace, Pace::Moderate);
        assert_eq!(profile.session_length, SessionLength::Medium);
        assert_eq!(profile.tech_level, 0);
        assert_eq!(profile.motivation, 3);
        assert_eq!(profile.confidence, 3);
        assert!(profile.goals.is_empty());
    }

    #[test]
    fn skill_points_accumulate_across_questions() {
        let answers = vec![single("experience", "daily"), single("concepts", "builder")];
        let profile = score_assessment(
            &answers,
            &assessment_questions(),
            &ScorerDefaults::default(),
        );
        // daily: (0,1,3); builder: (0,0,3) => advanced 6 dominates
        assert_eq!(profile.skill_level, SkillTier::Advanced);
        assert_eq!(profile.tech_level, 4);
    }

    #[test]
    fn tie_breaks_toward_higher_tier() {
        assert_eq!(
            resolve_tier(&SkillPoints::new(2, 2, 2)),
            SkillTier::Advanced
        );
        assert_eq!(resolve_tier(&SkillPoints::new(2, 2, 0)), SkillTier::Intermediate);
        assert_eq!(resolve_tier(&SkillPoints::new(0, 0, 0)), SkillTier::Beginner);
        assert_eq!(resolve_tier(&SkillPoints::new(3, 1, 1)), SkillTier::Beginner);
    }

    #[test]
    fn scalar_fields_are_last_writer_wins() {
        // Answering pace twice keeps the later value instead of summing.
        let answers = vec![single("pace", "sprint"), single("pace", "gentle")];
        let profile = score_assessment(
            &answers,
            &assessment_questions(),
            &ScorerDefaults::default(),
        );
        assert_eq!(profile.pace, Pace::Slow);
    }

    #[test]
    fn multi_choice_routes_into_tag_buckets() {
        let answers = vec![
            multi("goals", &["content_creation", "prompt_engineering"]),
            multi("challenges", &["too_technical"]),
            multi("formats", &["hands_on", "quizzes"]),
        ];
        let profile = score_assessment(
            &answers,
            &assessment_questions(),
            &ScorerDefaults::default(),
        );
        assert!(profile.goals.contains("content_creation"));
        assert!(profile.goals.contains("prompt_engineering"));
        assert!(profile.challenges.contains("too_technical"));
        assert_eq!(profile.preferences.len(), 2);
    }

    #[test]
    fn unknown_question_or_option_is_ignored() {
        let answers = vec![single("experience", "nope"), single("ghost", "daily")];
        let profile = score_assessment(
            &answers,
            &assessment_questions(),
            &ScorerDefaults::default(),
        );
        assert_eq!(profile.skill_level, SkillTier::Beginner);
    }

    #[test]
    fn session_length_thresholds() {
        let short = vec![single("session", "15min")];
        let long = vec![single("session", "hour")];
        let questions = assessment_questions();
        let defaults = ScorerDefaults::default();
        assert_eq!(
            score_assessment(&short, &questions, &defaults).session_length,
            SessionLength::Short
        );
        assert_eq!(
            score_assessment(&long, &questions, &defaults).session_length,
            SessionLength::Long
        );
    }
}
