//! Assembles a learning path from a learner profile.
//!
//! The synthesis is an ordered pipeline of pure steps over an immutable
//! lesson list. Step order is load-bearing: fast-pace truncation runs
//! after goal bonuses are appended, so a fast pace can drop a bonus lesson
//! off the end. That is the documented product behavior, not an accident
//! to repair here.

use crate::adaptive::config::PathRules;
use crate::adaptive::path::catalog;
use crate::adaptive::types::{LearnerProfile, LearningPath, LessonStub, Pace, SessionLength};

pub fn synthesize_path(profile: &LearnerProfile, rules: &PathRules) -> LearningPath {
    let lessons = base_lessons(profile);
    let lessons = append_goal_bonuses(lessons, profile);
    let lessons = adjust_for_pace(lessons, profile.pace, rules);
    let lessons = adjust_for_session_length(lessons, profile.session_length, rules);

    let estimated_duration = lessons.iter().map(|l| l.duration_minutes).sum();

    LearningPath {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: String::new(),
        title: format!("{} AI Learning Path", profile.skill_level.capitalized()),
        lessons,
        next_lesson_index: 0,
        completed_lessons: Default::default(),
        estimated_duration,
        created_at: chrono::Utc::now().timestamp_millis(),
    }
}

fn base_lessons(profile: &LearnerProfile) -> Vec<LessonStub> {
    catalog::tier_templates(profile.skill_level)
}

fn append_goal_bonuses(mut lessons: Vec<LessonStub>, profile: &LearnerProfile) -> Vec<LessonStub> {
    lessons.extend(catalog::goal_bonuses(&profile.goals, profile.skill_level));
    lessons
}

fn adjust_for_pace(mut lessons: Vec<LessonStub>, pace: Pace, rules: &PathRules) -> Vec<LessonStub> {
    match pace {
        Pace::Fast => {
            if lessons.len() > rules.fast_pace_cap {
                lessons.truncate(rules.fast_pace_cap);
            }
            lessons
        }
        Pace::Slow => {
            let tier = lessons
                .first()
                .map(|l| l.difficulty)
                .unwrap_or_default();
            let index = rules.review_insert_index.min(lessons.len());
            lessons.insert(index, catalog::review_lesson(tier));
            lessons
        }
        Pace::Moderate => lessons,
    }
}

fn adjust_for_session_length(
    mut lessons: Vec<LessonStub>,
    session_length: SessionLength,
    rules: &PathRules,
) -> Vec<LessonStub> {
    if session_length == SessionLength::Short {
        for lesson in &mut lessons {
            lesson.duration_minutes = lesson.duration_minutes.min(rules.short_session_cap_minutes);
        }
    }
    lessons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptive::types::SkillTier;

    fn profile(tier: SkillTier, pace: Pace, goals: &[&str]) -> LearnerProfile {
        LearnerProfile {
            skill_level: tier,
            pace,
            goals: goals.iter().map(|g| g.to_string()).collect(),
            ..Default::default()
        }
    }

    fn rules() -> PathRules {
        PathRules::default()
    }

    #[test]
    fn slow_beginner_gets_review_at_index_two() {
        let path = synthesize_path(
            &profile(SkillTier::Beginner, Pace::Slow, &[]),
            &rules(),
        );
        assert_eq!(path.lessons.len(), 5);
        assert_eq!(path.lessons[2].id, "r-01");
        assert_eq!(path.lessons[3].id, "b-03");
    }

    #[test]
    fn fast_intermediate_with_one_goal_keeps_all_five() {
        let path = synthesize_path(
            &profile(SkillTier::Intermediate, Pace::Fast, &["content_creation"]),
            &rules(),
        );
        assert_eq!(path.lessons.len(), 5);
        assert_eq!(path.lessons[4].id, "g-content");
    }

    #[test]
    fn fast_truncation_drops_trailing_goal_bonuses() {
        let path = synthesize_path(
            &profile(
                SkillTier::Advanced,
                Pace::Fast,
                &["content_creation", "work_productivity", "prompt_engineering"],
            ),
            &rules(),
        );
        // 4 base + 3 bonuses = 7, capped to 6: the prompt bonus is gone.
        assert_eq!(path.lessons.len(), 6);
        assert!(path.lessons.iter().all(|l| l.id != "g-prompt"));
        assert_eq!(path.lessons[5].id, "g-work");
    }

    #[test]
    fn short_sessions_clamp_durations_without_reordering() {
        let mut p = profile(SkillTier::Advanced, Pace::Moderate, &[]);
        p.session_length = SessionLength::Short;
        let path = synthesize_path(&p, &rules());
        assert_eq!(path.lessons.len(), 4);
        assert!(path.lessons.iter().all(|l| l.duration_minutes <= 25));
        assert_eq!(path.lessons[0].id, "a-01");
        assert_eq!(path.estimated_duration, 4 * 25);
    }

    #[test]
    fn estimated_duration_is_the_sum_of_listed_durations() {
        let path = synthesize_path(
            &profile(SkillTier::Beginner, Pace::Moderate, &["work_productivity"]),
            &rules(),
        );
        let sum: i32 = path.lessons.iter().map(|l| l.duration_minutes).sum();
        assert_eq!(path.estimated_duration, sum);
    }

    #[test]
    fn title_names_the_tier() {
        let path = synthesize_path(
            &profile(SkillTier::Intermediate, Pace::Moderate, &[]),
            &rules(),
        );
        assert_eq!(path.title, "Intermediate AI Learning Path");
        assert_eq!(path.next_lesson_index, 0);
        assert!(path.completed_lessons.is_empty());
    }

    #[test]
    fn synthesis_is_deterministic_for_a_fixed_profile() {
        let p = profile(
            SkillTier::Intermediate,
            Pace::Slow,
            &["prompt_engineering", "content_creation"],
        );
        let a = synthesize_path(&p, &rules());
        let b = synthesize_path(&p, &rules());
        assert_eq!(a.lessons, b.lessons);
        assert_eq!(a.estimated_duration, b.estimated_duration);
        assert_eq!(a.title, b.title);
    }
}
