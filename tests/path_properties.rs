//! Property-based tests for the pure adaptation components.

use std::collections::BTreeSet;

use proptest::prelude::*;

use ailit_adaptive::adaptive::adapt::{
    adapt_lesson, LessonContent, LessonDocument, TierMap, VariantSet,
};
use ailit_adaptive::adaptive::config::{
    AdaptDefaults, DifficultyThresholds, PathRules, PerformanceWeights,
};
use ailit_adaptive::adaptive::difficulty::next_tier;
use ailit_adaptive::adaptive::path::synthesize_path;
use ailit_adaptive::adaptive::performance::performance_score;
use ailit_adaptive::adaptive::types::{
    CompletionResult, LearnerProfile, Pace, SessionLength, SkillTier,
};

fn tier_rank(tier: SkillTier) -> u8 {
    match tier {
        SkillTier::Beginner => 0,
        SkillTier::Intermediate => 1,
        SkillTier::Advanced => 2,
    }
}

fn arb_tier() -> impl Strategy<Value = SkillTier> {
    prop_oneof![
        Just(SkillTier::Beginner),
        Just(SkillTier::Intermediate),
        Just(SkillTier::Advanced),
    ]
}

fn arb_pace() -> impl Strategy<Value = Pace> {
    prop_oneof![Just(Pace::Slow), Just(Pace::Moderate), Just(Pace::Fast)]
}

fn arb_session_length() -> impl Strategy<Value = SessionLength> {
    prop_oneof![
        Just(SessionLength::Short),
        Just(SessionLength::Medium),
        Just(SessionLength::Long),
    ]
}

fn arb_goals() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set(
        prop_oneof![
            Just("content_creation".to_string()),
            Just("work_productivity".to_string()),
            Just("prompt_engineering".to_string()),
            Just("general_literacy".to_string()),
            "[a-z_]{3,16}",
        ],
        0..5,
    )
}

fn arb_profile() -> impl Strategy<Value = LearnerProfile> {
    (arb_tier(), arb_pace(), arb_session_length(), arb_goals()).prop_map(
        |(skill_level, pace, session_length, goals)| LearnerProfile {
            skill_level,
            pace,
            session_length,
            goals,
            ..Default::default()
        },
    )
}

fn arb_content() -> impl Strategy<Value = LessonContent> + Clone {
    "[a-z ]{1,32}".prop_map(|core_concept| LessonContent {
        core_concept,
        explanation: String::new(),
        examples: Vec::new(),
    })
}

fn arb_tier_map<T: std::fmt::Debug + Clone>(
    inner: impl Strategy<Value = T> + Clone,
) -> impl Strategy<Value = TierMap<T>> {
    (
        proptest::option::of(inner.clone()),
        proptest::option::of(inner.clone()),
        proptest::option::of(inner),
    )
        .prop_map(|(beginner, intermediate, advanced)| TierMap {
            beginner,
            intermediate,
            advanced,
        })
}

fn arb_content_variants() -> impl Strategy<Value = VariantSet<LessonContent>> {
    prop_oneof![
        arb_tier_map(arb_content()).prop_map(VariantSet::Tiered),
        arb_content().prop_map(VariantSet::Flat),
    ]
}

fn arb_lesson_document() -> impl Strategy<Value = LessonDocument> {
    (
        "[a-z0-9-]{1,12}",
        proptest::option::of("[a-z ]{1,24}"),
        proptest::option::of(arb_content_variants()),
        proptest::option::of(arb_tier_map(0i32..500)),
        proptest::option::of(arb_tier_map(1i32..120)),
    )
        .prop_map(|(id, core_concept, content, xp_rewards, estimated_time)| LessonDocument {
            id,
            path_id: "p".into(),
            module_id: "m".into(),
            title: "Lesson".into(),
            core_concept,
            content,
            sandbox: None,
            assessment: None,
            xp_rewards,
            estimated_time,
        })
}

proptest! {
    #[test]
    fn path_length_is_always_between_four_and_eight(profile in arb_profile()) {
        let path = synthesize_path(&profile, &PathRules::default());
        prop_assert!(path.lessons.len() >= 4);
        prop_assert!(path.lessons.len() <= 8);
    }

    #[test]
    fn estimated_duration_matches_lesson_sum(profile in arb_profile()) {
        let path = synthesize_path(&profile, &PathRules::default());
        let sum: i32 = path.lessons.iter().map(|l| l.duration_minutes).sum();
        prop_assert_eq!(path.estimated_duration, sum);
    }

    #[test]
    fn fresh_paths_start_at_the_beginning(profile in arb_profile()) {
        let path = synthesize_path(&profile, &PathRules::default());
        prop_assert_eq!(path.next_lesson_index, 0);
        prop_assert!(path.completed_lessons.is_empty());
    }

    #[test]
    fn synthesis_is_idempotent(profile in arb_profile()) {
        let rules = PathRules::default();
        let a = synthesize_path(&profile, &rules);
        let b = synthesize_path(&profile, &rules);
        prop_assert_eq!(a.lessons, b.lessons);
        prop_assert_eq!(a.estimated_duration, b.estimated_duration);
    }

    #[test]
    fn high_performance_never_demotes(tier in arb_tier()) {
        let next = next_tier(tier, 0.95, &DifficultyThresholds::default());
        prop_assert!(tier_rank(next) >= tier_rank(tier));
    }

    #[test]
    fn low_performance_never_promotes(tier in arb_tier()) {
        let next = next_tier(tier, 0.3, &DifficultyThresholds::default());
        prop_assert!(tier_rank(next) <= tier_rank(tier));
    }

    #[test]
    fn advanced_is_a_ceiling(p in 0.9f64..=1.0) {
        prop_assert_eq!(
            next_tier(SkillTier::Advanced, p, &DifficultyThresholds::default()),
            SkillTier::Advanced
        );
    }

    #[test]
    fn beginner_is_a_floor(p in 0.0f64..0.5) {
        prop_assert_eq!(
            next_tier(SkillTier::Beginner, p, &DifficultyThresholds::default()),
            SkillTier::Beginner
        );
    }

    #[test]
    fn tier_moves_at_most_one_step(tier in arb_tier(), p in 0.0f64..=1.0) {
        let next = next_tier(tier, p, &DifficultyThresholds::default());
        let delta = (tier_rank(next) as i8 - tier_rank(tier) as i8).abs();
        prop_assert!(delta <= 1);
    }

    #[test]
    fn performance_stays_in_unit_range(
        assessment in proptest::option::of(0.0f64..=1.0),
        sandbox in any::<bool>(),
        time_spent in proptest::option::of(0.0f64..240.0),
        estimated in proptest::option::of(1.0f64..120.0),
    ) {
        let result = CompletionResult {
            assessment_score: assessment,
            sandbox_completed: sandbox,
            time_spent,
            estimated_time: estimated,
        };
        let score = performance_score(Some(&result), &PerformanceWeights::default());
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn adaptation_is_total_and_deterministic(
        doc in arb_lesson_document(),
        tier in arb_tier(),
    ) {
        let defaults = AdaptDefaults::default();
        let a = adapt_lesson(&doc, tier, &defaults);
        let b = adapt_lesson(&doc, tier, &defaults);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.tier, tier);
        prop_assert!(a.xp_reward >= 0);
        prop_assert!(a.estimated_time >= 1);
    }
}
