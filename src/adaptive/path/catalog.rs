//! Fixed lesson template catalog: four lessons per tier, one bonus lesson
//! per recognized goal tag, and the review lesson used on slow-pace paths.
//! Embedded in the binary; not a network call.

use crate::adaptive::types::{LessonStub, SkillTier};

struct Template {
    id: &'static str,
    title: &'static str,
    duration_minutes: i32,
}

impl Template {
    fn stub(&self, difficulty: SkillTier) -> LessonStub {
        LessonStub {
            id: self.id.to_string(),
            title: self.title.to_string(),
            duration_minutes: self.duration_minutes,
            difficulty,
        }
    }
}

const BEGINNER: [Template; 4] = [
    Template { id: "b-01", title: "Meet Your AI Assistant", duration_minutes: 20 },
    Template { id: "b-02", title: "How AI Understands You", duration_minutes: 25 },
    Template { id: "b-03", title: "Everyday AI Tools", duration_minutes: 30 },
    Template { id: "b-04", title: "Staying Safe with AI", duration_minutes: 20 },
];

const INTERMEDIATE: [Template; 4] = [
    Template { id: "i-01", title: "How Language Models Think", duration_minutes: 30 },
    Template { id: "i-02", title: "Prompting with Purpose", duration_minutes: 35 },
    Template { id: "i-03", title: "AI for Research and Writing", duration_minutes: 30 },
    Template { id: "i-04", title: "Judging AI Output", duration_minutes: 25 },
];

const ADVANCED: [Template; 4] = [
    Template { id: "a-01", title: "Prompt Engineering Patterns", duration_minutes: 40 },
    Template { id: "a-02", title: "Chaining AI Workflows", duration_minutes: 45 },
    Template { id: "a-03", title: "Retrieval and Fine-Tuning", duration_minutes: 45 },
    Template { id: "a-04", title: "Responsible AI in Practice", duration_minutes: 35 },
];

/// Goal tag to bonus lesson, in the fixed order bonuses are appended.
const GOAL_BONUSES: [(&str, Template); 3] = [
    (
        "content_creation",
        Template { id: "g-content", title: "Creating Content with AI", duration_minutes: 30 },
    ),
    (
        "work_productivity",
        Template { id: "g-work", title: "AI at Work", duration_minutes: 25 },
    ),
    (
        "prompt_engineering",
        Template { id: "g-prompt", title: "Prompt Engineering Deep Dive", duration_minutes: 40 },
    ),
];

const REVIEW: Template =
    Template { id: "r-01", title: "Review and Practice", duration_minutes: 15 };

/// The base ordered template list for a tier. Always four lessons.
pub fn tier_templates(tier: SkillTier) -> Vec<LessonStub> {
    let templates = match tier {
        SkillTier::Beginner => &BEGINNER,
        SkillTier::Intermediate => &INTERMEDIATE,
        SkillTier::Advanced => &ADVANCED,
    };
    templates.iter().map(|t| t.stub(tier)).collect()
}

/// Bonus lessons for the recognized goal tags present in `goals`, in
/// catalog order (not goal-set order) so synthesis stays deterministic.
pub fn goal_bonuses<'a, I>(goals: I, tier: SkillTier) -> Vec<LessonStub>
where
    I: IntoIterator<Item = &'a String>,
{
    let goals: Vec<&str> = goals.into_iter().map(|g| g.as_str()).collect();
    GOAL_BONUSES
        .iter()
        .filter(|(tag, _)| goals.contains(tag))
        .map(|(_, template)| template.stub(tier))
        .collect()
}

pub fn review_lesson(tier: SkillTier) -> LessonStub {
    REVIEW.stub(tier)
}
