//! Static assessment question catalog.
//!
//! Each single-choice option may carry per-tier skill point deltas plus
//! pace/time/tech/motivation/confidence signals; multi-choice questions
//! route their raw selections into one of the profile tag buckets.

use serde::{Deserialize, Serialize};

use crate::adaptive::types::QuestionKind;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillPoints {
    pub beginner: i32,
    pub intermediate: i32,
    pub advanced: i32,
}

impl SkillPoints {
    pub const fn new(beginner: i32, intermediate: i32, advanced: i32) -> Self {
        Self {
            beginner,
            intermediate,
            advanced,
        }
    }

    pub fn add(&mut self, other: &SkillPoints) {
        self.beginner += other.beginner;
        self.intermediate += other.intermediate;
        self.advanced += other.advanced;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagBucket {
    Goals,
    Challenges,
    Preferences,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_points: Option<SkillPoints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivation: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<i32>,
}

impl QuizOption {
    fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            skill_points: None,
            pace_score: None,
            time_score: None,
            tech_level: None,
            motivation: None,
            confidence: None,
        }
    }

    fn skill(mut self, beginner: i32, intermediate: i32, advanced: i32) -> Self {
        self.skill_points = Some(SkillPoints::new(beginner, intermediate, advanced));
        self
    }

    fn pace(mut self, score: i32) -> Self {
        self.pace_score = Some(score);
        self
    }

    fn time(mut self, score: i32) -> Self {
        self.time_score = Some(score);
        self
    }

    fn tech(mut self, level: i32) -> Self {
        self.tech_level = Some(level);
        self
    }

    fn motivation(mut self, value: i32) -> Self {
        self.motivation = Some(value);
        self
    }

    fn confidence(mut self, value: i32) -> Self {
        self.confidence = Some(value);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    pub kind: QuestionKind,
    pub prompt: String,
    pub options: Vec<QuizOption>,
    /// Which profile tag set a multi-choice answer lands in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<TagBucket>,
}

impl QuizQuestion {
    fn single(id: &str, prompt: &str, options: Vec<QuizOption>) -> Self {
        Self {
            id: id.to_string(),
            kind: QuestionKind::SingleChoice,
            prompt: prompt.to_string(),
            options,
            bucket: None,
        }
    }

    fn multi(id: &str, prompt: &str, bucket: TagBucket, options: Vec<QuizOption>) -> Self {
        Self {
            id: id.to_string(),
            kind: QuestionKind::MultiChoice,
            prompt: prompt.to_string(),
            options,
            bucket: Some(bucket),
        }
    }

    fn info(id: &str, prompt: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: QuestionKind::InfoSlide,
            prompt: prompt.to_string(),
            options: Vec::new(),
            bucket: None,
        }
    }

    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

/// The built-in onboarding assessment. Mirrors the quiz shipped in the
/// consumer app; question ids are stable and referenced by answer records.
pub fn assessment_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::info("welcome", "Let's find the right starting point for you."),
        QuizQuestion::single(
            "experience",
            "How often do you use AI tools today?",
            vec![
                QuizOption::new("never", "I haven't tried them yet").skill(3, 0, 0),
                QuizOption::new("occasionally", "A few times, out of curiosity").skill(1, 2, 0),
                QuizOption::new("weekly", "Most weeks, for real tasks").skill(0, 3, 1),
                QuizOption::new("daily", "Daily, they're part of my workflow").skill(0, 1, 3),
            ],
        ),
        QuizQuestion::single(
            "concepts",
            "How comfortable are you with how AI actually works?",
            vec![
                QuizOption::new("new", "It's a black box to me").skill(2, 0, 0).tech(0),
                QuizOption::new("basics", "I know the basic ideas").skill(0, 2, 0).tech(2),
                QuizOption::new("hands-on", "I've experimented with prompts and settings")
                    .skill(0, 1, 2)
                    .tech(3),
                QuizOption::new("builder", "I've built things with AI APIs").skill(0, 0, 3).tech(4),
            ],
        ),
        QuizQuestion::single(
            "pace",
            "What learning pace suits you?",
            vec![
                QuizOption::new("gentle", "Take it slow, let things sink in").pace(1),
                QuizOption::new("steady", "A steady, regular rhythm").pace(3),
                QuizOption::new("quick", "Keep it moving").pace(4),
                QuizOption::new("sprint", "Fast as possible, I'll keep up").pace(5),
            ],
        ),
        QuizQuestion::single(
            "session",
            "How long is a typical learning session for you?",
            vec![
                QuizOption::new("15min", "About 15 minutes").time(1),
                QuizOption::new("30min", "Around half an hour").time(2),
                QuizOption::new("hour", "An hour or so").time(3),
                QuizOption::new("open-ended", "As long as it takes").time(4),
            ],
        ),
        QuizQuestion::single(
            "motivation",
            "How motivated are you to learn AI right now?",
            vec![
                QuizOption::new("curious", "Mildly curious").motivation(2),
                QuizOption::new("interested", "Genuinely interested").motivation(3),
                QuizOption::new("driven", "It matters for my work").motivation(4),
                QuizOption::new("all-in", "It's a top priority").motivation(5),
            ],
        ),
        QuizQuestion::single(
            "confidence",
            "How confident do you feel using new technology?",
            vec![
                QuizOption::new("hesitant", "I usually need help").confidence(1),
                QuizOption::new("cautious", "I get there eventually").confidence(2),
                QuizOption::new("capable", "Fairly confident").confidence(4),
                QuizOption::new("fearless", "Very confident").confidence(5),
            ],
        ),
        QuizQuestion::multi(
            "goals",
            "What do you want to use AI for?",
            TagBucket::Goals,
            vec![
                QuizOption::new("content_creation", "Creating content"),
                QuizOption::new("work_productivity", "Getting more done at work"),
                QuizOption::new("prompt_engineering", "Mastering prompts"),
                QuizOption::new("general_literacy", "Understanding AI in general"),
            ],
        ),
        QuizQuestion::multi(
            "challenges",
            "What's held you back so far?",
            TagBucket::Challenges,
            vec![
                QuizOption::new("where_to_start", "Not knowing where to start"),
                QuizOption::new("too_technical", "It feels too technical"),
                QuizOption::new("trust_and_safety", "Trust and safety concerns"),
                QuizOption::new("keeping_up", "Everything changes too fast"),
            ],
        ),
        QuizQuestion::multi(
            "formats",
            "How do you like to learn?",
            TagBucket::Preferences,
            vec![
                QuizOption::new("hands_on", "Hands-on exercises"),
                QuizOption::new("reading", "Reading at my own pace"),
                QuizOption::new("video", "Watching walkthroughs"),
                QuizOption::new("quizzes", "Quizzes and challenges"),
            ],
        ),
    ]
}
