use serde::{Deserialize, Serialize};

/// Accumulator seeds for the profile scorer. Unanswered questions leave
/// these values in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorerDefaults {
    pub pace_score: i32,
    pub time_score: i32,
    pub tech_level: i32,
    pub motivation: i32,
    pub confidence: i32,
}

impl Default for ScorerDefaults {
    fn default() -> Self {
        Self {
            pace_score: 3,
            time_score: 2,
            tech_level: 0,
            motivation: 3,
            confidence: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultyThresholds {
    pub promote: f64,
    pub demote: f64,
}

impl Default for DifficultyThresholds {
    fn default() -> Self {
        Self {
            promote: 0.9,
            demote: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceWeights {
    pub assessment: f64,
    pub sandbox: f64,
    pub time: f64,
    /// Returned for a wholly absent result, and used for the time component
    /// when timing data is missing.
    pub neutral: f64,
}

impl Default for PerformanceWeights {
    fn default() -> Self {
        Self {
            assessment: 0.6,
            sandbox: 0.3,
            time: 0.1,
            neutral: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathRules {
    /// Fast-pace paths are truncated to this many lessons.
    pub fast_pace_cap: usize,
    /// Slow-pace paths get the review lesson inserted here.
    pub review_insert_index: usize,
    /// Short-session profiles have every lesson clamped to this duration.
    pub short_session_cap_minutes: i32,
}

impl Default for PathRules {
    fn default() -> Self {
        Self {
            fast_pace_cap: 6,
            review_insert_index: 2,
            short_session_cap_minutes: 25,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptDefaults {
    pub xp_reward: i32,
    pub estimated_minutes: i32,
}

impl Default for AdaptDefaults {
    fn default() -> Self {
        Self {
            xp_reward: 50,
            estimated_minutes: 15,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdaptiveConfig {
    pub scorer: ScorerDefaults,
    pub thresholds: DifficultyThresholds,
    pub performance: PerformanceWeights,
    pub path: PathRules,
    pub adapt: AdaptDefaults,
}

impl AdaptiveConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("ADAPT_PROMOTE_THRESHOLD") {
            config.thresholds.promote = val.parse().unwrap_or(config.thresholds.promote);
        }
        if let Ok(val) = std::env::var("ADAPT_DEMOTE_THRESHOLD") {
            config.thresholds.demote = val.parse().unwrap_or(config.thresholds.demote);
        }
        if let Ok(val) = std::env::var("ADAPT_FAST_PACE_CAP") {
            config.path.fast_pace_cap = val.parse().unwrap_or(config.path.fast_pace_cap);
        }
        if let Ok(val) = std::env::var("ADAPT_SHORT_SESSION_CAP_MINUTES") {
            config.path.short_session_cap_minutes =
                val.parse().unwrap_or(config.path.short_session_cap_minutes);
        }

        config
    }
}
