//! Stateless tier adjustment from a single performance score.
//!
//! Every call is independent: no hysteresis, no smoothing. One excellent
//! or poor attempt moves the tier immediately.

use crate::adaptive::config::DifficultyThresholds;
use crate::adaptive::types::SkillTier;

pub fn next_tier(
    current: SkillTier,
    performance: f64,
    thresholds: &DifficultyThresholds,
) -> SkillTier {
    if performance >= thresholds.promote {
        current.promoted()
    } else if performance < thresholds.demote {
        current.demoted()
    } else {
        current
    }
}
