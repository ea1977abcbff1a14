//! Collapses one lesson attempt into a 0-1 performance score.

use crate::adaptive::config::PerformanceWeights;
use crate::adaptive::types::CompletionResult;

/// Missing telemetry is neutral, never a failure: an absent record scores
/// 0.5, and missing timing data contributes the neutral time component.
pub fn performance_score(
    result: Option<&CompletionResult>,
    weights: &PerformanceWeights,
) -> f64 {
    let Some(result) = result else {
        return weights.neutral;
    };

    let assessment = result.assessment_score.unwrap_or(0.0);
    let sandbox = if result.sandbox_completed { 1.0 } else { 0.0 };
    let time = time_score(result, weights);

    weights.assessment * assessment + weights.sandbox * sandbox + weights.time * time
}

fn time_score(result: &CompletionResult, weights: &PerformanceWeights) -> f64 {
    match (result.estimated_time, result.time_spent) {
        (Some(estimated), Some(spent)) if spent > 0.0 => (estimated / spent).clamp(0.0, 1.0),
        _ => weights.neutral,
    }
}
