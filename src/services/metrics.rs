use thiserror::Error;

use crate::models::workout::{SetEntry, WorkoutRecord};

/// Effort assumed for sets logged without an RPE.
pub const DEFAULT_EFFORT: f64 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionMetrics {
    pub max_weight: f64,
    pub avg_effort: f64,
    pub total_volume: f64,
    pub complete_set_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetricsError {
    #[error("no previous sessions logged")]
    NoHistory,
    #[error("last session has no sets with both weight and reps")]
    NoUsableData,
}

/// Summarizes the most recent session (the last record) of an exercise history.
pub fn extract_metrics(history: &[WorkoutRecord]) -> Result<SessionMetrics, MetricsError> {
    let last_session = history.last().ok_or(MetricsError::NoHistory)?;
    let sets = complete_sets(last_session);

    if sets.is_empty() {
        return Err(MetricsError::NoUsableData);
    }

    let max_weight = sets
        .iter()
        .map(|set| set.weight_value())
        .fold(f64::NEG_INFINITY, f64::max);

    let avg_effort = sets
        .iter()
        .map(|set| set.effort_value(DEFAULT_EFFORT))
        .sum::<f64>()
        / sets.len() as f64;

    let total_volume = sets
        .iter()
        .map(|set| set.weight_value() * set.reps_value())
        .sum();

    Ok(SessionMetrics {
        max_weight,
        avg_effort,
        total_volume,
        complete_set_count: sets.len(),
    })
}

pub fn complete_sets(record: &WorkoutRecord) -> Vec<&SetEntry> {
    record.sets.iter().filter(|set| set.is_complete()).collect()
}
