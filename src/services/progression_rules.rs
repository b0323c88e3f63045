use crate::models::suggestion::{SuggestionColor, SuggestionResult};
use crate::models::workout::format_number;
use crate::services::metrics::SessionMetrics;

/// Average RPE below this means the last session was easy.
pub const EASY_EFFORT_CEILING: f64 = 7.0;
/// Average RPE above this means the last session was a grind.
pub const HARD_EFFORT_FLOOR: f64 = 8.5;

pub const INCREASE_STEP: f64 = 5.0;
pub const SMALL_INCREASE_STEP: f64 = 2.5;

/// Deterministic suggestion for the next session based on last session's effort.
pub fn suggest(metrics: &SessionMetrics) -> SuggestionResult {
    let max_weight = metrics.max_weight;

    if metrics.avg_effort < EASY_EFFORT_CEILING {
        SuggestionResult::new(
            "Last session felt easy based on RPE",
            format!("Try {}", format_weight(max_weight + INCREASE_STEP)),
            SuggestionColor::Increase,
        )
    } else if metrics.avg_effort > HARD_EFFORT_FLOOR {
        SuggestionResult::new(
            "Last session was very challenging",
            format!("Maintain {} or reduce by 5-10lbs", format_weight(max_weight)),
            SuggestionColor::Decrease,
        )
    } else {
        SuggestionResult::new(
            "Good intensity last session",
            format!(
                "Maintain {}, or try {} if every rep felt solid",
                format_weight(max_weight),
                format_weight(max_weight + SMALL_INCREASE_STEP)
            ),
            SuggestionColor::Maintain,
        )
    }
}

pub fn format_weight(weight: f64) -> String {
    format!("{}lbs", format_number(weight))
}
