use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;
use serde_json::{Map, Value};

use crate::models::suggestion::{ExerciseInfo, FallbackReason, SuggestionColor, SuggestionResult};
use crate::services::metrics::SessionMetrics;
use crate::services::output_formatter::escape_html;
use crate::services::progression_rules;

static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("json object pattern"));

const DEFAULT_MESSAGE: &str = "AI analysis complete";
const DEFAULT_SUGGESTION: &str = "Continue with current progression";

/// Parses a progression suggestion, falling back to the rules when the text is unusable.
pub fn suggestion_or_fallback(response: &str, metrics: &SessionMetrics) -> SuggestionResult {
    match parse_suggestion(response) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(error = %e, "ai_parser.suggestion_unreadable");
            progression_rules::suggest(metrics)
                .with_fallback_note(FallbackReason::UnreadableResponse)
        }
    }
}

pub fn parse_suggestion(response: &str) -> Result<SuggestionResult> {
    let object = extract_json_object(response)?;

    let color = object
        .get("color")
        .and_then(Value::as_str)
        .filter(|label| !label.trim().is_empty())
        .map(SuggestionColor::from_label)
        .unwrap_or(SuggestionColor::Maintain);

    Ok(SuggestionResult {
        message: text_field(&object, "message").unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
        suggestion: text_field(&object, "suggestion")
            .unwrap_or_else(|| DEFAULT_SUGGESTION.to_string()),
        color,
    })
}

/// Parses exercise information; prose answers become the form description.
pub fn parse_exercise_info(response: &str) -> ExerciseInfo {
    let object = match extract_json_object(response) {
        Ok(object) => object,
        Err(e) => {
            tracing::warn!(error = %e, "ai_parser.exercise_info_unreadable");
            return ExerciseInfo::generic_with_form(escape_html(response.trim()));
        }
    };

    let defaults =
        ExerciseInfo::generic_with_form("Focus on a controlled, full range of motion".to_string());
    let field = |key: &str, default: String| {
        text_field(&object, key)
            .map(|text| escape_html(&text))
            .unwrap_or(default)
    };

    ExerciseInfo {
        muscle: field("muscle", defaults.muscle),
        difficulty: field("difficulty", defaults.difficulty),
        equipment: field("equipment", defaults.equipment),
        form: field("form", defaults.form),
        tips: field("tips", defaults.tips),
        progression: field("progression", defaults.progression),
        mistakes: field("mistakes", defaults.mistakes),
    }
}

/// Takes everything from the first `{` to the last `}`, which also strips
/// markdown code fences and any chatter around the object.
fn extract_json_object(response: &str) -> Result<Map<String, Value>> {
    let region = JSON_OBJECT
        .find(response)
        .ok_or_else(|| anyhow::anyhow!("No JSON object found in AI response"))?;

    let value: Value = serde_json::from_str(region.as_str())
        .map_err(|e| anyhow::anyhow!("Failed to parse JSON response: {}", e))?;

    match value {
        Value::Object(object) => Ok(object),
        _ => Err(anyhow::anyhow!("AI response JSON is not an object")),
    }
}

fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
