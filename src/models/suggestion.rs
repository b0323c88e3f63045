use serde::{Deserialize, Serialize};

/// Category the caller styles or branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionColor {
    Increase,
    Maintain,
    Decrease,
    Neutral,
    Warning,
    Unknown,
}

impl SuggestionColor {
    /// Accepts the tag names and the CSS classes older clients asked the model for.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_ascii_lowercase();
        match label.as_str() {
            "increase" | "text-green-400" | "green" => SuggestionColor::Increase,
            "maintain" | "text-blue-400" | "blue" => SuggestionColor::Maintain,
            "decrease" | "text-red-400" | "red" => SuggestionColor::Decrease,
            "neutral" => SuggestionColor::Neutral,
            "warning" | "text-yellow-400" | "yellow" => SuggestionColor::Warning,
            _ => SuggestionColor::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionResult {
    pub message: String,
    pub suggestion: String,
    pub color: SuggestionColor,
}

/// Why a suggestion came from the rules even though an AI backend is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    ServiceUnavailable,
    UnreadableResponse,
}

impl FallbackReason {
    fn note(self) -> &'static str {
        match self {
            FallbackReason::ServiceUnavailable => "AI unavailable",
            FallbackReason::UnreadableResponse => "AI response unreadable",
        }
    }
}

impl SuggestionResult {
    pub fn new(
        message: impl Into<String>,
        suggestion: impl Into<String>,
        color: SuggestionColor,
    ) -> Self {
        Self {
            message: message.into(),
            suggestion: suggestion.into(),
            color,
        }
    }

    pub fn no_history() -> Self {
        Self::new(
            "No previous data available",
            "Start with comfortable weight",
            SuggestionColor::Neutral,
        )
    }

    pub fn no_usable_data() -> Self {
        Self::new(
            "No weight/rep data from last session",
            "Log your sets for better recommendations",
            SuggestionColor::Warning,
        )
    }

    pub fn with_fallback_note(mut self, reason: FallbackReason) -> Self {
        self.message = format!("{} ({})", self.message, reason.note());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseInfo {
    pub muscle: String,
    pub difficulty: String,
    pub equipment: String,
    pub form: String,
    pub tips: String,
    pub progression: String,
    pub mistakes: String,
}

impl ExerciseInfo {
    pub fn not_configured() -> Self {
        Self {
            muscle: "API not configured".to_string(),
            difficulty: "Unknown".to_string(),
            equipment: "Various".to_string(),
            form: "Please consult a fitness professional for proper form".to_string(),
            tips: "Always prioritize proper form over heavy weight".to_string(),
            progression: "Progressive overload: gradually increase weight, reps, or sets"
                .to_string(),
            mistakes: "Most common mistakes: using too much weight, poor form, inadequate rest"
                .to_string(),
        }
    }

    pub fn service_failed() -> Self {
        Self {
            muscle: "Exercise analysis failed".to_string(),
            difficulty: "Unknown".to_string(),
            equipment: "Various".to_string(),
            form: "Please consult a fitness professional".to_string(),
            tips: "Always prioritize proper form".to_string(),
            progression: "Progressive overload".to_string(),
            mistakes: "Consult proper exercise guides".to_string(),
        }
    }

    /// Used when the model answered in prose; the prose becomes the form description.
    pub fn generic_with_form(form: String) -> Self {
        Self {
            muscle: "Multiple muscle groups".to_string(),
            difficulty: "Intermediate".to_string(),
            equipment: "Gym equipment".to_string(),
            form,
            tips: "Focus on controlled movements".to_string(),
            progression: "Gradually increase weight or reps".to_string(),
            mistakes: "Avoid using momentum".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineAnalysis {
    pub analysis: String,
}
