use tracing::{debug, info, warn};

use crate::clients::gemini::GeminiClient;
use crate::clients::models::requests::GenerationConfig;
use crate::errors::CoachError;
use crate::models::requests::ProgressionRequest;
use crate::models::suggestion::{FallbackReason, SuggestionResult};
use crate::services::metrics::{self, MetricsError};
use crate::services::{ai_parser, ai_prompt, progression_rules};

/// Decides what to load on the bar next session for one exercise.
#[derive(Clone)]
pub struct ProgressiveOverloadService {
    gemini_client: Option<GeminiClient>,
}

impl ProgressiveOverloadService {
    pub fn new(gemini_client: Option<GeminiClient>) -> Self {
        Self { gemini_client }
    }

    /// Always yields a complete suggestion for valid input; only malformed
    /// requests are errors.
    pub async fn suggest_progression(
        &self,
        request: ProgressionRequest,
    ) -> Result<SuggestionResult, CoachError> {
        let query = request.validate()?;

        let session = match metrics::extract_metrics(&query.history) {
            Ok(session) => session,
            Err(MetricsError::NoHistory) => {
                debug!(exercise = %query.exercise_name, "progression.no_history");
                return Ok(SuggestionResult::no_history());
            }
            Err(MetricsError::NoUsableData) => {
                debug!(exercise = %query.exercise_name, "progression.no_usable_data");
                return Ok(SuggestionResult::no_usable_data());
            }
        };

        let Some(gemini_client) = &self.gemini_client else {
            debug!(exercise = %query.exercise_name, "progression.rules_only");
            return Ok(progression_rules::suggest(&session));
        };

        let prompt = ai_prompt::build_progression_prompt(
            &query.exercise_name,
            &query.history,
            &session,
            &query.profile,
        );

        debug!(prompt = %prompt, "gemini.prompt");

        match gemini_client
            .generate_text(&prompt, GenerationConfig::PROGRESSION)
            .await
        {
            Ok(response) => {
                debug!(response = %response, "gemini.response_text");
                let result = ai_parser::suggestion_or_fallback(&response, &session);
                info!(
                    exercise = %query.exercise_name,
                    color = ?result.color,
                    "progression.suggested"
                );
                Ok(result)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    exercise = %query.exercise_name,
                    "progression.ai_unavailable"
                );
                Ok(progression_rules::suggest(&session)
                    .with_fallback_note(FallbackReason::ServiceUnavailable))
            }
        }
    }
}
