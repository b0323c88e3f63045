use tracing::{debug, warn};

use crate::clients::gemini::GeminiClient;
use crate::clients::models::requests::GenerationConfig;
use crate::errors::CoachError;
use crate::models::requests::ExerciseInfoRequest;
use crate::models::suggestion::ExerciseInfo;
use crate::services::{ai_parser, ai_prompt};

/// Looks up how an exercise is performed and progressed.
#[derive(Clone)]
pub struct ExerciseInfoService {
    gemini_client: Option<GeminiClient>,
}

impl ExerciseInfoService {
    pub fn new(gemini_client: Option<GeminiClient>) -> Self {
        Self { gemini_client }
    }

    pub async fn generate_exercise_info(
        &self,
        request: ExerciseInfoRequest,
    ) -> Result<ExerciseInfo, CoachError> {
        let exercise_name = request.validate()?;

        let Some(gemini_client) = &self.gemini_client else {
            debug!(exercise = %exercise_name, "exercise_info.not_configured");
            return Ok(ExerciseInfo::not_configured());
        };

        let prompt = ai_prompt::build_exercise_info_prompt(&exercise_name);

        match gemini_client
            .generate_text(&prompt, GenerationConfig::EXERCISE_INFO)
            .await
        {
            Ok(text) => Ok(ai_parser::parse_exercise_info(&text)),
            Err(e) => {
                warn!(error = %e, exercise = %exercise_name, "exercise_info.ai_unavailable");
                Ok(ExerciseInfo::service_failed())
            }
        }
    }
}
