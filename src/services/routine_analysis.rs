use tracing::{debug, info, warn};

use crate::clients::gemini::GeminiClient;
use crate::clients::models::requests::GenerationConfig;
use crate::errors::CoachError;
use crate::models::requests::AnalyzeRoutineRequest;
use crate::models::suggestion::RoutineAnalysis;
use crate::services::{ai_prompt, output_formatter};

pub const NOT_CONFIGURED_ANALYSIS: &str = "<strong>AI Analysis Unavailable</strong><br/>AI service not configured. Your routine structure looks organized for your goals.";
pub const FALLBACK_ANALYSIS: &str = "<strong>Analysis Error</strong><br/>Unable to connect to AI service. Your routine appears well-structured for your experience level.";

#[derive(Clone)]
pub struct RoutineAnalysisService {
    gemini_client: Option<GeminiClient>,
}

impl RoutineAnalysisService {
    pub fn new(gemini_client: Option<GeminiClient>) -> Self {
        Self { gemini_client }
    }

    pub async fn analyze_routine(
        &self,
        request: AnalyzeRoutineRequest,
    ) -> Result<RoutineAnalysis, CoachError> {
        let query = request.validate()?;

        let Some(gemini_client) = &self.gemini_client else {
            debug!(target_name = %query.target.name(), "routine_analysis.not_configured");
            return Ok(RoutineAnalysis {
                analysis: NOT_CONFIGURED_ANALYSIS.to_string(),
            });
        };

        let prompt = ai_prompt::build_routine_analysis_prompt(&query.target, &query.profile);
        debug!(prompt = %prompt, "gemini.prompt");

        let analysis = match gemini_client
            .generate_text(&prompt, GenerationConfig::ROUTINE_ANALYSIS)
            .await
        {
            Ok(text) => {
                let html = output_formatter::prose_to_html(&text);
                if html.is_empty() {
                    warn!("routine_analysis.empty_response");
                    FALLBACK_ANALYSIS.to_string()
                } else {
                    info!(
                        target_name = %query.target.name(),
                        kind = query.target.kind(),
                        "routine_analysis.completed"
                    );
                    html
                }
            }
            Err(e) => {
                warn!(
                    error = %e,
                    target_name = %query.target.name(),
                    "routine_analysis.ai_unavailable"
                );
                FALLBACK_ANALYSIS.to_string()
            }
        };

        Ok(RoutineAnalysis { analysis })
    }
}
