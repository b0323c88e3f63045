use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::services::exercise_info::ExerciseInfoService;
use crate::services::progressive_overload::ProgressiveOverloadService;
use crate::services::routine_analysis::RoutineAnalysisService;

pub mod coach;
pub mod errors;

#[derive(Clone)]
pub struct AppState {
    pub progressive_overload_service: ProgressiveOverloadService,
    pub routine_analysis_service: RoutineAnalysisService,
    pub exercise_info_service: ExerciseInfoService,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(|| async { "ok" }))
        .route("/api/progression-suggestion", post(coach::progression_suggestion))
        .route("/api/analyze-routine", post(coach::analyze_routine))
        .route("/api/exercise-info", post(coach::exercise_info))
        .layer(cors)
        .with_state(state)
}
