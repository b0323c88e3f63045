use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::AppState;
use crate::api::errors::AppError;
use crate::models::requests::{AnalyzeRoutineRequest, ExerciseInfoRequest, ProgressionRequest};
use crate::models::suggestion::{ExerciseInfo, RoutineAnalysis, SuggestionResult};

pub async fn progression_suggestion(
    State(state): State<AppState>,
    payload: Result<Json<ProgressionRequest>, JsonRejection>,
) -> Result<Json<SuggestionResult>, AppError> {
    let Json(request) = payload?;

    let result = state
        .progressive_overload_service
        .suggest_progression(request)
        .await?;

    Ok(Json(result))
}

pub async fn analyze_routine(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRoutineRequest>, JsonRejection>,
) -> Result<Json<RoutineAnalysis>, AppError> {
    let Json(request) = payload?;

    let analysis = state
        .routine_analysis_service
        .analyze_routine(request)
        .await?;

    Ok(Json(analysis))
}

pub async fn exercise_info(
    State(state): State<AppState>,
    payload: Result<Json<ExerciseInfoRequest>, JsonRejection>,
) -> Result<Json<ExerciseInfo>, AppError> {
    let Json(request) = payload?;

    let info = state
        .exercise_info_service
        .generate_exercise_info(request)
        .await?;

    Ok(Json(info))
}
