use serde::Serialize;

use crate::clients::models::common::Content;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
}

impl GenerationConfig {
    /// Short, near-deterministic JSON answer for a single exercise.
    pub const PROGRESSION: Self = Self {
        temperature: 0.3,
        max_output_tokens: 200,
        top_k: Some(1),
        top_p: Some(1.0),
    };

    pub const ROUTINE_ANALYSIS: Self = Self {
        temperature: 0.7,
        max_output_tokens: 1000,
        top_k: None,
        top_p: None,
    };

    pub const EXERCISE_INFO: Self = Self {
        temperature: 0.3,
        max_output_tokens: 800,
        top_k: None,
        top_p: None,
    };
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}
