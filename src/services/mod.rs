pub mod ai_parser;
pub mod ai_prompt;
pub mod exercise_info;
pub mod metrics;
pub mod output_formatter;
pub mod progression_rules;
pub mod progressive_overload;
pub mod routine_analysis;
