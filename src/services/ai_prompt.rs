use crate::models::routine::{AnalysisTarget, RoutineDay, RoutineExercise};
use crate::models::workout::{Measurement, SetEntry, UserProfile, WorkoutRecord};
use crate::services::metrics::{self, SessionMetrics};
use crate::services::output_formatter::inline_text;
use crate::services::progression_rules::{EASY_EFFORT_CEILING, HARD_EFFORT_FLOOR, format_weight};

/// How many past sessions are summarized below the detailed last session.
const RECENT_SESSION_LIMIT: usize = 5;
const ANALYSIS_WORD_LIMIT: u32 = 300;

pub fn format_set_list(sets: &[&SetEntry]) -> String {
    sets.iter()
        .map(|set| {
            let mut entry = format!(
                "{} × {} reps",
                format_weight(set.weight_value()),
                measurement_or(&set.reps, "?")
            );
            if set.has_effort() {
                entry.push_str(&format!(" @ RPE {}", measurement_or(&set.rpe, "?")));
            }
            entry
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_recent_sessions(history: &[WorkoutRecord]) -> String {
    let start = history.len().saturating_sub(RECENT_SESSION_LIMIT);
    history[start..]
        .iter()
        .map(|record| {
            let date = record
                .completed_at
                .map(|at| at.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "unknown date".to_string());
            let sets = metrics::complete_sets(record);
            let summary = if sets.is_empty() {
                "no complete sets".to_string()
            } else {
                format_set_list(&sets)
            };
            format!("- {}: {}\n", date, summary)
        })
        .collect()
}

fn measurement_or(value: &Option<Measurement>, missing: &str) -> String {
    value
        .as_ref()
        .filter(|v| !v.is_empty())
        .map(|v| inline_text(&v.to_string()))
        .unwrap_or_else(|| missing.to_string())
}

pub fn build_progression_prompt(
    exercise_name: &str,
    history: &[WorkoutRecord],
    session: &SessionMetrics,
    profile: &UserProfile,
) -> String {
    let last_sets = history
        .last()
        .map(metrics::complete_sets)
        .unwrap_or_default();

    let experience = inline_text(&profile.experience);
    let goal = inline_text(&profile.goal);

    format!(
        r#"You are an expert {} level {} coach analyzing workout progression.

Exercise: {}
User Profile: {} level, goal: {}

Last workout data:
- Max weight: {}
- Average RPE: {:.1}/10
- Total volume: {}
- Complete sets: {}
- Sets: {}

Recent sessions (oldest first):
{}
Based on RPE and performance:
- Average RPE below {}: suggest a weight increase
- Average RPE {} to {}: maintain or make a slight increase
- Average RPE above {}: maintain or decrease

Respond with ONLY a JSON object in this exact format, with exactly these three keys:
{{"message":"Brief assessment of last performance","suggestion":"Specific weight/rep recommendation","color":"increase | maintain | decrease"}}"#,
        experience.to_lowercase(),
        goal.to_lowercase(),
        inline_text(exercise_name),
        experience,
        goal,
        format_weight(session.max_weight),
        session.avg_effort,
        format_weight(session.total_volume),
        session.complete_set_count,
        format_set_list(&last_sets),
        format_recent_sessions(history),
        EASY_EFFORT_CEILING,
        EASY_EFFORT_CEILING,
        HARD_EFFORT_FLOOR,
        HARD_EFFORT_FLOOR,
    )
}

fn format_exercise_line(exercise: &RoutineExercise, with_rest: bool) -> String {
    let mut line = format!(
        "{}: {} sets × {} reps",
        inline_text(&exercise.name),
        measurement_or(&exercise.sets, "?"),
        measurement_or(&exercise.target_reps, "?")
    );
    if with_rest {
        line.push_str(&format!(", {}s rest", measurement_or(&exercise.rest_time, "?")));
    }
    line
}

fn format_day_exercises(day: &RoutineDay, indent: &str, with_rest: bool) -> String {
    if day.exercises.is_empty() {
        return format!("{}- (no exercises)", indent);
    }
    day.exercises
        .iter()
        .map(|exercise| format!("{}- {}", indent, format_exercise_line(exercise, with_rest)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_analysis_target(target: &AnalysisTarget) -> String {
    match target {
        AnalysisTarget::Day(day) => format!(
            "Exercises for this day:\n{}",
            format_day_exercises(day, "", true)
        ),
        AnalysisTarget::Routine(routine) => {
            let days = routine
                .days
                .iter()
                .map(|(number, day)| {
                    format!(
                        "Day {} - {}:\n{}",
                        number,
                        inline_text(&day.name),
                        format_day_exercises(day, "  ", false)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n\n");
            format!("Complete routine:\n{}", days)
        }
    }
}

pub fn build_routine_analysis_prompt(target: &AnalysisTarget, profile: &UserProfile) -> String {
    let label = match target {
        AnalysisTarget::Day(_) => "Workout Day",
        AnalysisTarget::Routine(_) => "Routine",
    };
    let days_per_week = profile
        .days_per_week
        .map(|days| days.to_string())
        .unwrap_or_else(|| "not specified".to_string());

    format!(
        r#"You are an expert personal trainer analyzing a {}.

{}: {}

User Profile:
- Goal: {}
- Experience: {}
- Training Days/Week: {}

{}

Provide an HTML-formatted analysis with these sections:
1. Overall assessment
2. Strengths
3. Areas for improvement
4. Muscle balance
5. Specific recommendations

Formatting rules:
- Use only <strong> for section headings, <em> for emphasis and <br/> for line breaks
- Do not use any other HTML tags, markdown headings or code blocks
- Keep the whole analysis under {} words"#,
        target.kind(),
        label,
        inline_text(target.name()),
        inline_text(&profile.goal),
        inline_text(&profile.experience),
        days_per_week,
        format_analysis_target(target),
        ANALYSIS_WORD_LIMIT,
    )
}

pub fn build_exercise_info_prompt(exercise_name: &str) -> String {
    format!(
        r#"Provide detailed exercise information for: "{}"

Format your response as a JSON object with these exact keys:
{{
  "muscle": "Primary muscle groups worked",
  "difficulty": "Beginner, Intermediate, or Advanced",
  "equipment": "Required equipment",
  "form": "Step-by-step form instructions",
  "tips": "Important safety and technique tips",
  "progression": "How to progress this exercise",
  "mistakes": "Common mistakes and how to avoid them"
}}

Be specific and practical."#,
        inline_text(exercise_name)
    )
}
