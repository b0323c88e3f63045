//! Request bodies as they arrive over HTTP, and their validated forms.
//!
//! Every field is a [`WireField`] so that a missing or wrongly typed value
//! turns into an `InvalidArgument` naming that field instead of a generic
//! decode failure for the whole body.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::CoachError;
use crate::models::routine::{AnalysisTarget, Routine, RoutineDay, RoutineExercise};
use crate::models::workout::{Measurement, UserProfile, WorkoutRecord};

/// One field of a request body. JSON `null` counts as missing; a value of the
/// wrong shape is kept as `Invalid` until validation names it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WireField<T> {
    #[default]
    Missing,
    Present(T),
    Invalid(String),
}

impl<T> WireField<T> {
    /// `Ok(None)` when absent, the field name with the decode error when mistyped.
    pub fn into_option(self, field: &str) -> Result<Option<T>, CoachError> {
        match self {
            WireField::Missing => Ok(None),
            WireField::Present(value) => Ok(Some(value)),
            WireField::Invalid(reason) => {
                Err(CoachError::invalid(field, format!("has the wrong type: {}", reason)))
            }
        }
    }

    pub fn required(self, field: &str) -> Result<T, CoachError> {
        self.into_option(field)?.ok_or_else(|| CoachError::missing(field))
    }
}

impl<T> From<T> for WireField<T> {
    fn from(value: T) -> Self {
        WireField::Present(value)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for WireField<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(WireField::Missing);
        }

        Ok(match serde_json::from_value(value) {
            Ok(parsed) => WireField::Present(parsed),
            Err(e) => WireField::Invalid(e.to_string()),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressionRequest {
    pub exercise_name: WireField<String>,
    pub history: WireField<Vec<WorkoutRecord>>,
    pub goal: WireField<String>,
    pub experience: WireField<String>,
}

#[derive(Debug, Clone)]
pub struct ProgressionQuery {
    pub exercise_name: String,
    pub history: Vec<WorkoutRecord>,
    pub profile: UserProfile,
}

impl ProgressionRequest {
    pub fn validate(self) -> Result<ProgressionQuery, CoachError> {
        let exercise_name = required_text(self.exercise_name, "exerciseName")?;
        let history = self.history.required("history")?;
        let goal = required_text(self.goal, "goal")?;
        let experience = required_text(self.experience, "experience")?;

        Ok(ProgressionQuery {
            exercise_name,
            history,
            profile: UserProfile {
                goal,
                experience,
                days_per_week: None,
            },
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileInput {
    pub goal: WireField<String>,
    pub experience: WireField<String>,
    pub days_per_week: WireField<u32>,
}

impl ProfileInput {
    fn validate(self) -> Result<UserProfile, CoachError> {
        Ok(UserProfile {
            goal: required_text(self.goal, "profile.goal")?,
            experience: required_text(self.experience, "profile.experience")?,
            days_per_week: self.days_per_week.into_option("profile.daysPerWeek")?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExerciseInput {
    pub name: WireField<String>,
    pub sets: WireField<Measurement>,
    pub target_reps: WireField<Measurement>,
    pub rest_time: WireField<Measurement>,
}

impl ExerciseInput {
    fn validate(self, path: &str) -> Result<RoutineExercise, CoachError> {
        Ok(RoutineExercise {
            name: required_text(self.name, &format!("{}.name", path))?,
            sets: self.sets.into_option(&format!("{}.sets", path))?,
            target_reps: self.target_reps.into_option(&format!("{}.targetReps", path))?,
            rest_time: self.rest_time.into_option(&format!("{}.restTime", path))?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DayInput {
    pub name: WireField<String>,
    pub exercises: WireField<Vec<ExerciseInput>>,
}

impl DayInput {
    fn validate(self, path: &str) -> Result<RoutineDay, CoachError> {
        let name = required_text(self.name, &format!("{}.name", path))?;
        let exercises = self
            .exercises
            .required(&format!("{}.exercises", path))?
            .into_iter()
            .enumerate()
            .map(|(index, exercise)| {
                exercise.validate(&format!("{}.exercises[{}]", path, index))
            })
            .collect::<Result<Vec<_>, CoachError>>()?;

        Ok(RoutineDay { name, exercises })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RoutineInput {
    pub name: WireField<String>,
    pub days: WireField<BTreeMap<u32, DayInput>>,
}

impl RoutineInput {
    fn validate(self) -> Result<Routine, CoachError> {
        let name = required_text(self.name, "routine.name")?;
        let days = self.days.required("routine.days")?;
        if days.is_empty() {
            return Err(CoachError::invalid("routine.days", "must not be empty"));
        }

        let days = days
            .into_iter()
            .map(|(number, day)| {
                let day = day.validate(&format!("routine.days.{}", number))?;
                Ok::<_, CoachError>((number, day))
            })
            .collect::<Result<BTreeMap<_, _>, CoachError>>()?;

        Ok(Routine { name, days })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzeRoutineRequest {
    pub routine: WireField<RoutineInput>,
    pub profile: WireField<ProfileInput>,
    pub is_day: WireField<bool>,
    pub day: WireField<DayInput>,
}

#[derive(Debug, Clone)]
pub struct AnalysisQuery {
    pub target: AnalysisTarget,
    pub profile: UserProfile,
}

impl AnalyzeRoutineRequest {
    pub fn validate(self) -> Result<AnalysisQuery, CoachError> {
        let profile = self.profile.required("profile")?.validate()?;

        let target = if self.is_day.into_option("isDay")?.unwrap_or(false) {
            AnalysisTarget::Day(self.day.required("day")?.validate("day")?)
        } else {
            AnalysisTarget::Routine(self.routine.required("routine")?.validate()?)
        };

        Ok(AnalysisQuery { target, profile })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExerciseInfoRequest {
    pub exercise_name: WireField<String>,
}

impl ExerciseInfoRequest {
    pub fn validate(self) -> Result<String, CoachError> {
        required_text(self.exercise_name, "exerciseName")
    }
}

fn required_text(value: WireField<String>, field: &str) -> Result<String, CoachError> {
    let text = value.required(field)?;
    if text.trim().is_empty() {
        return Err(CoachError::invalid(field, "must not be blank"));
    }
    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn analyze_request(value: serde_json::Value) -> AnalyzeRoutineRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_progression_request_validates_fields_in_order() {
        let request: ProgressionRequest = serde_json::from_value(json!({
            "exerciseName": "  ",
            "history": [],
            "goal": "Bodybuilding",
            "experience": "Intermediate"
        }))
        .unwrap();
        assert_eq!(request.validate().unwrap_err().field(), "exerciseName");

        let request: ProgressionRequest = serde_json::from_value(json!({
            "exerciseName": "Squat",
            "goal": "Bodybuilding",
            "experience": "Intermediate"
        }))
        .unwrap();
        assert_eq!(request.validate().unwrap_err().field(), "history");

        let request: ProgressionRequest = serde_json::from_value(json!({
            "exerciseName": "Squat",
            "history": [],
            "goal": "Bodybuilding",
            "experience": ""
        }))
        .unwrap();
        assert_eq!(request.validate().unwrap_err().field(), "experience");
    }

    #[test]
    fn test_progression_request_trims_text() {
        let request: ProgressionRequest = serde_json::from_value(json!({
            "exerciseName": " Bench Press ",
            "history": [],
            "goal": "Powerlifting",
            "experience": "Advanced"
        }))
        .unwrap();

        let query = request.validate().unwrap();
        assert_eq!(query.exercise_name, "Bench Press");
        assert_eq!(query.profile.goal, "Powerlifting");
        assert!(query.history.is_empty());
    }

    #[test]
    fn test_day_without_name_is_rejected() {
        let request = analyze_request(json!({
            "profile": {"goal": "Bodybuilding", "experience": "Beginner"},
            "isDay": true,
            "day": {"exercises": []}
        }));

        let err = request.validate().unwrap_err();
        assert_eq!(err.field(), "day.name");
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_routine_with_empty_days_is_rejected() {
        let request = analyze_request(json!({
            "routine": {"name": "PPL", "days": {}},
            "profile": {"goal": "Bodybuilding", "experience": "Beginner"},
            "isDay": false
        }));

        let err = request.validate().unwrap_err();
        assert_eq!(err.field(), "routine.days");
    }

    #[test]
    fn test_missing_profile_fields_are_named() {
        let request = analyze_request(json!({
            "profile": {"goal": "Bodybuilding"},
            "isDay": true,
            "day": {"name": "Push", "exercises": []}
        }));
        assert_eq!(request.validate().unwrap_err().field(), "profile.experience");

        let request = analyze_request(json!({"isDay": true}));
        assert_eq!(request.validate().unwrap_err().field(), "profile");
    }

    #[test]
    fn test_missing_target_is_named() {
        let request = analyze_request(json!({
            "profile": {"goal": "Bodybuilding", "experience": "Beginner"},
            "isDay": true
        }));
        assert_eq!(request.validate().unwrap_err().field(), "day");

        let request = analyze_request(json!({
            "profile": {"goal": "Bodybuilding", "experience": "Beginner"}
        }));
        assert_eq!(request.validate().unwrap_err().field(), "routine");
    }

    #[test]
    fn test_nested_exercise_name_is_named() {
        let request = analyze_request(json!({
            "routine": {
                "name": "Upper/Lower",
                "days": {
                    "1": {"name": "Upper", "exercises": [{"name": "Bench"}, {"sets": 3}]}
                }
            },
            "profile": {"goal": "General Fitness", "experience": "Beginner"}
        }));

        assert_eq!(
            request.validate().unwrap_err().field(),
            "routine.days.1.exercises[1].name"
        );
    }

    #[test]
    fn test_routine_days_are_ordered_numerically() {
        let request = analyze_request(json!({
            "routine": {
                "name": "Bro Split",
                "days": {
                    "10": {"name": "Arms", "exercises": []},
                    "2": {
                        "name": "Back",
                        "exercises": [{"name": "Row", "sets": 3, "targetReps": "8-12", "restTime": 90}]
                    }
                }
            },
            "profile": {"goal": "Bodybuilding", "experience": "Intermediate", "daysPerWeek": 5}
        }));

        let query = request.validate().unwrap();
        assert_eq!(query.profile.days_per_week, Some(5));
        match query.target {
            AnalysisTarget::Routine(routine) => {
                let order: Vec<u32> = routine.days.keys().copied().collect();
                assert_eq!(order, vec![2, 10]);
                assert_eq!(routine.days[&2].exercises[0].name, "Row");
            }
            other => panic!("expected routine target, got {:?}", other),
        }
    }

    #[test]
    fn test_exercise_info_request() {
        let request: ExerciseInfoRequest =
            serde_json::from_value(json!({"exerciseName": "Deadlift"})).unwrap();
        assert_eq!(request.validate().unwrap(), "Deadlift");

        let request = ExerciseInfoRequest::default();
        assert_eq!(request.validate().unwrap_err().field(), "exerciseName");
    }

    #[test]
    fn test_wrongly_typed_fields_are_named() {
        let request: ProgressionRequest = serde_json::from_value(json!({
            "exerciseName": "Squat",
            "history": {"a": 1},
            "goal": "Bodybuilding",
            "experience": "Intermediate"
        }))
        .unwrap();
        let err = request.validate().unwrap_err();
        assert_eq!(err.field(), "history");
        assert!(err.to_string().contains("wrong type"));

        let request: ProgressionRequest = serde_json::from_value(json!({
            "exerciseName": 42,
            "history": [],
            "goal": "Bodybuilding",
            "experience": "Intermediate"
        }))
        .unwrap();
        assert_eq!(request.validate().unwrap_err().field(), "exerciseName");
    }

    #[test]
    fn test_wrongly_typed_nested_fields_are_named() {
        let request = analyze_request(json!({
            "profile": {"goal": "Bodybuilding", "experience": ["Beginner"]},
            "isDay": true,
            "day": {"name": "Push", "exercises": []}
        }));
        assert_eq!(request.validate().unwrap_err().field(), "profile.experience");

        let request = analyze_request(json!({
            "profile": {"goal": "Bodybuilding", "experience": "Beginner"},
            "isDay": true,
            "day": {"name": "Push", "exercises": [{"name": "Dips", "restTime": {"s": 90}}]}
        }));
        assert_eq!(
            request.validate().unwrap_err().field(),
            "day.exercises[0].restTime"
        );

        let request = analyze_request(json!({
            "profile": {"goal": "Bodybuilding", "experience": "Beginner"},
            "isDay": "yes"
        }));
        assert_eq!(request.validate().unwrap_err().field(), "isDay");
    }

    #[test]
    fn test_null_counts_as_missing() {
        let request: ProgressionRequest = serde_json::from_value(json!({
            "exerciseName": "Squat",
            "history": null,
            "goal": "Bodybuilding",
            "experience": "Intermediate"
        }))
        .unwrap();
        let err = request.validate().unwrap_err();
        assert_eq!(err.field(), "history");
        assert!(err.to_string().contains("is required"));
    }
}
