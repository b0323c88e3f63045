use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A logged or targeted quantity as the web client sends it: a number, a
/// numeric string typed into a form field, or free text such as `"8-12"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measurement {
    Number(f64),
    Text(String),
}

impl Measurement {
    /// Finite numeric value, if the measurement parses as one.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Measurement::Number(value) => Some(*value),
            Measurement::Text(text) => text.trim().parse::<f64>().ok(),
        };
        value.filter(|v| v.is_finite())
    }

    /// Blank text and a numeric zero both count as "nothing logged".
    pub fn is_empty(&self) -> bool {
        match self {
            Measurement::Number(value) => *value == 0.0 || value.is_nan(),
            Measurement::Text(text) => text.trim().is_empty(),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Number(value) => f.write_str(&format_number(*value)),
            Measurement::Text(text) => f.write_str(text.trim()),
        }
    }
}

/// Shortest exact form: `105`, `102.5`, `107.25`. Sums such as `0.1 + 0.2` are
/// snapped to three decimals first so float noise never reaches the user.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let snapped = (value * 1000.0).round() / 1000.0;
    if snapped == 0.0 {
        return "0".to_string();
    }
    format!("{}", snapped)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    #[serde(default)]
    pub weight: Option<Measurement>,
    #[serde(default)]
    pub reps: Option<Measurement>,
    #[serde(default)]
    pub rpe: Option<Measurement>,
}

impl SetEntry {
    pub fn is_complete(&self) -> bool {
        is_present(&self.weight) && is_present(&self.reps)
    }

    pub fn weight_value(&self) -> f64 {
        numeric_or_zero(&self.weight)
    }

    pub fn reps_value(&self) -> f64 {
        numeric_or_zero(&self.reps)
    }

    /// Logged effort rating, or `default` when the set carries none.
    pub fn effort_value(&self, default: f64) -> f64 {
        self.rpe
            .as_ref()
            .and_then(Measurement::as_number)
            .filter(|value| *value != 0.0)
            .unwrap_or(default)
    }

    pub fn has_effort(&self) -> bool {
        is_present(&self.rpe)
    }
}

fn is_present(value: &Option<Measurement>) -> bool {
    value.as_ref().is_some_and(|v| !v.is_empty())
}

fn numeric_or_zero(value: &Option<Measurement>) -> f64 {
    value.as_ref().and_then(Measurement::as_number).unwrap_or(0.0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    #[serde(default)]
    pub exercise_name: String,
    #[serde(default)]
    pub sets: Vec<SetEntry>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub goal: String,
    pub experience: String,
    pub days_per_week: Option<u32>,
}
