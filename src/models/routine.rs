use std::collections::BTreeMap;

use crate::models::workout::Measurement;

#[derive(Debug, Clone, PartialEq)]
pub struct RoutineExercise {
    pub name: String,
    pub sets: Option<Measurement>,
    pub target_reps: Option<Measurement>,
    /// Seconds.
    pub rest_time: Option<Measurement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoutineDay {
    pub name: String,
    pub exercises: Vec<RoutineExercise>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Routine {
    pub name: String,
    /// Keyed by day number, iterated in training order.
    pub days: BTreeMap<u32, RoutineDay>,
}

/// What a routine analysis looks at: one training day or the whole routine.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisTarget {
    Day(RoutineDay),
    Routine(Routine),
}

impl AnalysisTarget {
    pub fn name(&self) -> &str {
        match self {
            AnalysisTarget::Day(day) => &day.name,
            AnalysisTarget::Routine(routine) => &routine.name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisTarget::Day(_) => "workout day",
            AnalysisTarget::Routine(_) => "workout routine",
        }
    }
}
