use std::fmt;

use crate::training::WorkoutSummary;

/// Human-readable report for one finished workout.
///
/// Holds already computed figures; rendering never recomputes anything.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<WorkoutSummary> for InfoMessage {
    fn from(summary: WorkoutSummary) -> Self {
        Self {
            training_type: summary.kind.to_string(),
            duration: summary.duration_h,
            distance: summary.distance_km,
            speed: summary.mean_speed_kmh,
            calories: summary.calories_kcal,
        }
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Activity type: {}; Duration: {:.3} h.; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
