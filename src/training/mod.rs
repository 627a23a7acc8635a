pub mod running;
pub mod swimming;
pub mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkoutError};
use crate::message::InfoMessage;
use crate::util::checked_div;

/// Metres in a kilometre.
pub const M_IN_KM: f64 = 1000.0;
/// Distance covered by one step, in metres.
pub const STEP_LENGTH_M: f64 = 0.65;
pub const MINS_IN_HOUR: f64 = 60.0;

/// The three supported activity kinds.
///
/// `Display` yields the name used in summary lines.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
pub enum ActivityKind {
    Running,
    #[strum(to_string = "SportsWalking")]
    #[serde(rename = "SportsWalking")]
    Walking,
    Swimming,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Swimming,
        ActivityKind::Running,
        ActivityKind::Walking,
    ];

    /// Short code used by workout packages.
    pub fn code(&self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::Walking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Number of values a package of this kind must carry.
    pub fn arity(&self) -> usize {
        match self {
            ActivityKind::Running => 3,
            ActivityKind::Walking => 4,
            ActivityKind::Swimming => 5,
        }
    }

    /// Checks `values` against [`ActivityKind::arity`].
    pub fn check_arity(&self, values: &[f64]) -> Result<()> {
        if values.len() == self.arity() {
            Ok(())
        } else {
            Err(WorkoutError::Arity {
                kind: *self,
                expected: self.arity(),
                actual: values.len(),
            })
        }
    }
}

/// Parameters every workout carries, in package order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommonParameters {
    /// Steps for running and walking, strokes for swimming.
    pub action: f64,
    pub duration_h: f64,
    pub weight_kg: f64,
}

impl CommonParameters {
    /// Reads the leading three values. Callers check arity first.
    pub(crate) fn from_prefix(values: &[f64]) -> Self {
        Self {
            action: values[0],
            duration_h: values[1],
            weight_kg: values[2],
        }
    }
}

/// Computed figures for one workout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkoutSummary {
    pub kind: ActivityKind,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

pub fn distance_km(action: f64, step_length_m: f64) -> f64 {
    action * step_length_m / M_IN_KM
}

pub fn mean_speed_kmh(distance_km: f64, duration_h: f64) -> Result<f64> {
    checked_div(distance_km, duration_h).ok_or(WorkoutError::DivisionByZero {
        quantity: "duration",
    })
}

/// A workout whose distance, speed and calories can be computed.
///
/// Implementors override the defaults where their formula differs.
pub trait Training: fmt::Debug + Send + Sync {
    fn kind(&self) -> ActivityKind;

    fn common(&self) -> &CommonParameters;

    fn step_length_m(&self) -> f64 {
        STEP_LENGTH_M
    }

    fn distance(&self) -> f64 {
        distance_km(self.common().action, self.step_length_m())
    }

    fn mean_speed(&self) -> Result<f64> {
        mean_speed_kmh(self.distance(), self.common().duration_h)
    }

    fn spent_calories(&self) -> Result<f64>;

    fn summary(&self) -> Result<WorkoutSummary> {
        Ok(WorkoutSummary {
            kind: self.kind(),
            duration_h: self.common().duration_h,
            distance_km: self.distance(),
            mean_speed_kmh: self.mean_speed()?,
            calories_kcal: self.spent_calories()?,
        })
    }

    fn show_training_info(&self) -> Result<InfoMessage> {
        self.summary().map(InfoMessage::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_codes_round_trip() {
        for kind in ActivityKind::ALL {
            assert_eq!(ActivityKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert_eq!(ActivityKind::from_code("run"), None);
        assert_eq!(ActivityKind::from_code("XYZ"), None);
        assert_eq!(ActivityKind::from_code(""), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ActivityKind::Running.to_string(), "Running");
        assert_eq!(ActivityKind::Walking.to_string(), "SportsWalking");
        assert_eq!(ActivityKind::Swimming.to_string(), "Swimming");
    }

    #[test]
    fn test_kind_serializes_as_display_name() {
        let json = serde_json::to_string(&ActivityKind::Walking).unwrap();
        assert_eq!(json, "\"SportsWalking\"");
    }

    #[test]
    fn test_check_arity() {
        assert!(ActivityKind::Running.check_arity(&[1.0, 2.0, 3.0]).is_ok());
        assert_matches!(
            ActivityKind::Walking.check_arity(&[1.0, 2.0, 3.0]),
            Err(WorkoutError::Arity {
                kind: ActivityKind::Walking,
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_distance_km() {
        assert!((distance_km(15000.0, STEP_LENGTH_M) - 9.75).abs() < 1e-9);
        assert_eq!(distance_km(0.0, STEP_LENGTH_M), 0.0);
    }

    #[test]
    fn test_mean_speed_zero_duration() {
        assert_matches!(
            mean_speed_kmh(9.75, 0.0),
            Err(WorkoutError::DivisionByZero {
                quantity: "duration"
            })
        );
    }

    #[test]
    fn test_mean_speed_kmh() {
        assert_eq!(mean_speed_kmh(9.0, 2.0).unwrap(), 4.5);
    }
}
