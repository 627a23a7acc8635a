use super::{ActivityKind, CommonParameters, Training, M_IN_KM};
use crate::error::{Result, WorkoutError};
use crate::util::checked_div;

/// Distance covered by one stroke, in metres.
const STROKE_LENGTH_M: f64 = 1.38;
const CALORIES_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Swimming: `[strokes, duration_h, weight_kg, pool_length_m, pool_count]`.
///
/// Distance still comes from the stroke count, but mean speed is taken from
/// pool geometry so it does not depend on `action` at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    common: CommonParameters,
    pool_length_m: f64,
    pool_count: f64,
}

impl Swimming {
    pub fn new(
        action: f64,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_count: f64,
    ) -> Self {
        Self {
            common: CommonParameters {
                action,
                duration_h,
                weight_kg,
            },
            pool_length_m,
            pool_count,
        }
    }

    pub fn from_values(values: &[f64]) -> Result<Self> {
        ActivityKind::Swimming.check_arity(values)?;
        Ok(Self {
            common: CommonParameters::from_prefix(values),
            pool_length_m: values[3],
            pool_count: values[4],
        })
    }

    /// Lap distance in kilometres.
    pub fn pool_distance(&self) -> f64 {
        self.pool_length_m * self.pool_count / M_IN_KM
    }
}

impl Training for Swimming {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    fn common(&self) -> &CommonParameters {
        &self.common
    }

    fn step_length_m(&self) -> f64 {
        STROKE_LENGTH_M
    }

    fn mean_speed(&self) -> Result<f64> {
        checked_div(self.pool_distance(), self.common.duration_h).ok_or(
            WorkoutError::DivisionByZero {
                quantity: "duration",
            },
        )
    }

    fn spent_calories(&self) -> Result<f64> {
        Ok((self.mean_speed()? + CALORIES_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.common.weight_kg)
    }
}
