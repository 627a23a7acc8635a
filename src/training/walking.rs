use super::{ActivityKind, CommonParameters, Training, MINS_IN_HOUR};
use crate::error::{Result, WorkoutError};
use crate::util::floor_div;

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Sports walking: `[steps, duration_h, weight_kg, height_cm]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    common: CommonParameters,
    height_cm: f64,
}

impl SportsWalking {
    pub fn new(action: f64, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            common: CommonParameters {
                action,
                duration_h,
                weight_kg,
            },
            height_cm,
        }
    }

    pub fn from_values(values: &[f64]) -> Result<Self> {
        ActivityKind::Walking.check_arity(values)?;
        Ok(Self {
            common: CommonParameters::from_prefix(values),
            height_cm: values[3],
        })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Walking
    }

    fn common(&self) -> &CommonParameters {
        &self.common
    }

    fn spent_calories(&self) -> Result<f64> {
        let speed = self.mean_speed()?;
        // floored on purpose: short walks contribute nothing from this term
        let speed_height_ratio = floor_div(speed.powi(2), self.height_cm)
            .ok_or(WorkoutError::DivisionByZero { quantity: "height" })?;
        let CommonParameters {
            duration_h,
            weight_kg,
            ..
        } = self.common;
        Ok((CALORIES_WEIGHT_MULTIPLIER * weight_kg
            + speed_height_ratio * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight_kg)
            * duration_h
            * MINS_IN_HOUR)
    }
}
