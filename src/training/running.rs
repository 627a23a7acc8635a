use super::{ActivityKind, CommonParameters, Training, MINS_IN_HOUR, M_IN_KM};
use crate::error::Result;

const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_SPEED_SHIFT: f64 = 20.0;

/// Running: `[steps, duration_h, weight_kg]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    common: CommonParameters,
}

impl Running {
    pub fn new(action: f64, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            common: CommonParameters {
                action,
                duration_h,
                weight_kg,
            },
        }
    }

    pub fn from_values(values: &[f64]) -> Result<Self> {
        ActivityKind::Running.check_arity(values)?;
        Ok(Self {
            common: CommonParameters::from_prefix(values),
        })
    }
}

impl Training for Running {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Running
    }

    fn common(&self) -> &CommonParameters {
        &self.common
    }

    fn spent_calories(&self) -> Result<f64> {
        let speed = self.mean_speed()?;
        let CommonParameters {
            duration_h,
            weight_kg,
            ..
        } = self.common;
        Ok(
            (CALORIES_SPEED_MULTIPLIER * speed - CALORIES_SPEED_SHIFT) * weight_kg / M_IN_KM
                * duration_h
                * MINS_IN_HOUR,
        )
    }
}
