use tracing::debug;

use crate::error::{Result, WorkoutError};
use crate::training::{ActivityKind, Running, SportsWalking, Swimming, Training};

/// Builds the calculator for an activity code from its positional values.
///
/// Unknown codes are reported before arity so the caller can tell the two apart.
pub fn read_package(code: &str, values: &[f64]) -> Result<Box<dyn Training>> {
    let kind = ActivityKind::from_code(code).ok_or_else(|| WorkoutError::UnknownActivity {
        code: code.to_string(),
    })?;
    debug!(code, ?kind, count = values.len(), "dispatching workout");
    build(kind, values)
}

pub fn build(kind: ActivityKind, values: &[f64]) -> Result<Box<dyn Training>> {
    Ok(match kind {
        ActivityKind::Running => Box::new(Running::from_values(values)?),
        ActivityKind::Walking => Box::new(SportsWalking::from_values(values)?),
        ActivityKind::Swimming => Box::new(Swimming::from_values(values)?),
    })
}
