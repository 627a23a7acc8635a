pub fn checked_div(numerator: f64, divisor: f64) -> Option<f64> {
    match divisor {
        zero if zero == 0.0 => None,
        divisor => Some(numerator / divisor),
    }
}

/// Floor division on floats: the quotient rounded toward negative infinity.
pub fn floor_div(numerator: f64, divisor: f64) -> Option<f64> {
    checked_div(numerator, divisor).map(f64::floor)
}
