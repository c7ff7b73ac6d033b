/// Validation failures for maneuvering inputs
///
/// Shortfalls (a negative tug requirement, a surplus of speed) are clamped by the
/// formulas and never surface here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ManeuverError {
    #[error("{quantity} must be greater than zero (got {value})")]
    NonPositive { quantity: &'static str, value: f64 },

    #[error("{quantity} must not be negative (got {value})")]
    Negative { quantity: &'static str, value: f64 },

    #[error("{quantity} {value} is outside the range {min}..={max}")]
    OutOfRange {
        quantity: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid range: {0}")]
    InvalidRange(String),
}

pub type Result<T, E = ManeuverError> = std::result::Result<T, E>;

pub(crate) fn ensure_positive(quantity: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ManeuverError::NonPositive { quantity, value })
    }
}

pub(crate) fn ensure_non_negative(quantity: &'static str, value: f64) -> Result<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ManeuverError::Negative { quantity, value })
    }
}

pub(crate) fn ensure_within(quantity: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ManeuverError::OutOfRange {
            quantity,
            value,
            min,
            max,
        })
    }
}
