//! Gesture thresholds and their validation.

use std::fmt;

use crate::gesture_constants::{
    DIAGONAL_SLOP_SENSITIVITY, MIN_DIAGONAL_SLOP_SENSITIVITY, PAGING_TOUCH_SLOP,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// `diagonal_sensitivity` must be finite and at least 1.0.
    InvalidDiagonalSensitivity { value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDiagonalSensitivity { value } => write!(
                f,
                "diagonal sensitivity {value} out of range; must be >= {MIN_DIAGONAL_SLOP_SENSITIVITY}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Thresholds for one gesture-enabled surface.
///
/// A straight swipe must beat `paging_threshold` along its axis; a
/// diagonal swipe must beat `diagonal_threshold` (the paging value scaled
/// by the sensitivity multiplier) on both axes. The derived threshold is
/// computed once here, never on the classification path.
///
/// Validation happens at construction, so an in-range value can always be
/// read back without re-checking. There are no mutating setters;
/// reconfiguring means building a new value (see
/// [`SwipeClassifier::configure`](crate::classifier::SwipeClassifier::configure)).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    paging_threshold: f32,
    diagonal_sensitivity: f32,
    diagonal_threshold: f32,
}

impl GestureConfig {
    /// Builds a config from a paging threshold (positive, logical px) and
    /// a diagonal sensitivity (finite, >= 1.0).
    pub fn new(paging_threshold: f32, diagonal_sensitivity: f32) -> Result<Self, ConfigError> {
        if !diagonal_sensitivity.is_finite()
            || diagonal_sensitivity < MIN_DIAGONAL_SLOP_SENSITIVITY
        {
            return Err(ConfigError::InvalidDiagonalSensitivity {
                value: diagonal_sensitivity,
            });
        }
        Ok(Self {
            paging_threshold,
            diagonal_sensitivity,
            diagonal_threshold: paging_threshold * diagonal_sensitivity,
        })
    }

    pub fn paging_threshold(&self) -> f32 {
        self.paging_threshold
    }

    pub fn diagonal_sensitivity(&self) -> f32 {
        self.diagonal_sensitivity
    }

    /// `paging_threshold * diagonal_sensitivity`, cached at construction.
    pub fn diagonal_threshold(&self) -> f32 {
        self.diagonal_threshold
    }
}

impl Default for GestureConfig {
    /// Platform-convention defaults: [`PAGING_TOUCH_SLOP`] with
    /// [`DIAGONAL_SLOP_SENSITIVITY`].
    fn default() -> Self {
        Self {
            paging_threshold: PAGING_TOUCH_SLOP,
            diagonal_sensitivity: DIAGONAL_SLOP_SENSITIVITY,
            diagonal_threshold: PAGING_TOUCH_SLOP * DIAGONAL_SLOP_SENSITIVITY,
        }
    }
}
