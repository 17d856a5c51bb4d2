//! Shared gesture constants for consistent swipe handling.
//!
//! # DPI Considerations
//!
//! These values are in logical pixels. For very high-density touch
//! screens, consider scaling by the device's DPI factor before building a
//! [`GestureConfig`](crate::config::GestureConfig) from them.

/// Paging threshold in logical pixels.
///
/// A straight swipe must travel farther than this along its axis before it
/// is accepted as a page gesture rather than finger jitter or a tap.
///
/// Value of 16.0 matches common platform conventions (Android's
/// ViewConfiguration uses ~16dp for its paging touch slop, twice the 8dp
/// base touch slop).
pub const PAGING_TOUCH_SLOP: f32 = 16.0;

/// Default diagonal sensitivity multiplier.
///
/// Diagonal directions must beat `PAGING_TOUCH_SLOP * this` on both axes.
/// A bigger value makes diagonals harder to hit; 1.0 makes them exactly as
/// easy as straight directions.
pub const DIAGONAL_SLOP_SENSITIVITY: f32 = 3.0;

/// Smallest accepted diagonal sensitivity; lower values fail validation.
pub const MIN_DIAGONAL_SLOP_SENSITIVITY: f32 = 1.0;
