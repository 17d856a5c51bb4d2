//! Geometry primitive shared by the pointer pipeline.

/// A position in logical pixels.
///
/// Screen convention throughout the crate: `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}
