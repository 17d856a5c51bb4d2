//! Pointer phases and samples delivered by the host surface.
//!
//! The host translates its native touch-event representation into this
//! form; one interaction is bounded by a `Start` and an `End` sample, with
//! any number of `Move` samples in between.

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
}

/// One pointer-position sample: where the pointer is and which phase of
/// the interaction it belongs to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub phase: PointerPhase,
    pub position: Point,
}

impl PointerSample {
    pub const fn new(phase: PointerPhase, position: Point) -> Self {
        Self { phase, position }
    }

    /// Sample opening an interaction (finger down).
    pub const fn start(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Start, Point::new(x, y))
    }

    /// Intermediate drag sample. Hosts that track drag previews emit
    /// these; the classifier discards them.
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Move, Point::new(x, y))
    }

    /// Sample terminating an interaction (finger up).
    pub const fn end(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::End, Point::new(x, y))
    }
}
