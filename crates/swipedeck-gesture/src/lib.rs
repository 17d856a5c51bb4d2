//! Swipe-to-direction classification for paged surfaces.
//!
//! This crate turns a single press-drag-release pointer interaction into at
//! most one of eight compass directions. The host translates its native
//! touch events into [`PointerSample`]s and feeds them to a long-lived
//! [`SwipeClassifier`]; the classifier answers with an
//! `Option<`[`Direction`]`>` on the terminating sample, which the host maps
//! onto page turns, transitions, or arbitrary handlers.
//!
//! Straight and diagonal directions use different acceptance thresholds:
//! diagonals must beat the base paging slop scaled by a configurable
//! sensitivity on *both* axes, so a mostly-horizontal drag with a little
//! vertical jitter still reads as Left or Right. See [`GestureConfig`].

pub mod classifier;
pub mod config;
pub mod gesture_constants;
pub mod geometry;
pub mod pointer;

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod classifier_tests;

pub use classifier::{Direction, SwipeClassifier};
pub use config::{ConfigError, GestureConfig};
pub use geometry::Point;
pub use pointer::{PointerPhase, PointerSample};

pub mod prelude {
    pub use crate::classifier::{Direction, SwipeClassifier};
    pub use crate::config::{ConfigError, GestureConfig};
    pub use crate::gesture_constants::{DIAGONAL_SLOP_SENSITIVITY, PAGING_TOUCH_SLOP};
    pub use crate::geometry::Point;
    pub use crate::pointer::{PointerPhase, PointerSample};
}
