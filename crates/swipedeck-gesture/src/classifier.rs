//! End-point swipe classification.
//!
//! [`SwipeClassifier`] turns one press-drag-release interaction into at
//! most one compass [`Direction`]. Only where the drag started and where
//! it ended matter; the path between them is discarded, so a wandering
//! drag classifies the same as a straight one with the same endpoints.

use crate::config::{ConfigError, GestureConfig};
use crate::geometry::Point;
use crate::pointer::{PointerPhase, PointerSample};

/// The eight compass directions a swipe can resolve to.
///
/// Directions follow finger motion in screen coordinates: `y` grows
/// downward, so `Up` means the pointer ended above where it started.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Every direction, in slot order (`direction as usize` indexes it).
    pub const ALL: [Direction; Direction::COUNT] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    pub const COUNT: usize = 8;

    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::UpLeft | Direction::UpRight | Direction::DownLeft | Direction::DownRight
        )
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }

    /// Flips the vertical component, keeping the horizontal one.
    /// `Left` and `Right` map to themselves.
    pub fn mirror_vertical(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Left,
            Direction::Right => Direction::Right,
            Direction::UpLeft => Direction::DownLeft,
            Direction::UpRight => Direction::DownRight,
            Direction::DownLeft => Direction::UpLeft,
            Direction::DownRight => Direction::UpRight,
        }
    }
}

/// Classifies one touch interaction into a swipe direction.
///
/// Long-lived: one classifier per gesture-enabled surface, reused across
/// many interactions. Every `Start` sample overwrites the recorded origin,
/// so a new press implicitly restarts any in-flight interaction; there is
/// no explicit cancel.
pub struct SwipeClassifier {
    config: GestureConfig,
    origin: Option<Point>,
}

impl Default for SwipeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeClassifier {
    /// Creates a classifier with the platform-convention thresholds.
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            origin: None,
        }
    }

    /// Replaces the active thresholds.
    ///
    /// Validation and the derived-threshold recomputation happen before
    /// anything is stored, so a rejected call leaves the previous
    /// configuration in effect.
    pub fn configure(
        &mut self,
        paging_threshold: f32,
        diagonal_sensitivity: f32,
    ) -> Result<(), ConfigError> {
        self.config = GestureConfig::new(paging_threshold, diagonal_sensitivity)?;
        Ok(())
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Records `(x, y)` as the interaction origin (finger down).
    pub fn on_start(&mut self, x: f32, y: f32) {
        self.origin = Some(Point::new(x, y));
    }

    /// Ends the interaction at `(x, y)` and classifies the displacement
    /// from the recorded origin.
    ///
    /// The origin is read, not cleared; only the next `Start` replaces it.
    /// An end with no origin recorded yet yields `None` rather than
    /// assuming a default position.
    pub fn on_end(&mut self, x: f32, y: f32) -> Option<Direction> {
        let origin = match self.origin {
            Some(origin) => origin,
            None => {
                log::debug!("pointer end at ({x}, {y}) with no recorded start; ignoring");
                return None;
            }
        };

        let dx = x - origin.x;
        let dy = y - origin.y;
        let direction = classify(dx, dy, &self.config);
        match direction {
            Some(direction) => {
                log::debug!("swipe {direction:?} accepted (dx={dx:.1}, dy={dy:.1})");
            }
            None => {
                log::trace!("displacement (dx={dx:.1}, dy={dy:.1}) below slop; no direction");
            }
        }
        direction
    }

    /// Phase-dispatching entry point for hosts that feed raw samples.
    ///
    /// `Start` records the origin, `End` classifies, and `Move` samples
    /// are discarded: the decision is made from the endpoints alone.
    pub fn on_sample(&mut self, sample: PointerSample) -> Option<Direction> {
        match sample.phase {
            PointerPhase::Start => {
                self.on_start(sample.position.x, sample.position.y);
                None
            }
            PointerPhase::Move => None,
            PointerPhase::End => self.on_end(sample.position.x, sample.position.y),
        }
    }
}

/// Resolves a displacement against the configured thresholds.
///
/// Checks run in a fixed order and the first hit wins: the four diagonals
/// (both axes past the diagonal threshold), then Left/Right, then
/// Down/Up. Horizontal-before-vertical decides near-45° swipes that did
/// not qualify as diagonal. Threshold equality does not count as movement.
fn classify(dx: f32, dy: f32, config: &GestureConfig) -> Option<Direction> {
    let up = dy < 0.0;
    let down = dy > 0.0;
    let left = dx < 0.0;
    let right = dx > 0.0;

    let abs_dx = dx.abs();
    let abs_dy = dy.abs();
    let paging = config.paging_threshold();
    let diagonal = config.diagonal_threshold();

    if up && abs_dy > diagonal && left && abs_dx > diagonal {
        Some(Direction::UpLeft)
    } else if up && abs_dy > diagonal && right && abs_dx > diagonal {
        Some(Direction::UpRight)
    } else if down && abs_dy > diagonal && left && abs_dx > diagonal {
        Some(Direction::DownLeft)
    } else if down && abs_dy > diagonal && right && abs_dx > diagonal {
        Some(Direction::DownRight)
    } else if left && abs_dx > paging {
        Some(Direction::Left)
    } else if right && abs_dx > paging {
        Some(Direction::Right)
    } else if down && abs_dy > paging {
        Some(Direction::Down)
    } else if up && abs_dy > paging {
        Some(Direction::Up)
    } else {
        None
    }
}
