//! Host-boundary layer mapping swipe decisions onto a paged deck.
//!
//! `swipedeck-gesture` answers "which way did the finger go"; this crate
//! answers "what does the deck do about it". It provides three pieces:
//!
//! - [`DirectionBindings`]: an eight-slot handler table dispatching one
//!   closure per swipe direction, with unset slots acting as no-ops.
//! - [`PageTurn`] and [`SlideTransition`]: the default mapping from a
//!   swipe to a deck turn plus a push-style animation descriptor. The
//!   descriptors are plain data; rendering them is the host's business.
//! - [`Flipper`]: the deck itself, a displayed-child index cycling over a
//!   fixed page count with wraparound.

pub mod bindings;
pub mod flipper;
pub mod transitions;

pub use bindings::DirectionBindings;
pub use flipper::{FlipEvent, Flipper};
pub use transitions::{PageTurn, SlideTransition};

pub mod prelude {
    pub use crate::bindings::DirectionBindings;
    pub use crate::flipper::{FlipEvent, Flipper};
    pub use crate::transitions::{PageTurn, SlideTransition};
    pub use swipedeck_gesture::prelude::*;
}
