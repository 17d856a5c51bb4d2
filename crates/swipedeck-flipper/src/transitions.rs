//! Default swipe-to-deck-motion mapping.
//!
//! Every accepted swipe resolves to a [`PageTurn`] (which neighbour to
//! show) and a [`SlideTransition`] (which way the panels are pushed while
//! it happens). Both are plain descriptors; the host owns the animation.

use swipedeck_gesture::Direction;

/// Which neighbouring page an accepted swipe reveals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTurn {
    Next,
    Previous,
}

impl PageTurn {
    /// Default swipe-to-turn mapping.
    ///
    /// Any leftward horizontal component turns to the next page, any
    /// rightward one to the previous; the pure verticals split the same
    /// way, `Down` as next and `Up` as previous.
    pub fn for_swipe(direction: Direction) -> Self {
        match direction {
            Direction::Left | Direction::UpLeft | Direction::DownLeft | Direction::Down => {
                PageTurn::Next
            }
            Direction::Right | Direction::UpRight | Direction::DownRight | Direction::Up => {
                PageTurn::Previous
            }
        }
    }
}

/// A push-style transition: every panel slides `towards` one compass
/// direction. The incoming panel enters from the opposite edge, the
/// outgoing one exits over the `towards` edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideTransition {
    towards: Direction,
}

impl SlideTransition {
    pub const fn new(towards: Direction) -> Self {
        Self { towards }
    }

    /// Default swipe-to-push mapping: the vertical component of the swipe
    /// is mirrored and the horizontal one kept, so a downward swipe pushes
    /// the panels up while a leftward swipe pushes them left.
    pub fn for_swipe(direction: Direction) -> Self {
        Self::new(direction.mirror_vertical())
    }

    /// The direction every panel moves in.
    pub fn towards(self) -> Direction {
        self.towards
    }

    /// Edge the incoming panel slides in from.
    pub fn enter_from(self) -> Direction {
        self.towards.opposite()
    }

    /// Edge the outgoing panel slides out over.
    pub fn exit_towards(self) -> Direction {
        self.towards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_covers_all_eight_swipes() {
        // (swipe, expected turn, expected push direction)
        let cases = [
            (Direction::Left, PageTurn::Next, Direction::Left),
            (Direction::Right, PageTurn::Previous, Direction::Right),
            (Direction::Down, PageTurn::Next, Direction::Up),
            (Direction::Up, PageTurn::Previous, Direction::Down),
            (Direction::DownLeft, PageTurn::Next, Direction::UpLeft),
            (Direction::DownRight, PageTurn::Previous, Direction::UpRight),
            (Direction::UpLeft, PageTurn::Next, Direction::DownLeft),
            (Direction::UpRight, PageTurn::Previous, Direction::DownRight),
        ];
        for (swipe, turn, towards) in cases {
            assert_eq!(PageTurn::for_swipe(swipe), turn, "turn for {swipe:?}");
            assert_eq!(
                SlideTransition::for_swipe(swipe).towards(),
                towards,
                "push direction for {swipe:?}"
            );
        }
    }

    #[test]
    fn leftward_components_turn_next() {
        for direction in [Direction::Left, Direction::UpLeft, Direction::DownLeft] {
            assert_eq!(PageTurn::for_swipe(direction), PageTurn::Next);
        }
    }

    #[test]
    fn panels_enter_opposite_the_push_edge() {
        for direction in Direction::ALL {
            let transition = SlideTransition::for_swipe(direction);
            assert_eq!(transition.enter_from(), transition.towards().opposite());
            assert_eq!(transition.exit_towards(), transition.towards());
        }
    }

    #[test]
    fn horizontal_swipes_push_in_their_own_direction() {
        assert_eq!(
            SlideTransition::for_swipe(Direction::Left).towards(),
            Direction::Left
        );
        assert_eq!(
            SlideTransition::for_swipe(Direction::Right).towards(),
            Direction::Right
        );
    }
}
