//! Paged-deck state: a displayed-child index cycling over a fixed set of
//! pages. No view hierarchy and no rendering; hosts observe the index and
//! the emitted [`FlipEvent`]s and draw whatever they like.

use swipedeck_gesture::Direction;

use crate::transitions::{PageTurn, SlideTransition};

/// What one accepted swipe did to the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlipEvent {
    pub turn: PageTurn,
    pub transition: SlideTransition,
    /// Index shown after the turn.
    pub displayed_child: usize,
}

/// A deck of `page_count` pages with one displayed at a time.
///
/// Turns wrap around at both ends. Decks with fewer than two pages accept
/// every operation but never move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flipper {
    page_count: usize,
    displayed_child: usize,
}

impl Flipper {
    /// Creates a deck showing page 0.
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count,
            displayed_child: 0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Index of the page currently shown. Stays 0 for an empty deck.
    pub fn displayed_child(&self) -> usize {
        self.displayed_child
    }

    /// Advances to the following page, wrapping past the last back to 0.
    pub fn show_next(&mut self) {
        if self.page_count < 2 {
            log::trace!("deck of {} page(s) cannot turn", self.page_count);
            return;
        }
        self.displayed_child = (self.displayed_child + 1) % self.page_count;
        log::debug!("deck turned next; showing child {}", self.displayed_child);
    }

    /// Steps back to the preceding page, wrapping from 0 to the last.
    pub fn show_previous(&mut self) {
        if self.page_count < 2 {
            log::trace!("deck of {} page(s) cannot turn", self.page_count);
            return;
        }
        self.displayed_child = (self.displayed_child + self.page_count - 1) % self.page_count;
        log::debug!("deck turned previous; showing child {}", self.displayed_child);
    }

    /// Turns the deck according to the default swipe mapping and reports
    /// the turn, the push transition to play, and the resulting index.
    pub fn apply_swipe(&mut self, direction: Direction) -> FlipEvent {
        let turn = PageTurn::for_swipe(direction);
        let transition = SlideTransition::for_swipe(direction);
        match turn {
            PageTurn::Next => self.show_next(),
            PageTurn::Previous => self.show_previous(),
        }
        FlipEvent {
            turn,
            transition,
            displayed_child: self.displayed_child,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_past_the_last_page() {
        let mut deck = Flipper::new(3);
        deck.show_next();
        assert_eq!(deck.displayed_child(), 1);
        deck.show_next();
        assert_eq!(deck.displayed_child(), 2);
        deck.show_next();
        assert_eq!(deck.displayed_child(), 0, "wraps back to the first page");
    }

    #[test]
    fn previous_wraps_from_zero_to_the_last_page() {
        let mut deck = Flipper::new(4);
        deck.show_previous();
        assert_eq!(deck.displayed_child(), 3);
        deck.show_previous();
        assert_eq!(deck.displayed_child(), 2);
    }

    #[test]
    fn empty_deck_never_moves() {
        let mut deck = Flipper::new(0);
        deck.show_next();
        deck.show_previous();
        assert_eq!(deck.displayed_child(), 0);
    }

    #[test]
    fn single_page_deck_never_moves() {
        let mut deck = Flipper::new(1);
        deck.show_next();
        deck.show_previous();
        assert_eq!(deck.displayed_child(), 0);
    }

    #[test]
    fn swipe_left_reveals_the_next_page() {
        let mut deck = Flipper::new(3);
        let event = deck.apply_swipe(Direction::Left);
        assert_eq!(event.turn, PageTurn::Next);
        assert_eq!(event.transition.towards(), Direction::Left);
        assert_eq!(event.displayed_child, 1);
        assert_eq!(deck.displayed_child(), 1);
    }

    #[test]
    fn swipe_up_reveals_the_previous_page_pushing_down() {
        let mut deck = Flipper::new(3);
        let event = deck.apply_swipe(Direction::Up);
        assert_eq!(event.turn, PageTurn::Previous);
        assert_eq!(event.transition.towards(), Direction::Down);
        assert_eq!(event.displayed_child, 2, "wrapped backwards from 0");
    }

    #[test]
    fn opposite_swipes_cancel_out() {
        let mut deck = Flipper::new(5);
        deck.apply_swipe(Direction::Left);
        deck.apply_swipe(Direction::Right);
        assert_eq!(deck.displayed_child(), 0);

        deck.apply_swipe(Direction::DownLeft);
        deck.apply_swipe(Direction::UpRight);
        assert_eq!(deck.displayed_child(), 0);
    }

    #[test]
    fn swipes_on_a_single_page_deck_still_report_the_mapping() {
        let mut deck = Flipper::new(1);
        let event = deck.apply_swipe(Direction::Down);
        assert_eq!(event.turn, PageTurn::Next);
        assert_eq!(event.transition.towards(), Direction::Up);
        assert_eq!(event.displayed_child, 0, "the deck itself never moved");
    }
}
