//! Per-direction handler table.
//!
//! One optional closure per swipe direction. The host binds whichever
//! directions it cares about and feeds every accepted classification to
//! [`DirectionBindings::dispatch`]; directions without a handler fall
//! through as no-ops.

use std::rc::Rc;

use swipedeck_gesture::Direction;

type Handler = Rc<dyn Fn()>;

const UNBOUND: Option<Handler> = None;

/// Eight handler slots indexed by [`Direction`].
pub struct DirectionBindings {
    slots: [Option<Handler>; Direction::COUNT],
}

impl Default for DirectionBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectionBindings {
    /// Creates a table with every slot unbound.
    pub fn new() -> Self {
        Self {
            slots: [UNBOUND; Direction::COUNT],
        }
    }

    /// Binds `handler` to `direction`, replacing any previous handler.
    pub fn bind(&mut self, direction: Direction, handler: impl Fn() + 'static) {
        self.bind_shared(direction, Rc::new(handler));
    }

    /// Binds an already-shared handler; lets one closure serve several
    /// directions without cloning its captures.
    pub fn bind_shared(&mut self, direction: Direction, handler: Handler) {
        self.slots[direction as usize] = Some(handler);
    }

    /// Clears the slot, reporting whether a handler had been bound.
    pub fn unbind(&mut self, direction: Direction) -> bool {
        self.slots[direction as usize].take().is_some()
    }

    pub fn is_bound(&self, direction: Direction) -> bool {
        self.slots[direction as usize].is_some()
    }

    /// Runs the handler bound to `direction`, if any.
    ///
    /// Returns whether a handler ran. Unbound slots are a silent no-op
    /// apart from a trace breadcrumb.
    pub fn dispatch(&self, direction: Direction) -> bool {
        match &self.slots[direction as usize] {
            Some(handler) => {
                handler();
                true
            }
            None => {
                log::trace!("swipe {direction:?} has no bound handler");
                false
            }
        }
    }
}

impl std::fmt::Debug for DirectionBindings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bound: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|direction| self.is_bound(*direction))
            .collect();
        f.debug_struct("DirectionBindings")
            .field("bound", &bound)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn dispatch_on_unbound_slot_is_a_noop() {
        let bindings = DirectionBindings::new();
        for direction in Direction::ALL {
            assert!(!bindings.dispatch(direction));
        }
    }

    #[test]
    fn bound_handler_runs_on_dispatch() {
        let hits = Rc::new(Cell::new(0));
        let mut bindings = DirectionBindings::new();
        let counter = Rc::clone(&hits);
        bindings.bind(Direction::Left, move || counter.set(counter.get() + 1));

        assert!(bindings.dispatch(Direction::Left));
        assert!(bindings.dispatch(Direction::Left));
        assert_eq!(hits.get(), 2);

        // Other slots stay unbound.
        assert!(!bindings.dispatch(Direction::Right));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn rebinding_replaces_the_previous_handler() {
        let first_hits = Rc::new(Cell::new(0));
        let second_hits = Rc::new(Cell::new(0));
        let mut bindings = DirectionBindings::new();

        let counter = Rc::clone(&first_hits);
        bindings.bind(Direction::Up, move || counter.set(counter.get() + 1));
        let counter = Rc::clone(&second_hits);
        bindings.bind(Direction::Up, move || counter.set(counter.get() + 1));

        bindings.dispatch(Direction::Up);
        assert_eq!(first_hits.get(), 0, "replaced handler must not run");
        assert_eq!(second_hits.get(), 1);
    }

    #[test]
    fn unbind_clears_the_slot() {
        let mut bindings = DirectionBindings::new();
        bindings.bind(Direction::DownLeft, || {});

        assert!(bindings.is_bound(Direction::DownLeft));
        assert!(bindings.unbind(Direction::DownLeft));
        assert!(!bindings.is_bound(Direction::DownLeft));
        assert!(!bindings.unbind(Direction::DownLeft), "already unbound");
        assert!(!bindings.dispatch(Direction::DownLeft));
    }

    #[test]
    fn shared_handler_serves_several_directions() {
        let hits = Rc::new(Cell::new(0));
        let mut bindings = DirectionBindings::new();

        let counter = Rc::clone(&hits);
        let handler: Rc<dyn Fn()> = Rc::new(move || counter.set(counter.get() + 1));
        bindings.bind_shared(Direction::UpLeft, Rc::clone(&handler));
        bindings.bind_shared(Direction::UpRight, handler);

        bindings.dispatch(Direction::UpLeft);
        bindings.dispatch(Direction::UpRight);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn slots_are_independent_per_direction() {
        let mut bindings = DirectionBindings::new();
        let counters: Vec<Rc<Cell<usize>>> = Direction::ALL
            .iter()
            .map(|_| Rc::new(Cell::new(0)))
            .collect();

        for (direction, counter) in Direction::ALL.into_iter().zip(&counters) {
            let counter = Rc::clone(counter);
            bindings.bind(direction, move || counter.set(counter.get() + 1));
        }

        bindings.dispatch(Direction::DownRight);
        for (direction, counter) in Direction::ALL.into_iter().zip(&counters) {
            let expected = usize::from(direction == Direction::DownRight);
            assert_eq!(counter.get(), expected, "hits for {direction:?}");
        }
    }
}
