use std::cell::RefCell;
use std::rc::Rc;

use swipedeck_flipper::{DirectionBindings, Flipper};
use swipedeck_gesture::{Direction, PointerSample, SwipeClassifier};

const PAGE_COUNT: usize = 4;

/// One scripted press-drag-release interaction.
struct Trace {
    label: &'static str,
    samples: &'static [PointerSample],
}

const TRACES: &[Trace] = &[
    Trace {
        label: "flick left",
        samples: &[
            PointerSample::start(340.0, 400.0),
            PointerSample::moved(220.0, 398.0),
            PointerSample::moved(110.0, 396.0),
            PointerSample::end(40.0, 395.0),
        ],
    },
    Trace {
        label: "long haul right",
        samples: &[
            PointerSample::start(60.0, 300.0),
            PointerSample::moved(260.0, 305.0),
            PointerSample::end(460.0, 310.0),
        ],
    },
    Trace {
        label: "plunge down",
        samples: &[
            PointerSample::start(400.0, 80.0),
            PointerSample::moved(398.0, 320.0),
            PointerSample::end(395.0, 560.0),
        ],
    },
    Trace {
        label: "drift up",
        samples: &[
            PointerSample::start(300.0, 500.0),
            PointerSample::end(310.0, 430.0),
        ],
    },
    Trace {
        label: "climb up-left",
        samples: &[
            PointerSample::start(520.0, 520.0),
            PointerSample::moved(470.0, 470.0),
            PointerSample::end(420.0, 420.0),
        ],
    },
    Trace {
        label: "arc to the top right",
        samples: &[
            PointerSample::start(120.0, 600.0),
            PointerSample::moved(250.0, 520.0),
            PointerSample::moved(360.0, 400.0),
            PointerSample::end(420.0, 300.0),
        ],
    },
    Trace {
        label: "corner drag down-left",
        samples: &[
            PointerSample::start(500.0, 150.0),
            PointerSample::end(350.0, 420.0),
        ],
    },
    Trace {
        label: "dive down-right",
        samples: &[
            PointerSample::start(100.0, 100.0),
            PointerSample::end(260.0, 260.0),
        ],
    },
    Trace {
        label: "timid tap",
        samples: &[
            PointerSample::start(200.0, 200.0),
            PointerSample::end(203.0, 198.0),
        ],
    },
    Trace {
        label: "wandering but homeward",
        samples: &[
            PointerSample::start(250.0, 250.0),
            PointerSample::moved(500.0, 250.0),
            PointerSample::moved(500.0, 500.0),
            PointerSample::end(252.0, 251.0),
        ],
    },
];

fn run_trace(
    classifier: &mut SwipeClassifier,
    bindings: &DirectionBindings,
    trace: &Trace,
) -> Option<Direction> {
    println!("--- {}", trace.label);
    let mut decision = None;
    for sample in trace.samples {
        decision = classifier.on_sample(*sample);
    }
    match decision {
        Some(direction) => {
            println!("    swipe read as {direction:?}");
            bindings.dispatch(direction);
        }
        None => println!("    no swipe (displacement within slop)"),
    }
    decision
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Swipedeck Flipper Demo ===");
    println!("Replays scripted pointer traces through the classifier and lets");
    println!("the bound handlers turn a {PAGE_COUNT}-page deck:");
    println!("  - straight swipes clear the paging slop on one axis");
    println!("  - diagonal swipes must clear the larger diagonal slop on both");
    println!("  - taps and round trips classify as no swipe at all");
    println!();

    let mut classifier = SwipeClassifier::new();
    let deck = Rc::new(RefCell::new(Flipper::new(PAGE_COUNT)));

    // Bind every direction, as the deck host would: each handler turns the
    // shared deck and narrates the resulting flip.
    let mut bindings = DirectionBindings::new();
    for direction in Direction::ALL {
        let deck = Rc::clone(&deck);
        bindings.bind(direction, move || {
            let event = deck.borrow_mut().apply_swipe(direction);
            println!(
                "    deck turned {:?}; page {} slides in from {:?}",
                event.turn,
                event.displayed_child,
                event.transition.enter_from()
            );
        });
    }

    let mut accepted = 0;
    for trace in TRACES {
        if run_trace(&mut classifier, &bindings, trace).is_some() {
            accepted += 1;
        }
    }

    println!();
    println!(
        "{} of {} traces became swipes; deck rests on page {}",
        accepted,
        TRACES.len(),
        deck.borrow().displayed_child()
    );
    println!();

    // An out-of-range sensitivity is rejected without touching the active
    // thresholds.
    if let Err(error) = classifier.configure(16.0, 0.25) {
        log::warn!("configuration rejected: {error}");
    }

    // Crank the sensitivity and replay the up-left climb: the diagonal
    // band narrows, so the same drag now reads as a straight Left.
    classifier.configure(16.0, 8.0)?;
    println!("with diagonal sensitivity raised to 8.0:");
    run_trace(&mut classifier, &bindings, &TRACES[4]);

    Ok(())
}
