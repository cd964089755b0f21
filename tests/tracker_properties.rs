use jtrack::{Direction, Event, Frame, JuggleTracker, Tracking};
use proptest::prelude::*;

/// (height or dropout, seconds since previous tick)
fn ticks() -> impl Strategy<Value = Vec<(Option<f64>, f64)>> {
    prop::collection::vec(
        (prop::option::weighted(0.85, 0.0f64..480.0), 0.005f64..0.2),
        0..400,
    )
}

/// Bouncing ball with random amplitude, speed and occasional dropouts.
fn bounces() -> impl Strategy<Value = Vec<(Option<f64>, f64)>> {
    (20.0f64..200.0, 4usize..12, 0.01f64..0.08, 100usize..600).prop_flat_map(
        |(amplitude, half_period, dt, len)| {
            prop::collection::vec(prop::bool::weighted(0.05), len).prop_map(move |drops| {
                drops
                    .into_iter()
                    .enumerate()
                    .map(|(i, dropped)| {
                        let phase = i % (2 * half_period);
                        let offset = if phase <= half_period {
                            phase
                        } else {
                            2 * half_period - phase
                        };
                        let y = 100.0 + amplitude * offset as f64 / half_period as f64;
                        ((!dropped).then_some(y), dt)
                    })
                    .collect()
            })
        },
    )
}

fn run(ticks: &[(Option<f64>, f64)]) -> (JuggleTracker, Vec<(f64, Event)>) {
    let mut tracker = JuggleTracker::new(0.0);
    let mut events = Vec::new();
    let mut ts = 0.0;

    for &(height, dt) in ticks {
        ts += dt;
        let frame = Frame::new(ts, height.map(|y| jtrack::Detection::new(320.0, y, 10)));
        let before = (tracker.juggle_count(), tracker.touch_count());

        if let Some(event) = tracker.update(&frame) {
            match event {
                Event::Juggle { count, .. } => {
                    assert_eq!(count, before.0 + 1);
                    assert_eq!(tracker.touch_count(), before.1);
                }
                Event::Touch { touches } => {
                    assert_eq!(touches, before.1 + 1);
                    assert_eq!(tracker.juggle_count(), before.0);
                }
            }
            events.push((ts, event));
        } else {
            assert_eq!(before, (tracker.juggle_count(), tracker.touch_count()));
        }

        assert_eq!(tracker.juggle_count() as usize, tracker.intervals().len());
    }

    (tracker, events)
}

fn check_invariants(ticks: &[(Option<f64>, f64)]) {
    let (tracker, events) = run(ticks);

    let juggle_times: Vec<f64> = events
        .iter()
        .filter(|(_, e)| e.is_juggle())
        .map(|(ts, _)| *ts)
        .collect();

    assert_eq!(juggle_times.len(), tracker.juggle_count() as usize);
    for pair in juggle_times.windows(2) {
        assert!(pair[1] - pair[0] > 0.3, "juggles {:?} too close", pair);
    }

    let milestones: Vec<u32> = events
        .iter()
        .filter_map(|(_, e)| e.milestone())
        .map(|m| m.count)
        .collect();
    let expected: Vec<u32> = (1..=tracker.juggle_count() / 10).map(|i| i * 10).collect();
    assert_eq!(milestones, expected);
}

proptest! {
    #[test]
    fn random_noise_keeps_invariants(ticks in ticks()) {
        check_invariants(&ticks);
    }

    #[test]
    fn bouncing_ball_keeps_invariants(ticks in bounces()) {
        check_invariants(&ticks);
    }

    #[test]
    fn short_streams_never_classify(heights in prop::collection::vec(0.0f64..480.0, 0..5)) {
        let ticks: Vec<_> = heights.into_iter().map(|y| (Some(y), 0.05)).collect();
        let (tracker, events) = run(&ticks);

        prop_assert!(events.is_empty());
        prop_assert_eq!(tracker.direction(), Direction::Unknown);
    }

    #[test]
    fn long_dropout_only_clears_direction(ticks in bounces(), gap in 11usize..40) {
        let (mut tracker, _) = run(&ticks);
        let juggles = tracker.juggle_count();
        let touches = tracker.touch_count();
        let intervals = tracker.intervals().to_vec();

        for i in 0..gap {
            prop_assert_eq!(tracker.update(&Frame::missed(1_000.0 + i as f64)), None);
        }

        prop_assert_eq!(tracker.direction(), Direction::Unknown);
        prop_assert_eq!(tracker.juggle_count(), juggles);
        prop_assert_eq!(tracker.touch_count(), touches);
        prop_assert_eq!(tracker.intervals(), &intervals[..]);
    }
}
