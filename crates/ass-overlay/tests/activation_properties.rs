//! Property-based tests for the activation scheduler
//!
//! Uses proptest to compare the incremental scheduler against a
//! brute-force oracle across arbitrary interval sets and driver
//! sequences of monotonic ticks and random seeks.

use ass_overlay::Scheduler;
use ass_script::Event;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Driver operations as the engine sees them
#[derive(Debug, Clone, Copy)]
enum Op {
    /// Monotonic clock advance by this many seconds
    Tick(f64),
    /// Jump to an absolute time, possibly backwards or past the end
    Seek(f64),
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((0u32..80, 0u32..30), 0..24).prop_map(|pairs| {
        let mut intervals: Vec<(f64, f64)> = pairs
            .into_iter()
            .map(|(start, len)| {
                let start = f64::from(start);
                (start, start + f64::from(len))
            })
            .collect();
        intervals.sort_by(|a, b| a.0.partial_cmp(&b.0).expect("finite"));
        intervals
            .into_iter()
            .map(|(start, end)| Event::dialogue(start, end, "Default"))
            .collect()
    })
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            (0u32..15).prop_map(|d| Op::Tick(f64::from(d))),
            (0u32..120).prop_map(|t| Op::Seek(f64::from(t))),
        ],
        1..32,
    )
}

/// Ground-truth active set: every event whose interval covers the time
fn oracle(events: &[Event], adjusted: f64) -> BTreeSet<usize> {
    events
        .iter()
        .enumerate()
        .filter(|(_, e)| e.start <= adjusted && adjusted < e.end)
        .map(|(i, _)| i)
        .collect()
}

proptest! {
    #[test]
    fn active_set_matches_oracle(events in arb_events(), ops in arb_ops()) {
        let mut scheduler = Scheduler::new();
        let mut time = 0.0_f64;
        scheduler.frame(&events, time);

        for op in ops {
            match op {
                Op::Tick(delta) => {
                    time += delta;
                    scheduler.frame(&events, time);
                }
                Op::Seek(to) => {
                    time = to;
                    scheduler.reset(&events, time);
                    scheduler.frame(&events, time);
                }
            }
            let got: BTreeSet<usize> = scheduler.actives().iter().copied().collect();
            prop_assert_eq!(got, oracle(&events, time), "at time {}", time);
        }
    }

    #[test]
    fn seek_twice_equals_seek_once(events in arb_events(), to in 0u32..120) {
        let to = f64::from(to);

        let mut once = Scheduler::new();
        once.reset(&events, to);
        once.frame(&events, to);

        let mut twice = Scheduler::new();
        twice.reset(&events, to);
        twice.frame(&events, to);
        twice.reset(&events, to);
        twice.frame(&events, to);

        prop_assert_eq!(once.actives(), twice.actives());
        prop_assert_eq!(once.cursor(), twice.cursor());
    }

    #[test]
    fn delay_shift_equals_shifting_every_event(events in arb_events(), t in 0u32..100, d in -30i32..30) {
        let t = f64::from(t);
        let delay = f64::from(d);

        // Delayed playback at media time t...
        let mut delayed = Scheduler::new();
        delayed.reset(&events, t - delay);
        delayed.frame(&events, t - delay);

        // ...activates the same indices as undelayed playback over a
        // script whose events all start `delay` later
        let shifted_events: Vec<Event> = events
            .iter()
            .map(|e| Event::dialogue(e.start + delay, e.end + delay, "Default"))
            .collect();
        let mut shifted = Scheduler::new();
        shifted.reset(&shifted_events, t);
        shifted.frame(&shifted_events, t);

        prop_assert_eq!(delayed.actives(), shifted.actives());
    }

    #[test]
    fn cursor_never_exceeds_event_count(events in arb_events(), ops in arb_ops()) {
        let mut scheduler = Scheduler::new();
        let mut time = 0.0_f64;
        for op in ops {
            match op {
                Op::Tick(delta) => time += delta,
                Op::Seek(to) => {
                    time = to;
                    scheduler.reset(&events, time);
                }
            }
            scheduler.frame(&events, time);
            prop_assert!(scheduler.cursor() <= events.len());
        }
    }
}
