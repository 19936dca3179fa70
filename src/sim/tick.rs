//! Fixed simulation tick
//!
//! One tick = one display refresh. Every pill moves once, then each unordered
//! pair is checked for overlap exactly once in collection order. A resolution
//! earlier in the pass is not re-scanned against pairs already visited.

use super::state::PillField;
use crate::clamp_to_field;

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Overlapping pairs that were resolved (including stalled ones)
    pub collisions: u32,
    /// Pairs that were still overlapping when separation gave up
    pub stalled: u32,
}

/// Advance the pill field by one tick
pub fn tick(state: &mut PillField) -> StepReport {
    let bounds = state.bounds;
    let max_steps = state.max_separation_steps;
    let mut report = StepReport::default();

    for pill in state.pills.iter_mut() {
        pill.move_step(bounds);
    }

    let count = state.pills.len();
    for i in 0..count {
        for j in (i + 1)..count {
            let (head, tail) = state.pills.split_at_mut(j);
            let (a, b) = (&mut head[i], &mut tail[0]);
            if !a.overlaps(b) {
                continue;
            }

            report.collisions += 1;
            let outcome = a.resolve_collision_with(b, max_steps);
            if outcome.is_stalled() {
                // A locked pair stalls again every tick; keep this out of the default log
                report.stalled += 1;
                log::debug!(
                    "Pills '{}' and '{}' still overlap after {} separation steps",
                    a.label(),
                    b.label(),
                    outcome.steps()
                );
            }
        }
    }

    // Separation stepping ignores the walls; pull anything it pushed out back in
    for pill in state.pills.iter_mut() {
        pill.pos = clamp_to_field(pill.pos, pill.size, bounds);
    }

    state.time_ticks += 1;

    if report.collisions > 0 {
        log::debug!(
            "tick {}: {} collisions ({} stalled)",
            state.time_ticks,
            report.collisions,
            report.stalled
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;
    use crate::sim::WordPill;
    use glam::Vec2;
    use proptest::prelude::*;

    const FIELD: Vec2 = Vec2::new(800.0, 600.0);
    const SIZE: Vec2 = Vec2::new(80.0, 30.0);

    fn pill(label: &str, x: f32, y: f32, vx: f32, vy: f32) -> WordPill {
        WordPill::new(label, Vec2::new(x, y), Vec2::new(vx, vy), SIZE)
    }

    #[test]
    fn test_tick_empty_field() {
        let mut state = PillField::with_pills(FIELD, Vec::new(), 512);
        let report = tick(&mut state);
        assert_eq!(report, StepReport::default());
        assert_eq!(state.time_ticks(), 1);
    }

    #[test]
    fn test_tick_moves_every_pill() {
        let mut state = PillField::with_pills(
            FIELD,
            vec![pill("Lion", 10.0, 10.0, 1.0, 0.0), pill("Tiger", 400.0, 300.0, 0.0, -1.0)],
            512,
        );
        tick(&mut state);
        assert_eq!(state.pills()[0].pos, Vec2::new(11.0, 10.0));
        assert_eq!(state.pills()[1].pos, Vec2::new(400.0, 299.0));
    }

    #[test]
    fn test_tick_resolves_head_on_collision() {
        let mut state = PillField::with_pills(
            FIELD,
            vec![pill("Lion", 100.0, 100.0, 2.0, 0.0), pill("Tiger", 170.0, 100.0, -2.0, 0.0)],
            512,
        );

        let report = tick(&mut state);

        assert_eq!(report.collisions, 1);
        assert_eq!(report.stalled, 0);
        let (a, b) = (&state.pills()[0], &state.pills()[1]);
        assert!(!a.overlaps(b));
        assert_eq!(a.vel, Vec2::new(-2.0, 0.0));
        assert_eq!(b.vel, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_tick_counts_stalled_pairs() {
        let mut state = PillField::with_pills(
            FIELD,
            vec![pill("Lion", 300.0, 300.0, 1.0, 1.0), pill("Tiger", 310.0, 305.0, 1.0, 1.0)],
            512,
        );
        let report = tick(&mut state);
        assert_eq!(report, StepReport { collisions: 1, stalled: 1 });
    }

    #[test]
    fn test_tick_locked_pair_stalls_every_tick() {
        let mut state = PillField::with_pills(
            FIELD,
            vec![pill("Lion", 300.0, 300.0, 1.0, 1.0), pill("Tiger", 310.0, 305.0, 1.0, 1.0)],
            512,
        );
        for _ in 0..30 {
            assert_eq!(tick(&mut state), StepReport { collisions: 1, stalled: 1 });
        }
        // Lockstep pills never drift apart
        let (a, b) = (&state.pills()[0], &state.pills()[1]);
        assert_eq!(b.pos - a.pos, Vec2::new(10.0, 5.0));
    }

    #[test]
    fn test_tick_keeps_separated_pills_in_field() {
        // Separation pushes Lion left through the wall; the tick clamps it back
        let mut state = PillField::with_pills(
            FIELD,
            vec![pill("Lion", 2.0, 100.0, 2.0, 0.0), pill("Tiger", 60.0, 100.0, -2.0, 0.0)],
            512,
        );
        tick(&mut state);
        for p in state.pills() {
            assert!(p.pos.x >= 0.0 && p.pos.x <= FIELD.x - SIZE.x);
        }
    }

    #[test]
    fn test_determinism() {
        // Two fields with the same seed should evolve identically
        let config = GameConfig::default();
        let mut state1 = PillField::new(&config, 99999);
        let mut state2 = PillField::new(&config, 99999);

        for _ in 0..500 {
            assert_eq!(tick(&mut state1), tick(&mut state2));
        }

        assert_eq!(state1.time_ticks(), state2.time_ticks());
        assert_eq!(state1.pills(), state2.pills());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_pills_stay_in_field(seed in any::<u64>()) {
            let mut state = PillField::new(&GameConfig::default(), seed);
            for _ in 0..300 {
                tick(&mut state);
                for p in state.pills() {
                    prop_assert!(p.pos.x >= 0.0 && p.pos.x <= FIELD.x - SIZE.x);
                    prop_assert!(p.pos.y >= 0.0 && p.pos.y <= FIELD.y - SIZE.y);
                }
            }
        }
    }
}
