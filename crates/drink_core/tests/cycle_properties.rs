use drink_core::{
    Control, DrinkEvent, DrinkParams, DrinkRig, FillRange, InputState, Liquid, Pose,
    SessionTotals, StateKind,
};

struct Harness {
    rig: DrinkRig,
    pose: Pose,
    liquid: Liquid,
    totals: SessionTotals,
    events: Vec<DrinkEvent>,
}

impl Harness {
    fn new(params: DrinkParams, fill: f32) -> Self {
        let rig = DrinkRig::new(params);
        let pose = rig.rest_pose();
        Self {
            rig,
            pose,
            liquid: Liquid::new(fill),
            totals: SessionTotals::new(),
            events: Vec::new(),
        }
    }

    fn tick(&mut self, input: &InputState, dt: f32) {
        let r = self
            .rig
            .tick(input, dt, &mut self.pose, &mut self.liquid, &mut self.totals);
        self.events.extend(r.events);
    }

    fn run(&mut self, input: &InputState, dt: f32, frames: usize) {
        for _ in 0..frames {
            self.tick(input, dt);
        }
    }

    /// Tick with no input until the rig is idle again.
    fn settle(&mut self, dt: f32) {
        for _ in 0..10_000 {
            if self.rig.state_kind() == StateKind::Idle {
                return;
            }
            self.tick(&InputState::default(), dt);
        }
        panic!("rig never returned to idle");
    }

    fn finished(&self) -> Vec<(f32, f32)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DrinkEvent::Finished { consumed, total } => Some((*consumed, *total)),
                _ => None,
            })
            .collect()
    }
}

fn drink() -> InputState {
    InputState::holding(Control::ALL)
}

fn grip_only() -> InputState {
    InputState::holding([Control::North, Control::South, Control::East, Control::West])
}

#[test]
fn constant_rate_drains_glass_and_totals_one() {
    // min 0, max 1, start empty-side 0, 0.5/s with no approach segment.
    let params = DrinkParams {
        range: FillRange { min: 0.0, max: 1.0 },
        approach_s: 0.0,
        spill: 0.0,
        drink_s_per_unit: 2.0,
        ..DrinkParams::default()
    };
    let mut h = Harness::new(params, 0.0);
    h.tick(&drink(), 0.1);
    assert_eq!(h.rig.state_kind(), StateKind::Drinking);
    h.run(&drink(), 0.1, 21);
    assert!(
        (h.liquid.fill - 1.0).abs() < 1e-4,
        "fill={}",
        h.liquid.fill
    );
    assert_ne!(h.rig.state_kind(), StateKind::Drinking);
    h.settle(0.1);
    let done = h.finished();
    assert_eq!(done.len(), 1);
    assert!((done[0].0 - 1.0).abs() < 1e-4, "consumed={}", done[0].0);
    assert!((h.totals.total() - 1.0).abs() < 1e-4);
    assert!((h.liquid.fill - 1.0).abs() < 1e-4);
}

#[test]
fn early_release_returns_from_live_pose() {
    let params = DrinkParams {
        approach_s: 1.0,
        spill: 0.1,
        ..DrinkParams::default()
    };
    let mut h = Harness::new(params, 0.3);
    h.tick(&drink(), 0.1);
    h.run(&drink(), 0.1, 3);
    assert_ne!(h.pose, h.rig.rest_pose(), "hand should be moving");
    let before = h.pose;
    let fill_before = h.liquid.fill;
    h.tick(&grip_only(), 0.1);
    assert_eq!(h.rig.state_kind(), StateKind::Returning);
    assert_eq!(h.pose, before);
    assert_eq!(h.liquid.fill, fill_before);
    let consumed = h.events.iter().find_map(|e| match e {
        DrinkEvent::Returning { consumed, emptied } => {
            assert!(!emptied);
            Some(*consumed)
        }
        _ => None,
    });
    // Only the cosmetic dip happened; nothing was drunk yet.
    let consumed = consumed.expect("returning event");
    assert!(consumed.abs() < 1e-5, "consumed={consumed}");
    h.settle(0.01);
    assert!((h.liquid.fill - 0.3).abs() < 1e-5);
    assert_eq!(h.pose, h.rig.rest_pose());
}

#[test]
fn cycle_leaves_fill_at_start_plus_consumed() {
    for (start, hold_frames) in [(0.0, 10), (0.2, 45), (0.5, 70), (0.9, 200)] {
        let mut h = Harness::new(DrinkParams::default(), start);
        h.tick(&drink(), 1.0 / 60.0);
        h.run(&drink(), 1.0 / 60.0, hold_frames);
        h.tick(&InputState::default(), 1.0 / 60.0);
        h.settle(1.0 / 60.0);
        let done = h.finished();
        assert_eq!(done.len(), 1, "start={start}");
        let consumed = done[0].0;
        assert!(consumed >= -1e-5, "start={start} consumed={consumed}");
        assert!(
            (h.liquid.fill - (start + consumed)).abs() < 1e-4,
            "start={start} fill={} consumed={consumed}",
            h.liquid.fill
        );
        assert_eq!(h.pose, h.rig.rest_pose());
    }
}

#[test]
fn running_total_is_sum_of_cycles() {
    let mut h = Harness::new(DrinkParams::default(), 0.0);
    for hold in [40, 60, 30, 500] {
        h.tick(&drink(), 1.0 / 60.0);
        h.run(&drink(), 1.0 / 60.0, hold);
        h.tick(&InputState::default(), 1.0 / 60.0);
        h.settle(1.0 / 60.0);
    }
    let done = h.finished();
    assert_eq!(done.len(), 4);
    assert_eq!(h.totals.cycles(), 4);
    let sum: f32 = done.iter().map(|(c, _)| c).sum();
    assert!((h.totals.total() - sum).abs() < 1e-5);
    assert!((done[3].1 - h.totals.total()).abs() < 1e-6);
    // The last hold was long enough to drain the glass.
    assert!((h.liquid.fill - 1.0).abs() < 1e-4);
    assert!((h.totals.total() - 1.0).abs() < 1e-3);
}

#[test]
fn held_combo_after_drained_glass_stays_idle() {
    let mut h = Harness::new(DrinkParams::default(), 0.8);
    h.tick(&drink(), 1.0 / 60.0);
    h.run(&drink(), 1.0 / 60.0, 600);
    assert_eq!(h.rig.state_kind(), StateKind::Idle);
    assert_eq!(h.totals.cycles(), 1);
    let starts = h
        .events
        .iter()
        .filter(|e| matches!(e, DrinkEvent::Started { .. }))
        .count();
    assert_eq!(starts, 1);
}

#[test]
fn still_held_combo_restarts_after_partial_cycle() {
    let params = DrinkParams {
        return_s: 0.2,
        ..DrinkParams::default()
    };
    let mut h = Harness::new(params, 0.0);
    h.tick(&drink(), 0.05);
    h.run(&drink(), 0.05, 20);
    h.tick(&grip_only(), 0.05);
    h.settle(0.05);
    h.tick(&drink(), 0.05);
    assert_eq!(h.rig.state_kind(), StateKind::Drinking);
    let starts: Vec<f32> = h
        .events
        .iter()
        .filter_map(|e| match e {
            DrinkEvent::Started { start_fill } => Some(*start_fill),
            _ => None,
        })
        .collect();
    assert_eq!(starts.len(), 2);
    assert!(starts[1] > starts[0]);
}

#[test]
fn bump_during_cycle_moves_fill_but_not_total() {
    let params = DrinkParams::default();
    let delta = params.bump_fill_delta;
    // Release during the approach (ramp still running) and after the ramp is done.
    for hold_frames in [20, 50] {
        let mut h = Harness::new(params, 0.5);
        h.tick(&drink(), 1.0 / 60.0);
        let bumped = InputState {
            bump_pressed: true,
            ..drink()
        };
        h.tick(&bumped, 1.0 / 60.0);
        h.run(&drink(), 1.0 / 60.0, hold_frames);
        h.tick(&InputState::default(), 1.0 / 60.0);
        h.settle(1.0 / 60.0);
        for _ in 0..600 {
            if h.rig.active_ramps() == 0 {
                break;
            }
            h.tick(&InputState::default(), 1.0 / 60.0);
        }
        assert_eq!(h.rig.active_ramps(), 0);
        let done = h.finished();
        assert_eq!(done.len(), 1, "hold={hold_frames}");
        let consumed = done[0].0;
        assert!(consumed >= -1e-5, "hold={hold_frames} consumed={consumed}");
        assert!((h.totals.total() - consumed).abs() < 1e-6);
        let expected = (0.5 + consumed + delta).clamp(0.0, 1.0);
        assert!(
            (h.liquid.fill - expected).abs() < 1e-4,
            "hold={hold_frames} fill={} expected={expected}",
            h.liquid.fill
        );
    }
}
