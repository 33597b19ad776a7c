use data_runtime::configs::drink;
use data_runtime::scenario;
use drink_core::{DrinkEvent, DrinkRig, HandPose, StateKind};
use pintdrive::harness::replay;

fn rig() -> DrinkRig {
    let cfg = drink::load_default().expect("drink cfg");
    DrinkRig::from_cfg(&cfg).expect("params")
}

#[test]
fn full_drink_scenario_finishes_glass() {
    let scn = scenario::load("scenarios/full_drink.toml").expect("scenario");
    let mut rig = rig();
    let out = replay(&mut rig, &scn, false);
    assert_eq!(out.totals.cycles(), 2);
    assert_eq!(out.final_state, StateKind::Idle);
    assert_eq!(out.final_hands, HandPose::OnWheel);
    assert!((out.final_fill - 1.0).abs() < 1e-4, "fill={}", out.final_fill);
    // Everything between empty and full was drunk, plus what the bump took away.
    let bump = rig.params().bump_fill_delta;
    assert!(
        (out.totals.total() - (1.0 - bump)).abs() < 1e-3,
        "total={}",
        out.totals.total()
    );
    assert!(
        out.events
            .iter()
            .any(|(_, e)| matches!(e, DrinkEvent::RampStarted { .. }))
    );
    assert_eq!(out.final_pose, rig.rest_pose());
}

#[test]
fn early_release_scenario_drinks_nothing() {
    let scn = scenario::load("scenarios/release_early.toml").expect("scenario");
    let mut rig = rig();
    let out = replay(&mut rig, &scn, false);
    assert_eq!(out.totals.cycles(), 1);
    assert!(out.totals.total().abs() < 1e-5, "total={}", out.totals.total());
    assert!((out.final_fill - 0.3).abs() < 1e-5);
    assert_eq!(out.final_state, StateKind::Idle);
    // Grip is still held at the end.
    assert_eq!(out.final_hands, HandPose::OnGlass);
    let returning = out
        .events
        .iter()
        .find(|(_, e)| matches!(e, DrinkEvent::Returning { .. }))
        .map(|(t, _)| *t)
        .expect("returning event");
    assert!((returning - 0.31).abs() < 0.015, "returned at {returning}");
}
