//! Headless scenario replay: drives a `DrinkRig` frame by frame from a
//! scripted input timeline.

use data_runtime::scenario::Scenario;
use drink_core::{
    Control, DrinkEvent, DrinkRig, HandPose, InputState, Liquid, Pose, SessionTotals,
    StateKind,
};

/// Outcome of one replay.
#[derive(Debug, Clone)]
pub struct Replay {
    pub frames: usize,
    /// Events tagged with the scenario time (seconds) they fired at.
    pub events: Vec<(f32, DrinkEvent)>,
    pub totals: SessionTotals,
    pub final_fill: f32,
    pub final_pose: Pose,
    pub final_state: StateKind,
    pub final_hands: HandPose,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn frames_for(duration_s: f32, dt: f32) -> usize {
    (duration_s / dt).round().max(0.0) as usize
}

/// Replay `scn` against `rig`, starting at the rig's rest pose.
pub fn replay(rig: &mut DrinkRig, scn: &Scenario, trace_frames: bool) -> Replay {
    let range = rig.params().range;
    let mut pose = rig.rest_pose();
    let mut liquid = Liquid::new(range.clamp(scn.initial_fill.unwrap_or(range.min)));
    let mut totals = SessionTotals::new();
    let mut events = Vec::new();
    let mut frames = 0usize;
    let mut now = 0.0f32;
    let mut hands = HandPose::default();

    for step in &scn.steps {
        if let Some(label) = &step.label {
            log::debug!("scenario: step '{label}' for {:.2}s", step.duration_s);
        }
        let held = InputState::holding(step.hold.iter().copied().map(Control::from));
        for i in 0..frames_for(step.duration_s, scn.dt) {
            let input = InputState {
                bump_pressed: step.bump && i == 0,
                ..held
            };
            let report = rig.tick(&input, scn.dt, &mut pose, &mut liquid, &mut totals);
            frames += 1;
            now += scn.dt;
            hands = report.hands;
            if trace_frames {
                log::trace!(
                    "t={now:.3} state={:?} fill={:.4} pos={:?}",
                    report.state,
                    liquid.fill,
                    pose.position
                );
            }
            for e in report.events {
                log::debug!("t={now:.3} {e:?}");
                events.push((now, e));
            }
        }
    }

    Replay {
        frames,
        events,
        totals,
        final_fill: liquid.fill,
        final_pose: pose,
        final_state: rig.state_kind(),
        final_hands: hands,
    }
}
