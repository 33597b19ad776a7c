//! Per-actor drink rig: state machine + volume ramps + wobble, one `tick` per frame.

use data_runtime::configs::drink::DrinkCfg;
use log::{debug, info};

use crate::events::DrinkEvent;
use crate::hands::{HandPose, hand_pose};
use crate::input::{Combo, InputState};
use crate::liquid::LiquidSink;
use crate::machine::{DrinkMachine, StateKind, Transition};
use crate::params::{DrinkParams, ParamsError};
use crate::pose::Pose;
use crate::ramp::Ramps;
use crate::session::SessionTotals;

/// What the host needs to present after a tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub combo: Combo,
    pub state: StateKind,
    pub hands: HandPose,
    pub events: Vec<DrinkEvent>,
}

#[derive(Debug, Clone)]
pub struct DrinkRig {
    params: DrinkParams,
    machine: DrinkMachine,
    ramps: Ramps,
}

impl DrinkRig {
    #[must_use]
    pub fn new(params: DrinkParams) -> Self {
        Self {
            params,
            machine: DrinkMachine::new(),
            ramps: Ramps::default(),
        }
    }

    pub fn from_cfg(cfg: &DrinkCfg) -> Result<Self, ParamsError> {
        Ok(Self::new(DrinkParams::from_cfg(cfg)?))
    }

    #[must_use]
    pub fn params(&self) -> &DrinkParams {
        &self.params
    }

    #[must_use]
    pub fn machine(&self) -> &DrinkMachine {
        &self.machine
    }

    /// Pose the actor should start in (and returns to).
    #[must_use]
    pub fn rest_pose(&self) -> Pose {
        self.params.geometry.rest
    }

    #[must_use]
    pub fn state_kind(&self) -> StateKind {
        self.machine.kind()
    }

    #[must_use]
    pub fn is_drinking(&self) -> bool {
        self.machine.kind() == StateKind::Drinking
    }

    /// Ramps still running.
    #[must_use]
    pub fn active_ramps(&self) -> usize {
        self.ramps.len()
    }

    /// Queue a gain (`delta > 0`) or loss (`delta < 0`) of fill over the
    /// configured ramp duration. It first applies on the next `tick`.
    pub fn start_ramp(&mut self, delta: f32) -> DrinkEvent {
        debug!("drink: ramp start delta={delta:.3} over {:.2}s", self.params.ramp_s);
        self.ramps.start(delta, self.params.ramp_s);
        DrinkEvent::RampStarted { delta }
    }

    /// Advance the rig by one frame of `dt` seconds.
    ///
    /// Order: combo → state machine → bump/ramps → wobble. Negative or
    /// non-finite `dt` is treated as zero.
    pub fn tick(
        &mut self,
        input: &InputState,
        dt: f32,
        pose: &mut Pose,
        liquid: &mut impl LiquidSink,
        totals: &mut SessionTotals,
    ) -> FrameReport {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let combo = input.combo();
        let mut events = Vec::new();

        if let Some(tr) = self.machine.update(&self.params, combo, dt, pose, liquid) {
            events.push(Self::on_transition(tr, totals));
        }
        if input.bump_pressed {
            events.push(self.start_ramp(self.params.bump_fill_delta));
        }
        let moved = self.ramps.update(dt, self.params.range, liquid);
        self.machine.shift_fill(&self.params, moved);

        let state = self.machine.kind();
        let wobble = match state {
            StateKind::Idle => self.params.idle_wobble,
            StateKind::Drinking | StateKind::Returning => self.params.stable_wobble,
        };
        liquid.set_wobble(wobble, self.params.wobble_speed);

        FrameReport {
            combo,
            state,
            hands: hand_pose(state, combo.four_held),
            events,
        }
    }

    fn on_transition(tr: Transition, totals: &mut SessionTotals) -> DrinkEvent {
        match tr {
            Transition::Started { start_fill } => {
                debug!("drink: start fill={start_fill:.3}");
                DrinkEvent::Started { start_fill }
            }
            Transition::Returning { consumed, emptied } => {
                debug!("drink: returning consumed={consumed:.3} emptied={emptied}");
                DrinkEvent::Returning { consumed, emptied }
            }
            Transition::Finished { consumed } => {
                let total = totals.record(consumed);
                info!("drank this cycle: {consumed:.3}");
                info!("total drunk: {total:.3}");
                DrinkEvent::Finished { consumed, total }
            }
        }
    }
}

impl Default for DrinkRig {
    fn default() -> Self {
        Self::new(DrinkParams::default())
    }
}
