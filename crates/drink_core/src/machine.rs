//! Drink state machine: Idle → Drinking → Returning → Idle.
//!
//! One `update` per frame. Each phase carries exactly the data it needs, so
//! cancelling a phase can never leave stale fill bookkeeping behind. Phases
//! always start from the live pose and fill handed in by the caller.
//!
//! Fill policy: the visible fill is always clamped to the range. While
//! drinking, the underlying level rises from `start_fill` toward max and the
//! visible fill is `level - extra`, where `extra` is the cosmetic dip taken
//! during the approach. Returning decays `extra` to zero so the glass settles
//! on `start_fill + consumed`. Volume ramps that land mid-cycle move the
//! phase baseline (`shift_fill`) rather than the consumed amount.

use crate::input::Combo;
use crate::liquid::LiquidSink;
use crate::params::DrinkParams;
use crate::pose::{Pose, lerp, progress};

/// Floor for any interpolation duration (seconds).
pub const MIN_DURATION: f32 = 1e-4;
/// Level within this of max counts as drained.
pub const COMPLETE_EPS: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateKind {
    #[default]
    Idle,
    Drinking,
    Returning,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DrinkState {
    #[default]
    Idle,
    Drinking(Drinking),
    Returning(Returning),
}

impl DrinkState {
    #[must_use]
    pub fn kind(&self) -> StateKind {
        match self {
            Self::Idle => StateKind::Idle,
            Self::Drinking(_) => StateKind::Drinking,
            Self::Returning(_) => StateKind::Returning,
        }
    }
}

/// Phase data while the hand reaches for the glass and drinks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drinking {
    start_fill: f32,
    extra: f32,
    origin: Pose,
    approach: Pose,
    tilted: Pose,
    approach_elapsed: f32,
    drink_elapsed: f32,
    drink_duration: f32,
}

impl Drinking {
    fn begin(p: &DrinkParams, live: &Pose, fill: f32) -> Self {
        let (yaw, roll) = live.yaw_roll();
        let f = p.range.normalized(fill);
        Self {
            start_fill: fill,
            extra: 0.0,
            origin: *live,
            approach: p.geometry.tilt_pose(f, yaw, roll),
            tilted: p.geometry.tilt_pose(1.0, yaw, roll),
            approach_elapsed: 0.0,
            drink_elapsed: 0.0,
            drink_duration: ((p.range.max - fill) * p.drink_s_per_unit).max(MIN_DURATION),
        }
    }

    #[must_use]
    pub fn start_fill(&self) -> f32 {
        self.start_fill
    }

    /// Fill currently hidden by the approach dip.
    #[must_use]
    pub fn extra(&self) -> f32 {
        self.extra
    }

    /// True while the hand is still travelling to the glass.
    #[must_use]
    pub fn approaching(&self, p: &DrinkParams) -> bool {
        self.approach_elapsed < p.approach_s
    }

    #[must_use]
    pub fn drink_duration(&self) -> f32 {
        self.drink_duration
    }

    /// Advance one frame. Returns true once the glass is drained.
    fn step(
        &mut self,
        p: &DrinkParams,
        dt: f32,
        pose: &mut Pose,
        liquid: &mut impl LiquidSink,
    ) -> bool {
        let mut dt = dt;
        if self.approaching(p) {
            self.approach_elapsed += dt;
            let t = progress(self.approach_elapsed, p.approach_s, MIN_DURATION);
            *pose = self.origin.lerp(&self.approach, t);
            let fill = p.range.clamp(self.start_fill - p.spill * t);
            self.extra = self.start_fill - fill;
            liquid.set_fill(fill);
            if self.approaching(p) {
                return false;
            }
            // Time left over after reaching the glass goes to the drink segment.
            dt = self.approach_elapsed - p.approach_s;
        }
        self.drink_elapsed += dt;
        let t = progress(self.drink_elapsed, self.drink_duration, MIN_DURATION);
        *pose = self.approach.lerp(&self.tilted, t);
        let level = lerp(self.start_fill, p.range.max, t);
        if level >= p.range.max - COMPLETE_EPS {
            liquid.set_fill(p.range.clamp(p.range.max - self.extra));
            return true;
        }
        liquid.set_fill(p.range.clamp(level - self.extra));
        false
    }
}

/// Phase data while the hand puts the glass back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Returning {
    consumed: f32,
    base_fill: f32,
    start_extra: f32,
    from: Pose,
    elapsed: f32,
    duration: f32,
}

impl Returning {
    /// `base_fill` is where the glass settles once the hand is home.
    fn begin(p: &DrinkParams, d: &Drinking, live: &Pose, base_fill: f32) -> Self {
        let base_fill = p.range.clamp(base_fill);
        let reference = p.geometry.reference_distance();
        let distance = live.position.distance(p.geometry.rest.position);
        let scale = if reference > f32::EPSILON {
            distance / reference
        } else {
            1.0
        };
        Self {
            consumed: base_fill - d.start_fill,
            base_fill,
            start_extra: d.extra,
            from: *live,
            elapsed: 0.0,
            duration: (p.return_s * scale).max(MIN_DURATION),
        }
    }

    #[must_use]
    pub fn consumed(&self) -> f32 {
        self.consumed
    }

    /// Fill the glass settles on when the return completes.
    #[must_use]
    pub fn base_fill(&self) -> f32 {
        self.base_fill
    }

    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Advance one frame. Returns true once the hand is back at rest.
    fn step(
        &mut self,
        p: &DrinkParams,
        dt: f32,
        pose: &mut Pose,
        liquid: &mut impl LiquidSink,
    ) -> bool {
        self.elapsed += dt;
        let t = progress(self.elapsed, self.duration, MIN_DURATION);
        if t >= 1.0 {
            *pose = p.geometry.rest;
            liquid.set_fill(self.base_fill);
            return true;
        }
        *pose = self.from.lerp(&p.geometry.rest, t);
        let extra = self.start_extra * (1.0 - t);
        liquid.set_fill(p.range.clamp(self.base_fill - extra));
        false
    }
}

/// Phase change produced by one `update`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Started { start_fill: f32 },
    Returning { consumed: f32, emptied: bool },
    Finished { consumed: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrinkMachine {
    state: DrinkState,
}

impl DrinkMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &DrinkState {
        &self.state
    }

    #[must_use]
    pub fn kind(&self) -> StateKind {
        self.state.kind()
    }

    /// Run one frame.
    ///
    /// Input-driven transitions consume the frame: the new phase starts with
    /// zero elapsed time and the pose is left untouched, so there is no jump
    /// at the seam. Otherwise the live phase advances by `dt`.
    pub fn update(
        &mut self,
        p: &DrinkParams,
        combo: Combo,
        dt: f32,
        pose: &mut Pose,
        liquid: &mut impl LiquidSink,
    ) -> Option<Transition> {
        match self.state {
            DrinkState::Idle if combo.should_drink => {
                return self.try_start(p, pose, liquid.fill());
            }
            DrinkState::Drinking(d) if !combo.should_drink => {
                return Some(self.begin_return(p, &d, pose, liquid.fill(), false));
            }
            _ => {}
        }
        self.advance(p, dt, pose, liquid)
    }

    /// Fold a side-channel fill change into the live phase so the next step
    /// keeps it and it is never counted as consumed.
    pub fn shift_fill(&mut self, p: &DrinkParams, delta: f32) {
        match &mut self.state {
            DrinkState::Idle => {}
            DrinkState::Drinking(d) => d.start_fill = p.range.clamp(d.start_fill + delta),
            DrinkState::Returning(r) => r.base_fill = p.range.clamp(r.base_fill + delta),
        }
    }

    fn try_start(&mut self, p: &DrinkParams, pose: &Pose, fill: f32) -> Option<Transition> {
        let fill = p.range.clamp(fill);
        if fill >= p.range.max {
            return None;
        }
        self.state = DrinkState::Drinking(Drinking::begin(p, pose, fill));
        Some(Transition::Started { start_fill: fill })
    }

    fn begin_return(
        &mut self,
        p: &DrinkParams,
        d: &Drinking,
        pose: &Pose,
        fill: f32,
        emptied: bool,
    ) -> Transition {
        // Drained glasses settle exactly on max; Idle only restarts below max.
        let base_fill = if emptied {
            p.range.max
        } else {
            fill + d.extra
        };
        let r = Returning::begin(p, d, pose, base_fill);
        let consumed = r.consumed;
        self.state = DrinkState::Returning(r);
        Transition::Returning { consumed, emptied }
    }

    fn advance(
        &mut self,
        p: &DrinkParams,
        dt: f32,
        pose: &mut Pose,
        liquid: &mut impl LiquidSink,
    ) -> Option<Transition> {
        match &mut self.state {
            DrinkState::Idle => None,
            DrinkState::Drinking(d) => {
                if !d.step(p, dt, pose, liquid) {
                    return None;
                }
                let d = *d;
                Some(self.begin_return(p, &d, pose, liquid.fill(), true))
            }
            DrinkState::Returning(r) => {
                if !r.step(p, dt, pose, liquid) {
                    return None;
                }
                let consumed = r.consumed;
                self.state = DrinkState::Idle;
                Some(Transition::Finished { consumed })
            }
        }
    }
}
