//! Time-boxed volume ramps (the gain/lose side channel).
//!
//! Each ramp moves fill linearly by `delta` over `duration` seconds,
//! independent of the drink state machine. Steps are clamped to the fill range.

use crate::liquid::{FillRange, LiquidSink};
use crate::machine::MIN_DURATION;
use crate::pose::progress;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeRamp {
    delta: f32,
    duration: f32,
    elapsed: f32,
    applied: f32,
}

impl VolumeRamp {
    #[must_use]
    pub fn new(delta: f32, duration: f32) -> Self {
        Self {
            delta,
            duration: duration.max(MIN_DURATION),
            elapsed: 0.0,
            applied: 0.0,
        }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt` and push this step's share of `delta` into `liquid`.
    /// Returns true once the ramp has run its full duration.
    pub fn step(&mut self, dt: f32, range: FillRange, liquid: &mut impl LiquidSink) -> bool {
        if self.is_done() {
            return true;
        }
        self.elapsed += dt;
        let t = progress(self.elapsed, self.duration, MIN_DURATION);
        let target = self.delta * t;
        let increment = target - self.applied;
        liquid.set_fill(range.clamp(liquid.fill() + increment));
        self.applied = target;
        self.is_done()
    }
}

/// All ramps currently in flight for one actor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ramps {
    active: Vec<VolumeRamp>,
}

impl Ramps {
    pub fn start(&mut self, delta: f32, duration: f32) {
        self.active.push(VolumeRamp::new(delta, duration));
    }

    /// Step every ramp once and drop the finished ones. Returns how far fill
    /// actually moved after clamping.
    pub fn update(&mut self, dt: f32, range: FillRange, liquid: &mut impl LiquidSink) -> f32 {
        let before = liquid.fill();
        self.active.retain_mut(|r| !r.step(dt, range, liquid));
        liquid.fill() - before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::liquid::Liquid;

    #[test]
    fn ramp_moves_full_delta_over_duration() {
        let mut l = Liquid::new(0.5);
        let mut r = VolumeRamp::new(-0.2, 0.5);
        let range = FillRange::default();
        let mut frames = 0;
        while !r.step(0.1, range, &mut l) {
            frames += 1;
            assert!(frames < 20, "ramp never finished");
        }
        assert!((l.fill - 0.3).abs() < 1e-5, "fill={}", l.fill);
    }

    #[test]
    fn ramp_is_linear() {
        let mut l = Liquid::new(0.0);
        let mut r = VolumeRamp::new(0.4, 1.0);
        r.step(0.25, FillRange::default(), &mut l);
        assert!((l.fill - 0.1).abs() < 1e-6);
    }

    #[test]
    fn ramp_clamps_each_step() {
        let range = FillRange::default();
        let mut l = Liquid::new(0.05);
        let mut r = VolumeRamp::new(-0.2, 0.2);
        while !r.step(0.05, range, &mut l) {
            assert!(range.contains(l.fill));
        }
        assert_eq!(l.fill, 0.0);

        let mut l = Liquid::new(0.95);
        let mut r = VolumeRamp::new(0.2, 0.2);
        while !r.step(0.05, range, &mut l) {}
        assert_eq!(l.fill, 1.0);
    }

    #[test]
    fn ramps_run_concurrently_and_retire() {
        let mut ramps = Ramps::default();
        let mut l = Liquid::new(0.5);
        ramps.start(0.1, 0.25);
        ramps.start(-0.3, 0.5);
        assert_eq!(ramps.len(), 2);
        for _ in 0..2 {
            ramps.update(0.125, FillRange::default(), &mut l);
        }
        assert_eq!(ramps.len(), 1);
        let mut moved = 0.0;
        for _ in 0..2 {
            moved += ramps.update(0.125, FillRange::default(), &mut l);
        }
        assert!(ramps.is_empty());
        assert!((moved + 0.15).abs() < 1e-5, "moved={moved}");
        assert!((l.fill - 0.3).abs() < 1e-5, "fill={}", l.fill);
    }
}
