//! Liquid sink: the bounded fill value and its cosmetic wobble.

/// Inclusive bounds for the fill amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRange {
    pub min: f32,
    pub max: f32,
}

impl Default for FillRange {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl FillRange {
    #[must_use]
    pub fn clamp(&self, v: f32) -> f32 {
        v.clamp(self.min, self.max)
    }

    #[must_use]
    pub fn contains(&self, v: f32) -> bool {
        (self.min..=self.max).contains(&v)
    }

    /// Where `v` sits between min and max, clamped to `[0, 1]`.
    #[must_use]
    pub fn normalized(&self, v: f32) -> f32 {
        let span = self.max - self.min;
        if span <= f32::EPSILON {
            return 1.0;
        }
        ((v - self.min) / span).clamp(0.0, 1.0)
    }
}

/// Host-side liquid the rig drives. Implement this on whatever owns the
/// shader parameters.
pub trait LiquidSink {
    fn fill(&self) -> f32;
    fn set_fill(&mut self, fill: f32);
    fn set_wobble(&mut self, max_wobble: f32, wobble_speed: f32);
}

/// Plain in-memory liquid, used by the harness and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Liquid {
    pub fill: f32,
    pub max_wobble: f32,
    pub wobble_speed: f32,
}

impl Liquid {
    #[must_use]
    pub fn new(fill: f32) -> Self {
        Self {
            fill,
            max_wobble: 0.0,
            wobble_speed: 0.0,
        }
    }
}

impl LiquidSink for Liquid {
    fn fill(&self) -> f32 {
        self.fill
    }
    fn set_fill(&mut self, fill: f32) {
        self.fill = fill;
    }
    fn set_wobble(&mut self, max_wobble: f32, wobble_speed: f32) {
        self.max_wobble = max_wobble;
        self.wobble_speed = wobble_speed;
    }
}
