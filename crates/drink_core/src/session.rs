//! Session-scoped consumption accumulator.
//!
//! Owned by whoever owns the actor and passed to the rig by `&mut`; it lives
//! for the process and only resets when a new one is created.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionTotals {
    total: f32,
    cycles: u32,
    last: Option<f32>,
}

impl SessionTotals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one finished cycle; returns the new running total.
    pub fn record(&mut self, consumed: f32) -> f32 {
        self.total += consumed;
        self.cycles += 1;
        self.last = Some(consumed);
        self.total
    }

    #[must_use]
    pub fn total(&self) -> f32 {
        self.total
    }

    /// Completed drink cycles.
    #[must_use]
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Amount consumed by the most recent cycle.
    #[must_use]
    pub fn last(&self) -> Option<f32> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accumulates() {
        let mut s = SessionTotals::new();
        assert_eq!(s.record(0.25), 0.25);
        assert_eq!(s.record(0.5), 0.75);
        assert_eq!(s.cycles(), 2);
        assert_eq!(s.last(), Some(0.5));
    }
}
