//! Events reported back to the host from `DrinkRig::tick`.

/// Notable things that happened during one rig tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrinkEvent {
    /// Idle → Drinking.
    Started { start_fill: f32 },
    /// Drinking → Returning. `emptied` is true when the glass hit max fill
    /// rather than the combo being released.
    Returning { consumed: f32, emptied: bool },
    /// Returning → Idle; the cycle's amount has been added to the session.
    Finished { consumed: f32, total: f32 },
    /// A volume ramp was queued.
    RampStarted { delta: f32 },
}
