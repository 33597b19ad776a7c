//! drink_core: the hand-to-glass drinking mechanic as an engine-agnostic
//! state machine.
//!
//! The host feeds one [`InputState`] per frame together with the actor's
//! [`Pose`], a [`LiquidSink`] and the session's [`SessionTotals`]; the
//! [`DrinkRig`] drives pose and fill through Idle → Drinking → Returning.

#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod events;
pub mod hands;
pub mod input;
pub mod liquid;
pub mod machine;
pub mod params;
pub mod pose;
pub mod ramp;
pub mod rig;
pub mod session;

pub use events::DrinkEvent;
pub use hands::HandPose;
pub use input::{Combo, Control, InputState};
pub use liquid::{FillRange, Liquid, LiquidSink};
pub use machine::{DrinkMachine, DrinkState, StateKind};
pub use params::{DrinkParams, ParamsError, RigGeometry};
pub use pose::Pose;
pub use rig::{DrinkRig, FrameReport};
pub use session::SessionTotals;
