//! Which hand model the host should show this frame.

use crate::machine::StateKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandPose {
    /// Hand resting on the steering wheel.
    #[default]
    OnWheel,
    /// Hand gripping the glass.
    OnGlass,
}

/// The hand grips the glass while a cycle is running, or while idle with the
/// four grip buttons held.
#[must_use]
pub fn hand_pose(state: StateKind, four_held: bool) -> HandPose {
    match state {
        StateKind::Drinking | StateKind::Returning => HandPose::OnGlass,
        StateKind::Idle if four_held => HandPose::OnGlass,
        StateKind::Idle => HandPose::OnWheel,
    }
}
