//! Input snapshot and the drink combo detector.
//!
//! Pure, testable mapping from held controls to the two booleans the state
//! machine consumes each frame.

use data_runtime::scenario::ControlName;

/// The five controls the drink rig listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    North,
    South,
    East,
    West,
    Trigger,
}

impl Control {
    pub const ALL: [Self; 5] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Trigger,
    ];
}

impl From<ControlName> for Control {
    fn from(c: ControlName) -> Self {
        match c {
            ControlName::North => Self::North,
            ControlName::South => Self::South,
            ControlName::East => Self::East,
            ControlName::West => Self::West,
            ControlName::Trigger => Self::Trigger,
        }
    }
}

/// Input snapshot for one frame.
///
/// - `north`/`south`/`east`/`west` are the four grip buttons (held state)
/// - `trigger` is the drink trigger (held state)
/// - `bump_pressed` is one-shot: the host sets it on the press frame only
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct InputState {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
    pub trigger: bool,
    pub bump_pressed: bool,
}

impl InputState {
    /// Snapshot with exactly the given controls held.
    pub fn holding(controls: impl IntoIterator<Item = Control>) -> Self {
        let mut s = Self::default();
        for c in controls {
            s.set_held(c, true);
        }
        s
    }

    pub fn set_held(&mut self, c: Control, down: bool) {
        match c {
            Control::North => self.north = down,
            Control::South => self.south = down,
            Control::East => self.east = down,
            Control::West => self.west = down,
            Control::Trigger => self.trigger = down,
        }
    }

    #[must_use]
    pub fn combo(&self) -> Combo {
        combo(self)
    }
}

/// Output of the combo detector for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Combo {
    /// All four grip buttons are down.
    pub four_held: bool,
    /// Grip plus trigger: the hand should be drinking.
    pub should_drink: bool,
}

/// Resolve the drink combo from held controls. No state.
#[must_use]
pub fn combo(input: &InputState) -> Combo {
    let four_held = input.north && input.south && input.east && input.west;
    Combo {
        four_held,
        should_drink: four_held && input.trigger,
    }
}
