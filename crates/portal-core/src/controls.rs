use crate::constants::{SLOW_DOWN_FACTOR, SPEED_UP_FACTOR};
use crate::orbs::OrbField;

/// Keyboard-driven adjustments to the orb backdrop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbCommand {
    SpeedUp,
    SlowDown,
    AddOrb,
    RemoveOrb,
}

impl OrbCommand {
    #[inline]
    pub fn for_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::SpeedUp),
            "ArrowDown" => Some(Self::SlowDown),
            "+" => Some(Self::AddOrb),
            "-" => Some(Self::RemoveOrb),
            _ => None,
        }
    }

    /// Run the command against `field`. Returns false when it was a no-op
    /// (population already at a limit).
    pub fn apply(self, field: &mut OrbField) -> bool {
        match self {
            Self::SpeedUp => {
                field.scale_speed(SPEED_UP_FACTOR);
                true
            }
            Self::SlowDown => {
                field.scale_speed(SLOW_DOWN_FACTOR);
                true
            }
            Self::AddOrb => field.add_orb(),
            Self::RemoveOrb => field.remove_orb(),
        }
    }
}
