//! Tri-state switch: ON -> OFF -> UNKNOWN -> ON.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::error::TallyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwitchState {
    On,
    Off,
    #[default]
    Unknown,
}

impl SwitchState {
    /// Every state, in exposition order.
    pub const ALL: [SwitchState; 3] = [SwitchState::On, SwitchState::Off, SwitchState::Unknown];

    pub fn as_str(self) -> &'static str {
        match self {
            SwitchState::On => "ON",
            SwitchState::Off => "OFF",
            SwitchState::Unknown => "UNKNOWN",
        }
    }

    /// Successor in the toggle cycle. Anything that is neither ON nor OFF goes to ON.
    pub fn next(self) -> Self {
        match self {
            SwitchState::On => SwitchState::Off,
            SwitchState::Off => SwitchState::Unknown,
            _ => SwitchState::On,
        }
    }

    fn to_bits(self) -> u8 {
        match self {
            SwitchState::On => 1,
            SwitchState::Off => 2,
            SwitchState::Unknown => 0,
        }
    }

    fn from_bits(bits: u8) -> Self {
        match bits {
            1 => SwitchState::On,
            2 => SwitchState::Off,
            _ => SwitchState::Unknown,
        }
    }
}

impl fmt::Display for SwitchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwitchState {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SwitchState::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| TallyError::UnknownState(s.to_string()))
    }
}

/// Shared switch cell.
///
/// `toggle` runs a compare-and-swap loop, so concurrent toggles each advance
/// the cycle by exactly one step.
#[derive(Debug)]
pub struct Switch {
    bits: AtomicU8,
}

impl Default for Switch {
    fn default() -> Self {
        Self::new(SwitchState::default())
    }
}

impl Switch {
    pub fn new(initial: SwitchState) -> Self {
        Self { bits: AtomicU8::new(initial.to_bits()) }
    }

    pub fn state(&self) -> SwitchState {
        SwitchState::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Advance to the next state and return it.
    pub fn toggle(&self) -> SwitchState {
        let step = |bits: u8| Some(SwitchState::from_bits(bits).next().to_bits());
        // the closure never returns None, so both arms carry the previous value
        let prev = match self.bits.fetch_update(Ordering::Relaxed, Ordering::Relaxed, step) {
            Ok(bits) | Err(bits) => bits,
        };
        SwitchState::from_bits(prev).next()
    }
}
