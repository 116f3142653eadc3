//! Common tools

use crate::command::State;

/// Flag ops on a register byte, a flag is a bit mask
pub trait BitOps {
    /// Set the masked bits when `state` is [`State::On`], clear them otherwise
    fn set_flag(&mut self, mask: u8, state: State) -> Self;
    #[allow(missing_docs)]
    fn clear_flag(&mut self, mask: u8) -> Self;
    /// [`State::On`] only if every masked bit is set
    fn check_flag(&self, mask: u8) -> State;
}

impl BitOps for u8 {
    fn set_flag(&mut self, mask: u8, state: State) -> Self {
        match state {
            State::On => *self |= mask,
            State::Off => *self &= !mask,
        }
        *self
    }

    fn clear_flag(&mut self, mask: u8) -> Self {
        self.set_flag(mask, State::Off)
    }

    fn check_flag(&self, mask: u8) -> State {
        match *self & mask == mask {
            true => State::On,
            false => State::Off,
        }
    }
}

/// Re-map a number from one range to another, truncating toward zero
///
/// Same arithmetic as Arduino's `map()`, which SerLCD firmware docs are written against.
/// A degenerate input range maps everything to `out_min`.
pub fn map_range(x: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    if in_max == in_min {
        return out_min;
    }

    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}
