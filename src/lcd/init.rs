use embedded_hal::delay::DelayNs;

use crate::{
    command::{MoveDirection, State},
    lcd::{Lcd, LcdResult},
    sender::SendCommand,
    state::LcdState,
};

/// Settle delays after each transmission, in milliseconds
///
/// OpenLCD firmware has no busy flag, these are the only pacing it gets.
/// Shorter values lose commands on real hardware.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// after a single settings opcode, a character, or a contrast change
    pub short_ms: u32,
    /// after a special command, or a structural block write
    pub long_ms: u32,
    /// after each step of [`Lcd::init`]
    pub settle_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            short_ms: 10,
            long_ms: 50,
            settle_ms: 1_000,
        }
    }
}

/// [`Config`] is the init config of a [`Lcd`]
#[derive(Default, Clone, Copy)]
pub struct Config {
    state: LcdState,
    timing: Timing,
}

#[allow(missing_docs)]
impl Config {
    pub fn get_address(&self) -> u8 {
        self.state.get_address()
    }

    pub fn set_address(mut self, address: u8) -> Self {
        self.state.set_address(address);
        self
    }

    pub fn get_display_state(&self) -> State {
        self.state.get_display_state()
    }

    pub fn set_display_state(mut self, display: State) -> Self {
        self.state.set_display_state(display);
        self
    }

    pub fn get_cursor_state(&self) -> State {
        self.state.get_cursor_state()
    }

    pub fn set_cursor_state(mut self, cursor: State) -> Self {
        self.state.set_cursor_state(cursor);
        self
    }

    pub fn get_cursor_blink(&self) -> State {
        self.state.get_cursor_blink()
    }

    pub fn set_cursor_blink(mut self, blink: State) -> Self {
        self.state.set_cursor_blink(blink);
        self
    }

    pub fn get_direction(&self) -> MoveDirection {
        self.state.get_direction()
    }

    pub fn set_direction(mut self, dir: MoveDirection) -> Self {
        self.state.set_direction(dir);
        self
    }

    pub fn get_autoscroll(&self) -> State {
        self.state.get_autoscroll()
    }

    pub fn set_autoscroll(mut self, autoscroll: State) -> Self {
        self.state.set_autoscroll(autoscroll);
        self
    }

    pub fn get_timing(&self) -> Timing {
        self.timing
    }

    pub fn set_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }
}

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand,
    Delayer: DelayNs,
{
    /// Create a [`Lcd`] session, nothing is sent until [`Lcd::init`]
    pub fn new(sender: &'a mut Sender, delayer: &'b mut Delayer, config: Config) -> Self {
        Lcd {
            sender,
            delayer,
            state: config.state,
            timing: config.timing,
        }
    }

    /// Push display control and entry mode from config to the display, then clear it
    ///
    /// All 3 steps are tried, each followed by a long settle for the firmware to come up.
    /// Fails with the first failing step.
    pub fn init(&mut self) -> LcdResult<Sender> {
        let display_control = self.apply_display_control();
        self.delayer.delay_ms(self.timing.settle_ms);

        let entry_mode = self.apply_entry_mode();
        self.delayer.delay_ms(self.timing.settle_ms);

        let clear = self.clear_screen();
        self.delayer.delay_ms(self.timing.settle_ms);

        display_control.and(entry_mode).and(clear)
    }
}
