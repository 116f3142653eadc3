use embedded_hal::delay::DelayNs;

use crate::{
    command::{CommandSet, MoveDirection, ShiftType, State, GLYPH_LEN},
    error::Error,
    sender::SendCommand,
    state::LcdState,
};

mod ext;
mod init;

pub use init::{Config, Timing};

/// A SerLCD session
///
/// Holds the bus address and the mirror of the display control and entry mode registers.
/// Every method blocks until its settle delay is over.
pub struct Lcd<'a, 'b, Sender: SendCommand, Delayer: DelayNs> {
    sender: &'a mut Sender,
    delayer: &'b mut Delayer,
    state: LcdState,
    timing: Timing,
}

type LcdResult<Sender> = Result<(), Error<<Sender as crate::sender::ByteTransport>::Error>>;

// channel helpers
impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand,
    Delayer: DelayNs,
{
    /// settings channel, short settle
    fn setting(&mut self, command: CommandSet) -> LcdResult<Sender> {
        self.send_and_wait(command, self.timing.short_ms)
    }

    /// special command channel, long settle once all repeats are out
    fn special(&mut self, command: CommandSet, count: u8) -> LcdResult<Sender> {
        let address = self.state.get_address();
        self.sender.send_repeated_and_wait(
            address,
            command.into(),
            count,
            self.delayer,
            self.timing.long_ms,
        )?;
        Ok(())
    }

    fn send_and_wait(&mut self, command: CommandSet, delay_ms: u32) -> LcdResult<Sender> {
        let address = self.state.get_address();
        self.sender
            .send_and_wait(address, command.into(), self.delayer, delay_ms)?;
        Ok(())
    }

    fn apply_display_control(&mut self) -> LcdResult<Sender> {
        self.special(
            CommandSet::DisplayOnOff {
                display: self.state.get_display_state(),
                cursor: self.state.get_cursor_state(),
                cursor_blink: self.state.get_cursor_blink(),
            },
            1,
        )
    }

    fn apply_entry_mode(&mut self) -> LcdResult<Sender> {
        self.special(
            CommandSet::EntryModeSet {
                direction: self.state.get_direction(),
                autoscroll: self.state.get_autoscroll(),
            },
            1,
        )
    }

    /// run `result`, then an extra wait whatever the outcome
    fn then_wait(&mut self, result: LcdResult<Sender>, delay_ms: u32) -> LcdResult<Sender> {
        self.delayer.delay_ms(delay_ms);
        result
    }
}

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand,
    Delayer: DelayNs,
{
    /// Print text at cursor, one byte per character
    ///
    /// Characters beyond `U+00FF` have no single byte form and are printed as `0xFF` (full block).
    /// Stops at the first character the bus refuses.
    pub fn print(&mut self, text: &str) -> LcdResult<Sender> {
        text.chars().try_for_each(|char| {
            let byte = u8::try_from(char).unwrap_or(0xFF);
            self.send_and_wait(CommandSet::WriteChar(byte), self.timing.short_ms)
        })
    }

    /// Clear display, and put cursor at (0, 0)
    pub fn clear_screen(&mut self) -> LcdResult<Sender> {
        let result = self.setting(CommandSet::ClearDisplay);
        self.then_wait(result, self.timing.short_ms)
    }

    /// Return cursor to (0, 0) without clearing
    pub fn home(&mut self) -> LcdResult<Sender> {
        let result = self.special(CommandSet::ReturnHome, 1);
        self.then_wait(result, self.timing.short_ms)
    }

    /// Rows beyond the last row of a 4 row display land on the last row,
    /// column is not checked
    pub fn set_cursor(&mut self, col: u8, row: u8) -> LcdResult<Sender> {
        self.send_and_wait(CommandSet::SetDDRAM(col, row), self.timing.short_ms)
    }

    /// Contrast, 0~255, lower is darker text on most panels
    pub fn set_contrast(&mut self, contrast: u8) -> LcdResult<Sender> {
        self.setting(CommandSet::SetContrast(contrast))
    }

    /// Set backlight colour, 0~255 per channel
    ///
    /// Display is switched off for the length of the update to hide the firmware's
    /// confirmation message, and is on afterwards whatever it was before.
    pub fn set_backlight(&mut self, red: u8, green: u8, blue: u8) -> LcdResult<Sender> {
        self.state.set_display_state(State::Off);
        let command = CommandSet::SetBacklight {
            red,
            green,
            blue,
            cursor: self.state.get_cursor_state(),
            cursor_blink: self.state.get_cursor_blink(),
        };
        self.state.set_display_state(State::On);

        self.send_and_wait(command, self.timing.long_ms)
    }

    /// Set backlight colour without blanking the display
    pub fn set_fast_backlight(&mut self, red: u8, green: u8, blue: u8) -> LcdResult<Sender> {
        self.setting(CommandSet::SetFastBacklight(red, green, blue))
    }

    /// Move cursor `count` places left
    pub fn move_cursor_left(&mut self, count: u8) -> LcdResult<Sender> {
        self.special(
            CommandSet::CursorOrDisplayShift(ShiftType::Cursor, MoveDirection::RightToLeft),
            count,
        )
    }

    /// Move cursor `count` places right
    pub fn move_cursor_right(&mut self, count: u8) -> LcdResult<Sender> {
        self.special(
            CommandSet::CursorOrDisplayShift(ShiftType::Cursor, MoveDirection::LeftToRight),
            count,
        )
    }

    /// Shift the whole display window, text is untouched
    pub fn scroll_display_left(&mut self, count: u8) -> LcdResult<Sender> {
        self.special(
            CommandSet::CursorOrDisplayShift(ShiftType::Display, MoveDirection::RightToLeft),
            count,
        )
    }

    /// Shift the whole display window right
    pub fn scroll_display_right(&mut self, count: u8) -> LcdResult<Sender> {
        self.special(
            CommandSet::CursorOrDisplayShift(ShiftType::Display, MoveDirection::LeftToRight),
            count,
        )
    }

    /// Store a 5x8 glyph in one of the 8 slots, `slot` is taken modulo 8
    pub fn create_char(&mut self, slot: u8, glyph: &[u8; GLYPH_LEN]) -> LcdResult<Sender> {
        self.send_and_wait(CommandSet::CreateChar(slot, *glyph), self.timing.long_ms)
    }

    /// Print a glyph stored by [`Lcd::create_char`]
    pub fn write_custom_char(&mut self, slot: u8) -> LcdResult<Sender> {
        let result = self.setting(CommandSet::WriteCustomChar(slot));
        self.then_wait(result, self.timing.long_ms)
    }

    /// Let the firmware show messages like "Contrast: 5" after a setting change
    pub fn enable_system_messages(&mut self) -> LcdResult<Sender> {
        let result = self.setting(CommandSet::SystemMessages(State::On));
        self.then_wait(result, self.timing.short_ms)
    }

    /// Hide firmware confirmation messages
    pub fn disable_system_messages(&mut self) -> LcdResult<Sender> {
        let result = self.setting(CommandSet::SystemMessages(State::Off));
        self.then_wait(result, self.timing.short_ms)
    }

    /// Show splash screen at power on
    pub fn enable_splash(&mut self) -> LcdResult<Sender> {
        let result = self.setting(CommandSet::Splash(State::On));
        self.then_wait(result, self.timing.short_ms)
    }

    /// Skip the splash screen at power on
    pub fn disable_splash(&mut self) -> LcdResult<Sender> {
        let result = self.setting(CommandSet::Splash(State::Off));
        self.then_wait(result, self.timing.short_ms)
    }

    /// Save what is on screen now as the power on splash (EEPROM)
    pub fn save_splash(&mut self) -> LcdResult<Sender> {
        let result = self.setting(CommandSet::SaveSplash);
        self.then_wait(result, self.timing.short_ms)
    }

    /// Move the display to another bus address
    ///
    /// The new address is persisted by the display, a wrong one needs a hardware reset to undo.
    /// The session follows the new address even when the write is reported failed,
    /// a late NACK doesn't mean the display ignored it.
    pub fn set_address(&mut self, new_address: u8) -> LcdResult<Sender> {
        let result = self.send_and_wait(CommandSet::SetAddress(new_address), self.timing.long_ms);
        self.state.set_address(new_address);
        result
    }
}

// display control and entry mode registers
impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand,
    Delayer: DelayNs,
{
    /// Display on or off, then re-send display control
    pub fn set_display_state(&mut self, display: State) -> LcdResult<Sender> {
        self.state.set_display_state(display);
        self.apply_display_control()
    }

    /// Display state as last sent
    pub fn get_display_state(&self) -> State {
        self.state.get_display_state()
    }

    /// Underline cursor on or off, then re-send display control
    pub fn set_cursor_state(&mut self, cursor: State) -> LcdResult<Sender> {
        self.state.set_cursor_state(cursor);
        self.apply_display_control()
    }

    /// Cursor state as last sent
    pub fn get_cursor_state(&self) -> State {
        self.state.get_cursor_state()
    }

    /// Blinking cursor on or off, then re-send display control
    pub fn set_cursor_blink_state(&mut self, blink: State) -> LcdResult<Sender> {
        self.state.set_cursor_blink(blink);
        self.apply_display_control()
    }

    /// Blink state as last sent
    pub fn get_cursor_blink_state(&self) -> State {
        self.state.get_cursor_blink()
    }

    /// Text flow direction, then re-send entry mode
    pub fn set_direction(&mut self, dir: MoveDirection) -> LcdResult<Sender> {
        self.state.set_direction(dir);
        self.apply_entry_mode()
    }

    /// Text flow direction as last sent
    pub fn get_direction(&self) -> MoveDirection {
        self.state.get_direction()
    }

    /// Autoscroll on or off, then re-send entry mode
    pub fn set_autoscroll_state(&mut self, autoscroll: State) -> LcdResult<Sender> {
        self.state.set_autoscroll(autoscroll);
        self.apply_entry_mode()
    }

    /// Autoscroll state as last sent
    pub fn get_autoscroll_state(&self) -> State {
        self.state.get_autoscroll()
    }

    /// Underline cursor on
    pub fn cursor(&mut self) -> LcdResult<Sender> {
        self.set_cursor_state(State::On)
    }

    /// Underline cursor off
    pub fn no_cursor(&mut self) -> LcdResult<Sender> {
        self.set_cursor_state(State::Off)
    }

    /// Blinking block cursor on
    pub fn blink(&mut self) -> LcdResult<Sender> {
        self.set_cursor_blink_state(State::On)
    }

    /// Blinking block cursor off
    pub fn no_blink(&mut self) -> LcdResult<Sender> {
        self.set_cursor_blink_state(State::Off)
    }

    /// Turn the display on, content is kept while off
    pub fn display(&mut self) -> LcdResult<Sender> {
        self.set_display_state(State::On)
    }

    /// Turn the display off, content is kept
    pub fn no_display(&mut self) -> LcdResult<Sender> {
        self.set_display_state(State::Off)
    }

    /// Right justify text from the cursor
    pub fn autoscroll(&mut self) -> LcdResult<Sender> {
        self.set_autoscroll_state(State::On)
    }

    /// Stop right justifying, text flows from the cursor again
    pub fn no_autoscroll(&mut self) -> LcdResult<Sender> {
        self.set_autoscroll_state(State::Off)
    }

    /// Text flows left to right
    pub fn left_to_right(&mut self) -> LcdResult<Sender> {
        self.set_direction(MoveDirection::LeftToRight)
    }

    /// Text flows right to left
    pub fn right_to_left(&mut self) -> LcdResult<Sender> {
        self.set_direction(MoveDirection::RightToLeft)
    }
}

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand,
    Delayer: DelayNs,
{
    /// Current bus address of the display
    pub fn get_address(&self) -> u8 {
        self.state.get_address()
    }

    /// Settle delays in use
    pub fn get_timing(&self) -> Timing {
        self.timing
    }

    /// Replace settle delays, takes effect on the next command
    pub fn set_timing(&mut self, timing: Timing) {
        self.timing = timing;
    }

    /// Probe the display at its current address
    pub fn is_connected(&mut self) -> bool {
        self.sender.is_connected(self.state.get_address())
    }

    /// Block for `ms` milliseconds on the session's delayer
    pub fn delay_ms(&mut self, ms: u32) {
        self.delayer.delay_ms(ms);
    }

    /// End the session, and hand back the sender and delayer
    pub fn release(self) -> (&'a mut Sender, &'b mut Delayer) {
        (self.sender, self.delayer)
    }
}
