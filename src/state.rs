use crate::command::{
    display_control_bits, entry_mode_bits, MoveDirection, State, DEFAULT_ADDRESS,
};

/// What the driver believes the display's registers hold
///
/// Display control and entry mode are write-only on the device,
/// every toggle is a read-modify-write of this copy, then a re-send of the whole register.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct LcdState {
    address: u8,
    display_on: State,
    cursor_on: State,
    cursor_blink: State,
    direction: MoveDirection,
    autoscroll: State,
}

impl Default for LcdState {
    // power-on defaults of OpenLCD firmware
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            display_on: State::On,
            cursor_on: State::Off,
            cursor_blink: State::Off,
            direction: MoveDirection::LeftToRight,
            autoscroll: State::Off,
        }
    }
}

impl LcdState {
    pub(crate) fn get_address(&self) -> u8 {
        self.address
    }

    pub(crate) fn set_address(&mut self, address: u8) {
        self.address = address;
    }

    pub(crate) fn get_display_state(&self) -> State {
        self.display_on
    }

    pub(crate) fn set_display_state(&mut self, display: State) {
        self.display_on = display;
    }

    pub(crate) fn get_cursor_state(&self) -> State {
        self.cursor_on
    }

    pub(crate) fn set_cursor_state(&mut self, cursor: State) {
        self.cursor_on = cursor;
    }

    pub(crate) fn get_cursor_blink(&self) -> State {
        self.cursor_blink
    }

    pub(crate) fn set_cursor_blink(&mut self, blink: State) {
        self.cursor_blink = blink;
    }

    pub(crate) fn get_direction(&self) -> MoveDirection {
        self.direction
    }

    pub(crate) fn set_direction(&mut self, dir: MoveDirection) {
        self.direction = dir;
    }

    pub(crate) fn get_autoscroll(&self) -> State {
        self.autoscroll
    }

    pub(crate) fn set_autoscroll(&mut self, autoscroll: State) {
        self.autoscroll = autoscroll;
    }

    /// `DISPLAYCONTROL` opcode with current flags
    pub(crate) fn display_control(&self) -> u8 {
        display_control_bits(self.display_on, self.cursor_on, self.cursor_blink)
    }

    /// `ENTRYMODESET` opcode with current flags
    pub(crate) fn entry_mode(&self) -> u8 {
        entry_mode_bits(self.direction, self.autoscroll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_power_on() {
        let state = LcdState::default();

        assert_eq!(state.get_address(), 0x72);
        assert_eq!(state.display_control(), 0x08 | 0x04);
        assert_eq!(state.entry_mode(), 0x04 | 0x02);
    }

    #[test]
    fn cursor_toggle_restores_register() {
        let mut state = LcdState::default();
        let before = state.display_control();

        state.set_cursor_state(State::On);
        assert_eq!(state.display_control(), before | 0x02);

        state.set_cursor_state(State::Off);
        assert_eq!(state.display_control(), before);
    }

    #[test]
    fn entry_mode_flags() {
        let mut state = LcdState::default();

        state.set_autoscroll(State::On);
        assert_eq!(state.entry_mode(), 0x04 | 0x02 | 0x01);

        state.set_direction(MoveDirection::RightToLeft);
        assert_eq!(state.entry_mode(), 0x04 | 0x01);

        // display control is a separate register
        assert_eq!(state.display_control(), 0x0C);
    }
}
