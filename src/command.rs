//! SerLCD command set and its wire encoding
//!
//! A [`CommandSet`] is what the driver wants the display to do,
//! a [`Command`] is the byte(s) and the channel that carry it.

use crate::utils::{map_range, BitOps};

/// Default I2C address of a SerLCD
pub const DEFAULT_ADDRESS: u8 = 0x72;

/// Marker byte of the settings channel, the pipe character `|`
pub const SETTING_COMMAND: u8 = 0x7C;
/// Marker byte of the special command channel
pub const SPECIAL_COMMAND: u8 = 0xFE;

/// Max rows of any SerLCD
pub const MAX_ROWS: u8 = 4;
/// Max columns of any SerLCD
pub const MAX_COLUMNS: u8 = 20;

/// DDRAM offset of each row
pub const ROW_OFFSETS: [u8; MAX_ROWS as usize] = [0x00, 0x40, 0x14, 0x54];

/// Bytes per custom glyph
pub const GLYPH_LEN: usize = 8;
/// Custom glyph slots
pub const GLYPH_SLOTS: u8 = 8;

/// Opcodes of the settings channel
pub mod setting {
    /// `-`, clear display and return cursor home
    pub const CLEAR: u8 = 0x2D;
    pub const CONTRAST: u8 = 0x18;
    /// Change the I2C address, persisted in EEPROM
    pub const ADDRESS: u8 = 0x19;
    /// `+`, set backlight RGB without confirmation message
    pub const SET_RGB: u8 = 0x2B;
    pub const ENABLE_SYSTEM_MESSAGE: u8 = 0x2E;
    pub const DISABLE_SYSTEM_MESSAGE: u8 = 0x2F;
    pub const ENABLE_SPLASH: u8 = 0x30;
    pub const DISABLE_SPLASH: u8 = 0x31;
    /// Ctrl+J, save current text as splash
    pub const SAVE_SPLASH: u8 = 0x0A;
    /// First of the 8 "create glyph" opcodes
    pub const CREATE_CHAR_BASE: u8 = 27;
    /// First of the 8 "write glyph" opcodes
    pub const WRITE_CHAR_BASE: u8 = 35;
    /// Backlight band starts, each band is 30 steps wide
    pub const RED_BASE: u8 = 128;
    pub const GREEN_BASE: u8 = 158;
    pub const BLUE_BASE: u8 = 188;
    /// Highest step inside a backlight band
    pub const BAND_MAX: u8 = 29;
}

/// Opcodes and flags of the special command channel, HD44780 style
pub mod special {
    pub const RETURN_HOME: u8 = 0x02;
    pub const ENTRY_MODE_SET: u8 = 0x04;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const CURSOR_SHIFT: u8 = 0x10;
    pub const SET_DDRAM_ADDR: u8 = 0x80;

    // entry mode
    pub const ENTRY_RIGHT: u8 = 0x00;
    pub const ENTRY_LEFT: u8 = 0x02;
    pub const ENTRY_SHIFT_INCREMENT: u8 = 0x01;
    pub const ENTRY_SHIFT_DECREMENT: u8 = 0x00;

    // display on/off control
    pub const DISPLAY_ON: u8 = 0x04;
    pub const DISPLAY_OFF: u8 = 0x00;
    pub const CURSOR_ON: u8 = 0x02;
    pub const CURSOR_OFF: u8 = 0x00;
    pub const BLINK_ON: u8 = 0x01;
    pub const BLINK_OFF: u8 = 0x00;

    // display/cursor shift
    pub const DISPLAY_MOVE: u8 = 0x08;
    pub const CURSOR_MOVE: u8 = 0x00;
    pub const MOVE_RIGHT: u8 = 0x04;
    pub const MOVE_LEFT: u8 = 0x00;
}

/// Longest payload the driver ever hands to a block write
pub const BLOCK_CAPACITY: usize = 10;

#[derive(Clone, Copy)]
pub enum CommandSet {
    ClearDisplay,
    ReturnHome,
    EntryModeSet {
        direction: MoveDirection,
        autoscroll: State,
    },
    DisplayOnOff {
        display: State,
        cursor: State,
        cursor_blink: State,
    },
    CursorOrDisplayShift(ShiftType, MoveDirection),
    /// column and row, row is clamped to the last row
    SetDDRAM(u8, u8),
    SetContrast(u8),
    /// The flicker free backlight sequence,
    /// display is turned off around the 3 colour settings, then back on
    SetBacklight {
        red: u8,
        green: u8,
        blue: u8,
        cursor: State,
        cursor_blink: State,
    },
    SetFastBacklight(u8, u8, u8),
    CreateChar(u8, [u8; GLYPH_LEN]),
    WriteCustomChar(u8),
    SystemMessages(State),
    Splash(State),
    SaveSplash,
    SetAddress(u8),
    /// A character to print at cursor
    WriteChar(u8),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveDirection {
    RightToLeft,
    #[default]
    LeftToRight,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShiftType {
    #[default]
    Cursor,
    Display,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Off,
    #[default]
    On,
}

impl State {
    pub(crate) fn toggled(self) -> Self {
        match self {
            State::Off => State::On,
            State::On => State::Off,
        }
    }
}

/// Bytes for a block write, at most [`BLOCK_CAPACITY`] long
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Block {
    len: u8,
    data: [u8; BLOCK_CAPACITY],
}

impl Block {
    fn new(opcode: u8, payload: &[u8]) -> Self {
        debug_assert!(payload.len() < BLOCK_CAPACITY, "block payload overflow");

        let mut data = [0u8; BLOCK_CAPACITY];
        data[0] = opcode;

        let len = (payload.len() + 1).min(BLOCK_CAPACITY);
        data[1..len].copy_from_slice(&payload[..len - 1]);

        Self {
            len: len as u8,
            data,
        }
    }

    fn raw(data: [u8; BLOCK_CAPACITY]) -> Self {
        Self {
            len: BLOCK_CAPACITY as u8,
            data,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len as usize]
    }
}

/// One transmission unit, the channel decides how a sender puts it on the bus
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// single opcode on the settings channel
    Setting(u8),
    /// opcode and payload on the settings channel
    SettingBlock(Block),
    /// single opcode on the special command channel
    Special(u8),
    /// raw byte without marker
    Char(u8),
}

pub(crate) fn display_control_bits(display: State, cursor: State, cursor_blink: State) -> u8 {
    let mut raw_bits = special::DISPLAY_CONTROL;

    raw_bits.set_flag(special::DISPLAY_ON, display);
    raw_bits.set_flag(special::CURSOR_ON, cursor);
    raw_bits.set_flag(special::BLINK_ON, cursor_blink);

    raw_bits
}

pub(crate) fn entry_mode_bits(direction: MoveDirection, autoscroll: State) -> u8 {
    let mut raw_bits = special::ENTRY_MODE_SET;

    match direction {
        MoveDirection::RightToLeft => {
            raw_bits.clear_flag(special::ENTRY_LEFT);
        }
        MoveDirection::LeftToRight => {
            raw_bits.set_flag(special::ENTRY_LEFT, State::On);
        }
    }

    raw_bits.set_flag(special::ENTRY_SHIFT_INCREMENT, autoscroll);

    raw_bits
}

/// map a 0~255 colour channel into its 30 step backlight band
pub(crate) fn backlight_band(base: u8, channel: u8) -> u8 {
    base + map_range(channel as i32, 0, 255, 0, setting::BAND_MAX as i32) as u8
}

impl From<CommandSet> for Command {
    fn from(command: CommandSet) -> Self {
        match command {
            CommandSet::ClearDisplay => Command::Setting(setting::CLEAR),

            CommandSet::ReturnHome => Command::Special(special::RETURN_HOME),

            CommandSet::EntryModeSet {
                direction,
                autoscroll,
            } => Command::Special(entry_mode_bits(direction, autoscroll)),

            CommandSet::DisplayOnOff {
                display,
                cursor,
                cursor_blink,
            } => Command::Special(display_control_bits(display, cursor, cursor_blink)),

            CommandSet::CursorOrDisplayShift(st, dir) => {
                let mut raw_bits = special::CURSOR_SHIFT;

                match st {
                    ShiftType::Cursor => raw_bits |= special::CURSOR_MOVE,
                    ShiftType::Display => raw_bits |= special::DISPLAY_MOVE,
                }

                match dir {
                    MoveDirection::RightToLeft => raw_bits |= special::MOVE_LEFT,
                    MoveDirection::LeftToRight => raw_bits |= special::MOVE_RIGHT,
                }

                Command::Special(raw_bits)
            }

            CommandSet::SetDDRAM(col, row) => {
                let row = row.min(MAX_ROWS - 1);
                let addr = col.wrapping_add(ROW_OFFSETS[row as usize]) & 0x7F;

                Command::Special(special::SET_DDRAM_ADDR | addr)
            }

            CommandSet::SetContrast(contrast) => {
                Command::SettingBlock(Block::new(setting::CONTRAST, &[contrast]))
            }

            CommandSet::SetBacklight {
                red,
                green,
                blue,
                cursor,
                cursor_blink,
            } => {
                let off = display_control_bits(State::Off, cursor, cursor_blink);
                let on = display_control_bits(State::On, cursor, cursor_blink);

                Command::SettingBlock(Block::raw([
                    SPECIAL_COMMAND,
                    off,
                    SETTING_COMMAND,
                    backlight_band(setting::RED_BASE, red),
                    SETTING_COMMAND,
                    backlight_band(setting::GREEN_BASE, green),
                    SETTING_COMMAND,
                    backlight_band(setting::BLUE_BASE, blue),
                    SPECIAL_COMMAND,
                    on,
                ]))
            }

            CommandSet::SetFastBacklight(red, green, blue) => {
                Command::SettingBlock(Block::new(setting::SET_RGB, &[red, green, blue]))
            }

            CommandSet::CreateChar(slot, glyph) => Command::SettingBlock(Block::new(
                setting::CREATE_CHAR_BASE + (slot & 0x07),
                &glyph,
            )),

            CommandSet::WriteCustomChar(slot) => {
                Command::Setting(setting::WRITE_CHAR_BASE + (slot & 0x07))
            }

            CommandSet::SystemMessages(state) => match state {
                State::On => Command::Setting(setting::ENABLE_SYSTEM_MESSAGE),
                State::Off => Command::Setting(setting::DISABLE_SYSTEM_MESSAGE),
            },

            CommandSet::Splash(state) => match state {
                State::On => Command::Setting(setting::ENABLE_SPLASH),
                State::Off => Command::Setting(setting::DISABLE_SPLASH),
            },

            CommandSet::SaveSplash => Command::Setting(setting::SAVE_SPLASH),

            CommandSet::SetAddress(addr) => {
                Command::SettingBlock(Block::new(setting::ADDRESS, &[addr]))
            }

            CommandSet::WriteChar(byte) => Command::Char(byte),
        }
    }
}
