//! Built-in sender
//!
//! If you want to drive a SerLCD over something other than an embedded-hal I2C bus,
//! implement [`ByteTransport`] for it, [`SendCommand`] comes for free.

use embedded_hal::delay::DelayNs;

use crate::command::{Command, SETTING_COMMAND, SPECIAL_COMMAND};

mod i2c_sender;

pub use i2c_sender::{I2cSender, MAX_BLOCK_LEN};

/// [`ByteTransport`] is the set of bus primitives a SerLCD needs
pub trait ByteTransport {
    /// Error reported when a write is not delivered
    type Error;

    /// Write `value` into `register` of the device at `address`
    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Write `register` followed by all bytes of `payload` in one transfer
    fn write_block(&mut self, address: u8, register: u8, payload: &[u8])
        -> Result<(), Self::Error>;

    /// Write a single byte, no register
    fn write_command(&mut self, address: u8, value: u8) -> Result<(), Self::Error>;

    /// Whether a device answers at `address`
    fn is_connected(&mut self, address: u8) -> bool;
}

/// Put a [`Command`] on a [`ByteTransport`], and wait for the display to digest it
pub trait SendCommand: ByteTransport {
    /// Route a [`Command`] to its channel
    fn send(&mut self, address: u8, command: Command) -> Result<(), Self::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("serlcd {=u8:#x} <- {}", address, command);

        match command {
            Command::Setting(opcode) => self.write_byte(address, SETTING_COMMAND, opcode),
            Command::SettingBlock(block) => {
                self.write_block(address, SETTING_COMMAND, block.as_slice())
            }
            Command::Special(opcode) => self.write_byte(address, SPECIAL_COMMAND, opcode),
            Command::Char(byte) => self.write_command(address, byte),
        }
    }

    /// Send command, then wait specific duration
    fn send_and_wait(
        &mut self,
        address: u8,
        command: Command,
        delayer: &mut impl DelayNs,
        delay_ms: u32,
    ) -> Result<(), Self::Error> {
        let result = self.send(address, command);
        delayer.delay_ms(delay_ms);
        result
    }

    /// Send the same command `count` times back to back, then wait once
    ///
    /// Stops at the first failed write. A `count` of 0 sends nothing and doesn't wait.
    fn send_repeated_and_wait(
        &mut self,
        address: u8,
        command: Command,
        count: u8,
        delayer: &mut impl DelayNs,
        delay_ms: u32,
    ) -> Result<(), Self::Error> {
        if count == 0 {
            return Ok(());
        }

        let result = (0..count).try_for_each(|_| self.send(address, command));
        delayer.delay_ms(delay_ms);
        result
    }
}

impl<T: ByteTransport + ?Sized> SendCommand for T {}
