use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

use super::ByteTransport;

/// Longest block payload, same limit as an SMBus block write
pub const MAX_BLOCK_LEN: usize = 32;

/// [`ByteTransport`] over an embedded-hal I2C bus
///
/// Frames on the wire:
/// * byte write: `register`, `value`
/// * block write: `register`, `payload...`
/// * command: `value`
///
/// Bus errors are reduced to their [`ErrorKind`].
pub struct I2cSender<'a, I2cLcd: I2c> {
    i2c: &'a mut I2cLcd,
}

impl<'a, I2cLcd: I2c> I2cSender<'a, I2cLcd> {
    pub fn new(i2c: &'a mut I2cLcd) -> Self {
        Self { i2c }
    }

    /// Give the bus back
    pub fn release(self) -> &'a mut I2cLcd {
        self.i2c
    }
}

impl<'a, I2cLcd: I2c> ByteTransport for I2cSender<'a, I2cLcd> {
    type Error = ErrorKind;

    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c
            .write(address, &[register, value])
            .map_err(|e| e.kind())
    }

    fn write_block(
        &mut self,
        address: u8,
        register: u8,
        payload: &[u8],
    ) -> Result<(), Self::Error> {
        if payload.len() > MAX_BLOCK_LEN {
            return Err(ErrorKind::Other);
        }

        let mut seq = [0u8; MAX_BLOCK_LEN + 1];
        seq[0] = register;
        seq[1..=payload.len()].copy_from_slice(payload);

        self.i2c
            .write(address, &seq[..=payload.len()])
            .map_err(|e| e.kind())
    }

    fn write_command(&mut self, address: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(address, &[value]).map_err(|e| e.kind())
    }

    fn is_connected(&mut self, address: u8) -> bool {
        // an address-only write, ACK means someone is there
        self.i2c.write(address, &[]).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    extern crate std;
    use std::vec;

    #[test]
    fn byte_write_is_register_then_value() {
        let expectations = [I2cTransaction::write(0x72, vec![0x7C, 0x2D])];
        let mut i2c = I2cMock::new(&expectations);

        let mut sender = I2cSender::new(&mut i2c);
        assert_eq!(sender.write_byte(0x72, 0x7C, 0x2D), Ok(()));

        i2c.done();
    }

    #[test]
    fn block_write_is_one_transfer() {
        let expectations = [I2cTransaction::write(
            0x72,
            vec![0x7C, 30, 1, 2, 3, 4, 5, 6, 7, 8],
        )];
        let mut i2c = I2cMock::new(&expectations);

        let mut sender = I2cSender::new(&mut i2c);
        assert_eq!(
            sender.write_block(0x72, 0x7C, &[30, 1, 2, 3, 4, 5, 6, 7, 8]),
            Ok(())
        );

        i2c.done();
    }

    #[test]
    fn oversized_block_never_reaches_the_bus() {
        let mut i2c = I2cMock::new(&[]);

        let mut sender = I2cSender::new(&mut i2c);
        let payload = [0u8; MAX_BLOCK_LEN + 1];
        assert_eq!(
            sender.write_block(0x72, 0x7C, &payload),
            Err(ErrorKind::Other)
        );

        i2c.done();
    }

    #[test]
    fn command_is_a_bare_byte() {
        let expectations = [I2cTransaction::write(0x72, vec![b'H'])];
        let mut i2c = I2cMock::new(&expectations);

        let mut sender = I2cSender::new(&mut i2c);
        assert_eq!(sender.write_command(0x72, b'H'), Ok(()));

        i2c.done();
    }

    #[test]
    fn bus_error_is_reported_by_kind() {
        let expectations =
            [I2cTransaction::write(0x72, vec![0xFE, 0x02]).with_error(ErrorKind::Other)];
        let mut i2c = I2cMock::new(&expectations);

        let mut sender = I2cSender::new(&mut i2c);
        assert_eq!(sender.write_byte(0x72, 0xFE, 0x02), Err(ErrorKind::Other));

        i2c.done();
    }

    #[test]
    fn probe_uses_empty_write() {
        let expectations = [
            I2cTransaction::write(0x72, vec![]),
            I2cTransaction::write(0x73, vec![]).with_error(ErrorKind::Other),
        ];
        let mut i2c = I2cMock::new(&expectations);

        let mut sender = I2cSender::new(&mut i2c);
        assert!(sender.is_connected(0x72));
        assert!(!sender.is_connected(0x73));

        i2c.done();
    }
}
