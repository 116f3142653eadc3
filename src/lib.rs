/*!
# SerLCD Driver

Driver for SparkFun SerLCD (OpenLCD firmware) character displays, 16x2 and 20x4, RGB backlight.

Basic Usage:

1. Initialize a "sender" <br/>
    This crate include an I2C sender [`sender::I2cSender`] over any embedded-hal I2C bus.

    You can use any transport implemented [`sender::ByteTransport`] instead.
<br/>
<br/>
2. Use [`lcd::Lcd::new()`] with a [`lcd::Config`] to create a [`lcd::Lcd`], then [`lcd::Lcd::init()`] it
<br/>
<br/>
3. use any methods provide by [`lcd::Lcd`] to control the display

Every method returns a [`error::Error`] when the bus refuses a write. Nothing is retried.

A [`lcd::Lcd`] keeps a copy of the display control and entry mode registers,
one session per display, and don't share it across threads without a lock.
*/

#![no_std]

pub mod command;
pub mod error;
pub mod lcd;
pub mod sender;
mod state;
pub mod utils;
