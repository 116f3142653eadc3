use core::fmt;

use embedded_hal::delay::DelayNs;

use crate::{
    lcd::{Lcd, LcdResult},
    sender::SendCommand,
};

fn split_rgb(rgb: u32) -> (u8, u8, u8) {
    ((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand,
    Delayer: DelayNs,
{
    /// [`Lcd::set_backlight`] with a `0xRRGGBB` colour
    pub fn set_backlight_rgb(&mut self, rgb: u32) -> LcdResult<Sender> {
        let (red, green, blue) = split_rgb(rgb);
        self.set_backlight(red, green, blue)
    }

    /// [`Lcd::set_fast_backlight`] with a `0xRRGGBB` colour
    pub fn set_fast_backlight_rgb(&mut self, rgb: u32) -> LcdResult<Sender> {
        let (red, green, blue) = split_rgb(rgb);
        self.set_fast_backlight(red, green, blue)
    }

    /// Flip display on/off
    pub fn toggle_display(&mut self) -> LcdResult<Sender> {
        let display = self.get_display_state().toggled();
        self.set_display_state(display)
    }

    /// Move cursor to `(col, row)`, then print
    pub fn write_str_to_pos(&mut self, text: &str, pos: (u8, u8)) -> LcdResult<Sender> {
        self.set_cursor(pos.0, pos.1)?;
        self.print(text)
    }
}

/// `write!` straight to the display
impl<'a, 'b, Sender, Delayer> fmt::Write for Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand,
    Delayer: DelayNs,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print(s).map_err(|_| fmt::Error)
    }
}
