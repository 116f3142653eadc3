//! Drive a SerLCD (Qwiic) with a STM32F411RET6 over I2C
//!
//! Wiring diagram
//!
//! SerLCD <-> STM32F411RET6
//!    GND <-> GND
//!    3V3 <-> 3V3
//!    SDA <-> PB7
//!    SCL <-> PB6

#![no_std]
#![no_main]

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::{
    i2c::{self, I2c},
    pac,
    prelude::*,
};

use serlcd_driver::{
    command::DEFAULT_ADDRESS,
    lcd::{Config, Lcd},
    sender::I2cSender,
};

// a heart shape
const HEART: [u8; 8] = [
    0b00000, 0b00000, 0b01010, 0b11111, 0b01110, 0b00100, 0b00000, 0b00000,
];

#[cortex_m_rt::entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = pac::Peripherals::take().expect("Cannot take device peripherals");
    let cp = pac::CorePeripherals::take().expect("Cannot take core peripherals");

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.use_hse(12.MHz()).freeze();

    let mut delayer = cp.SYST.delay(&clocks);

    let gpiob = dp.GPIOB.split();

    let mut i2c = I2c::new(
        dp.I2C1,
        (gpiob.pb6, gpiob.pb7),
        i2c::Mode::standard(100.kHz()),
        &clocks,
    );

    let mut sender = I2cSender::new(&mut i2c);
    let mut lcd = Lcd::new(&mut sender, &mut delayer, Config::default());

    if !lcd.is_connected() {
        rprintln!("no SerLCD at {:#x}", DEFAULT_ADDRESS);
    }

    if let Err(e) = lcd.init() {
        rprintln!("init failed: {}", e);
    }

    let steps = [
        lcd.disable_system_messages(),
        lcd.set_backlight(0, 64, 255),
        lcd.set_contrast(5),
        lcd.create_char(1, &HEART),
        lcd.print("hello,"),
        lcd.set_cursor(0, 1),
        lcd.print("world! "),
        lcd.write_custom_char(1),
    ];
    steps
        .iter()
        .filter_map(|step| step.err())
        .for_each(|e| rprintln!("write failed: {}", e));

    lcd.cursor().ok();
    lcd.blink().ok();

    // slide the text out and back in
    for _ in 0..4 {
        lcd.delay_ms(1_000);
        lcd.scroll_display_right(4).ok();
        lcd.delay_ms(1_000);
        lcd.scroll_display_left(4).ok();
    }

    // walk the backlight around the colour wheel, no blanking
    let mut hue: u8 = 0;
    loop {
        let (r, g, b) = wheel(hue);
        lcd.set_fast_backlight(r, g, b).ok();
        hue = hue.wrapping_add(1);
        lcd.delay_ms(20);
    }
}

fn wheel(pos: u8) -> (u8, u8, u8) {
    match pos {
        0..=84 => (255 - pos * 3, pos * 3, 0),
        85..=169 => {
            let pos = pos - 85;
            (0, 255 - pos * 3, pos * 3)
        }
        _ => {
            let pos = pos - 170;
            (pos * 3, 0, 255 - pos * 3)
        }
    }
}
