//! Drive a Newhaven 2x20 COG LCD (ST7036) with a STM32F411RET6 over I2C
//!
//! Loops the vendor's test screens forever.

//! Wiring diagram
//!
//!     LCD <-> STM32F411RET6
//!     VDD <-> 3V3
//!     VSS <-> GND
//!     RST <-> PA8 (driven high by the driver)
//!     SCL <-> PB6 (with a 4.7 kOhm pullup)
//!     SDA <-> PB7 (with a 4.7 kOhm pullup)

#![no_std]
#![no_main]

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::{
    i2c::{self, I2c},
    pac,
    prelude::*,
};

use st7036i_driver::{
    error::BusError,
    lcd::{Config, Lcd},
    sender::{I2cSender, BIZ_ADDRESS},
};

const SCREENS: [(&str, &str); 2] = [
    ("  Newhaven Display  ", " Clear Display Test "),
    ("    COG  Display    ", "  2x20  Characters  "),
];

#[cortex_m_rt::entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = pac::Peripherals::take().expect("Cannot take device peripherals");
    let cp = pac::CorePeripherals::take().expect("Cannot take core peripherals");

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.use_hse(8.MHz()).freeze();

    let mut delayer = cp.SYST.delay(&clocks);

    let gpioa = dp.GPIOA.split();
    let gpiob = dp.GPIOB.split();

    let mut reset_pin = gpioa.pa8.into_push_pull_output();

    let mut i2c = I2c::new(
        dp.I2C1,
        (gpiob.pb6, gpiob.pb7),
        i2c::Mode::standard(100.kHz()),
        &clocks,
    );

    let mut sender = I2cSender::new(&mut i2c, BIZ_ADDRESS);

    let mut lcd = Lcd::new_with_reset(&mut sender, &mut delayer, &mut reset_pin, Config::default())
        .expect("LCD init failed");

    rprintln!("LCD ready");

    loop {
        for (first, second) in SCREENS {
            let result = (|| {
                lcd.show(first).show()?;
                lcd.next_line()?;
                lcd.show(second).show()?;
                rprintln!("cursor at {:?}", lcd.get_cursor_pos());

                lcd.delay_ms(1_500);
                lcd.clear_display()?;
                lcd.delay_ms(2);
                Ok::<(), BusError>(())
            })();

            if let Err(e) = result {
                rprintln!("LCD write failed: {}", e);
            }
        }
    }
}
