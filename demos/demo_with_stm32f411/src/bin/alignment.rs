//! Place text with the positioning helper, and scroll it around
//!
//! Same wiring as the main demo.

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
    command::State,
    error::{BusError, ErrorPolicy},
    lcd::{Config, Lcd},
    sender::{I2cSender, BIZ_ADDRESS},
};

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

    // report every NACK, so a loose wire shows up in the RTT log
    let config = Config::default().set_error_policy(ErrorPolicy::Strict);

    let mut lcd = Lcd::new_with_reset(&mut sender, &mut delayer, &mut reset_pin, config)
        .expect("LCD init failed");

    let result = (|| {
        lcd.show("Hello").center()?;
        lcd.next_line()?;
        lcd.show("World").right()?;
        lcd.show("<").at(0, 1)?;
        lcd.set_cursor_blink_state(State::On)
    })();

    if let Err(e) = result {
        rprintln!("LCD write failed: {}", e);
    }

    loop {
        lcd.delay_ms(500);
        let result = (|| {
            for _ in 0..4 {
                lcd.scroll_right()?;
                lcd.delay_ms(250);
            }
            for _ in 0..4 {
                lcd.scroll_left()?;
                lcd.delay_ms(250);
            }
            Ok::<(), BusError>(())
        })();

        if let Err(e) = result {
            rprintln!("LCD scroll failed: {}", e);
        }
    }
}
