//! Thermion - Temperature Alarm Firmware
//!
//! Main firmware binary for RP2040-based boards. Reads a DS18B20 over a
//! bit-banged 1-Wire bus, shows the reading on a 16x2 HD44780 display in
//! 4-bit mode, and sounds an active buzzer at or above the alarm
//! threshold, or whenever the sensor stops responding.
//!
//! Pin mapping:
//!   DS18B20 DQ -> GPIO16 (+4.7k pull-up to 3V3)
//!   Buzzer     -> GPIO17 (active-high)
//!   LCD 16x2 (HD44780 in 4-bit mode, R/W tied to GND):
//!       RS -> GPIO10
//!       E  -> GPIO11
//!       D4 -> GPIO12
//!       D5 -> GPIO13
//!       D6 -> GPIO14
//!       D7 -> GPIO15

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Flex, Level, Output};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use thermion_core::monitor::AlarmMonitor;
use thermion_core::render;
use thermion_core::traits::{AlarmOutput, CharacterDisplay, TemperatureSensor};
use thermion_drivers::{Ds18b20, GpioAlarm, Hd44780};

use crate::pins::{OneWirePin, PushPull};

mod pins;

/// Pause between control-loop cycles. Together with the sensor's 750 ms
/// conversion wait this gives a display update cadence just under 2 s.
const CYCLE_PAUSE_MS: u64 = 1000;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Thermion firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Buzzer first, forced silent before anything else runs.
    let mut buzzer =
        GpioAlarm::new_active_high(PushPull::new(Output::new(p.PIN_17, Level::Low)));

    let mut lcd = Hd44780::new(
        PushPull::new(Output::new(p.PIN_10, Level::Low)),
        PushPull::new(Output::new(p.PIN_11, Level::Low)),
        PushPull::new(Output::new(p.PIN_12, Level::Low)),
        PushPull::new(Output::new(p.PIN_13, Level::Low)),
        PushPull::new(Output::new(p.PIN_14, Level::Low)),
        PushPull::new(Output::new(p.PIN_15, Level::Low)),
        Delay,
    );
    lcd.init();
    lcd.print(render::HEADER_TEXT);
    info!("Display initialized");

    let mut sensor = Ds18b20::new(OneWirePin::new(Flex::new(p.PIN_16)), Delay);
    let monitor = AlarmMonitor::new();

    loop {
        // Blocks for the sensor's full conversion time.
        let reading = sensor.read_temperature();
        match reading {
            Ok(temp) => {
                let tenths = temp.tenths();
                trace!("Temperature: {}.{}°C", tenths / 10, (tenths % 10).abs());
            }
            Err(e) => warn!("Acquisition failed: {}", e),
        }

        let outcome = monitor.evaluate(reading);
        lcd.set_cursor(1, 0);
        lcd.print_bytes(&outcome.line);
        buzzer.set_active(outcome.alarm);

        Timer::after_millis(CYCLE_PAUSE_MS).await;
    }
}
