//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in thermion-core for the alarm's hardware components:
//!
//! - DS18B20 temperature sensor (bit-banged 1-Wire)
//! - HD44780 character display (4-bit parallel mode)
//! - GPIO alarm output (active buzzer)
//!
//! All drivers are generic over the core pin traits and a blocking
//! [`embedded_hal::delay::DelayNs`] provider. The drivers are strictly
//! synchronous: every protocol delay is a hard timing requirement and is
//! met by busy-waiting.

#![no_std]
#![deny(unsafe_code)]

pub mod alarm;
pub mod ds18b20;
pub mod hd44780;

pub use alarm::GpioAlarm;
pub use ds18b20::Ds18b20;
pub use hd44780::Hd44780;
