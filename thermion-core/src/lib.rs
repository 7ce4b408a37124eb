//! Board-agnostic core logic for the temperature alarm firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (pins, sensor, display, alarm)
//! - Temperature reading type and fixed-point conversions
//! - Display line rendering
//! - Per-cycle alarm decision logic

#![no_std]
#![deny(unsafe_code)]

pub mod monitor;
pub mod render;
pub mod temperature;
pub mod traits;

pub use monitor::AlarmMonitor;
pub use temperature::Temperature;
