//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod alarm;
pub mod display;
pub mod gpio;
pub mod sensor;

pub use alarm::AlarmOutput;
pub use display::CharacterDisplay;
pub use gpio::{InputPin, OpenDrainPin, OutputPin};
pub use sensor::{SensorError, TemperatureSensor};
