//! RP2040 pin adapters
//!
//! Wraps embassy-rp GPIO types into the infallible pin traits the
//! thermion-core drivers are written against.

use embassy_rp::gpio::{Flex, Output, Pull};

use thermion_core::traits::{InputPin, OutputPin};

/// Push-pull output pin
pub struct PushPull<'d> {
    pin: Output<'d>,
}

impl<'d> PushPull<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl OutputPin for PushPull<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }
}

/// Open-drain 1-Wire bus pin with the internal pull-up enabled
///
/// Driving low switches the pin to output with the latch preloaded low;
/// driving high releases the line back to input so the pull-up (internal
/// plus the bus's external resistor) floats it high. Reads sample the
/// released line.
pub struct OneWirePin<'d> {
    pin: Flex<'d>,
}

impl<'d> OneWirePin<'d> {
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_pull(Pull::Up);
        // Latch low once; output mode then always drives the bus low.
        pin.set_low();
        pin.set_as_input();
        Self { pin }
    }
}

impl OutputPin for OneWirePin<'_> {
    fn set_high(&mut self) {
        self.pin.set_as_input();
    }

    fn set_low(&mut self) {
        self.pin.set_as_output();
    }
}

impl InputPin for OneWirePin<'_> {
    fn is_high(&mut self) -> bool {
        self.pin.is_high()
    }
}
