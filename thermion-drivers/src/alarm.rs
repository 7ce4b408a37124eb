//! GPIO alarm output
//!
//! Binary alarm actuator (active buzzer) driven by a GPIO pin, directly
//! or via a transistor stage.

use thermion_core::traits::{AlarmOutput, OutputPin};

/// GPIO alarm output
///
/// Drives the alarm via a GPIO pin. The pin can be configured as
/// active-high (default) or active-low. The alarm is forced inactive at
/// construction so a reset never leaves a stuck buzzer.
pub struct GpioAlarm<P> {
    pin: P,
    /// If true, alarm ON = pin LOW
    inverted: bool,
    /// Current logical state (true = alarm sounding)
    active: bool,
}

impl<P: OutputPin> GpioAlarm<P> {
    /// Create a new GPIO alarm output
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the alarm sounds when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut alarm = Self {
            pin,
            inverted,
            active: false,
        };
        alarm.set_active(false);
        alarm
    }

    /// Create a new alarm with active-high output
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a new alarm with active-low output
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> AlarmOutput for GpioAlarm<P> {
    fn set_active(&mut self, active: bool) {
        self.active = active;
        self.pin.set_state(active != self.inverted);
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: false }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }
    }

    #[test]
    fn test_active_high_alarm() {
        let pin = MockPin::new();
        let mut alarm = GpioAlarm::new_active_high(pin);

        // Silent at construction
        assert!(!alarm.is_active());
        assert!(!alarm.pin.high);

        alarm.set_active(true);
        assert!(alarm.is_active());
        assert!(alarm.pin.high);

        alarm.set_active(false);
        assert!(!alarm.is_active());
        assert!(!alarm.pin.high);
    }

    #[test]
    fn test_active_low_alarm() {
        let pin = MockPin::new();
        let mut alarm = GpioAlarm::new_active_low(pin);

        // Silent at construction means the pin idles high
        assert!(!alarm.is_active());
        assert!(alarm.pin.high);

        alarm.set_active(true);
        assert!(alarm.is_active());
        assert!(!alarm.pin.high);
    }

    #[test]
    fn test_alarm_trait() {
        let pin = MockPin::new();
        let mut alarm = GpioAlarm::new_active_high(pin);

        fn check_alarm<A: AlarmOutput>(a: &mut A) {
            assert!(!a.is_active());
            a.set_active(true);
            assert!(a.is_active());
        }

        check_alarm(&mut alarm);
    }
}
