//! Alarm output trait

/// Trait for binary alarm actuators (buzzer, LED, relay)
///
/// Implementations control the actuator via a GPIO pin. State is not
/// latched by the caller: the control loop recomputes and re-asserts the
/// alarm every cycle.
pub trait AlarmOutput {
    /// Activate or deactivate the alarm
    fn set_active(&mut self, active: bool);

    /// Check if the alarm is currently active
    fn is_active(&self) -> bool;
}
