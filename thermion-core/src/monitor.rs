//! Alarm decision logic
//!
//! One pure evaluation per control-loop cycle: a tagged sensor reading goes
//! in, the second display line and the alarm state come out. No state is
//! carried between cycles and there is no hysteresis - a reading
//! oscillating around the threshold will chatter the alarm on every
//! crossing.

use crate::render::{self, LineBuf};
use crate::temperature::Temperature;
use crate::traits::SensorError;

/// Alarm threshold. The comparison is inclusive: a reading of exactly
/// 28.0 °C activates the alarm.
pub const ALARM_THRESHOLD: Temperature = Temperature::from_celsius(28);

/// Implausibility floor. Readings at or below -100 °C cannot come from a
/// physically present sensor and are treated as "sensor absent", never as
/// data, regardless of how they were delivered.
pub const PLAUSIBLE_FLOOR: Temperature = Temperature::from_celsius(-100);

/// Result of evaluating one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleOutcome {
    /// Fully padded second display line
    pub line: LineBuf,
    /// Whether the alarm output must be active
    pub alarm: bool,
}

/// Per-cycle alarm monitor
///
/// Holds the configured threshold and maps each reading to a display line
/// and an alarm state. An unreachable sensor fails loud: the alarm is
/// forced active rather than silently showing stale data.
#[derive(Debug, Clone)]
pub struct AlarmMonitor {
    threshold: Temperature,
}

impl Default for AlarmMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl AlarmMonitor {
    /// Create a monitor with the built-in threshold
    pub const fn new() -> Self {
        Self {
            threshold: ALARM_THRESHOLD,
        }
    }

    /// Create a monitor with a specific threshold
    pub const fn with_threshold(threshold: Temperature) -> Self {
        Self { threshold }
    }

    /// The configured threshold
    pub const fn threshold(&self) -> Temperature {
        self.threshold
    }

    /// Evaluate one acquisition result
    ///
    /// A valid reading renders as temperature text, with the alarm active
    /// if and only if the reading is at or above the threshold. A failed
    /// acquisition, or a reading at or below [`PLAUSIBLE_FLOOR`], renders
    /// the "No sensor" line with the alarm forced active.
    pub fn evaluate(&self, reading: Result<Temperature, SensorError>) -> CycleOutcome {
        match reading {
            Ok(temp) if temp > PLAUSIBLE_FLOOR => CycleOutcome {
                line: render::temperature_line(temp),
                alarm: temp >= self.threshold,
            },
            _ => CycleOutcome {
                line: render::no_sensor_line(),
                alarm: true,
            },
        }
    }
}
