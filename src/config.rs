//! Driver configuration
//!
//! Values are fixed when the driver is constructed. The measurement range,
//! rates and modes written during `init()` are not configurable; the scale
//! factor here must match the range in [`crate::init::ACCEL_RANGE`].

use crate::init::ACCEL_RANGE;

/// I2C bus the `XLoBorg` is attached to on a Raspberry Pi (rev 2 and later)
pub const DEFAULT_BUS_NUMBER: u8 = 1;

/// Startup configuration for [`crate::XloBorg`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Bus number, used by `XloBorg::open` to pick `/dev/i2c-<n>`
    pub bus_number: u8,
    /// g represented by one accelerometer count
    pub g_per_count: f32,
    /// Added to every temperature reading
    pub temperature_offset: i8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bus_number: DEFAULT_BUS_NUMBER,
            g_per_count: ACCEL_RANGE.g_per_count(),
            temperature_offset: 0,
        }
    }
}

impl Config {
    /// Default configuration on another bus
    #[must_use]
    pub fn with_bus(bus_number: u8) -> Self {
        Self {
            bus_number,
            ..Self::default()
        }
    }
}
