//! Initialization sequences
//!
//! Each sub-device is brought from its power-on state into continuous
//! active measurement by a fixed, ordered list of single-byte register
//! writes. The driver walks these lists in order and stops at the first
//! failing write, reporting the [`InitStep`] that failed.

use crate::sensors::accelerometer::{AccelRange, DataRate, SleepRate, SystemMode};
use crate::sensors::magnetometer::{AdcRate, Oversampling};
use crate::{ACCELEROMETER_ADDRESS, COMPASS_ADDRESS};

/// Accelerometer range written to `XYZ_DATA_CFG`
pub const ACCEL_RANGE: AccelRange = AccelRange::G2;

/// Accelerometer auto-sleep rate written to `CTRL_REG1`
pub const ACCEL_SLEEP_RATE: SleepRate = SleepRate::Hz50;

/// Accelerometer output data rate written to `CTRL_REG1`
pub const ACCEL_DATA_RATE: DataRate = DataRate::Hz800;

/// Accelerometer system mode written to `SYSMOD`
pub const ACCEL_SYSTEM_MODE: SystemMode = SystemMode::Wake;

/// Compass ADC rate written to `CTRL_REG1` (10 Hz output with 128x oversampling)
pub const COMPASS_ADC_RATE: AdcRate = AdcRate::Hz1280;

/// Compass oversampling written to `CTRL_REG1`
pub const COMPASS_OVERSAMPLING: Oversampling = Oversampling::X128;

/// One register write of an initialization sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitStep {
    /// Accelerometer `CTRL_REG1`: sleep rate, data rate, noise, read mode, active
    AccelModeControl,
    /// Accelerometer `XYZ_DATA_CFG`: ±2g, no high-pass filter
    AccelDataConfig,
    /// Accelerometer `SYSMOD`: awake
    AccelSystemMode,
    /// Accelerometer register 0: read pointer back to the data block origin
    AccelPointerReset,
    /// Compass `CTRL_REG2`: auto reset, raw mode, reset cycle disabled
    CompassAcquisitionMode,
    /// Compass `CTRL_REG1`: rate, 128x oversampling, continuous, active
    CompassOperation,
}

impl InitStep {
    /// I2C address of the device this step writes to
    #[must_use]
    pub const fn device_address(self) -> u8 {
        match self {
            Self::AccelModeControl
            | Self::AccelDataConfig
            | Self::AccelSystemMode
            | Self::AccelPointerReset => ACCELEROMETER_ADDRESS,
            Self::CompassAcquisitionMode | Self::CompassOperation => COMPASS_ADDRESS,
        }
    }

    /// Datasheet name of the register this step writes
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AccelModeControl | Self::CompassOperation => "CTRL_REG1",
            Self::AccelDataConfig => "XYZ_DATA_CFG",
            Self::AccelSystemMode => "SYSMOD",
            Self::AccelPointerReset => "STATUS",
            Self::CompassAcquisitionMode => "CTRL_REG2",
        }
    }
}

/// Accelerometer configuration writes, in bus order
pub const ACCELEROMETER_SEQUENCE: [InitStep; 4] = [
    InitStep::AccelModeControl,
    InitStep::AccelDataConfig,
    InitStep::AccelSystemMode,
    InitStep::AccelPointerReset,
];

/// Compass configuration writes, in bus order
pub const COMPASS_SEQUENCE: [InitStep; 2] =
    [InitStep::CompassAcquisitionMode, InitStep::CompassOperation];
