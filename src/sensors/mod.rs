//! Sensor modules for the `XLoBorg`
//!
//! This module provides field encodings, sample types and decoders for each
//! sub-device:
//! - Accelerometer (3-axis, `MMA8452Q`)
//! - Magnetometer (3-axis compass with die temperature, `MAG3110`)
//!
//! All bus operations are performed through methods on `XloBorg`; the
//! decoders here are pure functions over the raw blocks.

pub mod accelerometer;
pub mod magnetometer;

// Re-export main types
pub use accelerometer::{
    ACCEL_BLOCK_LEN, AccelRange, Acceleration, DataRate, SleepRate, SystemMode,
    decode_acceleration,
};
pub use magnetometer::{
    AdcRate, COMPASS_BLOCK_LEN, MagneticField, Oversampling, decode_magnetic_field,
    decode_temperature,
};
