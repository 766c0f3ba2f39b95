//! Accelerometer sensor types and decoding
//!
//! Provides field encodings and the sample decoder for the `XLoBorg`'s
//! `MMA8452Q` 3-axis accelerometer. The driver runs the device in 8-bit
//! fast-read mode, so every axis is a single signed byte.

/// Length of the accelerometer sample block: STATUS + X + Y + Z
pub const ACCEL_BLOCK_LEN: usize = 4;

/// Accelerometer full-scale range (`XYZ_DATA_CFG.FS`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    /// ±2g range (most sensitive)
    G2 = 0,
    /// ±4g range
    G4 = 1,
    /// ±8g range
    G8 = 2,
}

impl AccelRange {
    /// Get the maximum value in g
    #[must_use]
    pub const fn max_value(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
        }
    }

    /// g represented by one count of an 8-bit fast-read sample
    #[must_use]
    pub fn g_per_count(self) -> f32 {
        f32::from(self.max_value()) / 128.0
    }
}

/// Auto-sleep sample rate (`CTRL_REG1.ASLP_RATE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SleepRate {
    /// 50 Hz
    Hz50 = 0,
    /// 12.5 Hz
    Hz12_5 = 1,
    /// 6.25 Hz
    Hz6_25 = 2,
    /// 1.56 Hz
    Hz1_56 = 3,
}

/// Output data rate (`CTRL_REG1.DR`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataRate {
    /// 800 Hz
    Hz800 = 0,
    /// 400 Hz
    Hz400 = 1,
    /// 200 Hz
    Hz200 = 2,
    /// 100 Hz
    Hz100 = 3,
    /// 50 Hz
    Hz50 = 4,
    /// 12.5 Hz
    Hz12_5 = 5,
    /// 6.25 Hz
    Hz6_25 = 6,
    /// 1.56 Hz
    Hz1_56 = 7,
}

/// System mode (`SYSMOD`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemMode {
    /// Standby
    Standby = 0,
    /// Wake (awake, sampling at `DataRate`)
    Wake = 1,
    /// Sleep (sampling at `SleepRate`)
    Sleep = 2,
}

/// Accelerometer data in physical units (g-force)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acceleration {
    /// X-axis acceleration in g
    pub x: f32,
    /// Y-axis acceleration in g
    pub y: f32,
    /// Z-axis acceleration in g
    pub z: f32,
}

impl Acceleration {
    /// Create from signed 8-bit samples
    ///
    /// # Arguments
    ///
    /// * `raw_x` - Raw X-axis value
    /// * `raw_y` - Raw Y-axis value
    /// * `raw_z` - Raw Z-axis value
    /// * `g_per_count` - g represented by one count (from `AccelRange::g_per_count()`)
    #[must_use]
    pub fn from_raw(raw_x: i8, raw_y: i8, raw_z: i8, g_per_count: f32) -> Self {
        Self {
            x: f32::from(raw_x) * g_per_count,
            y: f32::from(raw_y) * g_per_count,
            z: f32::from(raw_z) * g_per_count,
        }
    }

    /// Get the magnitude of the acceleration vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

impl From<Acceleration> for (f32, f32, f32) {
    fn from(value: Acceleration) -> Self {
        (value.x, value.y, value.z)
    }
}

/// Decode an accelerometer sample block
///
/// Byte 0 is the status register and is ignored. Bytes 1..=3 hold X, Y and
/// Z as two's-complement bytes.
#[must_use]
pub fn decode_acceleration(block: &[u8; ACCEL_BLOCK_LEN], g_per_count: f32) -> Acceleration {
    Acceleration::from_raw(
        i8::from_ne_bytes([block[1]]),
        i8::from_ne_bytes([block[2]]),
        i8::from_ne_bytes([block[3]]),
        g_per_count,
    )
}
