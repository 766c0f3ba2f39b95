//! Magnetometer (compass) sensor types and decoding
//!
//! Provides field encodings, block layout and decoders for the `XLoBorg`'s
//! `MAG3110` 3-axis magnetometer. Field and temperature readings both come
//! from the same 18-byte block read.

/// Length of the compass block read, starting at register 0
pub const COMPASS_BLOCK_LEN: usize = 18;

/// Offset of the X-axis high byte; Y and Z follow as (high, low) pairs
pub const MAG_DATA_OFFSET: usize = 1;

/// Offset of the byte decoded as die temperature
pub const DIE_TEMP_OFFSET: usize = 16;

/// Oversampling ratio (`CTRL_REG1.OS`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Oversampling {
    /// 16 samples per measurement
    X16 = 0,
    /// 32 samples per measurement
    X32 = 1,
    /// 64 samples per measurement
    X64 = 2,
    /// 128 samples per measurement
    X128 = 3,
}

impl Oversampling {
    /// Number of ADC samples averaged per output sample
    #[must_use]
    pub const fn ratio(self) -> u16 {
        match self {
            Self::X16 => 16,
            Self::X32 => 32,
            Self::X64 => 64,
            Self::X128 => 128,
        }
    }
}

/// ADC rate selection (`CTRL_REG1.DR`)
///
/// The output data rate is the ADC rate divided by the oversampling ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcRate {
    /// 1280 Hz
    Hz1280 = 0,
    /// 640 Hz
    Hz640 = 1,
    /// 320 Hz
    Hz320 = 2,
    /// 160 Hz
    Hz160 = 3,
    /// 80 Hz
    Hz80 = 4,
    /// 40 Hz
    Hz40 = 5,
    /// 20 Hz
    Hz20 = 6,
    /// 10 Hz
    Hz10 = 7,
}

impl AdcRate {
    /// ADC sample rate in Hz
    #[must_use]
    pub const fn hz(self) -> u16 {
        1280 >> (self as u16)
    }

    /// Output data rate in Hz for a given oversampling ratio
    #[must_use]
    pub fn output_rate_hz(self, oversampling: Oversampling) -> f32 {
        f32::from(self.hz()) / f32::from(oversampling.ratio())
    }
}

/// Magnetometer data (raw signed counts)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagneticField {
    /// X-axis magnetic field (raw)
    pub x: i16,
    /// Y-axis magnetic field (raw)
    pub y: i16,
    /// Z-axis magnetic field (raw)
    pub z: i16,
}

impl From<MagneticField> for (i16, i16, i16) {
    fn from(value: MagneticField) -> Self {
        (value.x, value.y, value.z)
    }
}

/// Decode the magnetic field from a compass block
///
/// Bytes 1..=6 hold X, Y and Z as big-endian two's-complement pairs.
#[must_use]
pub fn decode_magnetic_field(block: &[u8; COMPASS_BLOCK_LEN]) -> MagneticField {
    let axis = |i: usize| {
        let hi = MAG_DATA_OFFSET + 2 * i;
        i16::from_be_bytes([block[hi], block[hi + 1]])
    };

    MagneticField {
        x: axis(0),
        y: axis(1),
        z: axis(2),
    }
}

/// Decode the die temperature from a compass block
///
/// Byte 16 is read as a two's-complement byte and `offset` is added.
#[must_use]
pub fn decode_temperature(block: &[u8; COMPASS_BLOCK_LEN], offset: i8) -> i16 {
    let raw = i8::from_ne_bytes([block[DIE_TEMP_OFFSET]]);
    i16::from(raw) + i16::from(offset)
}
