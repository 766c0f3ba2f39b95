#![cfg_attr(not(feature = "linux"), no_std)]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

#[macro_use]
mod fmt;

pub mod config;
pub mod device;
pub mod init;
pub mod interface;
pub mod registers;
pub mod sensors;

#[cfg(feature = "linux")]
pub mod linux;

// Re-export main types
pub use config::Config;
pub use device::XloBorg;
pub use init::{ACCELEROMETER_SEQUENCE, COMPASS_SEQUENCE, InitStep};
pub use interface::DeviceInterface;
pub use sensors::{
    Acceleration, AccelRange, MagneticField, decode_acceleration, decode_magnetic_field,
    decode_temperature,
};

/// I2C address of the `MMA8452Q` accelerometer on the `XLoBorg`
pub const ACCELEROMETER_ADDRESS: u8 = 0x1C;

/// I2C address of the `MAG3110` magnetometer (compass) on the `XLoBorg`
pub const COMPASS_ADDRESS: u8 = 0x0E;

/// Register read once per device during `init()` to check that it answers
pub const PROBE_REGISTER: u8 = 0x01;

/// Driver errors
///
/// `E` is the error type of the underlying I2C bus.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// The accelerometer did not answer the presence probe at 0x1C
    AccelerometerNotFound(E),
    /// The compass did not answer the presence probe at 0x0E
    CompassNotFound(E),
    /// A register write of the initialization sequence failed
    Configuration {
        /// The write that failed
        step: InitStep,
        /// Bus error reported for that write
        source: E,
    },
    /// A read was issued before `init()` completed successfully
    NotInitialized,
    /// `init()` was called on a driver that is already initialized
    AlreadyInitialized,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "bus error: {e:?}"),
            Self::AccelerometerNotFound(e) => write!(
                f,
                "accelerometer not found at 0x{ACCELEROMETER_ADDRESS:02X}: {e:?}"
            ),
            Self::CompassNotFound(e) => {
                write!(f, "compass not found at 0x{COMPASS_ADDRESS:02X}: {e:?}")
            }
            Self::Configuration { step, source } => write!(
                f,
                "failed sending {} to 0x{:02X}: {source:?}",
                step.name(),
                step.device_address()
            ),
            Self::NotInitialized => f.write_str("driver used before init()"),
            Self::AlreadyInitialized => f.write_str("driver already initialized"),
        }
    }
}

#[cfg(feature = "linux")]
impl<E: core::fmt::Debug> std::error::Error for Error<E> {}
