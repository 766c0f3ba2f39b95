//! Linux bus access
//!
//! Opens the numbered I2C character device (`/dev/i2c-<n>`) through
//! `linux-embedded-hal` and hands it to the driver.

pub use linux_embedded_hal::{I2CError, I2cdev};

#[cfg(not(feature = "async"))]
use crate::{Config, Error, XloBorg};

/// Path of the I2C character device for a bus number
#[must_use]
pub fn bus_path(bus_number: u8) -> String {
    format!("/dev/i2c-{bus_number}")
}

#[cfg(not(feature = "async"))]
impl XloBorg<I2cdev> {
    /// Open the configured bus and initialize both sub-devices
    ///
    /// # Errors
    ///
    /// Returns `Error::Bus` if the bus device cannot be opened, otherwise any
    /// error from `init()`.
    pub fn open(config: Config) -> Result<Self, Error<I2CError>> {
        let path = bus_path(config.bus_number);
        debug!("Opening {}", path.as_str());
        let i2c = I2cdev::new(&path).map_err(|e| Error::Bus(I2CError::from(e)))?;

        let mut driver = Self::new(i2c, config);
        driver.init()?;
        Ok(driver)
    }
}
