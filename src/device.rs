//! High-level driver API for the `XLoBorg`
//!
//! [`XloBorg`] owns the I2C bus shared by both sub-devices. Every operation
//! takes `&mut self`, so one register sequence runs to completion before
//! the next one can start; in particular the compass read-pointer reset is
//! always immediately followed by its block read.

use crate::config::Config;
use crate::interface::DeviceInterface;
use crate::registers::accelerometer::Mma8452q;
use crate::registers::compass::Mag3110;
use crate::{ACCELEROMETER_ADDRESS, COMPASS_ADDRESS};

// Blocking-only imports
#[cfg(not(feature = "async"))]
use crate::init::{ACCELEROMETER_SEQUENCE, COMPASS_SEQUENCE, InitStep};
#[cfg(not(feature = "async"))]
use crate::sensors::{
    ACCEL_BLOCK_LEN, Acceleration, COMPASS_BLOCK_LEN, MagneticField, decode_acceleration,
    decode_magnetic_field, decode_temperature,
};
#[cfg(not(feature = "async"))]
use crate::{Error, PROBE_REGISTER};
#[cfg(not(feature = "async"))]
use device_driver::RegisterInterface;

/// First register of both sample blocks
const DATA_START: u8 = 0x00;

/// Main driver for the `XLoBorg`
pub struct XloBorg<I2C> {
    i2c: I2C,
    config: Config,
    initialized: bool,
}

impl<I2C> XloBorg<I2C> {
    /// Create a new driver on an already opened bus
    ///
    /// No bus traffic happens here. Call `init()` before reading.
    pub const fn new(i2c: I2C, config: Config) -> Self {
        Self {
            i2c,
            config,
            initialized: false,
        }
    }

    /// Whether `init()` has completed successfully
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The configuration this driver was created with
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the driver and return the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn accelerometer(&mut self) -> Mma8452q<DeviceInterface<'_, I2C>> {
        Mma8452q::new(DeviceInterface::new(&mut self.i2c, ACCELEROMETER_ADDRESS))
    }

    fn compass(&mut self) -> Mag3110<DeviceInterface<'_, I2C>> {
        Mag3110::new(DeviceInterface::new(&mut self.i2c, COMPASS_ADDRESS))
    }
}

#[cfg(not(feature = "async"))]
impl<I2C> XloBorg<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Detect and configure both sub-devices
    ///
    /// Probes the accelerometer, configures it, then does the same for the
    /// compass. The first failure aborts the whole sequence; nothing after
    /// it is sent on the bus.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A device does not answer its presence probe
    ///   (`AccelerometerNotFound` / `CompassNotFound`)
    /// - A configuration write fails (`Configuration`, naming the write)
    /// - The driver is already initialized
    pub fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        if self.initialized {
            return Err(Error::AlreadyInitialized);
        }

        info!("Loading XLoBorg on bus {}", self.config.bus_number);

        self.probe(ACCELEROMETER_ADDRESS).map_err(|e| {
            error!("Missing accelerometer at 0x{:02X}", ACCELEROMETER_ADDRESS);
            Error::AccelerometerNotFound(e)
        })?;
        info!("Found accelerometer at 0x{:02X}", ACCELEROMETER_ADDRESS);
        self.run_sequence(&ACCELEROMETER_SEQUENCE)?;

        self.probe(COMPASS_ADDRESS).map_err(|e| {
            error!("Missing compass at 0x{:02X}", COMPASS_ADDRESS);
            Error::CompassNotFound(e)
        })?;
        info!("Found compass at 0x{:02X}", COMPASS_ADDRESS);
        self.run_sequence(&COMPASS_SEQUENCE)?;

        info!("XLoBorg ready");
        self.initialized = true;
        Ok(())
    }

    /// Read acceleration in g
    ///
    /// # Errors
    ///
    /// Returns an error if not initialized or communication fails.
    pub fn read_accelerometer(&mut self) -> Result<Acceleration, Error<I2C::Error>> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }

        // STATUS, OUT_X_MSB, OUT_Y_MSB, OUT_Z_MSB in fast-read mode
        let mut block = [0u8; ACCEL_BLOCK_LEN];
        DeviceInterface::new(&mut self.i2c, ACCELEROMETER_ADDRESS).read_register(
            DATA_START,
            32,
            &mut block,
        )?;

        Ok(decode_acceleration(&block, self.config.g_per_count))
    }

    /// Read the raw magnetic field
    ///
    /// Returns signed counts; no unit conversion is applied.
    ///
    /// # Errors
    ///
    /// Returns an error if not initialized or communication fails.
    pub fn read_compass(&mut self) -> Result<MagneticField, Error<I2C::Error>> {
        let block = self.read_compass_block()?;
        Ok(decode_magnetic_field(&block))
    }

    /// Read the compass die temperature
    ///
    /// The configured temperature offset is added to the signed raw value.
    ///
    /// # Errors
    ///
    /// Returns an error if not initialized or communication fails.
    pub fn read_temperature(&mut self) -> Result<i16, Error<I2C::Error>> {
        let block = self.read_compass_block()?;
        Ok(decode_temperature(&block, self.config.temperature_offset))
    }

    /// Reset the compass read pointer and fetch the full data block
    fn read_compass_block(&mut self) -> Result<[u8; COMPASS_BLOCK_LEN], Error<I2C::Error>> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }

        self.compass().dr_status().write(|w| w.set_dr_status(0))?;

        let mut block = [0u8; COMPASS_BLOCK_LEN];
        DeviceInterface::new(&mut self.i2c, COMPASS_ADDRESS).read_register(
            DATA_START,
            144,
            &mut block,
        )?;

        Ok(block)
    }

    /// Single-byte presence probe
    fn probe(&mut self, address: u8) -> Result<u8, I2C::Error> {
        let mut value = [0u8; 1];
        DeviceInterface::new(&mut self.i2c, address).read_register(
            PROBE_REGISTER,
            8,
            &mut value,
        )?;
        Ok(value[0])
    }

    fn run_sequence(&mut self, steps: &[InitStep]) -> Result<(), Error<I2C::Error>> {
        for &step in steps {
            self.write_step(step).map_err(|source| {
                error!("Failed sending {}!", step.name());
                Error::Configuration { step, source }
            })?;
            debug!(
                "Sent {} to 0x{:02X}",
                step.name(),
                step.device_address()
            );
        }
        Ok(())
    }

    fn write_step(&mut self, step: InitStep) -> Result<(), I2C::Error> {
        use crate::init::{
            ACCEL_DATA_RATE, ACCEL_RANGE, ACCEL_SLEEP_RATE, ACCEL_SYSTEM_MODE,
            COMPASS_ADC_RATE, COMPASS_OVERSAMPLING,
        };

        match step {
            InitStep::AccelModeControl => self.accelerometer().ctrl_reg_1().write(|w| {
                w.set_aslp_rate(ACCEL_SLEEP_RATE as u8);
                w.set_dr(ACCEL_DATA_RATE as u8);
                w.set_lnoise(false);
                w.set_f_read(true);
                w.set_active(true);
            }),
            InitStep::AccelDataConfig => self.accelerometer().xyz_data_cfg().write(|w| {
                w.set_fs(ACCEL_RANGE as u8);
                w.set_hpf_out(false);
            }),
            InitStep::AccelSystemMode => self
                .accelerometer()
                .sysmod()
                .write(|w| w.set_sysmod(ACCEL_SYSTEM_MODE as u8)),
            InitStep::AccelPointerReset => {
                self.accelerometer().status().write(|w| w.set_status(0))
            }
            InitStep::CompassAcquisitionMode => self.compass().ctrl_reg_2().write(|w| {
                w.set_auto_mrst_en(true);
                w.set_raw(true);
                w.set_mag_rst(false);
            }),
            InitStep::CompassOperation => self.compass().ctrl_reg_1().write(|w| {
                w.set_dr(COMPASS_ADC_RATE as u8);
                w.set_os(COMPASS_OVERSAMPLING as u8);
                w.set_fr(false);
                w.set_tm(false);
                w.set_ac(true);
            }),
        }
    }
}

#[cfg(feature = "async")]
mod asynch {
    use super::{DATA_START, XloBorg};
    use crate::init::{ACCELEROMETER_SEQUENCE, COMPASS_SEQUENCE, InitStep};
    use crate::interface::DeviceInterface;
    use crate::sensors::{
        ACCEL_BLOCK_LEN, Acceleration, COMPASS_BLOCK_LEN, MagneticField, decode_acceleration,
        decode_magnetic_field, decode_temperature,
    };
    use crate::{ACCELEROMETER_ADDRESS, COMPASS_ADDRESS, Error, PROBE_REGISTER};
    use device_driver::AsyncRegisterInterface;

    impl<I2C> XloBorg<I2C>
    where
        I2C: embedded_hal_async::i2c::I2c,
    {
        /// Detect and configure both sub-devices
        ///
        /// Probes the accelerometer, configures it, then does the same for
        /// the compass. The first failure aborts the whole sequence.
        ///
        /// # Errors
        ///
        /// Returns an error if:
        /// - A device does not answer its presence probe
        /// - A configuration write fails (`Configuration`, naming the write)
        /// - The driver is already initialized
        pub async fn init(&mut self) -> Result<(), Error<I2C::Error>> {
            if self.initialized {
                return Err(Error::AlreadyInitialized);
            }

            info!("Loading XLoBorg on bus {}", self.config.bus_number);

            if let Err(e) = self.probe(ACCELEROMETER_ADDRESS).await {
                error!("Missing accelerometer at 0x{:02X}", ACCELEROMETER_ADDRESS);
                return Err(Error::AccelerometerNotFound(e));
            }
            info!("Found accelerometer at 0x{:02X}", ACCELEROMETER_ADDRESS);
            self.run_sequence(&ACCELEROMETER_SEQUENCE).await?;

            if let Err(e) = self.probe(COMPASS_ADDRESS).await {
                error!("Missing compass at 0x{:02X}", COMPASS_ADDRESS);
                return Err(Error::CompassNotFound(e));
            }
            info!("Found compass at 0x{:02X}", COMPASS_ADDRESS);
            self.run_sequence(&COMPASS_SEQUENCE).await?;

            info!("XLoBorg ready");
            self.initialized = true;
            Ok(())
        }

        /// Read acceleration in g
        ///
        /// # Errors
        ///
        /// Returns an error if not initialized or communication fails.
        pub async fn read_accelerometer(&mut self) -> Result<Acceleration, Error<I2C::Error>> {
            if !self.initialized {
                return Err(Error::NotInitialized);
            }

            let mut block = [0u8; ACCEL_BLOCK_LEN];
            let mut interface = DeviceInterface::new(&mut self.i2c, ACCELEROMETER_ADDRESS);
            AsyncRegisterInterface::read_register(&mut interface, DATA_START, 32, &mut block)
                .await?;

            Ok(decode_acceleration(&block, self.config.g_per_count))
        }

        /// Read the raw magnetic field
        ///
        /// # Errors
        ///
        /// Returns an error if not initialized or communication fails.
        pub async fn read_compass(&mut self) -> Result<MagneticField, Error<I2C::Error>> {
            let block = self.read_compass_block().await?;
            Ok(decode_magnetic_field(&block))
        }

        /// Read the compass die temperature
        ///
        /// # Errors
        ///
        /// Returns an error if not initialized or communication fails.
        pub async fn read_temperature(&mut self) -> Result<i16, Error<I2C::Error>> {
            let block = self.read_compass_block().await?;
            Ok(decode_temperature(&block, self.config.temperature_offset))
        }

        async fn read_compass_block(
            &mut self,
        ) -> Result<[u8; COMPASS_BLOCK_LEN], Error<I2C::Error>> {
            if !self.initialized {
                return Err(Error::NotInitialized);
            }

            self.compass()
                .dr_status()
                .write_async(|w| w.set_dr_status(0))
                .await?;

            let mut block = [0u8; COMPASS_BLOCK_LEN];
            let mut interface = DeviceInterface::new(&mut self.i2c, COMPASS_ADDRESS);
            AsyncRegisterInterface::read_register(&mut interface, DATA_START, 144, &mut block)
                .await?;

            Ok(block)
        }

        async fn probe(&mut self, address: u8) -> Result<u8, I2C::Error> {
            let mut value = [0u8; 1];
            let mut interface = DeviceInterface::new(&mut self.i2c, address);
            AsyncRegisterInterface::read_register(&mut interface, PROBE_REGISTER, 8, &mut value)
                .await?;
            Ok(value[0])
        }

        async fn run_sequence(&mut self, steps: &[InitStep]) -> Result<(), Error<I2C::Error>> {
            for &step in steps {
                if let Err(source) = self.write_step(step).await {
                    error!("Failed sending {}!", step.name());
                    return Err(Error::Configuration { step, source });
                }
                debug!(
                    "Sent {} to 0x{:02X}",
                    step.name(),
                    step.device_address()
                );
            }
            Ok(())
        }

        async fn write_step(&mut self, step: InitStep) -> Result<(), I2C::Error> {
            use crate::init::{
                ACCEL_DATA_RATE, ACCEL_RANGE, ACCEL_SLEEP_RATE, ACCEL_SYSTEM_MODE,
                COMPASS_ADC_RATE, COMPASS_OVERSAMPLING,
            };

            match step {
                InitStep::AccelModeControl => {
                    self.accelerometer()
                        .ctrl_reg_1()
                        .write_async(|w| {
                            w.set_aslp_rate(ACCEL_SLEEP_RATE as u8);
                            w.set_dr(ACCEL_DATA_RATE as u8);
                            w.set_lnoise(false);
                            w.set_f_read(true);
                            w.set_active(true);
                        })
                        .await
                }
                InitStep::AccelDataConfig => {
                    self.accelerometer()
                        .xyz_data_cfg()
                        .write_async(|w| {
                            w.set_fs(ACCEL_RANGE as u8);
                            w.set_hpf_out(false);
                        })
                        .await
                }
                InitStep::AccelSystemMode => {
                    self.accelerometer()
                        .sysmod()
                        .write_async(|w| w.set_sysmod(ACCEL_SYSTEM_MODE as u8))
                        .await
                }
                InitStep::AccelPointerReset => {
                    self.accelerometer()
                        .status()
                        .write_async(|w| w.set_status(0))
                        .await
                }
                InitStep::CompassAcquisitionMode => {
                    self.compass()
                        .ctrl_reg_2()
                        .write_async(|w| {
                            w.set_auto_mrst_en(true);
                            w.set_raw(true);
                            w.set_mag_rst(false);
                        })
                        .await
                }
                InitStep::CompassOperation => {
                    self.compass()
                        .ctrl_reg_1()
                        .write_async(|w| {
                            w.set_dr(COMPASS_ADC_RATE as u8);
                            w.set_os(COMPASS_OVERSAMPLING as u8);
                            w.set_fr(false);
                            w.set_tm(false);
                            w.set_ac(true);
                        })
                        .await
                }
            }
        }
    }
}
