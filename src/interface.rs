//! Bus interface for the `XLoBorg` sub-devices
//!
//! Both sub-devices sit on the same I2C bus. The driver owns the bus and
//! lends it out, one transaction sequence at a time, through a
//! [`DeviceInterface`] bound to a single device address. The interface
//! implements the `device-driver` register traits so the generated
//! register maps in [`crate::registers`] can drive it.

use device_driver::RegisterInterface;

/// Largest register payload the interface writes in one transfer
///
/// Every register on both devices is 8 bits wide.
const MAX_WRITE_LEN: usize = 1;

/// Register-level access to one device address on a borrowed I2C bus
pub struct DeviceInterface<'a, I2C> {
    i2c: &'a mut I2C,
    address: u8,
}

impl<'a, I2C> DeviceInterface<'a, I2C> {
    /// Bind a borrowed bus to a 7-bit device address
    pub const fn new(i2c: &'a mut I2C, address: u8) -> Self {
        Self { i2c, address }
    }
}

/// Lay out `[register, data..]` for a write, returning the data length
fn fill_write_buffer(
    buffer: &mut [u8; 1 + MAX_WRITE_LEN],
    address: u8,
    write_data: &[u8],
) -> usize {
    debug_assert!(
        write_data.len() <= MAX_WRITE_LEN,
        "register 0x{address:02X} write of {} bytes exceeds {MAX_WRITE_LEN}",
        write_data.len()
    );
    buffer[0] = address;
    let len = write_data.len().min(MAX_WRITE_LEN);
    buffer[1..=len].copy_from_slice(&write_data[..len]);
    len
}

impl<I2C, E> RegisterInterface for DeviceInterface<'_, I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for I2C
        self.i2c.write_read(self.address, &[address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len() for I2C
        let mut buffer = [0u8; 1 + MAX_WRITE_LEN];
        let len = fill_write_buffer(&mut buffer, address, write_data);

        self.i2c.write(self.address, &buffer[..=len])
    }
}

#[cfg(feature = "async")]
impl<I2C, E> device_driver::AsyncRegisterInterface for DeviceInterface<'_, I2C>
where
    I2C: embedded_hal_async::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits;
        self.i2c
            .write_read(self.address, &[address], read_data)
            .await
    }

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits;
        let mut buffer = [0u8; 1 + MAX_WRITE_LEN];
        let len = fill_write_buffer(&mut buffer, address, write_data);

        self.i2c.write(self.address, &buffer[..=len]).await
    }
}
