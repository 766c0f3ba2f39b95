//! Register definitions for the `XLoBorg` sub-devices
//!
//! The module carries two independent register maps, one per I2C address:
//! - **accelerometer**: `MMA8452Q` at 0x1C
//! - **compass**: `MAG3110` at 0x0E
//!
//! Only the registers touched by the driver are described. Bit positions
//! and values are part of the on-wire contract with the hardware.

/// `MMA8452Q` accelerometer registers
pub mod accelerometer {
    device_driver::create_device!(
        device_name: Mma8452q,
        dsl: {
            config {
                type RegisterAddressType = u8;
                type DefaultByteOrder = BE;
            }

            /// STATUS - Data status (0x00)
            ///
            /// Start of the sample block. Writing 0 here moves the auto-increment
            /// pointer back to the block origin.
            register Status {
                const ADDRESS = 0x00;
                const SIZE_BITS = 8;

                status: uint = 0..8,
            },

            /// SYSMOD - System mode (0x0B)
            register Sysmod {
                const ADDRESS = 0x0B;
                const SIZE_BITS = 8;

                /// 0 = standby, 1 = wake, 2 = sleep
                sysmod: uint = 0..2,
                reserved_7_2: uint = 2..8,
            },

            /// XYZ_DATA_CFG - Dynamic range and high-pass output (0x0E)
            register XyzDataCfg {
                const ADDRESS = 0x0E;
                const SIZE_BITS = 8;

                /// Full-scale range (0 = ±2g, 1 = ±4g, 2 = ±8g)
                fs: uint = 0..2,
                reserved_3_2: uint = 2..4,
                /// High-pass filtered output
                hpf_out: bool = 4,
                reserved_7_5: uint = 5..8,
            },

            /// CTRL_REG1 - System control 1 (0x2A)
            register CtrlReg1 {
                const ADDRESS = 0x2A;
                const SIZE_BITS = 8;

                /// Active mode
                active: bool = 0,
                /// Fast read (8-bit samples)
                f_read: bool = 1,
                /// Reduced noise mode
                lnoise: bool = 2,
                /// Output data rate
                dr: uint = 3..6,
                /// Auto-sleep sample rate
                aslp_rate: uint = 6..8,
            },
        }
    );
}

/// `MAG3110` magnetometer registers
pub mod compass {
    device_driver::create_device!(
        device_name: Mag3110,
        dsl: {
            config {
                type RegisterAddressType = u8;
                type DefaultByteOrder = BE;
            }

            /// DR_STATUS - Data ready status (0x00)
            ///
            /// Writing 0 here before a block read resets the read pointer.
            register DrStatus {
                const ADDRESS = 0x00;
                const SIZE_BITS = 8;

                dr_status: uint = 0..8,
            },

            /// CTRL_REG1 - Operation mode (0x10)
            register CtrlReg1 {
                const ADDRESS = 0x10;
                const SIZE_BITS = 8;

                /// Active mode (0 = standby)
                ac: bool = 0,
                /// Trigger immediate measurement (0 = continuous)
                tm: bool = 1,
                /// Fast read (8-bit samples)
                fr: bool = 2,
                /// Oversampling ratio
                os: uint = 3..5,
                /// Output data rate
                dr: uint = 5..8,
            },

            /// CTRL_REG2 - Acquisition mode (0x11)
            register CtrlReg2 {
                const ADDRESS = 0x11;
                const SIZE_BITS = 8;

                reserved_3_0: uint = 0..4,
                /// One-shot magnetic sensor reset
                mag_rst: bool = 4,
                /// Raw data output, user offsets not applied
                raw: bool = 5,
                reserved_6: uint = 6..7,
                /// Automatic magnetic sensor reset before each acquisition
                auto_mrst_en: bool = 7,
            },
        }
    );
}
