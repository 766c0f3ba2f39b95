//! Integration tests for basic workflow scenarios

use crate::common::create_mock_driver;
use crate::common::test_utils::EXPECTED_INIT_WRITES;
use xloborg::{Config, Error};

#[test]
fn test_complete_workflow() {
    let (mut driver, bus) = create_mock_driver();

    // Initialize the device
    driver.init().unwrap();
    assert_eq!(bus.writes(), EXPECTED_INIT_WRITES);

    // Set up mock sensor data
    bus.set_accel_data(0, 0, 64);
    bus.set_mag_data(120, -45, 300);
    bus.set_temperature_raw(22);

    let accel = driver.read_accelerometer().unwrap();
    assert!((accel.z - 1.0).abs() < 1e-6);

    let field = driver.read_compass().unwrap();
    assert_eq!((field.x, field.y, field.z), (120, -45, 300));

    assert_eq!(driver.read_temperature().unwrap(), 22);
}

#[test]
fn test_polling_loop_halts_on_first_failure() {
    let (mut driver, bus) = create_mock_driver();
    driver.init().unwrap();

    let mut samples = 0;
    let outcome: Result<(), Error<_>> = loop {
        if samples == 3 {
            bus.fail_next_read();
        }
        let cycle = driver.read_accelerometer().and_then(|accel| {
            let field = driver.read_compass()?;
            let temperature = driver.read_temperature()?;
            Ok((accel, field, temperature))
        });
        match cycle {
            Ok(_) => samples += 1,
            Err(e) => break Err(e),
        }
    };

    assert!(outcome.is_err());
    assert_eq!(samples, 3);
}

#[test]
fn test_release_returns_bus() {
    let (mut driver, bus) = create_mock_driver();
    driver.init().unwrap();

    let released = driver.release();
    released.set_accel_data(1, 2, 3);

    // The released handle shares state with the test's clone
    assert_eq!(bus.register(xloborg::ACCELEROMETER_ADDRESS, 0x01), 1);
}

#[test]
fn test_config_is_kept() {
    let config = Config::with_bus(3);
    let bus = crate::common::MockI2c::new();
    let driver = xloborg::XloBorg::new(bus, config);

    assert_eq!(driver.config().bus_number, 3);
    assert!(!driver.is_initialized());
}
