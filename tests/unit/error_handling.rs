//! Unit tests for error handling and recovery

use crate::common::{MockError, Operation, create_initialized_driver, create_mock_driver};
use xloborg::{COMPASS_ADDRESS, Error};

#[test]
fn test_reads_before_init_are_rejected() {
    let (mut driver, bus) = create_mock_driver();

    assert!(matches!(
        driver.read_accelerometer(),
        Err(Error::NotInitialized)
    ));
    assert!(matches!(driver.read_compass(), Err(Error::NotInitialized)));
    assert!(matches!(
        driver.read_temperature(),
        Err(Error::NotInitialized)
    ));

    // Nothing reached the bus
    assert!(bus.operations().is_empty());
}

#[test]
fn test_reads_after_failed_init_are_rejected() {
    let (mut driver, bus) = create_mock_driver();
    bus.remove_device(COMPASS_ADDRESS);

    assert!(driver.init().is_err());
    bus.clear_operations();

    assert!(matches!(
        driver.read_accelerometer(),
        Err(Error::NotInitialized)
    ));
    assert!(bus.operations().is_empty());
}

#[test]
fn test_read_failure_basic() {
    let (mut driver, bus) = create_initialized_driver();

    bus.fail_next_read();

    let result = driver.read_accelerometer();
    assert!(matches!(result, Err(Error::Bus(MockError::Communication))));
}

#[test]
fn test_read_failure_recovery() {
    let (mut driver, bus) = create_initialized_driver();

    bus.fail_next_read();
    assert!(driver.read_accelerometer().is_err());

    // Subsequent read should succeed (error was only for one operation)
    bus.set_accel_data(64, 0, 0);
    let accel = driver.read_accelerometer().unwrap();
    assert!((accel.x - 1.0).abs() < 1e-6);
}

#[test]
fn test_trigger_failure_skips_block_read() {
    let (mut driver, bus) = create_initialized_driver();

    bus.fail_next_write();

    let result = driver.read_compass();
    assert!(matches!(result, Err(Error::Bus(MockError::Communication))));

    // Only the failed trigger write was attempted
    assert_eq!(
        bus.operations(),
        vec![Operation::Write {
            device: COMPASS_ADDRESS,
            register: 0x00,
            value: 0x00,
        }]
    );
}

#[test]
fn test_block_read_failure_after_trigger() {
    let (mut driver, bus) = create_initialized_driver();

    bus.fail_next_read();

    assert!(matches!(
        driver.read_temperature(),
        Err(Error::Bus(MockError::Communication))
    ));
    assert_eq!(bus.operations().len(), 2);
}

#[test]
fn test_multiple_read_failures() {
    let (mut driver, bus) = create_initialized_driver();

    for i in 0..3 {
        bus.fail_next_read();
        let result = driver.read_compass();
        assert!(result.is_err(), "Read {i} should fail when error is injected");
    }

    // Recovery should still work
    bus.set_mag_data(1, 2, 3);
    let field = driver.read_compass().unwrap();
    assert_eq!(field.z, 3);
}

#[test]
fn test_device_vanishing_after_init() {
    let (mut driver, bus) = create_initialized_driver();

    bus.remove_device(COMPASS_ADDRESS);

    assert!(matches!(
        driver.read_compass(),
        Err(Error::Bus(MockError::NoAcknowledge))
    ));
    // The accelerometer is unaffected
    assert!(driver.read_accelerometer().is_ok());
}

#[test]
fn test_error_display_names_failed_write() {
    let error: Error<MockError> = Error::Configuration {
        step: xloborg::InitStep::AccelSystemMode,
        source: MockError::Communication,
    };
    let message = error.to_string();
    assert!(message.contains("SYSMOD"), "{message}");
    assert!(message.contains("0x1C"), "{message}");
}
