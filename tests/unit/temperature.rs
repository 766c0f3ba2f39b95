//! Unit tests for die temperature reads

use crate::common::test_utils::create_mock_driver_with_config;
use crate::common::{Operation, create_initialized_driver};
use xloborg::{COMPASS_ADDRESS, Config};

#[test]
fn test_temperature_read_basic() {
    let (mut driver, bus) = create_initialized_driver();

    bus.set_temperature_raw(25);

    assert_eq!(driver.read_temperature().unwrap(), 25);
}

#[test]
fn test_temperature_negative() {
    let (mut driver, bus) = create_initialized_driver();

    bus.set_temperature_raw(0xFF);
    assert_eq!(driver.read_temperature().unwrap(), -1);

    bus.set_temperature_raw(0x80);
    assert_eq!(driver.read_temperature().unwrap(), -128);
}

#[test]
fn test_temperature_offset_shifts_every_value() {
    let (mut plain, plain_bus) = create_initialized_driver();
    let config = Config {
        temperature_offset: -7,
        ..Config::default()
    };
    let (mut shifted, shifted_bus) = create_mock_driver_with_config(config);
    shifted.init().unwrap();

    for raw in [0x00, 0x01, 0x7F, 0x80, 0xFF, 0x19] {
        plain_bus.set_temperature_raw(raw);
        shifted_bus.set_temperature_raw(raw);
        let base = plain.read_temperature().unwrap();
        assert_eq!(shifted.read_temperature().unwrap(), base - 7);
    }
}

#[test]
fn test_temperature_offset_does_not_overflow() {
    let config = Config {
        temperature_offset: i8::MIN,
        ..Config::default()
    };
    let (mut driver, bus) = create_mock_driver_with_config(config);
    driver.init().unwrap();

    bus.set_temperature_raw(0x80);
    assert_eq!(driver.read_temperature().unwrap(), -256);
}

#[test]
fn test_temperature_is_idempotent() {
    let (mut driver, bus) = create_initialized_driver();

    bus.set_temperature_raw(0xEC);
    let first = driver.read_temperature().unwrap();
    let second = driver.read_temperature().unwrap();
    assert_eq!(first, -20);
    assert_eq!(first, second);
}

#[test]
fn test_temperature_uses_compass_block() {
    let (mut driver, bus) = create_initialized_driver();

    driver.read_temperature().unwrap();

    assert_eq!(
        bus.operations(),
        vec![
            Operation::Write {
                device: COMPASS_ADDRESS,
                register: 0x00,
                value: 0x00,
            },
            Operation::Read {
                device: COMPASS_ADDRESS,
                register: 0x00,
                len: 18,
            },
        ]
    );
}
