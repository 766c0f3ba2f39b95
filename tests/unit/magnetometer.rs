//! Unit tests for magnetometer (compass) reads

use crate::common::{Operation, create_initialized_driver};
use xloborg::COMPASS_ADDRESS;

#[test]
fn test_mag_read_basic() {
    let (mut driver, bus) = create_initialized_driver();

    bus.set_mag_data(10, -1, 1234);

    let field = driver.read_compass().unwrap();
    assert_eq!(field.x, 10);
    assert_eq!(field.y, -1);
    assert_eq!(field.z, 1234);
}

#[test]
fn test_mag_raw_bytes() {
    let (mut driver, bus) = create_initialized_driver();

    bus.set_register(COMPASS_ADDRESS, 0x01, 0x00);
    bus.set_register(COMPASS_ADDRESS, 0x02, 0x0A);
    bus.set_register(COMPASS_ADDRESS, 0x03, 0xFF);
    bus.set_register(COMPASS_ADDRESS, 0x04, 0xFF);
    bus.set_register(COMPASS_ADDRESS, 0x05, 0x80);
    bus.set_register(COMPASS_ADDRESS, 0x06, 0x00);

    let (x, y, z): (i16, i16, i16) = driver.read_compass().unwrap().into();
    assert_eq!(x, 10);
    assert_eq!(y, -1);
    assert_eq!(z, i16::MIN);
}

#[test]
fn test_mag_trigger_then_block_read() {
    let (mut driver, bus) = create_initialized_driver();

    driver.read_compass().unwrap();

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

#[test]
fn test_mag_extremes() {
    let (mut driver, bus) = create_initialized_driver();

    bus.set_mag_data(i16::MAX, i16::MIN, 0);

    let field = driver.read_compass().unwrap();
    assert_eq!(field.x, i16::MAX);
    assert_eq!(field.y, i16::MIN);
    assert_eq!(field.z, 0);
}

#[test]
fn test_mag_reads_are_independent() {
    let (mut driver, bus) = create_initialized_driver();

    bus.set_mag_data(1, 2, 3);
    let first = driver.read_compass().unwrap();
    bus.set_mag_data(-4, -5, -6);
    let second = driver.read_compass().unwrap();

    assert_eq!((first.x, first.y, first.z), (1, 2, 3));
    assert_eq!((second.x, second.y, second.z), (-4, -5, -6));
    // Each read restarts with its own trigger write
    assert_eq!(bus.writes().len(), 2);
}
