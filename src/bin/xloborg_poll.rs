//! Continuous polling demo for the `XLoBorg` on Linux
//!
//! Initializes the module, then reads acceleration, magnetic field and
//! temperature every 500 ms until a read fails.
//!
//! Usage: `xloborg-poll [BUS]` (defaults to bus 1). Set `RUST_LOG=debug`
//! to see the register traffic of `init()`.
//!
//! The demo drives the blocking API. Built with the `async` feature it only
//! reports that and exits.

use std::process::ExitCode;

use xloborg::Config;

/// Configuration from the optional bus number argument
fn parse_config(arg: Option<String>) -> Result<Config, String> {
    match arg {
        Some(arg) => arg
            .parse()
            .map(Config::with_bus)
            .map_err(|_| format!("Invalid bus number: {arg}")),
        None => Ok(Config::default()),
    }
}

#[cfg(feature = "async")]
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = parse_config(std::env::args().nth(1)) {
        log::error!("{e}");
    }
    log::error!("xloborg-poll uses the blocking API; rebuild without the `async` feature");
    ExitCode::FAILURE
}

#[cfg(not(feature = "async"))]
fn main() -> ExitCode {
    use std::{thread::sleep, time::Duration};
    use xloborg::XloBorg;

    const POLL_INTERVAL: Duration = Duration::from_millis(500);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match parse_config(std::env::args().nth(1)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut xloborg = match XloBorg::open(config) {
        Ok(driver) => driver,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    loop {
        let reading = xloborg.read_accelerometer().and_then(|accel| {
            let compass = xloborg.read_compass()?;
            let temperature = xloborg.read_temperature()?;
            Ok((accel, compass, temperature))
        });

        match reading {
            Ok((accel, compass, temperature)) => println!(
                "accelerometer: [{:.4}, {:.4}, {:.4}] g  compass: [{}, {}, {}]  temperature: {}",
                accel.x, accel.y, accel.z, compass.x, compass.y, compass.z, temperature
            ),
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        }

        sleep(POLL_INTERVAL);
    }
}
