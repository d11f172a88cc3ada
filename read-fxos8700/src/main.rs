use std::{env, process, thread::sleep, time::Duration};

use fxos8700::{AccelRange, Fxos8700};
use linux_embedded_hal::I2cdev;

/// Bus device the sensor usually hangs off on Raspberry Pi style boards.
static DEFAULT_BUS: &str = "/dev/i2c-1";

/// Number of samples to print before exiting.
const SAMPLE_COUNT: usize = 10;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let bus_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_BUS);

    let bus = match I2cdev::new(bus_path) {
        Ok(bus) => bus,
        Err(err) => {
            eprintln!("Could not open {}: {}", bus_path, err);
            process::exit(1);
        }
    };

    let mut sensor = Fxos8700::new(bus);
    if let Err(err) = sensor.init(AccelRange::G8) {
        eprintln!("Could not configure FXOS8700: {}", err);
        process::exit(1);
    }

    // One semicolon separated line per sample: acceleration in m/s^2, then magnetic field
    // strength in uTesla.
    for _ in 0..SAMPLE_COUNT {
        let data = match sensor.get_data() {
            Ok(data) => data,
            Err(err) => {
                eprintln!("Sample read failed: {}", err);
                process::exit(1);
            }
        };

        log::debug!("|a| = {:.3} m/s^2", data.accel.magnitude());

        println!(
            "{:.4};{:.4};{:.4};{:.4};{:.4};{:.4}",
            data.accel.x, data.accel.y, data.accel.z,
            data.mag.x, data.mag.y, data.mag.z,
        );

        sleep(Duration::from_secs(1));
    }
}
