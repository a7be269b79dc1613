//! Sets a DS1307 to a known date and time and reads it back periodically.
//!
//! ```text
//! Pi   <-> DS1307
//! GND  <-> GND
//! 5V   <-> VCC
//! GPIO2 <-> SDA
//! GPIO3 <-> SCL
//! ```
//!
//! Run with `ds1307-demo --set` to program Sunday 31/12/2015 11:59:41 PM
//! before polling.

use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use ds1307_hal::bus::I2cTransfer;
use ds1307_hal::time::{Date, Time, TimeFormat, Weekday};
use ds1307_hal::{weekday_name, ClockState, Ds1307};
use rppal::i2c::I2c;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// I2C bus number (/dev/i2c-N).
    #[arg(short, long, default_value_t = 1)]
    bus: u8,

    /// Program the initial date and time before polling.
    #[arg(short, long)]
    set: bool,

    /// Poll period in milliseconds.
    #[arg(short, long, default_value_t = 1000)]
    interval_ms: u64,

    /// Stop after this many readings.
    #[arg(short, long)]
    count: Option<u64>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

const INITIAL_DATE: Date = Date {
    day: Weekday::Sunday as u8,
    date: 31,
    month: 12,
    year: 15,
};

const INITIAL_TIME: Time = Time {
    hours: 11,
    minutes: 59,
    seconds: 41,
    format: TimeFormat::TwelveHourPm,
};

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let i2c = I2c::with_bus(args.bus).with_context(|| format!("failed to open I2C bus {}", args.bus))?;
    let mut rtc = Ds1307::new(I2cTransfer::new(i2c));

    let state = rtc.init().context("DS1307 init transfer failed")?;
    debug!(halt_bit = state.bit(), "DS1307 initialised");
    if state == ClockState::Halted {
        bail!("RTC init has failed: clock is halted");
    }

    if args.set {
        rtc.set_time(&INITIAL_TIME).context("failed to set time")?;
        rtc.set_date(&INITIAL_DATE).context("failed to set date")?;
        info!(time = %INITIAL_TIME, date = %INITIAL_DATE, "clock programmed");
    }

    let mut readings = 0u64;
    loop {
        let date = rtc.get_date().context("failed to read date")?;
        let time = rtc.get_time().context("failed to read time")?;

        println!("Current time = {}", time);
        println!("Current date: {} <{}>", date, weekday_name(date.day).unwrap_or("???"));

        readings += 1;
        if args.count.is_some_and(|count| readings >= count) {
            return Ok(());
        }
        thread::sleep(Duration::from_millis(args.interval_ms));
    }
}
