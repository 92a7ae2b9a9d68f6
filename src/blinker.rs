//! The polling loop.
//!
//! ```text
//!        sensor HIGH
//!  Idle ------------> Blinking
//!   ^                    |
//!   +--------------------+
//!     after BLINK_COUNT cycles
//! ```
//!
//! A burst blocks for `2 * BLINK_COUNT * BLINK_HALF_PERIOD_MS` and the sensor
//! is not looked at until it is over.

use core::convert::Infallible;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::config::{BLINK_COUNT, BLINK_HALF_PERIOD_MS, STATUS_LINE};
use crate::led::LedStrip;
use crate::sensor::SoundSensor;

/// What a single loop iteration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Sensor was quiet, nothing happened.
    Idle,
    /// Sensor was high and a full burst ran.
    Blinking,
}

pub struct SoundTriggeredBlinker<S, L, D, W> {
    sensor: SoundSensor<S>,
    strip: LedStrip<L>,
    delay: D,
    serial: W,
}

impl<S, L, D, W> SoundTriggeredBlinker<S, L, D, W>
where
    S: InputPin<Error = Infallible>,
    L: OutputPin<Error = Infallible>,
    D: DelayMs<u16>,
    W: ufmt::uWrite,
{
    /// `sensor` must already be an input and `led_strip` an output; the serial
    /// port is expected to be running at `config::BAUD_RATE`. The strip is
    /// switched off before this returns.
    pub fn new(sensor: S, led_strip: L, delay: D, serial: W) -> Self {
        SoundTriggeredBlinker {
            sensor: SoundSensor::new(sensor),
            strip: LedStrip::new(led_strip),
            delay,
            serial,
        }
    }

    /// Samples the sensor once and runs a burst if it reads high.
    pub fn step(&mut self) -> State {
        if !self.sensor.sound_detected() {
            return State::Idle;
        }

        // Serial is best effort, a dead port must not stop the strip.
        ufmt::uwriteln!(&mut self.serial, "{}", STATUS_LINE).ok();
        self.blink_burst();
        State::Blinking
    }

    pub fn blink_burst(&mut self) {
        for _ in 0..BLINK_COUNT {
            self.strip.blink(&mut self.delay, BLINK_HALF_PERIOD_MS);
        }
    }

    pub fn run(mut self) -> ! {
        loop {
            self.step();
        }
    }

    pub fn release(self) -> (S, L, D, W) {
        (
            self.sensor.release(),
            self.strip.release(),
            self.delay,
            self.serial,
        )
    }
}
