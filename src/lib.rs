//! Sound-triggered LED strip blinker.
//!
//! Samples a digital sound sensor in a busy loop and, whenever the line reads
//! high, blinks an LED strip a fixed number of times while logging a status
//! line over serial. The loop is written against the `embedded-hal` 0.2 digital
//! and delay traits plus `ufmt::uWrite`, so the board crate under
//! `nano/sound-blink` only has to hand over concrete pins.
#![cfg_attr(not(test), no_std)]

pub mod blinker;
pub mod config;
pub mod led;
pub mod sensor;

pub use blinker::{SoundTriggeredBlinker, State};
pub use led::LedStrip;
pub use sensor::SoundSensor;

use core::convert::Infallible;

/// Unwraps a pin result that can never fail.
#[inline(always)]
pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
