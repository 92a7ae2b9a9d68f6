//! LED strip behind an inverting driver stage.
//!
//! The strip is wired so that pulling the control pin LOW turns it on and
//! driving it HIGH turns it off. HIGH is the idle level.

use core::convert::Infallible;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;

use crate::infallible;

pub struct LedStrip<P> {
    pin: P,
}

impl<P> LedStrip<P>
where
    P: OutputPin<Error = Infallible>,
{
    /// Takes the control pin and switches the strip off.
    pub fn new(pin: P) -> Self {
        let mut strip = LedStrip { pin };
        strip.off();
        strip
    }

    pub fn on(&mut self) {
        infallible(self.pin.set_low());
    }

    pub fn off(&mut self) {
        infallible(self.pin.set_high());
    }

    /// One full cycle: on for `half_period_ms`, then off for `half_period_ms`.
    /// Always leaves the strip off.
    pub fn blink<D: DelayMs<u16>>(&mut self, delay: &mut D, half_period_ms: u16) {
        self.on();
        delay.delay_ms(half_period_ms);
        self.off();
        delay.delay_ms(half_period_ms);
    }

    pub fn release(self) -> P {
        self.pin
    }
}
