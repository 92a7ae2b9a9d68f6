use core::convert::Infallible;
use embedded_hal::digital::v2::InputPin;

use crate::infallible;

/// Digital sound sensor. A high level means sound was heard.
pub struct SoundSensor<P> {
    pin: P,
}

impl<P> SoundSensor<P>
where
    P: InputPin<Error = Infallible>,
{
    pub fn new(pin: P) -> Self {
        SoundSensor { pin }
    }

    pub fn sound_detected(&self) -> bool {
        infallible(self.pin.is_high())
    }

    pub fn release(self) -> P {
        self.pin
    }
}
