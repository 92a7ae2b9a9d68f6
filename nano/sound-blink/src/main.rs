#![no_std]
#![no_main]

use panic_halt as _;
use sound_blinker::{config, SoundTriggeredBlinker};

// Breaks the build if the wiring constants stop matching d2/d9 below.
const _: [(); 2] = [(); config::SENSOR_PIN as usize];
const _: [(); 9] = [(); config::LED_STRIP_PIN as usize];

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);
    let serial = arduino_hal::default_serial!(dp, pins, config::BAUD_RATE);

    let sensor = pins.d2.into_floating_input();
    let led_strip = pins.d9.into_output();

    SoundTriggeredBlinker::new(sensor, led_strip, arduino_hal::Delay::new(), serial).run()
}
