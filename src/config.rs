//! Compile-time board wiring and timing.

/// Digital pin the sound sensor output is wired to.
pub const SENSOR_PIN: u8 = 2;

/// Digital pin driving the LED strip.
pub const LED_STRIP_PIN: u8 = 9;

pub const BAUD_RATE: u32 = 9600;

/// On/off cycles per burst.
pub const BLINK_COUNT: u8 = 10;

/// Length of each on phase and each off phase.
pub const BLINK_HALF_PERIOD_MS: u16 = 100;

pub const STATUS_LINE: &str = "Sound detected! LED strip blinking...";
