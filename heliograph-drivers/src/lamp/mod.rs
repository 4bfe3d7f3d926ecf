//! Lamp output implementations

pub mod gpio;
pub mod pwm;

pub use gpio::GpioLamp;
pub use pwm::PwmLamp;
