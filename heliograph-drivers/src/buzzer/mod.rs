//! Buzzer output implementations

pub mod pwm;

pub use pwm::PwmBuzzer;
