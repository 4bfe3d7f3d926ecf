//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in heliograph-core for the converter's peripherals:
//!
//! - Character display (HD44780 in 4-bit parallel mode)
//! - Lamp outputs (plain GPIO, PWM brightness)
//! - Buzzer (fixed PWM carrier gated by duty cycle)
//! - Serial notice writer

#![no_std]
#![deny(unsafe_code)]

pub mod buzzer;
pub mod lamp;
pub mod lcd;
pub mod serial;
