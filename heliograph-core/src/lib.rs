//! Board-agnostic core logic for the Heliograph Morse signaller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (display, input, lamp, tone, clock)
//! - Character classification and the Morse symbol table
//! - Pulse scheduling (mark/gap timing)
//! - The trailing display window for echoed input
//! - The per-byte converter state machine
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod converter;
pub mod morse;
pub mod pulse;
pub mod text;
pub mod traits;
