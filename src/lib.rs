#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

pub mod clock;
pub mod controller;
pub mod instance;
pub mod interrupt;
pub mod registers;
pub mod resolver;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(target_arch = "avr")]
pub mod led;
#[cfg(target_arch = "avr")]
pub mod tc1;
#[cfg(target_arch = "avr")]
pub mod usart;

#[cfg(test)]
mod tests;

#[cfg(target_arch = "avr")]
pub use atmega_hal as hal;

pub use controller::{MiniTimer, TimerState};
pub use instance::Instance;
pub use interrupt::{Callback, noop};
pub use registers::TimerRegisters;
pub use resolver::{ClockSelect, MAX_PERIOD_TICKS, TimerConfiguration, resolve};

#[cfg(target_arch = "avr")]
pub use tc1::{MINI_TIMER1, Tc1, get_instance};
