#[cfg(target_arch = "avr")]
use crate::hal;

#[cfg(target_arch = "avr")]
pub use hal::clock::Clock;

/// Board clock rate.
#[cfg(all(target_arch = "avr", not(feature = "clock-8mhz")))]
pub type BoardClock = hal::clock::MHz16;

/// Board clock rate.
#[cfg(all(target_arch = "avr", feature = "clock-8mhz"))]
pub type BoardClock = hal::clock::MHz8;

/// Frequency of the clock feeding the TC1 prescaler, in Hz.
#[cfg(target_arch = "avr")]
pub const CPU_FREQUENCY_HZ: u32 = BoardClock::FREQ;

/// Frequency of the clock feeding the TC1 prescaler, in Hz.
#[cfg(all(not(target_arch = "avr"), not(feature = "clock-8mhz")))]
pub const CPU_FREQUENCY_HZ: u32 = 16_000_000;

/// Frequency of the clock feeding the TC1 prescaler, in Hz.
#[cfg(all(not(target_arch = "avr"), feature = "clock-8mhz"))]
pub const CPU_FREQUENCY_HZ: u32 = 8_000_000;

const MICROS_PER_SECOND: u64 = 1_000_000;

/// Convert a duration in microseconds into timer input clock ticks.
///
/// Saturates at `u32::MAX`, which the period resolver clamps further.
#[must_use]
pub const fn ticks_from_micros(us: u32) -> u32 {
    let ticks = us as u64 * CPU_FREQUENCY_HZ as u64 / MICROS_PER_SECOND;
    if ticks > u32::MAX as u64 {
        u32::MAX
    } else {
        ticks as u32
    }
}

#[cfg(all(test, not(feature = "clock-8mhz")))]
mod tests {
    use super::*;

    #[test]
    fn sixteen_ticks_per_microsecond() {
        assert_eq!(ticks_from_micros(0), 0);
        assert_eq!(ticks_from_micros(1), 16);
        assert_eq!(ticks_from_micros(62_500), 1_000_000);
    }

    #[test]
    fn long_durations_saturate() {
        assert_eq!(ticks_from_micros(u32::MAX), u32::MAX);
        assert_eq!(ticks_from_micros(300_000_000), u32::MAX);
    }
}
