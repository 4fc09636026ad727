//! Mapping from a requested period to a TC1 configuration.
//!
//! | CLOCK SELECT  | DIVISOR | Longest period @ 16 MHz |
//! |---------------|---------|-------------------------|
//! | direct        |       1 |                4.096 ms |
//! | prescale_8    |       8 |               32.768 ms |
//! | prescale_64   |      64 |              262.144 ms |
//! | prescale_256  |     256 |                1.049 s  |
//! | prescale_1024 |    1024 |                4.194 s  |

use nano_fmt::{NanoDisplay, NanoWrite};

/// Largest value the 16-bit compare register can hold.
pub const MAX_COUNT: u32 = u16::MAX as u32;

/// Longest period TC1 can realize, in input clock ticks.
pub const MAX_PERIOD_TICKS: u32 = ClockSelect::Prescale1024.divisor() * (MAX_COUNT + 1);

/// Value of the `CS1` clock-select bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ClockSelect {
    /// No clock source, the counter is stopped.
    #[default]
    Disabled = 0b000,
    Direct = 0b001,
    Prescale8 = 0b010,
    Prescale64 = 0b011,
    Prescale256 = 0b100,
    Prescale1024 = 0b101,
}

impl ClockSelect {
    /// Prescalers in ascending divisor order.
    pub const PRESCALERS: [ClockSelect; 5] = [
        ClockSelect::Direct,
        ClockSelect::Prescale8,
        ClockSelect::Prescale64,
        ClockSelect::Prescale256,
        ClockSelect::Prescale1024,
    ];

    /// Divisor applied to the input clock, 0 when disabled.
    #[must_use]
    pub const fn divisor(self) -> u32 {
        match self {
            ClockSelect::Disabled => 0,
            ClockSelect::Direct => 1,
            ClockSelect::Prescale8 => 8,
            ClockSelect::Prescale64 => 64,
            ClockSelect::Prescale256 => 256,
            ClockSelect::Prescale1024 => 1024,
        }
    }

    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, ClockSelect::Disabled)
    }

    /// Raw `CS12:CS10` bit pattern.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl NanoDisplay for ClockSelect {
    fn fmt<F: NanoWrite>(self, f: &mut F) {
        match self {
            ClockSelect::Disabled => f.write_str("off"),
            _ => {
                f.write_str("clk/");
                self.divisor().fmt(f);
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ClockSelect {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ClockSelect::Disabled => defmt::write!(fmt, "off"),
            _ => defmt::write!(fmt, "clk/{}", self.divisor()),
        }
    }
}

/// Clock-select and compare-match values realizing one period.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimerConfiguration {
    pub clock_select: ClockSelect,
    /// Number of prescaled ticks per period minus one.
    pub compare_value: u16,
}

impl TimerConfiguration {
    /// Configuration that stops the timer.
    pub const STOPPED: Self = Self {
        clock_select: ClockSelect::Disabled,
        compare_value: 0,
    };

    /// Longest period the hardware can deliver.
    pub const SATURATED: Self = Self {
        clock_select: ClockSelect::Prescale1024,
        compare_value: u16::MAX,
    };

    /// Period realized by this configuration, in input clock ticks.
    ///
    /// Zero for the stop encoding.
    #[must_use]
    pub const fn period_ticks(&self) -> u32 {
        self.clock_select.divisor() * (self.compare_value as u32 + 1)
    }
}

impl NanoDisplay for TimerConfiguration {
    fn fmt<F: NanoWrite>(self, f: &mut F) {
        self.clock_select.fmt(f);
        f.write_str(" ocr1a=");
        self.compare_value.fmt(f);
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TimerConfiguration {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{} ocr1a={=u16}", self.clock_select, self.compare_value);
    }
}

/// Find the configuration that realizes `period` ticks most closely.
///
/// The finest prescaler that can count the whole period is chosen. Periods
/// longer than [`MAX_PERIOD_TICKS`] are replaced by the longest period
/// available instead of being rejected.
#[must_use]
pub const fn resolve(period: u32) -> TimerConfiguration {
    if period == 0 {
        return TimerConfiguration::STOPPED;
    }

    let mut i = 0;
    while i < ClockSelect::PRESCALERS.len() {
        let clock_select = ClockSelect::PRESCALERS[i];
        let counts = period.div_ceil(clock_select.divisor()) - 1;
        if counts <= MAX_COUNT {
            return TimerConfiguration {
                clock_select,
                compare_value: counts as u16,
            };
        }
        i += 1;
    }

    TimerConfiguration::SATURATED
}

/// Whether `period` is beyond what [`resolve`] can realize exactly.
#[must_use]
pub const fn saturates(period: u32) -> bool {
    period > MAX_PERIOD_TICKS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_stop_encoding() {
        assert_eq!(resolve(0), TimerConfiguration::STOPPED);
        assert_eq!(resolve(0).period_ticks(), 0);
    }

    #[test]
    fn short_periods_use_direct_clock() {
        for period in [1, 2, 100, 16_000, 65_535, 65_536] {
            let config = resolve(period);
            assert_eq!(config.clock_select, ClockSelect::Direct);
            assert_eq!(config.compare_value as u32, period - 1);
        }
    }

    #[test]
    fn first_period_needing_prescaler() {
        let config = resolve(65_537);
        assert_eq!(config.clock_select, ClockSelect::Prescale8);
        // ceil(65537 / 8) - 1
        assert_eq!(config.compare_value, 8_192);
    }

    #[test]
    fn one_million_ticks() {
        let config = resolve(1_000_000);
        assert_eq!(config.clock_select, ClockSelect::Prescale64);
        assert_eq!(config.compare_value, 15_624);
        assert_eq!(config.period_ticks(), 1_000_000);
    }

    #[test]
    fn one_second_at_16mhz() {
        let config = resolve(16_000_000);
        assert_eq!(config.clock_select, ClockSelect::Prescale256);
        assert_eq!(config.compare_value, 62_499);
    }

    #[test]
    fn inexact_period_rounds_up() {
        let config = resolve(100_001);
        assert_eq!(config.clock_select, ClockSelect::Prescale8);
        assert_eq!(config.compare_value, 12_500);
        assert_eq!(config.period_ticks(), 100_008);
    }

    #[test]
    fn maximum_period_fits_exactly() {
        assert_eq!(MAX_PERIOD_TICKS, 67_108_864);
        assert_eq!(resolve(MAX_PERIOD_TICKS), TimerConfiguration::SATURATED);
        assert!(!saturates(MAX_PERIOD_TICKS));
    }

    #[test]
    fn long_periods_saturate() {
        for period in [MAX_PERIOD_TICKS + 1, 2_000_000_000, u32::MAX] {
            assert!(saturates(period));
            assert_eq!(resolve(period), TimerConfiguration::SATURATED);
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        for period in [0, 1, 999, 1_000_000, u32::MAX] {
            assert_eq!(resolve(period), resolve(period));
        }
    }

    #[test]
    fn realized_period_never_shorter_unless_saturated() {
        let mut period = 1u32;
        while period < MAX_PERIOD_TICKS {
            let config = resolve(period);
            assert!(config.period_ticks() >= period);
            assert!(config.period_ticks() - period < config.clock_select.divisor());
            period = period * 3 + 7;
        }
    }

    #[test]
    fn clock_select_bits_match_datasheet() {
        assert_eq!(ClockSelect::Disabled.bits(), 0);
        assert_eq!(ClockSelect::Direct.bits(), 1);
        assert_eq!(ClockSelect::Prescale1024.bits(), 5);
        assert!(!ClockSelect::Disabled.is_enabled());
        assert!(ClockSelect::PRESCALERS.iter().all(|cs| cs.is_enabled()));
    }
}
