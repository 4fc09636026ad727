//! Register level access to a 16-bit timer/counter.

use crate::resolver::ClockSelect;

/// Named operations on the TC1 register set.
///
/// Implementations perform each write as a single access. Callers that need
/// several writes to appear as one unit wrap them in a critical section.
pub trait TimerRegisters {
    /// Put the counter into CTC mode (`WGM13:0 = 0b0100`, top = `OCR1A`).
    fn set_waveform_mode(&mut self);

    /// Write the `CS12:CS10` bits.
    fn set_clock_select(&mut self, clock_select: ClockSelect);

    /// Write `OCR1A`.
    fn set_compare_value(&mut self, value: u16);

    /// Write `TCNT1`.
    fn set_counter(&mut self, value: u16);

    /// Read `TCNT1`.
    fn read_counter(&self) -> u16;

    /// Set or clear `OCIE1A`.
    fn set_interrupt_enabled(&mut self, enabled: bool);
}
