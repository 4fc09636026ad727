//! In-memory TC1 used for host tests.

use core::cell::Cell;

use crate::{registers::TimerRegisters, resolver::ClockSelect};

/// Register file of a simulated TC1.
///
/// State lives in cells so a test can drive the simulation through the
/// shared reference returned by [`crate::MiniTimer::registers`].
#[derive(Debug, Default)]
pub struct FakeRegisters {
    ctc: Cell<bool>,
    clock_select: Cell<ClockSelect>,
    compare: Cell<u16>,
    counter: Cell<u16>,
    interrupt_enabled: Cell<bool>,
    prescaler_phase: Cell<u32>,
    matches: Cell<u32>,
}

impl FakeRegisters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ctc(&self) -> bool {
        self.ctc.get()
    }

    pub fn clock_select(&self) -> ClockSelect {
        self.clock_select.get()
    }

    pub fn compare_value(&self) -> u16 {
        self.compare.get()
    }

    pub fn counter(&self) -> u16 {
        self.counter.get()
    }

    pub fn interrupt_enabled(&self) -> bool {
        self.interrupt_enabled.get()
    }

    /// Total compare matches seen, masked or not.
    pub fn compare_matches(&self) -> u32 {
        self.matches.get()
    }

    /// Feed `ticks` input clock cycles through the prescaler.
    ///
    /// Returns the number of compare matches that raised the interrupt.
    pub fn advance(&self, ticks: u32) -> u32 {
        let divisor = self.clock_select.get().divisor();
        if divisor == 0 {
            return 0;
        }

        let total = self.prescaler_phase.get() as u64 + ticks as u64;
        self.prescaler_phase.set((total % divisor as u64) as u32);

        let mut raised = 0;
        for _ in 0..total / divisor as u64 {
            let counter = self.counter.get();
            if self.ctc.get() && counter == self.compare.get() {
                self.counter.set(0);
                self.matches.set(self.matches.get() + 1);
                if self.interrupt_enabled.get() {
                    raised += 1;
                }
            } else {
                self.counter.set(counter.wrapping_add(1));
            }
        }
        raised
    }
}

impl TimerRegisters for FakeRegisters {
    fn set_waveform_mode(&mut self) {
        self.ctc.set(true);
    }

    fn set_clock_select(&mut self, clock_select: ClockSelect) {
        if !clock_select.is_enabled() {
            self.prescaler_phase.set(0);
        }
        self.clock_select.set(clock_select);
    }

    fn set_compare_value(&mut self, value: u16) {
        self.compare.set(value);
    }

    fn set_counter(&mut self, value: u16) {
        self.counter.set(value);
    }

    fn read_counter(&self) -> u16 {
        self.counter.get()
    }

    fn set_interrupt_enabled(&mut self, enabled: bool) {
        self.interrupt_enabled.set(enabled);
    }
}
