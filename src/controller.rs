//! Lifecycle of the TC1 peripheral in CTC mode.

use nano_fmt::{NanoDisplay, NanoWrite};

use crate::{
    clock,
    interrupt::{Callback, CallbackSlot},
    registers::TimerRegisters,
    resolver::{self, ClockSelect, TimerConfiguration},
};

#[cfg(feature = "defmt")]
use defmt::{debug, trace};

#[cfg(not(feature = "defmt"))]
macro_rules! debug {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "defmt"))]
macro_rules! trace {
    ($($arg:tt)*) => {{}};
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    /// `init` has not run yet.
    Uninitialized,
    /// Clock source disconnected.
    Stopped,
    /// Counting prescaled clock ticks.
    Running,
}

impl NanoDisplay for TimerState {
    fn fmt<F: NanoWrite>(self, f: &mut F) {
        f.write_str(match self {
            TimerState::Uninitialized => "uninitialized",
            TimerState::Stopped => "stopped",
            TimerState::Running => "running",
        });
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TimerState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            TimerState::Uninitialized => defmt::write!(fmt, "Uninitialized"),
            TimerState::Stopped => defmt::write!(fmt, "Stopped"),
            TimerState::Running => defmt::write!(fmt, "Running"),
        }
    }
}

/// A timer using the `TC1` peripheral in CTC mode.
///
/// Triggers `TIMER1_COMPA` every time the counter reaches the configured
/// compare value.
pub struct MiniTimer<R> {
    regs: R,
    state: TimerState,
    config: TimerConfiguration,
    slot: CallbackSlot,
}

impl<R: TimerRegisters> MiniTimer<R> {
    /// Wrap the registers of the peripheral.
    ///
    /// Does not touch the hardware, call [`MiniTimer::init`] for that.
    pub const fn new(regs: R) -> Self {
        Self {
            regs,
            state: TimerState::Uninitialized,
            config: TimerConfiguration::STOPPED,
            slot: CallbackSlot::new(),
        }
    }

    /// Run `f` on the registers with interrupts masked.
    fn masked<T>(&mut self, f: impl FnOnce(&mut R) -> T) -> T {
        critical_section::with(|_| f(&mut self.regs))
    }

    /// Switch to CTC mode, stop the clock and clear the counter.
    pub fn init(&mut self) {
        self.masked(|regs| {
            regs.set_clock_select(ClockSelect::Disabled);
            regs.set_waveform_mode();
            regs.set_counter(0);
        });
        self.state = TimerState::Stopped;
        trace!("tc1: init");
    }

    /// Set the period after which the counter clears and the callback runs.
    ///
    /// `period` is in CPU clock ticks. Zero stops the timer. Periods longer
    /// than [`resolver::MAX_PERIOD_TICKS`] are replaced by the maximum.
    pub fn set_period(&mut self, period: u32) {
        if self.state == TimerState::Uninitialized {
            self.init();
        }

        if resolver::saturates(period) {
            debug!("tc1: period {=u32} saturated", period);
        }

        let config = resolver::resolve(period);
        self.masked(|regs| {
            if config.clock_select.is_enabled() {
                regs.set_compare_value(config.compare_value);
                regs.set_clock_select(config.clock_select);
            } else {
                regs.set_clock_select(ClockSelect::Disabled);
                regs.set_compare_value(config.compare_value);
            }
        });

        self.config = config;
        self.state = if config.clock_select.is_enabled() {
            TimerState::Running
        } else {
            TimerState::Stopped
        };
        trace!("tc1: {} -> {}", config, self.state);
    }

    /// Set the period in microseconds at the board clock rate.
    pub fn set_period_us(&mut self, us: u32) {
        self.set_period(clock::ticks_from_micros(us));
    }

    /// Reconnect the clock source selected by the last period.
    ///
    /// Does nothing if no running period has been set.
    pub fn start(&mut self) {
        let clock_select = self.config.clock_select;
        if !clock_select.is_enabled() {
            return;
        }
        self.masked(|regs| regs.set_clock_select(clock_select));
        self.state = TimerState::Running;
        trace!("tc1: start");
    }

    /// Disconnect the clock source. The counter keeps its value.
    pub fn stop(&mut self) {
        self.masked(|regs| regs.set_clock_select(ClockSelect::Disabled));
        if self.state == TimerState::Running {
            self.state = TimerState::Stopped;
        }
        trace!("tc1: stop");
    }

    /// Clear the counter without stopping it.
    pub fn reset(&mut self) {
        self.masked(|regs| regs.set_counter(0));
    }

    /// Set the compare-match callback and unmask the interrupt.
    pub fn attach_interrupt(&mut self, handler: Callback) {
        self.slot.attach(handler);
        self.masked(|regs| regs.set_interrupt_enabled(true));
    }

    /// Mask the interrupt. The callback stays registered.
    pub fn detach_interrupt(&mut self) {
        self.masked(|regs| regs.set_interrupt_enabled(false));
        self.slot.detach();
    }

    /// Callback run on compare match, [`crate::interrupt::noop`] if none was attached.
    pub fn get_callback(&self) -> Callback {
        self.slot.handler()
    }

    /// Callback to run for a compare match event, if the interrupt is unmasked.
    pub fn pending_callback(&self) -> Option<Callback> {
        self.slot.pending()
    }

    /// Run the callback for a compare match event.
    pub fn on_compare_match(&self) {
        if let Some(handler) = self.pending_callback() {
            handler();
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn is_interrupt_enabled(&self) -> bool {
        self.slot.is_enabled()
    }

    /// Configuration written by the last [`MiniTimer::set_period`].
    pub fn configuration(&self) -> TimerConfiguration {
        self.config
    }

    /// Current value of the counter.
    pub fn counter(&mut self) -> u16 {
        self.masked(|regs| regs.read_counter())
    }

    /// Access the underlying registers.
    pub fn registers(&self) -> &R {
        &self.regs
    }
}
