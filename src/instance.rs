//! Holder for the one timer shared between the main program and its ISR.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::{controller::MiniTimer, registers::TimerRegisters};

/// A `static` slot owning the timer of the only TC1 peripheral.
///
/// Creating the holder does not touch the hardware. The peripheral is moved
/// in once with [`Instance::install`] and lives there for the rest of the
/// program.
pub struct Instance<R> {
    timer: Mutex<RefCell<Option<MiniTimer<R>>>>,
}

impl<R: TimerRegisters> Instance<R> {
    pub const fn new() -> Self {
        Self {
            timer: Mutex::new(RefCell::new(None)),
        }
    }

    /// Move the peripheral into the holder.
    ///
    /// Hands `regs` back if a peripheral is already installed.
    pub fn install(&self, regs: R) -> Result<(), R> {
        critical_section::with(|cs| {
            let mut slot = self.timer.borrow_ref_mut(cs);
            if slot.is_some() {
                return Err(regs);
            }
            *slot = Some(MiniTimer::new(regs));
            Ok(())
        })
    }

    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| self.timer.borrow_ref(cs).is_some())
    }

    /// Run `f` on the timer with interrupts masked.
    ///
    /// Returns `None` before [`Instance::install`].
    pub fn with<T>(&self, f: impl FnOnce(&mut MiniTimer<R>) -> T) -> Option<T> {
        critical_section::with(|cs| self.timer.borrow_ref_mut(cs).as_mut().map(f))
    }

    /// Entry point for the compare-match interrupt.
    ///
    /// The callback is copied out first and runs after the timer is released,
    /// so it may use [`Instance::with`] itself.
    pub fn dispatch(&self) {
        let handler = critical_section::with(|cs| {
            self.timer
                .borrow_ref(cs)
                .as_ref()
                .and_then(MiniTimer::pending_callback)
        });
        if let Some(handler) = handler {
            handler();
        }
    }
}

impl<R: TimerRegisters> Default for Instance<R> {
    fn default() -> Self {
        Self::new()
    }
}
