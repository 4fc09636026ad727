use crate::{hal, instance::Instance, registers::TimerRegisters, resolver::ClockSelect};

/// Registers of the ATmega328P `TC1` peripheral.
pub struct Tc1 {
    p: hal::pac::TC1,
}

impl Tc1 {
    #[must_use]
    pub fn new(p: hal::pac::TC1) -> Self {
        Self { p }
    }
}

impl TimerRegisters for Tc1 {
    fn set_waveform_mode(&mut self) {
        // CTC mode, WGM13:0 = 0b0100, top = OCR1A.
        self.p.tccr1a.modify(|_, w| w.wgm1().bits(0b00));
        self.p.tccr1b.modify(|_, w| w.wgm1().bits(0b01));
    }

    fn set_clock_select(&mut self, clock_select: ClockSelect) {
        self.p.tccr1b.modify(|_, w| match clock_select {
            ClockSelect::Disabled => w.cs1().no_clock(),
            ClockSelect::Direct => w.cs1().direct(),
            ClockSelect::Prescale8 => w.cs1().prescale_8(),
            ClockSelect::Prescale64 => w.cs1().prescale_64(),
            ClockSelect::Prescale256 => w.cs1().prescale_256(),
            ClockSelect::Prescale1024 => w.cs1().prescale_1024(),
        });
    }

    fn set_compare_value(&mut self, value: u16) {
        self.p.ocr1a.write(|w| w.bits(value));
    }

    fn set_counter(&mut self, value: u16) {
        self.p.tcnt1.write(|w| w.bits(value));
    }

    fn read_counter(&self) -> u16 {
        self.p.tcnt1.read().bits()
    }

    fn set_interrupt_enabled(&mut self, enabled: bool) {
        self.p.timsk1.modify(|_, w| w.ocie1a().bit(enabled));
    }
}

/// The timer of the board.
///
/// Empty until [`Instance::install`] is called with the `TC1` peripheral.
pub static MINI_TIMER1: Instance<Tc1> = Instance::new();

/// Return the only instance of the timer.
pub fn get_instance() -> &'static Instance<Tc1> {
    &MINI_TIMER1
}

/// TIMER1 compare interrupt.
/// Called every time TCNT1 reaches OCR1A and is reset back to 0 (CTC mode).
#[avr_device::interrupt(atmega328p)]
fn TIMER1_COMPA() {
    MINI_TIMER1.dispatch();
}
