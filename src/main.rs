#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

//! Blinks the Arduino Uno LED from the TC1 compare-match callback and
//! reports every elapsed period over the serial port.

#[cfg(target_arch = "avr")]
mod firmware {
    use core::cell::Cell;

    use critical_section::Mutex;
    use nano_fmt::NanoDisplay;
    use panic_halt as _;

    use mini_timer_one::{
        hal,
        led::Led,
        tc1::{MINI_TIMER1, Tc1},
        usart::Usart0,
    };

    /// UART baud rate.
    const BAUDRATE: u32 = 9600;

    /// Blink period (in microseconds).
    const PERIOD_US: u32 = 500_000;

    /// Flag that tells main loop when a period has passed.
    static TICK: Mutex<Cell<bool>> = Mutex::new(Cell::new(false));

    /// Runs inside `TIMER1_COMPA`.
    fn on_period() {
        critical_section::with(|cs| TICK.borrow(cs).set(true));
    }

    #[hal::entry]
    fn main() -> ! {
        let dp = hal::Peripherals::take().unwrap();
        let pins = hal::pins!(dp);

        let mut serial = Usart0::new(
            dp.USART0,
            pins.pd0.into_pull_up_input(),
            pins.pd1.into_output(),
            BAUDRATE,
        );

        // On-board LED (D13).
        let mut led = Led::new(pins.pb5.into_output());
        led.turn_off();

        // Peripherals::take() succeeded, so nothing has been installed yet.
        let _ = MINI_TIMER1.install(Tc1::new(dp.TC1));

        let config = MINI_TIMER1.with(|timer| {
            timer.init();
            timer.attach_interrupt(on_period);
            timer.set_period_us(PERIOD_US);
            timer.configuration()
        });

        if let Some(config) = config {
            "TC1 ".fmt(&mut serial);
            config.fmt(&mut serial);
            "\r\n".fmt(&mut serial);
        }

        // Enable interrupts.
        unsafe {
            // SAFETY: Not inside a critical section and the timer is fully
            // configured at this point.
            avr_device::interrupt::enable();
        }

        let mut periods: u32 = 0;

        loop {
            // Set sleep mode to IDLE and enable sleep.
            dp.CPU.smcr.modify(|_, w| w.sm().idle().se().set_bit());
            // Go to sleep until next interrupt.
            avr_device::asm::sleep();
            // Disable sleep so we don't accidentally go to sleep.
            dp.CPU.smcr.modify(|_, w| w.se().clear_bit());

            let tick = critical_section::with(|cs| TICK.borrow(cs).replace(false));
            if tick {
                led.toggle();
                periods = periods.wrapping_add(1);
                periods.fmt(&mut serial);
                "\r\n".fmt(&mut serial);
            }
        }
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}
