use embedded_hal::digital::StatefulOutputPin;

/// Status LED driven from the main loop.
pub struct Led<P> {
    p: P,
}

impl<P> Led<P>
where
    P: StatefulOutputPin,
{
    pub fn new(p: P) -> Self {
        Self { p }
    }

    pub fn turn_on(&mut self) {
        let _ = self.p.set_high();
    }

    pub fn turn_off(&mut self) {
        let _ = self.p.set_low();
    }

    /// Invert the LED, used once per timer period.
    pub fn toggle(&mut self) {
        let _ = self.p.toggle();
    }
}
