/// Routine run from the `TIMER1_COMPA` interrupt.
pub type Callback = fn();

/// Callback used until one is attached.
pub fn noop() {}

/// The single callback slot of the timer.
#[derive(Clone, Copy, Debug)]
pub struct CallbackSlot {
    handler: Callback,
    enabled: bool,
}

impl CallbackSlot {
    /// Create an empty, disabled slot.
    pub const fn new() -> Self {
        Self {
            handler: noop,
            enabled: false,
        }
    }

    /// Store `handler`, replacing the previous one, and enable dispatch.
    pub fn attach(&mut self, handler: Callback) {
        self.handler = handler;
        self.enabled = true;
    }

    /// Disable dispatch. The handler is kept.
    pub fn detach(&mut self) {
        self.enabled = false;
    }

    pub fn handler(&self) -> Callback {
        self.handler
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Handler to run for a compare match, if dispatch is enabled.
    pub fn pending(&self) -> Option<Callback> {
        self.enabled.then_some(self.handler)
    }
}

impl Default for CallbackSlot {
    fn default() -> Self {
        Self::new()
    }
}
