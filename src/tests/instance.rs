use core::sync::atomic::{AtomicU32, Ordering};

use crate::controller::TimerState;
use crate::instance::Instance;
use crate::mock::FakeRegisters;

#[test]
fn empty_instance() {
    static TIMER: Instance<FakeRegisters> = Instance::new();

    assert!(!TIMER.is_installed());
    assert_eq!(TIMER.with(|timer| timer.state()), None);
    // Nothing to dispatch to.
    TIMER.dispatch();
}

#[test]
fn second_install_is_refused() {
    static TIMER: Instance<FakeRegisters> = Instance::new();

    assert!(TIMER.install(FakeRegisters::new()).is_ok());
    assert!(TIMER.install(FakeRegisters::new()).is_err());
    assert!(TIMER.is_installed());
}

#[test]
fn install_does_not_touch_hardware() {
    static TIMER: Instance<FakeRegisters> = Instance::new();

    assert!(TIMER.install(FakeRegisters::new()).is_ok());
    let (state, ctc) = TIMER
        .with(|timer| (timer.state(), timer.registers().is_ctc()))
        .unwrap();
    assert_eq!(state, TimerState::Uninitialized);
    assert!(!ctc);
}

static SHARED: Instance<FakeRegisters> = Instance::new();
static SHARED_CALLS: AtomicU32 = AtomicU32::new(0);

/// Stops the timer from inside the interrupt.
fn stop_from_callback() {
    SHARED_CALLS.fetch_add(1, Ordering::SeqCst);
    SHARED.with(|timer| timer.stop());
}

#[test]
fn callback_may_use_instance() {
    assert!(SHARED.install(FakeRegisters::new()).is_ok());
    SHARED.with(|timer| {
        timer.init();
        timer.attach_interrupt(stop_from_callback);
        timer.set_period(10);
    });

    let raised = SHARED.with(|timer| timer.registers().advance(10)).unwrap();
    assert_eq!(raised, 1);
    SHARED.dispatch();

    assert_eq!(SHARED_CALLS.load(Ordering::SeqCst), 1);
    assert_eq!(SHARED.with(|timer| timer.state()), Some(TimerState::Stopped));
}

static DETACHED: Instance<FakeRegisters> = Instance::new();
static DETACHED_CALLS: AtomicU32 = AtomicU32::new(0);

fn count_detached() {
    DETACHED_CALLS.fetch_add(1, Ordering::SeqCst);
}

#[test]
fn detached_callback_is_not_dispatched() {
    assert!(DETACHED.install(FakeRegisters::new()).is_ok());
    DETACHED.with(|timer| {
        timer.attach_interrupt(count_detached);
        timer.detach_interrupt();
    });

    DETACHED.dispatch();
    assert_eq!(DETACHED_CALLS.load(Ordering::SeqCst), 0);
}
