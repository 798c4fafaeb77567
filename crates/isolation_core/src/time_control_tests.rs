use super::*;
use std::cell::Cell;
use std::thread;

#[test]
fn test_turn_clock_expiry() {
    let clock = TurnClock::start(Duration::from_millis(10));
    assert!(!clock.expired());

    // Wait for time to expire
    thread::sleep(Duration::from_millis(20));
    assert!(clock.expired());
    assert_eq!(clock.remaining(), Duration::ZERO);
}

#[test]
fn test_turn_clock_remaining_shrinks() {
    let clock = TurnClock::start(Duration::from_secs(60));
    let first = clock.remaining();
    thread::sleep(Duration::from_millis(5));
    assert!(clock.remaining() < first);
    assert_eq!(clock.budget(), Duration::from_secs(60));
}

#[test]
fn test_check_time_against_threshold() {
    let threshold = Duration::from_millis(10);
    let plenty = || Duration::from_millis(50);
    let scarce = || Duration::from_millis(9);

    assert_eq!(check_time(&plenty, threshold), Ok(()));
    assert_eq!(check_time(&scarce, threshold), Err(SearchError::Aborted));
}

#[test]
fn test_check_time_polls_every_call() {
    let calls = Cell::new(0u32);
    let time_left = || {
        calls.set(calls.get() + 1);
        if calls.get() > 3 {
            Duration::ZERO
        } else {
            Duration::from_secs(1)
        }
    };
    let threshold = Duration::from_millis(1);

    for _ in 0..3 {
        assert!(check_time(&time_left, threshold).is_ok());
    }
    assert!(check_time(&time_left, threshold).is_err());
    assert_eq!(calls.get(), 4);
}
