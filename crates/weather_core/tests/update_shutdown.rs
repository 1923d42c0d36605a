use std::sync::Once;

use weather_core::{update, Effect, Msg, SchedulerState};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(weather_logging::initialize_for_tests);
}

#[test]
fn first_signal_cancels_scheduler() {
    init_logging();
    let (state, effects) = update(SchedulerState::new(), Msg::SignalReceived);

    assert_eq!(state, SchedulerState::Stopping);
    assert_eq!(effects, vec![Effect::CancelScheduler]);
}

#[test]
fn second_signal_while_stopping_escalates_to_terminate() {
    init_logging();
    let (state, _) = update(SchedulerState::new(), Msg::SignalReceived);
    let (state, effects) = update(state, Msg::SignalReceived);

    assert_eq!(state, SchedulerState::Stopping);
    assert_eq!(effects, vec![Effect::Terminate]);
}

#[test]
fn scheduler_finishing_after_cancel_stops_cleanly() {
    init_logging();
    let (state, _) = update(SchedulerState::new(), Msg::SignalReceived);
    let (state, effects) = update(state, Msg::SchedulerFinished);

    assert!(state.is_stopped());
    assert!(effects.is_empty());
}

#[test]
fn scheduler_finishing_on_its_own_stops_without_signal() {
    init_logging();
    let (state, effects) = update(SchedulerState::Running, Msg::SchedulerFinished);

    assert_eq!(state, SchedulerState::Stopped);
    assert!(effects.is_empty());
}

#[test]
fn stopped_ignores_everything() {
    init_logging();
    for msg in [Msg::SignalReceived, Msg::SchedulerFinished] {
        let (state, effects) = update(SchedulerState::Stopped, msg);
        assert_eq!(state, SchedulerState::Stopped);
        assert!(effects.is_empty());
    }
}
