use crate::{Effect, Msg, SchedulerState};

/// Pure update function: applies a message to state and returns any effects.
///
/// A second stop signal while already stopping escalates to [`Effect::Terminate`].
pub fn update(state: SchedulerState, msg: Msg) -> (SchedulerState, Vec<Effect>) {
    match (state, msg) {
        (SchedulerState::Running, Msg::SignalReceived) => {
            (SchedulerState::Stopping, vec![Effect::CancelScheduler])
        }
        (SchedulerState::Stopping, Msg::SignalReceived) => {
            (SchedulerState::Stopping, vec![Effect::Terminate])
        }
        (SchedulerState::Running | SchedulerState::Stopping, Msg::SchedulerFinished) => {
            (SchedulerState::Stopped, Vec::new())
        }
        (SchedulerState::Stopped, _) => (SchedulerState::Stopped, Vec::new()),
    }
}
