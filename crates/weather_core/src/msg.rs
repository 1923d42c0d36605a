#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// The process received a stop signal (Ctrl-C, SIGTERM).
    SignalReceived,
    /// The scheduler loop returned, either cancelled or because its ticker closed.
    SchedulerFinished,
}
