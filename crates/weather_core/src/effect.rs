#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Ask the scheduler to stop before its next iteration.
    CancelScheduler,
    /// Exit the process right away without cleanup.
    Terminate,
}
