/// Lifecycle of the scrape loop as seen by the shutdown logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulerState {
    #[default]
    Running,
    Stopping,
    Stopped,
}

impl SchedulerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_stopped(self) -> bool {
        self == SchedulerState::Stopped
    }
}
