use tokio_util::sync::CancellationToken;
use weather_core::Effect;
use weather_logging::{scrape_info, scrape_warn};

/// Exit status used when a repeated stop signal cuts shutdown short.
pub const TERMINATED_EXIT_CODE: i32 = 1;

pub struct EffectRunner {
    scheduler: CancellationToken,
}

impl EffectRunner {
    pub fn new(scheduler: CancellationToken) -> Self {
        Self { scheduler }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::CancelScheduler => {
                    scrape_info!("stopping after the current scrape");
                    self.scheduler.cancel();
                }
                Effect::Terminate => {
                    scrape_warn!("second stop signal, terminating");
                    log::logger().flush();
                    std::process::exit(TERMINATED_EXIT_CODE);
                }
            }
        }
    }
}
