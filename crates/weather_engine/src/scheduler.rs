use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use weather_core::{DispatchMap, Measurement, ScrapeConfig};
use weather_logging::{scrape_debug, scrape_info, scrape_warn};

use crate::{PublishSink, ScrapePipeline};

/// Ticks that may wait while a scrape is running. Together with the tick
/// being worked on this bounds the queue at two; anything beyond is dropped.
pub const PENDING_TICKS: usize = 1;

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Counters for one scheduler run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub cycles: u64,
    pub failed: u64,
    pub published: u64,
}

/// Drives the scrape pipeline on a fixed interval until cancelled.
///
/// The first scrape starts immediately. Scrapes never overlap, and a
/// cancellation takes effect between scrapes, never during one.
pub struct Scheduler {
    url: String,
    period: Duration,
    pipeline: ScrapePipeline,
    dispatch: DispatchMap,
    sink: Arc<dyn PublishSink>,
    cancel: CancellationToken,
}

impl Scheduler {
    pub fn new(
        url: impl Into<String>,
        period: Duration,
        pipeline: ScrapePipeline,
        dispatch: DispatchMap,
        sink: Arc<dyn PublishSink>,
    ) -> Self {
        Self {
            url: url.into(),
            // tokio intervals cannot be zero.
            period: period.max(MIN_PERIOD),
            pipeline,
            dispatch,
            sink,
            cancel: CancellationToken::new(),
        }
    }

    pub fn from_config(
        config: &ScrapeConfig,
        pipeline: ScrapePipeline,
        sink: Arc<dyn PublishSink>,
    ) -> Self {
        Self::new(
            config.url(),
            config.interval(),
            pipeline,
            DispatchMap::new(config.device_name()),
            sink,
        )
    }

    /// Token that stops the loop at its next iteration boundary.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub async fn run(self) -> RunSummary {
        let (tick_tx, mut tick_rx) = mpsc::channel(PENDING_TICKS);
        let ticker = tokio::spawn(tick_source(self.period, tick_tx, self.cancel.clone()));

        let mut summary = RunSummary::default();
        loop {
            let tick = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    scrape_info!("scheduler cancelled after {} cycle(s)", summary.cycles);
                    break;
                }
                tick = tick_rx.recv() => tick,
            };
            let Some(at) = tick else {
                scrape_warn!("tick source closed, stopping scheduler");
                break;
            };
            scrape_debug!("tick {:?} late", at.elapsed());
            self.run_cycle(&mut summary).await;
        }

        ticker.abort();
        summary
    }

    async fn run_cycle(&self, summary: &mut RunSummary) {
        summary.cycles += 1;
        scrape_info!("Trying to fetch {}", self.url);
        match self.pipeline.extract(&self.url).await {
            Ok(measurements) => summary.published += self.dispatch_all(&measurements),
            Err(err) => {
                summary.failed += 1;
                scrape_warn!("{}", err);
            }
        }
    }

    fn dispatch_all(&self, measurements: &[Measurement]) -> u64 {
        let mut published = 0;
        for measurement in measurements {
            scrape_info!(
                "{}: {} ({})",
                measurement.name,
                measurement.value,
                measurement.unit
            );
            if let Some(target) = self.dispatch.route(measurement) {
                self.sink.publish(&target, &measurement.value);
                published += 1;
            }
        }
        published
    }
}

async fn tick_source(period: Duration, tx: mpsc::Sender<Instant>, cancel: CancellationToken) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let at = tokio::select! {
            _ = cancel.cancelled() => return,
            at = interval.tick() => at,
        };
        match tx.try_send(at) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => scrape_debug!("scrape still running, tick skipped"),
            Err(TrySendError::Closed(_)) => return,
        }
    }
}
