use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use weather_core::{device_catalog, update, Msg, ScrapeConfig, SchedulerState};
use weather_engine::{FetchSettings, PublishSink, ReqwestFetcher, Scheduler, ScrapePipeline};
use weather_logging::{scrape_error, scrape_info, scrape_warn};

use super::cli::Cli;
use super::effects::EffectRunner;
use super::signals::Signals;
use super::sink::JsonLinesSink;

pub fn run_app() -> ExitCode {
    let cli = Cli::parse();
    weather_logging::initialize(cli.log_destination(), cli.log_level.into());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            scrape_error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.scrape_config().context("invalid configuration")?;
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(serve(config, cli.fetch_settings()))
}

async fn serve(config: ScrapeConfig, settings: FetchSettings) -> anyhow::Result<()> {
    let sink = Arc::new(JsonLinesSink::stdout());
    for device in device_catalog(config.device_name()) {
        sink.announce(&device)
            .with_context(|| format!("failed to announce device {}", device.topic))?;
    }

    let fetcher = ReqwestFetcher::new(settings).context("failed to build http client")?;
    let scheduler = Scheduler::from_config(&config, ScrapePipeline::new(Arc::new(fetcher)), sink);
    let runner = EffectRunner::new(scheduler.cancel_token());
    let mut signals = Signals::new().context("failed to install signal handlers")?;

    scrape_info!(
        "scraping {} every {}s as {:?}",
        config.url(),
        config.interval().as_secs(),
        config.device_name()
    );
    let mut scheduler_task = tokio::spawn(scheduler.run());

    let mut state = SchedulerState::new();
    while !state.is_stopped() {
        let msg = tokio::select! {
            signal = signals.recv() => {
                scrape_info!("caught {}", signal);
                Msg::SignalReceived
            }
            joined = &mut scheduler_task => {
                match joined {
                    Ok(summary) => scrape_info!(
                        "scheduler finished: {} cycle(s), {} failed, {} value(s) published",
                        summary.cycles,
                        summary.failed,
                        summary.published
                    ),
                    Err(err) => scrape_warn!("scheduler task ended abnormally: {}", err),
                }
                Msg::SchedulerFinished
            }
        };

        let (next, effects) = update(state, msg);
        if next != state {
            scrape_info!("{:?} -> {:?}", state, next);
        }
        state = next;
        runner.run(effects);
    }

    Ok(())
}
