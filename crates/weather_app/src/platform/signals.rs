use std::io;

use weather_logging::scrape_warn;

/// Stop signals the process reacts to: Ctrl-C everywhere, SIGTERM on unix.
pub struct Signals {
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
}

impl Signals {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            #[cfg(unix)]
            terminate: tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?,
        })
    }

    /// Waits for the next stop signal and returns its name.
    #[cfg(unix)]
    pub async fn recv(&mut self) -> &'static str {
        tokio::select! {
            _ = ctrl_c() => "SIGINT",
            _ = self.terminate.recv() => "SIGTERM",
        }
    }

    /// Waits for the next stop signal and returns its name.
    #[cfg(not(unix))]
    pub async fn recv(&mut self) -> &'static str {
        ctrl_c().await;
        "Ctrl-C"
    }
}

async fn ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        scrape_warn!("cannot listen for Ctrl-C: {}", err);
        std::future::pending::<()>().await;
    }
}
