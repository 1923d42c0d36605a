//! Weather engine: fetching, HTML traversal, extraction and the scrape loop.
mod decode;
mod fetch;
mod pipeline;
mod scheduler;
mod sink;
mod types;
pub mod walk;

pub use decode::{decode_body, DecodedBody};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use pipeline::{
    measurements_from_document, measurements_from_html, measurements_from_output, ScrapePipeline,
};
pub use scheduler::{RunSummary, Scheduler, PENDING_TICKS};
pub use sink::{Publication, PublishSink, RecordingSink};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput, ScrapeError};
