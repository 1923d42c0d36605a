use std::sync::Arc;

use scraper::Html;
use weather_core::{Measurement, RawRow, RowNormalizer};
use weather_logging::{scrape_debug, scrape_trace};

use crate::walk::{find_descendants_by_tag, text_content};
use crate::{decode_body, FetchOutput, Fetcher, ScrapeError};

/// Fetch, decode, parse and normalize one observation page.
#[derive(Clone)]
pub struct ScrapePipeline {
    fetcher: Arc<dyn Fetcher>,
}

impl ScrapePipeline {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Either every measurement of the page or an error; never a partial list.
    pub async fn extract(&self, url: &str) -> Result<Vec<Measurement>, ScrapeError> {
        let output = self.fetcher.fetch(url).await?;
        measurements_from_output(&output)
    }
}

pub fn measurements_from_output(output: &FetchOutput) -> Result<Vec<Measurement>, ScrapeError> {
    let metadata = &output.metadata;
    if metadata.final_url != metadata.url {
        scrape_debug!("{} redirected to {}", metadata.url, metadata.final_url);
    }
    let body = decode_body(&output.bytes, metadata.content_type.as_deref());
    scrape_trace!(
        "decoded {} bytes from {} as {}",
        metadata.byte_len,
        metadata.final_url,
        body.encoding
    );
    if body.had_errors {
        scrape_debug!("invalid {} bytes in {} replaced", body.encoding, metadata.final_url);
    }
    measurements_from_html(&body.text)
}

/// Parses `html` and extracts its measurements. A blank body is an error,
/// a page without matching rows is not.
pub fn measurements_from_html(html: &str) -> Result<Vec<Measurement>, ScrapeError> {
    if html.trim().is_empty() {
        return Err(ScrapeError::EmptyDocument);
    }
    let document = Html::parse_document(html);
    Ok(measurements_from_document(&document))
}

pub fn measurements_from_document(document: &Html) -> Vec<Measurement> {
    let rows = find_descendants_by_tag(document.tree.root(), "tr")
        .into_iter()
        .filter_map(|tr| {
            let cells = find_descendants_by_tag(tr, "td")
                .into_iter()
                .map(|td| text_content(Some(td)))
                .collect();
            RawRow::from_cells(cells)
        });

    RowNormalizer::new().normalize_all(rows)
}
