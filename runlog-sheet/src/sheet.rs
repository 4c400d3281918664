use crate::error::Result;
use std::path::PathBuf;

#[cfg(feature = "api")]
use crate::error::SheetError;
#[cfg(feature = "api")]
use log::{info, warn};
#[cfg(feature = "api")]
use reqwest::{Client, StatusCode};
#[cfg(feature = "api")]
use std::time::Duration;

/// Published CSV export of the workout log.
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/1kOsc8fQ0A07VOp4pykz3B-BzyWuHH1kAQfm9V_tPOcw/pub?output=csv";

/// Request timeout for the published export.
#[cfg(feature = "api")]
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the CSV export is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSource {
    Url(String),
    File(PathBuf),
}

impl Default for SheetSource {
    fn default() -> Self {
        SheetSource::Url(DEFAULT_SHEET_URL.to_string())
    }
}

impl std::fmt::Display for SheetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetSource::Url(url) => f.write_str(url),
            SheetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl SheetSource {
    /// Read a local export.
    pub fn read_file(path: &std::path::Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    /// Load the raw CSV body. A single attempt is made; callers decide what
    /// to do with a failure.
    #[cfg(feature = "api")]
    pub async fn load(&self, client: &Client) -> Result<String> {
        match self {
            SheetSource::Url(url) => fetch_csv(client, url).await,
            SheetSource::File(path) => SheetSource::read_file(path),
        }
    }
}

/// HTTP client configured for sheet retrieval.
#[cfg(feature = "api")]
pub fn build_client() -> Result<Client> {
    Ok(Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

/// Fetch the published CSV export once.
#[cfg(feature = "api")]
pub async fn fetch_csv(client: &Client, url: &str) -> Result<String> {
    info!("Fetching sheet export from {}", url);
    let response = client.get(url).send().await?;
    let status = response.status();
    if status != StatusCode::OK {
        warn!("Bad response status for {}: {}", url, status);
        return Err(SheetError::BadStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let body = response.text().await?;
    if body.len() <= 2 {
        warn!("Empty response for {}", url);
        return Err(SheetError::EmptyResponse(url.to_string()));
    }
    info!("Fetched {} bytes", body.len());
    Ok(body)
}
