use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::ProgressBar;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, info};

use crate::record::{parse_payload, Payload};
use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no data source configured (set `url` in config/local.toml, EXPO_URL, or pass --source)")]
    Missing,
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: StatusCode },
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{origin} is not a participant feed")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where a configured source string points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin<'a> {
    Remote(&'a str),
    Local(&'a Path),
}

impl<'a> Origin<'a> {
    pub fn parse(source: &'a str) -> Option<Self> {
        let source = source.trim();
        if source.is_empty() {
            None
        } else if source.starts_with("http://") || source.starts_with("https://") {
            Some(Origin::Remote(source))
        } else {
            let path = source.strip_prefix("file://").unwrap_or(source);
            Some(Origin::Local(Path::new(path)))
        }
    }
}

/// Fetch and parse the registration feed named by `settings.url`.
pub async fn fetch_payload(settings: &Settings) -> Result<Payload, SourceError> {
    let origin = Origin::parse(&settings.url).ok_or(SourceError::Missing)?;

    let body = match origin {
        Origin::Remote(url) => fetch_remote(url, settings.timeout()).await?,
        Origin::Local(path) => read_local(path).await?,
    };
    debug!("Received {} bytes", body.len());

    let payload = parse_payload(&body).map_err(|source| SourceError::Parse {
        origin: settings.url.trim().to_string(),
        source,
    })?;
    info!("Loaded {} records from {}", payload.info.len(), settings.url.trim());
    Ok(payload)
}

async fn fetch_remote(url: &str, timeout: Duration) -> Result<String, SourceError> {
    let request_error = |source| SourceError::Request {
        url: url.to_string(),
        source,
    };

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(request_error)?;

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching {}", url));
    pb.enable_steady_tick(Duration::from_millis(120));

    let result = async {
        let response = client.get(url).send().await.map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status,
            });
        }
        response.text().await.map_err(request_error)
    }
    .await;

    pb.finish_and_clear();
    result
}

async fn read_local(path: &Path) -> Result<String, SourceError> {
    info!("Reading feed from {}", path.display());
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })
}
