//! Archive download: one blocking GET, body collected in memory.
//!
//! Uses the curl crate (libcurl). Nothing is written to disk here, so a failed
//! or rejected download leaves no partial files behind.

use crate::error::DriverError;
use crate::platform::{Platform, DRIVER_NAME};
use std::time::Duration;
use url::Url;

/// Transfer limits for the archive GET.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    /// Overall transfer timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            timeout: None,
        }
    }
}

/// Builds `<host>/<version>/chromedriver_<suffix>.zip`.
pub fn download_url(host: &str, version: &str, platform: Platform) -> Result<Url, DriverError> {
    let raw = format!(
        "{}/{}/{}_{}.zip",
        host.trim_end_matches('/'),
        version,
        DRIVER_NAME,
        platform.archive_suffix()
    );
    Url::parse(&raw).map_err(|source| DriverError::InvalidUrl { url: raw, source })
}

/// GETs `url` and returns the full body. Anything but HTTP 200 is an error.
pub fn download_to_memory(url: &str, opts: &FetchOptions) -> Result<Vec<u8>, DriverError> {
    let network = |source: curl::Error| DriverError::Network {
        url: url.to_string(),
        source,
    };

    let mut body = Vec::new();
    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(network)?;
    easy.follow_location(true).map_err(network)?;
    easy.max_redirections(10).map_err(network)?;
    easy.connect_timeout(opts.connect_timeout).map_err(network)?;
    if let Some(t) = opts.timeout {
        easy.timeout(t).map_err(network)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(network)?;
        transfer.perform().map_err(network)?;
    }

    let code = easy.response_code().map_err(network)?;
    if code != 200 {
        return Err(DriverError::HttpStatus {
            code,
            url: url.to_string(),
        });
    }

    tracing::debug!(bytes = body.len(), "downloaded {}", url);
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_url_matches_storage_layout() {
        let url = download_url(
            "https://chromedriver.storage.googleapis.com",
            "2.34",
            Platform::Linux,
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://chromedriver.storage.googleapis.com/2.34/chromedriver_linux64.zip"
        );
    }

    #[test]
    fn download_url_tolerates_trailing_slash() {
        let url = download_url("http://127.0.0.1:8080/", "2.34", Platform::Windows).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/2.34/chromedriver_win32.zip");
    }

    #[test]
    fn download_url_rejects_garbage_host() {
        let err = download_url("not a host", "2.34", Platform::Mac).unwrap_err();
        assert!(matches!(err, DriverError::InvalidUrl { .. }));
    }
}
