use std::time::Duration;

use report_logging::{report_debug, report_warn};
use serde_json::Value;
use url::Url;

use crate::{parse_listing, CatalogListing, CatalogLoadError, DownloadError, GenerationError};

pub const CATALOG_PATH: &str = "/api/stocks";
pub const GENERATE_PATH: &str = "/generate";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: Url,
    pub connect_timeout: Duration,
    /// Whole-request timeout. `None` leaves report generation unbounded.
    pub request_timeout: Option<Duration>,
}

impl ClientSettings {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait ReportClient: Send + Sync {
    async fn fetch_catalog(&self) -> Result<CatalogListing, CatalogLoadError>;

    /// Submits the form and returns the server's `download_url`, empty when
    /// an OK reply carried none.
    async fn generate_report(
        &self,
        fields: &[(String, String)],
    ) -> Result<String, GenerationError>;

    async fn download_report(&self, url: &str) -> Result<Vec<u8>, DownloadError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestReportClient {
    settings: ClientSettings,
}

impl ReqwestReportClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn build_client(&self) -> reqwest::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.settings.connect_timeout);
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.settings.base_url.join(path)
    }
}

#[async_trait::async_trait]
impl ReportClient for ReqwestReportClient {
    async fn fetch_catalog(&self) -> Result<CatalogListing, CatalogLoadError> {
        let url = self
            .endpoint(CATALOG_PATH)
            .map_err(|err| CatalogLoadError::Network(err.to_string()))?;
        let client = self
            .build_client()
            .map_err(|err| CatalogLoadError::Network(err.to_string()))?;

        let response = client
            .get(url)
            .send()
            .await
            .map_err(|err| CatalogLoadError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogLoadError::HttpStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| CatalogLoadError::Network(err.to_string()))?;
        let listing = parse_listing(&body)?;
        report_debug!("Catalog loaded: {} sectors", listing.len());
        Ok(listing)
    }

    async fn generate_report(
        &self,
        fields: &[(String, String)],
    ) -> Result<String, GenerationError> {
        let url = self
            .endpoint(GENERATE_PATH)
            .map_err(|err| GenerationError::Unknown(err.to_string()))?;
        let client = self
            .build_client()
            .map_err(|err| GenerationError::Unknown(err.to_string()))?;

        let form = fields
            .iter()
            .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                form.text(name.clone(), value.clone())
            });

        let response = client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| GenerationError::Unknown(err.to_string()))?;

        // The body is JSON on both success and failure.
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| GenerationError::Unknown(err.to_string()))?;
        let payload: Value = serde_json::from_slice(&body).map_err(|err| {
            GenerationError::Unknown(format!("malformed response (status {status}): {err}"))
        })?;

        if status.is_success() {
            return Ok(match payload.get("download_url") {
                Some(Value::String(download_url)) => download_url.clone(),
                None | Some(Value::Null) => {
                    report_warn!("Report response has no download_url");
                    String::new()
                }
                Some(other) => other.to_string(),
            });
        }

        match payload.get("error") {
            Some(Value::String(message)) => Err(GenerationError::Rejected(message.clone())),
            None | Some(Value::Null) => {
                report_warn!("Report request failed with status {status} and no error field");
                Err(GenerationError::Unknown(format!("http status {}", status.as_u16())))
            }
            Some(other) => Err(GenerationError::Rejected(other.to_string())),
        }
    }

    async fn download_report(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
        let url = self
            .endpoint(url)
            .map_err(|err| DownloadError::InvalidUrl(err.to_string()))?;
        let client = self
            .build_client()
            .map_err(|err| DownloadError::Network(err.to_string()))?;

        let response = client
            .get(url)
            .send()
            .await
            .map_err(|err| DownloadError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::HttpStatus(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| DownloadError::Network(err.to_string()))?;
        Ok(bytes.to_vec())
    }
}
