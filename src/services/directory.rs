//! HTTP client for the directory backend.
//!
//! Wraps a shared `reqwest::Client` and the configured backend base URL.
//! The two endpoints this service depends on:
//!
//! - `GET /companies?page={n}&size={m}` - paginated company listing
//! - `GET /company-images/{id}` - single logo lookup

use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::errors::{AppError, AppResult};
use crate::models::{CompanyImage, CompanyPage};
use crate::utils::normalize_base_url;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct DirectoryClient {
    client: Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(base_url: &str) -> AppResult<Self> {
        let base_url = normalize_base_url(base_url);
        Url::parse(&base_url).map_err(|e| {
            AppError::configuration(format!("invalid backend base URL '{base_url}': {e}"))
        })?;

        let client = Client::builder().connect_timeout(CONNECT_TIMEOUT).build()?;

        Ok(Self { client, base_url })
    }

    /// Fetch one page of the company listing.
    ///
    /// A single attempt, no retries. Non-success statuses surface as
    /// external-service errors and are mapped to a generic server error by
    /// the web layer.
    pub async fn fetch_companies(&self, page: u32, size: u32) -> AppResult<CompanyPage> {
        let url = format!("{}/companies?page={}&size={}", self.base_url, page, size);
        debug!("Fetching company listing: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::external_service(
                "directory-backend",
                format!("company listing returned HTTP {}", response.status()),
            ));
        }

        Ok(response.json().await?)
    }

    /// Look up the displayable image URL for one company.
    pub async fn fetch_company_image(&self, id: i64) -> AppResult<CompanyImage> {
        let url = format!("{}/company-images/{}", self.base_url, id);
        debug!("Fetching company image: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::external_service(
                "directory-backend",
                format!("image lookup for {} returned HTTP {}", id, response.status()),
            ));
        }

        Ok(response.json().await?)
    }

    /// The normalized backend base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
