use std::time::Duration;

use crate::{
    errors::ApiError,
    types::{Address, AddressStatus, DashboardStats, ReportRequest, ReportResult},
};

/// HTTP client for the hosted SOLCAT backend. Every call is a single request:
/// no retries and no caching of earlier answers.
#[derive(Clone, Debug)]
pub struct SolcatClient {
    http: reqwest::Client,
    base_url: String,
}

impl SolcatClient {
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[tracing::instrument(name = "check address", skip(self, address), fields(address = %address))]
    pub async fn check_address(&self, address: &Address) -> Result<AddressStatus, ApiError> {
        let url = format!("{}/check/{}", self.base_url, address);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ApiError::Transport)?
            .error_for_status()
            .map_err(ApiError::from_status)?;

        let status: AddressStatus = response.json().await.map_err(ApiError::Decode)?;
        tracing::debug!("address status {:?}", status);
        Ok(status)
    }

    #[tracing::instrument(name = "report address", skip(self, address), fields(address = %address))]
    pub async fn report_address(&self, address: &Address) -> Result<ReportResult, ApiError> {
        let url = format!("{}/report", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&ReportRequest {
                address: address.clone(),
            })
            .send()
            .await
            .map_err(ApiError::Transport)?
            .error_for_status()
            .map_err(ApiError::from_status)?;

        response.json().await.map_err(ApiError::Decode)
    }

    #[tracing::instrument(name = "fetch dashboard stats", skip(self))]
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let url = format!("{}/dashboard/stats", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ApiError::Transport)?
            .error_for_status()
            .map_err(ApiError::from_status)?;

        response.json().await.map_err(ApiError::Decode)
    }
}
