use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::debug;

use crate::providers::dnsimple::error::DnsimpleProviderError;
use crate::providers::dnsimple::types::*;

pub struct DnsimpleConfig {
    pub api_url: String,
    pub token: String,
    pub timeout: Duration,
}

impl fmt::Debug for DnsimpleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DnsimpleConfig")
            .field("api_url", &self.api_url)
            .field("token", &"<REDACTED>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug)]
pub struct DnsimpleProvider {
    config: DnsimpleConfig,
    client: Client,
}

impl DnsimpleProvider {
    pub fn new(config: DnsimpleConfig) -> Result<Self, DnsimpleProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("zonectl/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url.trim_end_matches('/'), path)
    }

    async fn error_from(response: Response) -> DnsimpleProviderError {
        let status = response.status();
        let error: DnsimpleError = response.json().await.unwrap_or(DnsimpleError {
            message: status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        });
        DnsimpleProviderError::from_status(status, error)
    }

    async fn handle_request<T>(&self, request: RequestBuilder) -> Result<T, DnsimpleProviderError>
    where
        T: DeserializeOwned,
    {
        let response = request.bearer_auth(&self.config.token).send().await?;
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::error_from(response).await)
        }
    }

    pub async fn whoami(&self) -> Result<WhoamiData, DnsimpleProviderError> {
        let response: DataResponse<WhoamiData> =
            self.handle_request(self.client.get(self.url("/whoami"))).await?;
        Ok(response.data)
    }

    pub async fn list_domains(
        &self,
        account: &str,
        page: u32,
    ) -> Result<ListResponse<DnsimpleDomain>, DnsimpleProviderError> {
        let url = self.url(&format!("/{account}/domains"));
        let request = self.client.get(url).query(&[("page", page)]);
        self.handle_request(request).await
    }

    pub async fn list_zone_records(
        &self,
        account: &str,
        zone: &str,
        page: u32,
        type_filter: Option<&str>,
    ) -> Result<ListResponse<DnsimpleRecord>, DnsimpleProviderError> {
        let url = self.url(&format!("/{account}/zones/{zone}/records"));
        let mut request = self.client.get(url).query(&[("page", page)]);
        if let Some(record_type) = type_filter {
            request = request.query(&[("type", record_type)]);
        }
        let listing: ListResponse<DnsimpleRecord> = self.handle_request(request).await?;
        debug!(
            zone,
            page = listing.pagination.current_page,
            total_pages = listing.pagination.total_pages,
            "received zone records"
        );
        Ok(listing)
    }

    pub async fn create_zone_record(
        &self,
        account: &str,
        zone: &str,
        req: &CreateRecordRequest,
    ) -> Result<DnsimpleRecord, DnsimpleProviderError> {
        let url = self.url(&format!("/{account}/zones/{zone}/records"));
        let response: DataResponse<DnsimpleRecord> =
            self.handle_request(self.client.post(url).json(req)).await?;
        Ok(response.data)
    }

    pub async fn update_zone_record(
        &self,
        account: &str,
        zone: &str,
        id: &str,
        req: &UpdateRecordRequest,
    ) -> Result<DnsimpleRecord, DnsimpleProviderError> {
        let url = self.url(&format!("/{account}/zones/{zone}/records/{id}"));
        let response: DataResponse<DnsimpleRecord> =
            self.handle_request(self.client.patch(url).json(req)).await?;
        Ok(response.data)
    }

    pub async fn delete_zone_record(
        &self,
        account: &str,
        zone: &str,
        id: &str,
    ) -> Result<(), DnsimpleProviderError> {
        let url = self.url(&format!("/{account}/zones/{zone}/records/{id}"));
        let response = self
            .client
            .delete(url)
            .bearer_auth(&self.config.token)
            .send()
            .await?;
        match response.status() {
            StatusCode::NO_CONTENT | StatusCode::OK => Ok(()),
            _ => Err(Self::error_from(response).await),
        }
    }
}
