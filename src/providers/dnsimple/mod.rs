//! DNSimple v2 provider implementation

pub mod client;
pub mod error;
pub mod types;


pub use client::{DnsimpleConfig, DnsimpleProvider};

// --- RecordApi trait implementation for DnsimpleProvider ---
use crate::core::provider::RecordApi;
use crate::core::record::{Domain, Identity, Page, Record, RecordId, RecordQuery};
use crate::error::Error;
use async_trait::async_trait;
use error::map_error;
use types::{to_create_request, to_domain, to_record, to_update_request};

#[async_trait]
impl RecordApi for DnsimpleProvider {
    async fn whoami(&self) -> Result<Identity, Error> {
        let data = DnsimpleProvider::whoami(self).await.map_err(map_error)?;
        let user_email = data
            .user
            .map(|u| u.email)
            .or_else(|| data.account.as_ref().and_then(|a| a.email.clone()));
        Ok(Identity {
            account_id: data.account.map(|a| a.id.to_string()),
            user_email,
        })
    }

    async fn list_domains(&self, account: &str, page: u32) -> Result<Page<Domain>, Error> {
        DnsimpleProvider::list_domains(self, account, page)
            .await
            .map(|listing| Page {
                items: listing.data.iter().map(to_domain).collect(),
                total_pages: listing.pagination.total_pages,
            })
            .map_err(map_error)
    }

    async fn list_records(
        &self,
        account: &str,
        zone: &str,
        query: &RecordQuery,
    ) -> Result<Page<Record>, Error> {
        self.list_zone_records(account, zone, query.page, query.type_filter.as_deref())
            .await
            .map(|listing| Page {
                items: listing.data.iter().map(to_record).collect(),
                total_pages: listing.pagination.total_pages,
            })
            .map_err(map_error)
    }

    async fn create_record(
        &self,
        account: &str,
        zone: &str,
        record: &Record,
    ) -> Result<Record, Error> {
        let req = to_create_request(record);
        self.create_zone_record(account, zone, &req)
            .await
            .map(|r| to_record(&r))
            .map_err(map_error)
    }

    async fn update_record(
        &self,
        account: &str,
        zone: &str,
        id: &RecordId,
        record: &Record,
    ) -> Result<Record, Error> {
        let req = to_update_request(record);
        self.update_zone_record(account, zone, &id.to_string(), &req)
            .await
            .map(|r| to_record(&r))
            .map_err(map_error)
    }

    async fn delete_record(&self, account: &str, zone: &str, id: &RecordId) -> Result<(), Error> {
        self.delete_zone_record(account, zone, &id.to_string())
            .await
            .map_err(map_error)
    }
}
