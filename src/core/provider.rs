use crate::core::record::{Domain, Identity, Page, Record, RecordId, RecordQuery};
use crate::error::Error;
use async_trait::async_trait;

/// Authenticated access to a provider's zone record API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordApi: Send + Sync {
    async fn whoami(&self) -> Result<Identity, Error>;
    async fn list_domains(&self, account: &str, page: u32) -> Result<Page<Domain>, Error>;
    async fn list_records(
        &self,
        account: &str,
        zone: &str,
        query: &RecordQuery,
    ) -> Result<Page<Record>, Error>;
    async fn create_record(&self, account: &str, zone: &str, record: &Record)
    -> Result<Record, Error>;
    async fn update_record(
        &self,
        account: &str,
        zone: &str,
        id: &RecordId,
        record: &Record,
    ) -> Result<Record, Error>;
    async fn delete_record(&self, account: &str, zone: &str, id: &RecordId) -> Result<(), Error>;
}
