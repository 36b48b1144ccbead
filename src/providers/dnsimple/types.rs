use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct DataResponse<T> {
    pub data: T,
}

#[derive(Deserialize, Debug)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WhoamiData {
    pub account: Option<Account>,
    pub user: Option<User>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Account {
    pub id: i64,
    pub email: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct User {
    pub email: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DnsimpleDomain {
    pub name: String,
    pub expires_on: Option<NaiveDate>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DnsimpleRecord {
    pub id: i64,
    pub zone_id: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    pub priority: Option<u32>,
    #[serde(rename = "type")]
    pub record_type: String,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Debug)]
pub struct CreateRecordRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

/// Record type cannot change on update, so it is not sent.
#[derive(Serialize, Debug)]
pub struct UpdateRecordRequest {
    pub name: String,
    pub content: String,
    pub ttl: u32,
}

#[derive(Deserialize, Debug)]
pub struct DnsimpleError {
    pub message: String,
}

use crate::core::record::{Domain, Record, RecordId};

pub fn to_record(dr: &DnsimpleRecord) -> Record {
    Record {
        id: Some(RecordId::Numeric(dr.id)),
        zone_id: dr.zone_id.clone(),
        name: dr.name.clone(),
        record_type: dr.record_type.clone(),
        content: dr.content.clone(),
        ttl: dr.ttl,
        priority: dr.priority.unwrap_or(0),
        updated_at: dr.updated_at,
    }
}

pub fn to_domain(dd: &DnsimpleDomain) -> Domain {
    Domain {
        name: dd.name.clone(),
        expires_on: dd.expires_on,
    }
}

pub fn to_create_request(rec: &Record) -> CreateRecordRequest {
    CreateRecordRequest {
        name: rec.name.clone(),
        record_type: rec.record_type.clone(),
        content: rec.content.clone(),
        ttl: rec.ttl,
        priority: (rec.priority > 0).then_some(rec.priority),
    }
}

pub fn to_update_request(rec: &Record) -> UpdateRecordRequest {
    UpdateRecordRequest {
        name: rec.name.clone(),
        content: rec.content.clone(),
        ttl: rec.ttl,
    }
}
