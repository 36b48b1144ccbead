use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Provider-assigned record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Numeric(i64),
    Opaque(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Numeric(id) => write!(f, "{id}"),
            RecordId::Opaque(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Numeric(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub zone_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
    #[serde(default)]
    pub priority: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record {
    /// A record that does not exist at the provider yet.
    pub fn desired(zone: &str, name: &str, record_type: &str, content: &str, ttl: u32) -> Self {
        Record {
            id: None,
            zone_id: zone.to_string(),
            name: name.to_string(),
            record_type: record_type.to_string(),
            content: content.to_string(),
            ttl,
            priority: 0,
            updated_at: None,
        }
    }

    /// Name as shown to users; the zone apex is `.`.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { "." } else { &self.name }
    }
}

/// Records of one zone in provider listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordCollection(Vec<Record>);

impl RecordCollection {
    pub fn new(records: Vec<Record>) -> Self {
        RecordCollection(records)
    }

    /// Stable sort, records sharing a name keep their listing order.
    pub fn sort_by_name(&mut self) {
        self.0.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

impl Deref for RecordCollection {
    type Target = [Record];

    fn deref(&self) -> &[Record] {
        &self.0
    }
}

/// Partial record used to locate an existing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDescriptor {
    pub name: String,
    pub record_type: String,
    pub content: String,
}

impl RecordDescriptor {
    pub fn new(name: &str, record_type: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            record_type: record_type.to_string(),
            content: content.to_string(),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        record.name == self.name
            && record.record_type == self.record_type
            && record.content == self.content
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
    pub expires_on: Option<NaiveDate>,
}

/// Who the configured token belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub account_id: Option<String>,
    pub user_email: Option<String>,
}

/// One page of a listing plus the provider's page count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    pub page: u32,
    pub type_filter: Option<String>,
}
