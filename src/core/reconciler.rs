use std::fmt;
use tracing::info;

use crate::core::matcher;
use crate::core::paginator;
use crate::core::provider::RecordApi;
use crate::core::record::{Record, RecordDescriptor, RecordId};
use crate::error::Error;

const CREATE_SENTINEL: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OldContent {
    /// No existing record expected; always create.
    Absent,
    Existing(String),
}

/// Parsed `zone name type old new ttl` change request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSpec {
    pub zone: String,
    pub name: String,
    pub record_type: String,
    pub old_content: OldContent,
    pub new_content: String,
    pub ttl: u32,
}

impl ChangeSpec {
    /// Fields are separated by single spaces, so an empty name (the apex)
    /// is written as two consecutive spaces.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let pieces: Vec<&str> = input.split(' ').collect();
        let [zone, name, record_type, old, new, ttl] = pieces[..] else {
            return Err(Error::Validation(
                "expected space separated zone, name, type, oldvalue, newvalue, ttl".into(),
            ));
        };
        let ttl = ttl
            .parse::<u32>()
            .map_err(|_| Error::Validation(format!("invalid ttl {ttl:?}")))?;
        let old_content = if old == CREATE_SENTINEL {
            OldContent::Absent
        } else {
            OldContent::Existing(old.to_string())
        };
        Ok(ChangeSpec {
            zone: zone.to_string(),
            name: name.to_string(),
            record_type: record_type.to_string(),
            old_content,
            new_content: new.to_string(),
            ttl,
        })
    }

    fn desired(&self) -> Record {
        Record::desired(
            &self.zone,
            &self.name,
            &self.record_type,
            &self.new_content,
            self.ttl,
        )
    }
}

/// Parsed `zone name type content` delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteSpec {
    pub zone: String,
    pub descriptor: RecordDescriptor,
}

impl DeleteSpec {
    pub fn parse(input: &str) -> Result<Self, Error> {
        let pieces: Vec<&str> = input.split(' ').collect();
        let [zone, name, record_type, content] = pieces[..] else {
            return Err(Error::Validation(
                "expected space separated zone, name, type, value".into(),
            ));
        };
        Ok(DeleteSpec {
            zone: zone.to_string(),
            descriptor: RecordDescriptor::new(name, record_type, content),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    Created,
    Updated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
    pub action: WriteAction,
    pub id: RecordId,
}

/// Success line; the action is left to the logs.
impl fmt::Display for WriteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record written with id {}", self.id)
    }
}

fn require_id(record: Record) -> Result<RecordId, Error> {
    record
        .id
        .ok_or_else(|| Error::Transport("provider returned a record without an id".into()))
}

/// Locates the record a descriptor names within `zone`, listing only the
/// descriptor's type.
async fn locate(
    api: &dyn RecordApi,
    account: &str,
    zone: &str,
    descriptor: &RecordDescriptor,
) -> Result<Option<RecordId>, Error> {
    let records = paginator::list_all(api, account, zone, Some(&descriptor.record_type)).await?;
    match matcher::find(&records, descriptor) {
        Some(found) => found.id.clone().map(Some).ok_or_else(|| {
            Error::Transport(format!(
                "listed record {} {} has no id",
                found.display_name(),
                found.record_type
            ))
        }),
        None => Ok(None),
    }
}

pub async fn create_or_update(
    api: &dyn RecordApi,
    account: &str,
    spec: &ChangeSpec,
) -> Result<WriteResult, Error> {
    let existing = match &spec.old_content {
        OldContent::Absent => None,
        OldContent::Existing(old) => {
            let descriptor = RecordDescriptor::new(&spec.name, &spec.record_type, old);
            locate(api, account, &spec.zone, &descriptor).await?
        }
    };

    let desired = spec.desired();
    match existing {
        Some(id) => {
            info!(zone = %spec.zone, id = %id, "updating record");
            let written = api.update_record(account, &spec.zone, &id, &desired).await?;
            Ok(WriteResult {
                action: WriteAction::Updated,
                id: require_id(written)?,
            })
        }
        None => {
            info!(zone = %spec.zone, name = %spec.name, "creating record");
            let written = api.create_record(account, &spec.zone, &desired).await?;
            Ok(WriteResult {
                action: WriteAction::Created,
                id: require_id(written)?,
            })
        }
    }
}

pub async fn delete(
    api: &dyn RecordApi,
    account: &str,
    spec: &DeleteSpec,
) -> Result<RecordId, Error> {
    let Some(id) = locate(api, account, &spec.zone, &spec.descriptor).await? else {
        return Err(Error::NotFound(format!(
            "could not find record {} {} {} in {}",
            spec.descriptor.name, spec.descriptor.record_type, spec.descriptor.content, spec.zone
        )));
    };
    info!(zone = %spec.zone, id = %id, "deleting record");
    api.delete_record(account, &spec.zone, &id).await?;
    Ok(id)
}
