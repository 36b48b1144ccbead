//! Rendering of record and domain listings.
//!
//! Everything here is pure: callers get text back and decide where it goes.

use std::str::FromStr;

use crate::core::record::{Domain, Record};
use crate::error::Error;

const NAME_WIDTH: usize = 30;
const TYPE_WIDTH: usize = 5;
const TTL_WIDTH: usize = 7;
const CONTENT_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
    Table,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            other => Err(Error::Format(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Minimal,
    Verbose,
}

impl From<bool> for Verbosity {
    fn from(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Minimal
        }
    }
}

/// Renders records in their given order.
pub fn render(
    records: &[Record],
    format: OutputFormat,
    verbosity: Verbosity,
) -> Result<String, Error> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string(records).map_err(|e| Error::Format(e.to_string()))
        }
        OutputFormat::Plain => Ok(records
            .iter()
            .map(|record| plain_line(record, verbosity))
            .collect()),
        OutputFormat::Table => Ok(table(records)),
    }
}

fn plain_line(record: &Record, verbosity: Verbosity) -> String {
    let mut line = format!(
        "{} {} ({}) {}",
        record.display_name(),
        record.record_type,
        record.ttl,
        record.content
    );
    if verbosity == Verbosity::Verbose {
        let updated = record
            .updated_at
            .map(|at| at.to_rfc3339())
            .unwrap_or_else(|| "-".to_string());
        line.push_str(&format!(
            " zone={} priority={} updated={}",
            record.zone_id, record.priority, updated
        ));
    }
    line.push('\n');
    line
}

fn border() -> String {
    format!(
        "+-{}-+-{}-+-{}-+-{}-+\n",
        "-".repeat(NAME_WIDTH),
        "-".repeat(TYPE_WIDTH),
        "-".repeat(TTL_WIDTH),
        "-".repeat(CONTENT_WIDTH)
    )
}

fn table(records: &[Record]) -> String {
    let mut out = border();
    out.push_str(&format!(
        "| {:<NAME_WIDTH$} | {:<TYPE_WIDTH$} | {:<TTL_WIDTH$} | {:<CONTENT_WIDTH$} |\n",
        "Name", "Type", "TTL", "Content"
    ));
    out.push_str(&border());
    for record in records {
        out.push_str(&format!(
            "| {:<NAME_WIDTH$} | {:<TYPE_WIDTH$} | {:>TTL_WIDTH$} | {:<CONTENT_WIDTH$} |\n",
            record.display_name(),
            record.record_type,
            record.ttl,
            record.content
        ));
    }
    out.push_str(&border());
    out
}

pub fn render_domains(domains: &[Domain], verbosity: Verbosity) -> String {
    domains
        .iter()
        .map(|domain| match verbosity {
            Verbosity::Minimal => format!("{}\n", domain.name),
            Verbosity::Verbose => {
                let expires = domain
                    .expires_on
                    .map(|date| date.to_string())
                    .unwrap_or_else(|| "-".to_string());
                format!("{} {}\n", domain.name, expires)
            }
        })
        .collect()
}
