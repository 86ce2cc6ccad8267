//! JSON and CSV writers for result records.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use cardstmt_core::ResultRecord;

/// Pretty JSON array of records; absent fields are `null`.
pub fn format_json(records: &[ResultRecord]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// CSV with a header built from the sorted union of record keys.
///
/// A column such as `error` only appears when at least one record carries
/// it; records lacking a column get an empty cell. No records gives an
/// empty document.
pub fn format_csv(records: &[ResultRecord]) -> anyhow::Result<String> {
    if records.is_empty() {
        return Ok(String::new());
    }

    let rows = records
        .iter()
        .map(record_row)
        .collect::<anyhow::Result<Vec<_>>>()?;

    let header: BTreeSet<&str> = rows
        .iter()
        .flat_map(|row| row.keys().map(String::as_str))
        .collect();

    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(&header)?;
    for row in &rows {
        wtr.write_record(header.iter().map(|key| cell(row.get(*key))))?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

pub fn write_json(path: &Path, records: &[ResultRecord]) -> anyhow::Result<()> {
    write_output(path, &format_json(records)?)
}

pub fn write_csv(path: &Path, records: &[ResultRecord]) -> anyhow::Result<()> {
    write_output(path, &format_csv(records)?)
}

fn write_output(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

fn record_row(record: &ResultRecord) -> anyhow::Result<Map<String, Value>> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map),
        other => anyhow::bail!("Record serialized to a non-object value: {}", other),
    }
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
