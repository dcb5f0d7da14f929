//! `lookup` command: fold a records file into an id -> label table.

use anyhow::Context;
use log::info;
use sae_utils::lookup::{LookupTable, LookupTableBuilder, Record};
use std::path::Path;

/// Parse CSV records with an `id,value` header row.
///
/// Only the headers are trimmed; field whitespace is part of the label.
pub fn parse_records_csv(data: &str) -> anyhow::Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(data.as_bytes());
    let mut records = Vec::new();
    for row in rdr.deserialize() {
        let record: Record = row?;
        records.push(record);
    }
    Ok(records)
}

/// Parse a JSON array of `{"id": ..., "value": ...}` objects.
pub fn parse_records_json(data: &str) -> anyhow::Result<Vec<Record>> {
    Ok(serde_json::from_str(data)?)
}

/// Parse a JSON object of string -> string.
pub fn parse_seed_json(data: &str) -> anyhow::Result<LookupTable> {
    Ok(serde_json::from_str(data)?)
}

fn is_csv(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

pub fn load_records(path: &str) -> anyhow::Result<Vec<Record>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read records from {path}"))?;
    let records = if is_csv(path) {
        parse_records_csv(&data)
    } else {
        parse_records_json(&data)
    };
    records.with_context(|| format!("failed to parse records in {path}"))
}

pub fn load_seed(path: &str) -> anyhow::Result<LookupTable> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed table from {path}"))?;
    parse_seed_json(&data).with_context(|| format!("failed to parse seed table in {path}"))
}

/// Counts reported after a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupSummary {
    pub records: usize,
    pub seeded: usize,
    pub inserted: usize,
    pub skipped: usize,
}

impl LookupSummary {
    /// Records dropped because their id was already present.
    pub fn duplicates(&self) -> usize {
        self.records - self.inserted - self.skipped
    }
}

pub fn build_table(records: &[Record], seed: LookupTable) -> (LookupTable, LookupSummary) {
    let seeded = seed.len();
    let mut builder = LookupTableBuilder::with_seed(seed);
    let inserted = builder.insert_all(records);
    let summary = LookupSummary {
        records: records.len(),
        seeded,
        inserted,
        skipped: builder.skipped(),
    };
    (builder.finish(), summary)
}

pub fn run_lookup(records: &str, seed: Option<&str>, output: Option<&str>) -> anyhow::Result<()> {
    let rows = load_records(records)?;
    let seed = match seed {
        Some(path) => load_seed(path)?,
        None => LookupTable::new(),
    };

    info!("Building lookup table from {} records in {}", rows.len(), records);
    let (table, summary) = build_table(&rows, seed);
    info!(
        "{} seeded, {} inserted, {} duplicates dropped, {} skipped for empty id",
        summary.seeded,
        summary.inserted,
        summary.duplicates(),
        summary.skipped
    );

    let json = serde_json::to_string_pretty(&table)?;
    match output {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("failed to write {path}"))?;
            info!("Lookup table with {} entries written to {}", table.len(), path);
        }
        None => println!("{json}"),
    }
    Ok(())
}
