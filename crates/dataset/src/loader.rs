use crate::error::DatasetError;
use crate::schema::{INFLUENCERS, PAYOUTS, POSTS, TRACKING, TableSchema};
use crate::snapshot::Snapshot;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads the four input tables from `dir` and validates them into a `Snapshot`.
///
/// Any schema or integrity problem is fatal; the pipeline must not run on a
/// partially understood dataset.
pub fn load_snapshot(dir: &Path) -> Result<Snapshot, DatasetError> {
    tracing::info!(directory = %dir.display(), "Loading dataset.");

    let influencers = read_table(dir, &INFLUENCERS)?;
    let posts = read_table(dir, &POSTS)?;
    let events = read_table(dir, &TRACKING)?;
    let payouts = read_table(dir, &PAYOUTS)?;

    let snapshot = Snapshot::new(influencers, posts, events, payouts)?;
    let summary = snapshot.summary();
    tracing::info!(
        influencers = summary.influencers,
        posts = summary.posts,
        events = summary.events,
        payouts = summary.payouts,
        "Dataset loaded."
    );
    Ok(snapshot)
}

/// Opens `schema.file_name` inside `dir` and deserializes every row.
pub fn read_table<T: DeserializeOwned>(dir: &Path, schema: &TableSchema) -> Result<Vec<T>, DatasetError> {
    let path = dir.join(schema.file_name);
    let file = File::open(&path).map_err(|source| DatasetError::Io { path, source })?;
    read_rows(file, schema)
}

/// Deserializes CSV rows after checking that every required column is present.
///
/// Columns are matched by header name, so their order and any extra columns
/// do not matter.
pub fn read_rows<R: Read, T: DeserializeOwned>(
    reader: R,
    schema: &TableSchema,
) -> Result<Vec<T>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|source| DatasetError::Csv { table: schema.name, source })?;
    let header_names: Vec<&str> = headers.iter().collect();
    if let Some(column) = schema.missing_column(&header_names) {
        return Err(DatasetError::MissingColumn { table: schema.name, column });
    }

    csv_reader
        .deserialize()
        .enumerate()
        .map(|(index, row)| {
            row.map_err(|e| DatasetError::InvalidValue {
                table: schema.name,
                row: index as u64 + 1,
                message: e.to_string(),
            })
        })
        .collect()
}
