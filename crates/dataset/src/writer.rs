use crate::error::DatasetError;
use crate::schema::{INFLUENCERS, PAYOUTS, POSTS, TRACKING, TableSchema};
use crate::snapshot::Snapshot;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Writes the four tables of `snapshot` into `dir` under the file names the loader expects.
pub fn write_snapshot(dir: &Path, snapshot: &Snapshot) -> Result<(), DatasetError> {
    fs::create_dir_all(dir).map_err(|source| DatasetError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    write_table(dir, &INFLUENCERS, snapshot.influencers())?;
    write_table(dir, &POSTS, snapshot.posts())?;
    write_table(dir, &TRACKING, snapshot.events())?;
    write_table(dir, &PAYOUTS, snapshot.payouts())?;

    tracing::info!(directory = %dir.display(), "Dataset written.");
    Ok(())
}

fn write_table<T: Serialize>(dir: &Path, schema: &TableSchema, rows: &[T]) -> Result<(), DatasetError> {
    let path = dir.join(schema.file_name);
    let csv_error = |source| DatasetError::Csv { table: schema.name, source };

    let mut writer = csv::Writer::from_path(&path).map_err(csv_error)?;
    if rows.is_empty() {
        // Serde only emits a header alongside the first row.
        writer.write_record(schema.columns).map_err(csv_error)?;
    }
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| DatasetError::Io { path, source })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use crate::loader::load_snapshot;
    use chrono::NaiveDate;
    use configuration::GeneratorSettings;

    #[test]
    fn written_dataset_loads_back_identically() {
        let anchor = NaiveDate::from_ymd_opt(2024, 5, 20)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap();
        let settings = GeneratorSettings {
            influencers: 5,
            posts: 10,
            events: 25,
            seed: Some(3),
        };
        let original = generate(&settings, anchor).unwrap();
        let dir = tempfile::tempdir().unwrap();

        write_snapshot(dir.path(), &original).unwrap();
        let loaded = load_snapshot(dir.path()).unwrap();

        assert_eq!(loaded.influencers(), original.influencers());
        assert_eq!(loaded.posts(), original.posts());
        assert_eq!(loaded.events(), original.events());
        assert_eq!(loaded.payouts(), original.payouts());
    }

    #[test]
    fn empty_tables_still_get_headers() {
        let snapshot = Snapshot::new(vec![], vec![], vec![], vec![]).unwrap();
        let dir = tempfile::tempdir().unwrap();

        write_snapshot(dir.path(), &snapshot).unwrap();
        let loaded = load_snapshot(dir.path()).unwrap();

        assert!(loaded.events().is_empty());
    }
}
