//! Bulk import of food trucks from JSON.
//!
//! A seed document is a JSON array whose entries are food truck objects or
//! `null`. Every entry goes through [`Catalog::create`], so `null` entries,
//! non-positive ids and duplicates are rejected exactly as a single create
//! would reject them.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use foodtruck_types::FoodTruck;
use serde::Serialize;
use tracing::{info, warn};

use crate::cancel::Cancellation;
use crate::error::{CatalogError, CatalogResult};
use crate::service::Catalog;

/// A seed entry that was not stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Rejected {
    /// Position of the entry in the seed array.
    pub index: usize,
    pub reason: String,
}

/// Summary of a seed import.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub created: usize,
    pub rejected: Vec<Rejected>,
}

impl ImportReport {
    pub fn total(&self) -> usize {
        self.created + self.rejected.len()
    }

    /// Fold another report into this one. Rejection indices stay relative to
    /// the document they came from.
    pub fn merge(&mut self, other: ImportReport) {
        self.created += other.created;
        self.rejected.extend(other.rejected);
    }
}

impl Catalog {
    /// Import a JSON seed document.
    ///
    /// With `fail_fast`, the first rejected entry aborts the import and its
    /// error is returned; entries before it stay stored. Cancellation is
    /// checked before every entry.
    pub fn import_json<R: Read>(
        &self,
        reader: R,
        fail_fast: bool,
        cancel: &Cancellation,
    ) -> CatalogResult<ImportReport> {
        let entries: Vec<Option<FoodTruck>> =
            serde_json::from_reader(reader).map_err(|e| CatalogError::Seed(e.to_string()))?;

        let mut report = ImportReport::default();
        for (index, entry) in entries.into_iter().enumerate() {
            match self.create(entry, cancel) {
                Ok(()) => report.created += 1,
                Err(CatalogError::Store(e)) if !fail_fast => {
                    report.rejected.push(Rejected {
                        index,
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            created = report.created,
            rejected = report.rejected.len(),
            "seed import finished"
        );
        Ok(report)
    }

    /// Import a JSON seed file from disk.
    pub fn import_file(
        &self,
        path: impl AsRef<Path>,
        fail_fast: bool,
        cancel: &Cancellation,
    ) -> CatalogResult<ImportReport> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "cannot open seed file");
            CatalogError::Io(e)
        })?;
        self.import_json(BufReader::new(file), fail_fast, cancel)
            .map_err(|e| match e {
                CatalogError::Seed(msg) => CatalogError::Seed(format!("{}: {msg}", path.display())),
                other => other,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodtruck_store::StoreError;
    use foodtruck_types::LocationId;
    use std::io::Write;

    const SEED: &str = r#"[
        {"address": "1 Ferry Building", "block": "0201", "locationId": 1},
        {"address": "2 Ferry Building", "block": "0201", "locationId": 2},
        null,
        {"address": "Civic Center", "block": "0351", "locationId": 0},
        {"address": "Duplicate", "block": "0999", "locationId": 1},
        {"address": "Mission", "block": "0351", "locationId": 3}
    ]"#;

    #[test]
    fn import_reports_created_and_rejected() {
        let catalog = Catalog::in_memory();
        let report = catalog
            .import_json(SEED.as_bytes(), false, &Cancellation::none())
            .unwrap();

        assert_eq!(report.created, 3);
        assert_eq!(report.total(), 6);
        let indices: Vec<_> = report.rejected.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![2, 3, 4]);
        assert!(report.rejected[2].reason.contains("already exists"));

        assert_eq!(catalog.count(), 3);
        let none = Cancellation::none();
        assert_eq!(catalog.get_by_block("0201", &none).unwrap().len(), 2);
        assert!(catalog.get_by_block("0999", &none).unwrap().is_empty());
    }

    #[test]
    fn fail_fast_stops_at_first_rejection() {
        let catalog = Catalog::in_memory();
        let err = catalog
            .import_json(SEED.as_bytes(), true, &Cancellation::none())
            .unwrap_err();

        assert!(matches!(
            err,
            CatalogError::Store(StoreError::InvalidArgument { .. })
        ));
        assert_eq!(catalog.count(), 2);
    }

    #[test]
    fn duplicate_keeps_first_entry() {
        let catalog = Catalog::in_memory();
        let seed = r#"[{"locationId": 5}, {"locationId": 5}]"#;
        let err = catalog
            .import_json(seed.as_bytes(), true, &Cancellation::none())
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Store(StoreError::DuplicateKey { .. })
        ));
        assert_eq!(
            catalog.get(LocationId::new(5), &Cancellation::none()).unwrap(),
            Some(FoodTruck::new(5, "", ""))
        );
    }

    #[test]
    fn malformed_json_is_seed_error() {
        let catalog = Catalog::in_memory();
        let err = catalog
            .import_json("{not json".as_bytes(), false, &Cancellation::none())
            .unwrap_err();
        assert!(matches!(err, CatalogError::Seed(_)));
        assert_eq!(catalog.count(), 0);
    }

    #[test]
    fn cancelled_import_stores_nothing() {
        let catalog = Catalog::in_memory();
        let cancel = Cancellation::new();
        cancel.cancel();
        let err = catalog.import_json(SEED.as_bytes(), false, &cancel).unwrap_err();
        assert!(matches!(err, CatalogError::Cancelled));
        assert_eq!(catalog.count(), 0);
    }

    #[test]
    fn import_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SEED.as_bytes()).unwrap();

        let catalog = Catalog::in_memory();
        let report = catalog
            .import_file(file.path(), false, &Cancellation::none())
            .unwrap();
        assert_eq!(report.created, 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::in_memory();
        let err = catalog
            .import_file(dir.path().join("missing.json"), false, &Cancellation::none())
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn merge_reports() {
        let mut a = ImportReport {
            created: 2,
            rejected: vec![Rejected { index: 0, reason: "x".into() }],
        };
        a.merge(ImportReport {
            created: 1,
            rejected: vec![],
        });
        assert_eq!(a.created, 3);
        assert_eq!(a.total(), 4);
    }
}
