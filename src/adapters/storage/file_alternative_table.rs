//! File-based Alternative Table Adapter
//!
//! Stores the catalog as a YAML list of rows with named columns:
//!
//! ```yaml
//! - no: 1
//!   vendor: DigitalOcean
//!   plan: Basic Droplet
//!   cpu_level: 2
//!   ram_level: 3
//!   diskio_level: 3
//!   price_level: 2
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::atomic_write::{read_optional, write_atomic};
use crate::domain::catalog::{Alternative, CriterionLevels};
use crate::domain::foundation::AlternativeId;
use crate::ports::{AlternativeTable, StorageError};

/// One stored row. Every column is optional so that half-filled rows can
/// be read and skipped instead of failing the whole table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredRow {
    #[serde(default)]
    no: Option<u32>,
    #[serde(default)]
    vendor: Option<String>,
    #[serde(default)]
    plan: Option<String>,
    #[serde(default)]
    cpu_level: Option<i64>,
    #[serde(default)]
    ram_level: Option<i64>,
    #[serde(default)]
    diskio_level: Option<i64>,
    #[serde(default)]
    price_level: Option<i64>,
}

impl StoredRow {
    fn has_vendor(&self) -> bool {
        self.vendor.as_deref().is_some_and(|v| !v.trim().is_empty())
    }

    fn into_alternative(self, row: usize, id: AlternativeId) -> Result<Alternative, StorageError> {
        let level = |value: Option<i64>, column: &str| {
            value.ok_or_else(|| StorageError::corrupt_row(row, format!("missing {}", column)))
        };

        let levels = CriterionLevels::from_raw(
            level(self.cpu_level, "cpu_level")?,
            level(self.ram_level, "ram_level")?,
            level(self.diskio_level, "diskio_level")?,
            level(self.price_level, "price_level")?,
        )
        .map_err(|e| StorageError::corrupt_row(row, e.to_string()))?;

        Ok(Alternative {
            id,
            vendor: self.vendor.unwrap_or_default().trim().to_string(),
            plan: self.plan.unwrap_or_default().trim().to_string(),
            levels,
        })
    }
}

impl From<&Alternative> for StoredRow {
    fn from(alternative: &Alternative) -> Self {
        Self {
            no: Some(alternative.id.value()),
            vendor: Some(alternative.vendor.clone()),
            plan: Some(alternative.plan.clone()),
            cpu_level: Some(i64::from(alternative.levels.cpu.value())),
            ram_level: Some(i64::from(alternative.levels.ram.value())),
            diskio_level: Some(i64::from(alternative.levels.disk_io.value())),
            price_level: Some(i64::from(alternative.levels.price.value())),
        }
    }
}

/// YAML file holding the alternative table
#[derive(Debug, Clone)]
pub struct FileAlternativeTable {
    path: PathBuf,
}

impl FileAlternativeTable {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AlternativeTable for FileAlternativeTable {
    async fn read_rows(&self) -> Result<Vec<Alternative>, StorageError> {
        let Some(yaml) = read_optional(&self.path).await? else {
            debug!(path = %self.path.display(), "Alternative table missing, starting empty");
            return Ok(Vec::new());
        };

        if yaml.trim().is_empty() {
            return Ok(Vec::new());
        }

        let stored: Vec<StoredRow> = serde_yaml::from_str(&yaml)
            .map_err(|e| StorageError::Deserialization(e.to_string()))?;

        let mut rows = Vec::with_capacity(stored.len());
        for (index, row) in stored.into_iter().enumerate() {
            let row_number = index + 1;
            if !row.has_vendor() {
                warn!(row = row_number, "Skipping alternative row without vendor");
                continue;
            }
            let id = AlternativeId::from_position(rows.len());
            rows.push(row.into_alternative(row_number, id)?);
        }

        debug!(path = %self.path.display(), count = rows.len(), "Alternative table read");
        Ok(rows)
    }

    async fn write_rows(&self, rows: &[Alternative]) -> Result<(), StorageError> {
        let stored: Vec<StoredRow> = rows.iter().map(StoredRow::from).collect();
        let yaml = serde_yaml::to_string(&stored)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        write_atomic(&self.path, yaml.as_bytes()).await?;
        debug!(path = %self.path.display(), count = rows.len(), "Alternative table written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{AlternativeDraft, Catalog};
    use tempfile::TempDir;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        for (vendor, plan, cpu) in [("DigitalOcean", "Basic", 2), ("Vultr", "HF", 4)] {
            let levels = CriterionLevels::from_raw(cpu, 3, 3, 2).unwrap();
            catalog.add(AlternativeDraft::new(vendor, plan, levels).unwrap());
        }
        catalog
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let table = FileAlternativeTable::new(dir.path().join("alternatives.yaml"));

        assert!(table.read_rows().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn write_then_read_preserves_rows() {
        let dir = TempDir::new().unwrap();
        let table = FileAlternativeTable::new(dir.path().join("alternatives.yaml"));
        let catalog = sample_catalog();

        table.write_rows(catalog.alternatives()).await.unwrap();
        let rows = table.read_rows().await.unwrap();

        assert_eq!(rows, catalog.alternatives());
    }

    #[tokio::test]
    async fn written_file_uses_named_columns() {
        let dir = TempDir::new().unwrap();
        let table = FileAlternativeTable::new(dir.path().join("alternatives.yaml"));

        table.write_rows(sample_catalog().alternatives()).await.unwrap();
        let yaml = tokio::fs::read_to_string(table.path()).await.unwrap();

        for column in ["no:", "vendor:", "plan:", "cpu_level:", "ram_level:", "diskio_level:", "price_level:"] {
            assert!(yaml.contains(column), "missing column {}", column);
        }
    }

    #[tokio::test]
    async fn rows_without_vendor_are_skipped_and_ids_stay_dense() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("alternatives.yaml");
        tokio::fs::write(
            &path,
            r#"
- no: 1
  vendor: Linode
  plan: Nanode
  cpu_level: 1
  ram_level: 1
  diskio_level: 2
  price_level: 1
- no: 2
  vendor: "   "
- no: 3
- no: 7
  vendor: Hetzner
  plan: CX22
  cpu_level: 2
  ram_level: 3
  diskio_level: 3
  price_level: 1
"#,
        )
        .await
        .unwrap();

        let rows = FileAlternativeTable::new(&path).read_rows().await.unwrap();

        let ids: Vec<u32> = rows.iter().map(|a| a.id.value()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(rows[1].vendor, "Hetzner");
    }

    #[tokio::test]
    async fn out_of_range_level_is_corrupt_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("alternatives.yaml");
        tokio::fs::write(
            &path,
            "- vendor: Bad\n  plan: x\n  cpu_level: 6\n  ram_level: 1\n  diskio_level: 1\n  price_level: 1\n",
        )
        .await
        .unwrap();

        let err = FileAlternativeTable::new(&path).read_rows().await.unwrap_err();
        assert!(matches!(err, StorageError::CorruptRow { row: 1, .. }));
    }

    #[tokio::test]
    async fn missing_level_is_corrupt_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("alternatives.yaml");
        tokio::fs::write(&path, "- vendor: Half\n  cpu_level: 2\n")
            .await
            .unwrap();

        let err = FileAlternativeTable::new(&path).read_rows().await.unwrap_err();
        match err {
            StorageError::CorruptRow { reason, .. } => assert!(reason.contains("ram_level")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_yaml_is_deserialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("alternatives.yaml");
        tokio::fs::write(&path, "vendor: [unclosed").await.unwrap();

        let err = FileAlternativeTable::new(&path).read_rows().await.unwrap_err();
        assert!(matches!(err, StorageError::Deserialization(_)));
    }
}
