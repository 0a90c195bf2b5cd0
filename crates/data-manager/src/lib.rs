//! Data manager crate for freq-charts
//! Loads JSON documents and aggregates them into frequency tables.

pub mod aggregation;
pub mod loader;

pub use aggregation::aggregate;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

use freq_charts_shared::{FrequencyTable, Result};

/// Metadata about one completed aggregation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregateMetadata {
    pub document_count: usize,
    pub label_count: usize,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

/// Handle to the result of one batch aggregation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregateHandle {
    pub id: Uuid,
    pub metadata: AggregateMetadata,
    pub table: FrequencyTable,
}

/// Coordinates file accumulation and batch aggregation.
///
/// A new selection extends the accumulated list; processing always runs
/// over the full list; there is no incremental aggregation and no
/// mid-batch cancellation. A failed batch abandons the current result and
/// resets to the pre-upload empty state.
#[derive(Default)]
pub struct DataManager {
    files: Vec<PathBuf>,
    current: Option<AggregateHandle>,
}

impl DataManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the accumulated file list.
    pub fn add_files<I>(&mut self, paths: I)
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.files.extend(paths);
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Forget both the file list and the current result.
    pub fn clear(&mut self) {
        self.files.clear();
        self.current = None;
    }

    /// The most recent successful aggregation, if any.
    pub fn current(&self) -> Option<&AggregateHandle> {
        self.current.as_ref()
    }

    /// Load the accumulated files and aggregate them.
    ///
    /// An empty file list is a silent no-op that leaves any existing
    /// result in place. A load or parse failure clears everything and
    /// propagates the error.
    pub async fn process_batch(&mut self) -> Result<Option<&AggregateHandle>> {
        if self.files.is_empty() {
            return Ok(self.current.as_ref());
        }

        let documents = match loader::load_batch(&self.files).await {
            Ok(documents) => documents,
            Err(error) => {
                log::error!("batch aggregation failed: {error}");
                self.clear();
                return Err(error);
            }
        };

        let table = aggregation::aggregate(&documents);
        log::info!(
            "aggregated {} documents into {} labels (total {})",
            documents.len(),
            table.len(),
            table.total()
        );

        self.current = Some(AggregateHandle {
            id: Uuid::new_v4(),
            metadata: AggregateMetadata {
                document_count: documents.len(),
                label_count: table.len(),
                total: table.total(),
                created_at: Utc::now(),
            },
            table,
        });
        Ok(self.current.as_ref())
    }
}
