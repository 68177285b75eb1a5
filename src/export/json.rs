//! JSON export functionality
//!
//! Exports a batch of generated notes to JSON with schema versioning, so
//! other tools can consume a run's output.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{PromissoriaError, PromissoriaResult};
use crate::models::{BatchId, Money, PromissoryNote};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A batch of notes exported together
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteBatchExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Batch identifier
    pub batch_id: BatchId,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The exported notes
    pub notes: Vec<PromissoryNote>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Number of notes in the batch
    pub note_count: usize,

    /// Sum of all note amounts, in centavos
    pub total_amount_centavos: i64,

    /// Earliest due date in the batch
    pub earliest_due_date: Option<NaiveDate>,

    /// Latest due date in the batch
    pub latest_due_date: Option<NaiveDate>,
}

impl NoteBatchExport {
    /// Create a batch export from a set of notes
    pub fn from_notes(notes: &[PromissoryNote]) -> Self {
        let total: Money = notes.iter().map(|n| n.amount).sum();
        let metadata = ExportMetadata {
            note_count: notes.len(),
            total_amount_centavos: total.centavos(),
            earliest_due_date: notes.iter().map(|n| n.due_date).min(),
            latest_due_date: notes.iter().map(|n| n.due_date).max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            batch_id: BatchId::new(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            notes: notes.to_vec(),
            metadata,
        }
    }
}

/// Write a batch of notes as pretty-printed JSON
pub fn export_notes_json<W: Write>(notes: &[PromissoryNote], writer: &mut W) -> PromissoriaResult<()> {
    let export = NoteBatchExport::from_notes(notes);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| PromissoriaError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PromissoriaError::Export(e.to_string()))?;
    Ok(())
}
