//! Export module for promissoria-cli
//!
//! Produces the artifacts a run can write to disk:
//! - HTML: self-contained printable document (A4 pages, print CSS)
//! - JSON: schema-versioned machine-readable batch export
//! - CSV: installment schedule for spreadsheets

pub mod csv;
pub mod html;
pub mod json;
pub mod layout;

pub use csv::export_schedule_csv;
pub use html::{document_html, note_html, page_html, RenderOptions};
pub use json::{export_notes_json, NoteBatchExport, EXPORT_SCHEMA_VERSION};
