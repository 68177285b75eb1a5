//! Service layer for promissoria-cli
//!
//! Business logic on top of the data models: installment splitting and
//! note numbering.

pub mod installment;
pub mod numbering;

pub use installment::{generate_installment_notes, installment_due_dates, split_amount};
pub use numbering::{installment_number, NoteNumberer};
