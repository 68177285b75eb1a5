//! Core data models for promissoria-cli
//!
//! This module contains the data structures that represent the promissory
//! note domain: the note itself, BRL money amounts and typed identifiers.

pub mod ids;
pub mod money;
pub mod note;

pub use ids::{BatchId, NoteId};
pub use money::Money;
pub use note::{validate_amount, PromissoryNote, MAX_AMOUNT, MAX_INSTALLMENTS};
