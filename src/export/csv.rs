//! CSV export functionality
//!
//! Exports an installment schedule to CSV: one row per note with its number,
//! series position, due date and amount (numeric and in words).

use std::io::Write;

use crate::dates;
use crate::error::{PromissoriaError, PromissoriaResult};
use crate::models::PromissoryNote;

/// Export notes as a CSV schedule
pub fn export_schedule_csv<W: Write>(
    notes: &[PromissoryNote],
    writer: &mut W,
) -> PromissoriaResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "Número",
            "Parcela",
            "Vencimento",
            "Valor",
            "Valor por Extenso",
        ])
        .map_err(|e| PromissoriaError::Export(e.to_string()))?;

    for note in notes {
        csv_writer
            .write_record([
                note.number.as_str(),
                &format!("{}/{}", note.current_installment, note.total_installments),
                &dates::short_date(note.due_date),
                &note.amount.format_plain(),
                note.amount_in_words.as_str(),
            ])
            .map_err(|e| PromissoriaError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| PromissoriaError::Export(e.to_string()))?;

    Ok(())
}
