//! Installment splitting ("parcelamento")
//!
//! Splits a note into 1-12 monthly installments: the amount is divided in
//! centavos with the remainder spread over the earliest installments, due
//! dates advance one calendar month per installment, and each generated note
//! carries its series number and recomputed amount in words.

use chrono::{Months, NaiveDate};

use crate::error::{PromissoriaError, PromissoriaResult};
use crate::models::{Money, NoteId, PromissoryNote, MAX_INSTALLMENTS};
use crate::services::numbering::{installment_number, NoteNumberer};

/// Split an amount into `parts` values that sum back to the total
///
/// Division happens in centavos; the first `total % parts` installments get
/// one extra centavo so no value is lost or invented.
pub fn split_amount(total: Money, parts: u32) -> PromissoriaResult<Vec<Money>> {
    if parts == 0 || parts > MAX_INSTALLMENTS {
        return Err(PromissoriaError::invalid_installments(parts));
    }
    if total.is_negative() {
        return Err(PromissoriaError::Validation(
            "Cannot split a negative amount".into(),
        ));
    }

    let parts = parts as i64;
    let base = total.centavos() / parts;
    let remainder = total.centavos() % parts;

    Ok((0..parts)
        .map(|i| Money::from_centavos(base + i64::from(i < remainder)))
        .collect())
}

/// Due dates for an installment series: one per month starting at `start`
///
/// Month arithmetic clamps to the end of shorter months (Jan 31 + 1 month is
/// Feb 28/29), matching chrono's `Months` semantics.
pub fn installment_due_dates(start: NaiveDate, count: u32) -> Vec<NaiveDate> {
    (0..count)
        .map(|i| {
            start
                .checked_add_months(Months::new(i))
                // Only reachable at the far end of chrono's date range
                .unwrap_or(start)
        })
        .collect()
}

/// Generate the installment notes for a base note
///
/// Pulls one base number from the numberer; each installment is a copy of
/// the base note with its own id, split amount, advanced due date, series
/// position and "BB/CC de TT" number.
pub fn generate_installment_notes(
    base: &PromissoryNote,
    count: u32,
    numberer: &mut NoteNumberer,
) -> PromissoriaResult<Vec<PromissoryNote>> {
    let amounts = split_amount(base.amount, count)?;
    let due_dates = installment_due_dates(base.due_date, count);
    let base_number = numberer.next_base();

    let notes = amounts
        .into_iter()
        .zip(due_dates)
        .enumerate()
        .map(|(i, (amount, due_date))| {
            let current = i as u32 + 1;
            let mut note = base.clone();
            note.id = NoteId::new();
            note.number = installment_number(base_number, current, count);
            note.due_date = due_date;
            note.current_installment = current;
            note.total_installments = count;
            note.set_amount(amount);
            note
        })
        .collect();

    Ok(notes)
}
