//! Promissory note data model
//!
//! A note is a self-contained record of everything the printed document
//! needs: parties, amounts (numeric and in words), dates and installment
//! position. The amount in words is kept in sync with the numeric amount
//! whenever it changes through [`PromissoryNote::set_amount`].

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PromissoriaError, PromissoriaResult};
use crate::extenso;
use crate::models::{Money, NoteId};

/// Maximum number of installments a note can be split into
pub const MAX_INSTALLMENTS: u32 = 12;

/// Largest amount the word converter covers (exclusive bound)
pub const MAX_AMOUNT: Money = Money::from_reais(1_000_000_000);

/// Check that an amount is one a note can carry: non-negative and inside
/// the word converter's domain
pub fn validate_amount(amount: Money) -> PromissoriaResult<()> {
    if amount.is_negative() {
        return Err(PromissoriaError::Validation(
            "Amount cannot be negative".into(),
        ));
    }
    if amount >= MAX_AMOUNT {
        return Err(PromissoriaError::Validation(format!(
            "Amount {} is above the supported maximum of {}",
            amount, MAX_AMOUNT
        )));
    }
    Ok(())
}

/// A promissory note ("nota promissória")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromissoryNote {
    /// Unique identifier
    pub id: NoteId,

    /// Printed note number, e.g. "01 de 01" or "01/02 de 03"
    pub number: String,

    /// Due date ("vencimento")
    pub due_date: NaiveDate,

    /// Face value
    pub amount: Money,

    /// Face value spelled out, e.g. "DOIS MIL E NOVENTA REAIS"
    pub amount_in_words: String,

    /// Beneficiary (creditor) name
    pub beneficiary_name: String,

    /// Beneficiary CNPJ, formatted "00.000.000/0000-00"
    pub beneficiary_cnpj: String,

    /// Emitter (debtor) full name
    pub emitter_name: String,

    /// Emitter CPF, formatted "000.000.000-00"
    pub emitter_cpf: String,

    /// Emitter full address
    pub emitter_address: String,

    /// City where the note is issued
    pub city: String,

    /// State (UF), two letters
    pub state: String,

    /// Payment location, e.g. "Indaial/SC"
    pub payment_location: String,

    /// Issue date ("data de emissão")
    pub issue_date: NaiveDate,

    /// Position of this note in an installment series (1-based)
    pub current_installment: u32,

    /// Total notes in the installment series
    pub total_installments: u32,
}

impl PromissoryNote {
    /// Create a note with the given amount and due date, other fields at
    /// their defaults
    pub fn new(amount: Money, due_date: NaiveDate) -> Self {
        let mut note = Self {
            due_date,
            ..Self::default()
        };
        note.set_amount(amount);
        note
    }

    /// Set the amount, recomputing the spelled-out form
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.amount_in_words = extenso::amount_to_words(amount);
    }

    /// Validate the note before rendering or export
    ///
    /// Checks the fields the document cannot be printed without, that the
    /// amount is non-negative and within the converter's domain, and that
    /// the installment position is consistent.
    pub fn validate(&self) -> PromissoriaResult<()> {
        validate_amount(self.amount)?;
        if self.beneficiary_name.trim().is_empty() {
            return Err(PromissoriaError::Validation(
                "Beneficiary name cannot be empty".into(),
            ));
        }
        if self.emitter_name.trim().is_empty() {
            return Err(PromissoriaError::Validation(
                "Emitter name cannot be empty".into(),
            ));
        }
        if self.total_installments == 0 || self.total_installments > MAX_INSTALLMENTS {
            return Err(PromissoriaError::invalid_installments(
                self.total_installments,
            ));
        }
        if self.current_installment == 0 || self.current_installment > self.total_installments {
            return Err(PromissoriaError::Validation(format!(
                "Installment {} of {} is out of range",
                self.current_installment, self.total_installments
            )));
        }
        Ok(())
    }
}

impl Default for PromissoryNote {
    /// The editor's default note: R$ 2.090,00 due today, single installment,
    /// placeholder parties
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self {
            id: NoteId::new(),
            number: "01 de 01".to_string(),
            due_date: today,
            amount: Money::from_reais(2090),
            amount_in_words: "DOIS MIL E NOVENTA REAIS".to_string(),
            beneficiary_name: "Nome do Beneficiário".to_string(),
            beneficiary_cnpj: "00.000.000/0000-00".to_string(),
            emitter_name: "Nome Completo do Emitente".to_string(),
            emitter_cpf: "000.000.000-00".to_string(),
            emitter_address: "Endereço completo do emitente".to_string(),
            city: "Indaial".to_string(),
            state: "SC".to_string(),
            payment_location: "Indaial/SC".to_string(),
            issue_date: today,
            current_installment: 1,
            total_installments: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_note_words_match_amount() {
        let note = PromissoryNote::default();
        assert_eq!(note.amount, Money::from_reais(2090));
        assert_eq!(
            note.amount_in_words,
            extenso::amount_to_words(note.amount)
        );
    }

    #[test]
    fn test_new_computes_words() {
        let due = NaiveDate::from_ymd_opt(2026, 9, 30).unwrap();
        let note = PromissoryNote::new(Money::from_reais(100), due);
        assert_eq!(note.due_date, due);
        assert_eq!(note.amount_in_words, "CEM REAIS");
    }

    #[test]
    fn test_set_amount_recomputes_words() {
        let mut note = PromissoryNote::default();
        note.set_amount(Money::from_reais(1));
        assert_eq!(note.amount_in_words, "UM REAL");
    }

    #[test]
    fn test_validate_amount_bounds() {
        assert!(validate_amount(Money::zero()).is_ok());
        assert!(validate_amount(Money::from_centavos(99_999_999_999)).is_ok());
        assert!(validate_amount(Money::from_centavos(-1)).is_err());
        assert!(validate_amount(MAX_AMOUNT).is_err());
    }

    #[test]
    fn test_validate_default_passes() {
        assert!(PromissoryNote::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let mut note = PromissoryNote::default();
        note.amount = Money::from_centavos(-1);
        assert!(note.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_domain_amount() {
        let mut note = PromissoryNote::default();
        note.amount = MAX_AMOUNT;
        assert!(note.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_installments() {
        let mut note = PromissoryNote::default();
        note.total_installments = 13;
        assert!(note.validate().is_err());

        note.total_installments = 3;
        note.current_installment = 4;
        assert!(note.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_parties() {
        let mut note = PromissoryNote::default();
        note.beneficiary_name = "  ".to_string();
        assert!(note.validate().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let note = PromissoryNote::default();
        let json = serde_json::to_string(&note).unwrap();
        let back: PromissoryNote = serde_json::from_str(&json).unwrap();
        assert_eq!(note, back);
    }
}
