//! Shared note field arguments
//!
//! Every command that builds a note accepts the same set of overrides; the
//! gaps are filled from the user's settings and the model defaults.

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::error::{PromissoriaError, PromissoriaResult};
use crate::models::{validate_amount, Money, PromissoryNote};

/// Note fields accepted on the command line
#[derive(Args, Debug, Clone, Default)]
pub struct NoteArgs {
    /// Face value, e.g. "2090,00" or "R$ 2.090,00"
    #[arg(short, long)]
    pub amount: Option<String>,

    /// Due date (YYYY-MM-DD)
    #[arg(short, long)]
    pub due_date: Option<NaiveDate>,

    /// Issue date (YYYY-MM-DD)
    #[arg(long)]
    pub issue_date: Option<NaiveDate>,

    /// Printed note number, e.g. "01 de 01"
    #[arg(long)]
    pub number: Option<String>,

    /// Beneficiary (creditor) name
    #[arg(long)]
    pub beneficiary: Option<String>,

    /// Beneficiary CNPJ
    #[arg(long)]
    pub cnpj: Option<String>,

    /// Emitter (debtor) full name
    #[arg(long)]
    pub emitter: Option<String>,

    /// Emitter CPF
    #[arg(long)]
    pub cpf: Option<String>,

    /// Emitter full address
    #[arg(long)]
    pub address: Option<String>,

    /// Issue city
    #[arg(long)]
    pub city: Option<String>,

    /// State (UF)
    #[arg(long)]
    pub state: Option<String>,

    /// Payment location, e.g. "Indaial/SC"
    #[arg(long)]
    pub payment_location: Option<String>,
}

impl NoteArgs {
    /// Build a validated note from these arguments
    ///
    /// Precedence per field: command-line override, then settings default,
    /// then the model default.
    pub fn build_note(&self, settings: &Settings) -> PromissoriaResult<PromissoryNote> {
        let mut note = PromissoryNote {
            beneficiary_name: settings.default_beneficiary_name.clone(),
            beneficiary_cnpj: settings.default_beneficiary_cnpj.clone(),
            city: settings.default_city.clone(),
            state: settings.default_state.clone(),
            payment_location: settings.default_payment_location.clone(),
            ..PromissoryNote::default()
        };

        if let Some(amount) = &self.amount {
            let parsed = Money::parse(amount)
                .map_err(|_| PromissoriaError::invalid_amount(amount))?;
            // Range check up front so the word conversion only ever sees
            // in-domain amounts
            validate_amount(parsed)?;
            note.set_amount(parsed);
        }
        if let Some(due_date) = self.due_date {
            note.due_date = due_date;
        }
        if let Some(issue_date) = self.issue_date {
            note.issue_date = issue_date;
        }
        if let Some(number) = &self.number {
            note.number = number.clone();
        }
        if let Some(beneficiary) = &self.beneficiary {
            note.beneficiary_name = beneficiary.clone();
        }
        if let Some(cnpj) = &self.cnpj {
            note.beneficiary_cnpj = cnpj.clone();
        }
        if let Some(emitter) = &self.emitter {
            note.emitter_name = emitter.clone();
        }
        if let Some(cpf) = &self.cpf {
            note.emitter_cpf = cpf.clone();
        }
        if let Some(address) = &self.address {
            note.emitter_address = address.clone();
        }
        if let Some(city) = &self.city {
            note.city = city.clone();
        }
        if let Some(state) = &self.state {
            note.state = state.clone();
        }
        if let Some(payment_location) = &self.payment_location {
            note.payment_location = payment_location.clone();
        }

        note.validate()?;
        Ok(note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_come_from_settings() {
        let mut settings = Settings::default();
        settings.default_city = "Blumenau".to_string();

        let note = NoteArgs::default().build_note(&settings).unwrap();
        assert_eq!(note.city, "Blumenau");
        assert_eq!(note.amount, Money::from_reais(2090));
    }

    #[test]
    fn test_overrides_win() {
        let args = NoteArgs {
            amount: Some("R$ 1.500,50".to_string()),
            city: Some("Itajaí".to_string()),
            ..NoteArgs::default()
        };

        let note = args.build_note(&Settings::default()).unwrap();
        assert_eq!(note.amount, Money::from_centavos(150_050));
        assert_eq!(
            note.amount_in_words,
            "MIL E QUINHENTOS REAIS E CINQUENTA CENTAVOS"
        );
        assert_eq!(note.city, "Itajaí");
    }

    #[test]
    fn test_bad_amount_is_rejected() {
        let args = NoteArgs {
            amount: Some("abc".to_string()),
            ..NoteArgs::default()
        };
        let err = args.build_note(&Settings::default()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_out_of_domain_amount_is_rejected() {
        let args = NoteArgs {
            amount: Some("1000000000,00".to_string()),
            ..NoteArgs::default()
        };
        let err = args.build_note(&Settings::default()).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("supported maximum"));
    }
}
