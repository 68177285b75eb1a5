//! Note display formatting
//!
//! Formats notes for terminal output: a plain-text preview of the printed
//! document and a tabular installment schedule.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::dates;
use crate::models::PromissoryNote;

/// Format a plain-text preview of a note, laid out like the printed document
pub fn format_note_preview(note: &PromissoryNote) -> String {
    let mut output = String::new();
    let width = 72;

    output.push_str(&format!("{:^width$}\n", "NOTA PROMISSÓRIA", width = width));
    output.push_str(&"=".repeat(width));
    output.push('\n');

    output.push_str(&format!(
        "Nº: {:<30} Vencimento: {}\n",
        note.number,
        dates::short_date(note.due_date)
    ));
    output.push_str(&format!("{:>width$}\n", format!("Valor: {}", note.amount), width = width));
    output.push('\n');

    output.push_str(&format!(
        "{}, pagarei por esta nota promissória à {}, CNPJ n° {}, ou à sua \
         ordem, a quantia de {}, em moeda corrente nacional.\n",
        dates::extended_date(note.due_date),
        note.beneficiary_name,
        note.beneficiary_cnpj,
        note.amount_in_words
    ));
    output.push('\n');
    output.push_str(&format!("Pagável em {}.\n", note.payment_location));
    output.push('\n');

    output.push_str("EMITENTE\n");
    output.push_str(&format!("  Nome:     {}\n", note.emitter_name));
    output.push_str(&format!("  CPF:      {}\n", note.emitter_cpf));
    output.push_str(&format!("  Endereço: {}\n", note.emitter_address));
    output.push('\n');

    output.push_str(&format!(
        "{}, {}.\n",
        note.city,
        dates::long_date(note.issue_date)
    ));
    output.push('\n');

    output.push_str(&format!("{}\n", "_".repeat(width * 3 / 5)));
    output.push_str(&format!("{}\n", note.emitter_name.to_uppercase()));

    output
}

/// One row of the installment schedule table
#[derive(Tabled)]
struct ScheduleRow {
    #[tabled(rename = "Parcela")]
    installment: String,
    #[tabled(rename = "Número")]
    number: String,
    #[tabled(rename = "Vencimento")]
    due_date: String,
    #[tabled(rename = "Valor")]
    amount: String,
}

/// Format an installment series as a table with a total line
pub fn format_schedule(notes: &[PromissoryNote]) -> String {
    if notes.is_empty() {
        return "No installments generated.\n".to_string();
    }

    let rows: Vec<ScheduleRow> = notes
        .iter()
        .map(|note| ScheduleRow {
            installment: format!("{}/{}", note.current_installment, note.total_installments),
            number: note.number.clone(),
            due_date: dates::short_date(note.due_date),
            amount: note.amount.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());

    let total: crate::models::Money = notes.iter().map(|n| n.amount).sum();
    format!("{}\nTotal: {}\n", table, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::{generate_installment_notes, NoteNumberer};
    use chrono::NaiveDate;

    fn sample_note() -> PromissoryNote {
        let mut note = PromissoryNote::default();
        note.due_date = NaiveDate::from_ymd_opt(2026, 9, 30).unwrap();
        note.issue_date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        note.set_amount(Money::from_reais(2090));
        note
    }

    #[test]
    fn test_preview_contains_document_fields() {
        let note = sample_note();
        let preview = format_note_preview(&note);

        assert!(preview.contains("NOTA PROMISSÓRIA"));
        assert!(preview.contains("01 de 01"));
        assert!(preview.contains("30/09/2026"));
        assert!(preview.contains("R$ 2.090,00"));
        assert!(preview.contains("DOIS MIL E NOVENTA REAIS"));
        assert!(preview.contains("Aos 30 dias do mês de setembro"));
        assert!(preview.contains("30 de agosto de 2026"));
        assert!(preview.contains(&note.emitter_name.to_uppercase()));
    }

    #[test]
    fn test_schedule_empty() {
        assert!(format_schedule(&[]).contains("No installments"));
    }

    #[test]
    fn test_schedule_rows_and_total() {
        let mut numberer = NoteNumberer::new();
        let notes = generate_installment_notes(&sample_note(), 2, &mut numberer).unwrap();
        let table = format_schedule(&notes);

        assert!(table.contains("01/01 de 02"));
        assert!(table.contains("01/02 de 02"));
        assert!(table.contains("R$ 1.045,00"));
        assert!(table.contains("Total: R$ 2.090,00"));
    }
}
