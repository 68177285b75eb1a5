//! pt-BR date formatting for note documents
//!
//! Three presentations are used on the printed note:
//! - the issue line: "30 de agosto de 2026";
//! - the due-date header: "30/08/2026";
//! - the body opening: "Aos 30 dias do mês de agosto do ano de DOIS MIL E
//!   VINTE E SEIS", with the year spelled out.
//!
//! Dates are parsed once at the CLI boundary into `NaiveDate`, so these
//! formatters are total over their input.

use chrono::{Datelike, NaiveDate};

use crate::extenso;

/// Lowercase pt-BR month names, indexed by month number - 1
const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Month name for a date
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// "30 de agosto de 2026" (no zero padding on the day)
pub fn long_date(date: NaiveDate) -> String {
    format!("{} de {} de {}", date.day(), month_name(date), date.year())
}

/// "30/08/2026"
pub fn short_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// "Aos 30 dias do mês de agosto do ano de DOIS MIL E VINTE E SEIS"
///
/// The year is spelled out via [`extenso::year_to_words`]; years outside
/// 1000-9999 fall back to digits there.
pub fn extended_date(date: NaiveDate) -> String {
    format!(
        "Aos {} dias do mês de {} do ano de {}",
        date.day(),
        month_name(date),
        extenso::year_to_words(date.year())
    )
}
