//! Amount-to-words conversion ("valor por extenso") for BRL amounts
//!
//! Converts monetary amounts to their uppercase Brazilian Portuguese word
//! form, as written on promissory notes: R$ 2.090,00 becomes
//! "DOIS MIL E NOVENTA REAIS".
//!
//! The conversion is a pure function over its input: no I/O, no shared
//! state, safe to call from anywhere. The documented domain is non-negative
//! amounts below R$ 1.000.000.000,00; outside it the converter still returns
//! a string but the wording is unspecified.
//!
//! Organization:
//! - [`tables`]: static word tables (units/teens, tens, hundreds);
//! - [`composer`]: sub-1000 spelling and magnitude-band composition;
//! - [`normalize`]: final cleanup pass over the composed phrase.

mod composer;
mod normalize;
mod tables;

use crate::models::Money;

/// Convert a monetary amount to its pt-BR currency word form
///
/// # Examples
/// ```
/// use promissoria_cli::extenso::amount_to_words;
/// use promissoria_cli::models::Money;
///
/// assert_eq!(
///     amount_to_words(Money::from_centavos(209_000)),
///     "DOIS MIL E NOVENTA REAIS"
/// );
/// assert_eq!(amount_to_words(Money::from_reais(1)), "UM REAL");
/// assert_eq!(
///     amount_to_words(Money::from_centavos(1)),
///     "UM CENTAVO DE REAL"
/// );
/// ```
pub fn amount_to_words(amount: Money) -> String {
    // Negative amounts are outside the documented domain; spelling the
    // absolute value keeps the function total without panicking.
    let reais = amount.reais().unsigned_abs();
    let centavos = amount.centavos_part() as u64;

    if reais == 0 && centavos == 0 {
        return "ZERO REAIS".to_string();
    }

    let integer_words = composer::integer_to_words(reais);

    let mut phrase = String::new();
    if !integer_words.is_empty() {
        phrase.push_str(&integer_words);

        // Exact multiples of a million take "DE REAIS"
        if reais >= 1_000_000 && reais % 1_000_000 == 0 {
            phrase.push_str(" DE REAIS");
        } else if reais == 1 {
            phrase.push_str(" REAL");
        } else {
            phrase.push_str(" REAIS");
        }

        if centavos > 0 {
            // The centavos clause is appended lower-cased and re-uppercased
            // by the cleanup pass; the net output is fully uppercase.
            phrase.push_str(" E ");
            phrase.push_str(&centavos_clause(centavos).to_lowercase());
        }
    } else {
        // Sub-unit amount: only centavos, distinct "DE REAL"/"DE REAIS" form
        phrase.push_str(&centavos_clause(centavos));
        phrase.push_str(if centavos == 1 { " DE REAL" } else { " DE REAIS" });
    }

    normalize::normalize(&phrase)
}

/// Spell a calendar year (1000-9999) in words
///
/// Shares the word tables and the thousands conjunction rule with the
/// amount converter; years never need millions. Out-of-range years degrade
/// gracefully to their decimal form.
///
/// # Examples
/// ```
/// use promissoria_cli::extenso::year_to_words;
///
/// assert_eq!(year_to_words(2026), "DOIS MIL E VINTE E SEIS");
/// assert_eq!(year_to_words(1999), "MIL NOVECENTOS E NOVENTA E NOVE");
/// ```
pub fn year_to_words(year: i32) -> String {
    if !(1000..=9999).contains(&year) {
        return year.to_string();
    }

    let words = composer::integer_to_words(year as u64);
    normalize::normalize(&words)
}

/// Spell the centavos value with its plural-aware noun
fn centavos_clause(centavos: u64) -> String {
    let mut clause = composer::under_thousand(centavos);
    clause.push_str(if centavos == 1 { " CENTAVO" } else { " CENTAVOS" });
    clause
}
