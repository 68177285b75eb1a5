//! Magnitude composition for pt-BR number spelling
//!
//! Builds word phrases from integers by decomposing them into magnitude bands
//! (millions, thousands, hundreds/tens/units) and joining the bands with the
//! correct conjunctions. Sits between the lexical tables and the currency
//! phrasing in the module root.

use super::tables::{HUNDREDS, TENS, UNITS};

/// Spell an integer in [0, 999]
///
/// Returns the empty string for 0. Exactly 100 is the irregular "CEM";
/// 101-199 use "CENTO". The hundreds word and the tens/units remainder are
/// joined with " E ", as are tens and units ("CENTO E VINTE E TRÊS").
/// Values above 999 fall back to their decimal digits; the word tables only
/// cover one group.
pub(crate) fn under_thousand(n: u64) -> String {
    if n > 999 {
        return n.to_string();
    }
    if n == 0 {
        return String::new();
    }
    if n == 100 {
        return "CEM".to_string();
    }

    let mut out = String::new();
    let hundreds = n / 100;
    let remainder = n % 100;

    if hundreds > 0 {
        out.push_str(HUNDREDS[hundreds as usize]);
        if remainder > 0 {
            out.push_str(" E ");
        }
    }

    if remainder > 0 {
        if remainder < 20 {
            out.push_str(UNITS[remainder as usize]);
        } else {
            out.push_str(TENS[(remainder / 10) as usize]);
            let unit = remainder % 10;
            if unit > 0 {
                out.push_str(" E ");
                out.push_str(UNITS[unit as usize]);
            }
        }
    }

    out
}

/// Spell a full non-negative integer without any currency suffix
///
/// Composes millions, thousands and the final sub-1000 remainder left to
/// right. Returns the empty string for 0; the currency layer handles the
/// zero amount separately.
///
/// Conjunction rules between bands:
/// - after millions: " E " when the rest is a terminal group (under 1000, or
///   an exact multiple of 1000 such as 1.500.000 -> "UM MILHÃO E QUINHENTOS
///   MIL"), plain space otherwise;
/// - after thousands: " E " when the rest is under 100 or an exact multiple
///   of 100 (2.090 -> "DOIS MIL E NOVENTA"), plain space otherwise.
///
/// Values of a billion or more are outside the word tables and fall back to
/// their decimal digits, so the function is total.
pub(crate) fn integer_to_words(value: u64) -> String {
    if value >= 1_000_000_000 {
        return value.to_string();
    }
    if value == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut rest = value;

    if rest >= 1_000_000 {
        let millions = rest / 1_000_000;
        let remainder = rest % 1_000_000;

        if millions == 1 {
            out.push_str("UM MILHÃO");
        } else {
            out.push_str(&under_thousand(millions));
            out.push_str(" MILHÕES");
        }

        if remainder > 0 {
            if remainder < 1000 || remainder % 1000 == 0 {
                out.push_str(" E ");
            } else {
                out.push(' ');
            }
        }
        rest = remainder;
    }

    if rest >= 1000 {
        let thousands = rest / 1000;
        let remainder = rest % 1000;

        if thousands == 1 {
            out.push_str("MIL");
        } else {
            out.push_str(&under_thousand(thousands));
            out.push_str(" MIL");
        }

        if remainder > 0 {
            if remainder < 100 || remainder % 100 == 0 {
                out.push_str(" E ");
            } else {
                out.push(' ');
            }
        }
        rest = remainder;
    }

    if rest > 0 {
        out.push_str(&under_thousand(rest));
    }

    out.trim().to_string()
}
