//! Money type for representing BRL currency amounts
//!
//! Internally stores amounts in centavos (i64) to avoid floating-point
//! precision issues. Provides safe arithmetic operations and pt-BR formatting
//! ("R$ 2.090,00").

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as centavos (hundredths of a real)
///
/// Using i64 centavos avoids floating-point precision issues. The word
/// converter only covers amounts below R$ 1.000.000.000,00; callers validate
/// that bound before converting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from centavos
    ///
    /// # Examples
    /// ```
    /// use promissoria_cli::models::Money;
    /// let amount = Money::from_centavos(209_000); // R$ 2.090,00
    /// ```
    pub const fn from_centavos(centavos: i64) -> Self {
        Self(centavos)
    }

    /// Create a Money amount from whole reais
    pub const fn from_reais(reais: i64) -> Self {
        Self(reais * 100)
    }

    /// Create a Money amount from reais and centavos
    pub const fn from_reais_centavos(reais: i64, centavos: i64) -> Self {
        Self(reais * 100 + centavos)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in centavos
    pub const fn centavos(&self) -> i64 {
        self.0
    }

    /// Get the whole reais portion (truncated toward zero)
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Get the centavos portion (0-99)
    pub const fn centavos_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from a pt-BR formatted string
    ///
    /// Accepts formats: "2090", "2090,00", "2.090,00", "R$ 2.090,00",
    /// "2090.00". A lone dot followed by exactly three digits is read as a
    /// thousands separator ("2.090" is R$ 2.090,00), otherwise as a decimal
    /// point.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix("R$").unwrap_or(s).trim();
        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let centavos = if s.contains(',') {
            // pt-BR decimal format: dots are grouping, comma is the decimal mark
            let cleaned: String = s.chars().filter(|c| *c != '.').collect();
            let parts: Vec<&str> = cleaned.split(',').collect();
            if parts.len() != 2 {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }
            parse_parts(parts[0], parts[1]).ok_or_else(|| {
                MoneyParseError::InvalidFormat(s.to_string())
            })?
        } else if let Some(dot) = s.rfind('.') {
            let (integer, fraction) = (&s[..dot], &s[dot + 1..]);
            if fraction.len() == 3 && !integer.is_empty() {
                // Thousands separator: "2.090" -> 2090 reais
                let digits: String = s.chars().filter(|c| *c != '.').collect();
                digits
                    .parse::<i64>()
                    .ok()
                    .and_then(|r| r.checked_mul(100))
                    .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
            } else {
                parse_parts(integer, fraction)
                    .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
            }
        } else {
            // Integer format - whole reais
            s.parse::<i64>()
                .ok()
                .and_then(|r| r.checked_mul(100))
                .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
        };

        Ok(Self(if negative { -centavos } else { centavos }))
    }

    /// Format without the currency symbol ("2.090,00")
    pub fn format_plain(&self) -> String {
        let reais = self.reais().abs();
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{},{:02}",
            sign,
            group_thousands(reais),
            self.centavos_part()
        )
    }
}

/// Parse separated integer/fraction digit strings into centavos
fn parse_parts(integer: &str, fraction: &str) -> Option<i64> {
    let reais: i64 = if integer.is_empty() {
        0
    } else {
        integer.parse().ok()?
    };

    // Pad or truncate the fraction to 2 digits
    let centavos: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().ok()? * 10,
        _ => fraction[..2].parse().ok()?,
    };

    reais.checked_mul(100)?.checked_add(centavos)
}

/// Insert pt-BR thousands separators: 2090 -> "2.090"
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(
                f,
                "-R$ {},{:02}",
                group_thousands(self.reais().abs()),
                self.centavos_part()
            )
        } else {
            write!(
                f,
                "R$ {},{:02}",
                group_thousands(self.reais()),
                self.centavos_part()
            )
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_centavos() {
        let m = Money::from_centavos(209_050);
        assert_eq!(m.centavos(), 209_050);
        assert_eq!(m.reais(), 2090);
        assert_eq!(m.centavos_part(), 50);
    }

    #[test]
    fn test_from_reais_centavos() {
        let m = Money::from_reais_centavos(10, 50);
        assert_eq!(m.centavos(), 1050);
    }

    #[test]
    fn test_display_pt_br() {
        assert_eq!(format!("{}", Money::from_centavos(209_000)), "R$ 2.090,00");
        assert_eq!(format!("{}", Money::from_centavos(0)), "R$ 0,00");
        assert_eq!(format!("{}", Money::from_centavos(-1050)), "-R$ 10,50");
        assert_eq!(format!("{}", Money::from_centavos(5)), "R$ 0,05");
        assert_eq!(
            format!("{}", Money::from_centavos(123_456_789)),
            "R$ 1.234.567,89"
        );
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(Money::from_centavos(209_000).format_plain(), "2.090,00");
        assert_eq!(Money::from_centavos(-5).format_plain(), "-0,05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_centavos(1000);
        let b = Money::from_centavos(500);

        assert_eq!((a + b).centavos(), 1500);
        assert_eq!((a - b).centavos(), 500);
        assert_eq!((-a).centavos(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("2090").unwrap().centavos(), 209_000);
        assert_eq!(Money::parse("2090,00").unwrap().centavos(), 209_000);
        assert_eq!(Money::parse("2.090,00").unwrap().centavos(), 209_000);
        assert_eq!(Money::parse("R$ 2.090,00").unwrap().centavos(), 209_000);
        assert_eq!(Money::parse("2090.00").unwrap().centavos(), 209_000);
        assert_eq!(Money::parse("10,5").unwrap().centavos(), 1050);
        assert_eq!(Money::parse("0,05").unwrap().centavos(), 5);
        assert_eq!(Money::parse("-10,50").unwrap().centavos(), -1050);
    }

    #[test]
    fn test_parse_lone_dot_grouping() {
        // Three trailing digits after a single dot read as grouping
        assert_eq!(Money::parse("2.090").unwrap().centavos(), 209_000);
        // Anything else reads as a decimal point
        assert_eq!(Money::parse("10.5").unwrap().centavos(), 1050);
        assert_eq!(Money::parse("10.50").unwrap().centavos(), 1050);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse("R$").is_err());
        assert!(Money::parse("1,2,3").is_err());
    }

    #[test]
    fn test_parse_overflow_is_an_error() {
        // Reais values that overflow i64 centavos reject cleanly
        assert!(Money::parse("99999999999999999").is_err());
        assert!(Money::parse("99999999999999999,00").is_err());
        assert!(Money::parse("99.999.999.999.999.999,00").is_err());
        assert!(Money::parse(&format!("{}", i64::MAX)).is_err());
        // The largest whole-reais value that still fits parses
        let max_reais = i64::MAX / 100;
        assert_eq!(
            Money::parse(&max_reais.to_string()).unwrap().centavos(),
            max_reais * 100
        );
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_centavos(100),
            Money::from_centavos(200),
            Money::from_centavos(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.centavos(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_centavos(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
