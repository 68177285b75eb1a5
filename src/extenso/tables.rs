//! Lexical word tables for pt-BR number spelling
//!
//! Static data only: units/teens (0-19), tens (20-90) and hundreds (100-900).
//! Index 0 (and the unused tens slot 1) map to the empty string so the
//! composer can index directly by digit value.

/// Units and teens, indexed 0-19
pub(crate) const UNITS: [&str; 20] = [
    "",
    "UM",
    "DOIS",
    "TRÊS",
    "QUATRO",
    "CINCO",
    "SEIS",
    "SETE",
    "OITO",
    "NOVE",
    "DEZ",
    "ONZE",
    "DOZE",
    "TREZE",
    "CATORZE",
    "QUINZE",
    "DEZESSEIS",
    "DEZESSETE",
    "DEZOITO",
    "DEZENOVE",
];

/// Tens, indexed by tens digit (2-9); slots 0 and 1 are unused
pub(crate) const TENS: [&str; 10] = [
    "",
    "",
    "VINTE",
    "TRINTA",
    "QUARENTA",
    "CINQUENTA",
    "SESSENTA",
    "SETENTA",
    "OITENTA",
    "NOVENTA",
];

/// Hundreds, indexed by hundreds digit (1-9)
///
/// Index 1 is "CENTO"; the irregular "CEM" (exactly 100) is handled by the
/// composer, not the table.
pub(crate) const HUNDREDS: [&str; 10] = [
    "",
    "CENTO",
    "DUZENTOS",
    "TREZENTOS",
    "QUATROCENTOS",
    "QUINHENTOS",
    "SEISCENTOS",
    "SETECENTOS",
    "OITOCENTOS",
    "NOVECENTOS",
];
