//! Note numbering
//!
//! Generates the printed note numbers: "01 de 01" for standalone notes and
//! "01/02 de 03" (base/current of total) for installment series. The counter
//! is in-memory only, seeded at 1, and resets with the process; there is no
//! persistence guarantee.

use std::fmt::Write as _;

/// Monotonic in-memory note number generator
#[derive(Debug, Clone)]
pub struct NoteNumberer {
    next: u32,
}

impl NoteNumberer {
    /// Create a numberer seeded at 1
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Create a numberer starting at an arbitrary base number
    pub fn starting_at(base: u32) -> Self {
        Self { next: base.max(1) }
    }

    /// Peek at the number the next call will use
    pub fn peek(&self) -> u32 {
        self.next
    }

    /// Generate the next standalone note number, e.g. "02 de 02"
    pub fn next_number(&mut self) -> String {
        let n = self.next;
        self.next += 1;
        format!("{:02} de {:02}", n, n)
    }

    /// Consume the next base number for an installment series
    pub fn next_base(&mut self) -> u32 {
        let n = self.next;
        self.next += 1;
        n
    }
}

impl Default for NoteNumberer {
    fn default() -> Self {
        Self::new()
    }
}

/// Format an installment note number, e.g. base 1, installment 2 of 3 ->
/// "01/02 de 03"
pub fn installment_number(base: u32, current: u32, total: u32) -> String {
    let mut out = String::new();
    // write! to a String cannot fail
    let _ = write!(out, "{:02}/{:02} de {:02}", base, current, total);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_at_one() {
        let mut numberer = NoteNumberer::new();
        assert_eq!(numberer.next_number(), "01 de 01");
        assert_eq!(numberer.next_number(), "02 de 02");
        assert_eq!(numberer.next_number(), "03 de 03");
    }

    #[test]
    fn test_starting_at() {
        let mut numberer = NoteNumberer::starting_at(9);
        assert_eq!(numberer.next_number(), "09 de 09");
        assert_eq!(numberer.next_number(), "10 de 10");
    }

    #[test]
    fn test_starting_at_zero_clamps_to_one() {
        let numberer = NoteNumberer::starting_at(0);
        assert_eq!(numberer.peek(), 1);
    }

    #[test]
    fn test_next_base_advances() {
        let mut numberer = NoteNumberer::new();
        assert_eq!(numberer.next_base(), 1);
        assert_eq!(numberer.next_base(), 2);
    }

    #[test]
    fn test_installment_number_format() {
        assert_eq!(installment_number(1, 2, 3), "01/02 de 03");
        assert_eq!(installment_number(12, 10, 12), "12/10 de 12");
    }
}
