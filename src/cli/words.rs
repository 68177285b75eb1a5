//! The `words` command: amount to words on stdout

use crate::error::{PromissoriaError, PromissoriaResult};
use crate::extenso;
use crate::models::{validate_amount, Money};

/// Handle `promissoria words <AMOUNT>`
pub fn handle_words_command(amount: &str) -> PromissoriaResult<()> {
    let money =
        Money::parse(amount).map_err(|_| PromissoriaError::invalid_amount(amount))?;
    validate_amount(money)?;

    println!("{}", extenso::amount_to_words(money));
    Ok(())
}
