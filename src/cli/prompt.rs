//! Interactive yes/no confirmation

use std::io::{self, BufRead, Write};

use crate::error::CashbookResult;

/// Ask `question` on `output` and read one answer line from `input`
///
/// Only `y`/`yes` (any case) confirms; anything else, including end of
/// input, declines.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> CashbookResult<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// [`confirm`] on the process's stdin and stdout
pub fn confirm_stdin(question: &str) -> CashbookResult<bool> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    confirm(&mut stdin.lock(), &mut stdout.lock(), question)
}
