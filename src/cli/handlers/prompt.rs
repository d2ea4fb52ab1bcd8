use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stderr and read the answer from stdin.
/// `assume_yes` (the `--yes` flag) skips the prompt.
pub fn confirm(question: &str, assume_yes: bool) -> io::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    let stdin = io::stdin();
    ask(question, &mut stdin.lock(), &mut io::stderr())
}

/// Prompt `question [y/N] ` on `out`; only `y`/`yes` (any case) confirm.
/// End of input counts as no.
pub fn ask(question: &str, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<bool> {
    write!(out, "{} [y/N] ", question)?;
    out.flush()?;
    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
