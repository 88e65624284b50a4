use std::io::{self, Write};

use crate::error::AppResult;

pub fn print_lines<S: AsRef<str>>(lines: &[S]) -> AppResult<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for line in lines {
        writeln!(handle, "{}", line.as_ref())?;
    }
    Ok(())
}
