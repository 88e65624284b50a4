use std::io::{self, Write};

use serde::Serialize;

use crate::error::AppResult;

pub fn print<T: Serialize>(value: &T) -> AppResult<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}
