use anyhow::{Context, Result};
use std::io::{self, Write};

use database_tutor::printer::render_guide;

fn main() -> Result<()> {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_guide(&mut out).context("failed to write the study guide")?;
    out.flush()?;
    Ok(())
}
