//! Connection example: Alice, aged 22, into `example.db`.

use anyhow::{Context, Result};
use std::io;

use database_tutor::sqlite::run_example;
use database_tutor::ExampleConfig;

fn main() -> Result<()> {
    env_logger::init();

    let config = ExampleConfig::db_connect();
    run_example(&config, &mut io::stdout().lock())
        .with_context(|| format!("example failed on {}", config.db_path.display()))?;
    Ok(())
}
