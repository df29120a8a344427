//! Run the query example: Bob, aged 21, into `test.db`.
//!
//! Every run appends the same row again.

use anyhow::{Context, Result};
use std::io;

use database_tutor::sqlite::run_example;
use database_tutor::ExampleConfig;

fn main() -> Result<()> {
    env_logger::init();

    let config = ExampleConfig::mini_sqlite_query();
    run_example(&config, &mut io::stdout().lock())
        .with_context(|| format!("example failed on {}", config.db_path.display()))?;
    Ok(())
}
