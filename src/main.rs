use std::io;

use anyhow::{Context, Result};
use heapsort::Config;

fn main() -> Result<()> {
    let config = Config::default();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    heapsort::run(stdin.lock(), &mut stdout, &config).context("heapsort failed")?;
    Ok(())
}
