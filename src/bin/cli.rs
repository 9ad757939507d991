// src/bin/cli.rs
use sillok_crawler::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _guard = log::init();

    cli::run()?;
    Ok(())
}
