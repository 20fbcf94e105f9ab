// src/bin/cli.rs
use m365_catalog::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
