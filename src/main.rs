use clap::Parser;
use std::path::Path;

use occutils_release::{
    Result,
    cli::{Args, Command},
    command,
    config::Config,
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("occutils_release")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = Args::parse();

    initialize_logger(cli_args.debug)?;

    let config = Config::load(Path::new(&cli_args.config)).await?;

    match cli_args.command {
        Command::Changelog => command::changelog::execute(&config).await,
        Command::VersionBump => command::version_bump::execute(&config).await,
    }
}
