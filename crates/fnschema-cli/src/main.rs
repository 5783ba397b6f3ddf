use anyhow::Context;
use clap::Parser;
use fnschema_config::FnschemaConfig;
use fnschema_parser::LoadOptions;

mod cli;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("fnschema error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = FnschemaConfig::load().context("failed to load fnschema configuration")?;
    let mut load: LoadOptions = config.load_options();
    load.include_tests |= cli.include_tests;
    let options = config.translate_options();

    tracing::debug!(src = %cli.src.display(), function = %cli.func, ?options, "describing function");
    let details = fnschema_translate::translate_with(&cli.src, &cli.func, &load, &options)
        .with_context(|| {
            format!(
                "failed to describe function '{}' in {}",
                cli.func,
                cli.src.display()
            )
        })?;

    output::write(&details, cli.format, &cli.output)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("FNSCHEMA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
