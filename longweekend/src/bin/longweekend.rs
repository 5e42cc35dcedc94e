//! `longweekend <holidays.csv> <YYYY-MM> [--config <file.json>] [--json]`

use clap::Parser;
use longweekend::cli::{run, Args};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let stdout = std::io::stdout();
    run(&args, &mut stdout.lock())
}
