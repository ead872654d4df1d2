use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use assembly_cost_engine::api::{AppState, EstimateRequest, create_router};
use assembly_cost_engine::calculation::build_estimate;
use assembly_cost_engine::config::ConfigLoader;
use assembly_cost_engine::holiday::GermanHolidayCalendar;
use assembly_cost_engine::report::{export_xlsx, render_table, round_money};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
struct Args {
    /// Directory holding `rates.yaml` and `estimate.yaml`.
    #[clap(long, default_value = "config/default", env = "ASSEMBLY_COST_CONFIG", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API.
    Serve {
        /// Address to listen on.
        #[clap(long, default_value = "127.0.0.1:3000", env = "ASSEMBLY_COST_BIND")]
        bind: String,
    },

    /// Calculate an estimate from a JSON request file and print it.
    Estimate {
        /// Path to the estimate request.
        #[clap(long)]
        input: PathBuf,

        /// Also write the spreadsheet to this path.
        #[clap(long)]
        xlsx: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = ConfigLoader::load(&args.config)
        .with_context(|| format!("failed to load configuration from `{}`", args.config.display()))?;

    match args.command {
        Command::Serve { bind } => {
            let listener = TcpListener::bind(&bind)
                .await
                .with_context(|| format!("failed to bind `{}`", bind))?;
            info!(bind = %bind, "Listening");
            axum::serve(listener, create_router(AppState::new(config))).await?;
        }

        Command::Estimate { input, xlsx } => {
            let body = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read `{}`", input.display()))?;
            let request: EstimateRequest = serde_json::from_str(&body)
                .with_context(|| format!("failed to parse `{}`", input.display()))?;

            let planned = request.plan(&config, &GermanHolidayCalendar)?;
            let estimate =
                build_estimate(planned.project, &planned.region, &planned.days, &planned.rates);

            println!("{}", render_table(&estimate));
            println!("Total: {:.2} €", round_money(estimate.summary.total()));

            if let Some(path) = xlsx {
                let bytes = export_xlsx(&estimate)?;
                std::fs::write(&path, bytes)
                    .with_context(|| format!("failed to write `{}`", path.display()))?;
                info!(path = %path.display(), "Spreadsheet written");
            }
        }
    }

    Ok(())
}
