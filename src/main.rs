use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use league_tracker::api::state::AppState;
use league_tracker::calculate::compute_standings;
use league_tracker::config::AppConfig;

#[derive(Parser)]
#[command(name = "league-tracker")]
#[command(about = "Local league standings tracker with a server-rendered dashboard")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Compute and print the current standings table
    Standings {
        /// Output as JSON instead of a text table
        #[arg(long)]
        json: bool,
    },

    /// Load the match data and report counts without serving
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting league-tracker v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load_or_default(&PathBuf::from(&cli.config))
        .with_context(|| format!("Failed to load config from {}", cli.config))?;

    match cli.command {
        Commands::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            let addr = format!("{}:{}", config.server.host, config.server.port);
            let state = AppState::new(config)?;
            let app = league_tracker::api::build_router(state);

            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;
            tracing::info!("Dashboard: http://{}", addr);
            axum::serve(listener, app).await?;
        }

        Commands::Standings { json } => {
            config.validate()?;
            let source = config.match_source()?;
            let matches = source
                .load()
                .await
                .with_context(|| format!("Failed to load match data from {}", source))?;
            let standings = compute_standings(&config.roster(), &matches);

            if json {
                println!("{}", serde_json::to_string_pretty(&standings)?);
            } else {
                print_standings_table(&standings);
            }
        }

        Commands::Check => {
            config.validate()?;
            let source = config.match_source()?;
            let matches = source
                .load()
                .await
                .with_context(|| format!("Failed to load match data from {}", source))?;

            let played = matches.iter().filter(|m| m.played).count();
            println!("Source:   {}", source);
            println!("Matches:  {}", matches.len());
            println!("Played:   {}", played);
            println!("Upcoming: {}", matches.len() - played);
        }
    }

    Ok(())
}

fn print_standings_table(standings: &league_tracker::Standings) {
    println!(
        "{:>2}  {:<20} {:>3} {:>3} {:>3} {:>4} {:>5}  {}",
        "#", "Team", "P", "W", "L", "Pts", "Diff", "Sets"
    );
    for (rank, team) in standings.teams.iter().enumerate() {
        println!(
            "{:>2}  {:<20} {:>3} {:>3} {:>3} {:>4} {:>5}  {} / {}",
            rank + 1,
            team.name,
            team.matches,
            team.won,
            team.lost,
            team.points,
            team.signed_difference(),
            team.sets_for,
            team.sets_against,
        );
    }
}
