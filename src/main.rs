use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use nowplaying_api::{server, Config, PlaybackStatusHandler, SpotifyConnector};

#[derive(Parser)]
#[command(name = "nowplaying-api")]
#[command(about = "Serve your current or last played Spotify track as JSON")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP endpoint
    Serve {
        /// Address to listen on (or set BIND_ADDR env var)
        #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
    },

    /// Print the current playback summary once and exit
    NowPlaying,

    /// Show setup guide
    Setup,
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { bind } => {
            serve(bind).await?;
        }
        Commands::NowPlaying => {
            now_playing().await?;
        }
        Commands::Setup => {
            show_setup_guide();
        }
    }

    Ok(())
}

fn load_config() -> Result<Config> {
    let config = Config::from_env().context("Failed to load configuration")?;

    let missing = config.get_missing_config();
    if !missing.is_empty() {
        println!("{}", "Missing configuration:".red());
        for item in &missing {
            println!("   - {}", item);
        }
        println!(
            "\n{}",
            "Please copy .env.example to .env and fill in your credentials.".yellow()
        );
        std::process::exit(1);
    }

    if !config.has_refresh_token() {
        warn!("REFRESH_TOKEN not set, Spotify will reject every request");
    }

    Ok(config)
}

async fn serve(bind: SocketAddr) -> Result<()> {
    let config = load_config()?;
    let handler = PlaybackStatusHandler::new(SpotifyConnector::new(config));

    server::serve(handler, bind)
        .await
        .context("Server failed")?;

    Ok(())
}

async fn now_playing() -> Result<()> {
    let config = load_config()?;
    let handler = PlaybackStatusHandler::new(SpotifyConnector::new(config));

    let summary = handler
        .summary()
        .await
        .context("Failed to fetch playback status")?;

    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

fn show_setup_guide() {
    println!("{}", "Now Playing API Setup Guide".cyan().bold());
    println!("{}", "=".repeat(50));

    println!("\n{}", "1. Spotify API Setup".yellow());
    println!("   - Go to https://developer.spotify.com/dashboard/");
    println!("   - Create a new app");
    println!("   - Copy your Client ID and Client Secret");

    println!("\n{}", "2. Refresh Token".yellow());
    println!("   - Authorize your app once with the scopes");
    println!("     user-read-playback-state and user-read-recently-played");
    println!("   - Keep the refresh_token from the token response");

    println!("\n{}", "3. Configuration".yellow());
    println!("   - Create a .env file with:");
    println!("     CLIENT_ID=your_spotify_client_id");
    println!("     CLIENT_SECRET=your_spotify_client_secret");
    println!("     REFRESH_TOKEN=your_refresh_token");
    println!("     BIND_ADDR=127.0.0.1:3000   (optional)");

    println!("\n{}", "4. Usage".yellow());
    println!("   - nowplaying-api now-playing   (to check your credentials)");
    println!("   - nowplaying-api serve         (to start the endpoint)");
    println!("   - curl http://127.0.0.1:3000{}", server::PLAYBACK_ROUTE);

    println!("\n{}", "Ready to share what you're listening to!".green());
}
