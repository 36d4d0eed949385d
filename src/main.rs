mod display;
mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cod_stats::{CodApiClient, Config};
use display::output::{
    display_error, display_info, display_leaderboard, display_match, display_recent_matches,
    display_user_names, display_user_stats, display_validation,
};
use serde::Serialize;
use std::env;

#[derive(Parser, Debug)]
#[command(name = "cod_stats")]
#[command(about = "Query Call of Duty player stats, matches and leaderboards", long_about = None)]
struct Args {
    /// Game identifier, e.g. bo4 (default: $COD_GAME or bo4)
    #[arg(short, long, global = true)]
    game: Option<String>,

    /// Platform identifier, e.g. psn, xbl, battle (default: $COD_PLATFORM or psn)
    #[arg(short, long, global = true)]
    platform: Option<String>,

    /// Player name (default: $COD_USERNAME)
    #[arg(short, long, global = true)]
    username: Option<String>,

    /// Print the raw decoded response as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the game/username/platform combination exists
    Validate,

    /// Lifetime stats for the configured player
    Stats {
        /// Stats category
        #[arg(short = 't', long = "type", default_value = "multiplayer")]
        match_type: String,
    },

    /// Most recent matches across all players
    Recent {
        #[arg(short, long, default_value = "10")]
        rows: u32,
    },

    /// A single match by its id
    Match { mid: String },

    /// Top players for the configured game and platform
    Leaderboard {
        /// Time window, e.g. weekly or alltime
        #[arg(short, long, default_value = "alltime")]
        scope: String,

        #[arg(short, long, default_value = "10")]
        rows: u32,
    },

    /// Resolve user ids to names
    Users { ids: Vec<u64> },
}

fn main() {
    logging::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn load_config(args: &Args) -> Result<Config> {
    dotenvy::dotenv().ok();

    let game = args
        .game
        .clone()
        .or_else(|| env::var("COD_GAME").ok())
        .unwrap_or_else(|| "bo4".to_string());
    let platform = args
        .platform
        .clone()
        .or_else(|| env::var("COD_PLATFORM").ok())
        .unwrap_or_else(|| "psn".to_string());
    // Only the player-scoped commands need a name
    let username = args
        .username
        .clone()
        .or_else(|| env::var("COD_USERNAME").ok())
        .unwrap_or_default();

    let mut config = Config::new(&game, &platform, &username)?;
    if let Ok(base_url) = env::var("COD_API_BASE_URL") {
        config = config
            .with_base_url(&base_url)
            .context("COD_API_BASE_URL is not a valid URL")?;
    }

    Ok(config)
}

fn require_username(config: &Config) -> Result<()> {
    if config.username().is_empty() {
        anyhow::bail!("a username is required, pass --username or set COD_USERNAME");
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let client = CodApiClient::with_config(config);
    let config = client.config();

    match &args.command {
        Command::Validate => {
            require_username(config)?;
            display_info(&format!(
                "Validating {} on {}/{}",
                config.username(),
                config.game(),
                config.platform()
            ));
            let validation = client
                .validate_user()
                .context("failed to validate user")?;
            if args.json {
                return print_json(&validation);
            }
            display_validation(&validation);
        }
        Command::Stats { match_type } => {
            require_username(config)?;
            let stats = client
                .get_user_stats(match_type)
                .with_context(|| format!("failed to fetch {} stats", match_type))?;
            if args.json {
                return print_json(&stats);
            }
            display_user_stats(&stats);
        }
        Command::Recent { rows } => {
            let matches = client
                .get_recent_matches(*rows)
                .context("failed to fetch recent matches")?;
            if args.json {
                return print_json(&matches);
            }
            display_recent_matches(&matches);
        }
        Command::Match { mid } => {
            let details = client
                .get_match(mid)
                .with_context(|| format!("failed to fetch match {}", mid))?;
            if args.json {
                return print_json(&details);
            }
            display_match(mid, &details);
        }
        Command::Leaderboard { scope, rows } => {
            let leaderboard = client
                .get_leaderboard(scope, *rows)
                .context("failed to fetch leaderboard")?;
            if args.json {
                return print_json(&leaderboard);
            }
            display_leaderboard(&leaderboard);
        }
        Command::Users { ids } => {
            let names = client
                .get_user_names(ids)
                .context("failed to look up user names")?;
            if args.json {
                return print_json(&names);
            }
            display_user_names(&names);
        }
    }

    Ok(())
}
