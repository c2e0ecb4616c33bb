//! sentiment: command-line front end for sentiment-core
//!
//! # Subcommands
//! - `classify <text>`: infer a mood from free text
//! - `suggest <mood> [--redirect]`: one video/quote/song/article for a mood
//! - `browse <mood>`: every catalog entry for a mood
//! - `log <mood>`: record a mood in the history
//! - `history`: list logged moods, newest first
//! - `delete <ids>... | --index <n>...`: remove history entries
//! - `favorite <content-id>`: toggle a favorite
//! - `favorites`: list favorited content
//! - `validate`: check the catalog for duplicates and gaps
//! - `breathe [--fast]`: run the guided breathing exercise

use std::time::Duration;

use clap::{Parser, Subcommand};
use sentiment_core::ipc::{SentimentRequest, SentimentResponse};
use sentiment_core::{router, BreathingSession, Emotion, SentimentApp, SentimentConfig};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

const DEFAULT_CONFIG: &str = "sentiment.toml";

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Debug, Parser)]
#[command(name = "sentiment", version, about = "Mood-matched content, mood history and favorites")]
struct Cli {
    /// Config file (TOML); missing file means built-in defaults
    #[arg(short, long, env = "SENTIMENT_CONFIG", default_value = DEFAULT_CONFIG)]
    config: String,

    /// Print the raw JSON response
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Infer a mood from how you describe your day
    Classify {
        /// Free text, e.g. "I'm totally exhausted"
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Suggest one item of each content type for a mood
    Suggest {
        mood: Emotion,

        /// Pick content for the mood's uplifting/calming counterpart
        #[arg(long)]
        redirect: bool,
    },

    /// List every catalog entry tagged with a mood
    Browse { mood: Emotion },

    /// Record a mood in the history
    Log { mood: Emotion },

    /// Show mood history, newest first
    History,

    /// Delete history entries by id, or by position as shown in `history`
    Delete {
        ids: Vec<Uuid>,

        #[arg(long = "index", conflicts_with = "ids")]
        indices: Vec<usize>,
    },

    /// Toggle a content entry as favorite
    Favorite { content_id: String },

    /// Check whether a content entry is a favorite
    IsFavorite { content_id: String },

    /// List favorited content, most recent first
    Favorites,

    /// Report duplicate ids/urls and empty mood/type slots in the catalog
    Validate,

    /// Guided breathing exercise
    Breathe {
        /// Skip the one-second pacing between ticks
        #[arg(long)]
        fast: bool,
    },
}

// ============================================================================
// Rendering
// ============================================================================

fn print_response(command: &Commands, resp: &SentimentResponse, json_output: bool) -> anyhow::Result<()> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(resp)?);
        return Ok(());
    }

    let data = match (&resp.data, &resp.error) {
        (Some(d), _) => d,
        (None, Some(e)) => {
            eprintln!("{}", e);
            return Ok(());
        }
        (None, None) => return Ok(()),
    };

    match command {
        Commands::Classify { .. } => {
            println!("You seem {}.", data["title"].as_str().unwrap_or("?").to_lowercase());
        }
        Commands::Suggest { .. } => {
            println!(
                "Content for when you're feeling {}:",
                data["emotion"].as_str().unwrap_or("?")
            );
            for s in data["suggestions"].as_array().into_iter().flatten() {
                if s["entry"].is_null() {
                    continue;
                }
                let heart = if s["favorite"].as_bool().unwrap_or(false) { " ♥" } else { "" };
                println!(
                    "  [{}] {} - {}{}",
                    s["type"].as_str().unwrap_or("?"),
                    s["entry"]["title"].as_str().unwrap_or(""),
                    s["entry"]["description"].as_str().unwrap_or(""),
                    heart
                );
                println!(
                    "        {}: {}  (id {})",
                    s["label"].as_str().unwrap_or("Open"),
                    s["entry"]["url"].as_str().unwrap_or(""),
                    s["entry"]["id"].as_str().unwrap_or("")
                );
            }
        }
        Commands::Browse { .. } | Commands::Favorites => {
            let entries = data["entries"].as_array().map(Vec::as_slice).unwrap_or(&[]);
            if entries.is_empty() {
                println!("Nothing here yet.");
            }
            for e in entries {
                println!(
                    "{}  [{}] {} - {}",
                    e["id"].as_str().unwrap_or(""),
                    e["type"].as_str().unwrap_or("?"),
                    e["title"].as_str().unwrap_or(""),
                    e["url"].as_str().unwrap_or("")
                );
            }
        }
        Commands::Log { .. } => {
            println!(
                "Mood logged: {} ({})",
                data["entry"]["emotion"].as_str().unwrap_or("?"),
                data["entry"]["id"].as_str().unwrap_or("")
            );
        }
        Commands::History => {
            let entries = data["entries"].as_array().map(Vec::as_slice).unwrap_or(&[]);
            if entries.is_empty() {
                println!("No moods logged yet.");
            }
            for (i, e) in entries.iter().enumerate() {
                println!(
                    "{:>3}  {}  {:<9} {}",
                    i,
                    e["timestamp"].as_str().unwrap_or(""),
                    e["emotion"].as_str().unwrap_or("?"),
                    e["id"].as_str().unwrap_or("")
                );
            }
        }
        Commands::Delete { .. } => {
            println!("Deleted {} entries.", data["deleted"]);
        }
        Commands::Favorite { content_id } | Commands::IsFavorite { content_id } => {
            let state = if data["favorite"].as_bool().unwrap_or(false) {
                "is a favorite"
            } else {
                "is not a favorite"
            };
            println!("{} {}", content_id, state);
        }
        Commands::Validate => {
            let issues = data["issues"].as_array().map(Vec::as_slice).unwrap_or(&[]);
            println!("{} entries, {} issues", data["entries"], issues.len());
            for issue in issues {
                println!("  {}", issue);
            }
        }
        Commands::Breathe { .. } => {}
    }

    Ok(())
}

// ============================================================================
// Commands
// ============================================================================

async fn run_breathing(fast: bool) {
    let mut session = BreathingSession::new();
    println!("{}", session.state().instruction);
    if !fast {
        tokio::time::sleep(Duration::from_millis(1500)).await;
    }
    session.start();

    let mut interval = tokio::time::interval(Duration::from_secs(1));
    let mut last_instruction = "";
    while !session.is_finished() {
        let state = session.state();
        if state.instruction != last_instruction {
            println!("{} ({}s left)", state.instruction, state.time_remaining);
            last_instruction = state.instruction;
        }
        if !fast {
            interval.tick().await;
        }
        session.tick();
    }
    println!("{}", session.state().instruction);
}

fn to_request(command: &Commands) -> Option<SentimentRequest> {
    let request = match command {
        Commands::Classify { text } => SentimentRequest::Classify { text: text.join(" ") },
        Commands::Suggest { mood, redirect } => SentimentRequest::Suggest {
            emotion: *mood,
            redirect: *redirect,
        },
        Commands::Browse { mood } => SentimentRequest::ForEmotion { emotion: *mood },
        Commands::Log { mood } => SentimentRequest::LogMood { emotion: *mood },
        Commands::History => SentimentRequest::History,
        Commands::Delete { indices, .. } if !indices.is_empty() => SentimentRequest::DeleteMoodsAt {
            indices: indices.clone(),
        },
        Commands::Delete { ids, .. } => SentimentRequest::DeleteMoods { ids: ids.clone() },
        Commands::Favorite { content_id } => SentimentRequest::ToggleFavorite {
            content_id: content_id.clone(),
        },
        Commands::IsFavorite { content_id } => SentimentRequest::IsFavorite {
            content_id: content_id.clone(),
        },
        Commands::Favorites => SentimentRequest::Favorites,
        Commands::Validate => SentimentRequest::ValidateCatalog,
        Commands::Breathe { .. } => return None,
    };
    Some(request)
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match SentimentConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", cli.config, e);
            std::process::exit(1);
        }
    };

    // Init logging (stderr, so stdout stays clean for --json)
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.service.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Commands::Breathe { fast } = cli.command {
        run_breathing(fast).await;
        return Ok(());
    }

    let mut app = SentimentApp::from_config_async(&config).await;
    let mut mood_events = app.moods.subscribe();
    let mut favorite_events = app.favorites.subscribe();

    let response = match to_request(&cli.command) {
        Some(request) => router::handle_request(request, &mut app),
        None => return Ok(()),
    };

    while let Ok(event) = mood_events.try_recv() {
        tracing::debug!("store event: {:?}", event);
    }
    while let Ok(event) = favorite_events.try_recv() {
        tracing::debug!("store event: {:?}", event);
    }

    print_response(&cli.command, &response, cli.json)?;

    if !response.is_ok() {
        std::process::exit(1);
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
