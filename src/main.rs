//! Main entry point for the TextIT client CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod core;

use cli::commands::Commands;

/// TextIT client - Russian morphology from the command line
#[derive(Parser, Debug)]
#[command(name = "textit-client", version, about, long_about = None)]
struct Args {
    /// API key (optional, defaults to TEXTIT_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// API endpoint (optional, defaults to TEXTIT_API_URL env var)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("textit_client={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Override config with CLI args if provided
    if let Some(api_key) = args.api_key {
        std::env::set_var("TEXTIT_API_KEY", api_key);
    }
    if let Some(base_url) = args.base_url {
        std::env::set_var("TEXTIT_API_URL", base_url);
    }
    if let Some(timeout_ms) = args.timeout_ms {
        std::env::set_var("TEXTIT_TIMEOUT_MS", timeout_ms.to_string());
    }

    // Execute command
    match args.command {
        Some(Commands::Correct { word }) => {
            cli::commands::handle_correct(word).await?;
        }
        Some(Commands::Hint { text }) => {
            cli::commands::handle_hint(text).await?;
        }
        Some(Commands::Numeral {
            number,
            word,
            case,
            direct,
            reduce,
            format,
        }) => {
            cli::commands::handle_numeral(number, word, case, direct, reduce, format).await?;
        }
        Some(Commands::Speller { text }) => {
            cli::commands::handle_speller(text).await?;
        }
        Some(Commands::Word { word }) => {
            cli::commands::handle_word(word).await?;
        }
        Some(Commands::SetForm {
            word,
            part,
            number,
            gender,
            case,
            tense,
            person,
            form,
            aspect,
        }) => {
            cli::commands::handle_set_form(
                word, part, number, gender, case, tense, person, form, aspect,
            )
            .await?;
        }
        Some(Commands::Cognate { word }) => {
            cli::commands::handle_cognate(word).await?;
        }
        Some(Commands::Synonym { word }) => {
            cli::commands::handle_synonym(word).await?;
        }
        Some(Commands::LatToCyr { text }) => {
            cli::commands::handle_lat_to_cyr(text).await?;
        }
        Some(Commands::Batch {
            file,
            case,
            number,
            part,
            chunk_size,
        }) => {
            cli::commands::handle_batch(file, case, number, part, chunk_size).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
