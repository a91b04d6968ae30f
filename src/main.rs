// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use claims_helper::utils::logging::{
    format_error, format_heading, format_score, format_success, format_warning, init_logger,
};
use claims_helper::search::SLOW_SEARCH;
use claims_helper::{Answer, AppState, Config, JsonExporter, Ranker, Validator, knowledge, server};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "claims_helper")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Q&A helper for New York small claims court topics", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server with the chat page and ask endpoint
    Serve {
        #[arg(long, env = "CLAIMS_HELPER_HOST")]
        host: Option<String>,

        #[arg(short, long, env = "CLAIMS_HELPER_PORT")]
        port: Option<u16>,
    },

    /// Answer a single question from the commandline
    Ask {
        /// Question text
        question: String,

        /// Print the answer as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every section and subsection label
    Topics,

    /// Build the passage index and print a health report
    Health,

    /// Export the knowledge base and topic list as JSON files
    Export {
        #[arg(short, long, default_value = "./exports")]
        output: PathBuf,

        #[arg(short, long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.color, cli.verbose);

    info!("NY Small Claims Helper");
    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Serve { host, port } => {
            cmd_serve(config, host, port).await?;
        }
        Commands::Ask { question, json } => {
            cmd_ask(&config, &question, json)?;
        }
        Commands::Topics => {
            cmd_topics(&config)?;
        }
        Commands::Health => {
            cmd_health(&config)?;
        }
        Commands::Export { output, pretty } => {
            cmd_export(&config, output, pretty)?;
        }
    }

    Ok(())
}

async fn cmd_serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let ranker = Ranker::from_config(&config).context("Failed to build passage index")?;
    info!(
        "Indexed {} passages (thresholds {} / {}, top {})",
        ranker.passage_count(),
        ranker.settings().thresholds.top_level,
        ranker.settings().thresholds.sub_level,
        ranker.settings().max_results
    );

    let state = AppState::new(Arc::new(ranker));
    server::serve(&config.server, state)
        .await
        .with_context(|| format!("Server failed on {}", config.bind_address()))?;

    Ok(())
}

fn cmd_ask(config: &Config, question: &str, json: bool) -> Result<()> {
    let question = match Validator::validate_question(Some(question)) {
        Ok(q) => q,
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            return Err(e.into());
        }
    };

    let ranker = Ranker::from_config(config).context("Failed to build passage index")?;
    let results = ranker.search(question);
    let answer = Answer::compose(question, results);

    if json {
        println!("{}", serde_json::to_string_pretty(&answer)?);
        return Ok(());
    }

    if answer.is_empty() {
        println!("\n{}\n", format_warning(&answer.answer));
        return Ok(());
    }

    println!("\n{}\n", format_heading(&format!("Results for: \"{}\"", question)));
    for (idx, result) in answer.results.iter().enumerate() {
        println!("{} {}", format_score(idx + 1, result.score), result.label);
        println!("    {}", Validator::truncate_text(&result.content, 300));
        println!("    Source: {}\n", result.citation);
    }

    Ok(())
}

fn cmd_topics(config: &Config) -> Result<()> {
    let kb = knowledge::load(&config.knowledge).context("Failed to load knowledge base")?;

    println!("{}", format_heading("Topics"));
    for title in kb.list_topic_titles() {
        println!("  - {}", title);
    }

    Ok(())
}

fn cmd_health(config: &Config) -> Result<()> {
    let ranker = Ranker::from_config(config).context("Failed to build passage index")?;
    let report = ranker.health(SLOW_SEARCH);

    print!("{}", report);
    if !report.is_healthy() {
        eprintln!("{}", format_warning("One or more components are not healthy"));
    }

    Ok(())
}

fn cmd_export(config: &Config, output: PathBuf, pretty: bool) -> Result<()> {
    info!("Initializing JSON export");

    let kb = knowledge::load(&config.knowledge).context("Failed to load knowledge base")?;
    let exporter = JsonExporter::new(output)?;
    let manifest = exporter.export_all(&kb, pretty)?;

    println!(
        "{}",
        format_success(&format!(
            "Exported {} passages ({} files)",
            manifest.total_passages,
            manifest.files.len() + 1
        ))
    );

    Ok(())
}
