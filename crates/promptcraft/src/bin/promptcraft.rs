//! Promptcraft command-line interface.
//!
//! Runs one technique against Gemini and prints the result as JSON.

use anyhow::Context;
use clap::{Parser, Subcommand};
use promptcraft::{PromptcraftConfig, check_connection, init_tracing, inspect_prompt};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "promptcraft")]
#[command(about = "Tree-of-thought and self-consistency prompting over Gemini")]
#[command(version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true, env = "PROMPTCRAFT_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Explore several named approaches to a problem and rank them
    Explore {
        /// Problem statement
        problem: String,

        /// Number of approaches to explore (1-5, capped to the named approaches)
        #[arg(short, long, default_value_t = 3)]
        max_approaches: usize,
    },

    /// Sample several answers to a question and analyse their agreement
    Consistency {
        /// Question to answer
        question: String,

        /// Number of samples (2-5)
        #[arg(short, long, default_value_t = 3)]
        num_samples: usize,
    },

    /// Check the API connection and show model settings
    Check,

    /// Inspect a prompt for common problems without sending it
    Inspect {
        /// Prompt text
        prompt: String,
    },

    /// Print the effective configuration (API key omitted)
    ShowConfig,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = PromptcraftConfig::load(cli.config.as_deref()).context("Loading configuration")?;
    info!(model = %config.gemini().model(), "Configuration loaded");

    match cli.command {
        Commands::Explore {
            problem,
            max_approaches,
        } => {
            let result = config.service()?.explore(&problem, max_approaches).await?;
            print_json(&result)?;
        }
        Commands::Consistency {
            question,
            num_samples,
        } => {
            let result = config
                .service()?
                .validate_consistency(&question, num_samples)
                .await?;
            print_json(&result)?;
        }
        Commands::Check => {
            let driver = config.driver()?;
            let report = check_connection(&driver, driver.inner().default_temperature()).await;
            let connected = *report.connected();
            print_json(&serde_json::json!({
                "connection": report,
                "model_info": driver.inner().model_info(),
                "timeout_secs": driver.limit().as_secs_f64(),
            }))?;
            if !connected {
                anyhow::bail!("Connection check failed");
            }
        }
        Commands::Inspect { prompt } => {
            print_json(&inspect_prompt(&prompt))?;
        }
        Commands::ShowConfig => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}
