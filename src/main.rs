use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use meeting_notes::{project, render_display, Config, SubmissionController, SubmissionState};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "meeting-notes", version, about = "Summarize meeting transcripts")]
struct Cli {
    /// Config file (extension optional)
    #[arg(long, global = true, default_value = "config/meeting-notes")]
    config: String,

    /// Override the summarization service base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Summarize a transcript (reads stdin when neither --file nor --text is given)
    Summarize {
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        #[arg(long)]
        text: Option<String>,

        /// Append the raw JSON response
        #[arg(long)]
        raw: bool,

        /// Print only the raw JSON response
        #[arg(long, conflicts_with = "raw")]
        json: bool,
    },

    /// Check that the summarization service is up
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let mut cfg = Config::load(&cli.config)?;
    if let Some(base_url) = cli.base_url {
        cfg.service.base_url = base_url;
    }

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!("Summarization service: {}", cfg.service.base_url);

    let controller = SubmissionController::from_config(&cfg.service);

    match cli.command {
        Command::Summarize {
            file,
            text,
            raw,
            json,
        } => {
            let transcript = read_transcript(file, text)?;
            summarize(&controller, &transcript, raw, json).await
        }
        Command::Health => {
            controller.health().await?;
            println!("OK");
            Ok(())
        }
    }
}

async fn summarize(
    controller: &SubmissionController,
    transcript: &str,
    include_raw: bool,
    json_only: bool,
) -> Result<()> {
    match controller.submit(transcript).await? {
        SubmissionState::Succeeded(result) => {
            let model = project(&result);
            if json_only {
                println!("{}", model.raw_json());
            } else {
                print!("{}", render_display(&model, include_raw));
            }
            Ok(())
        }
        SubmissionState::Failed(message) => bail!(message),
        other => bail!("Submission did not settle: {:?}", other),
    }
}

fn read_transcript(file: Option<PathBuf>, text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read transcript from {}", path.display())),
        None => std::io::read_to_string(std::io::stdin())
            .context("Failed to read transcript from stdin"),
    }
}
