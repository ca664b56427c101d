// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tripbot_core::prompts::START_COMMAND;
use tripbot_core::{Assistant, AssistantConfig, ChatCompletionClient, ReplyStyle};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to assistant.json (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Key for the language-model fallback
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, value_parser = parse_today, global = true)]
    today: Option<NaiveDate>,

    /// Reply markdown flavour: web or telegram
    #[arg(long, global = true)]
    style: Option<ReplyStyle>,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a single message
    Ask { message: String },
    /// Show how a message is routed, as JSON
    Parse { message: String },
    /// Interactive session on stdin
    Chat,
    /// Write a default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn parse_today(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let config = ConfigBuilder::new()
        .add_filter_allow_str("tripbot")
        .build();
    // Only fails if a logger is already set.
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.clone().unwrap_or_else(AssistantConfig::default_path);

    match &cli.command {
        Commands::InitConfig { force } => {
            if config_path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    config_path.display()
                );
            }
            AssistantConfig::default()
                .save(&config_path)
                .with_context(|| format!("writing {}", config_path.display()))?;
            println!("Wrote default config to {}", config_path.display());
        }
        Commands::Ask { message } => {
            let (assistant, today) = build_assistant(&cli, &config_path)?;
            println!("{}", assistant.reply(message, today));
        }
        Commands::Parse { message } => {
            let (assistant, today) = build_assistant(&cli, &config_path)?;
            let route = assistant.route(message, today);
            println!("{}", serde_json::to_string_pretty(&route)?);
        }
        Commands::Chat => {
            let (assistant, today) = build_assistant(&cli, &config_path)?;
            chat(&assistant, today)?;
        }
    }

    Ok(())
}

fn build_assistant(
    cli: &Cli,
    config_path: &Path,
) -> Result<(Assistant<ChatCompletionClient>, NaiveDate)> {
    let mut config = AssistantConfig::load(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    if let Some(style) = cli.style {
        config.reply_style = style;
    }

    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let responder = ChatCompletionClient::new(config.llm.clone(), cli.api_key.clone())
        .context("building HTTP client")?;
    if !responder.has_api_key() {
        log::info!("[Assistant] No API key; general questions will not be answered");
    }
    Ok((Assistant::new(config, responder), today))
}

fn chat(assistant: &Assistant<ChatCompletionClient>, today: NaiveDate) -> Result<()> {
    println!(
        "Chatting with the {} assistant. Type {} for the greeting, 'exit' to leave.",
        assistant.config().brand_name,
        START_COMMAND
    );
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line.to_lowercase().as_str(), "exit" | "quit") {
            break;
        }
        println!("{}\n", assistant.reply(line, today));
    }
    Ok(())
}
