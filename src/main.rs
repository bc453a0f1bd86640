use clap::{Parser, Subcommand};
use sqlview::{Config, Dialect, Markup, QueryResponse, Renderer, Result, highlight_with};
use std::{io::Read as _, path::PathBuf};
use tracing_subscriber::EnvFilter;

/// Format and syntax-highlight SQL returned by a natural-language query backend
#[derive(Parser, Debug)]
#[command(name = "sqlview")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay a query out one clause per line
    Format {
        /// Query file; stdin when omitted
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Emit span markup for a query
    Highlight {
        /// Query file; stdin when omitted
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Highlight the query as given instead of formatting it first
        #[arg(long)]
        raw: bool,
    },
    /// Turn a backend JSON response into a rendered reply (JSON)
    Render {
        /// Response file; stdin when omitted
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;
    tracing::debug!(?config, "Loaded configuration");
    let renderer = Renderer::from_config(&config);

    match args.command {
        Command::Format { file } => {
            let input = read_input(file)?;
            if let Some(block) = renderer.block(Some(&input)) {
                println!("{}", block.formatted);
            }
        }
        Command::Highlight { file, raw: true } => {
            let input = read_input(file)?;
            let markup = Markup::new(config.class_prefix.as_str());
            println!("{}", highlight_with(&input, &Dialect::default(), &markup));
        }
        Command::Highlight { file, raw: false } => {
            let input = read_input(file)?;
            if let Some(block) = renderer.block(Some(&input)) {
                println!("{}", block.markup);
            }
        }
        Command::Render { file } => {
            let response = QueryResponse::from_json(&read_input(file)?)?;
            let reply = renderer.reply(response);
            println!("{}", serde_json::to_string_pretty(&reply)?);
        }
    }

    Ok(())
}

fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => {
            tracing::info!("Reading {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
