//! CLI entry point for papyr

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use papyr::commands::list::ListFormat;

#[derive(Parser)]
#[command(name = "papyr")]
#[command(version)]
#[command(about = "A markdown blog content reader", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all posts, newest first
    #[command(alias = "ls")]
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "plain")]
        format: ListFormat,
    },

    /// Show a single post with its body rendered as HTML
    Show {
        /// Slug of the post to show
        slug: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "papyr=debug,info"
    } else {
        "papyr=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let blog = papyr::Blog::new(&base_dir)?;

    match cli.command {
        Commands::List { format } => {
            papyr::commands::list::run(&blog, format)?;
        }
        Commands::Show { slug } => {
            papyr::commands::show::run(&blog, &slug)?;
        }
    }

    Ok(())
}
