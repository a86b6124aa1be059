//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_rs::generator::Status;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "A small static site generator for artwork portfolios", long_about = None)]
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
    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Date for the front-matter (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Remove the public folder
    Clean,

    /// List posts, newest first
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render one page (e.g. "/" or "/work/my-slug") to stdout
    Render {
        path: String,
    },

    /// Show the home-page column layout at a viewport width
    Columns {
        /// Initial viewport width in pixels
        #[arg(short, long, default_value = "1200")]
        width: u32,

        /// Widths to resize to, in order
        #[arg(short, long)]
        resize: Vec<u32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let folio = folio_rs::Folio::new(&base_dir)?;

    match cli.command {
        Commands::New { title, date } => {
            tracing::info!("Creating new post with title: {}", title);
            let path = folio_rs::commands::new::create_post(&folio, &title, date.as_deref())?;
            println!("Created: {}", path.display());
        }

        Commands::Generate { watch } => {
            tracing::info!("Generating static files...");
            folio.generate()?;
            println!("Generated successfully!");

            if watch {
                folio_rs::commands::generate::watch(&folio)?;
            }
        }

        Commands::Clean => {
            folio.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { json } => {
            folio_rs::commands::list::run(&folio, json)?;
        }

        Commands::Render { path } => {
            let rendered = folio_rs::commands::render::run(&folio, &path)?;
            print!("{}", rendered.html);
            if rendered.status == Status::NotFound {
                anyhow::bail!("Not found: {}", path);
            }
        }

        Commands::Columns { width, resize } => {
            folio_rs::commands::columns::run(&folio, width, &resize)?;
        }
    }

    Ok(())
}
