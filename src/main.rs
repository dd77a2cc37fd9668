//! CLI entry point for cms

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cms::config::{SiteConfig, DEFAULT_CONFIG_PATH};
use cms::Site;

#[derive(Parser)]
#[command(name = "cms")]
#[command(version)]
#[command(about = "A small static blog generator", long_about = None)]
struct Cli {
    /// Path to the config file [default: config.yml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

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
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to the base directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Manage posts
    Post {
        #[command(subcommand)]
        command: PostCommands,
    },

    /// Manage the generated site
    Site {
        #[command(subcommand)]
        command: SiteCommands,
    },
}

#[derive(Subcommand)]
enum PostCommands {
    /// Create a new post (metadata plus an empty body)
    Create {
        /// Post date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Output name used instead of the generated id
        #[arg(long, default_value = "")]
        slug: String,

        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
    },

    /// List posts
    List,
}

#[derive(Subcommand)]
enum SiteCommands {
    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Render post pages again even if they already exist
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug { "cms=debug,info" } else { "cms=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            cms::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::Post { command } => {
            let site = load_site(&base_dir, cli.config.as_deref())?;
            match command {
                PostCommands::Create { date, slug, tags } => {
                    let path = site.new_post(date, &slug, &tags)?;
                    println!("Created: {:?}", path);
                }
                PostCommands::List => cms::commands::list::run(&site),
            }
        }

        Commands::Site { command } => {
            let site = load_site(&base_dir, cli.config.as_deref())?;
            match command {
                SiteCommands::Generate { force } => {
                    tracing::info!("Generating static files...");
                    site.generate(force)?;
                    println!("Generated successfully!");
                }
            }
        }
    }

    Ok(())
}

/// An explicit `--config` must exist; a missing default config means defaults
fn load_site(base_dir: &Path, config: Option<&Path>) -> Result<Site> {
    if let Some(path) = config {
        return Ok(Site::load(base_dir, path)?);
    }

    let default_path = base_dir.join(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        Ok(Site::load(base_dir, Path::new(DEFAULT_CONFIG_PATH))?)
    } else {
        tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
        Ok(Site::new(base_dir, SiteConfig::default()))
    }
}
