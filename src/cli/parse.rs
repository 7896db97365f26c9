//! CLI parse: clap types for the studio binary. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Content Studio CLI - content packages with resilient provider fallback
#[derive(Parser)]
#[command(name = "studio")]
#[command(about = "Generate creator content packages; falls back to curated samples when the model is unavailable")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (config/config.toml is read from here)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (layered above workspace config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate content for a brief (spends one credit)
    Generate {
        /// generate-content, generate-hooks, generate-script, posting-times, or chat
        action: String,
        /// What the content is about
        #[arg(long, default_value = "")]
        topic: String,
        /// youtube, tiktok, instagram, twitter, linkedin, podcast, blog, newsletter
        #[arg(long, default_value = "youtube")]
        platform: String,
        /// short-form, long-form, carousel, thread, story, reel, article, episode
        #[arg(long, default_value = "long-form")]
        content_type: String,
        #[arg(long)]
        tone: Option<String>,
        #[arg(long)]
        audience: Option<String>,
        /// Extra context passed to the model
        #[arg(long)]
        context: Option<String>,
        #[arg(long, default_value = "general")]
        niche: String,
        /// Number of hooks to ask for
        #[arg(long)]
        count: Option<usize>,
        /// Script length, e.g. "60-second" or "10-minute"
        #[arg(long)]
        target_length: Option<String>,
        /// Script delivery style
        #[arg(long)]
        style: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show provider availability (advisory; generation works either way)
    Status {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Inspect or reset the credit balance
    Credits {
        #[command(subcommand)]
        command: CreditsCommands,
    },
}

#[derive(Subcommand)]
pub enum CreditsCommands {
    /// Show remaining credits
    Show {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Start a new billing period
    Reset {
        /// Allowance for the new period (default: credits.period_max)
        #[arg(long)]
        max: Option<u32>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
