//! alacazam-meta - inspect and build alacazam metadata blobs
//!
//! # Commands
//!
//! - `alacazam-meta trkn 5/12` - Encode a track number as an 8-byte `trkn` blob
//! - `alacazam-meta trkn-decode "00 00 00 05 00 00 00 0c"` - Decode a `trkn` blob
//! - `alacazam-meta layout stereo.toml` - Encode a channel layout descriptor
//! - `alacazam-meta layout-decode <HEX>` - Decode a channel layout to TOML
//! - `alacazam-meta tags "title=Intro" "track number=5/12"` - Show tag mapping
//!
//! Logging goes to stderr and honors `RUST_LOG`.

use alacazam_cli::{layout, tags, trkn};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// alacazam-meta - channel layout and track number blobs
#[derive(Parser)]
#[command(name = "alacazam-meta")]
#[command(about = "Build and inspect alacazam metadata blobs")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a track number ("n" or "n/m")
    Trkn {
        value: String,
    },

    /// Decode a hex track number blob
    TrknDecode {
        hex: String,
    },

    /// Encode a TOML channel layout descriptor
    Layout {
        /// Descriptor file (.toml)
        descriptor: PathBuf,

        /// Write raw bytes here instead of printing hex
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode a hex channel layout to TOML
    LayoutDecode {
        hex: String,
    },

    /// Map info dictionary entries (KEY=VALUE) to metadata items
    Tags {
        #[arg(required = true)]
        entries: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let output = match cli.command {
        Commands::Trkn { value } => trkn::encode(&value)?,
        Commands::TrknDecode { hex } => trkn::decode(&hex)?,
        Commands::Layout { descriptor, output } => layout::encode(&descriptor, output.as_deref())?,
        Commands::LayoutDecode { hex } => layout::decode(&hex)?,
        Commands::Tags { entries } => tags::map_entries(&entries)?,
    };

    println!("{}", output);
    Ok(())
}
