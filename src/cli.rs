// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "link-extract",
    version = "0.1.0",
    about = "List every <a href> link and its text in HTML, XHTML or Markdown documents",
    long_about = "link-extract parses documents from files, stdin or URLs and prints each link's \
                  href and visible text in document order. Set RUST_LOG=debug for parser details."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract links from local files
    ///
    /// Example: link-extract file index.html about.html
    File {
        /// Files to read. Use "-" (or nothing) for stdin
        paths: Vec<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Download pages and extract their links
    ///
    /// Example: link-extract url https://example.com --json
    Url {
        /// Page URLs to fetch
        #[arg(required = true)]
        urls: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,

        /// How many pages to download at the same time
        #[arg(long, default_value_t = 8)]
        concurrency: usize,

        /// Per-request timeout in seconds
        #[arg(long, default_value_t = 10)]
        timeout: u64,
    },
}

// Flags shared by both subcommands
#[derive(Args, Debug, Clone, Copy)]
pub struct OutputArgs {
    /// How to parse the input
    #[arg(long, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Output results in JSON format instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// HTML5, parsed leniently like a browser does
    Html,
    /// Well-formed XML/XHTML; malformed input is an error
    Xml,
    /// CommonMark Markdown
    Markdown,
}
