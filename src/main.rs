// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Read each document (file, stdin or URL)
// 3. Extract its links with the link_extract library
// 4. Print them as a table or JSON
// 5. Exit with proper code (0 = success, 2 = some source failed)
// =============================================================================

mod cli;
mod fetch;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, Format, OutputArgs};
use link_extract::{
    parse_with, Html5Provider, Link, MarkdownProvider, TreeProvider, XmlProvider,
};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// Links found in one source, as printed by --json
#[derive(Debug, Serialize)]
struct SourceLinks {
    source: String,
    links: Vec<Link>,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so --json output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::File { paths, output } => handle_files(&paths, output),
        Commands::Url { urls, output, concurrency, timeout } => {
            handle_urls(urls, output, concurrency, Duration::from_secs(timeout)).await
        }
    }
}

fn provider_for(format: Format) -> &'static dyn TreeProvider {
    match format {
        Format::Html => &Html5Provider,
        Format::Xml => &XmlProvider,
        Format::Markdown => &MarkdownProvider,
    }
}

// Handles the 'file' subcommand
fn handle_files(paths: &[std::path::PathBuf], output: OutputArgs) -> Result<i32> {
    let provider = provider_for(output.format);
    let stdin = [Path::new("-").to_path_buf()];
    let paths = if paths.is_empty() { &stdin[..] } else { paths };

    let mut results = Vec::new();
    let mut failed = false;
    for path in paths {
        match extract_file(provider, path) {
            Ok(links) => results.push(SourceLinks {
                source: path.display().to_string(),
                links,
            }),
            Err(e) => {
                eprintln!("Error: {:#}", e);
                failed = true;
            }
        }
    }

    print_results(&results, output.json)?;
    Ok(if failed { 2 } else { 0 })
}

fn extract_file(provider: &dyn TreeProvider, path: &Path) -> Result<Vec<Link>> {
    if path == Path::new("-") {
        return parse_with(provider, io::stdin().lock()).context("failed to parse stdin");
    }

    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    parse_with(provider, BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))
}

// Handles the 'url' subcommand
async fn handle_urls(
    urls: Vec<String>,
    output: OutputArgs,
    concurrency: usize,
    timeout: Duration,
) -> Result<i32> {
    let provider = provider_for(output.format);
    let pages = fetch::fetch_pages(urls, concurrency, timeout).await?;

    let mut results = Vec::new();
    let mut failed = false;
    for (url, page) in pages {
        let links = page.and_then(|body| {
            parse_with(provider, body.as_bytes()).map_err(anyhow::Error::from)
        });
        match links {
            Ok(links) => results.push(SourceLinks { source: url, links }),
            Err(e) => {
                eprintln!("Error: {}: {:#}", url, e);
                failed = true;
            }
        }
    }

    print_results(&results, output.json)?;
    Ok(if failed { 2 } else { 0 })
}

// Prints the results either as a table or JSON
fn print_results(results: &[SourceLinks], json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(results)?;
        println!("{}", json_output);
    } else {
        for source in results {
            print!("{}", render_table(source));
        }
    }
    Ok(())
}

// One table per source, hrefs truncated so the text column lines up
fn render_table(source: &SourceLinks) -> String {
    let mut out = format!("📄 {} ({} link(s))\n", source.source, source.links.len());
    out.push_str(&format!("{:<50} {}\n", "HREF", "TEXT"));
    out.push_str(&format!("{}\n", "=".repeat(80)));

    for link in &source.links {
        let href = if link.href.chars().count() > 47 {
            format!("{}...", link.href.chars().take(47).collect::<String>())
        } else {
            link.href.clone()
        };
        out.push_str(&format!("{:<50} {}\n", href, link.text));
    }

    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_truncates_long_hrefs() {
        let source = SourceLinks {
            source: "page.html".to_string(),
            links: vec![
                Link {
                    href: "/short".to_string(),
                    text: "Short".to_string(),
                },
                Link {
                    href: format!("https://example.com/{}", "x".repeat(60)),
                    text: "Long".to_string(),
                },
            ],
        };
        let table = render_table(&source);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "📄 page.html (2 link(s))");
        assert!(lines[3].starts_with("/short "));
        assert!(lines[3].ends_with(" Short"));
        assert!(lines[4].contains("...") && lines[4].ends_with(" Long"));
    }

    #[test]
    fn test_provider_for_format() {
        assert_eq!(provider_for(Format::Html).name(), "html5");
        assert_eq!(provider_for(Format::Xml).name(), "xml");
        assert_eq!(provider_for(Format::Markdown).name(), "markdown");
    }

    #[test]
    fn test_extract_missing_file_names_path() {
        let err = extract_file(&Html5Provider, Path::new("/definitely/not/here.html")).unwrap_err();
        assert!(format!("{:#}", err).contains("/definitely/not/here.html"));
    }
}
