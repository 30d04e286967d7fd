//! # cabeza-render
//!
//! Renders the landing page to a static HTML document.
//!
//! ## Usage
//!
//! ```bash
//! # Embedded content -> dist/index.html
//! cabeza-render
//!
//! # Custom content, to stdout
//! cabeza-render --content site.toml --out -
//!
//! # Inspect the resolved content as JSON
//! cabeza-render --print-content
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use tracing::info;

use cabeza_site::render_page;
use cabeza_site::types::SiteContent;

#[derive(Parser, Debug)]
#[command(name = "cabeza-render")]
#[command(about = "Render the Cabeza.ai landing page to static HTML")]
#[command(version)]
struct Args {
    /// TOML content file (defaults to the embedded content)
    #[arg(long)]
    content: Option<PathBuf>,

    /// Output file, `-` for stdout
    #[arg(long, short, default_value = "dist/index.html")]
    out: PathBuf,

    /// Copyright year (defaults to the current year)
    #[arg(long)]
    year: Option<i32>,

    /// Print the resolved content as JSON and exit
    #[arg(long)]
    print_content: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so `--out -` stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let content = match &args.content {
        Some(path) => SiteContent::load_from_path(path)
            .with_context(|| format!("loading content from {}", path.display()))?,
        None => SiteContent::embedded().context("embedded content is invalid")?,
    };
    info!(
        services = content.services.len(),
        process = content.process.len(),
        faqs = content.faqs.len(),
        chat = content.chat.is_some(),
        "content ready"
    );

    if args.print_content {
        let json = serde_json::to_string_pretty(&content).context("serializing content")?;
        println!("{json}");
        return Ok(());
    }

    let year = args.year.unwrap_or_else(|| chrono::Local::now().year());
    let html = render_page(&content, year);
    write_output(&args.out, &html)?;

    Ok(())
}

fn write_output(out: &Path, html: &str) -> Result<()> {
    if out == Path::new("-") {
        std::io::stdout()
            .write_all(html.as_bytes())
            .context("writing to stdout")?;
        return Ok(());
    }

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(out, html).with_context(|| format!("writing {}", out.display()))?;
    info!(path = %out.display(), bytes = html.len(), "page written");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[cabeza-render] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn args_defaults() {
        let args = Args::parse_from(["cabeza-render"]);
        assert_eq!(args.out, PathBuf::from("dist/index.html"));
        assert!(args.content.is_none());
        assert!(!args.print_content);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn write_output_creates_parent_dirs() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("nested").join("index.html");
        write_output(&out, "<!DOCTYPE html>").expect("write");
        let written = std::fs::read_to_string(&out).expect("read back");
        assert_eq!(written, "<!DOCTYPE html>");
    }
}
