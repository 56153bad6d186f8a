// SPDX-License-Identifier: PMPL-1.0-or-later

//! transtat: render translation-status tables from catalog statistics
//!
//! Reads the per-language counts written by the catalog statistics
//! extractor and produces the status table for the project's translation
//! page, or a JSON/YAML/terminal rendition of the same data.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use transtat::config::{MissingNamePolicy, Settings};
use transtat::report::{self, ReportOutputFormat};
use transtat::{logging, status};

#[derive(Parser)]
#[command(name = "transtat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Translation-status tables for gettext message catalogs")]
#[command(long_about = None)]
struct Cli {
    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the status report
    Render {
        /// Catalog status file (.json, .yaml or .toml)
        #[arg(short, long, value_name = "FILE")]
        status: PathBuf,

        /// Config file (TOML); built-in defaults when omitted
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: ReportOutputFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the bar width in pixels
        #[arg(long)]
        bar_width: Option<u32>,

        /// Override the branch used in download links
        #[arg(long)]
        branch: Option<String>,

        /// Fail when a language code has no display name
        #[arg(long)]
        strict: bool,

        /// Disable colored terminal output
        #[arg(long)]
        no_color: bool,
    },

    /// Check status data against the language-name table
    Check {
        /// Catalog status file (.json, .yaml or .toml)
        #[arg(short, long, value_name = "FILE")]
        status: PathBuf,

        /// Config file (TOML)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// List the language-name table
    Languages {
        /// Config file (TOML)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Render {
            status,
            config,
            format,
            output,
            bar_width,
            branch,
            strict,
            no_color,
        } => {
            if no_color || output.is_some() {
                colored::control::set_override(false);
            }

            let mut settings = load_settings(config.as_ref())?;
            if let Some(width) = bar_width {
                settings.report.bar_width = width;
            }
            if let Some(branch) = branch {
                settings.report.branch = branch;
            }
            if strict {
                settings.report.missing_name = MissingNamePolicy::Strict;
            }

            let entries = status::load_status(&status)
                .with_context(|| format!("loading catalog status from {}", status.display()))?;
            let report = report::render_report(&settings.languages, &entries, &settings.report)
                .context("rendering status report")?;

            match output {
                Some(path) => {
                    report::save_report(&report, &settings.report, format, &path)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Report saved to: {}", path.display());
                }
                None => {
                    print!("{}", format.serialize(&report, &settings.report)?);
                    if format != ReportOutputFormat::Html {
                        println!();
                    }
                }
            }
        }

        Commands::Check { status, config } => {
            let settings = load_settings(config.as_ref())?;
            let entries = status::load_status(&status)
                .with_context(|| format!("loading catalog status from {}", status.display()))?;

            let check = status::check_catalogs(&entries, &settings.languages);
            for code in &check.broken {
                let name = settings.languages.resolve(code).unwrap_or(code);
                println!("  {} {} ({}): no messages", "BROKEN".red().bold(), name, code);
            }
            for code in &check.missing {
                println!(
                    "  {} {}: no display name for key `{}`",
                    "MISSING".yellow().bold(),
                    code,
                    transtat::i18n::lookup_key(code)
                );
            }

            println!(
                "{} catalogs checked, {} broken, {} without a display name",
                check.checked,
                check.broken.len(),
                check.missing.len()
            );
            if !check.passed() {
                bail!("{} language code(s) have no display name", check.missing.len());
            }
        }

        Commands::Languages { config } => {
            let settings = load_settings(config.as_ref())?;
            for (code, name) in settings.languages.iter() {
                println!("{:<8} {}", code, name);
            }
        }
    }

    Ok(())
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings> {
    Settings::load_or_default(path.map(PathBuf::as_path)).with_context(|| match path {
        Some(path) => format!("loading config from {}", path.display()),
        None => "loading default config".to_string(),
    })
}
