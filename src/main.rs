use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::info;

use titulares::config::Config;
use titulares::entities::EntityExtractor;
use titulares::report::ExportFormat;

/// Titulares: headline analytics for news pageview exports.
///
/// Joins a per-source pageview breakdown with per-article totals, finds each
/// article's dominant traffic source, and classifies every headline by
/// entities, tone, quotation, style and numbers.
#[derive(Parser)]
#[command(name = "titulares", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the enriched report from two pageview exports (any order)
    Report {
        /// One of the two CSV exports
        first: PathBuf,

        /// The other CSV export
        second: PathBuf,

        /// Only show titles containing this whole word (case-insensitive)
        #[arg(long, short)]
        keyword: Option<String>,

        /// Rows to show in the terminal (default: TITULARES_DISPLAY_LIMIT or 20)
        #[arg(long)]
        limit: Option<usize>,

        /// Write the full report to this file (--keyword does not narrow it)
        #[arg(long)]
        export: Option<PathBuf>,

        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: FormatArg,
    },

    /// Classify one or more titles without any traffic data
    Classify {
        /// Titles to classify (quote each one)
        #[arg(required = true)]
        titles: Vec<String>,
    },

    /// List the effective entity dictionary
    Entities,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("titulares=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Report {
            first,
            second,
            keyword,
            limit,
            export,
            format,
        } => {
            // Build the analyzer before reading any input so a broken one fails fast
            let analyzer = titulares::nlp::shared()?;
            let extractor = EntityExtractor::new(config.entity_dictionary()?);

            let output =
                titulares::pipeline::report::run(&first, &second, analyzer.as_ref(), &extractor)?;
            let report = output.report;

            titulares::output::terminal::display_rejections(&output.rejected);

            let keyword = keyword.filter(|k| !k.trim().is_empty());
            let rows = match &keyword {
                Some(k) => report.filter(k)?,
                None => report.all(),
            };
            info!(shown = rows.len(), total = report.len(), "Applied keyword filter");

            let limit = limit.unwrap_or(config.display_limit);
            titulares::output::terminal::display_report(
                &rows,
                limit,
                report.len(),
                keyword.as_deref(),
            );
            titulares::output::terminal::display_summary(&rows);

            if let Some(path) = export {
                report.export(&path, format.into())?;
                println!(
                    "\n{}",
                    format!("Report saved to: {} ({} rows)", path.display(), report.len()).bold()
                );
            }
        }

        Commands::Classify { titles } => {
            let analyzer = titulares::nlp::shared()?;
            let extractor = EntityExtractor::new(config.entity_dictionary()?);

            for title in &titles {
                let classification =
                    titulares::classify::classify_title(analyzer.as_ref(), &extractor, title);
                titulares::output::terminal::display_classification(title, &classification);
            }
        }

        Commands::Entities => {
            let dictionary = config.entity_dictionary()?;
            titulares::output::terminal::display_dictionary(&dictionary);
        }
    }

    Ok(())
}
