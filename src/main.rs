mod pipeline;
mod record;
mod render;
mod report;
mod settings;
mod source;
mod utils;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use record::Record;
use render::{Page, RenderOptions};
use settings::Settings;

#[derive(Parser)]
#[command(
    name = "expo_pages",
    about = "Build festival pages from the participant registration feed"
)]
struct Cli {
    /// Registration feed URL or JSON file (overrides configuration)
    #[arg(short, long, global = true)]
    source: Option<String>,
    /// Leave organization links exactly as registered
    #[arg(long, global = true)]
    no_normalize_links: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check activity registrations for missing data
    Check,
    /// List the classification of every registration
    Classification,
    /// List organization names alphabetically
    Names,
    /// List the pages that can be rendered
    Pages,
    /// Render a page to stdout
    Render {
        page: Page,
        /// Generate a full web page instead of an HTML snippet
        #[arg(short, long)]
        webpage: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    print!("{}", run(Cli::parse()).await?);
    Ok(())
}

/// Carry out one command and return what it prints.
async fn run(cli: Cli) -> anyhow::Result<String> {
    let output = match cli.command {
        Commands::Pages => report::pages_listing(),
        Commands::Check => {
            let (_, records) = load(cli.source, cli.no_normalize_links).await?;
            let diagnostics = pipeline::validate(&records);
            if diagnostics.is_clean() {
                info!("Checked {} records, no problems", records.len());
            } else {
                warn!(
                    "{} of {} records are missing data",
                    diagnostics.findings.len(),
                    records.len()
                );
            }
            report::check_report(&diagnostics)?
        }
        Commands::Classification => {
            let (_, records) = load(cli.source, cli.no_normalize_links).await?;
            report::classification_listing(&records)
        }
        Commands::Names => {
            let (_, records) = load(cli.source, cli.no_normalize_links).await?;
            report::names_listing(&records)
        }
        Commands::Render { page, webpage } => {
            let (settings, records) = load(cli.source, cli.no_normalize_links).await?;
            let neighborhoods = pipeline::build_neighborhoods(&records, &settings.enrich_options());
            info!(
                "Rendering {} for {} neighborhoods",
                page.name(),
                neighborhoods.len()
            );
            let options = RenderOptions { page, webpage };
            render::render(&neighborhoods, &options)
        }
    };
    Ok(output)
}

/// Resolve settings and fetch the registration feed.
async fn load(feed: Option<String>, no_normalize_links: bool) -> anyhow::Result<(Settings, Vec<Record>)> {
    let mut settings = Settings::load()?;
    settings.apply_overrides(feed, no_normalize_links);
    let records = source::fetch_payload(&settings).await?.info;
    Ok((settings, records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_render_with_flags() {
        let cli = Cli::try_parse_from([
            "expo_pages",
            "render",
            "participant-list",
            "--webpage",
            "--source",
            "feed.json",
            "--no-normalize-links",
        ])
        .unwrap();
        assert_eq!(cli.source.as_deref(), Some("feed.json"));
        assert!(cli.no_normalize_links);
        match cli.command {
            Commands::Render { page, webpage } => {
                assert_eq!(page, Page::ParticipantList);
                assert!(webpage);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn rejects_unknown_page() {
        assert!(Cli::try_parse_from(["expo_pages", "render", "sponsors"]).is_err());
    }

    #[tokio::test]
    async fn pages_needs_no_feed() {
        let cli = Cli::try_parse_from(["expo_pages", "pages", "--source", "missing.json"]).unwrap();
        assert_eq!(run(cli).await.unwrap(), report::pages_listing());
    }

    #[tokio::test]
    async fn names_reads_the_feed() {
        let cli = Cli::try_parse_from([
            "expo_pages",
            "names",
            "--source",
            "tests/fixtures/participants.json",
        ])
        .unwrap();
        let out = run(cli).await.unwrap();
        assert!(out.starts_with("Art League\nPaint\n\n"));
    }

    #[tokio::test]
    async fn missing_feed_is_an_error() {
        let cli = Cli::try_parse_from(["expo_pages", "check", "--source", "missing.json"]).unwrap();
        assert!(run(cli).await.is_err());
    }
}
