use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

/// Gazette: statute revision tracking for compliance teams.
///
/// Fetches effective-date revisions from the Korean national law registry
/// (law.go.kr) and matches them against the company's applied-law baseline.
#[derive(Parser)]
#[command(name = "gazette", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory and baseline file
    Init,

    /// Fetch a year of statute revisions from the national law registry
    Fetch {
        /// Year to fetch (default: current year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Match a year's revisions against the baseline
    Match {
        /// Snapshot year to match (default: current year)
        #[arg(long)]
        year: Option<i32>,

        /// Require exact title matches (after normalization)
        #[arg(long)]
        exact: bool,

        /// Similarity threshold for fuzzy matching (default: 0.6)
        #[arg(long)]
        threshold: Option<f64>,

        /// Also write a markdown report to this path
        #[arg(long)]
        markdown: Option<String>,
    },

    /// Suggest registry laws to add to the baseline
    Suggest {
        /// The law title to look up (e.g. "중대재해 처벌 등에 관한 법률")
        title: String,

        /// Business categories to weigh in (repeatable)
        #[arg(long)]
        category: Vec<String>,

        /// Max suggestions to show (default: 10)
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Snapshot year to search (default: current year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Display a saved match report
    Report {
        /// Report year to display (default: current year)
        #[arg(long)]
        year: Option<i32>,

        /// Also write a markdown report to this path
        #[arg(long)]
        markdown: Option<String>,
    },

    /// Show system status (data dir, snapshots, reports)
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gazette=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            info!("Initializing gazette data directory...");
            let config = gazette::config::Config::load()?;
            let store = gazette::store::Store::open(&config.data_dir)?;
            let created = store.ensure_baseline()?;

            println!("Data directory ready at: {}", store.root().display());
            if created {
                println!("Baseline created: {}", store.baseline_path().display());
            } else {
                println!(
                    "Baseline already present: {}",
                    store.baseline_path().display()
                );
            }
            println!("\nGazette is ready. Next steps:");
            println!("  1. Add your applied laws to baseline.json");
            println!("  2. Set LAW_API_OC in .env (register at open.law.go.kr)");
            println!("  3. Run: gazette fetch");
        }

        Commands::Fetch { year } => {
            let config = gazette::config::Config::load()?;
            config.require_api()?;
            let store = gazette::store::Store::open(&config.data_dir)?;
            let year = config.year_or_default(year);

            println!("Fetching {year} statute revisions from the law registry...");

            let client = gazette::lawgo::client::LawGoClient::new(&config.api_url, &config.api_oc)?;
            let limiter = gazette::lawgo::rate_limit::RateLimiter::per_second(1.0);

            let laws = gazette::lawgo::fetch::fetch_year(&client, &limiter, year).await?;

            let snapshot = gazette::store::LawSnapshot::new(year, laws);
            store.save_snapshot(&snapshot)?;

            println!("\n{}", "Fetch complete.".bold());
            println!("  Revisions fetched: {}", snapshot.total_laws);
            println!("  Snapshot: {}", store.snapshot_path(year).display());
            println!("\nNext: gazette match --year {year}");
        }

        Commands::Match {
            year,
            exact,
            threshold,
            markdown,
        } => {
            let config = gazette::config::Config::load()?;
            let store = gazette::store::Store::open(&config.data_dir)?;
            let year = config.year_or_default(year);

            let baseline = store.load_baseline()?;
            if baseline.items.is_empty() {
                println!(
                    "Baseline is empty. Add your applied laws to {} first.",
                    store.baseline_path().display()
                );
                return Ok(());
            }
            let snapshot = store.load_snapshot(year)?;

            if exact && threshold.is_some() {
                warn!("--threshold has no effect in exact mode");
            }
            let mode = if exact {
                gazette::matching::matcher::MatchMode::Exact
            } else {
                gazette::matching::matcher::MatchMode::Fuzzy {
                    threshold: threshold
                        .unwrap_or(gazette::matching::matcher::DEFAULT_FUZZY_THRESHOLD),
                }
            };

            println!(
                "Matching {} baseline laws against {} revisions ({} mode)...",
                baseline.items.len(),
                snapshot.laws.len(),
                mode.as_str()
            );

            let report =
                gazette::matching::matcher::match_baselines(&baseline.items, &snapshot.laws, mode);
            let stats = gazette::stats::aggregate(&report);

            gazette::output::terminal::display_match_report(&report, &stats);

            if let Some(path) = markdown {
                let report_path =
                    gazette::output::markdown::generate_report(&report, &stats, year, &path)?;
                println!(
                    "\n{}",
                    format!("Markdown report saved to: {report_path}").bold()
                );
            }

            let document = gazette::store::ReportDocument::new(year, mode, report, stats);
            store.save_report(&document)?;
            println!("\nReport saved: {}", store.report_path(year).display());
        }

        Commands::Suggest {
            title,
            category,
            limit,
            year,
        } => {
            let config = gazette::config::Config::load()?;
            let store = gazette::store::Store::open(&config.data_dir)?;
            let year = config.year_or_default(year);

            let snapshot = store.load_snapshot(year)?;
            let categories: std::collections::BTreeSet<String> = category.into_iter().collect();

            let suggestions =
                gazette::matching::suggest::suggest(&title, &categories, &snapshot.laws, limit);
            gazette::output::terminal::display_suggestions(&title, &suggestions);
        }

        Commands::Report { year, markdown } => {
            let config = gazette::config::Config::load()?;
            let store = gazette::store::Store::open(&config.data_dir)?;
            let year = config.year_or_default(year);

            let document = store.load_report(year)?;
            let report = document.report();

            let generated = document
                .metadata
                .generated_at
                .get(..10)
                .unwrap_or(&document.metadata.generated_at);
            println!(
                "{}",
                format!(
                    "Saved report for {year} ({} mode, generated {generated})",
                    document.metadata.mode
                )
                .dimmed()
            );

            gazette::output::terminal::display_match_report(&report, &document.statistics);

            if let Some(path) = markdown {
                let report_path = gazette::output::markdown::generate_report(
                    &report,
                    &document.statistics,
                    year,
                    &path,
                )?;
                println!(
                    "\n{}",
                    format!("Markdown report saved to: {report_path}").bold()
                );
            }
        }

        Commands::Status => {
            let config = gazette::config::Config::load()?;
            let store = gazette::store::Store::open(&config.data_dir)?;
            gazette::status::show(&store)?;
        }
    }

    Ok(())
}
