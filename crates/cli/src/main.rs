use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use discovery::{FilterCriteria, SortKey, assign_top_trainer, filter_and_sort};
use rand::Rng;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use trainer_data::{TrainerCatalog, TrainerRecord, unique_languages, unique_nationalities};

/// TutorScout - Trainer Discovery Engine
#[derive(Parser)]
#[command(name = "tutor-scout")]
#[command(about = "Search, filter, and rank tutoring-marketplace trainers", long_about = None)]
struct Cli {
    /// Path to a trainers JSON file (API payload capture)
    #[arg(short, long, default_value = "data/trainers.json")]
    trainers: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and rank trainers with the given criteria
    Search {
        #[command(flatten)]
        criteria: CriteriaArgs,

        /// Number of results to display
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// List the facet vocabulary (nationalities, languages) of the catalog
    Facets,

    /// Pick the single best available trainer
    Match {
        #[command(flatten)]
        criteria: CriteriaArgs,

        /// Student's preferred language
        #[arg(long)]
        preferred_language: Option<String>,
    },

    /// Run concurrent filter invocations to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "1000")]
        requests: usize,

        /// Number of concurrent workers
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

/// Filter criteria as CLI flags; empty flags stay inactive, exactly like
/// empty UI inputs.
#[derive(Args, Clone)]
struct CriteriaArgs {
    /// Free-text search over name, bio, languages, and specializations
    #[arg(long, default_value = "")]
    query: String,

    /// Language facet filter (case-insensitive substring)
    #[arg(long, default_value = "")]
    language: String,

    /// Minimum hourly rate (inclusive)
    #[arg(long, default_value = "")]
    min_rate: String,

    /// Maximum hourly rate (inclusive)
    #[arg(long, default_value = "")]
    max_rate: String,

    /// Minimum years of experience
    #[arg(long, default_value = "")]
    min_experience: String,

    /// Specialization filter (case-insensitive substring)
    #[arg(long, default_value = "")]
    specialization: String,

    /// Minimum rating, 0-5
    #[arg(long, default_value = "")]
    min_rating: String,

    /// Nationality code (exact match, e.g. ES)
    #[arg(long, default_value = "")]
    nationality: String,

    /// Sort key: rating, price_low, price_high, experience
    #[arg(long, default_value = "rating")]
    sort: String,
}

impl CriteriaArgs {
    fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search_text: self.query.clone(),
            language: self.language.clone(),
            min_rate: self.min_rate.clone(),
            max_rate: self.max_rate.clone(),
            min_experience: self.min_experience.clone(),
            specialization: self.specialization.clone(),
            min_rating: self.min_rating.clone(),
            nationality: self.nationality.clone(),
            sort: SortKey::from_param(&self.sort),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("Loading trainers from {}...", cli.trainers.display());
    let start = Instant::now();
    let catalog = TrainerCatalog::load_from_file(&cli.trainers)
        .context("Failed to load trainers file")?;
    println!(
        "{} Loaded {} trainers in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    match cli.command {
        Commands::Search { criteria, limit } => handle_search(&catalog, &criteria, limit),
        Commands::Facets => handle_facets(&catalog),
        Commands::Match {
            criteria,
            preferred_language,
        } => handle_match(&catalog, &criteria, preferred_language.as_deref()),
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(&catalog, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &TrainerCatalog, criteria: &CriteriaArgs, limit: usize) {
    let start = Instant::now();
    let results = filter_and_sort(catalog.records(), &criteria.to_criteria());
    let elapsed = start.elapsed();

    println!(
        "\n{} of {} trainers match ({:?})\n",
        results.len().to_string().bold(),
        catalog.len(),
        elapsed
    );

    for trainer in results.iter().take(limit) {
        print_trainer_card(trainer);
    }

    if results.len() > limit {
        println!("... and {} more (raise --limit to see them)", results.len() - limit);
    }
}

/// Handle the 'facets' command
fn handle_facets(catalog: &TrainerCatalog) {
    let mut nationalities: Vec<String> =
        unique_nationalities(catalog.records()).into_iter().collect();
    nationalities.sort_unstable();

    let mut languages: Vec<String> = unique_languages(catalog.records()).into_iter().collect();
    languages.sort_unstable();

    println!("\n{} ({})", "Nationalities".bold(), nationalities.len());
    println!("  {}", nationalities.join(", "));

    println!("\n{} ({})", "Languages".bold(), languages.len());
    println!("  {}", languages.join(", "));
}

/// Handle the 'match' command
fn handle_match(catalog: &TrainerCatalog, criteria: &CriteriaArgs, preferred_language: Option<&str>) {
    let filtered = filter_and_sort(catalog.records(), &criteria.to_criteria());

    match assign_top_trainer(&filtered, preferred_language) {
        Some(trainer) => {
            println!("\n{}", "Top match:".bold());
            print_trainer_card(trainer);
        }
        None => println!(
            "\n{} No available trainer matches the given criteria",
            "✗".red()
        ),
    }
}

/// Handle the 'benchmark' command
///
/// The engine is pure and stateless, so concurrent invocations with
/// different criteria must be independent; this hammers it from several
/// workers at once and reports throughput.
async fn handle_benchmark(catalog: &TrainerCatalog, requests: usize, concurrent: usize) -> Result<()> {
    let records: Arc<Vec<TrainerRecord>> = Arc::new(catalog.records().to_vec());
    let per_worker = requests.div_ceil(concurrent.max(1));

    println!(
        "\nRunning {} requests across {} workers...",
        requests, concurrent
    );
    let start = Instant::now();

    let mut handles = Vec::new();
    for worker in 0..concurrent {
        let records = records.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let mut rng = rand::rng();
            let mut matched_total = 0usize;
            for _ in 0..per_worker {
                let criteria = random_criteria(&mut rng, worker);
                matched_total += filter_and_sort(&records, &criteria).len();
            }
            matched_total
        }));
    }

    let mut matched_total = 0usize;
    for handle in handles {
        matched_total += handle.await?;
    }

    let elapsed = start.elapsed();
    let total = per_worker * concurrent;
    println!(
        "{} {} invocations in {:?} ({:.0} req/s, {:.1} avg matches)",
        "✓".green(),
        total,
        elapsed,
        total as f64 / elapsed.as_secs_f64(),
        matched_total as f64 / total as f64
    );

    Ok(())
}

/// Build a plausible random criteria object for benchmarking.
fn random_criteria(rng: &mut impl Rng, worker: usize) -> FilterCriteria {
    const QUERIES: &[&str] = &["", "english", "exam", "business", "tutor"];
    const RATINGS: &[&str] = &["", "3.5", "4", "4.5"];
    const SORTS: &[SortKey] = &[
        SortKey::Rating,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Experience,
    ];

    FilterCriteria {
        search_text: QUERIES[rng.random_range(0..QUERIES.len())].to_string(),
        min_rating: RATINGS[rng.random_range(0..RATINGS.len())].to_string(),
        max_rate: if worker % 2 == 0 {
            format!("{}", rng.random_range(20..80))
        } else {
            String::new()
        },
        sort: SORTS[rng.random_range(0..SORTS.len())],
        ..FilterCriteria::default()
    }
}

/// Print one trainer as a result card.
fn print_trainer_card(trainer: &TrainerRecord) {
    let name = trainer.name.as_deref().unwrap_or("(unnamed)");
    let rating = if trainer.rating.is_some() {
        format!(
            "★ {:.1} ({} reviews)",
            trainer.effective_rating(),
            trainer.review_count
        )
    } else {
        "unrated".to_string()
    };

    println!(
        "{}  {}  {}",
        name.bold(),
        rating.yellow(),
        format!("${:.0}/hr", trainer.effective_rate()).green()
    );

    let languages: Vec<&str> = trainer.language_facets().collect();
    if !languages.is_empty() {
        println!("  languages: {}", languages.join(", ").cyan());
    }
    if !trainer.specializations.is_empty() {
        println!("  focus: {}", trainer.specializations.join(", "));
    }
    if let Some(code) = &trainer.nationality {
        println!("  nationality: {code}");
    }
    println!();
}
