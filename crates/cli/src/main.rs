use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use menu_loader::Catalog;
use recommender::{MenuRecommendation, Query, Recommender, ANY};
use server::{AppState, ServerConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// menu-recs - Dish recommendations from a restaurant menu
#[derive(Parser)]
#[command(name = "menu-recs")]
#[command(about = "Recommend dishes by food type, gravy and free-text preference", long_about = None)]
struct Cli {
    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the menu JSON file (overrides the config)
    #[arg(short, long)]
    menu: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend up to three dishes
    Recommend {
        /// Food type filter, e.g. "curry" (substring, case-insensitive)
        #[arg(long, default_value = ANY)]
        food_type: String,

        /// Gravy color filter, e.g. "red"
        #[arg(long, default_value = ANY)]
        gravy_color: String,

        /// Free-text preference, e.g. "spicy egg"
        #[arg(long)]
        preference: Option<String>,

        /// Show scores and how they were computed
        #[arg(long)]
        explain: bool,
    },

    /// List the menu grouped by food type
    Menu,

    /// Run the HTTP server
    Serve {
        /// Address to listen on (overrides the config)
        #[arg(long)]
        addr: Option<String>,
    },

    /// Time random queries against the recommender
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "1000")]
        requests: usize,
    },
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

    run(Cli::parse(), &mut io::stdout()).await
}

/// Dispatch a parsed command line, writing user-facing output to `out`.
async fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let mut config = ServerConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(menu) = cli.menu {
        config.menu_path = menu;
    }

    match cli.command {
        Commands::Serve { addr } => {
            if let Some(addr) = addr {
                config.bind_addr = addr;
            }
            let state = AppState::load(config)?;
            writeln!(
                out,
                "{} Serving {} dishes on http://{}",
                "✓".green(),
                state.catalog.len(),
                state.config.bind_addr
            )?;
            server::run(state).await?;
        }
        Commands::Recommend {
            food_type,
            gravy_color,
            preference,
            explain,
        } => {
            let catalog = load_catalog(&config)?;
            let mut query = Query::new(&food_type, &gravy_color);
            if let Some(preference) = preference {
                query = query.with_preference(preference);
            }
            handle_recommend(out, catalog, config, &query, explain)?;
        }
        Commands::Menu => {
            let catalog = load_catalog(&config)?;
            handle_menu(out, &catalog)?;
        }
        Commands::Benchmark { requests } => {
            let catalog = load_catalog(&config)?;
            handle_benchmark(out, catalog, config, requests)?;
        }
    }

    Ok(())
}

fn load_catalog(config: &ServerConfig) -> Result<Arc<Catalog>> {
    let catalog = Catalog::load_from_file(&config.menu_path)
        .with_context(|| format!("Failed to load menu {}", config.menu_path.display()))?;
    Ok(Arc::new(catalog))
}

/// Handle the 'recommend' command
fn handle_recommend(
    out: &mut impl Write,
    catalog: Arc<Catalog>,
    config: ServerConfig,
    query: &Query,
    explain: bool,
) -> Result<()> {
    let recommender = Recommender::new(catalog, config.recommender);

    let result = recommender.recommend(query);
    if result.used_fallback {
        writeln!(
            out,
            "{}",
            "No dish matched those filters; showing the first dishes on the menu.".yellow()
        )?;
    }
    print_recommendations(out, &result.items, explain)
}

/// Handle the 'menu' command
fn handle_menu(out: &mut impl Write, catalog: &Catalog) -> Result<()> {
    writeln!(out, "{}", format!("Menu ({} dishes)", catalog.len()).bold().blue())?;
    for kind in catalog.food_types() {
        writeln!(out, "{}", kind.bold())?;
        for dish in catalog.dishes().iter().filter(|d| d.kind == kind) {
            writeln!(
                out,
                "  {} {} [{}] - {}",
                "•".green(),
                dish.name,
                dish.gravy,
                dish.description.dimmed()
            )?;
        }
    }
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(
    out: &mut impl Write,
    catalog: Arc<Catalog>,
    config: ServerConfig,
    requests: usize,
) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }
    if catalog.is_empty() {
        bail!("Cannot benchmark an empty menu");
    }

    let start = Instant::now();
    let recommender = Recommender::new(catalog.clone(), config.recommender);
    writeln!(out, "{} Built recommender in {:?}", "✓".green(), start.elapsed())?;

    let mut food_types = vec![ANY];
    food_types.extend(catalog.food_types());
    let mut gravies = vec![ANY];
    gravies.extend(catalog.gravy_colors());

    // Random filters, and a preference made of two words from a random description
    let queries: Vec<Query> = (0..requests)
        .map(|_| {
            let food_type = food_types[random_index(food_types.len())];
            let gravy = gravies[random_index(gravies.len())];
            let dish = &catalog.dishes()[random_index(catalog.len())];
            let words: Vec<&str> = dish.description.split_whitespace().collect();
            let preference = (0..2)
                .filter_map(|_| (!words.is_empty()).then(|| words[random_index(words.len())]))
                .collect::<Vec<_>>()
                .join(" ");
            Query::new(food_type, gravy).with_preference(preference)
        })
        .collect();

    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    let mut fallbacks = 0;
    let total_start = Instant::now();
    for query in &queries {
        let start = Instant::now();
        let result = recommender.recommend(query);
        timings.push(start.elapsed());
        if result.used_fallback {
            fallbacks += 1;
        }
    }
    let total_time = total_start.elapsed();

    timings.sort();
    let avg_latency = timings.iter().sum::<Duration>() / timings.len() as u32;
    let p50 = timings[timings.len() / 2];
    let p95 = timings[((timings.len() as f32 * 0.95) as usize).min(timings.len() - 1)];
    let p99 = timings[((timings.len() as f32 * 0.99) as usize).min(timings.len() - 1)];
    let throughput = requests as f64 / total_time.as_secs_f64();

    writeln!(out, "{}", "Benchmark results:".bold().blue())?;
    writeln!(out, "Requests: {} ({} fell back to menu defaults)", requests, fallbacks)?;
    writeln!(out, "Total time: {:?}", total_time)?;
    writeln!(out, "Average latency: {:?}", avg_latency)?;
    writeln!(out, "P50 latency: {:?}", p50)?;
    writeln!(out, "P95 latency: {:?}", p95)?;
    writeln!(out, "P99 latency: {:?}", p99)?;
    writeln!(out, "Throughput: {:.2} requests/second", throughput)?;

    Ok(())
}

fn random_index(len: usize) -> usize {
    rand::random::<u32>() as usize % len
}

/// Helper function to format and print recommendations
fn print_recommendations(
    out: &mut impl Write,
    recommendations: &[MenuRecommendation],
    explain: bool,
) -> Result<()> {
    writeln!(out, "{}", "Recommended dishes:".bold().blue())?;
    for (i, rec) in recommendations.iter().enumerate() {
        writeln!(
            out,
            "{}. {} ({} / {}) - {}",
            (i + 1).to_string().green(),
            rec.dish.name,
            rec.dish.kind,
            rec.dish.gravy,
            rec.dish.description
        )?;
        if explain {
            writeln!(
                out,
                "   Score: {:.3} [{:?}] {}",
                rec.score, rec.kind, rec.explanation
            )?;
        }
    }
    Ok(())
}
