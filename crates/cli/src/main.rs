mod args;
mod render;

use anyhow::{Context, Result};
use args::FilterArgs;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use data_loader::{Movie, MovieTable};
use pipeline::{CriteriaError, FilterCriteria};
use render::TableRenderer;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Instant;

/// MyFlix - Movie Recommendations from IMDb ratings
#[derive(Parser)]
#[command(name = "myflix")]
#[command(about = "This is a CLI movie recommendation system", long_about = None)]
struct Cli {
    /// Path to the merged movies CSV (see myflix-build)
    #[arg(short, long, global = true, default_value = "data/movies.csv")]
    data: PathBuf,

    /// Disable colors and bold text
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get recommendations based on genre and a rating range
    Recommend {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Search movies by title (case-insensitive substring match)
    Search {
        /// Text to look for in the title
        query: String,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the table on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let renderer = TableRenderer::new(!cli.no_color && std::io::stdout().is_terminal());

    // Validate options before touching the dataset
    let filters = match &cli.command {
        Commands::Recommend { filters } | Commands::Search { filters, .. } => filters,
    };
    let criteria = filters.to_criteria().unwrap_or_else(|err| usage_error(err));

    let start = Instant::now();
    let table = MovieTable::load_from_csv(&cli.data)
        .with_context(|| format!("Failed to load movie dataset from {}", cli.data.display()))?;
    tracing::info!("Loaded {} movies in {:?}", table.len(), start.elapsed());

    // Dispatch to appropriate command handler
    match &cli.command {
        Commands::Recommend { .. } => handle_recommend(&table, &criteria, renderer),
        Commands::Search { query, .. } => handle_search(&table, query, &criteria, renderer),
    }

    Ok(())
}

/// Report invalid filter options the same way clap reports its own errors
fn usage_error(err: CriteriaError) -> ! {
    let kind = match err {
        CriteriaError::ConflictingRatingFilters => ErrorKind::ArgumentConflict,
        CriteriaError::InvalidRatingRange { .. } | CriteriaError::ZeroLimit => {
            ErrorKind::ValueValidation
        }
    };
    Cli::command().error(kind, err).exit()
}

/// Handle the 'recommend' command
fn handle_recommend(table: &MovieTable, criteria: &FilterCriteria, renderer: TableRenderer) {
    let movies = pipeline::recommend(table, criteria);
    print_movies("Recommended Movies", &movies, renderer);
}

/// Handle the 'search' command
fn handle_search(table: &MovieTable, query: &str, criteria: &FilterCriteria, renderer: TableRenderer) {
    let movies = pipeline::search(table, query, criteria);
    print_movies(&format!("Search results for '{}'", query), &movies, renderer);
}

fn print_movies(title: &str, movies: &[&Movie], renderer: TableRenderer) {
    tracing::debug!("Rendering {} movies", movies.len());
    println!("{}", renderer.render(title, movies));
}
