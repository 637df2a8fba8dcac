use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use data_loader::{HeaderMode, LoadOptions, DEFAULT_DELIMITER};
use pipeline::{QueryConfig, ResultRow, TopGenre, DEFAULT_GENRE, DEFAULT_LIMIT, DEFAULT_MIN_RATINGS};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Top of Genre - best-rated movies of a genre from MovieLens-style files
#[derive(Parser)]
#[command(name = "top-of-genre")]
#[command(about = "Shows the top rated movies of a genre", long_about = None)]
struct Cli {
    /// Movies file (movieId, title, genres)
    movies_file: PathBuf,

    /// Ratings file (userId, movieId, rating[, timestamp])
    ratings_file: PathBuf,

    /// Field delimiter of both files, e.g. "::" or ","
    #[arg(long, visible_alias = "delim", default_value = DEFAULT_DELIMITER, env = "TOP_OF_GENRE_DELIMITER")]
    delimit: String,

    /// Genre to rank (exact, case-sensitive)
    #[arg(long, default_value = DEFAULT_GENRE, env = "TOP_OF_GENRE_GENRE")]
    genre: String,

    /// Only movies with more ratings than this are ranked
    #[arg(long, default_value_t = DEFAULT_MIN_RATINGS, env = "TOP_OF_GENRE_MIN_RATINGS")]
    min_ratings: u32,

    /// Number of rows to show
    #[arg(long, default_value_t = DEFAULT_LIMIT, env = "TOP_OF_GENRE_LIMIT")]
    limit: usize,

    /// How to decide whether the files start with a header row
    #[arg(long, value_enum, default_value_t = HeaderArg::Auto)]
    header: HeaderArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum HeaderArg {
    /// Detect per file from its first line
    Auto,
    /// Both files have a header row
    Present,
    /// Neither file has a header row
    Absent,
    /// Detect on the movies file and apply the answer to both
    FromMovies,
}

impl From<HeaderArg> for HeaderMode {
    fn from(arg: HeaderArg) -> Self {
        match arg {
            HeaderArg::Auto => HeaderMode::Auto,
            HeaderArg::Present => HeaderMode::Present,
            HeaderArg::Absent => HeaderMode::Absent,
            HeaderArg::FromMovies => HeaderMode::FromMovies,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    // Initialize tracing; logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let start = Instant::now();

    let options = LoadOptions::new(cli.delimit.as_str(), cli.header.into())
        .context("Invalid load options")?;
    let config = QueryConfig::new(cli.genre.as_str())
        .with_min_ratings(cli.min_ratings)
        .with_limit(cli.limit);
    let runner = TopGenre::new(config)?;

    info!(
        movies = %cli.movies_file.display(),
        ratings = %cli.ratings_file.display(),
        "Computing top movies"
    );
    let results = runner
        .run_files(&cli.ratings_file, &cli.movies_file, &options)
        .with_context(|| format!("Failed to compute top movies of genre {}", cli.genre))?;
    let shown = &results[..results.len().min(cli.limit)];

    match cli.format {
        OutputFormat::Table => {
            print_results(shown);
            print_banner(&cli.genre);
            println!("{}", "------------------------".dimmed());
            println!("Runtime: {:?}", start.elapsed());
            println!("{}", "------------------------".dimmed());
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(shown).context("Failed to serialize results")?;
            println!("{}", json);
            info!(elapsed = ?start.elapsed(), "Done");
        }
    }

    Ok(())
}

/// Helper function to format and print the ranked rows
fn print_results(results: &[ResultRow]) {
    let width = results
        .iter()
        .map(|row| row.title.len())
        .max()
        .unwrap_or(0)
        .max("movieTitle".len());

    println!(
        "{}",
        format!("{:<width$} | {:<18} | {}", "movieTitle", "avg(rating)", "count").bold()
    );
    for row in results {
        println!(
            "{:<width$} | {} | {}",
            row.title,
            format!("{:<18}", row.avg_rating).green(),
            row.rating_count
        );
    }
    if results.is_empty() {
        println!("{}", "(no movies matched)".yellow());
    }
}

fn print_banner(genre: &str) {
    println!("{}", format!("> Top movies of genre: {}", genre).bold().blue());
}
