use data_loader::{Dataset, HeaderMode, LoadOptions};
use std::env;
use std::path::PathBuf;
use std::time::Instant;

// Usage: cargo run --release -p data-loader --example benchmark_load -- <movies> <ratings> [delimiter]
fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let mut args = env::args().skip(1);
    let movies = PathBuf::from(args.next().unwrap_or_else(|| "data/ml-1m/movies.dat".to_string()));
    let ratings = PathBuf::from(args.next().unwrap_or_else(|| "data/ml-1m/ratings.dat".to_string()));
    let delimiter = args.next().unwrap_or_else(|| "::".to_string());

    let options = LoadOptions::new(delimiter, HeaderMode::Auto).expect("Invalid delimiter");

    println!("Loading {} and {}...\n", ratings.display(), movies.display());

    let start = Instant::now();
    let dataset = Dataset::load_from_files(&ratings, &movies, &options)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let (ratings, movies) = dataset.counts();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", movies);
    println!("Ratings: {}", ratings);
    println!("\nPerformance: {:.0} ratings/second",
             ratings as f64 / elapsed.as_secs_f64());
}
