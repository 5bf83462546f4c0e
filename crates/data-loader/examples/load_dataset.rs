use data_loader::MovieTable;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/movies.csv");

    println!("Loading merged movie dataset...\n");

    let start = Instant::now();
    let table = MovieTable::load_from_csv(path)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let missing_genres = table.movies().iter().filter(|m| m.genres.is_none()).count();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", table.len());
    println!("Movies without genres: {}", missing_genres);
    if let Some(top) = table.movies().first() {
        println!(
            "Top rated: {} ({:?})",
            top.title.as_deref().unwrap_or("-"),
            top.rating
        );
    }
    println!("\nPerformance: {:.0} rows/second",
             table.len() as f64 / elapsed.as_secs_f64());
}
