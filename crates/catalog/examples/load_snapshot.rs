use catalog::{load_snapshot, ShelfType};
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data/sample");

    println!("Loading catalog snapshot...\n");

    let start = Instant::now();
    let snapshot = load_snapshot(data_dir).expect("Failed to load snapshot");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Books: {}", snapshot.catalog.len());
    println!("Genres: {}", snapshot.catalog.genres().join(", "));
    for shelf in ShelfType::ALL {
        println!("{}: {}", shelf.label(), snapshot.library.on_shelf(shelf).count());
    }
}
