use std::path::Path;

use music_catalog::{logging, rename};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let renames = rename::normalize_names(Path::new("."))?;
    println!("Renamed {} file(s)", renames.len());
    Ok(())
}
