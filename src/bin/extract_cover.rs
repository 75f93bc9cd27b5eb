use std::env;
use std::process::ExitCode;

use music_catalog::{cover, logging};

fn main() -> ExitCode {
    logging::init();

    let Some(song) = cover::song_argument(env::args_os().skip(1)) else {
        eprintln!("Usage: extract-cover <song.mp3>");
        return ExitCode::from(1);
    };

    let out_dir = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: cannot resolve working directory: {e}");
            return ExitCode::from(1);
        }
    };

    match cover::extract_cover(&song, &out_dir) {
        Ok(Some(path)) => {
            println!("Album cover saved to: {}", path.display());
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("No album art found in {}", song.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
