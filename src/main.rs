use std::process::ExitCode;

use music_catalog::{logging, runtime};

fn main() -> ExitCode {
    logging::init();
    runtime::run()
}
