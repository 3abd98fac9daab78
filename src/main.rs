//! Carousel viewer binary: `carousel [options.toml]`.

use std::path::Path;

use carousel::{Options, Viewer};

/// Load a TOML preset or exit with the error logged.
fn load_options(path: &str) -> Options {
    match Options::load(Path::new(path)) {
        Ok(options) => {
            log::info!("loaded options from {path}");
            options
        }
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let options = std::env::args()
        .nth(1)
        .map_or_else(Options::default, |path| load_options(&path));

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
