//! Entry point for the résumé gallery scene builder.

use anyhow::Result;
use gallery_viewer::app::App;
use std::io::{self, Write};

fn main() -> Result<()> {
    // Initialize logging; default to "info" if RUST_LOG is unset.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // The entire transformation runs once, here. The renderer consumes the
    // scene description written below.
    let app = App::new();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app.write_scene(&mut out)?;
    out.flush()?;

    Ok(())
}
