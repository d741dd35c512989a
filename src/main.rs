mod config;
mod display;
mod launcher;
mod webview;

use config::Config;
use display::backend_for;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::load();
    let backend = backend_for(config.display.backend);

    launcher::run(config, backend.as_ref())
}
