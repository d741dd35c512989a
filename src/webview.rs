use crate::config::Config;
use webkit6::prelude::*;
use webkit6::{Settings, WebView};

/// Build the embedded view, apply the configured engine capabilities, and
/// start loading the target address. Load failures stay inside the engine;
/// the view renders whatever the engine gives back.
pub fn build(config: &Config) -> WebView {
    let caps = &config.capabilities;

    let settings = Settings::new();
    settings.set_enable_javascript(caps.scripts);
    settings.set_enable_webgl(caps.webgl);
    settings.set_enable_fullscreen(caps.fullscreen);
    settings.set_enable_webaudio(caps.audio);
    settings.set_enable_html5_local_storage(caps.local_storage);
    settings.set_enable_html5_database(caps.database);

    let view = WebView::new();
    view.set_settings(&settings);

    tracing::info!(url = %config.target_url, capabilities = %caps.summary(), "loading target");
    view.load_uri(&config.target_url);

    view
}
