use crate::config::Config;
use crate::display::{DisplayBackend, DisplayError};
use crate::webview;
use gtk4::gdk;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow};
use std::process::ExitCode;
use webkit6::prelude::WebViewExt;

const APP_ID: &str = "dev.webkiosk.launcher";

const FALLBACK_WIDTH: i32 = 1280;
const FALLBACK_HEIGHT: i32 = 720;

/// Open the display, show the kiosk window, and block in the event loop
/// until the window is gone. The only fatal path is a display connection
/// that cannot be opened.
pub fn run(config: Config, backend: &dyn DisplayBackend) -> ExitCode {
    match try_run(config, backend) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(status) => ExitCode::from(status as u8),
        Err(err) => {
            eprintln!("webkiosk: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(config: Config, backend: &dyn DisplayBackend) -> Result<i32, DisplayError> {
    let link = backend.open()?;
    tracing::info!(backend = backend.name(), "display connection established");

    let app = Application::builder().application_id(APP_ID).build();

    app.connect_activate(move |app| {
        build_ui(app, &config);
    });

    // we don't use GTK's arg parsing
    let status = app.run_with_args::<&str>(&[]);

    link.close();
    tracing::info!(status = status.value(), "event loop finished");
    Ok(status.value())
}

fn build_ui(app: &Application, config: &Config) {
    let (width, height) = primary_screen_size().unwrap_or_else(|| {
        tracing::warn!("no monitor reported, using fallback geometry");
        (FALLBACK_WIDTH, FALLBACK_HEIGHT)
    });

    let window = ApplicationWindow::builder()
        .application(app)
        .title(config.window.title.as_str())
        .default_width(width)
        .default_height(height)
        .decorated(false)
        .resizable(false)
        .build();

    {
        let app = app.clone();
        window.connect_destroy(move |_| app.quit());
    }

    let view = webview::build(config);

    {
        let window = window.clone();
        view.connect_close(move |_| window.destroy());
    }

    window.set_child(Some(&view));

    if config.window.fullscreen {
        window.fullscreen();
    }

    tracing::info!(width, height, "presenting window");
    window.present();
}

/// Pixel geometry of the primary monitor, read once at startup. The window
/// keeps this size for its whole lifetime.
fn primary_screen_size() -> Option<(i32, i32)> {
    let display = gdk::Display::default()?;
    let monitor = display.monitors().item(0)?.downcast::<gdk::Monitor>().ok()?;
    let geometry = monitor.geometry();
    Some((geometry.width(), geometry.height()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DisplayLink;

    struct ClosedDoorBackend;

    impl DisplayBackend for ClosedDoorBackend {
        fn name(&self) -> &'static str {
            "closed-door"
        }

        fn open(&self) -> Result<DisplayLink, DisplayError> {
            Err(DisplayError::NoDisplay)
        }
    }

    #[test]
    fn unavailable_display_aborts_before_any_window() {
        let result = try_run(Config::default(), &ClosedDoorBackend);
        assert_eq!(result, Err(DisplayError::NoDisplay));
    }
}
