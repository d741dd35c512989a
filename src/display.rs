use crate::config::BackendKind;
use gtk4::gdk;
use gtk4::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    ToolkitInitFailed,
    NoDisplay,
}

impl std::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::ToolkitInitFailed => "failed to initialize the GUI toolkit",
            Self::NoDisplay => "cannot open display",
        };
        write!(f, "{message}")
    }
}

impl std::error::Error for DisplayError {}

/// Pre-flight connection to the windowing system. The native backend must
/// succeed before any window is created; the null backend skips the check
/// for environments without one.
pub trait DisplayBackend {
    fn name(&self) -> &'static str;

    fn open(&self) -> Result<DisplayLink, DisplayError>;
}

/// Handle acquired by a backend. Closed exactly once, after the event loop
/// has exited.
pub struct DisplayLink {
    display: Option<gdk::Display>,
}

impl DisplayLink {
    pub fn close(self) {
        if let Some(display) = self.display {
            tracing::info!("closing display connection");
            display.close();
        }
    }
}

pub struct NativeDisplayBackend;

impl DisplayBackend for NativeDisplayBackend {
    fn name(&self) -> &'static str {
        "native"
    }

    fn open(&self) -> Result<DisplayLink, DisplayError> {
        gtk4::init().map_err(|_| DisplayError::ToolkitInitFailed)?;
        let display = gdk::Display::default().ok_or(DisplayError::NoDisplay)?;
        Ok(DisplayLink {
            display: Some(display),
        })
    }
}

pub struct NullDisplayBackend;

impl DisplayBackend for NullDisplayBackend {
    fn name(&self) -> &'static str {
        "null"
    }

    fn open(&self) -> Result<DisplayLink, DisplayError> {
        Ok(DisplayLink { display: None })
    }
}

pub fn backend_for(kind: BackendKind) -> Box<dyn DisplayBackend> {
    match kind {
        BackendKind::Native => Box::new(NativeDisplayBackend),
        BackendKind::Null => Box::new(NullDisplayBackend),
    }
}
