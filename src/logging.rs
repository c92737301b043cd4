//! Diagnostics (tracing) and user-facing status messages.

use std::fmt::Display;
use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins; otherwise `default_level` (from the config file) is used.
/// Output goes to stderr so stdout carries only exported markup.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(io::stderr)
        .try_init();
}

type Sink = Box<dyn Write + Send>;

/// Where the tool writes what it has to say.
///
/// Status and error messages can be silenced independently of the markup
/// sink, which is always written.
pub struct Reporter {
    markup: Sink,
    status: Option<Sink>,
    errors: Option<Sink>,
}

impl Reporter {
    pub fn new(markup: Sink, status: Option<Sink>, errors: Option<Sink>) -> Self {
        Self {
            markup,
            status,
            errors,
        }
    }

    /// Markup and status to stdout, errors to stderr.
    pub fn console() -> Self {
        Self::new(
            Box::new(io::stdout()),
            Some(Box::new(io::stdout())),
            Some(Box::new(io::stderr())),
        )
    }

    /// Drop status and error messages from here on.
    pub fn silence(&mut self) {
        self.status = None;
        self.errors = None;
    }

    pub fn status(&mut self, message: impl Display) {
        tracing::debug!(target: "status", "{message}");
        if let Some(out) = self.status.as_mut() {
            let _ = writeln!(out, "{message}");
        }
    }

    pub fn error(&mut self, message: impl Display) {
        tracing::debug!(target: "status", "{message}");
        if let Some(err) = self.errors.as_mut() {
            let _ = writeln!(err, "{message}");
        }
    }

    /// Write exported markup as is. Never silenced.
    pub fn markup(&mut self, content: &str) -> io::Result<()> {
        self.markup.write_all(content.as_bytes())?;
        self.markup.flush()
    }
}
