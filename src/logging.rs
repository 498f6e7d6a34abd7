//! Console logging for constraint installation.
//!
//! Every crate in the workspace reports through `tracing`. Installing the
//! subscriber below prints those events to stderr, prefixed so they stand out
//! from the host application's own output. The filter is read from
//! `RUST_LOG` (for example `RUST_LOG=autolayout_core=debug`) and defaults to
//! `info`.
//!
//! Relations that break an installation contract (a constant on the
//! left-hand side, a dropped view) panic. [`install_panic_logging`] routes
//! those panics through `tracing` as well.

use std::io::{self, Write};
use std::panic;
use std::sync::Once;

use tracing_subscriber::fmt::writer::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_PREFIX: &str = "[autolayout] ";
const DEFAULT_FILTER: &str = "info";

static TRACING_INSTALLED: Once = Once::new();
static PANIC_HOOK_INSTALLED: Once = Once::new();

/// Installs a global `tracing` subscriber (idempotent).
///
/// Does nothing if another global subscriber was already set.
pub fn install_tracing() {
    TRACING_INSTALLED.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let console = fmt::layer()
            .with_writer(PrefixedWriter)
            .with_ansi(false)
            .with_target(true)
            .with_filter(filter);

        if tracing_subscriber::registry().with(console).try_init().is_err() {
            eprintln!("{LOG_PREFIX}a global tracing subscriber is already installed");
        }
    });
}

/// Logs panics as `tracing` errors before running the previous hook
/// (idempotent).
pub fn install_panic_logging() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            tracing_panic::panic_hook(info);
            previous(info);
        }));
    });
}

#[derive(Debug, Clone, Copy)]
struct PrefixedWriter;

impl<'a> MakeWriter<'a> for PrefixedWriter {
    type Writer = PrefixedStderr;

    fn make_writer(&'a self) -> Self::Writer {
        PrefixedStderr {
            line_start: true,
        }
    }
}

/// Stderr writer that starts every line with [`LOG_PREFIX`].
#[derive(Debug)]
struct PrefixedStderr {
    line_start: bool,
}

impl Write for PrefixedStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut stderr = io::stderr().lock();
        for line in buf.split_inclusive(|byte| *byte == b'\n') {
            if self.line_start {
                stderr.write_all(LOG_PREFIX.as_bytes())?;
            }
            stderr.write_all(line)?;
            self.line_start = line.ends_with(b"\n");
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}
