//! Console logging for tooltip hosts.
//!
//! The controller only emits `tracing` events; hosts that have no subscriber
//! of their own can call [`install`] to get prefixed output on stderr (and
//! logcat on Android).

use std::io::{self, Write};
use std::sync::Once;

use tracing_subscriber::fmt::writer::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const TRACING_PREFIX: &str = "[waterui::tooltip] ";
const DEFAULT_FILTER: &str = "info";

static TRACING_INSTALLED: Once = Once::new();

/// Install the global tracing subscriber (idempotent).
///
/// The filter is read from `RUST_LOG` and defaults to `info`. If another
/// subscriber is already installed this does nothing.
pub fn install() {
    TRACING_INSTALLED.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let console = fmt::layer()
            .with_writer(PrefixedWriter)
            .with_ansi(false)
            .with_target(true)
            .with_filter(filter);

        #[cfg(target_os = "android")]
        let result = {
            let registry = tracing_subscriber::registry().with(console);
            if let Ok(android) = tracing_android::layer("WaterUI") {
                registry.with(android).try_init()
            } else {
                registry.try_init()
            }
        };

        #[cfg(not(target_os = "android"))]
        let result = tracing_subscriber::registry().with(console).try_init();

        if result.is_err() {
            tracing::debug!("tracing subscriber already installed, keeping it");
        }
    });
}

// ============================================================================
// Console Output
// ============================================================================

#[derive(Clone, Copy, Default)]
struct PrefixedWriter;

impl<'a> MakeWriter<'a> for PrefixedWriter {
    type Writer = PrefixedWriterInner<io::Stderr>;

    fn make_writer(&'a self) -> Self::Writer {
        PrefixedWriterInner {
            inner: io::stderr(),
            wrote_prefix: false,
        }
    }
}

struct PrefixedWriterInner<W> {
    inner: W,
    wrote_prefix: bool,
}

impl<W: Write> Write for PrefixedWriterInner<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.wrote_prefix {
            self.inner.write_all(TRACING_PREFIX.as_bytes())?;
            self.wrote_prefix = true;
        }
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
