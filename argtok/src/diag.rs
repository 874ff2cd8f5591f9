//! Severity-tagged diagnostics forwarded toward the process-wide log.
//!
//! The tokenizer never logs on its own. Callers that want parse conditions
//! (typically unparseable arguments) on the system log wrap a [`Sink`] into
//! a [`Journal`] and hand clones of the handle to whoever reports. The sink
//! lives as long as any handle does; there is no hidden process-global
//! state, and registration of the actual log backend happens once, at the
//! process edge, by whoever owns `main`.

use std::sync::Arc;

/// Upper bound, in bytes, of a single forwarded entry. Longer messages are
/// cut at the last character boundary below this.
pub const MAX_ENTRY_LEN: usize = 80;

/// Severity of a diagnostic entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// A hard failure; the operation did not complete.
    Error,

    /// Something suspect that the caller chose to continue past.
    Warn,

    /// A noteworthy, non-error condition.
    Notify,

    /// Development detail.
    Debug,
}

/// A destination for diagnostic entries: one write path, no batching and no
/// retries.
pub trait Sink {
    /// Forward one entry.
    fn write(&self, severity: Severity, message: &str);
}

/// Forwards entries to the `tracing` dispatcher installed for the process.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceSink;

impl Sink for TraceSink {
    fn write(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Error => tracing::error!("{message}"),
            Severity::Warn => tracing::warn!("{message}"),
            Severity::Notify => tracing::info!("{message}"),
            Severity::Debug => tracing::debug!("{message}"),
        }
    }
}

/// A cheaply clonable handle over one shared sink.
///
/// All clones write to the same sink, which is dropped when the last handle
/// goes away. Entries are clipped to [`MAX_ENTRY_LEN`] before forwarding.
#[derive(Clone)]
pub struct Journal {
    sink: Arc<dyn Sink + Send + Sync>,
}

impl Journal {
    /// Wrap a sink into a shared handle.
    pub fn new(sink: impl Sink + Send + Sync + 'static) -> Self {
        Journal {
            sink: Arc::new(sink),
        }
    }

    /// Clip the message and forward it to the sink.
    pub fn write(&self, severity: Severity, message: &str) {
        self.sink.write(severity, clip(message));
    }
}

fn clip(message: &str) -> &str {
    if message.len() <= MAX_ENTRY_LEN {
        return message;
    }

    let mut cut = MAX_ENTRY_LEN;
    while !message.is_char_boundary(cut) {
        cut -= 1;
    }
    &message[..cut]
}
