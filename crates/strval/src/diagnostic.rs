//! Out-of-band reporting for coercion fallbacks
//!
//! A lenient decode never fails, so the only trace of a malformed field is the
//! [`Diagnostic`] handed to a [`DiagnosticSink`]. Sinks are injected:
//!
//! - explicitly, through [`Lenient::with_sink`](crate::codec::Lenient::with_sink)
//!   or [`ValueIn::value_in_with`](crate::db::ValueIn::value_in_with);
//! - per thread, with [`with_sink`], which the plain serde and database entry
//!   points pick up through [`AmbientSink`].
//!
//! Without either, records go to [`TracingSink`].
//!
//! ```rust
//! use std::sync::Arc;
//! use strval::diagnostic::{with_sink, MemorySink};
//! use strval::db::{RawValue, ValueIn};
//! use strval::Integer;
//!
//! let sink = Arc::new(MemorySink::new());
//! let mut count = Integer::default();
//! with_sink(sink.clone(), || count.value_in(RawValue::from("abc"))).unwrap();
//!
//! assert_eq!(count.value(), 0);
//! assert_eq!(sink.len(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::coerce::Kind;
use crate::error::CoerceError;

/// Where a coercion was attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// A structured-document decode (serde).
    Decode,
    /// A database read ([`ValueIn`](crate::db::ValueIn)).
    Database,
}

impl Origin {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Decode => "decode",
            Self::Database => "database",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One coercion fallback: the field resolved to its zero value because of `error`.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Wrapper that was being populated
    pub kind: Kind,
    /// Codec or database
    pub origin: Origin,
    /// Offending raw text, when the input was text
    pub value: Option<String>,
    /// Underlying cause
    pub error: CoerceError,
}

impl Diagnostic {
    pub fn new(kind: Kind, origin: Origin, value: Option<String>, error: CoerceError) -> Self {
        Self {
            kind,
            origin,
            value,
            error,
        }
    }

    /// Stable event name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        "coercion_fallback"
    }

    /// Severity. Fallbacks are always reported as errors.
    #[must_use]
    pub const fn level(&self) -> tracing::Level {
        tracing::Level::ERROR
    }

    /// Kind of input that was received, e.g. `"string"` or `"map"`.
    #[must_use]
    pub const fn found(&self) -> &'static str {
        self.error.found()
    }

    /// Human-readable summary, e.g. `invalid Integer string value`.
    pub fn message(&self) -> String {
        match (self.origin, self.value.is_some()) {
            (Origin::Decode, true) => format!("invalid {} string value", self.kind),
            (Origin::Decode, false) => {
                format!("invalid {} value: not a native or string token", self.kind)
            }
            (Origin::Database, true) => format!("invalid {} value from database", self.kind),
            (Origin::Database, false) => {
                format!("unsupported {} value type from database", self.kind)
            }
        }
    }

    /// Structured fields for log pipelines.
    pub fn data(&self) -> serde_json::Value {
        serde_json::json!({
            "kind": self.kind.as_str(),
            "origin": self.origin.as_str(),
            "value": self.value,
            "found": self.found(),
            "error": self.error.to_string(),
        })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message(), self.error)
    }
}

/// Receives coercion fallbacks
///
/// Implementations should be cheap; they run inline with the decode.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, diagnostic: &Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
    fn record(&self, diagnostic: &Diagnostic) {
        (**self).record(diagnostic);
    }
}

/// Emits each record as a `tracing` error event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, diagnostic: &Diagnostic) {
        tracing::error!(
            event = diagnostic.name(),
            kind = diagnostic.kind.as_str(),
            origin = diagnostic.origin.as_str(),
            value = diagnostic.value.as_deref().unwrap_or_default(),
            found = diagnostic.found(),
            error = %diagnostic.error,
            "{}",
            diagnostic.message()
        );
    }
}

/// Keeps every record in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records collected so far.
    pub fn records(&self) -> Vec<Diagnostic> {
        self.records.lock().clone()
    }

    /// Drain the collected records.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, diagnostic: &Diagnostic) {
        self.records.lock().push(diagnostic.clone());
    }
}

// ---------------------------------------------------------------------------
// Per-thread sink scope
// ---------------------------------------------------------------------------

thread_local! {
    static SCOPED_SINK: RefCell<Option<Arc<dyn DiagnosticSink>>> = const { RefCell::new(None) };
}

/// Restores the previous scoped sink on drop, unwinding included.
struct ScopeGuard {
    previous: Option<Arc<dyn DiagnosticSink>>,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        SCOPED_SINK.with(|slot| *slot.borrow_mut() = previous);
    }
}

/// Run `f` with `sink` receiving every diagnostic reported through
/// [`AmbientSink`] on this thread. Scopes nest; the innermost wins.
pub fn with_sink<R>(sink: Arc<dyn DiagnosticSink>, f: impl FnOnce() -> R) -> R {
    let previous = SCOPED_SINK.with(|slot| slot.borrow_mut().replace(sink));
    let _guard = ScopeGuard { previous };
    f()
}

/// The sink currently installed by [`with_sink`] on this thread, if any.
pub fn current_sink() -> Option<Arc<dyn DiagnosticSink>> {
    SCOPED_SINK.with(|slot| slot.borrow().clone())
}

/// Forwards to the scoped sink, or to [`TracingSink`] outside any scope
#[derive(Debug, Clone, Copy, Default)]
pub struct AmbientSink;

impl DiagnosticSink for AmbientSink {
    fn record(&self, diagnostic: &Diagnostic) {
        match current_sink() {
            Some(sink) => sink.record(diagnostic),
            None => TracingSink.record(diagnostic),
        }
    }
}
