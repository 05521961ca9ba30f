//! Diagnostic log sink.
//!
//! A TUI can't log to stdout, so events go to a JSON-lines file, one file per
//! day: `<log dir>/tui-hub-YYYY-MM-DD.json`. Each line holds `timestamp`,
//! `level`, `message` and, when the event carries extra fields, `data`.
//! Write failures are dropped on the floor; logging never changes what the
//! launcher does.

use anyhow::{Context as _, Result};
use chrono::Local;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Level filter, in `EnvFilter` syntax (e.g. `TUI_HUB_LOG=debug`).
pub const LOG_FILTER_ENV: &str = "TUI_HUB_LOG";

/// Install the file logger as the global subscriber. Call once at startup.
pub fn init(log_dir: &Path) -> Result<()> {
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(JsonLogLayer::new(log_dir))
        .try_init()
        .context("Failed to install log subscriber")?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct LogRecord {
    timestamp: String,
    level: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    data: Map<String, Value>,
}

/// Appends every event as one JSON object to today's log file.
pub struct JsonLogLayer {
    dir: PathBuf,
    // Serializes writers so lines never interleave
    lock: Mutex<()>,
}

impl JsonLogLayer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            lock: Mutex::new(()),
        }
    }

    fn file_for_today(&self) -> PathBuf {
        self.dir
            .join(format!("tui-hub-{}.json", Local::now().format("%Y-%m-%d")))
    }

    fn append(&self, record: &LogRecord) {
        let Ok(line) = serde_json::to_string(record) else {
            return;
        };
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());

        if fs::create_dir_all(&self.dir).is_err() {
            return;
        }
        let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.file_for_today())
        else {
            return;
        };
        let _ = writeln!(file, "{}", line);
    }
}

impl<S: Subscriber> Layer<S> for JsonLogLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);

        let record = LogRecord {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            level: event.metadata().level().as_str(),
            message: visitor.message.unwrap_or_default(),
            data: visitor.data,
        };
        self.append(&record);
    }
}

/// Splits an event's fields into the message and the `data` map.
#[derive(Default)]
struct RecordVisitor {
    message: Option<String>,
    data: Map<String, Value>,
}

impl RecordVisitor {
    fn insert(&mut self, field: &Field, value: Value) {
        if field.name() == "message" {
            self.message = Some(match value {
                Value::String(s) => s,
                other => other.to_string(),
            });
        } else {
            self.data.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for RecordVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, Value::String(format!("{:?}", value)));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, Value::String(value.to_string()));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, Value::from(value));
    }
}
