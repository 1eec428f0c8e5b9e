//! Rolling Logger
//!
//! A `tracing` layer for browser apps. Every event is written to the
//! devtools console and the most recent lines stay in a circular buffer
//! that the app can read back for diagnostics.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Lines kept by [`init`]
pub const DEFAULT_CAPACITY: usize = 500;

/// One formatted log event
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>5} [{}] {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Circular buffer of recent log lines, shared between the layer and readers
#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<LogLine>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    fn guard(&self) -> MutexGuard<'_, VecDeque<LogLine>> {
        // A panic while holding the lock leaves the buffer usable
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append a line, evicting the oldest one when full
    pub fn push(&self, line: LogLine) {
        let mut lines = self.guard();
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Snapshot of the buffered lines, oldest first
    pub fn lines(&self) -> Vec<LogLine> {
        self.guard().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    pub fn clear(&self) {
        self.guard().clear();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Buffered lines as text, one per line, oldest first
    pub fn dump(&self) -> String {
        self.guard()
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Replay the buffered lines to the console as one block.
    ///
    /// Used from a panic hook, so the console shows what led up to the crash
    /// even when the live output was filtered or scrolled away.
    pub fn print_recent(&self) {
        let dump = self.dump();
        if !dump.is_empty() {
            write_console_text(
                Level::INFO,
                &format!("Last {} log lines:\n{}", self.len(), dump),
            );
        }
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

/// `tracing` layer feeding the console and a [`LogBuffer`]
pub struct RollingLayer {
    buffer: LogBuffer,
    console: bool,
}

impl RollingLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer, console: true }
    }

    /// Keep lines in the buffer only
    pub fn without_console(mut self) -> Self {
        self.console = false;
        self
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let line = LogLine {
            timestamp: Utc::now(),
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.finish(),
        };

        if self.console {
            write_console(&line);
        }
        self.buffer.push(line);
    }
}

/// Collects the `message` field first, then `key=value` pairs
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            return self.message;
        }
        let fields = self.fields.join(" ");
        if self.message.is_empty() {
            fields
        } else {
            format!("{} {}", self.message, fields)
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

fn write_console(line: &LogLine) {
    write_console_text(line.level, &line.to_string());
}

#[cfg(target_arch = "wasm32")]
fn write_console_text(level: Level, text: &str) {
    use wasm_bindgen::JsValue;

    let text = JsValue::from_str(text);
    match level {
        Level::ERROR => web_sys::console::error_1(&text),
        Level::WARN => web_sys::console::warn_1(&text),
        Level::INFO => web_sys::console::info_1(&text),
        _ => web_sys::console::debug_1(&text),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console_text(_level: Level, text: &str) {
    eprintln!("{}", text);
}

/// Install the global subscriber and return the buffer it writes to.
///
/// Installing twice is a no-op for the second call; the returned buffer
/// then receives nothing.
pub fn init(max_level: Level) -> LogBuffer {
    let buffer = LogBuffer::default();
    let layer = RollingLayer::new(buffer.clone()).with_filter(LevelFilter::from_level(max_level));
    let _ = tracing_subscriber::registry().with(layer).try_init();
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(message: &str) -> LogLine {
        LogLine {
            timestamp: Utc::now(),
            level: Level::INFO,
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_buffer_evicts_oldest() {
        let buffer = LogBuffer::with_capacity(3);
        for i in 0..5 {
            buffer.push(line(&format!("line {}", i)));
        }

        let lines = buffer.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].message, "line 2");
        assert_eq!(lines[2].message, "line 4");
    }

    #[test]
    fn test_zero_capacity_keeps_latest_line() {
        let buffer = LogBuffer::with_capacity(0);
        buffer.push(line("a"));
        buffer.push(line("b"));
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.lines()[0].message, "b");
    }

    #[test]
    fn test_layer_records_message_and_fields() {
        let buffer = LogBuffer::with_capacity(10);
        let subscriber =
            tracing_subscriber::registry().with(RollingLayer::new(buffer.clone()).without_console());

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(target: "todos", id = 7, title = "milk", "Delete failed");
        });

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].level, Level::WARN);
        assert_eq!(lines[0].target, "todos");
        assert_eq!(lines[0].message, "Delete failed id=7 title=milk");
    }

    #[test]
    fn test_level_filter_drops_debug() {
        let buffer = LogBuffer::with_capacity(10);
        let layer = RollingLayer::new(buffer.clone())
            .without_console()
            .with_filter(LevelFilter::INFO);
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("hidden");
            tracing::info!("shown");
        });

        let messages: Vec<_> = buffer.lines().into_iter().map(|l| l.message).collect();
        assert_eq!(messages, vec!["shown".to_string()]);
    }

    #[test]
    fn test_display_format() {
        let mut l = line("Loaded 3 todos");
        l.target = "todos_ui::controller".to_string();
        let text = l.to_string();
        assert!(text.ends_with(" INFO [todos_ui::controller] Loaded 3 todos"));
    }

    #[test]
    fn test_dump_joins_lines_oldest_first() {
        let buffer = LogBuffer::with_capacity(2);
        assert_eq!(buffer.dump(), "");

        buffer.push(line("first"));
        buffer.push(line("second"));
        buffer.push(line("third"));

        let dump = buffer.dump();
        let lines: Vec<_> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[test] second"));
        assert!(lines[1].ends_with("[test] third"));
    }
}
