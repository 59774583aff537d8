//! Routes `tracing` events from shrinkray-core to the browser console.
//!
//! The core logs each quality step at `debug`, the outcome at `info` and an
//! unreachable target at `warn`. Without a subscriber those events are
//! dropped, so [`init_logging`] installs a `tracing-subscriber` formatter
//! whose writer forwards each formatted line to the matching `console`
//! method.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Install the console subscriber. Later calls are no-ops.
pub(crate) fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(ConsoleMakeWriter)
        .without_time()
        .with_target(false)
        .with_ansi(false)
        .compact()
        .try_init();
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and logs it when dropped.
struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let Some(line) = console_line(&self.buffer) else {
            return;
        };
        let line = JsValue::from_str(&line);
        match console_method(self.level) {
            ConsoleMethod::Error => console::error_1(&line),
            ConsoleMethod::Warn => console::warn_1(&line),
            ConsoleMethod::Info => console::info_1(&line),
            ConsoleMethod::Debug => console::debug_1(&line),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

fn console_method(level: Level) -> ConsoleMethod {
    match level {
        Level::ERROR => ConsoleMethod::Error,
        Level::WARN => ConsoleMethod::Warn,
        Level::INFO => ConsoleMethod::Info,
        _ => ConsoleMethod::Debug,
    }
}

/// The formatter ends every event with a newline; the console adds its own.
fn console_line(buffer: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(buffer);
    let line = text.trim_end_matches(['\r', '\n']);
    (!line.is_empty()).then(|| line.to_string())
}
