#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use headway::{Bar, BarBuilder, Clock, Indicator};

// Common test constants
pub const TEST_WIDTH: usize = 10;
pub const TEST_TOTAL: i64 = 100;

/// A clock that only moves when a test tells it to.
#[derive(Debug)]
pub struct ManualClock {
    base: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    /// Creates a stopped clock at an arbitrary origin.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            base: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        })
    }

    /// Moves the clock forward by `d`.
    pub fn advance(&self, d: Duration) {
        *self.offset.lock().expect("clock poisoned") += d;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock().expect("clock poisoned")
    }
}

/// A cloneable in-memory sink capturing everything a bar emits.
#[derive(Debug, Clone, Default)]
pub struct SharedSink(Arc<Mutex<Vec<u8>>>);

impl SharedSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("sink poisoned")).into_owned()
    }

    /// The most recent redraw: everything after the last carriage return.
    pub fn last_line(&self) -> String {
        let text = self.text();
        text.rsplit('\r').next().unwrap_or_default().to_string()
    }

    /// Discards everything captured so far.
    pub fn clear(&self) {
        self.0.lock().expect("sink poisoned").clear();
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("sink poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Creates the builder used by most bar tests: width 10, `#` on `-`
/// between brackets, percent indicator, captured output, scripted clock.
pub fn create_test_builder(sink: &SharedSink, clock: Arc<ManualClock>) -> BarBuilder {
    BarBuilder::new()
        .width(TEST_WIDTH)
        .fill(b'#')
        .space(b'-')
        .delimiters(b'[', b']')
        .indicator(Indicator::Percent)
        .sink(sink.clone())
        .clock(clock)
}

/// Creates a regular test bar over `total` units.
pub fn create_test_bar(total: i64, sink: &SharedSink, clock: Arc<ManualClock>) -> Bar {
    create_test_builder(sink, clock)
        .build(total)
        .expect("test bar should build")
}

/// Asserts the epilog (the right-aligned tail of the line) renders `text`.
pub fn assert_epilog(line: &str, text: &str) {
    assert!(
        line.ends_with(text),
        "epilog mismatch: line {line:?} should end with {text:?}"
    );
}
