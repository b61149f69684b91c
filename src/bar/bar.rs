//! The bar façade: progress mutation, line composition, and emission.

use std::io::{self, Write};
use std::sync::Arc;

use tracing::debug;

use super::config::{BarConfig, Indicator, EPILOG_SIZE, PROLOG_SIZE};
use crate::progress::{Clock, Mode, ProgressState, Widget};
use crate::style;
use crate::utils::human;

const CARRIAGE: u8 = b'\r';
const PAD: u8 = b' ';
const ELLIPSIS: &[u8] = b"...";

/// A live, single-line, redrawable progress bar.
///
/// A bar owns its progress state, its animation buffer, and the sink the
/// rendered line goes to. Every mutating operation ([`incr`](Bar::incr),
/// [`update`](Bar::update), [`complete`](Bar::complete), and writes
/// through the [`io::Write`] impl) redraws the bar and emits exactly one
/// carriage-return-prefixed line, with no trailing newline; printing the
/// final newline after [`complete`](Bar::complete) is left to the caller.
///
/// Bars are built by the [`BarBuilder`](crate::bar::BarBuilder); see the
/// builder docs for the recognized options.
pub struct Bar {
    config: BarConfig,
    state: ProgressState,
    widget: Widget,
    prolog: Vec<u8>,
    epilog: Vec<u8>,
    out: Box<dyn Write + Send>,
}

impl Bar {
    pub(crate) fn assemble(
        config: BarConfig,
        mode: Mode,
        total: i64,
        out: Box<dyn Write + Send>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let state = ProgressState::with_clock(total, clock.clone());
        let widget = Widget::new(config.width, config.space, mode, clock);
        let prolog = match config.label.as_deref() {
            Some(label) => make_prolog(label),
            None => Vec::new(),
        };
        let epilog = match config.indicator {
            Indicator::None => Vec::new(),
            _ => vec![PAD; EPILOG_SIZE],
        };
        Self {
            config,
            state,
            widget,
            prolog,
            epilog,
            out,
        }
    }

    /// Work done so far.
    pub fn current(&self) -> i64 {
        self.state.current()
    }

    /// Completed share of the run; zero when indeterminate.
    pub fn fraction(&self) -> f64 {
        self.state.fraction()
    }

    /// Whether the run has reached its target.
    pub fn done(&self) -> bool {
        self.state.done()
    }

    /// Starts a fresh run of `total` units without touching the
    /// configuration.
    pub fn reset(&mut self, total: i64) {
        debug!(total, "resetting bar");
        self.state.reset(total);
        self.widget.reset();
    }

    /// Adds `n` units of work, then redraws.
    pub fn incr(&mut self, n: i64) {
        self.state.incr(n);
        self.emit();
    }

    /// Moves the counter to `n` if that is an advance, then redraws.
    /// Lower values are silently ignored.
    pub fn update(&mut self, n: i64) {
        self.state.set(n);
        self.emit();
    }

    /// Ends the run and redraws one final, solid bar.
    ///
    /// An indeterminate run freezes its total at the counter; a
    /// determinate run snaps the counter to the total.
    pub fn complete(&mut self) {
        debug!(current = self.state.current(), "completing bar");
        self.state.complete();
        self.emit();
    }

    /// Composes one line and writes it to the sink.
    ///
    /// Sink errors are swallowed by contract; the bar has no failure path
    /// at runtime.
    fn emit(&mut self) {
        let mut line =
            Vec::with_capacity(PROLOG_SIZE + self.widget.width() + EPILOG_SIZE + 24);
        if self.state.current() > 0 {
            line.push(CARRIAGE);
        }
        self.write_prolog(&mut line);
        self.write_segment(&mut line);
        self.write_epilog(&mut line);
        let _ = self.out.write_all(&line);
        let _ = self.out.flush();
    }

    fn write_prolog(&self, line: &mut Vec<u8>) {
        if self.prolog.is_empty() {
            return;
        }
        line.extend_from_slice(&self.prolog);
        line.push(PAD);
    }

    fn write_segment(&mut self, line: &mut Vec<u8>) {
        let colored = self.config.foreground.is_some() || self.config.background.is_some();
        if let Some(color) = self.config.background {
            line.extend_from_slice(color.background().as_bytes());
        }
        if let Some(color) = self.config.foreground {
            line.extend_from_slice(color.foreground().as_bytes());
        }
        line.push(self.config.pre);
        let cells = self
            .widget
            .update(self.config.fill, self.config.arrow, &self.state);
        line.extend_from_slice(cells);
        line.push(self.config.post);
        if colored {
            line.extend_from_slice(style::RESET.as_bytes());
        }
    }

    fn write_epilog(&mut self, line: &mut Vec<u8>) {
        if self.epilog.is_empty() {
            return;
        }
        let text = match self.config.indicator {
            Indicator::None => String::new(),
            Indicator::Percent => format!("{:.2}%", self.state.fraction() * 100.0),
            Indicator::Size => human::size(self.state.current()),
            Indicator::Rate => human::rate(self.state.rate()),
            Indicator::Elapsed => human::duration(self.state.elapsed()),
            Indicator::Remaining => {
                if self.state.indeterminate() {
                    "--".to_string()
                } else {
                    human::duration(self.state.remaining())
                }
            }
        };
        self.epilog.fill(PAD);
        let bytes = text.as_bytes();
        let bytes = &bytes[bytes.len().saturating_sub(EPILOG_SIZE)..];
        self.epilog[EPILOG_SIZE - bytes.len()..].copy_from_slice(bytes);
        line.push(PAD);
        line.extend_from_slice(&self.epilog);
    }
}

/// Left-justifies a label into the fixed prolog field, marking an
/// overlong label with a trailing ellipsis.
fn make_prolog(label: &str) -> Vec<u8> {
    let mut field = vec![PAD; PROLOG_SIZE];
    let bytes = label.as_bytes();
    if bytes.len() <= PROLOG_SIZE {
        field[..bytes.len()].copy_from_slice(bytes);
    } else {
        field.copy_from_slice(&bytes[..PROLOG_SIZE]);
        field[PROLOG_SIZE - ELLIPSIS.len()..].copy_from_slice(ELLIPSIS);
    }
    field
}

impl Write for Bar {
    /// Counts the buffer as completed work.
    ///
    /// This lets a bar sit inline in a copy loop as the byte-counting
    /// destination. The write always reports full success.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.incr(buf.len() as i64);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
