//! Terminal notifier — acknowledgments on stdout, failures on stderr.

use std::cell::RefCell;
use std::io::{self, Write};

use ledbridge_app::ports::Notifier;
use ledbridge_domain::outcome::SubmitOutcome;

/// Writes one line per submission outcome.
pub struct TerminalNotifier<O, E> {
    out: RefCell<O>,
    err: RefCell<E>,
}

impl TerminalNotifier<io::Stdout, io::Stderr> {
    /// Notifier writing to the process's stdout and stderr.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> TerminalNotifier<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            out: RefCell::new(out),
            err: RefCell::new(err),
        }
    }

    /// Give back the underlying writers.
    pub fn into_inner(self) -> (O, E) {
        (self.out.into_inner(), self.err.into_inner())
    }
}

impl<O: Write, E: Write> Notifier for TerminalNotifier<O, E> {
    fn notify(&self, outcome: &SubmitOutcome) {
        let written = if outcome.is_success() {
            writeln!(self.out.borrow_mut(), "{outcome}")
        } else {
            writeln!(self.err.borrow_mut(), "{outcome}")
        };
        if let Err(err) = written {
            tracing::error!(error = %err, "failed to write acknowledgment");
        }
    }
}
