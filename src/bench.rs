//! Calculation-time accounting
//!
//! Every piece of math that differs between the native and foreign backends
//! is run through [`BenchmarkContext::record`], so the timing log can compare
//! the two over a whole session.

use std::time::{Duration, Instant};

use crate::sim::BackendKind;

/// Owned by the app loop, borrowed mutably by whatever does backend math
#[derive(Debug)]
pub struct BenchmarkContext {
    backend: BackendKind,
    started: Instant,
    calculation: Duration,
    samples: u64,
}

impl BenchmarkContext {
    pub fn new(backend: BackendKind) -> Self {
        Self {
            backend,
            started: Instant::now(),
            calculation: Duration::ZERO,
            samples: 0,
        }
    }

    /// Run `f`, adding its wall-clock duration to the calculation total
    #[inline]
    pub fn record<T>(&mut self, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.calculation += start.elapsed();
        self.samples += 1;
        out
    }

    /// Switch the tag once the player has picked a backend in the menu.
    /// Time recorded before the switch stays in the total.
    pub fn set_backend(&mut self, backend: BackendKind) {
        self.backend = backend;
    }

    pub fn calculation_time(&self) -> Duration {
        self.calculation
    }

    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Snapshot for the timing log
    pub fn report(&self) -> RunReport {
        RunReport {
            backend: self.backend,
            execution: self.started.elapsed(),
            calculation: self.calculation,
        }
    }
}

/// What gets appended to the timing log at shutdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunReport {
    pub backend: BackendKind,
    pub execution: Duration,
    pub calculation: Duration,
}
