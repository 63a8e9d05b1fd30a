use crate::error::LoadError;
use crate::log::{LogContext, my_error};
use alloc::vec::Vec;

/// A trait that defines how SDO configuration failures are reported.
pub trait DiagnosticSink {
    fn report(&mut self, error: &LoadError);
}

/// A `no_std` compatible sink that discards every report.
pub struct NoOpDiagnostics;
impl DiagnosticSink for NoOpDiagnostics {
    fn report(&mut self, _error: &LoadError) {}
}

/// A sink that logs every report at error level using the `log` facade.
#[derive(Debug, Clone, Copy)]
pub struct LoggingDiagnostics {
    context: LogContext,
}

impl LoggingDiagnostics {
    /// Tags every line with the bus position of the slave being configured.
    pub const fn for_slave(position: u32) -> Self {
        Self {
            context: LogContext::sdo(position),
        }
    }
}

impl Default for LoggingDiagnostics {
    fn default() -> Self {
        Self::for_slave(0)
    }
}

impl DiagnosticSink for LoggingDiagnostics {
    fn report(&mut self, error: &LoadError) {
        my_error!(self.context, "{}", error);
    }
}

/// Accumulates reports so callers can inspect them after loading.
impl DiagnosticSink for Vec<LoadError> {
    fn report(&mut self, error: &LoadError) {
        self.push(error.clone());
    }
}

/// Adapts a closure into a sink.
pub struct FnDiagnostics<F>(pub F);
impl<F: FnMut(&LoadError)> DiagnosticSink for FnDiagnostics<F> {
    fn report(&mut self, error: &LoadError) {
        (self.0)(error)
    }
}

/// A `std`-based sink that prints reports to stderr.
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrDiagnostics;

#[cfg(feature = "std")]
impl StderrDiagnostics {
    /// The line printed for one report.
    pub fn line(error: &LoadError) -> std::string::String {
        std::format!("[SDO CONFIG ERROR]: {}", error)
    }
}
#[cfg(feature = "std")]
impl DiagnosticSink for StderrDiagnostics {
    fn report(&mut self, error: &LoadError) {
        std::eprintln!("{}", Self::line(error));
    }
}
