//! The `StatusWriter` trait implemented by all backend writers.

use crate::{OutputResult, StatusRow};

/// Trait implemented by the text and CSV status writers.
///
/// Errors are stored by [`StatusObserver`][crate::StatusObserver] and
/// retrieved with `take_error` after the run.
pub trait StatusWriter {
    /// Write one report: every vehicle's row for `tick`, in vehicle order.
    /// `elapsed_secs` is the simulated time at the start of `tick`.
    fn write_report(&mut self, tick: u64, elapsed_secs: u64, rows: &[StatusRow]) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
